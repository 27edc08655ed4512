//! Launch and aim parameters
//!
//! Fixed for the lifetime of a run. Every constant that drifted between
//! builds of the game lives here so one core can reproduce any of them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// How launch power is corrected for the display scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScaleCorrection {
    /// `base / scale`
    #[default]
    Linear,
    /// `base / sqrt(scale)`
    Sqrt,
    /// Fixed logical resolution, no correction
    None,
}

/// Which screen edges end the run when the ball touches them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderRules {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Default for BorderRules {
    fn default() -> Self {
        Self::all()
    }
}

impl BorderRules {
    pub const fn all() -> Self {
        Self {
            left: true,
            right: true,
            top: true,
            bottom: true,
        }
    }

    /// Ball falls through the floor instead of losing
    pub const fn open_floor() -> Self {
        Self {
            bottom: false,
            ..Self::all()
        }
    }
}

/// Display scale factor relative to the reference width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsScale(pub f32);

impl Default for PhysicsScale {
    fn default() -> Self {
        Self(1.0)
    }
}

impl PhysicsScale {
    /// Scale of a surface `width` pixels wide
    pub fn for_width(width: f32) -> Self {
        Self(width / REF_WIDTH)
    }

    /// Launch multiplier that keeps the slingshot feeling the same at this scale
    pub fn launch_multiplier(self, tuning: &Tuning) -> f32 {
        let effective = self.0.max(tuning.min_launch_scale);
        match tuning.scale_correction {
            ScaleCorrection::Linear => tuning.base_launch_multiplier / effective,
            ScaleCorrection::Sqrt => tuning.base_launch_multiplier / effective.sqrt(),
            ScaleCorrection::None => tuning.base_launch_multiplier,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Spring constant applied to the stretch at release
    pub elastic_force: f32,
    /// Maximum pull distance at the reference width
    pub max_stretch: f32,
    pub base_launch_multiplier: f32,
    /// Floor applied to the scale before correcting launch power
    pub min_launch_scale: f32,
    pub scale_correction: ScaleCorrection,
    /// Added to acceleration every tick
    pub gravity: Vec2,
    /// Velocity multiplier per tick, in (0, 1]
    pub friction: f32,
    /// Grab radius in multiples of the ball radius
    pub grab_radius_factor: f32,
    pub border_rules: BorderRules,
    /// Oscillate the target inside its bounds
    pub target_motion: bool,
    /// Play a particle burst before advancing to the next level
    pub hit_celebration: bool,
    pub burst_particles: u32,
    pub burst_lifespan_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            elastic_force: ELASTIC_FORCE,
            max_stretch: BASE_MAX_STRETCH,
            base_launch_multiplier: BASE_LAUNCH_MULTIPLIER,
            min_launch_scale: MIN_SCALE_FACTOR_FOR_LAUNCH,
            scale_correction: ScaleCorrection::Linear,
            gravity: Vec2::new(0.0, GRAVITY),
            friction: FRICTION,
            grab_radius_factor: GRAB_RADIUS_FACTOR,
            border_rules: BorderRules::all(),
            target_motion: true,
            hit_celebration: false,
            burst_particles: BURST_PARTICLES,
            burst_lifespan_ticks: BURST_LIFESPAN_TICKS,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("elastic_force", self.elastic_force),
            ("max_stretch", self.max_stretch),
            ("base_launch_multiplier", self.base_launch_multiplier),
            ("min_launch_scale", self.min_launch_scale),
            ("grab_radius_factor", self.grab_radius_factor),
        ];
        for (field, value) in positive {
            if value <= 0.0 || !value.is_finite() {
                return Err(TuningError::OutOfRange { field, value });
            }
        }
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(TuningError::OutOfRange {
                field: "friction",
                value: self.friction,
            });
        }
        if !self.gravity.is_finite() {
            return Err(TuningError::OutOfRange {
                field: "gravity",
                value: self.gravity.length(),
            });
        }
        Ok(())
    }

    /// Tuning override from the canvas `data-tuning` attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("canvas"))
            .and_then(|c| c.get_attribute("data-tuning"));

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning override");
                    return tuning;
                }
                Err(e) => log::warn!("Ignoring tuning override: {}", e),
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "max_stretch": 160.0, "friction": 0.985 }"#).unwrap();
        assert_eq!(tuning.max_stretch, 160.0);
        assert_eq!(tuning.friction, 0.985);
        assert_eq!(tuning.elastic_force, ELASTIC_FORCE);
        assert_eq!(tuning.border_rules, BorderRules::all());
    }

    #[test]
    fn test_from_json_rejects_bad_friction() {
        let err = Tuning::from_json(r#"{ "friction": 1.2 }"#).unwrap_err();
        assert_eq!(
            err,
            TuningError::OutOfRange {
                field: "friction",
                value: 1.2
            }
        );
    }

    #[test]
    fn test_from_json_rejects_zero_stretch() {
        let err = Tuning::from_json(r#"{ "max_stretch": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::OutOfRange {
                field: "max_stretch",
                ..
            }
        ));
    }

    #[test]
    fn test_from_json_garbage() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_json_roundtrip_open_floor() {
        let tuning = Tuning {
            border_rules: BorderRules::open_floor(),
            scale_correction: ScaleCorrection::Sqrt,
            ..Default::default()
        };
        let back = Tuning::from_json(&tuning.to_json()).unwrap();
        assert_eq!(back, tuning);
    }

    #[test]
    fn test_launch_multiplier_linear() {
        let tuning = Tuning::default();
        let m = PhysicsScale(2.0).launch_multiplier(&tuning);
        assert!((m - BASE_LAUNCH_MULTIPLIER / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_launch_multiplier_floor() {
        // Tiny surfaces are clamped so the ball isn't fired into orbit
        let tuning = Tuning::default();
        let tiny = PhysicsScale(0.1).launch_multiplier(&tuning);
        let floor = PhysicsScale(MIN_SCALE_FACTOR_FOR_LAUNCH).launch_multiplier(&tuning);
        assert_eq!(tiny, floor);
    }

    #[test]
    fn test_launch_multiplier_sqrt_and_none() {
        let sqrt = Tuning {
            scale_correction: ScaleCorrection::Sqrt,
            ..Default::default()
        };
        let m = PhysicsScale(4.0).launch_multiplier(&sqrt);
        assert!((m - BASE_LAUNCH_MULTIPLIER / 2.0).abs() < 1e-6);

        let none = Tuning {
            scale_correction: ScaleCorrection::None,
            ..Default::default()
        };
        assert_eq!(PhysicsScale(4.0).launch_multiplier(&none), BASE_LAUNCH_MULTIPLIER);
    }
}
