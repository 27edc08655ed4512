//! Responsive layout derived from the surface size
//!
//! Everything that depends on how big the canvas is gets recomputed here in
//! one go on resize, then swapped into the game state whole.

use glam::Vec2;

use super::tuning::{PhysicsScale, Tuning};
use crate::consts::*;

/// Axis-aligned range the target's top-left corner moves within
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl MoveBounds {
    /// True when either axis has no room (`max <= min`)
    pub fn is_degenerate(&self) -> bool {
        !(self.max.x > self.min.x && self.max.y > self.min.y)
    }

    /// Linear map of two `[0, 1]` factors into the bounds
    pub fn lerp(&self, fx: f32, fy: f32) -> Vec2 {
        Vec2::new(
            crate::remap(fx, 0.0, 1.0, self.min.x, self.max.x),
            crate::remap(fy, 0.0, 1.0, self.min.y, self.max.y),
        )
    }
}

/// Sizes and positions for one surface size
#[derive(Debug, Clone)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub scale: PhysicsScale,
    pub ball_radius: f32,
    pub target_size: Vec2,
    /// Maximum pull distance in pixels
    pub max_stretch: f32,
    pub pole_base_x: f32,
    pub pole_height: f32,
    pub pole_thickness: f32,
    /// Vertical offset of the anchor from the pole top
    pub anchor_offset: f32,
    pub border_weight: f32,
    /// Range the target oscillates within
    pub target_bounds: MoveBounds,
    /// Range the target's starting position is drawn from each level
    pub placement: MoveBounds,
}

impl Layout {
    pub fn for_surface(width: f32, height: f32, tuning: &Tuning) -> Self {
        let scale = PhysicsScale::for_width(width);
        let sf = scale.0;

        let ball_radius = (BASE_BALL_RADIUS * sf).max(MIN_BALL_RADIUS);
        let target_size = Vec2::splat((BASE_TARGET_SIZE * sf).max(1.0));
        let pole_height = height * 0.2;
        let pole_base_x = width * 0.15;

        let target_bounds = MoveBounds {
            min: Vec2::new(width * 0.35, height * 0.1),
            max: Vec2::new(
                width * 0.9 - target_size.x,
                (height * 0.6).min(height - pole_height - target_size.y - 20.0),
            ),
        };

        let mut placement = MoveBounds {
            min: Vec2::new(pole_base_x + width * 0.25, height * 0.15),
            max: Vec2::new(
                width - target_size.x - width * 0.1,
                height - pole_height - target_size.y - height * 0.15,
            ),
        };
        if placement.min.x >= placement.max.x {
            placement.min.x = width * 0.5;
            placement.max.x = width - target_size.x - width * 0.05;
        }

        let layout = Self {
            width,
            height,
            scale,
            ball_radius,
            target_size,
            max_stretch: (tuning.max_stretch * sf).max(f32::EPSILON),
            pole_base_x,
            pole_height,
            pole_thickness: (BASE_POLE_THICKNESS * sf).max(MIN_POLE_THICKNESS),
            anchor_offset: BASE_POLE_ANCHOR_OFFSET * sf,
            border_weight: (BASE_BORDER_WEIGHT * sf).max(1.0),
            target_bounds,
            placement,
        };

        log::info!(
            "Layout {}x{}: scale={:.2} ball_r={:.1} target={:.1} stretch={:.1}",
            width,
            height,
            sf,
            layout.ball_radius,
            layout.target_size.x,
            layout.max_stretch,
        );

        layout
    }

    pub fn surface(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Anchor position before sway and bob
    pub fn anchor_base(&self) -> Vec2 {
        Vec2::new(
            self.pole_base_x,
            self.height - self.pole_height + self.anchor_offset,
        )
    }

    /// Top of the visible pole
    pub fn pole_top(&self) -> Vec2 {
        Vec2::new(self.pole_base_x, self.height - self.pole_height)
    }
}

/// Largest 3:2 canvas that fits the window
pub fn fit_canvas(window_w: f32, window_h: f32) -> (u32, u32) {
    let ratio = window_w / window_h.max(1.0);
    let (w, h) = if ratio > TARGET_ASPECT_RATIO {
        (window_h * TARGET_ASPECT_RATIO, window_h)
    } else {
        (window_w, window_w / TARGET_ASPECT_RATIO)
    };
    let w = w.max(MIN_CANVAS_WIDTH);
    let h = h.max(MIN_CANVAS_WIDTH / TARGET_ASPECT_RATIO);
    (w.floor() as u32, h.floor() as u32)
}
