//! Slingshot - pull the ball back, let go, hit the moving target
//!
//! Core modules:
//! - `sim`: Deterministic simulation (aiming, launch physics, collisions, game state)
//! - `renderer`: WebGPU rendering of a simulation snapshot
//! - `platform`: Input adapter and render surface seams

pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use error::TuningError;
pub use sim::{GameState, Snapshot, Tuning};

/// Game configuration constants
pub mod consts {
    /// Reference resolution the base sizes are designed for (3:2)
    pub const REF_WIDTH: f32 = 960.0;
    pub const REF_HEIGHT: f32 = 640.0;
    pub const TARGET_ASPECT_RATIO: f32 = REF_WIDTH / REF_HEIGHT;

    /// Base sizes at the reference width
    pub const BASE_BALL_RADIUS: f32 = 20.0;
    pub const MIN_BALL_RADIUS: f32 = 5.0;
    pub const BASE_POLE_THICKNESS: f32 = 7.0;
    pub const MIN_POLE_THICKNESS: f32 = 2.0;
    pub const BASE_POLE_ANCHOR_OFFSET: f32 = -8.0;
    pub const BASE_TARGET_SIZE: f32 = 50.0;
    pub const BASE_MAX_STRETCH: f32 = 140.0;
    pub const BASE_BORDER_WEIGHT: f32 = 2.0;

    /// Launch power before scale correction
    pub const BASE_LAUNCH_MULTIPLIER: f32 = 0.7;
    /// Floor on the scale factor used for launch correction (tiny surfaces)
    pub const MIN_SCALE_FACTOR_FOR_LAUNCH: f32 = 0.4;
    pub const ELASTIC_FORCE: f32 = 0.4;
    pub const GRAVITY: f32 = 0.6;
    pub const FRICTION: f32 = 0.988;
    /// Grab succeeds within this many ball radii of the anchor
    pub const GRAB_RADIUS_FACTOR: f32 = 3.5;

    /// Pole sway / anchor bob (per tick)
    pub const POLE_SWAY_SPEED: f32 = 0.02;
    pub const POLE_SWAY_AMOUNT: f32 = 1.5;
    pub const ANCHOR_BOB_SPEED: f32 = 0.04;
    pub const ANCHOR_BOB_AMOUNT: f32 = 1.0;

    /// Target oscillator speeds (radians per tick)
    pub const TARGET_MOVE_SPEED_X: f32 = 0.015;
    pub const TARGET_MOVE_SPEED_Y: f32 = 0.011;

    /// Hit celebration burst
    pub const BURST_PARTICLES: u32 = 40;
    pub const BURST_LIFESPAN_TICKS: u32 = 45;
    pub const BURST_DRAG: f32 = 0.96;
    /// Initial particle speed at the reference width (pixels per tick)
    pub const BURST_SPEED: f32 = 4.0;

    /// Smallest canvas width produced by `fit_canvas`
    pub const MIN_CANVAS_WIDTH: f32 = 100.0;
}

/// Map `value` from `[in_min, in_max]` onto `[out_min, out_max]`
#[inline]
pub fn remap(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) / (in_max - in_min) * (out_max - out_min)
}

/// Oscillator in `[0, 1]` driven by `sin`
#[inline]
pub fn unit_sin(phase: f32) -> f32 {
    (phase.sin() + 1.0) / 2.0
}

/// Oscillator in `[0, 1]` driven by `cos`
#[inline]
pub fn unit_cos(phase: f32) -> f32 {
    (phase.cos() + 1.0) / 2.0
}
