//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod burst;
pub mod collision;
pub mod launch;
pub mod layout;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod tuning;

pub use burst::{Burst, BurstParticle};
pub use collision::{Edge, ball_border_collision, ball_rect_collision};
pub use launch::{can_grab, integrate, launch_velocity, project_aim, stretch_ratio};
pub use layout::{Layout, MoveBounds, fit_canvas};
pub use snapshot::{ParticleView, Snapshot};
pub use state::{Anchor, Ball, GameEvent, GamePhase, GameState, RngState, Target};
pub use tick::{TickInput, tick};
pub use tuning::{BorderRules, PhysicsScale, ScaleCorrection, Tuning};
