//! Read-only view of the game published to the presentation layer each tick

use glam::Vec2;
use serde::Serialize;

use super::launch::stretch_ratio;
use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    /// Remaining life in `[0, 1]`
    pub life: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub surface: Vec2,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub ball_held: bool,
    pub target_pos: Vec2,
    pub target_size: Vec2,
    pub anchor: Vec2,
    /// Bottom and top of the pole
    pub pole_base: Vec2,
    pub pole_top: Vec2,
    pub pole_thickness: f32,
    pub border_weight: f32,
    /// Scale relative to the reference width, for sizing decorations
    pub scale: f32,
    pub phase: GamePhase,
    pub level: u32,
    /// Band pull as a fraction of the maximum stretch
    pub stretch_ratio: f32,
    pub particles: Vec<ParticleView>,
    pub time_ticks: u64,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        let anchor = self.anchor_pos();
        let layout = &self.layout;
        let pole_top = layout.pole_top();
        Snapshot {
            surface: layout.surface(),
            ball_pos: self.ball.pos,
            ball_radius: self.ball.radius,
            ball_held: self.ball.held,
            target_pos: self.target.pos,
            target_size: self.target.size,
            anchor,
            pole_base: Vec2::new(pole_top.x, layout.height),
            pole_top,
            pole_thickness: layout.pole_thickness,
            border_weight: layout.border_weight,
            scale: layout.scale.0,
            phase: self.phase,
            level: self.level,
            stretch_ratio: stretch_ratio(self.ball.pos, anchor, layout.max_stretch),
            particles: self
                .burst
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    life: p.life(),
                })
                .collect(),
            time_ticks: self.time_ticks,
        }
    }
}

impl Snapshot {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
