//! Fixed per-frame simulation tick
//!
//! One call advances the game by exactly one frame. Within a tick the order
//! is fixed: pointer input, target motion, then aiming or flight or burst.

use glam::Vec2;

use super::collision::{ball_border_collision, ball_rect_collision};
use super::launch::{integrate, project_aim};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{TARGET_MOVE_SPEED_X, TARGET_MOVE_SPEED_Y};
use crate::{unit_cos, unit_sin};

/// Pointer input gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer pressed at this position
    pub pointer_down: Option<Vec2>,
    /// Latest pointer position while dragging
    pub pointer_move: Option<Vec2>,
    /// Pointer released
    pub pointer_up: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if let Some(pos) = input.pointer_down {
        state.pointer_down(pos);
    }
    if let Some(pos) = input.pointer_move {
        state.pointer_move(pos);
    }
    if input.pointer_up {
        state.pointer_up();
    }

    state.time_ticks += 1;

    // Target freezes once the run is over
    if state.phase != GamePhase::GameOver {
        update_target(state);
    }

    match state.phase {
        GamePhase::Aiming => update_aim(state),
        GamePhase::Launched => {
            update_flight(state);
            resolve_collisions(state);
        }
        GamePhase::Exploding => update_burst(state),
        GamePhase::GameOver => {}
    }
}

/// Slide the target along its two oscillators
fn update_target(state: &mut GameState) {
    if !state.tuning.target_motion {
        return;
    }

    let bounds = state.layout.target_bounds;
    if bounds.is_degenerate() {
        state.target.pos = state.target.initial_pos;
        if !state.fallback_warned {
            log::warn!("Target bounds collapsed, holding initial position");
            state.fallback_warned = true;
        }
        return;
    }

    let t = state.time_ticks as f32;
    let fx = unit_sin(t * TARGET_MOVE_SPEED_X);
    let fy = unit_cos(t * TARGET_MOVE_SPEED_Y);
    state.target.pos = bounds.lerp(fx, fy);
}

/// Ball follows the pointer while held, otherwise rides the anchor
fn update_aim(state: &mut GameState) {
    let anchor = state.anchor_pos();
    state.ball.pos = if state.ball.held {
        project_aim(state.pointer, anchor, state.layout.max_stretch)
    } else {
        anchor
    };
}

fn update_flight(state: &mut GameState) {
    let ball = &mut state.ball;
    integrate(
        &mut ball.pos,
        &mut ball.vel,
        &mut ball.acc,
        state.tuning.gravity,
        state.tuning.friction,
    );
}

/// Target first, so a hit on the way out still counts
fn resolve_collisions(state: &mut GameState) {
    if ball_rect_collision(
        state.ball.pos,
        state.ball.radius,
        state.target.pos,
        state.target.size,
    ) {
        state.on_target_hit();
        return;
    }

    if let Some(edge) = ball_border_collision(
        state.ball.pos,
        state.ball.radius,
        state.layout.surface(),
        &state.tuning.border_rules,
    ) {
        state.on_border_hit(edge);
    }
}

fn update_burst(state: &mut GameState) {
    state.burst.update();
    if state.burst.is_finished() {
        state.events.push(GameEvent::BurstFinished);
        state.setup_level();
    }
}
