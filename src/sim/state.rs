//! Game state and core simulation types
//!
//! `GameState` is the single owner of ball, anchor, target and phase. Pointer
//! handlers and `tick` are the only ways to mutate it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::burst::Burst;
use super::collision::Edge;
use super::launch::{can_grab, launch_velocity, project_aim};
use super::layout::Layout;
use super::tuning::Tuning;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Ball rests on (or is pulled back from) the anchor
    Aiming,
    /// Ball in flight
    Launched,
    /// Target was hit, burst playing before the next level
    Exploding,
    /// Ball left the play area; pointer-down restarts
    GameOver,
}

/// Something the presentation layer may want to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    LevelStarted { level: u32 },
    Grabbed,
    Launched { velocity: Vec2 },
    /// `at` is the target centre, where a burst should originate
    TargetHit { level: u32, at: Vec2 },
    BurstFinished,
    GameOver { level: u32, edge: Edge },
    Restarted,
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    /// Only meaningful while launched
    pub vel: Vec2,
    /// Per-tick accumulator, zero outside of an integration step
    pub acc: Vec2,
    pub radius: f32,
    /// Pointer is dragging the ball
    pub held: bool,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            radius,
            held: false,
        }
    }

    /// Put the ball back on the anchor, at rest
    pub fn reset(&mut self, anchor: Vec2) {
        self.pos = anchor;
        self.vel = Vec2::ZERO;
        self.acc = Vec2::ZERO;
        self.held = false;
    }
}

/// Top of the pole the band is tied to
///
/// Only the base point is stored; the live position sways with time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub base: Vec2,
}

impl Anchor {
    /// Anchor position at simulation tick `tick`
    pub fn at(&self, tick: u64) -> Vec2 {
        let t = tick as f32;
        Vec2::new(
            self.base.x + (t * POLE_SWAY_SPEED).sin() * POLE_SWAY_AMOUNT,
            self.base.y + (t * ANCHOR_BOB_SPEED).cos() * ANCHOR_BOB_AMOUNT,
        )
    }
}

/// Axis-aligned target box (position is the top-left corner)
#[derive(Debug, Clone)]
pub struct Target {
    pub pos: Vec2,
    pub size: Vec2,
    /// Where this level placed the target; used when motion bounds collapse
    pub initial_pos: Vec2,
}

impl Target {
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Seed plus a draw counter; each level and burst gets its own generator
#[derive(Debug, Clone)]
pub struct RngState {
    pub seed: u64,
    /// Generators handed out so far
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    /// Fresh generator for the next placement or burst
    pub fn next_rng(&mut self) -> Pcg32 {
        let seed = self.seed.wrapping_add(self.draws.wrapping_mul(2654435761));
        self.draws += 1;
        Pcg32::seed_from_u64(seed)
    }
}

/// Uniform sample in `[min, max)`, or `min` when the range is empty
fn sample_range(rng: &mut Pcg32, min: f32, max: f32) -> f32 {
    if max > min { rng.random_range(min..max) } else { min }
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    pub seed: u64,
    pub rng_state: RngState,
    pub tuning: Tuning,
    pub layout: Layout,
    pub phase: GamePhase,
    /// Targets hit this run
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ball: Ball,
    pub anchor: Anchor,
    pub target: Target,
    /// Last known pointer position (surface-local)
    pub pointer: Vec2,
    /// Hit celebration particles (not gameplay-affecting)
    pub burst: Burst,
    /// Pending events for the presentation layer
    pub events: Vec<GameEvent>,
    /// Fallback warning already logged for this level
    pub(crate) fallback_warned: bool,
}

impl GameState {
    /// New run on a `width` x `height` surface, level 0, ready to aim
    pub fn new(seed: u64, width: f32, height: f32, tuning: Tuning) -> Self {
        let layout = Layout::for_surface(width, height, &tuning);
        let anchor = Anchor {
            base: layout.anchor_base(),
        };
        let mut state = Self {
            seed,
            rng_state: RngState::new(seed),
            tuning,
            phase: GamePhase::Aiming,
            level: 0,
            time_ticks: 0,
            ball: Ball::new(anchor.at(0), layout.ball_radius),
            anchor,
            target: Target {
                pos: Vec2::ZERO,
                size: layout.target_size,
                initial_pos: Vec2::ZERO,
            },
            layout,
            pointer: Vec2::ZERO,
            burst: Burst::default(),
            events: Vec::new(),
            fallback_warned: false,
        };

        state.setup_level();

        state
    }

    /// Current anchor position
    pub fn anchor_pos(&self) -> Vec2 {
        self.anchor.at(self.time_ticks)
    }

    /// Place a fresh target and put the ball back on the anchor
    pub fn setup_level(&mut self) {
        let mut rng = self.rng_state.next_rng();
        let placement = self.layout.placement;
        let pos = Vec2::new(
            sample_range(&mut rng, placement.min.x, placement.max.x),
            sample_range(&mut rng, placement.min.y, placement.max.y),
        );

        self.target.size = self.layout.target_size;
        self.target.initial_pos = pos;
        self.target.pos = pos;

        let anchor = self.anchor_pos();
        self.ball.radius = self.layout.ball_radius;
        self.ball.reset(anchor);

        self.burst = Burst::default();
        self.fallback_warned = false;
        self.phase = GamePhase::Aiming;
        self.events.push(GameEvent::LevelStarted { level: self.level });

        log::debug!("Target placed at ({:.1}, {:.1})", pos.x, pos.y);
        log::info!("Level {} ready", self.level + 1);
    }

    /// Pointer pressed at `pos`
    pub fn pointer_down(&mut self, pos: Vec2) {
        self.pointer = pos;
        match self.phase {
            GamePhase::Aiming => {
                let anchor = self.anchor_pos();
                if !self.ball.held
                    && can_grab(pos, anchor, self.ball.radius, self.tuning.grab_radius_factor)
                {
                    self.ball.held = true;
                    self.ball.pos = project_aim(pos, anchor, self.layout.max_stretch);
                    self.events.push(GameEvent::Grabbed);
                }
            }
            GamePhase::GameOver => self.restart(),
            GamePhase::Launched | GamePhase::Exploding => {}
        }
    }

    /// Pointer moved to `pos`
    pub fn pointer_move(&mut self, pos: Vec2) {
        self.pointer = pos;
        if self.phase == GamePhase::Aiming && self.ball.held {
            self.ball.pos = project_aim(pos, self.anchor_pos(), self.layout.max_stretch);
        }
    }

    /// Pointer released; fires the ball if it was held
    pub fn pointer_up(&mut self) {
        if self.phase != GamePhase::Aiming || !self.ball.held {
            return;
        }

        let anchor = self.anchor_pos();
        let velocity = launch_velocity(anchor, self.ball.pos, &self.tuning, self.layout.scale);
        self.ball.held = false;
        self.ball.vel = velocity;
        self.ball.acc = Vec2::ZERO;
        self.phase = GamePhase::Launched;
        self.events.push(GameEvent::Launched { velocity });

        log::info!(
            "Launched: scale={:.2} v=({:.2}, {:.2})",
            self.layout.scale.0,
            velocity.x,
            velocity.y
        );
    }

    /// Back to level 0 after a game over
    pub fn restart(&mut self) {
        log::info!("Restarting from level {}", self.level + 1);
        self.level = 0;
        self.events.push(GameEvent::Restarted);
        self.setup_level();
    }

    /// Surface changed size: recompute the layout and set up the current level again
    ///
    /// A finished run stays frozen; ball and target are only rescaled.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            log::error!("Ignoring resize to {}x{}", width, height);
            return;
        }
        let old_surface = self.layout.surface();
        self.layout = Layout::for_surface(width, height, &self.tuning);
        self.anchor.base = self.layout.anchor_base();

        if self.phase == GamePhase::GameOver {
            let ratio = self.layout.surface() / old_surface;
            self.ball.pos *= ratio;
            self.ball.radius = self.layout.ball_radius;
            self.target.pos *= ratio;
            self.target.initial_pos *= ratio;
            self.target.size = self.layout.target_size;
            return;
        }

        self.setup_level();
    }

    /// Ball touched the target
    pub(crate) fn on_target_hit(&mut self) {
        self.level = self.level.saturating_add(1);
        let at = self.target.center();
        self.events.push(GameEvent::TargetHit {
            level: self.level,
            at,
        });
        log::info!("Target hit! Advancing to level {}", self.level + 1);

        if self.tuning.hit_celebration {
            let mut rng = self.rng_state.next_rng();
            self.burst = Burst::spawn(
                at,
                self.tuning.burst_particles,
                self.tuning.burst_lifespan_ticks,
                BURST_SPEED * self.layout.scale.0,
                &mut rng,
            );
            self.phase = GamePhase::Exploding;
        } else {
            self.setup_level();
        }
    }

    /// Ball crossed an enabled edge
    pub(crate) fn on_border_hit(&mut self, edge: Edge) {
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver {
            level: self.level,
            edge,
        });
        log::info!("Hit border ({:?}) on level {}", edge, self.level + 1);
    }

    /// Take the events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
