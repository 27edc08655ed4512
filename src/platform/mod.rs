//! Platform abstraction layer
//!
//! The simulation only sees these two seams:
//! - `InputQueue`: browser pointer events folded into one `TickInput` per frame
//! - `Surface`: pixel size of whatever is being drawn to

use glam::Vec2;

use crate::sim::TickInput;

/// Pointer event in surface-local pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up,
}

/// Drawable area the game is laid out against
pub trait Surface {
    fn size(&self) -> (u32, u32);

    fn size_f32(&self) -> Vec2 {
        let (w, h) = self.size();
        Vec2::new(w as f32, h as f32)
    }
}

/// Buffers pointer events that arrive between animation frames
///
/// Keeps the first press, the latest move after it and whether a release
/// happened.
/// A press that arrives after a release in the same frame starts the next
/// frame's input so a fast double click isn't collapsed into one.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: TickInput,
    carry: Option<TickInput>,
}

fn apply(input: &mut TickInput, event: PointerEvent) {
    match event {
        PointerEvent::Down(pos) => {
            // Hover before the press must not be replayed as a drag
            if input.pointer_down.is_none() {
                input.pointer_down = Some(pos);
                input.pointer_move = None;
            }
        }
        PointerEvent::Move(pos) => input.pointer_move = Some(pos),
        PointerEvent::Up => input.pointer_up = true,
    }
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PointerEvent) {
        if let Some(carry) = &mut self.carry {
            apply(carry, event);
            return;
        }
        let busy = self.pending.pointer_up || self.pending.pointer_down.is_some();
        match event {
            PointerEvent::Down(_) if busy => {
                let mut carry = TickInput::default();
                apply(&mut carry, event);
                self.carry = Some(carry);
            }
            _ => apply(&mut self.pending, event),
        }
    }

    /// Input for the next tick; clears one-shot state
    pub fn take(&mut self) -> TickInput {
        let input = std::mem::take(&mut self.pending);
        if let Some(carry) = self.carry.take() {
            self.pending = carry;
        }
        input
    }

    pub fn is_empty(&self) -> bool {
        self.pending.pointer_down.is_none()
            && self.pending.pointer_move.is_none()
            && !self.pending.pointer_up
            && self.carry.is_none()
    }
}
