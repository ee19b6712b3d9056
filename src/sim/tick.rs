//! Fixed timestep simulation tick
//!
//! Advances the world one frame: consume pointer events, integrate unless a
//! drag is holding the ball, bounce off the box, and emit the render request.

use glam::Vec2;

use super::collision::collide_walls;
use super::frame::Frame;
use super::state::{DragState, SimState};
use crate::consts::*;

/// Pointer button identifier; only [`PointerButton::Primary`] interacts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// A discrete pointer event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { button: PointerButton, pos: Vec2 },
    Up { button: PointerButton, pos: Vec2 },
}

impl PointerEvent {
    /// Primary-button press
    pub fn down(pos: Vec2) -> Self {
        Self::Down {
            button: PointerButton::Primary,
            pos,
        }
    }

    /// Primary-button release
    pub fn up(pos: Vec2) -> Self {
        Self::Up {
            button: PointerButton::Primary,
            pos,
        }
    }
}

/// Input for a single tick: the pointer events that arrived since the last
/// one, in arrival order. Quit is handled by the host and never reaches the
/// simulation.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<PointerEvent>,
}

/// Advance the simulation by one frame and return the render request.
///
/// `dt` paces the host loop; motion itself advances in fixed per-frame units
/// regardless of its value.
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) -> Frame {
    let _ = dt;

    for event in &input.events {
        apply_pointer_event(state, event);
    }

    // While a drag is armed the ball is anchored: no gravity, no motion.
    // It does not follow the pointer; release is what throws it.
    if !state.drag.is_dragging() {
        state.ball.vel.y += GRAVITY;
        state.ball.pos += state.ball.vel;
    }

    collide_walls(&mut state.ball, &state.bounds, RESTITUTION);

    state.time_ticks += 1;
    Frame::capture(state)
}

fn apply_pointer_event(state: &mut SimState, event: &PointerEvent) {
    match *event {
        PointerEvent::Down { button, pos } => {
            // A second press while dragging must not rewrite the drag start
            if button != PointerButton::Primary || state.drag.is_dragging() {
                return;
            }
            if pos.distance(state.ball.pos) <= state.ball.radius {
                state.drag = DragState::Dragging { start: pos };
            }
        }
        PointerEvent::Up { button, pos } => {
            if button != PointerButton::Primary {
                return;
            }
            if let DragState::Dragging { start } = state.drag {
                state.ball.vel = (pos - start) * THROW_STRENGTH;
                state.drag = DragState::Idle;
            }
        }
    }
}
