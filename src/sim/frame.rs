//! Per-tick render request
//!
//! The simulation never draws; each tick it captures what a renderer needs
//! into a [`Frame`] and hands that across the seam.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{BoxBounds, SimState};

/// Everything a backend needs to draw one tick: the ball, the box outline,
/// the tether line from screen center to the ball, and the distance readout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub bounds: BoxBounds,
    /// Tether line origin (screen center)
    pub line_from: Vec2,
    /// Tether line end (ball center)
    pub line_to: Vec2,
    /// Euclidean distance from screen center to ball center
    pub distance: f32,
    /// HUD readout, two decimal places
    pub distance_label: String,
}

impl Frame {
    /// Snapshot the renderable parts of the current state
    pub fn capture(state: &SimState) -> Self {
        let distance = state.ball.pos.distance(state.center);
        Self {
            ball_pos: state.ball.pos,
            ball_radius: state.ball.radius,
            bounds: state.bounds,
            line_from: state.center,
            line_to: state.ball.pos,
            distance,
            distance_label: format!("Distance: {distance:.2}"),
        }
    }
}
