//! Simulation state and core types
//!
//! Everything needed to snapshot and resume a run lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::screen_center;

/// The ball: a filled circle with per-frame velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in pixels per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Spawn at screen center, at rest
    pub fn new() -> Self {
        Self {
            pos: screen_center(),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// The immutable axis-aligned box the ball lives in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxBounds {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl BoxBounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Check that a circle of the given radius at `center` sits fully inside
    /// the box (the post-collision invariant)
    pub fn contains_ball(&self, center: Vec2, radius: f32) -> bool {
        center.x >= self.left() + radius
            && center.x <= self.right() - radius
            && center.y >= self.top() + radius
            && center.y <= self.bottom() - radius
    }
}

impl Default for BoxBounds {
    fn default() -> Self {
        Self::new(BOX_X, BOX_Y, BOX_WIDTH, BOX_HEIGHT)
    }
}

/// Drag state machine: a press inside the ball arms a throw, release fires it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragState {
    /// No drag in progress; the ball is under physics
    Idle,
    /// Pointer went down inside the ball at `start`; integration is suspended
    /// until release
    Dragging { start: Vec2 },
}

impl DragState {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub ball: Ball,
    pub bounds: BoxBounds,
    pub drag: DragState,
    /// Screen center: tether line origin and distance-readout reference
    pub center: Vec2,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SimState {
    pub fn new() -> Self {
        Self {
            ball: Ball::new(),
            bounds: BoxBounds::default(),
            drag: DragState::Idle,
            center: screen_center(),
            time_ticks: 0,
        }
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}
