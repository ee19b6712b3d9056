//! Boxball - a one-ball gravity sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, wall bounces, drag-to-throw)
//! - `renderer`: Draw-command encoding and the backend seam the host draws with
//!
//! The simulation never touches the renderer; each tick returns a [`sim::Frame`]
//! describing everything a backend needs to draw.

pub mod renderer;
pub mod sim;

pub use renderer::{DrawCmd, RenderBackend};
pub use sim::{Frame, SimState, TickInput, tick};

/// Fixed tuning constants
///
/// Motion constants are in pixels per frame (the simulation advances in whole
/// frames, not wall-clock time), so they only mean what they say at the target
/// tick rate.
pub mod consts {
    /// Window dimensions (pixels)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;
    /// Window caption
    pub const WINDOW_TITLE: &str = "2D Physics Ball Simulation";

    /// Target tick rate (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Box boundary: top-left corner and extent
    pub const BOX_X: f32 = 50.0;
    pub const BOX_Y: f32 = 50.0;
    pub const BOX_WIDTH: f32 = 700.0;
    pub const BOX_HEIGHT: f32 = 500.0;

    /// Ball radius
    pub const BALL_RADIUS: f32 = 20.0;
    /// Gravity acceleration (pixels/frame², added to vy each tick)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity multiplier on a wall bounce (sign-inverted on the hit axis)
    pub const RESTITUTION: f32 = 0.8;
    /// Maps drag displacement (pixels) to launch velocity (pixels/frame)
    pub const THROW_STRENGTH: f32 = 0.1;

    /// HUD text anchor for the distance readout
    pub const HUD_TEXT_POS: (f32, f32) = (20.0, 20.0);
    /// Stroke width for the box outline and the tether line
    pub const STROKE_WIDTH: f32 = 2.0;
}

/// Center of the screen: where the ball spawns and what the tether line and
/// distance readout measure from.
#[inline]
pub fn screen_center() -> glam::Vec2 {
    glam::Vec2::new(consts::WINDOW_WIDTH / 2.0, consts::WINDOW_HEIGHT / 2.0)
}
