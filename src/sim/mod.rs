//! Deterministic simulation module
//!
//! All simulation logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Input arrives as explicit per-tick event batches
//! - No rendering or platform dependencies

pub mod collision;
pub mod frame;
pub mod state;
pub mod tick;

pub use collision::{WallHits, collide_walls};
pub use frame::Frame;
pub use state::{Ball, BoxBounds, DragState, SimState};
pub use tick::{PointerButton, PointerEvent, TickInput, tick};
