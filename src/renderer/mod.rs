//! Rendering seam
//!
//! The simulation emits [`crate::sim::Frame`]s; [`encode_frame`] turns one
//! into an ordered draw-command list and a [`RenderBackend`] consumes it.
//! Window and GPU specifics live entirely behind the trait.

pub mod backend;
pub mod commands;

pub use backend::{HeadlessBackend, RenderBackend, RenderError};
pub use commands::{Color, DrawCmd, encode_frame, palette};
