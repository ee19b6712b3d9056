//! Backend seam between encoded frames and whatever actually draws them

use std::fmt;

use super::commands::DrawCmd;

/// Failures a backend can report per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// The drawing surface went away; the host should recreate it and retry
    SurfaceLost,
    /// No memory left for the surface; fatal
    OutOfMemory,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "drawing surface lost"),
            RenderError::OutOfMemory => write!(f, "render backend out of memory"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Something that can draw a frame's command list and flip it to the screen
pub trait RenderBackend {
    /// Draw one frame's commands, in order
    fn submit(&mut self, cmds: &[DrawCmd]) -> Result<(), RenderError>;

    /// Flip the finished frame to the screen
    fn present(&mut self) -> Result<(), RenderError>;
}

/// Backend that draws nothing: counts commands and trace-logs them. Stands in
/// for a real canvas in the demo host and in tests.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    pub commands_submitted: u64,
    pub frames_presented: u64,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderBackend for HeadlessBackend {
    fn submit(&mut self, cmds: &[DrawCmd]) -> Result<(), RenderError> {
        for cmd in cmds {
            log::trace!("draw: {cmd:?}");
        }
        self.commands_submitted += cmds.len() as u64;
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.frames_presented += 1;
        Ok(())
    }
}
