//! Rendering seam
//!
//! Drawing is a read-only pass over the timeline. The core never asks the
//! renderer anything back.

use crate::error::Result;
use crate::sim::Timeline;

pub trait Renderer {
    fn draw(&mut self, timeline: &Timeline, now: f64) -> Result<()>;
}

/// Draws nothing; counts frames
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames: u64,
}

impl Renderer for NullRenderer {
    fn draw(&mut self, _timeline: &Timeline, _now: f64) -> Result<()> {
        self.frames += 1;
        Ok(())
    }
}
