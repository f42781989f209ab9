//! Drawing surfaces
//!
//! The simulation draws through the `Surface` trait so a frame can go
//! to a browser canvas or be recorded for inspection in tests.

mod canvas;
mod recorder;

pub use recorder::{DrawOp, FrameRecorder};

use crate::domain::Theme;

pub trait Surface {
    /// Paint `style` over the whole canvas without clearing it
    fn fade(&mut self, width: f64, height: f64, style: &str);

    /// Dashed outline plus translucent fill, styled by the theme
    fn zone(&mut self, x: f64, y: f64, radius: f64, theme: &Theme);

    /// Filled circle with a glow of the same color
    fn glowing_disc(&mut self, x: f64, y: f64, radius: f64, color: &str, blur: f64);
}
