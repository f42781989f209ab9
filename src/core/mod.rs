//! Core helpers shared by every layer: vector math and console logging.

pub mod log;
pub mod vec2;

pub use vec2::Vec2;
