//! Systems that mutate simulation state each frame.

pub mod physics;
