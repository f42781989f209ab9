//! Browser adapters: DOM helpers, the requestAnimationFrame loop and
//! pointer/resize wiring. Everything here only forwards to
//! `SimulationCore` commands.

pub mod dom;
pub mod frame_loop;
pub mod input;
