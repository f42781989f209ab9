//! Antigrav Engine - canvas physics toy in WASM
//!
//! Bouncing circular bodies under gravity and friction, a pointer-driven
//! anti-gravity zone, and drag-and-drop.
//!
//! Architecture:
//! - core/        - vector math, console logging
//! - domain/      - bodies, environment, zone, pointer, settings
//! - systems/     - per-frame physics
//! - render/      - drawing surfaces (canvas, recorder)
//! - simulation/  - SimulationCore state machine + wasm facade
//! - api/         - browser adapters (rAF loop, DOM events)

pub mod core;
pub mod domain;
pub mod systems;
pub mod render;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::log::info("Antigrav WASM engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::Vec2;
pub use domain::{Body, BodyId, SimulationSettings};
pub use render::{DrawOp, FrameRecorder, Surface};
pub use simulation::{FrameStats, Simulation, SimulationCore};
