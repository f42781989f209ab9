//! Simulation - bodies, environment, zone and pointer in one place
//!
//! `SimulationCore` is a passive state machine: the host calls the
//! command methods between frames and `step()` once per frame. It never
//! schedules anything itself; the browser loop lives in `api`.
//!
//! Work is split into submodules the same way for every concern:
//! commands (input), step (physics), render (drawing), settings
//! (runtime knobs), perf (timing).

use crate::core::Vec2;
use crate::domain::{AntiGravityZone, Body, BodyId, Environment, PointerState, SimulationSettings};
use crate::render::Surface;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_frame.rs"]
mod render_frame;
mod facade;

pub use facade::Simulation;
pub use frame_stats::FrameStats;

use perf_timer::PerfTimer;

/// The simulation state
pub struct SimulationCore {
    settings: SimulationSettings,

    bodies: Vec<Body>,
    next_id: BodyId,

    env: Environment,
    zone: AntiGravityZone,
    pointer: PointerState,

    // Canvas
    width: f32,
    height: f32,

    // State
    running: bool,
    frame: u64,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: FrameStats,
}

impl SimulationCore {
    /// Create a simulation with default settings
    pub fn new(width: f32, height: f32) -> Self {
        init::create_simulation_core(width, height, SimulationSettings::default())
    }

    pub fn with_settings(width: f32, height: f32, settings: SimulationSettings) -> Self {
        init::create_simulation_core(width, height, settings)
    }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn bodies(&self) -> &[Body] { &self.bodies }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn zone(&self) -> &AntiGravityZone { &self.zone }

    pub fn pointer(&self) -> &PointerState { &self.pointer }

    pub fn settings(&self) -> &SimulationSettings { &self.settings }

    pub fn is_running(&self) -> bool { self.running }

    /// Body currently held by the pointer
    pub fn dragged_body(&self) -> Option<&Body> {
        let id = self.pointer.dragged?;
        self.bodies.iter().find(|b| b.id == id)
    }

    // === SETTINGS ===

    /// Parse and apply a gravity value from a text control.
    /// On failure the previous gravity stays in effect.
    pub fn set_gravity(&mut self, value: &str) -> Result<(), String> {
        settings::set_gravity(self, value)
    }

    pub fn set_gravity_value(&mut self, gravity: f32) {
        settings::set_gravity_value(self, gravity);
    }

    pub fn gravity(&self) -> f32 {
        self.env.gravity
    }

    /// Enable or disable per-frame timing (adds overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame's stats (timings are zero when perf is disabled)
    pub fn get_perf_stats(&self) -> FrameStats {
        settings::get_perf_stats(self)
    }

    // === COMMANDS ===

    /// Add a body at (x, y) with a random velocity; returns its id
    pub fn spawn(&mut self, x: f32, y: f32, radius: f32, color: &str) -> BodyId {
        commands::spawn(self, Vec2::new(x, y), radius, color)
    }

    /// Add a body with the configured default radius and color
    pub fn spawn_default(&mut self, x: f32, y: f32) -> BodyId {
        commands::spawn_default(self, Vec2::new(x, y))
    }

    /// Spawn anywhere horizontally, in the top half vertically
    pub fn spawn_random(&mut self) -> BodyId {
        commands::spawn_random(self)
    }

    /// Remove every body
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Returns the zone's new active state
    pub fn toggle_anti_gravity_zone(&mut self) -> bool {
        commands::toggle_anti_gravity_zone(self)
    }

    /// Grab the first body under the pointer, if any
    pub fn begin_drag(&mut self, x: f32, y: f32) -> Option<BodyId> {
        commands::begin_drag(self, Vec2::new(x, y))
    }

    pub fn update_pointer(&mut self, x: f32, y: f32) {
        commands::update_pointer(self, Vec2::new(x, y));
    }

    pub fn end_drag(&mut self) {
        commands::end_drag(self);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        commands::resize(self, width, height);
    }

    // === LOOP ===

    /// Returns true if the simulation was stopped before
    pub fn start(&mut self) -> bool {
        step::start(self)
    }

    pub fn stop(&mut self) {
        step::stop(self);
    }

    /// Advance physics by one frame without drawing
    pub fn update(&mut self) {
        step::update(self);
    }

    /// Draw the current state
    pub fn render(&mut self, surface: &mut dyn Surface) {
        render_frame::render(self, surface);
    }

    /// One frame: update, then render
    pub fn step(&mut self, surface: &mut dyn Surface) {
        step::step(self, surface);
    }

    /// Loop body: does nothing and returns false once stopped
    pub fn tick(&mut self, surface: &mut dyn Surface) -> bool {
        step::tick(self, surface)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
