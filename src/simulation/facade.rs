use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::{dom, frame_loop::FrameLoop, input};
use crate::core::log;
use crate::domain::SimulationSettings;

use super::frame_stats::FrameStats;
use super::SimulationCore;

#[wasm_bindgen]
pub struct Simulation {
    core: Rc<RefCell<SimulationCore>>,
    canvas: Option<HtmlCanvasElement>,
    ctx: Option<CanvasRenderingContext2d>,
    frame_loop: Option<FrameLoop>,
}

impl Simulation {
    fn from_core(core: SimulationCore) -> Self {
        Self {
            core: Rc::new(RefCell::new(core)),
            canvas: None,
            ctx: None,
            frame_loop: None,
        }
    }
}

#[wasm_bindgen]
impl Simulation {
    /// Headless simulation with default settings (nothing is drawn)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_core(SimulationCore::new(width as f32, height as f32))
    }

    /// Headless simulation configured from a settings JSON object
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(width: u32, height: u32, json: &str) -> Result<Simulation, JsValue> {
        let settings = SimulationSettings::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::from_core(SimulationCore::with_settings(width as f32, height as f32, settings)))
    }

    /// Attach to a canvas: size it to the viewport, grab its 2d context
    /// and wire pointer and resize events.
    #[wasm_bindgen(js_name = fromCanvas)]
    pub fn from_canvas(canvas: HtmlCanvasElement, settings_json: Option<String>) -> Result<Simulation, JsValue> {
        let mut settings = match settings_json {
            Some(json) => SimulationSettings::from_json(&json).map_err(|e| JsValue::from_str(&e))?,
            None => SimulationSettings::default(),
        };
        if settings.seed.is_none() {
            settings.seed = Some(js_sys::Date::now() as u64 as u32);
        }

        let (width, height) = dom::inner_size()?;
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = dom::context_2d(&canvas)?;

        let sim = Self {
            core: Rc::new(RefCell::new(SimulationCore::with_settings(width as f32, height as f32, settings))),
            canvas: Some(canvas),
            ctx: Some(ctx),
            frame_loop: None,
        };
        if let Some(canvas) = sim.canvas.as_ref() {
            input::wire(canvas, &sim.core)?;
        }
        Ok(sim)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.borrow().width() as u32 }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.borrow().height() as u32 }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.borrow().body_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.borrow().frame() }

    #[wasm_bindgen(getter)]
    pub fn gravity(&self) -> f32 { self.core.borrow().gravity() }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool { self.core.borrow().is_running() }

    #[wasm_bindgen(getter)]
    pub fn zone_active(&self) -> bool { self.core.borrow().zone().active }

    #[wasm_bindgen(getter)]
    pub fn zone_x(&self) -> f32 { self.core.borrow().zone().center.x }

    #[wasm_bindgen(getter)]
    pub fn zone_y(&self) -> f32 { self.core.borrow().zone().center.y }

    pub fn body_x(&self, index: usize) -> Option<f32> {
        self.core.borrow().bodies().get(index).map(|b| b.pos.x)
    }

    pub fn body_y(&self, index: usize) -> Option<f32> {
        self.core.borrow().bodies().get(index).map(|b| b.pos.y)
    }

    /// Current settings as JSON
    pub fn settings_json(&self) -> String {
        self.core.borrow().settings().to_json()
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.borrow_mut().enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (timings are zero when perf is disabled)
    pub fn get_perf_stats(&self) -> FrameStats {
        self.core.borrow().get_perf_stats()
    }

    // === COMMANDS ===

    /// Spawn a body; radius and color fall back to the settings defaults.
    /// Returns the body id.
    pub fn spawn(&mut self, x: f32, y: f32, radius: Option<f32>, color: Option<String>) -> u32 {
        let mut core = self.core.borrow_mut();
        let radius = radius.unwrap_or(core.settings().body_radius);
        let color = color.unwrap_or_else(|| core.settings().body_color.clone());
        core.spawn(x, y, radius, &color)
    }

    /// Secondary-click spawn with default radius and color
    pub fn spawn_at(&mut self, x: f32, y: f32) -> u32 {
        self.core.borrow_mut().spawn_default(x, y)
    }

    pub fn spawn_random(&mut self) -> u32 {
        self.core.borrow_mut().spawn_random()
    }

    /// Remove all bodies
    pub fn clear(&mut self) {
        self.core.borrow_mut().clear();
    }

    /// Non-numeric input is ignored and the previous gravity kept
    pub fn set_gravity(&mut self, value: &str) {
        if let Err(e) = self.core.borrow_mut().set_gravity(value) {
            log::warn(&e);
        }
    }

    /// Returns the new active state for the caller to reflect in its UI
    pub fn toggle_anti_gravity_zone(&mut self) -> bool {
        self.core.borrow_mut().toggle_anti_gravity_zone()
    }

    /// Returns true if a body was grabbed
    pub fn begin_drag(&mut self, x: f32, y: f32) -> bool {
        self.core.borrow_mut().begin_drag(x, y).is_some()
    }

    pub fn update_pointer(&mut self, x: f32, y: f32) {
        self.core.borrow_mut().update_pointer(x, y);
    }

    pub fn end_drag(&mut self) {
        self.core.borrow_mut().end_drag();
    }

    /// Resize the simulation bounds (and the attached canvas, if any)
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(canvas) = self.canvas.as_ref() {
            canvas.set_width(width);
            canvas.set_height(height);
        }
        self.core.borrow_mut().resize(width as f32, height as f32);
    }

    // === LOOP ===

    /// Step the simulation forward one frame; draws when a canvas is attached
    pub fn step(&mut self) {
        let mut core = self.core.borrow_mut();
        match self.ctx.as_mut() {
            Some(ctx) => core.step(ctx),
            None => core.update(),
        }
    }

    /// Start the requestAnimationFrame loop. No-op while running.
    pub fn start(&mut self) -> Result<(), JsValue> {
        let Some(ctx) = self.ctx.clone() else {
            return Err(JsValue::from_str("start() needs a canvas, use Simulation.fromCanvas"));
        };
        if !self.core.borrow_mut().start() {
            return Ok(());
        }

        let frame_loop = self
            .frame_loop
            .get_or_insert_with(|| FrameLoop::new(self.core.clone(), ctx));
        frame_loop.schedule()?;
        log::info("simulation started");
        Ok(())
    }

    /// The loop notices on its next frame and stops rescheduling
    pub fn stop(&mut self) {
        self.core.borrow_mut().stop();
        log::info("simulation stopped");
    }
}
