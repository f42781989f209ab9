use wasm_bindgen::prelude::*;

/// Snapshot of the last frame
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct FrameStats {
    pub(super) update_ms: f64,
    pub(super) render_ms: f64,
    pub(super) step_ms: f64,
    pub(super) body_count: u32,
    pub(super) bodies_in_zone: u32,
    pub(super) wall_hits: u32,
    pub(super) frame: u64,
}

impl FrameStats {
    pub(crate) fn reset(&mut self) {
        *self = FrameStats::default();
    }
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn update_ms(&self) -> f64 { self.update_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn bodies_in_zone(&self) -> u32 { self.bodies_in_zone }
    #[wasm_bindgen(getter)]
    pub fn wall_hits(&self) -> u32 { self.wall_hits }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
