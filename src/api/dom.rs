use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// Viewport size in CSS pixels
pub fn inner_size() -> Result<(u32, u32), JsValue> {
    let w = window()?;
    let width = w.inner_width()?.as_f64().unwrap_or(0.0);
    let height = w.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width.max(0.0) as u32, height.max(0.0) as u32))
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("2d context has unexpected type"))
}

/// Client coordinates -> canvas-local coordinates
pub fn canvas_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    ((client_x as f64 - rect.left()) as f32, (client_y as f64 - rect.top()) as f32)
}

pub fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()?.request_animation_frame(f.as_ref().unchecked_ref())
}
