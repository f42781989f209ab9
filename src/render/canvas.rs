use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::domain::Theme;

use super::Surface;

impl Surface for CanvasRenderingContext2d {
    fn fade(&mut self, width: f64, height: f64, style: &str) {
        self.set_fill_style_str(style);
        self.fill_rect(0.0, 0.0, width, height);
    }

    fn zone(&mut self, x: f64, y: f64, radius: f64, theme: &Theme) {
        self.begin_path();
        self.arc(x, y, radius, 0.0, std::f64::consts::TAU).ok();
        self.set_fill_style_str(&theme.zone_fill);
        self.set_stroke_style_str(&theme.zone_stroke);
        self.set_line_width(theme.zone_line_width);

        let dash: Array = theme.zone_dash.iter().map(|d| JsValue::from_f64(*d)).collect();
        self.set_line_dash(&dash).ok();
        self.stroke();
        self.set_line_dash(&Array::new()).ok();

        self.fill();
        self.close_path();
    }

    fn glowing_disc(&mut self, x: f64, y: f64, radius: f64, color: &str, blur: f64) {
        self.begin_path();
        self.arc(x, y, radius, 0.0, std::f64::consts::TAU).ok();
        self.set_fill_style_str(color);

        self.set_shadow_blur(blur);
        self.set_shadow_color(color);

        self.fill();
        self.close_path();
        self.set_shadow_blur(0.0);
    }
}
