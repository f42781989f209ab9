use crate::domain::Theme;

use super::Surface;

/// One recorded draw call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Fade { width: f64, height: f64, style: String },
    Zone { x: f64, y: f64, radius: f64 },
    Disc { x: f64, y: f64, radius: f64, color: String, blur: f64 },
}

/// Surface that keeps a list of draw calls instead of painting
#[derive(Clone, Debug, Default)]
pub struct FrameRecorder {
    ops: Vec<DrawOp>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn disc_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Disc { .. })).count()
    }
}

impl Surface for FrameRecorder {
    fn fade(&mut self, width: f64, height: f64, style: &str) {
        self.ops.push(DrawOp::Fade { width, height, style: style.to_string() });
    }

    fn zone(&mut self, x: f64, y: f64, radius: f64, _theme: &Theme) {
        self.ops.push(DrawOp::Zone { x, y, radius });
    }

    fn glowing_disc(&mut self, x: f64, y: f64, radius: f64, color: &str, blur: f64) {
        self.ops.push(DrawOp::Disc { x, y, radius, color: color.to_string(), blur });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let mut rec = FrameRecorder::new();
        rec.fade(10.0, 20.0, "black");
        rec.glowing_disc(1.0, 2.0, 3.0, "red", 15.0);
        rec.zone(5.0, 5.0, 150.0, &Theme::default());

        assert_eq!(rec.ops().len(), 3);
        assert!(matches!(rec.ops()[0], DrawOp::Fade { .. }));
        assert_eq!(rec.disc_count(), 1);

        rec.clear();
        assert!(rec.ops().is_empty());
    }
}
