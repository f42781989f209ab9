use crate::core::Vec2;

pub type BodyId = u32;

/// Circular particle
#[derive(Clone, Debug)]
pub struct Body {
    /// Unique within one simulation, never reused until `clear()`
    pub id: BodyId,
    /// Center (canvas pixels)
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    pub radius: f32,
    /// CSS color, only the renderer looks at it
    pub color: String,
    /// Pointer-controlled; physics is skipped while set
    pub dragging: bool,
}

impl Body {
    pub fn new(id: BodyId, pos: Vec2, vel: Vec2, radius: f32, color: impl Into<String>) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            color: color.into(),
            dragging: false,
        }
    }

    /// Strict circle containment (`dx² + dy² < r²`), no square root
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.pos).length_squared() < self.radius * self.radius
    }

    /// Pin the body to `point` with zero velocity
    #[inline]
    pub fn hold_at(&mut self, point: Vec2) {
        self.pos = point;
        self.vel = Vec2::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_strict() {
        let body = Body::new(1, Vec2::new(50.0, 50.0), Vec2::zero(), 10.0, "#fff");
        assert!(body.contains(Vec2::new(50.0, 50.0)));
        assert!(body.contains(Vec2::new(59.9, 50.0)));
        // Exactly on the edge is outside
        assert!(!body.contains(Vec2::new(60.0, 50.0)));
        assert!(!body.contains(Vec2::new(58.0, 58.0)));
    }

    #[test]
    fn hold_at_zeroes_velocity() {
        let mut body = Body::new(1, Vec2::zero(), Vec2::new(3.0, -4.0), 5.0, "#fff");
        body.hold_at(Vec2::new(12.0, 7.0));
        assert_eq!(body.pos, Vec2::new(12.0, 7.0));
        assert!(body.vel.is_zero());
    }
}
