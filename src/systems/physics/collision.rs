use crate::domain::body::Body;

/// Canvas rectangle `[0, width] x [0, height]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Clamp a body back inside the canvas and reflect the crossing
/// velocity component scaled by `bounce`.
///
/// Floor and ceiling are exclusive of each other, as are the two side
/// walls; one vertical and one horizontal hit may happen in the same
/// frame. Returns the number of walls hit (0..=2).
pub fn resolve_walls(body: &mut Body, bounds: Bounds, bounce: f32) -> u32 {
    let r = body.radius;
    let mut hits = 0;

    if body.pos.y + r > bounds.height {
        body.pos.y = bounds.height - r;
        body.vel.y *= -bounce;
        hits += 1;
    } else if body.pos.y - r < 0.0 {
        body.pos.y = r;
        body.vel.y *= -bounce;
        hits += 1;
    }

    if body.pos.x + r > bounds.width {
        body.pos.x = bounds.width - r;
        body.vel.x *= -bounce;
        hits += 1;
    } else if body.pos.x - r < 0.0 {
        body.pos.x = r;
        body.vel.x *= -bounce;
        hits += 1;
    }

    hits
}
