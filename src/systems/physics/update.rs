use crate::core::Vec2;
use crate::domain::body::Body;
use crate::domain::environment::Environment;
use crate::domain::zone::AntiGravityZone;

use super::collision::{resolve_walls, Bounds};
use super::forces::{apply_friction, apply_gravity, apply_zone};

/// What happened to a single body during one update
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BodyOutcome {
    pub held: bool,
    pub in_zone: bool,
    pub wall_hits: u32,
}

/// Advance one body by one frame.
///
/// A dragged body snaps to the pointer with zero velocity and skips
/// every other step.
pub fn update_body(
    body: &mut Body,
    env: &Environment,
    zone: &AntiGravityZone,
    pointer: Vec2,
    bounds: Bounds,
) -> BodyOutcome {
    if body.dragging {
        body.hold_at(pointer);
        return BodyOutcome { held: true, ..BodyOutcome::default() };
    }

    apply_gravity(body, env);
    let in_zone = apply_zone(body, zone);

    body.pos += body.vel;
    apply_friction(body, env);

    let wall_hits = resolve_walls(body, bounds, env.bounce);

    BodyOutcome { held: false, in_zone, wall_hits }
}

/// Per-frame counters over all bodies
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub in_zone: u32,
    pub wall_hits: u32,
}

/// Advance every body in collection order
pub fn update_bodies(
    bodies: &mut [Body],
    env: &Environment,
    zone: &AntiGravityZone,
    pointer: Vec2,
    bounds: Bounds,
) -> UpdateSummary {
    let mut summary = UpdateSummary::default();
    for body in bodies.iter_mut() {
        let out = update_body(body, env, zone, pointer, bounds);
        summary.in_zone += out.in_zone as u32;
        summary.wall_hits += out.wall_hits;
    }
    summary
}
