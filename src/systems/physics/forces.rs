use crate::domain::body::Body;
use crate::domain::environment::{Environment, GRAVITY_SCALE};
use crate::domain::zone::{AntiGravityZone, ZONE_FALLOFF_SCALE};

/// Apply gravity to a body's velocity
#[inline(always)]
pub fn apply_gravity(body: &mut Body, env: &Environment) {
    body.vel.y += env.gravity * GRAVITY_SCALE;
}

/// Push a body that sits inside the active zone.
///
/// Strength falls off linearly from the center to the edge. The zone
/// force only acts on `vy`; `vx` gets the x component of the outward
/// direction. There is deliberately no outward term on `vy`.
///
/// Returns true when the body was inside the zone.
#[inline]
pub fn apply_zone(body: &mut Body, zone: &AntiGravityZone) -> bool {
    if !zone.active {
        return false;
    }

    let offset = body.pos - zone.center;
    let dist_sq = offset.length_squared();
    if dist_sq >= zone.radius * zone.radius {
        return false;
    }

    let dist = dist_sq.sqrt();
    let strength = (1.0 - dist / zone.radius) * ZONE_FALLOFF_SCALE;

    body.vel.y += zone.force * strength;
    // At the exact center there is no outward direction
    if dist > 0.0 {
        body.vel.x += (offset.x / dist) * strength;
    }
    true
}

/// Damp velocity; runs after integration every frame
#[inline(always)]
pub fn apply_friction(body: &mut Body, env: &Environment) {
    body.vel *= env.friction;
}
