use crate::core::Vec2;
use crate::domain::{Body, BodyId};

use super::random::next_unit;
use super::SimulationCore;

/// Initial velocity components are drawn from [-SPAWN_SPEED/2, SPAWN_SPEED/2)
const SPAWN_SPEED: f32 = 10.0;

pub(super) fn spawn(sim: &mut SimulationCore, pos: Vec2, radius: f32, color: &str) -> BodyId {
    // Keep radius > 0: bad input falls back to the configured default
    let radius = if radius.is_finite() && radius > 0.0 {
        radius
    } else {
        sim.settings.body_radius
    };

    let vx = (next_unit(&mut sim.rng_state) - 0.5) * SPAWN_SPEED;
    let vy = (next_unit(&mut sim.rng_state) - 0.5) * SPAWN_SPEED;

    let id = sim.next_id;
    sim.next_id = sim.next_id.saturating_add(1);

    sim.bodies.push(Body::new(id, pos, Vec2::new(vx, vy), radius, color));
    id
}

pub(super) fn spawn_default(sim: &mut SimulationCore, pos: Vec2) -> BodyId {
    let radius = sim.settings.body_radius;
    let color = sim.settings.body_color.clone();
    spawn(sim, pos, radius, &color)
}

pub(super) fn spawn_random(sim: &mut SimulationCore) -> BodyId {
    let x = next_unit(&mut sim.rng_state) * sim.width;
    let y = next_unit(&mut sim.rng_state) * (sim.height / 2.0);
    spawn_default(sim, Vec2::new(x, y))
}

/// Environment and zone are left alone
pub(super) fn clear(sim: &mut SimulationCore) {
    sim.bodies.clear();
    sim.pointer.dragged = None;
}

pub(super) fn toggle_anti_gravity_zone(sim: &mut SimulationCore) -> bool {
    let anchor = if sim.pointer.is_unmoved() {
        Vec2::new(sim.width / 2.0, sim.height / 2.0)
    } else {
        sim.pointer.pos
    };
    sim.zone.toggle(anchor)
}

pub(super) fn begin_drag(sim: &mut SimulationCore, pos: Vec2) -> Option<BodyId> {
    sim.pointer.pos = pos;

    // A miss leaves any current drag alone
    let index = sim.bodies.iter().position(|b| b.contains(pos))?;

    // A lost mouseup must not leave a body stuck in drag mode
    end_drag(sim);

    let body = &mut sim.bodies[index];
    body.dragging = true;
    body.vel = Vec2::zero();
    sim.pointer.dragged = Some(body.id);
    Some(body.id)
}

pub(super) fn update_pointer(sim: &mut SimulationCore, pos: Vec2) {
    sim.pointer.pos = pos;
    sim.zone.follow(pos);
}

pub(super) fn end_drag(sim: &mut SimulationCore) {
    let Some(id) = sim.pointer.dragged.take() else {
        return;
    };
    if let Some(body) = sim.bodies.iter_mut().find(|b| b.id == id) {
        body.dragging = false;
    }
}

pub(super) fn resize(sim: &mut SimulationCore, width: f32, height: f32) {
    if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
        return;
    }
    sim.width = width;
    sim.height = height;
}
