use crate::render::Surface;
use crate::systems::physics::{update_bodies, Bounds};

use super::render_frame;
use super::{PerfTimer, SimulationCore};

pub(super) fn start(sim: &mut SimulationCore) -> bool {
    if sim.running {
        return false;
    }
    sim.running = true;
    true
}

pub(super) fn stop(sim: &mut SimulationCore) {
    sim.running = false;
}

pub(super) fn update(sim: &mut SimulationCore) {
    let timer = PerfTimer::start_if(sim.perf_enabled);

    let bounds = Bounds::new(sim.width, sim.height);
    let summary = update_bodies(&mut sim.bodies, &sim.env, &sim.zone, sim.pointer.pos, bounds);
    sim.frame += 1;

    if let Some(timer) = timer {
        let stats = &mut sim.perf_stats;
        stats.reset();
        stats.update_ms = timer.elapsed_ms();
        stats.body_count = sim.bodies.len() as u32;
        stats.bodies_in_zone = summary.in_zone;
        stats.wall_hits = summary.wall_hits;
        stats.frame = sim.frame;
    }
}

pub(super) fn step(sim: &mut SimulationCore, surface: &mut dyn Surface) {
    let timer = PerfTimer::start_if(sim.perf_enabled);

    update(sim);
    render_frame::render(sim, surface);

    if let Some(timer) = timer {
        sim.perf_stats.step_ms = timer.elapsed_ms();
    }
}

/// Cancellation is cooperative: a stopped simulation skips the frame
/// and tells the caller not to schedule another one.
pub(super) fn tick(sim: &mut SimulationCore, surface: &mut dyn Surface) -> bool {
    if !sim.running {
        return false;
    }
    step(sim, surface);
    true
}
