use crate::domain::environment::parse_gravity;

use super::frame_stats::FrameStats;
use super::SimulationCore;

pub(super) fn set_gravity(sim: &mut SimulationCore, value: &str) -> Result<(), String> {
    let gravity = parse_gravity(value)?;
    set_gravity_value(sim, gravity);
    Ok(())
}

/// No clamping: zero or negative gravity is a valid setting
pub(super) fn set_gravity_value(sim: &mut SimulationCore, gravity: f32) {
    sim.env.gravity = gravity;
}

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> FrameStats {
    sim.perf_stats.clone()
}
