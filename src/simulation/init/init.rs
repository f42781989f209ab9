use crate::domain::settings::DEFAULT_SEED;
use crate::domain::{AntiGravityZone, Environment, PointerState, SimulationSettings};

use super::frame_stats::FrameStats;
use super::random::sanitize_seed;
use super::SimulationCore;

pub(super) fn create_simulation_core(width: f32, height: f32, settings: SimulationSettings) -> SimulationCore {
    SimulationCore {
        bodies: Vec::with_capacity(64),
        next_id: 1,
        env: Environment::from_settings(&settings),
        zone: AntiGravityZone::from_settings(&settings),
        pointer: PointerState::default(),
        width,
        height,
        running: false,
        frame: 0,
        rng_state: sanitize_seed(settings.seed.unwrap_or(DEFAULT_SEED)),
        perf_enabled: false,
        perf_stats: FrameStats::default(),
        settings,
    }
}
