use crate::render::Surface;

use super::{PerfTimer, SimulationCore};

/// Trail fade, then the zone (if active), then bodies in spawn order so
/// later bodies land on top.
pub(super) fn render(sim: &mut SimulationCore, surface: &mut dyn Surface) {
    let timer = PerfTimer::start_if(sim.perf_enabled);
    let theme = &sim.settings.theme;

    surface.fade(sim.width as f64, sim.height as f64, &theme.trail);

    if sim.zone.active {
        surface.zone(
            sim.zone.center.x as f64,
            sim.zone.center.y as f64,
            sim.zone.radius as f64,
            theme,
        );
    }

    for body in sim.bodies.iter() {
        surface.glowing_disc(
            body.pos.x as f64,
            body.pos.y as f64,
            body.radius as f64,
            &body.color,
            theme.glow_blur,
        );
    }

    if let Some(timer) = timer {
        sim.perf_stats.render_ms = timer.elapsed_ms();
    }
}
