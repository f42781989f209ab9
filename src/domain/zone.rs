use crate::core::Vec2;

use super::settings::SimulationSettings;

pub const DEFAULT_ZONE_RADIUS: f32 = 150.0;
/// Negative pushes up (y grows downward)
pub const DEFAULT_ZONE_FORCE: f32 = -2.0;
/// Falloff multiplier: strength is 2.0 at the center, 0.0 at the edge
pub const ZONE_FALLOFF_SCALE: f32 = 2.0;

/// The single toggleable repulsion field
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AntiGravityZone {
    pub active: bool,
    pub center: Vec2,
    pub radius: f32,
    pub force: f32,
}

impl AntiGravityZone {
    pub fn from_settings(settings: &SimulationSettings) -> Self {
        Self {
            active: false,
            center: Vec2::zero(),
            radius: settings.zone_radius,
            force: settings.zone_force,
        }
    }

    /// Flip the zone. When it turns on it snaps to `anchor`.
    pub fn toggle(&mut self, anchor: Vec2) -> bool {
        self.active = !self.active;
        if self.active {
            self.center = anchor;
        }
        self.active
    }

    /// Track the pointer while active
    pub fn follow(&mut self, pointer: Vec2) {
        if self.active {
            self.center = pointer;
        }
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.center).length_squared() < self.radius * self.radius
    }
}

impl Default for AntiGravityZone {
    fn default() -> Self {
        Self {
            active: false,
            center: Vec2::zero(),
            radius: DEFAULT_ZONE_RADIUS,
            force: DEFAULT_ZONE_FORCE,
        }
    }
}
