use super::settings::SimulationSettings;

pub const DEFAULT_GRAVITY: f32 = 1.0;
pub const DEFAULT_FRICTION: f32 = 0.99;
pub const DEFAULT_BOUNCE: f32 = 0.7;

/// Gravity is scaled by this before it is added to `vy` each frame
pub const GRAVITY_SCALE: f32 = 0.5;

/// Per-simulation physical constants
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    /// Downward acceleration; negative pulls up. Runtime settable.
    pub gravity: f32,
    /// Velocity damping per frame, in (0, 1]
    pub friction: f32,
    /// Restitution on wall hits, in [0, 1]
    pub bounce: f32,
}

impl Environment {
    pub fn from_settings(settings: &SimulationSettings) -> Self {
        Self {
            gravity: settings.gravity,
            friction: settings.friction,
            bounce: settings.bounce,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            friction: DEFAULT_FRICTION,
            bounce: DEFAULT_BOUNCE,
        }
    }
}

/// Parse a gravity value coming from a text control.
///
/// Surrounding whitespace is ignored; anything that is not a finite
/// float is rejected so the caller can keep the previous value.
pub fn parse_gravity(input: &str) -> Result<f32, String> {
    let value: f32 = input
        .trim()
        .parse()
        .map_err(|e: std::num::ParseFloatError| format!("invalid gravity {input:?}: {e}"))?;
    if !value.is_finite() {
        return Err(format!("invalid gravity {input:?}: not finite"));
    }
    Ok(value)
}
