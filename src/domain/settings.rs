use serde::{Deserialize, Serialize};

use super::environment::{DEFAULT_BOUNCE, DEFAULT_FRICTION, DEFAULT_GRAVITY};
use super::zone::{DEFAULT_ZONE_FORCE, DEFAULT_ZONE_RADIUS};

pub const DEFAULT_BODY_RADIUS: f32 = 20.0;
pub const DEFAULT_BODY_COLOR: &str = "#64ffda";
pub const DEFAULT_SEED: u32 = 12345;

/// Construction-time configuration, loadable from JSON.
///
/// Every field is optional in the JSON; missing fields take the
/// defaults. Friction and bounce can only be set here, the runtime
/// command surface only exposes gravity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationSettings {
    pub gravity: f32,
    pub friction: f32,
    pub bounce: f32,
    pub zone_radius: f32,
    pub zone_force: f32,
    pub body_radius: f32,
    pub body_color: String,
    /// Pin the RNG; `None` lets the host pick a seed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    pub theme: Theme,
}

/// Canvas styles used by the renderer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    /// Translucent fill drawn over the previous frame (motion trails)
    pub trail: String,
    pub zone_stroke: String,
    pub zone_fill: String,
    pub zone_line_width: f64,
    pub zone_dash: Vec<f64>,
    pub glow_blur: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            friction: DEFAULT_FRICTION,
            bounce: DEFAULT_BOUNCE,
            zone_radius: DEFAULT_ZONE_RADIUS,
            zone_force: DEFAULT_ZONE_FORCE,
            body_radius: DEFAULT_BODY_RADIUS,
            body_color: DEFAULT_BODY_COLOR.to_string(),
            seed: None,
            theme: Theme::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            trail: "rgba(10, 10, 18, 0.2)".to_string(),
            zone_stroke: "#64ffda".to_string(),
            zone_fill: "rgba(100, 255, 218, 0.05)".to_string(),
            zone_line_width: 2.0,
            zone_dash: vec![5.0, 5.0],
            glow_blur: 15.0,
        }
    }
}

impl SimulationSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: SimulationSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let finite = [
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("bounce", self.bounce),
            ("zoneRadius", self.zone_radius),
            ("zoneForce", self.zone_force),
            ("bodyRadius", self.body_radius),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("{name} must be finite"));
            }
        }

        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(format!("friction must be in (0, 1], got {}", self.friction));
        }
        if !(0.0..=1.0).contains(&self.bounce) {
            return Err(format!("bounce must be in [0, 1], got {}", self.bounce));
        }
        if self.zone_radius <= 0.0 {
            return Err(format!("zoneRadius must be positive, got {}", self.zone_radius));
        }
        if self.body_radius <= 0.0 {
            return Err(format!("bodyRadius must be positive, got {}", self.body_radius));
        }
        Ok(())
    }
}
