//! Domain types: bodies, environment constants, the anti-gravity zone,
//! pointer state and the JSON-backed settings they are built from.

pub mod body;
pub mod environment;
pub mod pointer;
pub mod settings;
pub mod zone;

pub use body::{Body, BodyId};
pub use environment::Environment;
pub use pointer::PointerState;
pub use settings::{SimulationSettings, Theme};
pub use zone::AntiGravityZone;
