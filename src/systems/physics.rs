//! Body physics: semi-implicit Euler with per-frame constants.
//!
//! Order per body is fixed:
//! gravity -> zone -> integrate -> friction -> walls.
//! Bodies never interact with each other.

mod collision;
mod forces;
mod update;

pub use collision::{resolve_walls, Bounds};
pub use forces::{apply_friction, apply_gravity, apply_zone};
pub use update::{update_bodies, update_body, BodyOutcome, UpdateSummary};
