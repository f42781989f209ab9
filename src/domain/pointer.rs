use crate::core::Vec2;

use super::body::BodyId;

/// Last known cursor position plus the body being dragged, if any.
///
/// `dragged` is an id, not a reference: looking it up after a `clear()`
/// simply finds nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub pos: Vec2,
    pub dragged: Option<BodyId>,
}

impl PointerState {
    /// The pointer still sits at the origin default
    pub fn is_unmoved(&self) -> bool {
        self.pos.is_zero()
    }
}
