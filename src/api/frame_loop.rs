use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::core::log;
use crate::simulation::SimulationCore;

use super::dom;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame driver for one simulation.
///
/// The callback is built once and re-armed every frame while the
/// simulation is running. `pending` guarantees at most one frame is in
/// flight, so stop/start between two frames never doubles the loop.
pub struct FrameLoop {
    callback: FrameCallback,
    pending: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn new(core: Rc<RefCell<SimulationCore>>, mut ctx: CanvasRenderingContext2d) -> Self {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(false));

        let next = callback.clone();
        let in_flight = pending.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            in_flight.set(false);

            if !core.borrow_mut().tick(&mut ctx) {
                return;
            }

            if let Some(cb) = next.borrow().as_ref() {
                match dom::request_animation_frame(cb) {
                    Ok(_) => in_flight.set(true),
                    Err(e) => {
                        log::warn(&format!("requestAnimationFrame failed: {e:?}"));
                        core.borrow_mut().stop();
                    }
                }
            }
        }) as Box<dyn FnMut()>));

        Self { callback, pending }
    }

    /// Arm the next frame unless one is already queued
    pub fn schedule(&self) -> Result<(), JsValue> {
        if self.pending.get() {
            return Ok(());
        }
        if let Some(cb) = self.callback.borrow().as_ref() {
            dom::request_animation_frame(cb)?;
            self.pending.set(true);
        }
        Ok(())
    }
}
