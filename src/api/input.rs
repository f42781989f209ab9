use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::simulation::SimulationCore;

use super::dom;

/// Hook canvas pointer events and window resize to the simulation.
///
/// - left button down / move / up and leave drive the drag commands
/// - the context menu is suppressed and spawns a body at the pointer
/// - window resize keeps the canvas at viewport size
///
/// Listeners live as long as the page (closures are leaked).
pub fn wire(canvas: &HtmlCanvasElement, core: &Rc<RefCell<SimulationCore>>) -> Result<(), JsValue> {
    let c = canvas.clone();
    let sim = core.clone();
    let mousedown = Closure::wrap(Box::new(move |e: MouseEvent| {
        let (x, y) = dom::canvas_point(&c, e.client_x(), e.client_y());
        sim.borrow_mut().begin_drag(x, y);
    }) as Box<dyn FnMut(MouseEvent)>);
    canvas.add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
    mousedown.forget();

    let c = canvas.clone();
    let sim = core.clone();
    let mousemove = Closure::wrap(Box::new(move |e: MouseEvent| {
        let (x, y) = dom::canvas_point(&c, e.client_x(), e.client_y());
        sim.borrow_mut().update_pointer(x, y);
    }) as Box<dyn FnMut(MouseEvent)>);
    canvas.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
    mousemove.forget();

    for event in ["mouseup", "mouseleave"] {
        let sim = core.clone();
        let release = Closure::wrap(Box::new(move |_: MouseEvent| {
            sim.borrow_mut().end_drag();
        }) as Box<dyn FnMut(MouseEvent)>);
        canvas.add_event_listener_with_callback(event, release.as_ref().unchecked_ref())?;
        release.forget();
    }

    let c = canvas.clone();
    let sim = core.clone();
    let contextmenu = Closure::wrap(Box::new(move |e: MouseEvent| {
        e.prevent_default();
        let (x, y) = dom::canvas_point(&c, e.client_x(), e.client_y());
        sim.borrow_mut().spawn_default(x, y);
    }) as Box<dyn FnMut(MouseEvent)>);
    canvas.add_event_listener_with_callback("contextmenu", contextmenu.as_ref().unchecked_ref())?;
    contextmenu.forget();

    let c = canvas.clone();
    let sim = core.clone();
    let resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Ok((w, h)) = dom::inner_size() {
            c.set_width(w);
            c.set_height(h);
            sim.borrow_mut().resize(w as f32, h as f32);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    dom::window()?.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
    resize.forget();

    Ok(())
}
