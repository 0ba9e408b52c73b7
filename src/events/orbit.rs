use crate::core::orbit::OrbitControls;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drag-to-rotate and wheel zoom on the scene canvas.
pub fn wire_orbit_controls(canvas: &web::HtmlCanvasElement, orbit: Rc<RefCell<OrbitControls>>) {
    wire_pointerdown(canvas, orbit.clone());
    wire_pointermove(canvas, orbit.clone());
    wire_pointerup(canvas, orbit.clone());
    wire_wheel(canvas, orbit);
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, orbit: Rc<RefCell<OrbitControls>>) {
    let canvas_capture = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        orbit
            .borrow_mut()
            .begin_drag(ev.client_x() as f32, ev.client_y() as f32);
        _ = canvas_capture.set_pointer_capture(ev.pointer_id());
        log::debug!("[orbit] drag start");
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, orbit: Rc<RefCell<OrbitControls>>) {
    let canvas_size = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut orbit = orbit.borrow_mut();
        if !orbit.is_dragging() {
            return;
        }
        orbit.drag_to(
            ev.client_x() as f32,
            ev.client_y() as f32,
            canvas_size.client_height() as f32,
        );
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(canvas: &web::HtmlCanvasElement, orbit: Rc<RefCell<OrbitControls>>) {
    let canvas_release = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        orbit.borrow_mut().end_drag();
        _ = canvas_release.release_pointer_capture(ev.pointer_id());
        log::debug!("[orbit] drag end");
    }) as Box<dyn FnMut(_)>);
    // A cancelled pointer ends the drag the same way a release does.
    for name in ["pointerup", "pointercancel"] {
        _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(canvas: &web::HtmlCanvasElement, orbit: Rc<RefCell<OrbitControls>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        orbit.borrow_mut().wheel(ev.delta_y() as f32);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
