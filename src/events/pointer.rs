use crate::core::ParallaxController;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feeds document mouse moves into the parallax controller.
///
/// The viewport is read from the window on every event so a resize between
/// moves is picked up immediately.
pub fn wire_pointer_parallax(document: &web::Document, parallax: Rc<RefCell<ParallaxController>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ev.prevent_default();
        let Some(window) = web::window() else {
            return;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let viewport = Vec2::new(width as f32, height as f32);
        let updated = parallax.borrow_mut().on_pointer_move(
            ev.client_x() as f32,
            ev.client_y() as f32,
            viewport,
        );
        if updated.is_none() {
            log::debug!(
                "[parallax] skipped pointer sample, viewport {}x{}",
                viewport.x,
                viewport.y
            );
        }
    }) as Box<dyn FnMut(_)>);

    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
