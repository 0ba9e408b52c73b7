use crate::core::viewport::Viewport;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keeps the canvas backing store and the shared viewport in step with the window.
///
/// The frame loop reads `viewport` for the camera aspect and resizes the
/// surface from the canvas size.
pub fn wire_window_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    viewport: Rc<Cell<Viewport>>,
    max_pixel_ratio: f32,
) {
    let resize_closure = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(v) = dom::read_viewport(&w) {
            dom::sync_canvas_backing_size(&canvas, &v, max_pixel_ratio);
            viewport.set(v);
            log::debug!(
                "[resize] {}x{} css, {}x{} px",
                v.width,
                v.height,
                canvas.width(),
                canvas.height()
            );
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    resize_closure.forget();
}
