use crate::constants::{CANVAS_ID, CONTAINER_CLASS};
use crate::core::viewport::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current window viewport in CSS pixels, or `None` while it has no area.
pub fn read_viewport(window: &web::Window) -> Option<Viewport> {
    let width = window.inner_width().ok()?.as_f64()? as f32;
    let height = window.inner_height().ok()?.as_f64()? as f32;
    match Viewport::new(width, height, window.device_pixel_ratio() as f32) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[viewport] {}", e);
            None
        }
    }
}

/// Appends `<div class="threejs"><canvas/></div>` to the body and returns the canvas.
pub fn create_scene_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    let container = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    container
        .class_list()
        .add_1(CONTAINER_CLASS)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    body.append_child(&container)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id(CANVAS_ID);
    _ = canvas.set_attribute("style", "display:block;width:100vw;height:100vh");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    viewport: &Viewport,
    max_pixel_ratio: f32,
) {
    let (w_px, h_px) = viewport.backing_size(max_pixel_ratio);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
}
