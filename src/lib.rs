#![cfg(target_arch = "wasm32")]
use crate::constants::SCENE_QUERY_KEY;
use crate::core::orbit::OrbitControls;
use crate::core::scene::preset_from_query;
use crate::core::tween::IntroAnimation;
use crate::core::{ParallaxController, SceneConfig, ScenePreset};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
pub mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod render;

fn preset_from_location(window: &web::Window) -> ScenePreset {
    let search = window.location().search().unwrap_or_default();
    match preset_from_query(&search, SCENE_QUERY_KEY) {
        Ok(p) => p,
        Err(e) => {
            log::warn!("{}; using {:?}", e, ScenePreset::default());
            ScenePreset::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-scene starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = SceneConfig::for_preset(preset_from_location(&window));
    log::info!(
        "[scene] preset {:?}, post chain {}",
        config.preset,
        config.post.describe()
    );

    let canvas = dom::create_scene_canvas(&document)?;
    let viewport = dom::read_viewport(&window)
        .ok_or_else(|| anyhow::anyhow!("window has no drawable area"))?;
    let max_pixel_ratio = config.renderer.max_pixel_ratio;
    dom::sync_canvas_backing_size(&canvas, &viewport, max_pixel_ratio);
    let viewport = Rc::new(Cell::new(viewport));
    events::wire_window_resize(&window, canvas.clone(), viewport.clone(), max_pixel_ratio);

    let mut rig = config.build_rig(viewport.get().aspect());
    let intro = config.intro.as_ref().map(IntroAnimation::new);
    if let Some(intro) = &intro {
        intro.begin(&mut rig.camera);
    }
    let orbit = Rc::new(RefCell::new(OrbitControls::new(config.orbit)));
    events::wire_orbit_controls(&canvas, orbit.clone());

    let parallax = match config.parallax {
        Some(p) => {
            let controller = Rc::new(RefCell::new(ParallaxController::new(p)?));
            events::wire_pointer_parallax(&document, controller.clone());
            Some(controller)
        }
        None => None,
    };

    spawn_local(assets::load_scene_assets(config.assets.clone()));

    let gpu = frame::init_gpu(&canvas, &config).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        viewport,
        rig,
        orbit,
        intro,
        parallax,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
