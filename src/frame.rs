use crate::core::orbit::OrbitControls;
use crate::core::tween::IntroAnimation;
use crate::core::viewport::Viewport;
use crate::core::{ParallaxController, SceneRig};
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub viewport: Rc<Cell<Viewport>>,

    pub rig: SceneRig,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub intro: Option<IntroAnimation>,
    pub parallax: Option<Rc<RefCell<ParallaxController>>>,

    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    /// One tick: move the camera, apply parallax, then draw.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        if let Some(intro) = &mut self.intro {
            if intro.advance(dt, &mut self.rig.camera) {
                log::info!("[intro] finished");
                self.intro = None;
            }
        }
        self.orbit.borrow_mut().update(&mut self.rig.camera);

        if let Some(parallax) = &self.parallax {
            let offsets = parallax.borrow_mut().on_frame(dt);
            offsets.apply(&mut self.rig);
        }

        self.rig.set_aspect(self.viewport.get().aspect());

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&self.rig) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    config: &crate::core::SceneConfig,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(
        leaked_canvas,
        &config.renderer,
        config.look(),
        config.background_rgb,
    )
    .await
    {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
