//! WASM entry points.
//!
//! ```javascript
//! import init, { WelcomeBackground } from './foresight.js';
//!
//! await init();
//! const bg = new WelcomeBackground('welcome-bg', null);
//! // on navigation away
//! bg.free();
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use foresight_core::EngineError;
use foresight_widgets::{BackgroundConfig, Sparkline, LOGO_IMAGE};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

use super::canvas2d::Canvas2DRenderer;
use super::image::LogoImage;
use crate::driver::{FrameContext, LoopControl, RenderLoop};
use crate::MountError;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Install the panic hook and route `log` to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// SVG path data for a seeded preview sparkline.
#[wasm_bindgen]
pub fn preview_path(seed: u64) -> String {
    Sparkline::from_seed(seed).to_svg_path()
}

struct Running {
    window: Window,
    render_loop: Rc<RefCell<RenderLoop<Canvas2DRenderer>>>,
    frame: FrameCallback,
    frame_id: Rc<Cell<Option<i32>>>,
    on_resize: Closure<dyn FnMut()>,
}

/// Handle to a mounted background.
///
/// Dropping the handle (or calling `free()` from JS) tears it down.
#[wasm_bindgen]
pub struct WelcomeBackground {
    running: Option<Running>,
}

#[wasm_bindgen]
impl WelcomeBackground {
    /// Mount on the canvas with ID `canvas_id`.
    ///
    /// `config_json` overrides the defaults. Never throws: on failure a
    /// warning is logged and an inert handle is returned.
    #[wasm_bindgen(constructor)]
    pub fn mount(canvas_id: &str, config_json: Option<String>) -> WelcomeBackground {
        match start(canvas_id, config_json.as_deref()) {
            Ok(running) => Self {
                running: Some(running),
            },
            Err(err) => {
                log::warn!("welcome background disabled: {err}");
                Self { running: None }
            }
        }
    }

    /// True while frames are being scheduled.
    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.running.is_some()
    }

    /// Cancel the pending frame and release listeners. Safe to call twice.
    pub fn unmount(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };
        if let Some(id) = running.frame_id.take() {
            running.window.cancel_animation_frame(id).ok();
        }
        running
            .window
            .remove_event_listener_with_callback(
                "resize",
                running.on_resize.as_ref().unchecked_ref(),
            )
            .ok();
        if let Ok(mut render_loop) = running.render_loop.try_borrow_mut() {
            render_loop.unmount();
        }
        // Breaks the closure's reference to itself.
        running.frame.borrow_mut().take();
    }
}

impl Drop for WelcomeBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn start(canvas_id: &str, config_json: Option<&str>) -> Result<Running, MountError> {
    let config = match config_json.map(str::trim).filter(|json| !json.is_empty()) {
        Some(json) => BackgroundConfig::from_json(json)?,
        None => BackgroundConfig::default(),
    };

    let window = web_sys::window()
        .ok_or_else(|| EngineError::ContextUnavailable("no window".into()))?;
    let canvas = window
        .document()
        .ok_or_else(|| EngineError::ContextUnavailable("no document".into()))?
        .get_element_by_id(canvas_id)
        .ok_or_else(|| EngineError::ElementNotFound(canvas_id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| EngineError::NotACanvas(canvas_id.to_string()))?;

    let mut renderer = Canvas2DRenderer::new(canvas)?;
    let (width, height) = window_size(&window);
    renderer.set_size(width as u32, height as u32);

    let logo = if config.logo.enabled {
        let logo = LogoImage::load(&config.logo.url)?;
        renderer.register_image(LOGO_IMAGE, logo.element().clone());
        Some(logo)
    } else {
        None
    };

    let seed = config.seed.unwrap_or_else(random_seed);
    let render_loop = Rc::new(RefCell::new(RenderLoop::mount(renderer, config, seed)?));

    let pending: Rc<Cell<Option<(f32, f32)>>> = Rc::new(Cell::new(None));
    let on_resize = {
        let pending = Rc::clone(&pending);
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || pending.set(Some(window_size(&window))))
    };
    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(|e| EngineError::ContextUnavailable(format!("resize listener: {e:?}")))?;

    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let frame_id = Rc::new(Cell::new(None));
    {
        let next = Rc::clone(&frame);
        let window = window.clone();
        let render_loop = Rc::clone(&render_loop);
        let frame_id = Rc::clone(&frame_id);
        *frame.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
            let control = {
                let Ok(mut render_loop) = render_loop.try_borrow_mut() else {
                    return;
                };
                if let Some((width, height)) = pending.take() {
                    if let Err(err) = render_loop.request_resize_to(width, height) {
                        log::warn!("ignoring resize: {err}");
                    }
                }
                let logo_ready = logo.as_ref().is_some_and(LogoImage::is_ready);
                render_loop.tick(FrameContext::new(js_sys::Date::now(), logo_ready))
            };
            frame_id.set(match control {
                LoopControl::Continue => schedule(&window, &next),
                LoopControl::Stop => None,
            });
        }));
    }
    frame_id.set(schedule(&window, &frame));

    Ok(Running {
        window,
        render_loop,
        frame,
        frame_id,
        on_resize,
    })
}

fn schedule(window: &Window, frame: &FrameCallback) -> Option<i32> {
    let frame = frame.borrow();
    let callback = frame.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

fn window_size(window: &Window) -> (f32, f32) {
    let dimension = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (dimension(window.inner_width()), dimension(window.inner_height()))
}

fn random_seed() -> u64 {
    let half = || (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (half() << 32) | half()
}
