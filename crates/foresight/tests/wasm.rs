//! WASM browser tests - run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

use foresight::browser::{
    preview_path, Canvas2DRenderer, ProgressHandle, TransitionHandle, WelcomeBackground,
};
use foresight::widgets::BackgroundConfig;
use foresight::{FrameContext, LoopControl, RenderLoop, Surface};

fn attach_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document");
    let canvas = document
        .create_element("canvas")
        .expect("create canvas")
        .dyn_into::<HtmlCanvasElement>()
        .expect("canvas element");
    canvas.set_id(id);
    document
        .body()
        .expect("body")
        .append_child(&canvas)
        .expect("append");
    canvas
}

// ============================================================================
// Mounting
// ============================================================================

#[wasm_bindgen_test]
fn test_mount_and_unmount() {
    attach_canvas("bg-mount");
    let mut bg = WelcomeBackground::mount("bg-mount", None);
    assert!(bg.is_mounted());

    bg.unmount();
    assert!(!bg.is_mounted());
    bg.unmount();
}

#[wasm_bindgen_test]
fn test_missing_canvas_is_inert() {
    let bg = WelcomeBackground::mount("no-such-canvas", None);
    assert!(!bg.is_mounted());
}

#[wasm_bindgen_test]
fn test_bad_config_is_inert() {
    attach_canvas("bg-bad-config");
    let bg = WelcomeBackground::mount("bg-bad-config", Some("{not json".into()));
    assert!(!bg.is_mounted());
}

#[wasm_bindgen_test]
fn test_mount_with_config() {
    attach_canvas("bg-config");
    let bg = WelcomeBackground::mount(
        "bg-config",
        Some(r##"{"accent": "#22c55e", "seed": 7, "logo": {"enabled": false}}"##.into()),
    );
    assert!(bg.is_mounted());
}

// ============================================================================
// Canvas2D Replay
// ============================================================================

#[wasm_bindgen_test]
fn test_render_loop_on_canvas() {
    let canvas = attach_canvas("bg-loop");
    let renderer = Canvas2DRenderer::new(canvas).expect("2d context");
    renderer.set_size(640, 480);
    assert_eq!(renderer.size().width, 640.0);

    let mut bg = RenderLoop::mount(renderer, BackgroundConfig::default(), 11).expect("mount");
    for tick in 0..5 {
        let control = bg.tick(FrameContext::new(f64::from(tick) * 16.0, false));
        assert_eq!(control, LoopControl::Continue);
    }

    bg.request_resize_to(320.0, 480.0).expect("resize");
    bg.tick(FrameContext::new(80.0, false));
    assert_eq!(bg.surface().width(), 320);
    assert_eq!(bg.engine().field().len(), 30);
}

#[wasm_bindgen_test]
fn test_preview_path_is_seeded() {
    let path = preview_path(3);
    assert!(path.starts_with("M "));
    assert_eq!(path, preview_path(3));
}

// ============================================================================
// Transition and Progress Handles
// ============================================================================

#[wasm_bindgen_test]
fn test_transition_handle_completes_once() {
    let mut transition = TransitionHandle::new();
    assert_eq!(transition.phase(), "idle");
    assert!(transition.trigger());
    assert!(!transition.trigger());

    assert!(!transition.advance(400.0));
    assert_eq!(transition.phase(), "logo");
    assert_eq!(transition.backdrop_alpha(), 1.0);
    assert!(transition.advance(1000.0));
    assert!(!transition.advance(1000.0));
    assert_eq!(transition.phase(), "idle");
}

#[wasm_bindgen_test]
fn test_progress_handle_reaches_done() {
    let mut progress = ProgressHandle::new();
    assert_eq!(progress.percent(), 0);
    assert_eq!(progress.advance(250.0), 2);
    assert_eq!(progress.percent(), 2);
    assert!(progress.status().starts_with("Connecting to Data Source"));

    progress.advance(20_000.0);
    assert!(progress.is_done());
    assert_eq!(progress.status(), "Insights Generated. Strategic Dashboard Ready.");
}
