//! JavaScript handles for the page transition and analysis progress.
//!
//! Both are timer driven; the page passes elapsed milliseconds in from its
//! own `setTimeout` or animation callback.

use foresight_widgets::{AnalysisProgress, PageTransition, TransitionEvent};
use wasm_bindgen::prelude::*;

/// Exit, logo and enter sequence around a navigation.
#[wasm_bindgen(js_name = PageTransition)]
#[derive(Debug, Default)]
pub struct TransitionHandle {
    inner: PageTransition,
}

#[wasm_bindgen(js_class = PageTransition)]
impl TransitionHandle {
    /// Idle transition.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the sequence. Returns false if one is already running.
    pub fn trigger(&mut self) -> bool {
        self.inner.trigger()
    }

    /// Advance by `dt_ms`. Returns true exactly once, when the page should navigate.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        self.inner.advance(dt_ms) == Some(TransitionEvent::Complete)
    }

    /// `"idle"`, `"exit"`, `"logo"` or `"enter"`.
    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        self.inner.phase().name().to_string()
    }

    #[wasm_bindgen(getter, js_name = backdropAlpha)]
    pub fn backdrop_alpha(&self) -> f32 {
        self.inner.backdrop_alpha()
    }
}

/// Simulated analysis progress.
#[wasm_bindgen(js_name = AnalysisProgress)]
#[derive(Debug, Default)]
pub struct ProgressHandle {
    inner: AnalysisProgress,
}

#[wasm_bindgen(js_class = AnalysisProgress)]
impl ProgressHandle {
    /// Progress at 0%.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed elapsed wall time; returns the number of whole intervals applied.
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        self.inner.advance(elapsed_ms)
    }

    #[wasm_bindgen(getter)]
    pub fn percent(&self) -> u8 {
        self.inner.percent()
    }

    #[wasm_bindgen(getter, js_name = isDone)]
    pub fn is_done(&self) -> bool {
        self.inner.is_done()
    }

    /// Status line for the current percentage.
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.inner.status()
    }
}
