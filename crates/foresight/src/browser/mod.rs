//! Browser runtime.
//!
//! Replays recorded frames on a Canvas2D context and drives the
//! [`RenderLoop`](crate::RenderLoop) from `requestAnimationFrame`.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
#[cfg(target_arch = "wasm32")]
pub mod image;
#[cfg(target_arch = "wasm32")]
pub mod widgets;

// Cross-platform modules
pub mod css;

#[cfg(target_arch = "wasm32")]
pub use app::{init, preview_path, WelcomeBackground};
#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2DRenderer;
pub use css::color_to_css;
#[cfg(target_arch = "wasm32")]
pub use image::LogoImage;
#[cfg(target_arch = "wasm32")]
pub use widgets::{ProgressHandle, TransitionHandle};
