//! ForesightFlow animated welcome background.
//!
//! A drifting particle field with chart overlays and a glowing logo, drawn
//! to a full-viewport canvas.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { WelcomeBackground } from './foresight.js';
//!
//! async function main() {
//!     await init();
//!     const bg = new WelcomeBackground('welcome-bg', '{"accent": "#0ea5e9"}');
//!     window.addEventListener('pagehide', () => bg.unmount());
//! }
//! ```
//!
//! # Native Usage
//!
//! The frame loop is platform independent and can be driven against any
//! [`Surface`]:
//!
//! ```
//! use foresight::{FrameContext, LoopControl, RecordingSurface, RenderLoop};
//! use foresight::widgets::BackgroundConfig;
//!
//! let surface = RecordingSurface::new(1024.0, 768.0);
//! let mut bg = RenderLoop::mount(surface, BackgroundConfig::default(), 42).unwrap();
//! assert_eq!(bg.tick(FrameContext::new(0.0, false)), LoopControl::Continue);
//! assert_eq!(bg.engine().field().len(), 50);
//! ```

pub mod browser;
pub mod driver;
mod error;

pub use driver::{FrameContext, LoopControl, RecordingSurface, RenderLoop, Surface};
pub use error::MountError;
pub use foresight_core::*;
pub use foresight_widgets as widgets;

#[cfg(target_arch = "wasm32")]
pub use browser::{Canvas2DRenderer, WelcomeBackground};
