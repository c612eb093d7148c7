//! Frame loop driver.
//!
//! [`RenderLoop`] owns a [`BackgroundEngine`] and a [`Surface`] and runs one
//! frame per [`tick`](RenderLoop::tick): apply a pending resize, advance the
//! scene, record it, then hand the commands to the surface. Scheduling the
//! next tick is the host's job; the returned [`LoopControl`] says whether to.
//!
//! The driver has no platform dependencies. The browser runtime drives it
//! from `requestAnimationFrame`; tests drive it with a [`RecordingSurface`].

use foresight_core::{DrawCommand, ImageRef, RecordingCanvas, Size, Viewport};
use foresight_widgets::{BackgroundConfig, BackgroundEngine};

use crate::MountError;

/// A drawing target the loop presents frames to.
pub trait Surface {
    /// Current size in pixels.
    fn size(&self) -> Size;

    /// Resize the backing store.
    fn resize(&mut self, size: Size);

    /// Replace the visible frame with `commands`.
    fn present(&mut self, commands: &[DrawCommand]);
}

/// Whether the host should schedule another tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Schedule the next frame.
    Continue,
    /// The loop is unmounted; do not reschedule.
    Stop,
}

/// Per-tick inputs from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Wall-clock time (ms)
    pub now_ms: f64,
    /// Whether the logo image has finished loading
    pub logo_ready: bool,
}

impl FrameContext {
    /// Context at `now_ms`.
    #[must_use]
    pub const fn new(now_ms: f64, logo_ready: bool) -> Self {
        Self { now_ms, logo_ready }
    }
}

/// The running background.
#[derive(Debug)]
pub struct RenderLoop<S: Surface> {
    surface: S,
    engine: BackgroundEngine,
    pending: Option<Viewport>,
    mounted: bool,
    frames: u64,
}

impl<S: Surface> RenderLoop<S> {
    /// Start the background on `surface`.
    ///
    /// The viewport is taken from the surface size and classified with the
    /// configured breakpoint.
    pub fn mount(surface: S, config: BackgroundConfig, seed: u64) -> Result<Self, MountError> {
        let size = surface.size();
        let viewport = config.viewport(size.width, size.height)?;
        let engine = BackgroundEngine::new(config, viewport, seed)?;
        log::info!(
            "background mounted at {}x{} ({:?})",
            size.width,
            size.height,
            viewport.class()
        );
        Ok(Self {
            surface,
            engine,
            pending: None,
            mounted: true,
            frames: 0,
        })
    }

    /// Use `image` as the logo handle.
    #[must_use]
    pub fn with_logo_image(mut self, image: ImageRef) -> Self {
        self.engine = self.engine.with_logo_image(image);
        self
    }

    /// Run one frame.
    pub fn tick(&mut self, ctx: FrameContext) -> LoopControl {
        if !self.mounted {
            return LoopControl::Stop;
        }

        if let Some(viewport) = self.pending.take() {
            self.surface.resize(viewport.size());
            self.engine.resize(viewport);
        }

        self.engine.update(ctx.now_ms);
        let mut canvas = RecordingCanvas::new();
        self.engine.paint(&mut canvas, ctx.now_ms, ctx.logo_ready);
        self.surface.present(canvas.commands());
        self.frames += 1;
        LoopControl::Continue
    }

    /// Queue a resize for the next tick. A later request replaces an earlier
    /// one; requests after unmount are dropped.
    pub fn request_resize(&mut self, viewport: Viewport) {
        if self.mounted {
            self.pending = Some(viewport);
        }
    }

    /// Classify a window size and queue it.
    pub fn request_resize_to(&mut self, width: f32, height: f32) -> Result<(), MountError> {
        let viewport = self.engine.config().viewport(width, height)?;
        self.request_resize(viewport);
        Ok(())
    }

    /// Stop the loop. Further ticks return [`LoopControl::Stop`] and leave the
    /// surface untouched.
    pub fn unmount(&mut self) {
        if self.mounted {
            log::info!("background unmounted after {} frames", self.frames);
        }
        self.mounted = false;
        self.pending = None;
    }

    /// True until [`unmount`](Self::unmount).
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Frames presented so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Resize waiting for the next tick.
    #[must_use]
    pub const fn pending_resize(&self) -> Option<Viewport> {
        self.pending
    }

    /// The scene.
    #[must_use]
    pub const fn engine(&self) -> &BackgroundEngine {
        &self.engine
    }

    /// The surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }
}

/// In-memory surface that keeps the last frame and counts calls.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Size,
    last_frame: Vec<DrawCommand>,
    presents: u64,
    resizes: u64,
}

impl RecordingSurface {
    /// Surface of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            ..Self::default()
        }
    }

    /// Last presented frame.
    #[must_use]
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    /// Number of presented frames.
    #[must_use]
    pub const fn presents(&self) -> u64 {
        self.presents
    }

    /// Number of resizes.
    #[must_use]
    pub const fn resizes(&self) -> u64 {
        self.resizes
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.resizes += 1;
    }

    fn present(&mut self, commands: &[DrawCommand]) {
        self.last_frame = commands.to_vec();
        self.presents += 1;
    }
}
