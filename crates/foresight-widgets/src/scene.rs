//! The animated background: particles, overlays and the logo glow.
//!
//! [`BackgroundEngine`] owns every piece of per-frame state. A host calls
//! [`update`](BackgroundEngine::update) once per tick and then
//! [`paint`](BackgroundEngine::paint), or [`frame`](BackgroundEngine::frame)
//! for both at once.
//!
//! # Example
//!
//! ```
//! use foresight_widgets::{BackgroundConfig, BackgroundEngine};
//!
//! let config = BackgroundConfig::default();
//! let viewport = config.viewport(1024.0, 768.0).unwrap();
//! let mut engine = BackgroundEngine::new(config, viewport, 42).unwrap();
//!
//! let commands = engine.frame(0.0, false);
//! assert!(!commands.is_empty());
//! assert_eq!(engine.field().len(), 50);
//! assert_eq!(engine.overlays().len(), 7);
//! ```

use foresight_core::{
    Canvas, Color, DrawCommand, ImageRef, LinearGradient, Point, RecordingCanvas, Rect, Viewport,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::{BackgroundConfig, ConfigError};
use crate::layout::overlays_for;
use crate::logo::LogoGlow;
use crate::overlay::ChartOverlay;
use crate::particles::{ParticleField, ParticleStyle};
use crate::theme;

/// Image handle the engine paints the logo with unless told otherwise.
pub const LOGO_IMAGE: ImageRef = 0;

/// Background engine state.
#[derive(Debug, Clone)]
pub struct BackgroundEngine {
    config: BackgroundConfig,
    accent: Color,
    viewport: Viewport,
    rng: SmallRng,
    field: ParticleField,
    overlays: Vec<ChartOverlay>,
    logo: LogoGlow,
    ticks: u64,
}

impl BackgroundEngine {
    /// Build an engine for `viewport`.
    ///
    /// The RNG is seeded from `config.seed` when set, otherwise from `seed`.
    pub fn new(config: BackgroundConfig, viewport: Viewport, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let accent = config.accent_color()?;
        let mut rng = SmallRng::seed_from_u64(config.seed.unwrap_or(seed));
        let field = spawn_field(&mut rng, &config, &viewport, accent);
        let overlays = overlays_for(&viewport);
        log::debug!(
            "background engine: {}x{} {:?}, {} particles, {} overlays",
            viewport.width(),
            viewport.height(),
            viewport.class(),
            field.len(),
            overlays.len()
        );

        Ok(Self {
            config,
            accent,
            viewport,
            rng,
            field,
            overlays,
            logo: LogoGlow::new(LOGO_IMAGE, accent),
            ticks: 0,
        })
    }

    /// Paint the logo with a different image handle.
    #[must_use]
    pub fn with_logo_image(mut self, image: ImageRef) -> Self {
        self.logo = LogoGlow::new(image, self.accent);
        self
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    /// Current viewport.
    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Particle field.
    #[must_use]
    pub const fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Overlays in paint order.
    #[must_use]
    pub fn overlays(&self) -> &[ChartOverlay] {
        &self.overlays
    }

    /// Ticks advanced since construction.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Apply a new viewport: particles are respawned and overlays rebuilt.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.field = spawn_field(&mut self.rng, &self.config, &viewport, self.accent);
        self.overlays = overlays_for(&viewport);
        log::debug!(
            "resized to {}x{} ({:?})",
            viewport.width(),
            viewport.height(),
            viewport.class()
        );
    }

    /// Advance particles, then overlays, by one tick.
    pub fn update(&mut self, now_ms: f64) {
        self.field.step();
        let amplitude = self.config.overlays.drift(self.viewport.class());
        for overlay in &mut self.overlays {
            overlay.update(now_ms, amplitude);
        }
        self.ticks += 1;
    }

    /// Paint the current state back to front.
    pub fn paint(&self, canvas: &mut dyn Canvas, now_ms: f64, logo_ready: bool) {
        let size = self.viewport.size();
        let backdrop = LinearGradient::new(Point::ORIGIN, Point::new(size.width, size.height))
            .stop(0.0, theme::slate(1.0))
            .stop(0.5, Color::from_rgb8(theme::SLATE_800, 1.0))
            .stop(1.0, theme::slate(1.0));
        canvas.fill_rect(Rect::from_size(size), backdrop.into());

        self.field.paint(canvas);

        let class = self.viewport.class();
        for overlay in &self.overlays {
            overlay.paint(canvas, class);
        }

        if self.config.logo.enabled {
            self.logo.paint(canvas, &self.viewport, now_ms, logo_ready);
        }
    }

    /// Advance one tick and record the resulting frame.
    pub fn frame(&mut self, now_ms: f64, logo_ready: bool) -> Vec<DrawCommand> {
        self.update(now_ms);
        let mut canvas = RecordingCanvas::new();
        self.paint(&mut canvas, now_ms, logo_ready);
        canvas.take_commands()
    }
}

fn spawn_field(
    rng: &mut SmallRng,
    config: &BackgroundConfig,
    viewport: &Viewport,
    accent: Color,
) -> ParticleField {
    let class = viewport.class();
    let particles = &config.particles;
    let style = ParticleStyle {
        radius: particles.radius(class),
        link_distance: particles.link_distance(class),
        link_alpha: particles.link_alpha,
        dot_color: accent.with_alpha(particles.dot_alpha),
        link_color: accent,
    };
    ParticleField::spawn(
        rng,
        viewport.size(),
        particles.count(class),
        particles.max_speed,
        style,
    )
}
