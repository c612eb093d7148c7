//! Engine configuration.
//!
//! Every field has a default matching the production site, so an empty
//! document (`{}` or an empty TOML file) yields the stock background.
//!
//! ```
//! use foresight_widgets::BackgroundConfig;
//!
//! let config = BackgroundConfig::from_json(r#"{ "particles": { "wide_count": 80 } }"#).unwrap();
//! assert_eq!(config.particles.wide_count, 80);
//! assert_eq!(config.particles.narrow_count, 30);
//! ```

use foresight_core::{
    Color, ColorParseError, EngineError, Viewport, ViewportClass, DEFAULT_BREAKPOINT,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON document.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML document.
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// A field is out of range.
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        /// Dotted field path
        field: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },

    /// The accent color is not a hex color.
    #[error("invalid accent color: {0}")]
    Color(#[from] ColorParseError),
}

/// Particle field settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Particle count on narrow viewports
    pub narrow_count: usize,
    /// Particle count on wide viewports
    pub wide_count: usize,
    /// Largest velocity component magnitude (px/tick)
    pub max_speed: f32,
    /// Dot radius on narrow viewports
    pub narrow_radius: f32,
    /// Dot radius on wide viewports
    pub wide_radius: f32,
    /// Link distance threshold on narrow viewports
    pub narrow_link_distance: f32,
    /// Link distance threshold on wide viewports
    pub wide_link_distance: f32,
    /// Link alpha at zero distance
    pub link_alpha: f32,
    /// Dot alpha
    pub dot_alpha: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            narrow_count: 30,
            wide_count: 50,
            max_speed: 0.25,
            narrow_radius: 1.5,
            wide_radius: 2.0,
            narrow_link_distance: 100.0,
            wide_link_distance: 150.0,
            link_alpha: 0.2,
            dot_alpha: 0.6,
        }
    }
}

impl ParticleConfig {
    /// Particle count for a viewport class.
    #[must_use]
    pub fn count(&self, class: ViewportClass) -> usize {
        class.pick(self.narrow_count, self.wide_count)
    }

    /// Dot radius for a viewport class.
    #[must_use]
    pub fn radius(&self, class: ViewportClass) -> f32 {
        class.pick(self.narrow_radius, self.wide_radius)
    }

    /// Link distance threshold for a viewport class.
    #[must_use]
    pub fn link_distance(&self, class: ViewportClass) -> f32 {
        class.pick(self.narrow_link_distance, self.wide_link_distance)
    }
}

/// Chart overlay settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Vertical bobbing amplitude on narrow viewports (px/tick)
    pub narrow_drift: f32,
    /// Vertical bobbing amplitude on wide viewports (px/tick)
    pub wide_drift: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            narrow_drift: 0.1,
            wide_drift: 0.2,
        }
    }
}

impl OverlayConfig {
    /// Bobbing amplitude for a viewport class.
    #[must_use]
    pub fn drift(&self, class: ViewportClass) -> f32 {
        class.pick(self.narrow_drift, self.wide_drift)
    }
}

/// Center logo settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Image URL
    pub url: String,
    /// Whether the logo is composited at all
    pub enabled: bool,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            url: "/logos/no-bg-ff.png".to_string(),
            enabled: true,
        }
    }
}

/// Top-level background configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Width (px) below which the viewport is narrow
    pub breakpoint: f32,
    /// Accent color as a hex string
    pub accent: String,
    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,
    /// Particle field settings
    pub particles: ParticleConfig,
    /// Chart overlay settings
    pub overlays: OverlayConfig,
    /// Center logo settings
    pub logo: LogoConfig,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            accent: "#0ea5e9".to_string(),
            seed: None,
            particles: ParticleConfig::default(),
            overlays: OverlayConfig::default(),
            logo: LogoConfig::default(),
        }
    }
}

impl BackgroundConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parsed accent color.
    pub fn accent_color(&self) -> Result<Color, ConfigError> {
        Ok(Color::from_hex(&self.accent)?)
    }

    /// Classify a canvas size against the configured breakpoint.
    pub fn viewport(&self, width: f32, height: f32) -> Result<Viewport, EngineError> {
        Viewport::new(width, height, self.breakpoint)
    }

    /// Check ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.particles;
        let checks: [(bool, &'static str, &'static str); 8] = [
            (
                self.breakpoint.is_finite() && self.breakpoint > 0.0,
                "breakpoint",
                "must be a positive number",
            ),
            (
                p.narrow_count > 0 && p.wide_count > 0,
                "particles.count",
                "must be at least 1",
            ),
            (
                p.max_speed.is_finite() && p.max_speed >= 0.0,
                "particles.max_speed",
                "must be a non-negative number",
            ),
            (
                p.narrow_radius > 0.0 && p.wide_radius > 0.0,
                "particles.radius",
                "must be positive",
            ),
            (
                p.narrow_link_distance > 0.0 && p.wide_link_distance > 0.0,
                "particles.link_distance",
                "must be positive",
            ),
            (
                (0.0..=1.0).contains(&p.link_alpha) && (0.0..=1.0).contains(&p.dot_alpha),
                "particles.alpha",
                "must be within [0, 1]",
            ),
            (
                self.overlays.narrow_drift.is_finite() && self.overlays.wide_drift.is_finite(),
                "overlays.drift",
                "must be finite",
            ),
            (
                !self.logo.enabled || !self.logo.url.is_empty(),
                "logo.url",
                "must be set when the logo is enabled",
            ),
        ];

        if let Some((_, field, reason)) = checks.iter().find(|(ok, _, _)| !ok) {
            return Err(ConfigError::Invalid { field, reason });
        }
        self.accent_color()?;
        Ok(())
    }
}
