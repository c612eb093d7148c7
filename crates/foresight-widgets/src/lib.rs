//! Scene components for the ForesightFlow animated background.

pub mod config;
pub mod layout;
pub mod logo;
pub mod overlay;
pub mod particles;
pub mod progress;
pub mod scene;
pub mod sparkline;
pub mod theme;
pub mod transition;

pub use config::{BackgroundConfig, ConfigError, LogoConfig, OverlayConfig, ParticleConfig};
pub use layout::{overlays_for, Slot, SlotChart};
pub use logo::{LogoGlow, LogoPlacement};
pub use overlay::{ChartKind, ChartOverlay};
pub use particles::{Link, Particle, ParticleField, ParticleStyle};
pub use progress::AnalysisProgress;
pub use scene::{BackgroundEngine, LOGO_IMAGE};
pub use sparkline::Sparkline;
pub use transition::{PageTransition, TransitionEvent, TransitionPhase};
