//! Error types for engine start-up.

use thiserror::Error;

/// Errors that abort starting the background engine.
///
/// None of these are raised once the frame loop is running.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// No 2D drawing context could be acquired.
    #[error("2d context unavailable: {0}")]
    ContextUnavailable(String),

    /// The host document has no element with this ID.
    #[error("element '{0}' not found")]
    ElementNotFound(String),

    /// The element exists but is not a canvas.
    #[error("element '{0}' is not a canvas")]
    NotACanvas(String),

    /// The host reported an unusable viewport size.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport {
        /// Reported width
        width: f32,
        /// Reported height
        height: f32,
    },
}
