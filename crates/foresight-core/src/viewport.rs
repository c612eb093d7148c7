//! Viewport size and breakpoint classification.

use crate::error::EngineError;
use crate::Size;
use serde::{Deserialize, Serialize};

/// Default width (px) below which a viewport counts as narrow.
pub const DEFAULT_BREAKPOINT: f32 = 768.0;

/// Responsive class of a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewportClass {
    /// Phone-sized viewport
    Narrow,
    /// Tablet/desktop viewport
    Wide,
}

impl ViewportClass {
    /// Classify a width against a breakpoint.
    #[must_use]
    pub fn classify(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    /// Check for the narrow class.
    #[must_use]
    pub const fn is_narrow(&self) -> bool {
        matches!(self, Self::Narrow)
    }

    /// Pick the narrow or wide value.
    #[must_use]
    pub fn pick<T>(&self, narrow: T, wide: T) -> T {
        match self {
            Self::Narrow => narrow,
            Self::Wide => wide,
        }
    }
}

/// Canvas dimensions plus the class derived from them.
///
/// The class is captured when the viewport is built and only changes when a
/// new viewport replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    size: Size,
    class: ViewportClass,
}

impl Viewport {
    /// Build a viewport, classifying it against `breakpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidViewport`] for non-finite or negative sizes.
    pub fn new(width: f32, height: f32, breakpoint: f32) -> Result<Self, EngineError> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(EngineError::InvalidViewport { width, height });
        }
        Ok(Self {
            size: Size::new(width, height),
            class: ViewportClass::classify(width, breakpoint),
        })
    }

    /// Canvas size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Canvas width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Canvas height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Responsive class.
    #[must_use]
    pub const fn class(&self) -> ViewportClass {
        self.class
    }

    /// Shorthand for `class().is_narrow()`.
    #[must_use]
    pub const fn is_narrow(&self) -> bool {
        self.class.is_narrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_breakpoint_is_exclusive() {
        assert_eq!(ViewportClass::classify(767.9, 768.0), ViewportClass::Narrow);
        assert_eq!(ViewportClass::classify(768.0, 768.0), ViewportClass::Wide);
        assert_eq!(ViewportClass::classify(1920.0, 768.0), ViewportClass::Wide);
    }

    #[test]
    fn test_pick() {
        assert_eq!(ViewportClass::Narrow.pick(30, 50), 30);
        assert_eq!(ViewportClass::Wide.pick(30, 50), 50);
    }

    #[test]
    fn test_viewport_new() {
        let v = Viewport::new(1024.0, 768.0, DEFAULT_BREAKPOINT).unwrap();
        assert_eq!(v.width(), 1024.0);
        assert_eq!(v.height(), 768.0);
        assert!(!v.is_narrow());

        let phone = Viewport::new(390.0, 844.0, DEFAULT_BREAKPOINT).unwrap();
        assert!(phone.is_narrow());
    }

    #[test]
    fn test_viewport_rejects_bad_sizes() {
        assert!(Viewport::new(f32::NAN, 10.0, DEFAULT_BREAKPOINT).is_err());
        assert!(Viewport::new(10.0, -1.0, DEFAULT_BREAKPOINT).is_err());
        assert!(Viewport::new(f32::INFINITY, 10.0, DEFAULT_BREAKPOINT).is_err());
    }

    #[test]
    fn test_zero_sized_viewport_is_allowed() {
        let v = Viewport::new(0.0, 0.0, DEFAULT_BREAKPOINT).unwrap();
        assert!(v.is_narrow());
    }
}
