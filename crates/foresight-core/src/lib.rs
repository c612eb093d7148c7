//! Core types and traits for the ForesightFlow background engine.
//!
//! This crate provides foundational types used throughout the workspace:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Draw commands: [`DrawCommand`] and the [`Canvas`] trait
//! - Viewport classification: [`Viewport`], [`ViewportClass`]

mod canvas;
mod color;
pub mod draw;
mod error;
mod geometry;
mod viewport;

pub use canvas::{Canvas, Layer, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use draw::{
    BlendMode, BoxStyle, DrawCommand, GradientStop, ImageRef, LinearGradient, Paint, Shadow,
    StrokeStyle, Transform2D,
};
pub use error::EngineError;
pub use geometry::{Point, Rect, Size};
pub use viewport::{Viewport, ViewportClass, DEFAULT_BREAKPOINT};
