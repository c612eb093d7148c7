//! Brand palette for the animated background.
//!
//! Tones are stored as 8-bit RGB triples; every use site picks its own alpha,
//! the same way the site's CSS writes `rgba(14, 165, 233, 0.6)`.

use foresight_core::Color;

/// Sky blue, the accent tone.
pub const SKY: [u8; 3] = [14, 165, 233];
/// Blue-500.
pub const BLUE: [u8; 3] = [59, 130, 246];
/// Blue-600.
pub const BLUE_600: [u8; 3] = [37, 99, 235];
/// Blue-700.
pub const BLUE_700: [u8; 3] = [29, 78, 216];
/// Blue-800.
pub const BLUE_800: [u8; 3] = [30, 64, 175];
/// Blue-900.
pub const BLUE_900: [u8; 3] = [30, 58, 138];
/// Slate-900, the page background.
pub const SLATE_900: [u8; 3] = [15, 23, 42];
/// Slate-800, the background gradient midpoint.
pub const SLATE_800: [u8; 3] = [30, 41, 59];

/// Pie slice tones, cycled by slice index.
pub const PIE_TONES: [[u8; 3]; 6] = [SKY, BLUE, BLUE_600, BLUE_700, BLUE_800, BLUE_900];

/// Sky blue at the given alpha.
#[must_use]
pub fn sky(alpha: f32) -> Color {
    Color::from_rgb8(SKY, alpha)
}

/// Blue-500 at the given alpha.
#[must_use]
pub fn blue(alpha: f32) -> Color {
    Color::from_rgb8(BLUE, alpha)
}

/// Slate-900 at the given alpha.
#[must_use]
pub fn slate(alpha: f32) -> Color {
    Color::from_rgb8(SLATE_900, alpha)
}

/// Pie slice color for `index`.
#[must_use]
pub fn pie_slice(index: usize, alpha: f32) -> Color {
    Color::from_rgb8(PIE_TONES[index % PIE_TONES.len()], alpha)
}
