//! CSS value formatting for the Canvas2D context.

use foresight_core::Color;

/// CSS `rgba()` string for a color.
#[must_use]
pub fn color_to_css(color: &Color) -> String {
    format!(
        "rgba({},{},{},{})",
        channel(color.r),
        channel(color.g),
        channel(color.b),
        color.a.clamp(0.0, 1.0)
    )
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_css_rounds_channels() {
        let sky = Color::from_rgb8([14, 165, 233], 0.6);
        assert_eq!(color_to_css(&sky), "rgba(14,165,233,0.6)");
    }

    #[test]
    fn test_color_to_css_clamps() {
        let c = Color::new(1.5, -0.2, 0.5, 2.0);
        assert_eq!(color_to_css(&c), "rgba(255,0,128,1)");
    }
}
