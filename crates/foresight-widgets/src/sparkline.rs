//! Sharp-turn preview sparkline for landing cards.

use std::fmt::Write as _;

use foresight_core::{Canvas, Color, Point, StrokeStyle};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Default viewbox width.
pub const PREVIEW_WIDTH: f32 = 200.0;
/// Default viewbox height.
pub const PREVIEW_HEIGHT: f32 = 70.0;
/// Default number of segments.
pub const PREVIEW_SEGMENTS: usize = 12;

/// A random walk drawn with straight segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    points: Vec<Point>,
    width: f32,
    height: f32,
}

impl Sparkline {
    /// Generate `segments + 1` points across `width`.
    ///
    /// The walk starts at 60% of the height and each step jumps by up to
    /// ±30% of the height, clamped to the middle 80% band.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, segments: usize) -> Self {
        let low = height * 0.1;
        let high = height * 0.9;
        let span = segments.max(1) as f32;
        let mut points = Vec::with_capacity(segments + 1);
        let mut y = height * 0.6;
        for i in 0..=segments {
            if i > 0 {
                let variation = (rng.random::<f32>() - 0.5) * height * 0.6;
                y = (y + variation).clamp(low, high);
            }
            points.push(Point::new(i as f32 / span * width, y));
        }
        Self {
            points,
            width,
            height,
        }
    }

    /// Preview-card sparkline with the default viewbox.
    pub fn preview<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::generate(rng, PREVIEW_WIDTH, PREVIEW_HEIGHT, PREVIEW_SEGMENTS)
    }

    /// Preview sparkline from a seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::preview(&mut SmallRng::seed_from_u64(seed))
    }

    /// Vertices.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Viewbox width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Viewbox height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// SVG path data: `M x0 y0 L x1 y1 ...`.
    #[must_use]
    pub fn to_svg_path(&self) -> String {
        let mut path = String::new();
        for (i, p) in self.points.iter().enumerate() {
            let op = if i == 0 { "M" } else { " L" };
            let _ = write!(path, "{op} {} {}", p.x, p.y);
        }
        path
    }

    /// Paint the line and its dots.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.draw_path(&self.points, StrokeStyle::new(Color::WHITE, 2.0));
        for point in &self.points {
            canvas.fill_circle(*point, 1.5, Color::WHITE);
        }
    }
}
