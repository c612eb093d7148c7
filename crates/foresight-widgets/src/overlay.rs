//! Synthetic chart overlays.
//!
//! Each overlay is a small decorative chart that spins slowly around its
//! anchor and bobs vertically. Charts are painted in a local frame centered
//! on the anchor; the chart box is `size` wide and `0.6 * size` tall.

use std::f32::consts::{PI, TAU};

use foresight_core::{
    BoxStyle, Canvas, Color, Layer, LinearGradient, Point, Rect, StrokeStyle, Transform2D,
    ViewportClass,
};
use serde::{Deserialize, Serialize};

use crate::theme;

/// Chart body of an overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartKind {
    /// Polyline with point markers
    Line(Vec<f32>),
    /// Vertical bars
    Bar(Vec<f32>),
    /// Donut chart
    Pie(Vec<f32>),
    /// Filled area under a line
    Area(Vec<f32>),
    /// Half-circle gauge, value in `[0, 100]`
    Gauge(f32),
}

impl ChartKind {
    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Bar(_) => "bar",
            Self::Pie(_) => "pie",
            Self::Area(_) => "area",
            Self::Gauge(_) => "gauge",
        }
    }
}

/// A rotating, bobbing chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOverlay {
    kind: ChartKind,
    anchor: Point,
    size: f32,
    rotation: f32,
    rotation_speed: f32,
    opacity: Option<f32>,
}

impl ChartOverlay {
    /// Create an overlay with zero rotation.
    #[must_use]
    pub fn new(kind: ChartKind, anchor: Point, size: f32, rotation_speed: f32) -> Self {
        Self {
            kind,
            anchor,
            size,
            rotation: 0.0,
            rotation_speed,
            opacity: None,
        }
    }

    /// Set the overlay opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Chart body.
    #[must_use]
    pub const fn kind(&self) -> &ChartKind {
        &self.kind
    }

    /// Current anchor.
    #[must_use]
    pub const fn anchor(&self) -> Point {
        self.anchor
    }

    /// Chart size (px).
    #[must_use]
    pub const fn size(&self) -> f32 {
        self.size
    }

    /// Current rotation in `[0, 2π)`.
    #[must_use]
    pub const fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Rotation added per tick.
    #[must_use]
    pub const fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Explicit opacity, if any.
    #[must_use]
    pub const fn opacity(&self) -> Option<f32> {
        self.opacity
    }

    /// Advance one tick: spin and bob.
    pub fn update(&mut self, now_ms: f64, amplitude: f32) {
        self.rotation = (self.rotation + self.rotation_speed).rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs.
        if self.rotation >= TAU {
            self.rotation = 0.0;
        }
        let phase = now_ms * 0.001 + f64::from(self.anchor.x) * 0.01;
        self.anchor.y += phase.sin() as f32 * amplitude;
    }

    /// Paint the overlay in its local frame.
    pub fn paint(&self, canvas: &mut dyn Canvas, class: ViewportClass) {
        let mut layer = Layer::transformed(Transform2D::translate_rotate(
            self.anchor.x,
            self.anchor.y,
            self.rotation,
        ));
        if let Some(alpha) = self.opacity {
            layer = layer.with_alpha(alpha);
        }

        let size = self.size;
        canvas.layer(layer, &mut |c| match &self.kind {
            ChartKind::Line(values) => paint_line(c, values, size, class),
            ChartKind::Bar(values) => paint_bars(c, values, size),
            ChartKind::Pie(values) => paint_pie(c, values, size),
            ChartKind::Area(values) => paint_area(c, values, size, class),
            ChartKind::Gauge(value) => paint_gauge(c, *value, size, class),
        });
    }
}

/// Local-frame sample positions for a series in a `width x height` box.
///
/// Sample `i` of `n` sits at `x = -w/2 + i/(n-1) * w`; a single sample sits at
/// the left edge.
#[must_use]
pub fn sample_points(values: &[f32], width: f32, height: f32) -> Vec<Point> {
    let span = values.len().saturating_sub(1).max(1) as f32;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            Point::new(
                -width / 2.0 + i as f32 / span * width,
                -height / 2.0 + height - v / 100.0 * height,
            )
        })
        .collect()
}

/// Start and end angles of each pie slice, cumulative from 0.
///
/// The last slice ends at exactly 2π. Empty when the total is not positive.
#[must_use]
pub fn pie_slices(values: &[f32]) -> Vec<(f32, f32)> {
    let total: f32 = values.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return Vec::new();
    }

    let mut start = 0.0;
    let mut slices: Vec<(f32, f32)> = values
        .iter()
        .map(|v| {
            let end = start + v / total * TAU;
            let slice = (start, end);
            start = end;
            slice
        })
        .collect();
    if let Some(last) = slices.last_mut() {
        last.1 = TAU;
    }
    slices
}

fn chart_box(size: f32) -> Rect {
    Rect::centered(Point::ORIGIN, size, size * 0.6)
}

fn paint_frame(canvas: &mut dyn Canvas, size: f32, tone: fn(f32) -> Color) {
    let frame = chart_box(size);
    canvas.fill_rect(frame, tone(0.05).into());
    canvas.stroke_rect(frame, StrokeStyle::new(tone(0.2), 1.0));
}

fn paint_line(canvas: &mut dyn Canvas, values: &[f32], size: f32, class: ViewportClass) {
    paint_frame(canvas, size, theme::sky);

    let points = sample_points(values, size, size * 0.6);
    let width = class.pick(1.5, 2.0);
    canvas.draw_path(&points, StrokeStyle::new(theme::sky(0.8), width));
    for point in points {
        canvas.fill_circle(point, width, theme::sky(1.0));
    }
}

fn paint_bars(canvas: &mut dyn Canvas, values: &[f32], size: f32) {
    paint_frame(canvas, size, theme::blue);
    if values.is_empty() {
        return;
    }

    let (width, height) = (size, size * 0.6);
    let n = values.len() as f32;
    let slot = width / n;
    let bar_width = slot * 0.8;
    for (i, value) in values.iter().enumerate() {
        let x = -width / 2.0 + i as f32 / n * width + (slot - bar_width) / 2.0;
        let bar_height = value / 100.0 * height;
        let y = -height / 2.0 + height - bar_height;
        let bounds = Rect::new(x, y, bar_width, bar_height);

        let gradient = LinearGradient::new(Point::new(x, y), Point::new(x, y + bar_height))
            .stop(0.0, theme::blue(0.9))
            .stop(1.0, theme::sky(0.6));
        canvas.fill_rect(bounds, gradient.into());
        canvas.stroke_rect(bounds, StrokeStyle::new(theme::blue(0.3), 0.5));
    }
}

fn paint_pie(canvas: &mut dyn Canvas, values: &[f32], size: f32) {
    let radius = size / 2.0;
    let border = StrokeStyle::new(Color::WHITE.with_alpha(0.1), 1.0);
    for (i, (start, end)) in pie_slices(values).into_iter().enumerate() {
        canvas.fill_wedge(
            Point::ORIGIN,
            radius,
            start,
            end,
            BoxStyle::fill(theme::pie_slice(i, 0.8)).with_stroke(border),
        );
    }
    canvas.fill_circle(Point::ORIGIN, radius * 0.4, theme::slate(0.8));
}

fn paint_area(canvas: &mut dyn Canvas, values: &[f32], size: f32, class: ViewportClass) {
    let (width, height) = (size, size * 0.6);
    let samples = sample_points(values, width, height);

    let mut region = Vec::with_capacity(samples.len() + 2);
    region.push(Point::new(-width / 2.0, height / 2.0));
    region.extend_from_slice(&samples);
    region.push(Point::new(width / 2.0, height / 2.0));

    let gradient = LinearGradient::new(Point::new(0.0, -height / 2.0), Point::new(0.0, height / 2.0))
        .stop(0.0, theme::sky(0.6))
        .stop(1.0, theme::sky(0.1));
    canvas.fill_polygon(&region, gradient.into());
    canvas.draw_path(
        &samples,
        StrokeStyle::new(theme::sky(0.9), class.pick(1.5, 2.0)),
    );
}

fn paint_gauge(canvas: &mut dyn Canvas, value: f32, size: f32, class: ViewportClass) {
    let radius = size / 2.0;
    let width = class.pick(3.0, 4.0);
    canvas.stroke_arc(
        Point::ORIGIN,
        radius,
        PI,
        TAU,
        StrokeStyle::new(theme::blue(0.2), width),
    );
    let sweep = PI * value.clamp(0.0, 100.0) / 100.0;
    canvas.stroke_arc(
        Point::ORIGIN,
        radius,
        PI,
        PI + sweep,
        StrokeStyle::new(theme::sky(0.9), width),
    );
    canvas.fill_circle(Point::ORIGIN, class.pick(2.0, 3.0), theme::sky(1.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use foresight_core::{DrawCommand, Paint, RecordingCanvas};
    use proptest::prelude::*;

    fn children(canvas: &RecordingCanvas) -> &[DrawCommand] {
        match &canvas.commands()[0] {
            DrawCommand::Group { children, .. } => children,
            DrawCommand::Opacity { child, .. } => match child.as_ref() {
                DrawCommand::Group { children, .. } => children,
                other => panic!("unexpected {other:?}"),
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    // =========================================================================
    // Geometry Tests
    // =========================================================================

    #[test]
    fn test_sample_points_span_box() {
        let points = sample_points(&[0.0, 50.0, 100.0], 100.0, 60.0);
        assert_eq!(points[0], Point::new(-50.0, 30.0));
        assert_eq!(points[1], Point::new(0.0, 0.0));
        assert_eq!(points[2], Point::new(50.0, -30.0));
    }

    #[test]
    fn test_single_sample_at_left_edge() {
        let points = sample_points(&[50.0], 100.0, 60.0);
        assert_eq!(points, vec![Point::new(-50.0, 0.0)]);
    }

    #[test]
    fn test_pie_slices_close() {
        let slices = pie_slices(&[30.0, 25.0, 20.0, 25.0]);
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].0, 0.0);
        assert!((slices[0].1 - 0.3 * TAU).abs() < 1e-5);
        assert_eq!(slices[3].1, TAU);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn test_pie_zero_total_paints_no_slices() {
        assert!(pie_slices(&[0.0, 0.0]).is_empty());
        assert!(pie_slices(&[]).is_empty());

        let overlay = ChartOverlay::new(ChartKind::Pie(vec![0.0; 3]), Point::ORIGIN, 40.0, 0.0);
        let mut canvas = RecordingCanvas::new();
        overlay.paint(&mut canvas, ViewportClass::Wide);
        let kids = children(&canvas);
        assert_eq!(kids.len(), 1);
        assert!(matches!(kids[0], DrawCommand::Circle { .. }));
    }

    // =========================================================================
    // Update Tests
    // =========================================================================

    #[test]
    fn test_rotation_wraps() {
        let mut overlay = ChartOverlay::new(ChartKind::Gauge(75.0), Point::ORIGIN, 70.0, -0.003);
        overlay.update(0.0, 0.0);
        assert!((overlay.rotation() - (TAU - 0.003)).abs() < 1e-5);

        let mut fast = ChartOverlay::new(ChartKind::Gauge(75.0), Point::ORIGIN, 70.0, 4.0);
        fast.update(0.0, 0.0);
        fast.update(0.0, 0.0);
        assert!((fast.rotation() - (8.0 - TAU)).abs() < 1e-5);
    }

    #[test]
    fn test_bob_follows_sine() {
        let mut overlay = ChartOverlay::new(
            ChartKind::Line(vec![1.0, 2.0]),
            Point::new(0.0, 100.0),
            50.0,
            0.0,
        );
        // sin(pi/2) at now = 1000 * pi/2
        overlay.update(1000.0 * std::f64::consts::FRAC_PI_2, 0.2);
        assert!((overlay.anchor().y - 100.2).abs() < 1e-4);
        assert_eq!(overlay.anchor().x, 0.0);
    }

    // =========================================================================
    // Paint Tests
    // =========================================================================

    #[test]
    fn test_line_paint_commands() {
        let overlay = ChartOverlay::new(
            ChartKind::Line(vec![20.0, 45.0, 28.0]),
            Point::new(100.0, 100.0),
            80.0,
            0.002,
        );
        let mut canvas = RecordingCanvas::new();
        overlay.paint(&mut canvas, ViewportClass::Narrow);
        assert_eq!(canvas.command_count(), 1);
        let kids = children(&canvas);
        // background, border, polyline, three markers
        assert_eq!(kids.len(), 6);
        match &kids[2] {
            DrawCommand::Path { points, style, .. } => {
                assert_eq!(points.len(), 3);
                assert_eq!(style.width, 1.5);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_bar_uses_vertical_gradient() {
        let overlay = ChartOverlay::new(ChartKind::Bar(vec![50.0, 100.0]), Point::ORIGIN, 100.0, 0.0);
        let mut canvas = RecordingCanvas::new();
        overlay.paint(&mut canvas, ViewportClass::Wide);
        let kids = children(&canvas);
        assert_eq!(kids.len(), 2 + 2 * 2);
        match &kids[2] {
            DrawCommand::Rect { bounds, style } => {
                assert!((bounds.width - 40.0).abs() < 1e-5);
                assert!((bounds.x - -45.0).abs() < 1e-5);
                assert!((bounds.height - 30.0).abs() < 1e-5);
                let Some(Paint::Linear(gradient)) = &style.fill else {
                    panic!("expected gradient");
                };
                assert_eq!(gradient.start.x, gradient.end.x);
                assert_eq!(gradient.stops.len(), 2);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_area_opacity_scope() {
        let overlay = ChartOverlay::new(
            ChartKind::Area(vec![10.0, 25.0, 40.0]),
            Point::ORIGIN,
            50.0,
            0.006,
        )
        .with_opacity(0.5);
        let mut canvas = RecordingCanvas::new();
        overlay.paint(&mut canvas, ViewportClass::Wide);
        let DrawCommand::Opacity { alpha, .. } = &canvas.commands()[0] else {
            panic!("expected opacity scope");
        };
        assert_eq!(*alpha, 0.5);
        let kids = children(&canvas);
        match &kids[0] {
            DrawCommand::Polygon { points, .. } => assert_eq!(points.len(), 5),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_gauge_value_arc() {
        let overlay =
            ChartOverlay::new(ChartKind::Gauge(75.0), Point::ORIGIN, 70.0, -0.003).with_opacity(0.65);
        let mut canvas = RecordingCanvas::new();
        overlay.paint(&mut canvas, ViewportClass::Wide);
        let kids = children(&canvas);
        assert_eq!(kids.len(), 3);
        match &kids[1] {
            DrawCommand::Arc {
                start_angle,
                end_angle,
                radius,
                style,
                ..
            } => {
                assert_eq!(*start_angle, PI);
                assert!((end_angle - (PI + 0.75 * PI)).abs() < 1e-5);
                assert_eq!(*radius, 35.0);
                assert_eq!(style.width, 4.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn prop_pie_slices_sum_to_tau(values in prop::collection::vec(0.1f32..100.0, 1..12)) {
            let slices = pie_slices(&values);
            prop_assert_eq!(slices.len(), values.len());
            let sweep: f32 = slices.iter().map(|(s, e)| e - s).sum();
            prop_assert!((sweep - TAU).abs() < 1e-3);
            prop_assert_eq!(slices[slices.len() - 1].1, TAU);
        }

        #[test]
        fn prop_rotation_stays_in_range(speed in -1.0f32..1.0, ticks in 1usize..2000) {
            let mut overlay = ChartOverlay::new(ChartKind::Gauge(50.0), Point::ORIGIN, 10.0, speed);
            for _ in 0..ticks {
                overlay.update(0.0, 0.0);
            }
            prop_assert!((0.0..TAU).contains(&overlay.rotation()));
        }

        #[test]
        fn prop_rotation_accumulates_speed(speed in -0.01f32..0.01, ticks in 1usize..2000) {
            let mut overlay = ChartOverlay::new(ChartKind::Line(vec![10.0, 20.0]), Point::ORIGIN, 10.0, speed);
            for _ in 0..ticks {
                overlay.update(0.0, 0.0);
            }
            let expected = (ticks as f64 * f64::from(speed)).rem_euclid(std::f64::consts::TAU);
            let diff = (f64::from(overlay.rotation()) - expected).abs();
            // Compare on the circle so 2π - ε and 0 count as close.
            prop_assert!(diff.min(std::f64::consts::TAU - diff) < 2e-3, "{} vs {expected}", overlay.rotation());
        }
    }
}
