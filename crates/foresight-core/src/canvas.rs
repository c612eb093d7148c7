//! Canvas abstraction and the recording implementation.

use crate::draw::{
    BlendMode, BoxStyle, DrawCommand, ImageRef, Paint, Shadow, StrokeStyle, Transform2D,
};
use crate::{Color, Point, Rect};

/// Scoped drawing state: everything painted inside the scope is transformed,
/// faded and blended as one unit, like a `save()`/`restore()` pair on an HTML
/// canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Layer {
    /// Transform applied to the layer contents
    pub transform: Option<Transform2D>,
    /// Global alpha for the layer
    pub alpha: Option<f32>,
    /// Composite operation for the layer
    pub blend: Option<BlendMode>,
}

impl Layer {
    /// Empty layer (plain save/restore).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transform: None,
            alpha: None,
            blend: None,
        }
    }

    /// Layer with a transform.
    #[must_use]
    pub const fn transformed(transform: Transform2D) -> Self {
        Self::new().with_transform(transform)
    }

    /// Set the transform.
    #[must_use]
    pub const fn with_transform(mut self, transform: Transform2D) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Set the global alpha.
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Set the blend mode.
    #[must_use]
    pub const fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = Some(blend);
        self
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, paint: Paint);

    /// Stroke a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, style: StrokeStyle);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, style: StrokeStyle);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Stroke an open polyline.
    fn draw_path(&mut self, points: &[Point], style: StrokeStyle);

    /// Fill a closed polygon.
    fn fill_polygon(&mut self, points: &[Point], paint: Paint);

    /// Draw a pie slice.
    fn fill_wedge(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        style: BoxStyle,
    );

    /// Stroke an open arc.
    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        style: StrokeStyle,
    );

    /// Draw a registered image, optionally with a glow behind it.
    fn draw_image(&mut self, image: ImageRef, bounds: Rect, shadow: Option<Shadow>);

    /// Paint inside a scoped layer.
    fn layer(&mut self, layer: Layer, paint: &mut dyn FnMut(&mut dyn Canvas));
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Replaying frames on a browser backend
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded top-level commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        self.commands.push(DrawCommand::filled_rect(rect, paint));
    }

    fn stroke_rect(&mut self, rect: Rect, style: StrokeStyle) {
        self.commands.push(DrawCommand::stroked_rect(rect, style));
    }

    fn draw_line(&mut self, from: Point, to: Point, style: StrokeStyle) {
        self.commands.push(DrawCommand::line(from, to, style));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::filled_circle(center, radius, color));
    }

    fn draw_path(&mut self, points: &[Point], style: StrokeStyle) {
        if points.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            closed: false,
            style,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], paint: Paint) {
        if points.len() < 3 {
            return;
        }
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            fill: paint,
        });
    }

    fn fill_wedge(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        style: BoxStyle,
    ) {
        self.commands.push(DrawCommand::Wedge {
            center,
            radius,
            start_angle,
            end_angle,
            style,
        });
    }

    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        style: StrokeStyle,
    ) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            style,
        });
    }

    fn draw_image(&mut self, image: ImageRef, bounds: Rect, shadow: Option<Shadow>) {
        self.commands.push(DrawCommand::Image {
            image,
            bounds,
            shadow,
        });
    }

    fn layer(&mut self, layer: Layer, paint: &mut dyn FnMut(&mut dyn Canvas)) {
        let mut inner = Self::new();
        paint(&mut inner);
        if inner.is_empty() {
            return;
        }

        let mut command = DrawCommand::Group {
            children: inner.take_commands(),
            transform: layer.transform.unwrap_or_else(Transform2D::identity),
        };
        if let Some(alpha) = layer.alpha {
            command = command.with_opacity(alpha);
        }
        if let Some(mode) = layer.blend {
            command = command.with_blend(mode);
        }
        self.commands.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_recording_canvas_fill_rect() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(10.0, 20.0, 100.0, 50.0), Color::WHITE.into());
        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Rect { bounds, style } => {
                assert_eq!(bounds.x, 10.0);
                assert_eq!(style.fill, Some(Paint::Solid(Color::WHITE)));
            }
            _ => panic!("Expected Rect command"),
        }
    }

    #[test]
    fn test_recording_canvas_skips_degenerate_shapes() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_path(&[], StrokeStyle::default());
        canvas.fill_polygon(&[Point::ORIGIN, Point::new(1.0, 1.0)], Color::WHITE.into());
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_layer_wraps_children() {
        let mut canvas = RecordingCanvas::new();
        let layer = Layer::transformed(Transform2D::translate(5.0, 5.0))
            .with_alpha(0.5)
            .with_blend(BlendMode::Screen);
        canvas.layer(layer, &mut |c| {
            c.fill_circle(Point::ORIGIN, 2.0, Color::WHITE);
            c.draw_line(Point::ORIGIN, Point::new(1.0, 0.0), StrokeStyle::default());
        });

        assert_eq!(canvas.command_count(), 1);
        let DrawCommand::Blend { mode, child } = &canvas.commands()[0] else {
            panic!("Expected Blend command");
        };
        assert_eq!(*mode, BlendMode::Screen);
        let DrawCommand::Opacity { alpha, child } = child.as_ref() else {
            panic!("Expected Opacity command");
        };
        assert_eq!(*alpha, 0.5);
        match child.as_ref() {
            DrawCommand::Group {
                children,
                transform,
            } => {
                assert_eq!(children.len(), 2);
                assert_eq!(transform.matrix[4], 5.0);
            }
            _ => panic!("Expected Group command"),
        }
    }

    #[test]
    fn test_empty_layer_records_nothing() {
        let mut canvas = RecordingCanvas::new();
        canvas.layer(Layer::new().with_alpha(0.3), &mut |_| {});
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_take_commands_clears() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::ORIGIN, 1.0, Color::BLACK);
        let commands = canvas.take_commands();
        assert_eq!(commands.len(), 1);
        assert!(canvas.is_empty());
    }
}
