//! Integration tests for foresight-core.
//!
//! These tests verify the public API works correctly end-to-end.

use foresight_core::{
    BlendMode, Canvas, Color, DrawCommand, Layer, LinearGradient, Paint, Point, RecordingCanvas,
    Rect, Shadow, Size, StrokeStyle, Transform2D, Viewport, ViewportClass, DEFAULT_BREAKPOINT,
};

// =============================================================================
// Recording Integration Tests
// =============================================================================

#[test]
fn test_nested_layers_replay_as_tree() {
    let mut canvas = RecordingCanvas::new();
    canvas.fill_rect(
        Rect::from_size(Size::new(100.0, 100.0)),
        LinearGradient::new(Point::ORIGIN, Point::new(100.0, 100.0))
            .stop(0.0, Color::BLACK)
            .stop(1.0, Color::WHITE)
            .into(),
    );
    canvas.layer(
        Layer::transformed(Transform2D::translate_rotate(50.0, 50.0, 0.25)),
        &mut |c| {
            c.stroke_rect(Rect::centered(Point::ORIGIN, 10.0, 6.0), StrokeStyle::default());
            c.layer(Layer::new().with_alpha(0.5), &mut |inner| {
                inner.fill_polygon(
                    &[Point::ORIGIN, Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
                    Paint::Solid(Color::WHITE),
                );
            });
        },
    );

    assert_eq!(canvas.command_count(), 2);
    let total: usize = canvas
        .commands()
        .iter()
        .map(DrawCommand::primitive_count)
        .sum();
    assert_eq!(total, 3);
}

#[test]
fn test_image_with_glow_in_screen_layer() {
    let mut canvas = RecordingCanvas::new();
    canvas.layer(Layer::new().with_blend(BlendMode::Screen), &mut |c| {
        c.draw_image(
            1,
            Rect::new(0.0, 0.0, 64.0, 64.0),
            Some(Shadow::glow(Color::WHITE.with_alpha(0.3), 20.0)),
        );
    });

    let json = serde_json::to_string(canvas.commands()).expect("serialize");
    let parsed: Vec<DrawCommand> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, canvas.commands());
}

// =============================================================================
// Viewport Integration Tests
// =============================================================================

#[test]
fn test_viewport_classes_follow_breakpoint() {
    let widths = [320.0, 767.0, 768.0, 1024.0, 2560.0];
    let classes: Vec<ViewportClass> = widths
        .iter()
        .map(|w| {
            Viewport::new(*w, 800.0, DEFAULT_BREAKPOINT)
                .expect("valid viewport")
                .class()
        })
        .collect();
    assert_eq!(
        classes,
        vec![
            ViewportClass::Narrow,
            ViewportClass::Narrow,
            ViewportClass::Wide,
            ViewportClass::Wide,
            ViewportClass::Wide,
        ]
    );
}

#[test]
fn test_viewport_custom_breakpoint() {
    let v = Viewport::new(900.0, 600.0, 1024.0).expect("valid viewport");
    assert!(v.is_narrow());
    assert_eq!(v.size().min_side(), 600.0);
}
