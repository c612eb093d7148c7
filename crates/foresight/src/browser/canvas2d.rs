//! Canvas2D renderer - replays DrawCommands on an HTML5 canvas.

use foresight_core::draw::{BoxStyle, DrawCommand, Paint, Shadow, StrokeStyle};
use foresight_core::{EngineError, ImageRef, Point, Rect, Size};
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::css::color_to_css;
use crate::driver::Surface;

/// Renderer that draws to an HTML5 Canvas 2D context.
pub struct Canvas2DRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Images by reference ID.
    images: HashMap<ImageRef, HtmlImageElement>,
}

impl Canvas2DRenderer {
    /// Create a new renderer for the given canvas element.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| EngineError::ContextUnavailable(format!("{e:?}")))?
            .ok_or_else(|| EngineError::ContextUnavailable("no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::ContextUnavailable("not a 2d context".into()))?;

        Ok(Self {
            canvas,
            ctx,
            images: HashMap::new(),
        })
    }

    /// Register an image element for `Image` commands.
    pub fn register_image(&mut self, id: ImageRef, image: HtmlImageElement) {
        self.images.insert(id, image);
    }

    /// Get canvas width.
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    /// Get canvas height.
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Set the backing store size.
    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Clear the canvas.
    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    /// Render a list of draw commands.
    pub fn render(&self, commands: &[DrawCommand]) {
        for cmd in commands {
            self.render_command(cmd);
        }
    }

    fn render_command(&self, cmd: &DrawCommand) {
        match cmd {
            DrawCommand::Rect { bounds, style } => self.draw_rect(bounds, style),
            DrawCommand::Circle {
                center,
                radius,
                style,
            } => {
                self.ctx.begin_path();
                self.arc_path(center, *radius, 0.0, std::f32::consts::TAU);
                self.fill_and_stroke(style);
            }
            DrawCommand::Path {
                points,
                closed,
                style,
            } => {
                if self.trace(points, *closed) {
                    self.stroke(style);
                }
            }
            DrawCommand::Polygon { points, fill } => {
                if self.trace(points, true) {
                    self.set_fill(fill);
                    self.ctx.fill();
                }
            }
            DrawCommand::Wedge {
                center,
                radius,
                start_angle,
                end_angle,
                style,
            } => {
                self.ctx.begin_path();
                self.ctx.move_to(f64::from(center.x), f64::from(center.y));
                self.arc_path(center, *radius, *start_angle, *end_angle);
                self.ctx.close_path();
                self.fill_and_stroke(style);
            }
            DrawCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                style,
            } => {
                self.ctx.begin_path();
                self.arc_path(center, *radius, *start_angle, *end_angle);
                self.stroke(style);
            }
            DrawCommand::Image {
                image,
                bounds,
                shadow,
            } => self.draw_image(*image, bounds, shadow.as_ref()),
            DrawCommand::Group {
                children,
                transform,
            } => {
                self.ctx.save();
                self.ctx
                    .transform(
                        f64::from(transform.matrix[0]),
                        f64::from(transform.matrix[1]),
                        f64::from(transform.matrix[2]),
                        f64::from(transform.matrix[3]),
                        f64::from(transform.matrix[4]),
                        f64::from(transform.matrix[5]),
                    )
                    .ok();
                for child in children {
                    self.render_command(child);
                }
                self.ctx.restore();
            }
            DrawCommand::Opacity { alpha, child } => {
                self.ctx.save();
                let inherited = self.ctx.global_alpha();
                self.ctx.set_global_alpha(inherited * f64::from(*alpha));
                self.render_command(child);
                self.ctx.restore();
            }
            DrawCommand::Blend { mode, child } => {
                self.ctx.save();
                self.ctx.set_global_composite_operation(mode.as_css()).ok();
                self.render_command(child);
                self.ctx.restore();
            }
        }
    }

    /// Trace a polyline into the current path. Returns false for empty input.
    fn trace(&self, points: &[Point], closed: bool) -> bool {
        let Some(first) = points.first() else {
            return false;
        };
        self.ctx.begin_path();
        self.ctx.move_to(f64::from(first.x), f64::from(first.y));
        for p in points.iter().skip(1) {
            self.ctx.line_to(f64::from(p.x), f64::from(p.y));
        }
        if closed {
            self.ctx.close_path();
        }
        true
    }

    fn arc_path(&self, center: &Point, radius: f32, start_angle: f32, end_angle: f32) {
        self.ctx
            .arc(
                f64::from(center.x),
                f64::from(center.y),
                f64::from(radius.max(0.0)),
                f64::from(start_angle),
                f64::from(end_angle),
            )
            .ok();
    }

    fn draw_rect(&self, bounds: &Rect, style: &BoxStyle) {
        self.ctx.begin_path();
        self.ctx.rect(
            f64::from(bounds.x),
            f64::from(bounds.y),
            f64::from(bounds.width),
            f64::from(bounds.height),
        );
        self.fill_and_stroke(style);
    }

    fn fill_and_stroke(&self, style: &BoxStyle) {
        if let Some(fill) = &style.fill {
            self.set_fill(fill);
            self.ctx.fill();
        }
        if let Some(stroke) = &style.stroke {
            self.stroke(stroke);
        }
    }

    fn stroke(&self, style: &StrokeStyle) {
        self.ctx.set_stroke_style_str(&color_to_css(&style.color));
        self.ctx.set_line_width(f64::from(style.width));
        self.ctx.stroke();
    }

    fn set_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color_to_css(color)),
            Paint::Linear(gradient) => {
                let css = self.ctx.create_linear_gradient(
                    f64::from(gradient.start.x),
                    f64::from(gradient.start.y),
                    f64::from(gradient.end.x),
                    f64::from(gradient.end.y),
                );
                for stop in &gradient.stops {
                    css.add_color_stop(stop.offset, &color_to_css(&stop.color))
                        .ok();
                }
                self.ctx.set_fill_style_canvas_gradient(&css);
            }
        }
    }

    fn draw_image(&self, id: ImageRef, bounds: &Rect, shadow: Option<&Shadow>) {
        let Some(image) = self.images.get(&id) else {
            return;
        };

        self.ctx.save();
        if let Some(shadow) = shadow {
            self.ctx.set_shadow_color(&color_to_css(&shadow.color));
            self.ctx.set_shadow_blur(f64::from(shadow.blur));
            self.ctx.set_shadow_offset_x(f64::from(shadow.offset_x));
            self.ctx.set_shadow_offset_y(f64::from(shadow.offset_y));
        }
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                image,
                f64::from(bounds.x),
                f64::from(bounds.y),
                f64::from(bounds.width),
                f64::from(bounds.height),
            )
            .ok();
        self.ctx.restore();
    }
}

impl Surface for Canvas2DRenderer {
    fn size(&self) -> Size {
        Size::new(self.width() as f32, self.height() as f32)
    }

    fn resize(&mut self, size: Size) {
        self.set_size(size.width.max(0.0) as u32, size.height.max(0.0) as u32);
    }

    fn present(&mut self, commands: &[DrawCommand]) {
        self.clear();
        self.render(commands);
    }
}
