//! Draw commands for canvas rendering.
//!
//! All rendering reduces to these primitives. Scenes record them into a
//! [`RecordingCanvas`](crate::RecordingCanvas); a backend replays them.

use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Reference to an image registered with the rendering backend.
pub type ImageRef = u32;

/// One color stop of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient axis [0.0, 1.0]
    pub offset: f32,
    /// Color at this position
    pub color: Color,
}

/// Linear gradient between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    /// Gradient start
    pub start: Point,
    /// Gradient end
    pub end: Point,
    /// Color stops in ascending offset order
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Create an empty gradient along `start -> end`.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    /// Add a color stop.
    #[must_use]
    pub fn stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push(GradientStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        });
        self
    }
}

/// How a shape is filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    /// Flat color
    Solid(Color),
    /// Linear gradient
    Linear(LinearGradient),
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Self::Linear(gradient)
    }
}

/// Stroke style for path rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl StrokeStyle {
    /// Create a stroke style.
    #[must_use]
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Box style for rectangles, circles and wedges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill (None = no fill)
    pub fill: Option<Paint>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: Some(Paint::Solid(Color::WHITE)),
            stroke: None,
        }
    }
}

impl BoxStyle {
    /// Create a box with only a fill.
    #[must_use]
    pub fn fill(paint: impl Into<Paint>) -> Self {
        Self {
            fill: Some(paint.into()),
            stroke: None,
        }
    }

    /// Create a box with only stroke.
    #[must_use]
    pub const fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
        }
    }

    /// Add a stroke to the box.
    #[must_use]
    pub fn with_stroke(mut self, style: StrokeStyle) -> Self {
        self.stroke = Some(style);
        self
    }
}

/// Shadow (glow) configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
}

impl Shadow {
    /// Centered glow with no offset.
    #[must_use]
    pub const fn glow(color: Color, blur: f32) -> Self {
        Self {
            color,
            offset_x: 0.0,
            offset_y: 0.0,
            blur,
        }
    }
}

/// Compositing mode for a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlendMode {
    /// Normal alpha compositing
    #[default]
    SourceOver,
    /// Screen blending (lightens)
    Screen,
}

impl BlendMode {
    /// Canvas2D `globalCompositeOperation` name.
    #[must_use]
    pub const fn as_css(&self) -> &'static str {
        match self {
            Self::SourceOver => "source-over",
            Self::Screen => "screen",
        }
    }
}

/// 2D transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f]
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Identity transformation.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Create a scale transform.
    #[must_use]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            matrix: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Create a rotation transform (radians).
    #[must_use]
    pub fn rotate(angle: f32) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Self {
            matrix: [cos, sin, -sin, cos, 0.0, 0.0],
        }
    }

    /// Chain transforms: first apply self, then apply other.
    ///
    /// For point p: `a.then(b).apply(p)` == `b.apply(a.apply(p))`
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        // For "first self, then other" semantics: result = other * self
        let a = other.matrix;
        let b = self.matrix;
        Self {
            matrix: [
                a[0] * b[0] + a[2] * b[1],
                a[1] * b[0] + a[3] * b[1],
                a[0] * b[2] + a[2] * b[3],
                a[1] * b[2] + a[3] * b[3],
                a[0] * b[4] + a[2] * b[5] + a[4],
                a[1] * b[4] + a[3] * b[5] + a[5],
            ],
        }
    }

    /// Canvas-style `translate(x, y)` followed by `rotate(angle)`: local
    /// coordinates are rotated first, then moved to `(x, y)`.
    #[must_use]
    pub fn translate_rotate(x: f32, y: f32, angle: f32) -> Self {
        Self::rotate(angle).then(&Self::translate(x, y))
    }

    /// Transform a point.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let m = self.matrix;
        Point::new(
            m[0] * point.x + m[2] * point.y + m[4],
            m[1] * point.x + m[3] * point.y + m[5],
        )
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Stroke a path (polyline or polygon outline)
    Path {
        /// Points defining the path
        points: Vec<Point>,
        /// Whether the path is closed
        closed: bool,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Fill a closed polygon
    Polygon {
        /// Polygon vertices
        points: Vec<Point>,
        /// Fill paint
        fill: Paint,
    },

    /// Draw a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Box style
        style: BoxStyle,
    },

    /// Draw a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Box style
        style: BoxStyle,
    },

    /// Pie slice from the center, swept clockwise from `start_angle` to `end_angle`
    Wedge {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Start angle (radians)
        start_angle: f32,
        /// End angle (radians)
        end_angle: f32,
        /// Box style
        style: BoxStyle,
    },

    /// Open arc stroke, swept clockwise from `start_angle` to `end_angle`
    Arc {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Start angle (radians)
        start_angle: f32,
        /// End angle (radians)
        end_angle: f32,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Draw a registered image
    Image {
        /// Reference to image in the backend registry
        image: ImageRef,
        /// Destination bounds
        bounds: Rect,
        /// Glow drawn behind the image
        shadow: Option<Shadow>,
    },

    /// Group of commands with transform
    Group {
        /// Child commands
        children: Vec<DrawCommand>,
        /// Transform to apply
        transform: Transform2D,
    },

    /// Apply opacity
    Opacity {
        /// Alpha value (0.0 - 1.0)
        alpha: f32,
        /// Child command
        child: Box<DrawCommand>,
    },

    /// Composite children with a blend mode
    Blend {
        /// Blend mode
        mode: BlendMode,
        /// Child command
        child: Box<DrawCommand>,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub fn filled_rect(bounds: Rect, paint: impl Into<Paint>) -> Self {
        Self::Rect {
            bounds,
            style: BoxStyle::fill(paint),
        }
    }

    /// Create a stroked rectangle.
    #[must_use]
    pub const fn stroked_rect(bounds: Rect, stroke: StrokeStyle) -> Self {
        Self::Rect {
            bounds,
            style: BoxStyle::stroke(stroke),
        }
    }

    /// Create a filled circle.
    #[must_use]
    pub fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            style: BoxStyle::fill(color),
        }
    }

    /// Create a line between two points.
    #[must_use]
    pub fn line(from: Point, to: Point, style: StrokeStyle) -> Self {
        Self::Path {
            points: vec![from, to],
            closed: false,
            style,
        }
    }

    /// Wrap in a group with transform.
    #[must_use]
    pub fn with_transform(self, transform: Transform2D) -> Self {
        Self::Group {
            children: vec![self],
            transform,
        }
    }

    /// Wrap with opacity.
    #[must_use]
    pub fn with_opacity(self, alpha: f32) -> Self {
        Self::Opacity {
            alpha,
            child: Box::new(self),
        }
    }

    /// Wrap with a blend mode.
    #[must_use]
    pub fn with_blend(self, mode: BlendMode) -> Self {
        Self::Blend {
            mode,
            child: Box::new(self),
        }
    }

    /// Number of primitive (non-wrapper) commands in this subtree.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        match self {
            Self::Group { children, .. } => children.iter().map(Self::primitive_count).sum(),
            Self::Opacity { child, .. } | Self::Blend { child, .. } => child.primitive_count(),
            _ => 1,
        }
    }
}
