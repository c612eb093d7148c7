//! Center logo with layered glow.

use foresight_core::{
    BlendMode, Canvas, Color, ImageRef, Layer, Point, Rect, Shadow, Transform2D, Viewport,
};

/// Logo placement for a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoPlacement {
    /// Logo center
    pub center: Point,
    /// Logo edge length (px)
    pub size: f32,
}

impl LogoPlacement {
    /// Placement above the headline: horizontally centered, raised by 40% of
    /// the height, sized from the shorter canvas side.
    #[must_use]
    pub fn for_viewport(viewport: &Viewport) -> Self {
        let (w, h) = (viewport.width(), viewport.height());
        Self {
            center: Point::new(w / 2.0, h / 2.0 - h * 0.40),
            size: viewport.size().min_side() * viewport.class().pick(0.15, 0.25),
        }
    }

    /// Image bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.center, self.size, self.size)
    }
}

/// Pulse scale at `now_ms`: a 2% breathing around 1.
#[must_use]
pub fn pulse_scale(now_ms: f64) -> f32 {
    1.0 + (now_ms * 0.002).sin() as f32 * 0.02
}

/// Glowing logo compositor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoGlow {
    image: ImageRef,
    accent: Color,
}

impl LogoGlow {
    /// Compositor for a registered image.
    #[must_use]
    pub const fn new(image: ImageRef, accent: Color) -> Self {
        Self { image, accent }
    }

    /// Image handle.
    #[must_use]
    pub const fn image(&self) -> ImageRef {
        self.image
    }

    /// Paint the three glow passes. Nothing is drawn until the image is ready.
    pub fn paint(&self, canvas: &mut dyn Canvas, viewport: &Viewport, now_ms: f64, ready: bool) {
        if !ready {
            return;
        }

        let class = viewport.class();
        let placement = LogoPlacement::for_viewport(viewport);
        let bounds = placement.bounds();
        let image = self.image;
        let glow = |alpha: f32, narrow: f32, wide: f32| {
            Some(Shadow::glow(self.accent.with_alpha(alpha), class.pick(narrow, wide)))
        };

        canvas.draw_image(image, bounds, glow(0.4, 20.0, 40.0));

        canvas.layer(Layer::new().with_blend(BlendMode::Screen), &mut |c| {
            c.draw_image(image, bounds, glow(0.3, 10.0, 20.0));
            c.draw_image(image, bounds, glow(0.2, 30.0, 60.0));
        });

        let scale = pulse_scale(now_ms);
        let pulse = Transform2D::scale(scale, scale)
            .then(&Transform2D::translate(placement.center.x, placement.center.y));
        let local = Rect::centered(Point::ORIGIN, placement.size, placement.size);
        canvas.layer(Layer::transformed(pulse).with_alpha(0.1), &mut |c| {
            c.draw_image(image, local, glow(0.5, 40.0, 80.0));
        });
    }
}
