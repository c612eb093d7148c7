//! Drifting particle field with proximity links.

use foresight_core::{Canvas, Color, Point, Size, StrokeStyle};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single drifting node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// X position (px)
    pub x: f32,
    /// Y position (px)
    pub y: f32,
    /// X velocity (px/tick)
    pub vx: f32,
    /// Y velocity (px/tick)
    pub vy: f32,
    /// Velocity sign flips so far
    pub reflections: u32,
}

impl Particle {
    /// Create a particle with no reflections recorded.
    #[must_use]
    pub const fn new(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            reflections: 0,
        }
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Advance one tick inside `bounds`, bouncing off the edges.
    pub fn step(&mut self, bounds: Size) {
        if reflect(&mut self.x, &mut self.vx, bounds.width) {
            self.reflections += 1;
        }
        if reflect(&mut self.y, &mut self.vy, bounds.height) {
            self.reflections += 1;
        }
    }
}

/// Move `pos` by `vel` within `[0, max]`, mirroring any overshoot.
///
/// Returns `true` when the velocity was negated.
fn reflect(pos: &mut f32, vel: &mut f32, max: f32) -> bool {
    let max = max.max(0.0);
    let mut next = *pos + *vel;
    let mut flipped = false;
    if next < 0.0 {
        next = -next;
        flipped = true;
    } else if next > max {
        next = 2.0 * max - next;
        flipped = true;
    }
    if flipped {
        *vel = -*vel;
    }
    // Overshoot wider than the canvas itself.
    *pos = next.clamp(0.0, max);
    flipped
}

/// Visual parameters for a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleStyle {
    /// Dot radius
    pub radius: f32,
    /// Pairs closer than this are linked
    pub link_distance: f32,
    /// Link alpha at zero distance
    pub link_alpha: f32,
    /// Dot color
    pub dot_color: Color,
    /// Link color (alpha replaced per link)
    pub link_color: Color,
}

impl Default for ParticleStyle {
    fn default() -> Self {
        Self {
            radius: 2.0,
            link_distance: 150.0,
            link_alpha: 0.2,
            dot_color: crate::theme::sky(0.6),
            link_color: crate::theme::sky(1.0),
        }
    }
}

/// A link between two particles of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Index of the first particle
    pub a: usize,
    /// Index of the second particle (always greater than `a`)
    pub b: usize,
    /// Line alpha
    pub alpha: f32,
}

/// Link alpha for two particles `distance` apart.
///
/// Fades linearly from `max_alpha` at zero distance to 0 at `threshold`.
#[must_use]
pub fn link_alpha(distance: f32, threshold: f32, max_alpha: f32) -> f32 {
    if threshold <= 0.0 || distance >= threshold {
        return 0.0;
    }
    max_alpha * (1.0 - distance / threshold)
}

/// The particle field.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Size,
    style: ParticleStyle,
}

impl ParticleField {
    /// Field from explicit particles.
    #[must_use]
    pub fn from_particles(particles: Vec<Particle>, bounds: Size, style: ParticleStyle) -> Self {
        Self {
            particles,
            bounds,
            style,
        }
    }

    /// Spawn `count` particles uniformly in `bounds` with velocity components
    /// uniform in `[-max_speed, max_speed]`.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: Size,
        count: usize,
        max_speed: f32,
        style: ParticleStyle,
    ) -> Self {
        let width = bounds.width.max(0.0);
        let height = bounds.height.max(0.0);
        let speed = max_speed.abs();
        let particles = (0..count)
            .map(|_| {
                Particle::new(
                    rng.random_range(0.0..=width),
                    rng.random_range(0.0..=height),
                    rng.random_range(-speed..=speed),
                    rng.random_range(-speed..=speed),
                )
            })
            .collect();
        log::debug!("spawned {count} particles in {width}x{height}");
        Self::from_particles(particles, bounds, style)
    }

    /// The particles.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True when the field has no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Field bounds.
    #[must_use]
    pub const fn bounds(&self) -> Size {
        self.bounds
    }

    /// Visual style.
    #[must_use]
    pub const fn style(&self) -> &ParticleStyle {
        &self.style
    }

    /// Advance every particle by one tick.
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for particle in &mut self.particles {
            particle.step(bounds);
        }
    }

    /// Total velocity flips across all particles.
    #[must_use]
    pub fn reflections(&self) -> u64 {
        self.particles.iter().map(|p| u64::from(p.reflections)).sum()
    }

    /// All linked pairs in the current snapshot.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (a, pa) in self.particles.iter().enumerate() {
            for (offset, pb) in self.particles[a + 1..].iter().enumerate() {
                let alpha = self.pair_alpha(pa, pb);
                if alpha > 0.0 {
                    links.push(Link {
                        a,
                        b: a + 1 + offset,
                        alpha,
                    });
                }
            }
        }
        links
    }

    fn pair_alpha(&self, a: &Particle, b: &Particle) -> f32 {
        let distance = a.position().distance(&b.position());
        link_alpha(distance, self.style.link_distance, self.style.link_alpha)
    }

    /// Paint dots and links.
    ///
    /// Each dot is followed by its links to later particles.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        for (i, particle) in self.particles.iter().enumerate() {
            canvas.fill_circle(particle.position(), self.style.radius, self.style.dot_color);
            for other in &self.particles[i + 1..] {
                let alpha = self.pair_alpha(particle, other);
                if alpha > 0.0 {
                    canvas.draw_line(
                        particle.position(),
                        other.position(),
                        StrokeStyle::new(self.style.link_color.with_alpha(alpha), 1.0),
                    );
                }
            }
        }
    }
}
