//! Background particle field.
//!
//! A fixed batch of dots drifts across the viewport, bouncing off its edges. Any
//! two dots closer than `link_distance` are joined by a faint line whose alpha
//! falls off with distance. The whole field is redrawn from scratch each frame
//! onto a [`Surface`]; the browser canvas is one implementation, tests use a
//! recording one.

use rand::Rng;

use crate::config::ParticleConfig;

// --- Model ------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    /// Radius in px.
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, cfg: &ParticleConfig) -> Self {
        Self {
            x: uniform(rng, 0.0, width),
            y: uniform(rng, 0.0, height),
            speed_x: uniform(rng, -cfg.max_speed, cfg.max_speed),
            speed_y: uniform(rng, -cfg.max_speed, cfg.max_speed),
            size: uniform(rng, cfg.min_size, cfg.max_size),
            opacity: uniform(rng, cfg.min_opacity, cfg.max_opacity),
        }
    }

    /// Move by one frame of velocity and reflect off the `[0, width] x [0, height]`
    /// box. The overshoot is not clamped; the flipped velocity brings the dot
    /// back on the next step.
    fn step(&mut self, width: f64, height: f64) {
        self.x += self.speed_x;
        self.y += self.speed_y;
        if self.x > width || self.x < 0.0 {
            self.speed_x = -self.speed_x;
        }
        if self.y > height || self.y < 0.0 {
            self.speed_y = -self.speed_y;
        }
    }
}

// gen_range panics on an empty range; degenerate configs collapse to `lo`.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

/// Connection between two particles (indices into [`ParticleField::particles`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub alpha: f64,
}

// --- Drawing seam -----------------------------------------------------------

/// Minimal 2d drawing target. Colors are an RGB triple plus alpha in `[0, 1]`.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: (u8, u8, u8), alpha: f64);
    fn dot(&mut self, center: (f64, f64), radius: f64, color: (u8, u8, u8), alpha: f64);
}

pub fn css_rgba(color: (u8, u8, u8), alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", color.0, color.1, color.2, alpha)
}

// --- Field ------------------------------------------------------------------

pub struct ParticleField {
    cfg: ParticleConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, cfg: ParticleConfig) -> Self {
        Self {
            cfg,
            width,
            height,
            particles: Vec::new(),
        }
    }

    /// Replace the collection with exactly `count` fresh random particles.
    pub fn initialize<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        let (w, h) = (self.width, self.height);
        let cfg = &self.cfg;
        self.particles = (0..count).map(|_| Particle::random(&mut *rng, w, h, cfg)).collect();
    }

    /// New viewport: reset the bounds and rebuild the collection. Returns the
    /// new particle count (derived from the width).
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) -> usize {
        self.width = width;
        self.height = height;
        let count = self.cfg.count_for_width(width);
        self.initialize(count, rng);
        count
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.step(w, h);
        }
    }

    /// All unordered pairs of distinct particles within `link_distance`.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let ps = &self.particles;
        let max = self.cfg.link_distance;
        let (base, falloff) = (self.cfg.link_alpha, self.cfg.link_falloff);
        (0..ps.len()).flat_map(move |i| {
            (i + 1..ps.len()).filter_map(move |j| {
                let dx = ps[i].x - ps[j].x;
                let dy = ps[i].y - ps[j].y;
                let distance = (dx * dx + dy * dy).sqrt();
                (distance < max).then(|| Link {
                    a: i,
                    b: j,
                    distance,
                    alpha: base - distance / falloff,
                })
            })
        })
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.width, self.height);
        let color = self.cfg.color;
        for link in self.links() {
            let (a, b) = (&self.particles[link.a], &self.particles[link.b]);
            surface.line((a.x, a.y), (b.x, b.y), color, link.alpha);
        }
        for p in &self.particles {
            surface.dot((p.x, p.y), p.size, color, p.opacity);
        }
    }

    /// One animation frame.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.step();
        self.render(surface);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
