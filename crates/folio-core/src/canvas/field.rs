use glam::Vec2;
use rand::Rng;

use crate::canvas::particle::CanvasParticle;
use crate::canvas::surface::Surface;
use crate::config::CanvasConfig;
use crate::frame::FrameTask;
use crate::scene::Viewport;

/// A line between two particles closer than the link distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    /// Index of the earlier particle; the line takes its colour.
    pub from: usize,
    pub to: usize,
    pub distance: f32,
    /// `(max - distance) / max`, in `(0, 1]`.
    pub width: f32,
}

/// Link between particles `from` and `to` if they are closer than
/// `max_distance`.
fn link_between(
    from: usize,
    to: usize,
    a: &CanvasParticle,
    b: &CanvasParticle,
    max_distance: f32,
) -> Option<Link> {
    let distance = a.position.distance(b.position);
    (distance < max_distance).then(|| Link {
        from,
        to,
        distance,
        width: (max_distance - distance) / max_distance,
    })
}

/// Collect every pair `(i, j)` with `i < j` closer than `max_distance`.
///
/// Each unordered pair is visited exactly once, so the work is
/// `n * (n - 1) / 2` distance checks. Links come out grouped by `from`.
pub fn links(particles: &[CanvasParticle], max_distance: f32) -> Vec<Link> {
    let mut out = Vec::new();
    for (i, p) in particles.iter().enumerate() {
        for (j, q) in particles.iter().enumerate().skip(i + 1) {
            out.extend(link_between(i, j, p, q, max_distance));
        }
    }
    out
}

/// Fixed set of canvas particles plus the canvas bounds they wrap within.
pub struct ParticleField {
    particles: Vec<CanvasParticle>,
    size: Vec2,
    link_distance: f32,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(config: &CanvasConfig, viewport: Viewport, rng: &mut R) -> Self {
        let size = Vec2::new(viewport.width, viewport.height);
        let particles: Vec<CanvasParticle> = (0..config.particle_count)
            .filter_map(|_| CanvasParticle::spawn(rng, config, size))
            .collect();

        log::debug!(
            "canvas field spawned: {} particles on {}x{}",
            particles.len(),
            size.x,
            size.y
        );

        Self::from_particles(particles, viewport, config.link_distance)
    }

    pub fn from_particles(
        particles: Vec<CanvasParticle>,
        viewport: Viewport,
        link_distance: f32,
    ) -> Self {
        Self {
            particles,
            size: Vec2::new(viewport.width, viewport.height),
            link_distance,
        }
    }

    /// Move every particle one frame and wrap it into the canvas.
    pub fn step(&mut self) {
        let size = self.size;
        for particle in &mut self.particles {
            particle.advance(size);
        }
    }

    /// Clear `surface` and draw the field as it stands.
    ///
    /// Each particle's disc is followed by its links to later particles, so
    /// later discs sit on top of earlier lines.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.size.x, self.size.y);
        let found = links(&self.particles, self.link_distance);
        let mut pending = found.iter().peekable();
        for (i, particle) in self.particles.iter().enumerate() {
            surface.fill_circle(particle.position, particle.radius, particle.color);
            while let Some(link) = pending.next_if(|l| l.from == i) {
                let to = &self.particles[link.to];
                surface.stroke_line(particle.position, to.position, particle.color, link.width);
            }
        }
    }

    /// One full frame, particle by particle: move and wrap particle `i`,
    /// draw its disc, then link it to the particles after it.
    ///
    /// Those later particles have not moved yet, so a link joins this
    /// frame's position of `i` to last frame's position of `j`.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.size.x, self.size.y);
        let size = self.size;
        for i in 0..self.particles.len() {
            self.particles[i].advance(size);
            let particle = self.particles[i];
            surface.fill_circle(particle.position, particle.radius, particle.color);
            for (j, other) in self.particles.iter().enumerate().skip(i + 1) {
                if let Some(link) = link_between(i, j, &particle, other, self.link_distance) {
                    surface.stroke_line(particle.position, other.position, particle.color, link.width);
                }
            }
        }
    }

    /// Adopt new canvas bounds. Particles outside them are left in place
    /// until their next wrap check.
    pub fn resize(&mut self, viewport: Viewport) {
        self.size = Vec2::new(viewport.width, viewport.height);
        log::debug!("canvas resized to {}x{}", viewport.width, viewport.height);
    }

    pub fn particles(&self) -> &[CanvasParticle] {
        &self.particles
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn link_distance(&self) -> f32 {
        self.link_distance
    }
}

/// Binds a field to the surface it draws on so the pair can be scheduled.
pub struct CanvasLoop<S> {
    pub field: ParticleField,
    pub surface: S,
}

impl<S: Surface> FrameTask for CanvasLoop<S> {
    fn frame(&mut self, _now: f64) {
        self.field.frame(&mut self.surface);
    }
}
