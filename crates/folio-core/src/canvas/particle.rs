use glam::Vec2;
use rand::Rng;

use crate::color::Rgb;
use crate::config::CanvasConfig;
use crate::math::wrap_coordinate;

/// A dot on the 2D canvas with constant velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Rgb,
}

impl CanvasParticle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, color: Rgb) -> Self {
        Self {
            position,
            velocity,
            radius,
            color,
        }
    }

    /// Place a particle uniformly over `size` with a random drift.
    ///
    /// Returns `None` when the palette is empty.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &CanvasConfig, size: Vec2) -> Option<Self> {
        if config.palette.is_empty() {
            return None;
        }
        let span = config.velocity_span;
        Some(Self {
            position: Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y),
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * span,
                (rng.gen::<f32>() - 0.5) * span,
            ),
            radius: rng.gen::<f32>() * config.radius_span + config.radius_min,
            color: config.palette[rng.gen_range(0..config.palette.len())],
        })
    }

    /// Integrate one frame and wrap at the `size` edges.
    pub fn advance(&mut self, size: Vec2) {
        self.position += self.velocity;
        self.position.x = wrap_coordinate(self.position.x, size.x);
        self.position.y = wrap_coordinate(self.position.y, size.y);
    }
}
