/// 2D canvas backdrop: drifting dots joined by distance-faded lines.
pub mod field;
pub mod particle;
pub mod surface;

pub use field::{links, CanvasLoop, Link, ParticleField};
pub use particle::CanvasParticle;
pub use surface::Surface;
