use glam::Vec3;
use rand::Rng;

use crate::color::Rgb;
use crate::config::SceneConfig;

/// Frequency of the x drift, per clock millisecond.
const DRIFT_FREQ_X: f64 = 0.001;
/// Frequency of the y drift, per clock millisecond.
const DRIFT_FREQ_Y: f64 = 0.0015;

/// Point cloud stored as two parallel flat buffers (`xyz` and `rgb`).
///
/// Both buffers always hold `3 * len()` floats.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scatter `config.point_count` points through `config.point_extent`,
    /// colouring each from `config.point_palette`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &SceneConfig) -> Self {
        let count = if config.point_palette.is_empty() {
            0
        } else {
            config.point_count
        };
        let extent = config.point_extent;
        let half = extent * 0.5;

        let mut cloud = Self {
            positions: Vec::with_capacity(count * 3),
            colors: Vec::with_capacity(count * 3),
        };
        for _ in 0..count {
            let position = Vec3::new(
                rng.gen::<f32>() * extent.x - half.x,
                rng.gen::<f32>() * extent.y - half.y,
                rng.gen::<f32>() * extent.z - half.z,
            );
            let color = config.point_palette[rng.gen_range(0..config.point_palette.len())];
            cloud.push(position, color);
        }
        cloud
    }

    pub fn from_points(points: &[(Vec3, Rgb)]) -> Self {
        let mut cloud = Self::new();
        for &(position, color) in points {
            cloud.push(position, color);
        }
        cloud
    }

    pub fn push(&mut self, position: Vec3, color: Rgb) {
        self.positions.extend_from_slice(&position.to_array());
        self.colors.extend_from_slice(&color.to_array());
    }

    /// Number of points (not floats).
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.positions
            .get(index * 3..index * 3 + 3)
            .map(Vec3::from_slice)
    }

    pub fn color(&self, index: usize) -> Option<Rgb> {
        self.colors
            .get(index * 3..index * 3 + 3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
    }

    /// Nudge every point by the time-based drift field.
    ///
    /// For the point starting at flat index `i`, x moves by
    /// `sin((clock + i) * 0.001) * amount` and y by
    /// `cos((clock + i) * 0.0015) * amount`. The sum is taken in `f64` and
    /// narrowed on store, like writing into a `Float32Array`.
    pub fn drift(&mut self, clock: f64, amount: f64) {
        for (n, xyz) in self.positions.chunks_exact_mut(3).enumerate() {
            let i = (n * 3) as f64;
            xyz[0] = (xyz[0] as f64 + ((clock + i) * DRIFT_FREQ_X).sin() * amount) as f32;
            xyz[1] = (xyz[1] as f64 + ((clock + i) * DRIFT_FREQ_Y).cos() * amount) as f32;
        }
    }

    /// Keep only the first `count` points, trimming both buffers together.
    pub fn truncate(&mut self, count: usize) {
        self.positions.truncate(count * 3);
        self.colors.truncate(count * 3);
    }
}
