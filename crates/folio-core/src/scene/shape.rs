use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use serde::Deserialize;

use crate::color::Rgb;
use crate::config::SceneConfig;

/// Geometry used for a floating shape. The renderer owns the actual meshes.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Box = 0,
    Sphere = 1,
    Octahedron = 2,
    Tetrahedron = 3,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Box,
        ShapeKind::Sphere,
        ShapeKind::Octahedron,
        ShapeKind::Tetrahedron,
    ];

    /// Edge length for the box, radius for everything else.
    pub fn size(self) -> f32 {
        match self {
            ShapeKind::Box => 20.0,
            ShapeKind::Sphere => 15.0,
            ShapeKind::Octahedron => 18.0,
            ShapeKind::Tetrahedron => 22.0,
        }
    }
}

/// Translucent wireframe material.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct WireMaterial {
    pub color: Rgb,
    pub opacity: f32,
}

/// A wireframe solid that spins in place and bobs vertically.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingShape {
    pub kind: ShapeKind,
    pub material: WireMaterial,
    pub position: Vec3,
    /// Euler angles in radians.
    pub rotation: Vec3,
    /// Radians added to each axis per frame.
    pub rotation_speed: Vec3,
    /// Angular frequency of the bob, per clock millisecond.
    pub float_speed: f64,
    /// Stored with the shape but never applied to the bob amplitude.
    pub float_range: f32,
}

impl FloatingShape {
    /// Spawn a shape with randomized kind, material and motion.
    ///
    /// Returns `None` when the config offers no materials to pick from.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &SceneConfig) -> Option<Self> {
        if config.shape_materials.is_empty() {
            return None;
        }
        let material = config.shape_materials[rng.gen_range(0..config.shape_materials.len())];
        let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
        let half = config.shape_extent * 0.5;
        let position = Vec3::new(
            rng.gen::<f32>() * config.shape_extent.x - half.x,
            rng.gen::<f32>() * config.shape_extent.y - half.y,
            rng.gen::<f32>() * config.shape_extent.z - half.z,
        );
        let rotation = Vec3::new(rng.gen::<f32>() * TAU, rng.gen::<f32>() * TAU, 0.0);
        let span = config.rotation_speed_span;
        let rotation_speed = Vec3::new(
            (rng.gen::<f32>() - 0.5) * span,
            (rng.gen::<f32>() - 0.5) * span,
            (rng.gen::<f32>() - 0.5) * span,
        );

        Some(Self {
            kind,
            material,
            position,
            rotation,
            rotation_speed,
            float_speed: rng.gen::<f64>() * config.float_speed_span + config.float_speed_min,
            float_range: rng.gen::<f32>() * config.float_range_span + config.float_range_min,
        })
    }

    /// Advance one frame at `clock` milliseconds.
    ///
    /// The bob is an increment, not an absolute offset, so `position.y`
    /// accumulates drift over time.
    pub fn advance(&mut self, clock: f64, float_step: f64) {
        self.rotation += self.rotation_speed;
        self.position.y += ((clock * self.float_speed).sin() * float_step) as f32;
    }
}
