use std::fmt;

use glam::Vec3;
use serde::Deserialize;

use crate::color::Rgb;
use crate::scene::shape::WireMaterial;

/// Errors raised while loading or validating a [`BackdropConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    Parse(serde_json::Error),
    /// A palette that must supply colours for spawned objects is empty.
    EmptyPalette(&'static str),
    /// A numeric setting is outside its accepted range.
    OutOfRange { field: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Failed to parse backdrop config: {}", e),
            ConfigError::EmptyPalette(name) => {
                write!(f, "Palette `{}` must contain at least one colour", name)
            }
            ConfigError::OutOfRange { field, value } => {
                write!(f, "Config value `{}` is out of range: {}", field, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Settings for the 3D scene: floating shapes, point cloud and viewpoint.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub shape_count: usize,
    /// Full extent of the box shapes spawn in, centred on the origin.
    pub shape_extent: Vec3,
    /// Per-axis rotation speed is drawn from `[-span/2, span/2)`.
    pub rotation_speed_span: f32,
    /// Bob frequency bounds, per clock millisecond. Multiplied by the epoch
    /// clock, so they must stay `f64`.
    pub float_speed_min: f64,
    pub float_speed_span: f64,
    pub float_range_min: f32,
    pub float_range_span: f32,
    /// Vertical step applied per frame, scaled by `sin(clock * float_speed)`.
    pub float_step: f64,
    pub shape_materials: Vec<WireMaterial>,

    pub point_count: usize,
    /// Full extent of the box points spawn in, centred on the origin.
    pub point_extent: Vec3,
    /// Per-frame amplitude of the sine/cosine drift field.
    pub point_drift: f64,
    pub point_palette: Vec<Rgb>,

    pub camera_distance: f32,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Fraction of the remaining pointer offset covered each frame.
    pub pointer_easing: f32,
}

fn material(hex: u32, opacity: f32) -> WireMaterial {
    WireMaterial {
        color: Rgb::from_hex(hex),
        opacity,
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shape_count: 15,
            shape_extent: Vec3::new(800.0, 600.0, 500.0),
            rotation_speed_span: 0.01,
            float_speed_min: 0.005,
            float_speed_span: 0.02,
            float_range_min: 20.0,
            float_range_span: 50.0,
            float_step: 0.1,
            shape_materials: vec![
                material(0x4285F4, 0.4),
                material(0x34A853, 0.3),
                material(0xEA4335, 0.35),
                material(0x9C27B0, 0.3),
            ],
            point_count: 1500,
            point_extent: Vec3::new(2000.0, 2000.0, 1000.0),
            point_drift: 0.1,
            point_palette: [0x4285F4, 0x34A853, 0xEA4335, 0x9C27B0]
                .into_iter()
                .map(Rgb::from_hex)
                .collect(),
            camera_distance: 300.0,
            fov_y_degrees: 75.0,
            near: 1.0,
            far: 1000.0,
            pointer_easing: 0.0005,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shape_count > 0 && self.shape_materials.is_empty() {
            return Err(ConfigError::EmptyPalette("shape_materials"));
        }
        if self.point_count > 0 && self.point_palette.is_empty() {
            return Err(ConfigError::EmptyPalette("point_palette"));
        }
        if !(0.0..=1.0).contains(&self.pointer_easing) {
            return Err(ConfigError::OutOfRange {
                field: "pointer_easing",
                value: self.pointer_easing,
            });
        }
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(ConfigError::OutOfRange {
                field: "fov_y_degrees",
                value: self.fov_y_degrees,
            });
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(ConfigError::OutOfRange {
                field: "far",
                value: self.far,
            });
        }
        if self.camera_distance <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "camera_distance",
                value: self.camera_distance,
            });
        }
        Ok(())
    }
}

/// Settings for the 2D canvas particle field.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub particle_count: usize,
    /// Per-axis velocity is drawn from `[-span/2, span/2)`.
    pub velocity_span: f32,
    pub radius_min: f32,
    pub radius_span: f32,
    pub palette: Vec<Rgb>,
    /// Pairs closer than this are linked.
    pub link_distance: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            velocity_span: 0.5,
            radius_min: 1.0,
            radius_span: 2.0,
            palette: [0x9ECAD6, 0x748DAE, 0xF5CBCB, 0xC0C9EE]
                .into_iter()
                .map(Rgb::from_hex)
                .collect(),
            link_distance: 100.0,
        }
    }
}

impl CanvasConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count > 0 && self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette("palette"));
        }
        if self.link_distance <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "link_distance",
                value: self.link_distance,
            });
        }
        if self.radius_min < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "radius_min",
                value: self.radius_min,
            });
        }
        Ok(())
    }
}

/// Top-level configuration for both backdrop loops.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    pub scene: SceneConfig,
    pub canvas: CanvasConfig,
}

impl BackdropConfig {
    /// Parse a JSON document. Missing keys fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BackdropConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scene.validate()?;
        self.canvas.validate()
    }
}
