use std::fmt;

use serde::Deserialize;

/// Error returned when a palette entry is not a 24-bit hex colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorError {
    pub input: String,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid colour {:?}: expected #RRGGBB or 0xRRGGBB",
            self.input
        )
    }
}

impl std::error::Error for ColorError {}

/// Linear RGB colour with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` integer.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Parse `#RRGGBB` or `0xRRGGBB` (case-insensitive).
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()));

        match digits.and_then(|d| u32::from_str_radix(d, 16).ok()) {
            Some(hex) => Ok(Self::from_hex(hex)),
            None => Err(ColorError {
                input: input.to_string(),
            }),
        }
    }

    /// Re-pack into a `0xRRGGBB` integer.
    pub fn hex(&self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// CSS colour string (`#rrggbb`) for 2D canvas styles.
    pub fn to_css(&self) -> String {
        format!("#{:06x}", self.hex())
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::parse(&value)
    }
}
