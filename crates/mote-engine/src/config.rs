use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RGBA color with components in [0.0, 1.0].
/// Serialized as a CSS hex string (`#rgb`, `#rrggbb` or `#rrggbbaa`) so page
/// configs can use the same notation as their stylesheets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    /// Parse a CSS hex color: `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError(hex.to_string()))?;
        let err = || ColorParseError(hex.to_string());

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
        let (r, g, b, a) = match digits.len() {
            3 => {
                let nibble = |s: &str| channel(s).map(|n| n * 17);
                (
                    nibble(&digits[0..1])?,
                    nibble(&digits[1..2])?,
                    nibble(&digits[2..3])?,
                    255,
                )
            }
            6 => (
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                255,
            ),
            8 => (
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                channel(&digits[6..8])?,
            ),
            _ => return Err(err()),
        };

        Ok(Rgba::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ))
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when alpha is not fully opaque.
    pub fn to_hex(&self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(self.a)
            )
        }
    }
}

/// A color string that could not be parsed as CSS hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid hex color: {:?}", self.0)
    }
}

impl std::error::Error for ColorParseError {}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Rgba::from_hex(&hex).map_err(D::Error::custom)
    }
}

/// Tuning knobs for a particle field.
/// `Default` reproduces the documentation-site background effect; deployments
/// override fields via JSON from the hosting page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Nominal particle count before density scaling.
    pub particle_count: usize,
    /// Resting colors, picked uniformly at spawn.
    pub palette: Vec<Rgba>,
    /// Color taken while the cursor is very close.
    pub active_color: Rgba,
    /// Initial per-axis velocity is uniform in [-speed/2, speed/2].
    pub speed: f32,
    /// Radius a particle shrinks toward while inactive.
    pub min_radius: f32,
    /// Radius a particle grows toward while active.
    pub max_radius: f32,
    /// Radius around the cursor within which particles react.
    pub activation_distance: f32,
    /// Scale of the away-from-cursor impulse.
    pub repel_strength: f32,
    /// Active particles are re-kicked when slower than this.
    pub min_speed: f32,
    /// Seconds between automatic waves.
    pub wave_interval: f32,
    /// Wave impulse falls off linearly to zero at this distance.
    pub wave_radius: f32,
    /// Impulse magnitude at the wave epicenter.
    pub wave_strength: f32,
    /// Seconds of impulse delay per unit of distance from the epicenter.
    pub wave_delay_per_unit: f32,
    /// Active pairs closer than this get a connection segment.
    pub connection_distance: f32,
    /// Segment alpha at distance zero; falls off linearly to zero.
    pub connection_alpha: f32,
    /// Canvas area per nominal particle; larger means sparser.
    pub density_divisor: f32,
    /// Lower clamp on the scaled population.
    pub min_count: usize,
    /// Upper clamp on the scaled population.
    pub max_count: usize,
    /// Simulation timestep in seconds.
    pub fixed_dt: f32,
    /// Seconds without pointer events before the pointer counts as idle.
    pub pointer_idle: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: 100,
            palette: vec![
                Rgba::new(0x0d as f32 / 255.0, 0x2a as f32 / 255.0, 0x4c as f32 / 255.0, 1.0),
                Rgba::new(0x7b as f32 / 255.0, 0x97 as f32 / 255.0, 0xaf as f32 / 255.0, 1.0),
                Rgba::new(0xcf as f32 / 255.0, 0xa2 as f32 / 255.0, 0x51 as f32 / 255.0, 1.0),
            ],
            active_color: Rgba::new(0xf5 as f32 / 255.0, 0xf5 as f32 / 255.0, 0xf5 as f32 / 255.0, 1.0),
            speed: 0.5,
            min_radius: 0.5,
            max_radius: 4.0,
            activation_distance: 150.0,
            repel_strength: 0.05,
            min_speed: 0.1,
            wave_interval: 5.0,
            wave_radius: 300.0,
            wave_strength: 2.0,
            wave_delay_per_unit: 0.003,
            connection_distance: 100.0,
            connection_alpha: 0.2,
            density_divisor: 200_000.0,
            min_count: 50,
            max_count: 200,
            fixed_dt: 1.0 / 60.0,
            pointer_idle: 0.1,
        }
    }
}

impl FieldConfig {
    /// Parse a config from a JSON string. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Density-scaled particle count for a canvas area, clamped to
    /// [min_count, max_count].
    pub fn population(&self, width: f32, height: f32) -> usize {
        let density = width * height / self.density_divisor;
        let scaled = (self.particle_count as f32 * density) as usize;
        scaled.clamp(self.min_count, self.max_count)
    }
}
