use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Linear RGB color with channels nominally in `[0, 1]`.
///
/// Serializes as a `[r, g, b]` triple; deserializes from a triple or a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "[f32; 3]")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Errors from parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("expected 3 or 6 hex digits, got {0} in {1:?}")]
    BadLength(usize, String),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a CSS-style hex color: `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.trim().trim_start_matches('#');
        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            n => return Err(ColorParseError::BadLength(n, s.to_string())),
        };
        let value =
            u32::from_str_radix(&expanded, 16).map_err(|_| ColorParseError::BadDigit(s.to_string()))?;
        Ok(Self::from_u8(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        ))
    }

    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Format as `#rrggbb`, clamping channels first.
    pub fn to_hex(self) -> String {
        let c = self.clamped();
        let byte = |v: f32| (v * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(c.r), byte(c.g), byte(c.b))
    }

    /// Channels as an array, in `r, g, b` order.
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// True when every channel is a finite value in `[0, 1]`.
    pub fn is_normalized(&self) -> bool {
        self.to_array()
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }

    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Per-channel linear interpolation towards `other`, clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Vec3::from(self).lerp(Vec3::from(other), t).into()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Triple([f32; 3]),
    Hex(String),
}

impl TryFrom<ColorRepr> for Rgb {
    type Error = ColorParseError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Triple(c) => Ok(c.into()),
            ColorRepr::Hex(s) => Self::from_hex(&s),
        }
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(c: [f32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Rgb> for [f32; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}

impl From<Rgb> for Vec3 {
    fn from(c: Rgb) -> Self {
        Vec3::new(c.r, c.g, c.b)
    }
}

impl From<Vec3> for Rgb {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z).clamped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_six_digit_hex() {
        let c = Rgb::from_hex("#ff6030").unwrap();
        assert_eq!(c, Rgb::from_u8(0xff, 0x60, 0x30));
        assert_eq!(c.r, 1.0);
    }

    #[test]
    fn parse_without_hash_and_shorthand() {
        assert_eq!(Rgb::from_hex("1b3984").unwrap(), Rgb::from_u8(0x1b, 0x39, 0x84));
        assert_eq!(Rgb::from_hex("#f00").unwrap(), Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            Rgb::from_hex("#ff60"),
            Err(ColorParseError::BadLength(4, _))
        ));
        assert!(matches!(
            Rgb::from_hex("#gg6030"),
            Err(ColorParseError::BadDigit(_))
        ));
    }

    #[test]
    fn hex_round_trip() {
        assert_eq!(Rgb::from_hex("#1b3984").unwrap().to_hex(), "#1b3984");
    }

    #[test]
    fn lerp_midpoint_red_to_blue() {
        let red = Rgb::new(1.0, 0.0, 0.0);
        let blue = Rgb::new(0.0, 0.0, 1.0);
        let mid = red.lerp(blue, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert_eq!(mid.g, 0.0);
        assert!((mid.b - 0.5).abs() < 1e-6);
    }

    #[test]
    fn lerp_clamps_out_of_range_factor() {
        let c = Rgb::BLACK.lerp(Rgb::WHITE, 1.5);
        assert_eq!(c, Rgb::WHITE);
    }

    #[test]
    fn normalized_check() {
        assert!(Rgb::new(0.0, 0.5, 1.0).is_normalized());
        assert!(!Rgb::new(1.2, 0.0, 0.0).is_normalized());
        assert!(!Rgb::new(f32::NAN, 0.0, 0.0).is_normalized());
    }

    #[test]
    fn serializes_as_triple() {
        let json = serde_json::to_string(&Rgb::new(1.0, 0.5, 0.0)).unwrap();
        assert_eq!(json, "[1.0,0.5,0.0]");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn deserializes_from_hex_string() {
        let c: Rgb = serde_json::from_str("\"#ff6030\"").unwrap();
        assert_eq!(c, Rgb::from_u8(0xff, 0x60, 0x30));
        assert!(serde_json::from_str::<Rgb>("\"#nothex\"").is_err());
    }
}
