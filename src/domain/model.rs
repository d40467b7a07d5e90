use image::Rgba;
use serde::Serialize;

/// Opaque RGB color used for QR modules, backgrounds and frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB`, `RRGGBB` or `#RGB` hex notation.
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        match hex.len() {
            6 => {
                let v = u32::from_str_radix(hex, 16).ok()?;
                Some(Self::new((v >> 16) as u8, (v >> 8) as u8, v as u8))
            }
            3 => {
                let v = u32::from_str_radix(hex, 16).ok()?;
                let (r, g, b) = ((v >> 8) & 0xf, (v >> 4) & 0xf, v & 0xf);
                Some(Self::new((r * 17) as u8, (g * 17) as u8, (b * 17) as u8))
            }
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_rgba(&self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

/// Validated frame geometry. Constructed only through boundary validation;
/// all fields are guaranteed non-negative by the types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSpec {
    pub distance_px: u32,
    pub thickness_px: u32,
    pub color: Color,
    pub corner_radius_px: u32,
}

impl FrameSpec {
    /// Upper bound for every pixel parameter. Boundary validation rejects
    /// larger values and the frame stage clamps to it, so frame geometry
    /// arithmetic and the canvas allocation stay bounded.
    pub const MAX_PX: u32 = 1000;
}

/// A fully validated generation request, ready for the compositing pipeline.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub text: String,
    pub foreground: Color,
    pub background: Color,
    pub logo: Option<Vec<u8>>,
    pub frame: Option<FrameSpec>,
}

impl GenerateRequest {
    /// Plain request with default colors, no logo and no frame.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            foreground: Color::BLACK,
            background: Color::WHITE,
            logo: None,
            frame: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    Png,
    Svg,
}

/// A written artifact addressed by its public path.
#[derive(Debug, Clone, Serialize)]
pub struct OutputArtifact {
    pub format: ArtifactFormat,
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Color::parse("#1a2b3c").unwrap(), Color::new(0x1a, 0x2b, 0x3c));
        assert_eq!(Color::parse("1A2B3C").unwrap(), Color::new(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn parses_three_digit_shorthand() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("#f00").unwrap(), Color::new(255, 0, 0));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::parse("").is_none());
        assert!(Color::parse("#12345").is_none());
        assert!(Color::parse("#gggggg").is_none());
        assert!(Color::parse("red").is_none());
    }

    #[test]
    fn hex_round_trip() {
        let color = Color::new(0xde, 0xad, 0x42);
        assert_eq!(Color::parse(&color.to_hex()).unwrap(), color);
    }
}
