//! Type definitions shared by the overlay components

use std::fmt;
use thiserror::Error;

/// Opaque handle identifying a producer's output line
///
/// Handles are issued in registration order starting at 0 and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProducerHandle(usize);

impl ProducerHandle {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of this producer's line in the merged output
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ProducerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors that can occur when parsing a hex color
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Expected 6 hex digits, got {0}")]
    InvalidLength(usize),

    #[error("Invalid hex digits in color: {0}")]
    InvalidDigit(String),
}

/// Color as understood by the rendering surface
///
/// Hosts either work in normalized float channels (0.0-1.0) or in bytes;
/// both convert to the same `#RRGGBB` markup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// 8-bit channels
    Rgb(u8, u8, u8),

    /// Normalized float channels, clamped to 0.0-1.0 on conversion
    Float(f32, f32, f32),
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Color = Color::Rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Color = Color::Rgb(0x00, 0xFF, 0x00);
    pub const BLUE: Color = Color::Rgb(0x00, 0x00, 0xFF);

    /// Byte channels of this color
    ///
    /// Float channels are scaled by 255 and truncated, so 0.5 becomes 127.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        match self {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Float(r, g, b) => (channel_to_u8(r), channel_to_u8(g), channel_to_u8(b)),
        }
    }

    /// Uppercase `#RRGGBB` representation
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Parse `#RRGGBB` or `RRGGBB` (case-insensitive)
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength(digits.len()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(digits.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidDigit(digits.to_string()))
        };

        Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

fn channel_to_u8(value: f32) -> u8 {
    // NaN maps to 0 through the saturating cast
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Two-component vector
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Three-component vector
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<(f32, f32, f32)> for Vec3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self { x, y, z }
    }
}

/// Decimal places used when formatting numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    /// Digits after the decimal point for floats
    pub float: usize,

    /// Digits after the decimal point for each vector component
    pub vector: usize,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            float: 2,
            vector: 2,
        }
    }
}

/// Per-tick configuration consumed by the aggregator
#[derive(Debug, Clone, PartialEq)]
pub struct TickSettings {
    /// When false, writes are discarded and the surface is hidden
    pub enabled: bool,

    /// Prefix every line with the producer's display name
    pub show_names: bool,

    /// Decimal places applied to formatting calls after this tick
    pub precision: Precision,

    /// Foreground color handed to the surface
    pub text_color: Color,
}

impl Default for TickSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            show_names: true,
            precision: Precision::default(),
            text_color: Color::BLACK,
        }
    }
}

/// A run of text with an optional color from overlay markup
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSegment {
    /// The text content, with markup removed
    pub text: String,

    /// Innermost color tag enclosing the text
    pub color: Option<Color>,
}

impl StyledSegment {
    /// Create a new unstyled segment
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    /// Create a segment with a color
    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_red_hex() {
        assert_eq!(Color::Float(1.0, 0.0, 0.0).to_hex(), "#FF0000");
        assert_eq!(Color::RED.to_hex(), "#FF0000");
    }

    #[test]
    fn test_float_channels_truncate() {
        // 0.5 * 255 = 127.5, truncated to 127
        assert_eq!(Color::Float(0.5, 0.5, 0.5).to_hex(), "#7F7F7F");
        // 0.999 * 255 = 254.745, truncated to 254
        assert_eq!(Color::Float(0.999, 0.0, 0.0).to_hex(), "#FE0000");
    }

    #[test]
    fn test_float_channels_clamp() {
        assert_eq!(Color::Float(2.0, -1.0, f32::NAN).to_hex(), "#FF0000");
    }

    #[test]
    fn test_byte_channels() {
        assert_eq!(Color::Rgb(0x12, 0xab, 0x07).to_hex(), "#12AB07");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#12ab07"), Ok(Color::Rgb(0x12, 0xAB, 0x07)));
        assert_eq!(Color::from_hex("FFFFFF"), Ok(Color::WHITE));
        assert_eq!(Color::from_hex("#FFF"), Err(ColorParseError::InvalidLength(3)));
        assert!(matches!(
            Color::from_hex("#GG0000"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_from_hex_rejects_signs() {
        assert!(matches!(
            Color::from_hex("#+F+F+F"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            Color::from_hex("-10000"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_handle_display() {
        assert_eq!(ProducerHandle::new(3).to_string(), "#3");
        assert_eq!(ProducerHandle::new(3).index(), 3);
    }
}
