//! Color parsing for color token values
//!
//! Supports the following formats:
//! - Hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - Functional: `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hwb()`, `oklch()`
//! - Named: `red`, `blue`, `transparent`, etc.

use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;
use std::fmt;
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    /// Not a color lightningcss recognizes
    #[error("not a CSS color: '{0}'")]
    CssParse(String),
}

/// An sRGB color with alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Whether `s` is exactly `#` followed by six hex digits.
///
/// This is the form every built-in color token uses.
pub fn is_hex6(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Parse a CSS color string.
///
/// # Examples
///
/// ```
/// use twconfig::color::{parse_color, Rgba};
///
/// let red = parse_color("#F00").unwrap();
/// assert_eq!(red, Rgba { r: 255, g: 0, b: 0, a: 255 });
///
/// let start = parse_color("#667eea").unwrap();
/// assert_eq!(start.to_string(), "#667eea");
/// ```
///
/// # Errors
///
/// Returns `ColorError` if the input is empty or not a CSS color.
pub fn parse_color(s: &str) -> Result<Rgba, ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    parse_css_color(s)
}

/// Parse the digits of a hex color (without the leading '#')
fn parse_hex_color(hex: &str) -> Result<Rgba, ColorError> {
    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(c));
    }

    // all ASCII from here on, byte slicing is safe
    let digit = |i: usize| -> u8 { hex_value(hex.as_bytes()[i]) };
    let pair = |i: usize| -> u8 { digit(i) * 16 + digit(i + 1) };

    match hex.len() {
        3 => Ok(Rgba { r: digit(0) * 17, g: digit(1) * 17, b: digit(2) * 17, a: 255 }),
        4 => Ok(Rgba { r: digit(0) * 17, g: digit(1) * 17, b: digit(2) * 17, a: digit(3) * 17 }),
        6 => Ok(Rgba { r: pair(0), g: pair(2), b: pair(4), a: 255 }),
        8 => Ok(Rgba { r: pair(0), g: pair(2), b: pair(4), a: pair(6) }),
        len => Err(ColorError::InvalidLength(len)),
    }
}

fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

/// Parse a non-hex CSS color using lightningcss (rgb, hsl, hwb, oklch, named colors)
fn parse_css_color(s: &str) -> Result<Rgba, ColorError> {
    use lightningcss::values::color::FloatColor;

    let css_color = CssColor::parse_string(s).map_err(|_| ColorError::CssParse(s.to_string()))?;
    let rgb_color = css_color.to_rgb().map_err(|_| ColorError::CssParse(s.to_string()))?;

    match rgb_color {
        CssColor::RGBA(rgba) => {
            Ok(Rgba { r: rgba.red, g: rgba.green, b: rgba.blue, a: rgba.alpha })
        }
        CssColor::Float(float_color) => match float_color.as_ref() {
            FloatColor::RGB(rgb) => Ok(Rgba {
                r: (rgb.r * 255.0).round() as u8,
                g: (rgb.g * 255.0).round() as u8,
                b: (rgb.b * 255.0).round() as u8,
                a: (rgb.alpha * 255.0).round() as u8,
            }),
            _ => Err(ColorError::CssParse(s.to_string())),
        },
        _ => Err(ColorError::CssParse(s.to_string())),
    }
}
