//! CSS length parsing for length-valued tokens (`backdropBlur`)

use lightningcss::traits::Parse;
use lightningcss::values::length::Length;
use thiserror::Error;

/// Error type for length parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthError {
    /// Input string was empty
    #[error("empty length string")]
    Empty,
    /// Leading or trailing whitespace, which would be written out verbatim
    #[error("length '{0}' has surrounding whitespace")]
    Whitespace(String),
    /// A bare number other than zero
    #[error("length '{0}' is missing a unit")]
    MissingUnit(String),
    /// Not a length lightningcss recognizes
    #[error("not a CSS length: '{0}'")]
    CssParse(String),
}

/// Parse a CSS length such as `2px`, `0.5rem` or `calc(1px + 1rem)`.
///
/// Unitless numbers other than `0` are rejected, as in CSS. The value is
/// checked as written, surrounding whitespace is an error.
///
/// ```
/// use twconfig::length::parse_length;
///
/// assert!(parse_length("2px").is_ok());
/// assert!(parse_length("2").is_err());
/// ```
pub fn parse_length(s: &str) -> Result<Length, LengthError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(LengthError::Empty);
    }
    if trimmed.len() != s.len() {
        return Err(LengthError::Whitespace(s.to_string()));
    }
    // lightningcss takes bare numbers as lengths
    if let Ok(n) = s.parse::<f64>() {
        if n != 0.0 {
            return Err(LengthError::MissingUnit(s.to_string()));
        }
    }

    Length::parse_string(s).map_err(|_| LengthError::CssParse(s.to_string()))
}

/// Whether `s` is a valid CSS length
pub fn is_length(s: &str) -> bool {
    parse_length(s).is_ok()
}
