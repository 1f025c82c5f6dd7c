//! 8-bit RGB color type

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error type for parsing `r,g,b` color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The string did not contain exactly three comma-separated fields
    #[error("expected three comma-separated channels, got {0}")]
    FieldCount(usize),
    /// A channel was not an integer
    #[error("invalid channel value {0:?}")]
    InvalidChannel(String),
    /// A channel was an integer outside 0..=255
    #[error("channel value {0} out of range 0..=255")]
    OutOfRange(i64),
}

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Pure white, the color removed floss is replaced with.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels widened to `i32`, for arithmetic that may leave the 8-bit range.
    #[inline]
    pub fn to_i32(self) -> [i32; 3] {
        [self.r as i32, self.g as i32, self.b as i32]
    }

    /// Build a color from wide channel values, clamping each into 0..=255.
    #[inline]
    pub fn from_i32_clamped(channels: [i32; 3]) -> Self {
        Self::new(
            super::clamp_channel(channels[0]),
            super::clamp_channel(channels[1]),
            super::clamp_channel(channels[2]),
        )
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_bytes()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// Parses `"r,g,b"` with optional whitespace around each channel.
impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(ParseColorError::FieldCount(fields.len()));
        }

        let mut channels = [0u8; 3];
        for (slot, field) in channels.iter_mut().zip(&fields) {
            let value: i64 = field
                .parse()
                .map_err(|_| ParseColorError::InvalidChannel(field.to_string()))?;
            *slot = u8::try_from(value).map_err(|_| ParseColorError::OutOfRange(value))?;
        }

        Ok(Self::from_bytes(channels))
    }
}
