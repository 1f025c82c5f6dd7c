//! Color types and the perceptual distance used for floss matching.
//!
//! Every color stored by the engine is an 8-bit [`Rgb`] triple, so the
//! "channels stay within 0..=255" rule is carried by the type itself.
//! Arithmetic that can leave that range (convolution, tone matrices, error
//! diffusion) works on wider integers or floats and comes back through
//! [`clamp_channel`].

mod metric;
mod rgb;

pub use metric::redmean_distance;
pub use rgb::{ParseColorError, Rgb};

/// Round to the nearest integer, halves rounding up (towards +inf).
///
/// `-2.5` rounds to `-2`, `2.5` rounds to `3`. All transforms share this rule
/// so that results are stable across operations.
#[inline]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Clamp a wide channel value into the 8-bit range.
#[inline]
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
