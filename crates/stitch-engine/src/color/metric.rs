//! Redmean-style perceptual distance.
//!
//! ```text
//! mean    = (r1 + r2) / 2
//! d_red   = (2 + mean / 256) * |r1 - r2|
//! d_green = 4 * (g1 - g2)^2
//! d_blue  = (2 + (255 - mean) / 256) * (b1 - b2)^2
//! d       = sqrt(d_red + d_green + d_blue)
//! ```
//!
//! The red term is not squared. Floss codes chosen for existing patterns
//! depend on this exact form.

use super::Rgb;

/// Perceptual distance between two colors.
///
/// Symmetric in its arguments and zero only for identical colors.
#[inline]
pub fn redmean_distance(a: Rgb, b: Rgb) -> f64 {
    let red_mean = (a.r as f64 + b.r as f64) / 2.0;
    let dr = (a.r as f64 - b.r as f64).abs();
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;

    let red = (2.0 + red_mean / 256.0) * dr;
    let green = 4.0 * dg * dg;
    let blue = (2.0 + (255.0 - red_mean) / 256.0) * db * db;

    (red + green + blue).sqrt()
}
