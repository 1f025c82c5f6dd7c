//! Fixed 3x3 color-matrix transforms (greyscale and sepia).
//!
//! Each output channel is a linear combination of the input R, G, B of the
//! same pixel, rounded half-up and clamped. There is no dependency between
//! pixels.

use crate::color::{round_half_up, Rgb};
use crate::image::Image;

/// A 3x3 linear color matrix. Row `i` produces output channel `i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneMatrix(pub [[f64; 3]; 3]);

/// Rec. 709 luma replicated to all three channels.
pub const GREYSCALE: ToneMatrix = ToneMatrix([
    [0.2126, 0.7152, 0.0722],
    [0.2126, 0.7152, 0.0722],
    [0.2126, 0.7152, 0.0722],
]);

/// The canonical sepia matrix.
pub const SEPIA: ToneMatrix = ToneMatrix([
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
]);

impl ToneMatrix {
    /// Transform a single color.
    #[inline]
    pub fn transform(&self, color: Rgb) -> Rgb {
        let input = [color.r as f64, color.g as f64, color.b as f64];
        let mut out = [0i32; 3];
        for (slot, row) in out.iter_mut().zip(&self.0) {
            let value = row[0] * input[0] + row[1] * input[1] + row[2] * input[2];
            *slot = round_half_up(value);
        }
        Rgb::from_i32_clamped(out)
    }

    /// Transform every pixel of an image.
    pub fn apply(&self, image: &Image) -> Image {
        image.map_pixels(|px| self.transform(px))
    }
}

/// Tone selection for the engine's command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Luma replicated to all channels, see [`GREYSCALE`]
    Greyscale,
    /// Warm brown tint, see [`SEPIA`]
    Sepia,
}

impl Tone {
    /// The matrix this tone multiplies each pixel by.
    pub fn matrix(self) -> &'static ToneMatrix {
        match self {
            Tone::Greyscale => &GREYSCALE,
            Tone::Sepia => &SEPIA,
        }
    }

    /// Apply the tone, returning a new image.
    pub fn apply(self, image: &Image) -> Image {
        self.matrix().apply(image)
    }
}

/// Greyscale luma of a color, rounded half-up.
#[inline]
pub fn luma(color: Rgb) -> u8 {
    GREYSCALE.transform(color).r
}

/// Convert an image to greyscale.
pub fn greyscale(image: &Image) -> Image {
    GREYSCALE.apply(image)
}

/// Apply a sepia tone to an image.
pub fn sepiatone(image: &Image) -> Image {
    SEPIA.apply(image)
}
