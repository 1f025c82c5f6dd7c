//! Per-channel density reduction with Floyd-Steinberg error diffusion.
//!
//! # Algorithm
//!
//! Pixels are visited strictly in row-major order, left to right. For each
//! channel value `v` (clamped to 0..=255 first):
//!
//! 1. `level = round(v / 255 * (n - 1))`, `new = round(level * 255 / (n - 1))`
//!    (`n == 1` collapses every value to 0).
//! 2. `error = v - new`; `new` is written back.
//! 3. The error is spread over the not-yet-visited neighbors with the
//!    [`FLOYD_STEINBERG`] weights, each share rounded before it is added.
//!    Neighbors outside the grid are skipped. Accumulated values may leave
//!    0..=255 until their own pixel is quantized.
//!
//! All work happens on a private `i32` buffer, so the input image is never
//! touched and a rejected call has no effect.

mod kernel;

pub use kernel::{DiffusionKernel, FLOYD_STEINBERG};

use crate::api::EngineError;
use crate::color::{clamp_channel, round_half_up, Rgb};
use crate::image::Image;
use crate::tone::luma;

/// Reduce each of R, G and B to `levels` evenly spaced values.
///
/// # Errors
///
/// [`EngineError::InvalidArgument`] when `levels <= 0`.
pub fn color_dither(image: &Image, levels: i32) -> Result<Image, EngineError> {
    let levels = validate_levels(levels)?;
    let (width, height) = (image.width(), image.height());

    let mut planes: [Vec<i32>; 3] = [
        channel_plane(image, |p| p.r),
        channel_plane(image, |p| p.g),
        channel_plane(image, |p| p.b),
    ];
    for plane in planes.iter_mut() {
        diffuse(plane, width, height, levels, &FLOYD_STEINBERG);
    }

    let [r, g, b] = planes;
    let pixels = r
        .iter()
        .zip(&g)
        .zip(&b)
        .map(|((&r, &g), &b)| Rgb::from_i32_clamped([r, g, b]))
        .collect();
    Ok(image.with_pixels(pixels))
}

/// Greyscale the image, then reduce the single luma channel to `levels`
/// values and replicate it to R, G and B.
///
/// # Errors
///
/// [`EngineError::InvalidArgument`] when `levels <= 0`.
pub fn greyscale_dither(image: &Image, levels: i32) -> Result<Image, EngineError> {
    let levels = validate_levels(levels)?;

    let mut plane = channel_plane(image, luma);
    diffuse(
        &mut plane,
        image.width(),
        image.height(),
        levels,
        &FLOYD_STEINBERG,
    );

    let pixels = plane
        .iter()
        .map(|&v| {
            let v = clamp_channel(v);
            Rgb::new(v, v, v)
        })
        .collect();
    Ok(image.with_pixels(pixels))
}

/// Nearest of `levels` evenly spaced values in 0..=255.
#[inline]
pub fn quantize_channel(value: u8, levels: u32) -> u8 {
    if levels <= 1 {
        return 0;
    }
    let steps = (levels - 1) as f64;
    let level = round_half_up(value as f64 / 255.0 * steps);
    clamp_channel(round_half_up(level as f64 * 255.0 / steps))
}

fn validate_levels(levels: i32) -> Result<u32, EngineError> {
    if levels <= 0 {
        return Err(EngineError::InvalidArgument(format!(
            "number of colors must be positive, got {}",
            levels
        )));
    }
    Ok(levels as u32)
}

fn channel_plane(image: &Image, channel: impl Fn(Rgb) -> u8) -> Vec<i32> {
    image.pixels().iter().map(|&p| channel(p) as i32).collect()
}

/// Quantize a single-channel plane in place, diffusing error with `kernel`.
fn diffuse(plane: &mut [i32], width: usize, height: usize, levels: u32, kernel: &DiffusionKernel) {
    let divisor = kernel.divisor as f64;

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let old = clamp_channel(plane[idx]);
            let new = quantize_channel(old, levels);
            let error = old as i32 - new as i32;
            plane[idx] = new as i32;

            if error == 0 {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || nx >= width as isize || ny >= height as isize {
                    continue;
                }
                let share = round_half_up(error as f64 * weight as f64 / divisor);
                plane[ny as usize * width + nx as usize] += share;
            }
        }
    }
}
