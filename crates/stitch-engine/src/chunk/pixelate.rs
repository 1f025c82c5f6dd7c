//! Block-average pixelation.
//!
//! The image is cut into an `m` x `m` grid of contiguous blocks and every
//! pixel becomes the rounded per-channel mean of its block.
//!
//! Remainder policy: along each axis the block size is `len / m` (floor) and
//! the last block absorbs the leftover rows or columns. When `m` exceeds a
//! dimension, that axis uses one block per pixel instead.

use std::ops::Range;

use crate::api::EngineError;
use crate::color::{round_half_up, Rgb};
use crate::image::Image;

/// Pixelate `image` into `blocks` x `blocks` super-pixels.
///
/// # Errors
///
/// [`EngineError::InvalidArgument`] when `blocks < 1`.
pub fn pixelate(image: &Image, blocks: i32) -> Result<Image, EngineError> {
    if blocks < 1 {
        return Err(EngineError::InvalidArgument(format!(
            "number of super pixels must be positive, got {}",
            blocks
        )));
    }
    let blocks = blocks as usize;
    let width = image.width();
    let src = image.pixels();

    let mut pixels = src.to_vec();
    for rows in block_ranges(image.height(), blocks) {
        for cols in block_ranges(width, blocks) {
            let mut sum = [0u64; 3];
            for row in rows.clone() {
                for px in &src[row * width + cols.start..row * width + cols.end] {
                    sum[0] += px.r as u64;
                    sum[1] += px.g as u64;
                    sum[2] += px.b as u64;
                }
            }
            let count = (rows.len() * cols.len()) as f64;
            let mean = Rgb::from_i32_clamped([
                round_half_up(sum[0] as f64 / count),
                round_half_up(sum[1] as f64 / count),
                round_half_up(sum[2] as f64 / count),
            ]);
            for row in rows.clone() {
                pixels[row * width + cols.start..row * width + cols.end].fill(mean);
            }
        }
    }

    Ok(image.with_pixels(pixels))
}

/// Split `0..len` into `blocks` contiguous ranges (fewer if `blocks > len`);
/// the last range takes the remainder.
pub fn block_ranges(len: usize, blocks: usize) -> Vec<Range<usize>> {
    let blocks = blocks.clamp(1, len.max(1));
    let size = len / blocks;
    (0..blocks)
        .map(|i| {
            let start = i * size;
            let end = if i + 1 == blocks { len } else { start + size };
            start..end
        })
        .collect()
}
