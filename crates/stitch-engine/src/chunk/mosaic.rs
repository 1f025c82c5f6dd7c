//! Random-seed nearest-neighbor mosaic.
//!
//! `k` distinct pixel positions are drawn uniformly at random as seeds. Every
//! pixel then takes the color of the seed closest to it in (row, column)
//! space; on equal distance the seed drawn first wins.
//!
//! Seeds are bucketed by row and the search widens one row band at a time,
//! stopping once the band alone is farther than the best seed found. A
//! brute-force scan would cost `O(W * H * k)`.

use std::collections::HashSet;

use rand::Rng;

use crate::api::EngineError;
use crate::color::Rgb;
use crate::image::Image;

/// A seed position and the color sampled there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    pub row: usize,
    pub col: usize,
    pub color: Rgb,
}

impl Seed {
    /// Squared Euclidean distance to `(row, col)`.
    #[inline]
    fn distance_squared(&self, row: usize, col: usize) -> u64 {
        let dr = self.row.abs_diff(row) as u64;
        let dc = self.col.abs_diff(col) as u64;
        dr * dr + dc * dc
    }
}

/// Draw `count` distinct seeds, in generation order.
///
/// Positions are sampled uniformly; a position that was already drawn is
/// rejected and sampled again, so no two seeds ever share a position.
///
/// # Errors
///
/// [`EngineError::InvalidArgument`] unless `1 <= count <= width * height`.
pub fn generate_seeds<R: Rng>(
    image: &Image,
    count: i64,
    rng: &mut R,
) -> Result<Vec<Seed>, EngineError> {
    let count = validate_seed_count(image, count)?;

    let mut taken = HashSet::with_capacity(count);
    let mut seeds = Vec::with_capacity(count);
    while seeds.len() < count {
        let row = rng.gen_range(0..image.height());
        let col = rng.gen_range(0..image.width());
        if !taken.insert((row, col)) {
            continue;
        }
        let color = image.pixels()[row * image.width() + col];
        seeds.push(Seed { row, col, color });
    }
    Ok(seeds)
}

/// Mosaic `image` around `count` random seeds.
///
/// # Errors
///
/// [`EngineError::InvalidArgument`] unless `1 <= count <= width * height`.
pub fn mosaic<R: Rng>(image: &Image, count: i64, rng: &mut R) -> Result<Image, EngineError> {
    let seeds = generate_seeds(image, count, rng)?;
    Ok(paint_seeds(image, &seeds))
}

/// Assign every pixel the color of its nearest seed.
fn paint_seeds(image: &Image, seeds: &[Seed]) -> Image {
    // Indices into `seeds`, per row, in generation order
    let mut by_row: Vec<Vec<usize>> = vec![Vec::new(); image.height()];
    for (index, seed) in seeds.iter().enumerate() {
        by_row[seed.row].push(index);
    }

    let mut pixels = Vec::with_capacity(image.len());
    for row in 0..image.height() {
        for col in 0..image.width() {
            let index = nearest_seed(seeds, &by_row, row, col);
            pixels.push(seeds[index].color);
        }
    }
    image.with_pixels(pixels)
}

/// Index of the seed nearest to `(row, col)`; ties go to the lower index.
fn nearest_seed(seeds: &[Seed], by_row: &[Vec<usize>], row: usize, col: usize) -> usize {
    let mut best: Option<(u64, usize)> = None;

    for offset in 0..by_row.len() {
        if let Some((best_dist, _)) = best {
            if (offset as u64) * (offset as u64) > best_dist {
                break;
            }
        }

        let above = row.checked_sub(offset);
        let below = (offset > 0).then_some(row + offset).filter(|&r| r < by_row.len());
        for band in [above, below].into_iter().flatten() {
            for &index in &by_row[band] {
                let candidate = (seeds[index].distance_squared(row, col), index);
                if best.map_or(true, |current| candidate < current) {
                    best = Some(candidate);
                }
            }
        }
    }

    best.map_or(0, |(_, index)| index)
}

fn validate_seed_count(image: &Image, count: i64) -> Result<usize, EngineError> {
    let max = image.len();
    if count < 1 || count as u64 > max as u64 {
        return Err(EngineError::InvalidArgument(format!(
            "number of seeds must be between 1 and {}, got {}",
            max, count
        )));
    }
    Ok(count as usize)
}
