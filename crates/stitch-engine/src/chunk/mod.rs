//! Spatial chunking: random-seed mosaic and block-average pixelation.

mod mosaic;
mod pixelate;

pub use mosaic::{generate_seeds, mosaic, Seed};
pub use pixelate::{block_ranges, pixelate};
