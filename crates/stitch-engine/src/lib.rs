#![allow(clippy::module_inception)]

//! stitch-engine: image transforms and floss matching for cross-stitch
//!
//! This library takes a decoded RGB raster through a pipeline of pixel
//! operations and maps the result onto a thread-color palette to produce a
//! cross-stitch pattern with a legend.
//!
//! # Quick Start
//!
//! ```
//! use stitch_engine::{pattern, Floss, Image, Palette, Rgb};
//!
//! let palette = Palette::new([
//!     Floss::new(1, Rgb::new(255, 0, 0), 'A'),
//!     Floss::new(2, Rgb::new(0, 255, 0), 'B'),
//! ])
//! .unwrap();
//!
//! let image = Image::filled(1, 1, Rgb::new(255, 0, 0)).unwrap();
//! let text = pattern::generate(&image, &palette).serialize();
//!
//! assert_eq!(text, "1x1\nA\n\nLEGEND:\nA DMC-1\n");
//! ```
//!
//! # Operations
//!
//! | Family | Functions |
//! |--------|-----------|
//! | Filters | [`filter::blur`], [`filter::sharpen`] |
//! | Tone | [`tone::greyscale`], [`tone::sepiatone`] |
//! | Density | [`dither::color_dither`], [`dither::greyscale_dither`] |
//! | Chunking | [`chunk::mosaic`], [`chunk::pixelate`] |
//! | Palette | [`palette::closest`], [`palette::paint_to_nearest`], [`palette::swap`], [`palette::remove`] |
//! | Pattern | [`pattern::generate`], [`pattern::serialize`] |
//!
//! All of them are pure: they borrow an [`Image`] and return a new one.
//! [`Engine`] layers a session on top (current and original image, last
//! pattern) and [`Command`] gives orchestrators a closed, uniformly
//! reported set of operations to drive it with.
//!
//! # Rounding
//!
//! Every float-to-channel conversion rounds half up (`x.5` goes towards
//! +inf) and then clamps to 0..=255; see [`color::round_half_up`].
//!
//! # Floss Matching
//!
//! Nearest floss is chosen with the redmean-style distance in
//! [`color::redmean_distance`], scanning the palette in ascending code order
//! so that equal distances resolve to the smallest code.

pub mod api;
pub mod chunk;
pub mod color;
pub mod dither;
pub mod filter;
pub mod image;
pub mod palette;
pub mod pattern;
pub mod tone;

#[cfg(test)]
mod domain_tests;

pub use api::{Command, Engine, EngineError};
pub use color::{ParseColorError, Rgb};
pub use image::Image;
pub use palette::{Floss, Palette, PaletteError};
pub use pattern::{LegendEntry, Pattern};
