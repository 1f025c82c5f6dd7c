//! Floss palettes and nearest-color matching.
//!
//! A [`Palette`] maps floss codes to colors and legend symbols. The full
//! palette comes from a loader outside the engine; a custom palette is a
//! subset picked by legend symbol with [`Palette::subset`].

mod error;
mod matcher;
mod palette;

pub use error::PaletteError;
pub use matcher::{closest, closest_in_subset, paint_to_custom, paint_to_nearest, remove, swap};
pub use palette::{Floss, Palette};
