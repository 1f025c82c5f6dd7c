//! Image-wide palette operations: nearest-color painting, exact-color swap
//! and removal.

use std::collections::{BTreeMap, HashMap};

use super::error::PaletteError;
use super::palette::Palette;
use crate::color::Rgb;
use crate::image::Image;

/// Code of the palette entry nearest to `color`.
#[inline]
pub fn closest(color: Rgb, palette: &Palette) -> u32 {
    palette.find_nearest(color).0
}

/// Code of the nearest entry among a caller-chosen subset of `palette`,
/// given as `symbol -> color`.
///
/// Symbols are translated to codes through `palette` first; see
/// [`Palette::subset`]. Callers matching many pixels should build the
/// subset once and use [`closest`] on it instead.
pub fn closest_in_subset(
    color: Rgb,
    palette: &Palette,
    custom: &BTreeMap<char, Rgb>,
) -> Result<u32, PaletteError> {
    Ok(palette.subset(custom)?.find_nearest(color).0)
}

/// Replace every pixel with the color of its nearest palette entry.
pub fn paint_to_nearest(image: &Image, palette: &Palette) -> Image {
    // Images usually hold far fewer distinct colors than pixels
    let mut nearest: HashMap<Rgb, Rgb> = HashMap::new();
    image.map_pixels(|px| {
        *nearest.entry(px).or_insert_with(|| {
            let code = closest(px, palette);
            palette.get(code).map_or(px, |f| f.color)
        })
    })
}

/// Like [`paint_to_nearest`], searching only a custom palette built with
/// [`Palette::subset`].
///
/// Matching uses the custom colors; each pixel is painted with the thread
/// color that `palette` holds for the matched code.
pub fn paint_to_custom(image: &Image, palette: &Palette, custom: &Palette) -> Image {
    let mut nearest: HashMap<Rgb, Rgb> = HashMap::new();
    image.map_pixels(|px| {
        *nearest.entry(px).or_insert_with(|| {
            let code = closest(px, custom);
            palette
                .color(code)
                .or_else(|_| custom.color(code))
                .unwrap_or(px)
        })
    })
}

/// Replace every pixel exactly equal to `old` with `new`.
pub fn swap(image: &Image, old: Rgb, new: Rgb) -> Image {
    image.map_pixels(|px| if px == old { new } else { px })
}

/// Replace every pixel exactly equal to `color` with white.
pub fn remove(image: &Image, color: Rgb) -> Image {
    swap(image, color, Rgb::WHITE)
}
