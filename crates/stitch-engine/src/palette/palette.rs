//! Code-ordered floss palette with a derived symbol index.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use super::error::PaletteError;
use crate::color::{redmean_distance, Rgb};

/// One floss entry: its code, thread color and legend symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Floss {
    pub code: u32,
    pub color: Rgb,
    pub symbol: char,
}

impl Floss {
    pub fn new(code: u32, color: Rgb, symbol: char) -> Self {
        Self {
            code,
            color,
            symbol,
        }
    }
}

/// A floss palette.
///
/// Entries are kept in ascending code order regardless of the order they were
/// supplied in; nearest-color ties resolve to the smallest code because of
/// that ordering. Codes are unique. Several codes may share a legend symbol.
///
/// # Example
///
/// ```
/// use stitch_engine::{Floss, Palette, Rgb};
///
/// let palette = Palette::new([
///     Floss::new(1, Rgb::new(255, 0, 0), 'A'),
///     Floss::new(2, Rgb::new(0, 255, 0), 'B'),
/// ])
/// .unwrap();
///
/// let (code, distance) = palette.find_nearest(Rgb::new(250, 10, 0));
/// assert_eq!(code, 1);
/// assert!(distance > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: BTreeMap<u32, Floss>,
    // Derived: legend symbol -> codes carrying it, ascending
    by_symbol: BTreeMap<char, Vec<u32>>,
}

impl Palette {
    /// Build a palette from floss entries.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if no entries are given
    /// - [`PaletteError::DuplicateCode`] if a code appears twice
    pub fn new(entries: impl IntoIterator<Item = Floss>) -> Result<Self, PaletteError> {
        let mut map = BTreeMap::new();
        for floss in entries {
            match map.entry(floss.code) {
                Entry::Occupied(_) => {
                    return Err(PaletteError::DuplicateCode { code: floss.code })
                }
                Entry::Vacant(slot) => {
                    slot.insert(floss);
                }
            }
        }
        if map.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut by_symbol: BTreeMap<char, Vec<u32>> = BTreeMap::new();
        for floss in map.values() {
            by_symbol.entry(floss.symbol).or_default().push(floss.code);
        }

        Ok(Self {
            entries: map,
            by_symbol,
        })
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = &Floss> {
        self.entries.values()
    }

    /// Entry for `code`, if present.
    #[inline]
    pub fn get(&self, code: u32) -> Option<&Floss> {
        self.entries.get(&code)
    }

    /// Thread color for `code`.
    pub fn color(&self, code: u32) -> Result<Rgb, PaletteError> {
        self.get(code)
            .map(|f| f.color)
            .ok_or(PaletteError::UnknownCode(code))
    }

    /// Legend symbol for `code`.
    pub fn symbol(&self, code: u32) -> Result<char, PaletteError> {
        self.get(code)
            .map(|f| f.symbol)
            .ok_or(PaletteError::UnknownCode(code))
    }

    /// Codes carrying `symbol`, ascending. Empty if none do.
    pub fn codes_for_symbol(&self, symbol: char) -> &[u32] {
        self.by_symbol.get(&symbol).map_or(&[][..], Vec::as_slice)
    }

    /// Legend symbol -> color. When several codes share a symbol the
    /// smallest code's color is reported.
    pub fn symbol_colors(&self) -> BTreeMap<char, Rgb> {
        self.by_symbol
            .iter()
            .filter_map(|(&symbol, codes)| {
                let code = codes.first()?;
                Some((symbol, self.entries[code].color))
            })
            .collect()
    }

    /// Build a custom palette from a caller-chosen `symbol -> color` map.
    ///
    /// Each symbol is translated to every code that carries it in this
    /// palette; the caller's color is what the subset matches against.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::UnknownSymbol`] for a symbol this palette lacks
    /// - [`PaletteError::EmptyPalette`] if `custom` is empty
    pub fn subset(&self, custom: &BTreeMap<char, Rgb>) -> Result<Palette, PaletteError> {
        let mut entries = Vec::new();
        for (&symbol, &color) in custom {
            let codes = self.codes_for_symbol(symbol);
            if codes.is_empty() {
                return Err(PaletteError::UnknownSymbol(symbol));
            }
            entries.extend(codes.iter().map(|&code| Floss::new(code, color, symbol)));
        }
        Palette::new(entries)
    }

    /// Build a custom palette from legend symbols, keeping this palette's
    /// colors.
    pub fn subset_by_symbols(
        &self,
        symbols: impl IntoIterator<Item = char>,
    ) -> Result<Palette, PaletteError> {
        let symbol_colors = self.symbol_colors();
        let mut custom = BTreeMap::new();
        for symbol in symbols {
            let color = symbol_colors
                .get(&symbol)
                .ok_or(PaletteError::UnknownSymbol(symbol))?;
            custom.insert(symbol, *color);
        }
        self.subset(&custom)
    }

    /// Nearest entry to `color` by [`redmean_distance`].
    ///
    /// Returns `(code, distance)`. Entries are scanned in ascending code
    /// order and only a strictly smaller distance replaces the current best,
    /// so ties go to the smallest code.
    pub fn find_nearest(&self, color: Rgb) -> (u32, f64) {
        let mut best_code = 0;
        let mut best_dist = f64::MAX;

        for floss in self.entries.values() {
            let dist = redmean_distance(color, floss.color);
            if dist < best_dist {
                best_dist = dist;
                best_code = floss.code;
            }
        }

        (best_code, best_dist)
    }
}
