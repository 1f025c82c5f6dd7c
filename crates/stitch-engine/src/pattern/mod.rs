//! Cross-stitch pattern generation and its text form.
//!
//! A [`Pattern`] is one legend symbol per source pixel plus a legend of the
//! floss codes actually used, ascending by code. The text form is:
//!
//! ```text
//! {W}x{H}
//! <H lines of W symbols>
//!
//! LEGEND:
//! {symbol} DMC-{code}
//! ...
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::color::Rgb;
use crate::image::Image;
use crate::palette::{closest, Palette};

/// One legend line: a symbol and the floss code it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    pub symbol: char,
    pub code: u32,
}

/// A symbol grid with its legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    width: usize,
    height: usize,
    symbols: Vec<char>,
    legend: Vec<LegendEntry>,
}

impl Pattern {
    /// Match every pixel of `image` against `palette`.
    pub fn generate(image: &Image, palette: &Palette) -> Pattern {
        let mut used: BTreeMap<u32, char> = BTreeMap::new();
        let mut cache: HashMap<Rgb, (u32, char)> = HashMap::new();

        let symbols = image
            .pixels()
            .iter()
            .map(|&px| {
                let (code, symbol) = *cache.entry(px).or_insert_with(|| {
                    let code = closest(px, palette);
                    let symbol = palette.get(code).map_or('?', |f| f.symbol);
                    (code, symbol)
                });
                used.insert(code, symbol);
                symbol
            })
            .collect();

        let legend = used
            .into_iter()
            .map(|(code, symbol)| LegendEntry { symbol, code })
            .collect();

        Pattern {
            width: image.width(),
            height: image.height(),
            symbols,
            legend,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Symbols, row-major.
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Used codes, ascending, each once.
    #[inline]
    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    /// Symbol at `(row, col)`, or `None` outside the grid.
    pub fn symbol_at(&self, row: usize, col: usize) -> Option<char> {
        if row < self.height && col < self.width {
            Some(self.symbols[row * self.width + col])
        } else {
            None
        }
    }

    /// The pattern's text form.
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}x{}", self.width, self.height)?;
        for row in self.symbols.chunks(self.width) {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        writeln!(f, "LEGEND:")?;
        for entry in &self.legend {
            writeln!(f, "{} DMC-{}", entry.symbol, entry.code)?;
        }
        Ok(())
    }
}

/// Generate a pattern; see [`Pattern::generate`].
pub fn generate(image: &Image, palette: &Palette) -> Pattern {
    Pattern::generate(image, palette)
}

/// Serialize a pattern to text; see [`Pattern::serialize`].
pub fn serialize(pattern: &Pattern) -> String {
    pattern.serialize()
}
