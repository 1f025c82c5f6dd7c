//! Floss palette CSV loading.
//!
//! Rows look like `code,name,R,G,B,symbol[,...]` where `symbol` is the
//! decimal character code of the legend glyph. The name and any trailing
//! fields are ignored.

use std::path::Path;

use stitch_engine::{Floss, Palette, Rgb};

use crate::error::StitchError;

const MIN_FIELDS: usize = 6;

/// Read and parse a palette file.
pub fn load_palette(path: &Path) -> Result<Palette, StitchError> {
    let text = std::fs::read_to_string(path).map_err(|source| StitchError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let palette = parse_palette(&text)?;
    tracing::info!(path = %path.display(), entries = palette.len(), "Loaded floss palette");
    Ok(palette)
}

/// Parse palette CSV text.
///
/// Blank lines and lines starting with `#` are skipped, as is a first row
/// whose code field is not an integer (a header).
pub fn parse_palette(text: &str) -> Result<Palette, StitchError> {
    let mut entries = Vec::new();
    let mut seen_row = false;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let first_row = !seen_row;
        seen_row = true;

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if first_row && fields[0].parse::<i64>().is_err() {
            tracing::debug!(line = index + 1, "Skipping palette header row");
            continue;
        }

        let floss = parse_row(&fields).map_err(|reason| StitchError::PaletteFile {
            line: index + 1,
            reason,
        })?;
        entries.push(floss);
    }

    Ok(Palette::new(entries)?)
}

fn parse_row(fields: &[&str]) -> Result<Floss, String> {
    if fields.len() < MIN_FIELDS {
        return Err(format!(
            "expected at least {} fields, got {}",
            MIN_FIELDS,
            fields.len()
        ));
    }

    let code: u32 = fields[0]
        .parse()
        .map_err(|_| format!("invalid floss code {:?}", fields[0]))?;
    let r = parse_channel(fields[2])?;
    let g = parse_channel(fields[3])?;
    let b = parse_channel(fields[4])?;
    let symbol = fields[5]
        .parse::<u32>()
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| format!("invalid symbol character code {:?}", fields[5]))?;

    Ok(Floss::new(code, Rgb::new(r, g, b), symbol))
}

fn parse_channel(field: &str) -> Result<u8, String> {
    let value: i64 = field
        .parse()
        .map_err(|_| format!("invalid color channel {:?}", field))?;
    u8::try_from(value).map_err(|_| format!("color channel {} outside 0..=255", value))
}
