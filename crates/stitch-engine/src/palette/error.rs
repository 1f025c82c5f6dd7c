//! Error types for palette construction and lookup.

use thiserror::Error;

/// Error type for palette validation and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// No entries provided
    #[error("palette cannot be empty")]
    EmptyPalette,
    /// Two entries share a floss code
    #[error("duplicate floss code {code}")]
    DuplicateCode {
        /// The repeated code
        code: u32,
    },
    /// A legend symbol that no palette entry carries
    #[error("no floss with legend symbol {0:?}")]
    UnknownSymbol(char),
    /// A floss code that is not in the palette
    #[error("no floss with code {0}")]
    UnknownCode(u32),
}
