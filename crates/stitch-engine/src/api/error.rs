//! Unified error type for the stitch-engine public API.

use thiserror::Error;

use crate::palette::PaletteError;

/// Error returned by engine operations.
///
/// Every operation validates before it changes anything, so receiving one
/// of these means the engine state is exactly what it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A count, coordinate, color or other argument is out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An operation needs an image (or pattern) that does not exist yet
    #[error("{0} not loaded yet")]
    NotLoaded(&'static str),
    /// A legend symbol or floss code is absent from the palette
    #[error("lookup failed: {0}")]
    Lookup(String),
    /// The palette itself is unusable
    #[error("palette error: {0}")]
    Palette(PaletteError),
}

impl From<PaletteError> for EngineError {
    fn from(err: PaletteError) -> Self {
        match err {
            PaletteError::UnknownSymbol(_) | PaletteError::UnknownCode(_) => {
                EngineError::Lookup(err.to_string())
            }
            other => EngineError::Palette(other),
        }
    }
}
