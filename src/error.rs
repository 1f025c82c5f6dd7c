use std::path::PathBuf;

use stitch_engine::{EngineError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StitchError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Unsupported PNG layout: {0}")]
    UnsupportedPng(String),

    #[error("Palette file line {line}: {reason}")]
    PaletteFile { line: usize, reason: String },

    #[error("Failed to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}
