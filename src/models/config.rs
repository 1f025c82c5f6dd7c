use crate::error::StitchError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "STITCHWORK_CONFIG";

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "stitchwork.yaml";

pub const DEFAULT_LOG_FILTER: &str = "stitchwork=info,stitch_engine=info";

/// Application configuration loaded from stitchwork.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Floss palette CSV
    #[serde(default = "default_palette")]
    pub palette: PathBuf,

    /// Fixed RNG seed for reproducible mosaics
    #[serde(default)]
    pub mosaic_seed: Option<u64>,

    /// Tracing filter used when RUST_LOG is unset
    #[serde(default)]
    pub log_filter: Option<String>,
}

fn default_palette() -> PathBuf {
    PathBuf::from("dmc-floss.csv")
}

impl AppConfig {
    /// Resolve the config path: explicit argument, then `STITCHWORK_CONFIG`.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    /// Read configuration without falling back.
    ///
    /// With no path, `stitchwork.yaml` in the working directory is used if
    /// it exists, otherwise the defaults.
    pub fn read(path: Option<&Path>) -> Result<Self, StitchError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|source| StitchError::File {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            palette = %config.palette.display(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any error.
    pub fn load(path: Option<&Path>) -> Self {
        Self::read(path).unwrap_or_else(|e| {
            tracing::warn!(%e, "Failed to load config, using defaults");
            Self::default()
        })
    }

    /// Parse a YAML document. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Filter directive for the tracing subscriber.
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            mosaic_seed: None,
            log_filter: None,
        }
    }
}
