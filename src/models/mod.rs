mod config;

pub use config::{AppConfig, CONFIG_ENV, DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILTER};
