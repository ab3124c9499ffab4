//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and asset paths come from `[package.metadata.leptos]` instead.

use std::str::FromStr;

use tower_http::compression::CompressionLevel;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}")]
    InvalidValue { name: &'static str, value: String },
}

/// Response compression level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionPreset {
    Fastest,
    Default,
    Best,
}

impl FromStr for CompressionPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fastest" | "fast" => Ok(CompressionPreset::Fastest),
            "default" => Ok(CompressionPreset::Default),
            "best" => Ok(CompressionPreset::Best),
            _ => Err(ConfigError::InvalidValue {
                name: "COMPRESSION_LEVEL",
                value: s.to_string(),
            }),
        }
    }
}

impl From<CompressionPreset> for CompressionLevel {
    fn from(preset: CompressionPreset) -> Self {
        match preset {
            CompressionPreset::Fastest => CompressionLevel::Fastest,
            CompressionPreset::Default => CompressionLevel::Default,
            CompressionPreset::Best => CompressionLevel::Best,
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether responses are brotli/gzip compressed (COMPRESSION, default on)
    pub compression: bool,

    /// Compression level (COMPRESSION_LEVEL: fastest, default or best)
    pub compression_level: CompressionPreset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: true,
            compression_level: CompressionPreset::Best,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("COMPRESSION") {
            config.compression = parse_bool("COMPRESSION", &value)?;
        }
        if let Some(value) = lookup("COMPRESSION_LEVEL") {
            config.compression_level = value.parse()?;
        }

        Ok(config)
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        }),
    }
}
