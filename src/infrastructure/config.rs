//! Standalone binary configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::value_objects::ExportConfig;

/// Configuration of the demo host binary, loaded from environment
///
/// A host embedding the exporter builds an [`ExportConfig`] in code and never
/// goes through this.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON registry fixture the demo host is built from
    pub fixture_path: PathBuf,
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Export settings are not validated here; the export logs and records
    /// each snapshot an invalid setting prevents.
    pub fn from_env() -> Result<Self> {
        let defaults = ExportConfig::default();

        let export = ExportConfig {
            output_dir: env::var("METADUMP_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            block_capacity: env_parse("METADUMP_BLOCK_CAPACITY", defaults.block_capacity)?,
            biome_capacity: env_parse("METADUMP_BIOME_CAPACITY", defaults.biome_capacity)?,
            void_block_name: env::var("METADUMP_VOID_BLOCK").unwrap_or(defaults.void_block_name),
            file_prefix: env::var("METADUMP_FILE_PREFIX").unwrap_or(defaults.file_prefix),
            encoding: env::var("METADUMP_ENCODING").unwrap_or(defaults.encoding),
        };

        Ok(Self {
            fixture_path: env::var("METADUMP_FIXTURE")
                .map(PathBuf::from)
                .context("METADUMP_FIXTURE environment variable is required")?,
            export,
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(value) => value
            .parse()
            .ok()
            .with_context(|| format!("{} must be a number, got {:?}", key, value)),
        Err(_) => Ok(default),
    }
}
