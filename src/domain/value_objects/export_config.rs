//! Export configuration value object

use std::path::PathBuf;

/// Registry capacity of the block id space
pub const DEFAULT_BLOCK_CAPACITY: u32 = 4096;
/// Registry capacity of the biome id space
pub const DEFAULT_BIOME_CAPACITY: u32 = 256;
/// Canonical name of the empty block that fills unused world cells
pub const DEFAULT_VOID_BLOCK_NAME: &str = "minecraft:air";
pub const DEFAULT_FILE_PREFIX: &str = "metadump";
pub const DEFAULT_ENCODING: &str = "UTF-8";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
    #[error("Unsupported output encoding: {0}")]
    UnsupportedEncoding(String),
}

/// Settings for one export run
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Directory every snapshot file is written into
    pub output_dir: PathBuf,
    /// Exclusive upper bound of block ids; ids at or past it are never visited
    pub block_capacity: u32,
    /// Exclusive upper bound of biome ids
    pub biome_capacity: u32,
    /// Block skipped by the walker
    pub void_block_name: String,
    /// First component of every output file name
    pub file_prefix: String,
    /// Output text encoding, only UTF-8 is supported
    pub encoding: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            block_capacity: DEFAULT_BLOCK_CAPACITY,
            biome_capacity: DEFAULT_BIOME_CAPACITY,
            void_block_name: DEFAULT_VOID_BLOCK_NAME.to_string(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl ExportConfig {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_block_capacity(mut self, capacity: u32) -> Self {
        self.block_capacity = capacity;
        self
    }

    pub fn with_biome_capacity(mut self, capacity: u32) -> Self {
        self.biome_capacity = capacity;
        self
    }

    pub fn with_void_block_name(mut self, name: impl Into<String>) -> Self {
        self.void_block_name = name.into();
        self
    }

    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let encoding = self.encoding.to_ascii_lowercase();
        if encoding != "utf-8" && encoding != "utf8" {
            return Err(ConfigError::UnsupportedEncoding(self.encoding.clone()));
        }
        if self.file_prefix.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "file_prefix".to_string(),
                value: String::new(),
            });
        }
        Ok(())
    }
}
