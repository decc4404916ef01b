//! Named snapshots and their output file names

use std::fmt;
use std::path::PathBuf;

use super::{sanitize_fragment, ExportConfig, PropertyTree};

/// Which logical document a snapshot holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotKind {
    /// Host versions and the active module list
    Version,
    /// Blocks of one module namespace, keyed by its sanitized name fragment
    Blocks { fragment: String },
    Biomes,
}

impl SnapshotKind {
    /// File name built from the configured prefix and the host runtime version
    pub fn file_name(&self, prefix: &str, runtime_version: &str) -> String {
        let runtime = sanitize_fragment(runtime_version);
        match self {
            SnapshotKind::Version => format!("{}.{}.version.json", prefix, runtime),
            SnapshotKind::Blocks { fragment } => {
                format!("{}.{}.blocks.{}.json", prefix, runtime, fragment)
            }
            SnapshotKind::Biomes => format!("{}.{}.biomes.json", prefix, runtime),
        }
    }
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotKind::Version => f.write_str("version"),
            SnapshotKind::Blocks { fragment } => write!(f, "blocks/{}", fragment),
            SnapshotKind::Biomes => f.write_str("biomes"),
        }
    }
}

/// One document ready to be written
///
/// Built fresh for each export run and consumed by the writer.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub kind: SnapshotKind,
    pub path: PathBuf,
    pub tree: PropertyTree,
}

impl Snapshot {
    pub fn new(
        kind: SnapshotKind,
        tree: PropertyTree,
        config: &ExportConfig,
        runtime_version: &str,
    ) -> Self {
        let path = config
            .output_dir
            .join(kind.file_name(&config.file_prefix, runtime_version));
        Self { kind, path, tree }
    }
}
