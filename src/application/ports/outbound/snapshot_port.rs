use std::path::{Path, PathBuf};

use crate::domain::value_objects::PropertyTree;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error writing {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Destination for finished snapshot documents
pub trait SnapshotSinkPort {
    /// Write one document to `path`, replacing anything already there
    fn write(&self, tree: &PropertyTree, path: &Path) -> Result<(), SnapshotError>;
}
