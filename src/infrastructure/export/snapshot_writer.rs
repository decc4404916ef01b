//! Writes property trees to indented JSON files

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::application::ports::outbound::{SnapshotError, SnapshotSinkPort};
use crate::domain::value_objects::PropertyTree;

const JSON_INDENT: &[u8] = b"  ";

/// Serializes snapshots as UTF-8 JSON with two-space indentation
///
/// Each write opens and truncates the target, writes the whole document and
/// closes the file before returning, on success and on failure alike.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotWriter;

impl SnapshotWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render a tree to the exact bytes `write` would produce
    pub fn render(&self, tree: &PropertyTree) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        serialize_to(&mut buf, tree)?;
        buf.push(b'\n');
        Ok(buf)
    }
}

fn serialize_to<W: Write>(out: W, tree: &PropertyTree) -> Result<(), serde_json::Error> {
    let mut serializer =
        serde_json::Serializer::with_formatter(out, PrettyFormatter::with_indent(JSON_INDENT));
    tree.serialize(&mut serializer)
}

impl SnapshotSinkPort for SnapshotWriter {
    fn write(&self, tree: &PropertyTree, path: &Path) -> Result<(), SnapshotError> {
        let io_err = |source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut out = BufWriter::new(file);
        serialize_to(&mut out, tree).map_err(|source| SnapshotError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        out.write_all(b"\n").map_err(io_err)?;
        out.flush().map_err(io_err)?;

        tracing::debug!("Wrote snapshot {}", path.display());
        Ok(())
    }
}
