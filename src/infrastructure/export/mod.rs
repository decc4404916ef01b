//! Snapshot export
//!
//! [`SnapshotWriter`] is the filesystem implementation of the snapshot sink:
//! it serializes property trees to indented UTF-8 JSON files.

mod snapshot_writer;

pub use snapshot_writer::SnapshotWriter;
