//! Application services - Export use case implementations
//!
//! Each service depends only on the ports, never on a concrete host or on
//! the filesystem.

pub mod export_service;
pub mod property_extractor;
pub mod registry_walker;

pub use export_service::{
    ExportOnPostInit, ExportReport, ExportService, FailedSnapshot, EXPORTER_ID, EXPORTER_NAME,
    EXPORTER_VERSION,
};
pub use property_extractor::PropertyExtractor;
pub use registry_walker::{namespace_fragment, RegistryWalker};
