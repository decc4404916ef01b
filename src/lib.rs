//! MetaDump - structured snapshot exporter for game-engine registries
//!
//! At the host's post-initialization point the exporter walks the block and
//! biome registries and the loaded module list, flattens every entry into an
//! ordered property tree, and writes one indented JSON document per snapshot:
//! - version and active module list
//! - blocks, one document per module namespace
//! - biomes

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::ports::inbound::LifecycleListener;
pub use application::ports::outbound::HostPort;
pub use application::services::{ExportOnPostInit, ExportReport, ExportService};
pub use domain::value_objects::ExportConfig;
pub use infrastructure::export::SnapshotWriter;
