//! Value objects - Immutable objects defined by their attributes

mod color;
mod export_config;
mod lineage;
mod namespace;
mod property_tree;
mod snapshot;

pub use color::{ColorSummary, HexColor, MAP_COLOR_VARIANTS};
pub use export_config::{
    ConfigError, ExportConfig, DEFAULT_BIOME_CAPACITY, DEFAULT_BLOCK_CAPACITY, DEFAULT_ENCODING,
    DEFAULT_FILE_PREFIX, DEFAULT_VOID_BLOCK_NAME,
};
pub use lineage::ClassLineage;
pub use namespace::{module_fragment, sanitize_fragment, NamespaceKey, NAMESPACE_SEPARATOR};
pub use property_tree::PropertyTree;
pub use snapshot::{Snapshot, SnapshotKind};
