//! Outbound ports - Interfaces that the application requires from the host and the filesystem

mod host_port;
mod snapshot_port;

pub use host_port::{
    BiomeHandle, BlockHandle, HostPort, HostVersionInfo, MaterialHandle, ModuleHandle,
    RegistryPort, SubVariant, VariantError,
};
pub use snapshot_port::{SnapshotError, SnapshotSinkPort};
