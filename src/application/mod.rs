//! Application layer - Export use cases and the ports they depend on
//!
//! This layer contains:
//! - Ports: the host query interface, the snapshot sink and lifecycle hooks
//! - Services: property extraction, registry walking and export orchestration

pub mod ports;
pub mod services;
