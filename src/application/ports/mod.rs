//! Ports - Interfaces between the exporter and its host
//!
//! - Inbound: lifecycle notifications the host delivers to the exporter
//! - Outbound: registry and entity queries the exporter makes against the host

pub mod inbound;
pub mod outbound;
