//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Export: filesystem snapshot writer
//! - Fixture host: in-memory host built from JSON registry fixtures
//! - Config: standalone binary configuration

pub mod config;
pub mod export;
pub mod fixture_host;
