//! Domain layer - Core export values with no dependency on any host
//!
//! This layer contains:
//! - Property trees: the ordered intermediate form of every exported entity
//! - Colors: hex rendering and per-block color summaries
//! - Namespaces: module keys and filesystem-safe name fragments
//! - Class lineages: flattened type hierarchies

pub mod value_objects;
