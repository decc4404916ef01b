//! Namespace keys and filesystem-safe name fragments

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Separator between the namespace and the path of a canonical name
pub const NAMESPACE_SEPARATOR: char = ':';

static NON_WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("static pattern is valid"));

/// The module-identifying prefix of a canonical entity name
///
/// `"modA:block1"` has the key `"modA"`. A name without a separator is its own
/// key. Keys compare by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespaceKey(String);

impl NamespaceKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn from_canonical_name(name: &str) -> Self {
        let key = name
            .split_once(NAMESPACE_SEPARATOR)
            .map_or(name, |(namespace, _)| namespace);
        Self(key.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamespaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replace every maximal run of non-word characters with one underscore
pub fn sanitize_fragment(raw: &str) -> String {
    NON_WORD_RUN.replace_all(raw, "_").into_owned()
}

/// Build the file name fragment for a namespace, with an optional version suffix
pub fn module_fragment(namespace: &NamespaceKey, version: Option<&str>) -> String {
    match version {
        Some(version) => sanitize_fragment(&format!("{}-{}", namespace.as_str(), version)),
        None => sanitize_fragment(namespace.as_str()),
    }
}
