//! Flattened class lineage

use std::collections::HashSet;

/// Class names ordered from the concrete type toward the root, root excluded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassLineage(Vec<String>);

impl ClassLineage {
    /// Walk name/parent-name pairs from `concrete` until `root` or the end of the chain
    ///
    /// A name seen twice ends the walk, so a malformed class table cannot loop.
    pub fn flatten<F>(concrete: &str, root: &str, parent_of: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut names = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(concrete.to_string());

        while let Some(name) = current {
            if name == root || !seen.insert(name.clone()) {
                break;
            }
            current = parent_of(&name);
            names.push(name);
        }

        Self(names)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn into_names(self) -> Vec<String> {
        self.0
    }
}
