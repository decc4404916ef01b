//! Registry walking - bounded id scans and namespace partitioning

use crate::application::ports::outbound::{HostPort, RegistryPort};
use crate::domain::value_objects::{module_fragment, NamespaceKey};

/// Scans a registry's id space from 0 up to a fixed capacity
///
/// The bound is the registry's capacity, not a value read from the host, so
/// entries registered at or past it are never visited.
#[derive(Debug, Clone)]
pub struct RegistryWalker {
    bound: u32,
    sentinel: Option<String>,
}

impl RegistryWalker {
    pub fn new(bound: u32) -> Self {
        Self {
            bound,
            sentinel: None,
        }
    }

    /// Skip the entry registered under this canonical name
    pub fn with_sentinel(mut self, canonical_name: impl Into<String>) -> Self {
        self.sentinel = Some(canonical_name.into());
        self
    }

    /// Present, non-sentinel entries in ascending id order
    pub fn walk<'r, H: ?Sized + 'r>(
        &self,
        registry: &'r dyn RegistryPort<Handle = H>,
    ) -> Vec<(u32, &'r H)> {
        (0..self.bound)
            .filter_map(|id| registry.get_by_id(id).map(|handle| (id, handle)))
            .filter(|(_, handle)| !self.is_sentinel(registry, *handle))
            .collect()
    }

    /// Distinct namespace keys in order of first appearance
    pub fn namespaces<'r, H: ?Sized + 'r>(
        &self,
        registry: &'r dyn RegistryPort<Handle = H>,
    ) -> Vec<NamespaceKey> {
        let mut keys: Vec<NamespaceKey> = Vec::new();
        for (_, handle) in self.walk(registry) {
            let key = NamespaceKey::from_canonical_name(&registry.canonical_name(handle));
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    /// Entries whose canonical name falls under `namespace`
    pub fn walk_namespace<'r, H: ?Sized + 'r>(
        &self,
        registry: &'r dyn RegistryPort<Handle = H>,
        namespace: &NamespaceKey,
    ) -> Vec<(u32, &'r H)> {
        self.walk(registry)
            .into_iter()
            .filter(|(_, handle)| {
                NamespaceKey::from_canonical_name(&registry.canonical_name(*handle)) == *namespace
            })
            .collect()
    }

    fn is_sentinel<H: ?Sized>(&self, registry: &dyn RegistryPort<Handle = H>, handle: &H) -> bool {
        self.sentinel
            .as_deref()
            .is_some_and(|sentinel| registry.canonical_name(handle) == sentinel)
    }
}

/// File name fragment for a namespace's block snapshot
///
/// The host's own namespace is suffixed with the host runtime version, any
/// other namespace with the version of the loaded module whose id matches it
/// case-insensitively. Unmatched namespaces get no suffix.
pub fn namespace_fragment(host: &dyn HostPort, namespace: &NamespaceKey) -> String {
    let version = if namespace.as_str() == host.reserved_namespace() {
        Some(host.version_info().runtime_version)
    } else {
        host.active_modules()
            .into_iter()
            .find(|module| module.mod_id().eq_ignore_ascii_case(namespace.as_str()))
            .map(|module| module.version())
    };
    module_fragment(namespace, version.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::BlockHandle;
    use crate::infrastructure::fixture_host::{
        BlockFixture, FixtureHost, HostFixture, ModuleFixture,
    };

    fn ids<H: ?Sized>(entries: &[(u32, &H)]) -> Vec<u32> {
        entries.iter().map(|(id, _)| *id).collect()
    }

    fn names(
        host: &FixtureHost,
        entries: &[(u32, &(dyn BlockHandle + 'static))],
    ) -> Vec<String> {
        entries
            .iter()
            .map(|(_, handle)| host.blocks().canonical_name(*handle))
            .collect()
    }

    #[test]
    fn test_walk_skips_empty_slots_and_sentinel() {
        let host = FixtureHost::from_fixture(
            HostFixture::new("1.7.10")
                .with_block(BlockFixture::new(0, "minecraft:air"))
                .with_block(BlockFixture::new(3, "minecraft:three"))
                .with_block(BlockFixture::new(5, "minecraft:five")),
        );
        let walker = RegistryWalker::new(8).with_sentinel("minecraft:air");

        let entries = walker.walk(host.blocks());

        assert_eq!(ids(&entries), vec![3, 5]);
        assert!(std::ptr::addr_eq(
            entries[0].1,
            host.blocks().get_by_id(3).expect("id 3")
        ));
        assert_eq!(names(&host, &entries), vec!["minecraft:three", "minecraft:five"]);
    }

    #[test]
    fn test_bound_is_exclusive() {
        let host = FixtureHost::from_fixture(
            HostFixture::new("1.7.10")
                .with_block(BlockFixture::new(7, "minecraft:last"))
                .with_block(BlockFixture::new(8, "minecraft:beyond")),
        );

        let entries = RegistryWalker::new(8).walk(host.blocks());
        assert_eq!(ids(&entries), vec![7]);
    }

    #[test]
    fn test_only_sentinel_yields_nothing() {
        let host = FixtureHost::from_fixture(
            HostFixture::new("1.7.10").with_block(BlockFixture::new(0, "minecraft:air")),
        );
        let walker = RegistryWalker::new(4096).with_sentinel("minecraft:air");

        assert!(walker.walk(host.blocks()).is_empty());
        assert!(walker.namespaces(host.blocks()).is_empty());
    }

    #[test]
    fn test_namespace_grouping() {
        let host = FixtureHost::from_fixture(
            HostFixture::new("1.7.10")
                .with_block(BlockFixture::new(1, "modA:block1"))
                .with_block(BlockFixture::new(2, "modB:block3"))
                .with_block(BlockFixture::new(3, "modA:block2")),
        );
        let walker = RegistryWalker::new(16);

        let namespaces = walker.namespaces(host.blocks());
        assert_eq!(
            namespaces,
            vec![NamespaceKey::new("modA"), NamespaceKey::new("modB")]
        );

        let group_a = walker.walk_namespace(host.blocks(), &namespaces[0]);
        assert_eq!(names(&host, &group_a), vec!["modA:block1", "modA:block2"]);

        let group_b = walker.walk_namespace(host.blocks(), &namespaces[1]);
        assert_eq!(names(&host, &group_b), vec!["modB:block3"]);
    }

    #[test]
    fn test_namespace_match_is_exact() {
        let host = FixtureHost::from_fixture(
            HostFixture::new("1.7.10")
                .with_block(BlockFixture::new(1, "ModA:x"))
                .with_block(BlockFixture::new(2, "moda:y")),
        );

        assert_eq!(RegistryWalker::new(4).namespaces(host.blocks()).len(), 2);
    }

    #[test]
    fn test_namespace_fragment_versions() {
        let host = FixtureHost::from_fixture(
            HostFixture::new("1.7.10")
                .with_module(ModuleFixture::new("IronChest", "6.0.62"))
                .with_module(ModuleFixture::new("other", "1.0")),
        );

        assert_eq!(
            namespace_fragment(&host, &NamespaceKey::new("minecraft")),
            "minecraft_1_7_10"
        );
        assert_eq!(
            namespace_fragment(&host, &NamespaceKey::new("ironchest")),
            "ironchest_6_0_62"
        );
        assert_eq!(namespace_fragment(&host, &NamespaceKey::new("my mod!")), "my_mod_");
    }
}
