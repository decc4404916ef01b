//! In-memory host adapter
//!
//! Implements [`HostPort`] over plain data, either built in code or loaded
//! from a JSON registry fixture. The demo binary and the test suites use it as
//! the host; a real host integration implements the same ports over its live
//! registries instead.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::application::ports::outbound::{
    BiomeHandle, BlockHandle, HostPort, HostVersionInfo, MaterialHandle, ModuleHandle,
    RegistryPort, SubVariant, VariantError,
};
use crate::domain::value_objects::NAMESPACE_SEPARATOR;

fn default_reserved_namespace() -> String {
    "minecraft".to_string()
}

fn default_block_root() -> String {
    "Block".to_string()
}

fn default_biome_root() -> String {
    "Biome".to_string()
}

/// Serialized form of a whole host
#[derive(Debug, Clone, Deserialize)]
pub struct HostFixture {
    pub runtime_version: String,
    #[serde(default)]
    pub mappings_version: Option<String>,
    #[serde(default)]
    pub loader_version: Option<String>,
    #[serde(default = "default_reserved_namespace")]
    pub reserved_namespace: String,
    #[serde(default = "default_block_root")]
    pub block_root_class: String,
    #[serde(default = "default_biome_root")]
    pub biome_root_class: String,
    /// Class name to parent class name
    #[serde(default)]
    pub classes: HashMap<String, String>,
    #[serde(default)]
    pub modules: Vec<ModuleFixture>,
    #[serde(default)]
    pub blocks: Vec<BlockFixture>,
    #[serde(default)]
    pub biomes: Vec<BiomeFixture>,
}

impl HostFixture {
    pub fn new(runtime_version: impl Into<String>) -> Self {
        Self {
            runtime_version: runtime_version.into(),
            mappings_version: None,
            loader_version: None,
            reserved_namespace: default_reserved_namespace(),
            block_root_class: default_block_root(),
            biome_root_class: default_biome_root(),
            classes: HashMap::new(),
            modules: Vec::new(),
            blocks: Vec::new(),
            biomes: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>, parent: impl Into<String>) -> Self {
        self.classes.insert(class.into(), parent.into());
        self
    }

    pub fn with_module(mut self, module: ModuleFixture) -> Self {
        self.modules.push(module);
        self
    }

    pub fn with_block(mut self, block: BlockFixture) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn with_biome(mut self, biome: BiomeFixture) -> Self {
        self.biomes.push(biome);
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModuleFixture {
    pub mod_id: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub display_version: Option<String>,
    #[serde(default)]
    pub source: String,
}

impl ModuleFixture {
    pub fn new(mod_id: impl Into<String>, version: impl Into<String>) -> Self {
        let mod_id = mod_id.into();
        Self {
            name: mod_id.clone(),
            source: format!("{}.jar", mod_id),
            mod_id,
            version: version.into(),
            display_version: None,
        }
    }
}

impl ModuleHandle for ModuleFixture {
    fn mod_id(&self) -> String {
        self.mod_id.clone()
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn version(&self) -> String {
        self.version.clone()
    }

    fn display_version(&self) -> String {
        self.display_version
            .clone()
            .unwrap_or_else(|| self.version.clone())
    }

    fn source_name(&self) -> String {
        self.source.clone()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaterialFixture {
    #[serde(default)]
    pub solid: bool,
    #[serde(default)]
    pub liquid: bool,
    #[serde(default)]
    pub opaque: bool,
    #[serde(default)]
    pub flammable: bool,
}

impl MaterialHandle for MaterialFixture {
    fn is_solid(&self) -> bool {
        self.solid
    }

    fn is_liquid(&self) -> bool {
        self.liquid
    }

    fn is_opaque(&self) -> bool {
        self.opaque
    }

    fn can_burn(&self) -> bool {
        self.flammable
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubVariantFixture {
    pub meta: u32,
    pub unlocalized_name: String,
    pub localized_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockFixture {
    pub id: u32,
    /// Canonical namespaced name, e.g. `minecraft:stone`
    pub name: String,
    #[serde(default)]
    pub unlocalized_name: Option<String>,
    #[serde(default)]
    pub localized_name: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub material: MaterialFixture,
    #[serde(default)]
    pub can_provide_power: Option<bool>,
    #[serde(default)]
    pub light_opacity: Option<i32>,
    #[serde(default)]
    pub light_value: Option<i32>,
    #[serde(default)]
    pub is_opaque_cube: Option<bool>,
    #[serde(default)]
    pub is_normal_cube: Option<bool>,
    #[serde(default)]
    pub is_translucent: Option<bool>,
    #[serde(default)]
    pub render_type: Option<i32>,
    /// One entry applies to every index; otherwise one entry per index
    #[serde(default)]
    pub map_colors: Vec<u32>,
    #[serde(default)]
    pub sub_variants: Option<Vec<SubVariantFixture>>,
    #[serde(default)]
    pub sub_variant_error: Option<String>,
}

impl BlockFixture {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            unlocalized_name: None,
            localized_name: None,
            class: None,
            material: MaterialFixture::default(),
            can_provide_power: None,
            light_opacity: None,
            light_value: None,
            is_opaque_cube: None,
            is_normal_cube: None,
            is_translucent: None,
            render_type: None,
            map_colors: Vec::new(),
            sub_variants: None,
            sub_variant_error: None,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_map_colors(mut self, colors: Vec<u32>) -> Self {
        self.map_colors = colors;
        self
    }

    pub fn with_sub_variants(mut self, variants: Vec<SubVariantFixture>) -> Self {
        self.sub_variants = Some(variants);
        self
    }

    pub fn with_sub_variant_error(mut self, message: impl Into<String>) -> Self {
        self.sub_variant_error = Some(message.into());
        self
    }

    fn path(&self) -> &str {
        self.name
            .split_once(NAMESPACE_SEPARATOR)
            .map_or(self.name.as_str(), |(_, path)| path)
    }
}

impl BlockHandle for BlockFixture {
    fn unlocalized_name(&self) -> String {
        self.unlocalized_name
            .clone()
            .unwrap_or_else(|| format!("tile.{}", self.path()))
    }

    fn localized_name(&self) -> String {
        self.localized_name
            .clone()
            .unwrap_or_else(|| self.path().to_string())
    }

    fn class_name(&self) -> String {
        self.class.clone().unwrap_or_else(default_block_root)
    }

    fn material(&self) -> &dyn MaterialHandle {
        &self.material
    }

    fn can_provide_power(&self) -> Option<bool> {
        self.can_provide_power
    }

    fn light_opacity(&self) -> Option<i32> {
        self.light_opacity
    }

    fn light_value(&self) -> Option<i32> {
        self.light_value
    }

    fn is_opaque_cube(&self) -> Option<bool> {
        self.is_opaque_cube
    }

    fn is_normal_cube(&self) -> Option<bool> {
        self.is_normal_cube
    }

    fn is_translucent(&self) -> Option<bool> {
        self.is_translucent
    }

    fn render_type(&self) -> Option<i32> {
        self.render_type
    }

    fn map_color(&self, index: usize) -> Option<u32> {
        match self.map_colors.as_slice() {
            [single] => Some(*single),
            colors => colors.get(index).copied(),
        }
    }

    fn sub_variants(&self) -> Option<Result<Vec<SubVariant>, VariantError>> {
        if let Some(message) = &self.sub_variant_error {
            return Some(Err(VariantError(message.clone())));
        }
        self.sub_variants.as_ref().map(|variants| {
            Ok(variants
                .iter()
                .map(|v| SubVariant {
                    meta: v.meta,
                    unlocalized_name: v.unlocalized_name.clone(),
                    localized_name: v.localized_name.clone(),
                })
                .collect())
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BiomeFixture {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub color: Option<u32>,
    #[serde(default)]
    pub water_color: Option<u32>,
    #[serde(default)]
    pub enable_snow: Option<bool>,
    #[serde(default)]
    pub spawning_chance: Option<f64>,
    #[serde(default)]
    pub temperature_category: Option<String>,
}

impl BiomeFixture {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            class: None,
            tags: None,
            color: None,
            water_color: None,
            enable_snow: None,
            spawning_chance: None,
            temperature_category: None,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = Some(tags.iter().map(|t| t.to_string()).collect());
        self
    }
}

impl BiomeHandle for BiomeFixture {
    fn biome_id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn class_name(&self) -> String {
        self.class.clone().unwrap_or_else(default_biome_root)
    }

    fn color(&self) -> Option<u32> {
        self.color
    }

    fn water_color_multiplier(&self) -> Option<u32> {
        self.water_color
    }

    fn enable_snow(&self) -> Option<bool> {
        self.enable_snow
    }

    fn spawning_chance(&self) -> Option<f64> {
        self.spawning_chance
    }

    fn temperature_category(&self) -> Option<String> {
        self.temperature_category.clone()
    }
}

/// Sparse id-indexed registry
///
/// Entry addresses are indexed once at construction so handle lookups don't
/// scan the registry. The entries are never mutated afterwards, so the
/// addresses stay valid for the registry's lifetime.
#[derive(Debug)]
pub struct FixtureRegistry<T> {
    entries: BTreeMap<u32, T>,
    ids_by_address: HashMap<usize, u32>,
}

impl<T> FixtureRegistry<T> {
    fn new(entries: impl IntoIterator<Item = (u32, T)>) -> Self {
        let entries: BTreeMap<u32, T> = entries.into_iter().collect();
        let ids_by_address = entries
            .iter()
            .map(|(id, entry)| (address_of(entry), *id))
            .collect();
        Self {
            entries,
            ids_by_address,
        }
    }

    /// Find the stored entry a borrowed handle points at
    fn entry_for<H: ?Sized>(&self, handle: &H) -> Option<&T> {
        self.ids_by_address
            .get(&address_of(handle))
            .and_then(|id| self.entries.get(id))
    }
}

impl<T: Clone> Clone for FixtureRegistry<T> {
    fn clone(&self) -> Self {
        Self::new(self.entries.iter().map(|(id, entry)| (*id, entry.clone())))
    }
}

fn address_of<H: ?Sized>(value: &H) -> usize {
    value as *const H as *const () as usize
}

impl RegistryPort for FixtureRegistry<BlockFixture> {
    type Handle = dyn BlockHandle;

    fn get_by_id(&self, id: u32) -> Option<&Self::Handle> {
        self.entries.get(&id).map(|block| block as &dyn BlockHandle)
    }

    fn canonical_name(&self, handle: &Self::Handle) -> String {
        self.entry_for(handle)
            .map(|block| block.name.clone())
            .unwrap_or_else(|| handle.unlocalized_name())
    }
}

impl RegistryPort for FixtureRegistry<BiomeFixture> {
    type Handle = dyn BiomeHandle;

    fn get_by_id(&self, id: u32) -> Option<&Self::Handle> {
        self.entries.get(&id).map(|biome| biome as &dyn BiomeHandle)
    }

    fn canonical_name(&self, handle: &Self::Handle) -> String {
        handle.name()
    }
}

/// A host backed entirely by fixture data
#[derive(Debug, Clone)]
pub struct FixtureHost {
    version: HostVersionInfo,
    reserved_namespace: String,
    block_root_class: String,
    biome_root_class: String,
    classes: HashMap<String, String>,
    modules: Vec<ModuleFixture>,
    biome_tags: HashMap<u32, Vec<String>>,
    blocks: FixtureRegistry<BlockFixture>,
    biomes: FixtureRegistry<BiomeFixture>,
}

impl FixtureHost {
    /// Load a host from a JSON fixture file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse fixture {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let fixture: HostFixture = serde_json::from_str(content)?;
        Ok(Self::from_fixture(fixture))
    }

    pub fn from_fixture(fixture: HostFixture) -> Self {
        let biome_tags = fixture
            .biomes
            .iter()
            .filter_map(|b| b.tags.clone().map(|tags| (b.id, tags)))
            .collect();

        Self {
            version: HostVersionInfo {
                runtime_version: fixture.runtime_version,
                mappings_version: fixture.mappings_version,
                loader_version: fixture.loader_version,
            },
            reserved_namespace: fixture.reserved_namespace,
            block_root_class: fixture.block_root_class,
            biome_root_class: fixture.biome_root_class,
            classes: fixture.classes,
            modules: fixture.modules,
            biome_tags,
            blocks: FixtureRegistry::new(fixture.blocks.into_iter().map(|b| (b.id, b))),
            biomes: FixtureRegistry::new(fixture.biomes.into_iter().map(|b| (b.id, b))),
        }
    }
}

impl HostPort for FixtureHost {
    fn version_info(&self) -> HostVersionInfo {
        self.version.clone()
    }

    fn reserved_namespace(&self) -> &str {
        &self.reserved_namespace
    }

    fn active_modules(&self) -> Vec<&dyn ModuleHandle> {
        self.modules
            .iter()
            .map(|m| m as &dyn ModuleHandle)
            .collect()
    }

    fn blocks(&self) -> &dyn RegistryPort<Handle = dyn BlockHandle> {
        &self.blocks
    }

    fn biomes(&self) -> &dyn RegistryPort<Handle = dyn BiomeHandle> {
        &self.biomes
    }

    fn biome_tags(&self, biome: &dyn BiomeHandle) -> Option<Vec<String>> {
        self.biome_tags.get(&biome.biome_id()).cloned()
    }

    fn superclass(&self, class_name: &str) -> Option<String> {
        self.classes.get(class_name).cloned()
    }

    fn block_root_class(&self) -> &str {
        &self.block_root_class
    }

    fn biome_root_class(&self) -> &str {
        &self.biome_root_class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "runtime_version": "1.7.10",
        "loader_version": "10.13.4",
        "classes": { "BlockStone": "Block" },
        "modules": [
            { "mod_id": "examplemod", "name": "Example Mod", "version": "2.0", "source": "example.jar" }
        ],
        "blocks": [
            { "id": 1, "name": "minecraft:stone", "class": "BlockStone", "map_colors": [7368816] }
        ],
        "biomes": [
            { "id": 0, "name": "Ocean", "tags": ["WATER"] }
        ]
    }"#;

    #[test]
    fn test_load_from_json() {
        let host = FixtureHost::from_json(FIXTURE).expect("fixture should parse");

        assert_eq!(host.version_info().runtime_version, "1.7.10");
        assert_eq!(host.version_info().mappings_version, None);
        assert_eq!(host.reserved_namespace(), "minecraft");
        assert_eq!(host.active_modules().len(), 1);
        assert_eq!(host.active_modules()[0].display_version(), "2.0");
        assert_eq!(host.superclass("BlockStone").as_deref(), Some("Block"));
    }

    #[test]
    fn test_registry_lookup_and_names() {
        let host = FixtureHost::from_json(FIXTURE).expect("fixture should parse");

        assert!(host.blocks().get_by_id(0).is_none());
        let stone = host.blocks().get_by_id(1).expect("stone should exist");
        assert_eq!(host.blocks().canonical_name(stone), "minecraft:stone");
        assert_eq!(stone.unlocalized_name(), "tile.stone");
        assert_eq!(stone.map_color(15), Some(7368816));

        let ocean = host.biomes().get_by_id(0).expect("ocean should exist");
        assert_eq!(host.biome_tags(ocean), Some(vec!["WATER".to_string()]));
    }

    #[test]
    fn test_cloned_host_resolves_its_own_handles() {
        let original = FixtureHost::from_json(FIXTURE).expect("fixture should parse");
        let host = original.clone();
        drop(original);

        let stone = host.blocks().get_by_id(1).expect("stone should exist");
        assert_eq!(host.blocks().canonical_name(stone), "minecraft:stone");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(FixtureHost::from_json("{ \"blocks\": [] }").is_err());
    }

    #[test]
    fn test_sample_fixture_loads() {
        let host = FixtureHost::from_json(include_str!("../../fixtures/sample_host.json"))
            .expect("sample fixture should parse");

        assert_eq!(host.active_modules().len(), 3);
        assert_eq!(host.block_root_class(), "net.minecraft.block.Block");
        let log = host.blocks().get_by_id(17).expect("log");
        assert_eq!(log.sub_variants().map(|r| r.map(|v| v.len())), Some(Ok(4)));
        let chest = host.blocks().get_by_id(1024).expect("iron chest");
        assert!(matches!(chest.sub_variants(), Some(Err(_))));
    }
}
