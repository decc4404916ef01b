//! Property extraction - turns entity handles into property trees
//!
//! Each extraction is a pure read of the handle and the handles it directly
//! references (material, color variants, class lineage). Accessors the host
//! does not provide are left out of the tree rather than written as null.

use crate::application::ports::outbound::{
    BiomeHandle, BlockHandle, HostPort, MaterialHandle, ModuleHandle, SubVariant,
};
use crate::domain::value_objects::{
    ClassLineage, ColorSummary, HexColor, PropertyTree, MAP_COLOR_VARIANTS,
};

/// Builds property trees for blocks, biomes and module descriptors
pub struct PropertyExtractor<'h> {
    host: &'h dyn HostPort,
}

impl<'h> PropertyExtractor<'h> {
    pub fn new(host: &'h dyn HostPort) -> Self {
        Self { host }
    }

    pub fn extract_block(
        &self,
        id: u32,
        canonical_name: &str,
        block: &dyn BlockHandle,
    ) -> PropertyTree {
        let mut tree = PropertyTree::new();
        tree.insert("Id", id)
            .insert("Name", canonical_name)
            .insert("UnlocalizedName", block.unlocalized_name())
            .insert("LocalizedName", block.localized_name())
            .insert_opt("CanProvidePower", block.can_provide_power())
            .insert_opt("LightOpacity", block.light_opacity())
            .insert_opt("LightValue", block.light_value())
            .insert_opt("IsOpaqueCube", block.is_opaque_cube())
            .insert_opt("IsNormalCube", block.is_normal_cube())
            .insert_opt("IsTranslucent", block.is_translucent())
            .insert_opt("RenderType", block.render_type())
            .insert_tree("Material", material_properties(block.material()));

        let root = self.host.block_root_class();
        let lineage =
            ClassLineage::flatten(&block.class_name(), root, |name| self.host.superclass(name));
        tree.insert("Class", lineage.into_names());

        match map_colors(block) {
            Some(ColorSummary::Uniform(color)) => {
                tree.insert("MapColor", color.to_string());
            }
            Some(ColorSummary::PerIndex(colors)) => {
                let colors: Vec<String> = colors.iter().map(HexColor::to_string).collect();
                tree.insert("MapColors", colors);
            }
            None => {}
        }

        match block.sub_variants() {
            None => {
                tree.insert("HasSubtypes", false);
            }
            Some(Ok(variants)) => {
                tree.insert("HasSubtypes", true)
                    .insert_trees("Subtypes", variants.iter().map(sub_variant_properties));
            }
            Some(Err(e)) => {
                tracing::warn!("Sub-variant discovery failed for {}: {}", canonical_name, e);
                tree.insert("HasSubtypes", true)
                    .insert("SubtypesError", e.to_string());
            }
        }

        tree
    }

    pub fn extract_biome(&self, biome: &dyn BiomeHandle) -> PropertyTree {
        let mut tree = PropertyTree::new();
        tree.insert("Id", biome.biome_id()).insert("Name", biome.name());

        if let Some(tags) = self.host.biome_tags(biome).filter(|tags| !tags.is_empty()) {
            tree.insert("Type", tags);
        }

        tree.insert_opt("Color", biome.color().map(|c| HexColor::new(c).to_string()))
            .insert_opt(
                "WaterColorMultiplier",
                biome
                    .water_color_multiplier()
                    .map(|c| HexColor::new(c).to_string()),
            )
            .insert_opt("EnableSnow", biome.enable_snow())
            .insert_float("SpawningChance", biome.spawning_chance())
            .insert_opt("TempCategory", biome.temperature_category());

        let root = self.host.biome_root_class();
        let lineage =
            ClassLineage::flatten(&biome.class_name(), root, |name| self.host.superclass(name));
        tree.insert("Class", lineage.into_names());

        tree
    }

    pub fn extract_module(&self, module: &dyn ModuleHandle) -> PropertyTree {
        let mut tree = PropertyTree::new();
        tree.insert("ModId", module.mod_id())
            .insert("Name", module.name())
            .insert("Version", module.version())
            .insert("DisplayVersion", module.display_version())
            .insert("Source", module.source_name());
        tree
    }
}

fn material_properties(material: &dyn MaterialHandle) -> PropertyTree {
    let mut tree = PropertyTree::new();
    tree.insert("IsSolid", material.is_solid())
        .insert("IsLiquid", material.is_liquid())
        .insert("IsOpaque", material.is_opaque())
        .insert("CanBurn", material.can_burn());
    tree
}

/// All indexed colors, or `None` if the host lacks any of them
fn map_colors(block: &dyn BlockHandle) -> Option<ColorSummary> {
    let colors = (0..MAP_COLOR_VARIANTS)
        .map(|index| block.map_color(index).map(HexColor::new))
        .collect::<Option<Vec<_>>>()?;
    ColorSummary::from_variants(colors)
}

fn sub_variant_properties(variant: &SubVariant) -> PropertyTree {
    let mut tree = PropertyTree::new();
    tree.insert("Meta", variant.meta)
        .insert("UnlocalizedName", variant.unlocalized_name.as_str())
        .insert("LocalizedName", variant.localized_name.as_str());
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixture_host::{
        BiomeFixture, BlockFixture, FixtureHost, HostFixture, MaterialFixture, ModuleFixture,
        SubVariantFixture,
    };
    use serde_json::{json, Value};

    fn host_with(fixture: HostFixture) -> FixtureHost {
        FixtureHost::from_fixture(fixture)
    }

    fn extract_first_block(host: &FixtureHost, id: u32) -> PropertyTree {
        let block = host.blocks().get_by_id(id).expect("block should exist");
        let name = host.blocks().canonical_name(block);
        PropertyExtractor::new(host).extract_block(id, &name, block)
    }

    #[test]
    fn test_block_properties_in_order() {
        let mut stone = BlockFixture::new(1, "minecraft:stone")
            .with_class("BlockStone")
            .with_map_colors(vec![0x707070]);
        stone.localized_name = Some("Stone".to_string());
        stone.can_provide_power = Some(false);
        stone.light_opacity = Some(255);
        stone.light_value = Some(0);
        stone.material = MaterialFixture {
            solid: true,
            liquid: false,
            opaque: true,
            flammable: false,
        };

        let host = host_with(
            HostFixture::new("1.7.10")
                .with_class("BlockStone", "Block")
                .with_block(stone),
        );
        let tree = extract_first_block(&host, 1);

        let keys: Vec<_> = tree.keys().collect();
        assert_eq!(
            keys,
            vec![
                "Id",
                "Name",
                "UnlocalizedName",
                "LocalizedName",
                "CanProvidePower",
                "LightOpacity",
                "LightValue",
                "Material",
                "Class",
                "MapColor",
                "HasSubtypes",
            ]
        );
        assert_eq!(tree.get("Name"), Some(&json!("minecraft:stone")));
        assert_eq!(tree.get("LocalizedName"), Some(&json!("Stone")));
        assert_eq!(
            tree.get("Material"),
            Some(&json!({"IsSolid": true, "IsLiquid": false, "IsOpaque": true, "CanBurn": false}))
        );
        assert_eq!(tree.get("Class"), Some(&json!(["BlockStone"])));
        assert_eq!(tree.get("MapColor"), Some(&json!("#707070")));
        assert_eq!(tree.get("HasSubtypes"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_uniform_colors_emit_single_field() {
        let host = host_with(
            HostFixture::new("1.7.10").with_block(
                BlockFixture::new(2, "minecraft:grass").with_map_colors(vec![0x7FB238; 16]),
            ),
        );
        let tree = extract_first_block(&host, 2);

        assert_eq!(tree.get("MapColor"), Some(&json!("#7FB238")));
        assert!(!tree.contains_key("MapColors"));
    }

    #[test]
    fn test_one_differing_color_emits_array() {
        let mut colors = vec![0xFFFFFF; 16];
        colors[14] = 0x993333;
        let host = host_with(
            HostFixture::new("1.7.10")
                .with_block(BlockFixture::new(35, "minecraft:wool").with_map_colors(colors)),
        );
        let tree = extract_first_block(&host, 35);

        assert!(!tree.contains_key("MapColor"));
        let colors = tree
            .get("MapColors")
            .and_then(Value::as_array)
            .expect("plural colors field");
        assert_eq!(colors.len(), 16);
        assert_eq!(colors[0], json!("#FFFFFF"));
        assert_eq!(colors[14], json!("#993333"));
    }

    #[test]
    fn test_incomplete_colors_are_omitted() {
        let host = host_with(
            HostFixture::new("1.7.10")
                .with_block(BlockFixture::new(3, "minecraft:dirt").with_map_colors(vec![1, 2, 3])),
        );
        let tree = extract_first_block(&host, 3);

        assert!(!tree.contains_key("MapColor"));
        assert!(!tree.contains_key("MapColors"));
    }

    #[test]
    fn test_sub_variants_listed() {
        let variants = vec![
            SubVariantFixture {
                meta: 0,
                unlocalized_name: "tile.log.oak".to_string(),
                localized_name: "Oak Wood".to_string(),
            },
            SubVariantFixture {
                meta: 1,
                unlocalized_name: "tile.log.spruce".to_string(),
                localized_name: "Spruce Wood".to_string(),
            },
        ];
        let host = host_with(
            HostFixture::new("1.7.10")
                .with_block(BlockFixture::new(17, "minecraft:log").with_sub_variants(variants)),
        );
        let tree = extract_first_block(&host, 17);

        assert_eq!(tree.get("HasSubtypes"), Some(&Value::Bool(true)));
        assert_eq!(
            tree.get("Subtypes"),
            Some(&json!([
                {"Meta": 0, "UnlocalizedName": "tile.log.oak", "LocalizedName": "Oak Wood"},
                {"Meta": 1, "UnlocalizedName": "tile.log.spruce", "LocalizedName": "Spruce Wood"}
            ]))
        );
        assert!(!tree.contains_key("SubtypesError"));
    }

    #[test]
    fn test_sub_variant_failure_becomes_diagnostic_field() {
        let host = host_with(
            HostFixture::new("1.7.10").with_block(
                BlockFixture::new(200, "brokenmod:thing")
                    .with_map_colors(vec![0x123456])
                    .with_sub_variant_error("NullPointerException in getSubBlocks"),
            ),
        );
        let tree = extract_first_block(&host, 200);

        assert_eq!(
            tree.get("SubtypesError"),
            Some(&json!("NullPointerException in getSubBlocks"))
        );
        assert!(!tree.contains_key("Subtypes"));
        // the rest of the block is still there
        assert_eq!(tree.get("MapColor"), Some(&json!("#123456")));
        assert!(tree.contains_key("Material"));
    }

    #[test]
    fn test_lineage_excludes_root() {
        let host = host_with(
            HostFixture::new("1.7.10")
                .with_class("Concrete", "Mid")
                .with_class("Mid", "Block")
                .with_block(BlockFixture::new(4, "modA:thing").with_class("Concrete")),
        );
        let tree = extract_first_block(&host, 4);

        assert_eq!(tree.get("Class"), Some(&json!(["Concrete", "Mid"])));
    }

    #[test]
    fn test_biome_properties() {
        let mut plains = BiomeFixture::new(1, "Plains")
            .with_class("BiomeGenPlains")
            .with_tags(&["PLAINS"]);
        plains.color = Some(0x8DB360);
        plains.water_color = Some(0xFFFFFF);
        plains.enable_snow = Some(false);
        plains.spawning_chance = Some(0.05);
        plains.temperature_category = Some("MEDIUM".to_string());

        let host = host_with(
            HostFixture::new("1.7.10")
                .with_class("BiomeGenPlains", "Biome")
                .with_biome(plains),
        );
        let biome = host.biomes().get_by_id(1).expect("plains");
        let tree = PropertyExtractor::new(&host).extract_biome(biome);

        assert_eq!(
            serde_json::to_value(&tree).expect("serialize"),
            json!({
                "Id": 1,
                "Name": "Plains",
                "Type": ["PLAINS"],
                "Color": "#8DB360",
                "WaterColorMultiplier": "#FFFFFF",
                "EnableSnow": false,
                "SpawningChance": 0.05,
                "TempCategory": "MEDIUM",
                "Class": ["BiomeGenPlains"]
            })
        );
    }

    #[test]
    fn test_biome_without_tags_omits_type() {
        let host = host_with(
            HostFixture::new("1.7.10")
                .with_biome(BiomeFixture::new(7, "River"))
                .with_biome(BiomeFixture::new(8, "Hell").with_tags(&[])),
        );
        let extractor = PropertyExtractor::new(&host);

        for id in [7, 8] {
            let biome = host.biomes().get_by_id(id).expect("biome");
            let tree = extractor.extract_biome(biome);
            assert!(!tree.contains_key("Type"));
            assert!(!tree.contains_key("Color"));
            assert_eq!(tree.get("Class"), Some(&json!([])));
        }
    }

    #[test]
    fn test_module_properties() {
        let mut module = ModuleFixture::new("examplemod", "1.2.3");
        module.name = "Example Mod".to_string();
        module.display_version = Some("1.2.3-beta".to_string());
        let host = host_with(HostFixture::new("1.7.10").with_module(module));

        let modules = host.active_modules();
        let tree = PropertyExtractor::new(&host).extract_module(modules[0]);

        assert_eq!(
            serde_json::to_value(&tree).expect("serialize"),
            json!({
                "ModId": "examplemod",
                "Name": "Example Mod",
                "Version": "1.2.3",
                "DisplayVersion": "1.2.3-beta",
                "Source": "examplemod.jar"
            })
        );
    }
}
