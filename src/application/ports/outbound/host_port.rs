//! Host ports - the read-only query interface onto the host application
//!
//! The host owns every registry and entity. The exporter only borrows handles
//! for the duration of one extraction call and never mutates or caches them.
//! Accessors that a given host revision may not provide return `Option` and
//! default to `None`; the extractor omits those fields.

/// Version strings describing the running host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostVersionInfo {
    /// The host's own runtime version, used in file names and as the reserved
    /// namespace's version suffix
    pub runtime_version: String,
    pub mappings_version: Option<String>,
    pub loader_version: Option<String>,
}

/// Sub-variant discovery failed for one entity
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct VariantError(pub String);

/// One damage/meta sub-variant of a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubVariant {
    pub meta: u32,
    pub unlocalized_name: String,
    pub localized_name: String,
}

/// An indexable, host-owned collection of entity handles
pub trait RegistryPort {
    type Handle: ?Sized;

    /// Entry at `id`, or `None` for an empty slot
    fn get_by_id(&self, id: u32) -> Option<&Self::Handle>;

    /// The namespaced name the host registered this entry under
    fn canonical_name(&self, handle: &Self::Handle) -> String;
}

/// Material backing a block
pub trait MaterialHandle {
    fn is_solid(&self) -> bool;
    fn is_liquid(&self) -> bool;
    fn is_opaque(&self) -> bool;
    fn can_burn(&self) -> bool;
}

/// One block type
pub trait BlockHandle {
    fn unlocalized_name(&self) -> String;
    fn localized_name(&self) -> String;
    fn class_name(&self) -> String;
    fn material(&self) -> &dyn MaterialHandle;

    fn can_provide_power(&self) -> Option<bool> {
        None
    }

    fn light_opacity(&self) -> Option<i32> {
        None
    }

    fn light_value(&self) -> Option<i32> {
        None
    }

    fn is_opaque_cube(&self) -> Option<bool> {
        None
    }

    fn is_normal_cube(&self) -> Option<bool> {
        None
    }

    fn is_translucent(&self) -> Option<bool> {
        None
    }

    fn render_type(&self) -> Option<i32> {
        None
    }

    /// Raw RGB of the color variant at `index` (0..16)
    fn map_color(&self, _index: usize) -> Option<u32> {
        None
    }

    /// `None` when the block has no sub-variants, otherwise the discovery result
    fn sub_variants(&self) -> Option<Result<Vec<SubVariant>, VariantError>> {
        None
    }
}

/// One biome type
pub trait BiomeHandle {
    fn biome_id(&self) -> u32;
    fn name(&self) -> String;
    fn class_name(&self) -> String;

    fn color(&self) -> Option<u32> {
        None
    }

    fn water_color_multiplier(&self) -> Option<u32> {
        None
    }

    fn enable_snow(&self) -> Option<bool> {
        None
    }

    fn spawning_chance(&self) -> Option<f64> {
        None
    }

    fn temperature_category(&self) -> Option<String> {
        None
    }
}

/// One loaded module (mod) descriptor
pub trait ModuleHandle {
    fn mod_id(&self) -> String;
    fn name(&self) -> String;
    fn version(&self) -> String;
    fn display_version(&self) -> String;
    /// Name of the file or package the module was loaded from
    fn source_name(&self) -> String;
}

/// Everything the exporter reads from the host
pub trait HostPort {
    fn version_info(&self) -> HostVersionInfo;

    /// Namespace the host registers its own entities under
    fn reserved_namespace(&self) -> &str;

    fn active_modules(&self) -> Vec<&dyn ModuleHandle>;

    fn blocks(&self) -> &dyn RegistryPort<Handle = dyn BlockHandle>;

    fn biomes(&self) -> &dyn RegistryPort<Handle = dyn BiomeHandle>;

    /// Classification tags registered for a biome, `None` if there are none
    fn biome_tags(&self, _biome: &dyn BiomeHandle) -> Option<Vec<String>> {
        None
    }

    /// Parent of a class in the host's type hierarchy
    fn superclass(&self, class_name: &str) -> Option<String>;

    /// Common base class of all block types, excluded from lineages
    fn block_root_class(&self) -> &str;

    /// Common base class of all biome types, excluded from lineages
    fn biome_root_class(&self) -> &str;
}
