//! Export orchestration
//!
//! Runs the three snapshot kinds in a fixed order: version/module list, one
//! block document per module namespace, then biomes. Each snapshot is built,
//! written and dropped before the next one starts, and a failed write only
//! loses that one file.

use std::path::PathBuf;

use crate::application::ports::inbound::LifecycleListener;
use crate::application::ports::outbound::{HostPort, SnapshotSinkPort};
use crate::application::services::property_extractor::PropertyExtractor;
use crate::application::services::registry_walker::{namespace_fragment, RegistryWalker};
use crate::domain::value_objects::{
    ExportConfig, NamespaceKey, PropertyTree, Snapshot, SnapshotKind,
};

pub const EXPORTER_ID: &str = "MetaDump";
pub const EXPORTER_NAME: &str = "MetaDump";
pub const EXPORTER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A snapshot that could not be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedSnapshot {
    pub kind: SnapshotKind,
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of one export run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Paths written, in the order they were written
    pub written: Vec<PathBuf>,
    pub failed: Vec<FailedSnapshot>,
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Orchestrates one export of the host's registries
pub struct ExportService<'a> {
    host: &'a dyn HostPort,
    sink: &'a dyn SnapshotSinkPort,
    config: &'a ExportConfig,
}

impl<'a> ExportService<'a> {
    pub fn new(
        host: &'a dyn HostPort,
        sink: &'a dyn SnapshotSinkPort,
        config: &'a ExportConfig,
    ) -> Self {
        Self { host, sink, config }
    }

    /// Write every snapshot, continuing past individual failures
    pub fn run_export(&self) -> ExportReport {
        let _span = tracing::info_span!("export", exporter = EXPORTER_ID).entered();
        let runtime_version = self.host.version_info().runtime_version;
        tracing::info!(
            "{} {} exporting registries for host {}",
            EXPORTER_NAME,
            EXPORTER_VERSION,
            runtime_version
        );

        let mut report = ExportReport::default();

        self.emit(
            Snapshot::new(
                SnapshotKind::Version,
                self.version_document(),
                self.config,
                &runtime_version,
            ),
            &mut report,
        );

        let mut namespaces = self.block_walker().namespaces(self.host.blocks());
        tracing::debug!("Found {} block namespaces", namespaces.len());
        if namespaces.is_empty() {
            namespaces.push(NamespaceKey::new(self.host.reserved_namespace()));
        }
        let mut fragments: Vec<String> = Vec::with_capacity(namespaces.len());
        for namespace in &namespaces {
            let fragment = unique_fragment(namespace_fragment(self.host, namespace), &fragments);
            fragments.push(fragment.clone());
            let kind = SnapshotKind::Blocks { fragment };
            let tree = self.block_document(namespace);
            self.emit(
                Snapshot::new(kind, tree, self.config, &runtime_version),
                &mut report,
            );
        }

        self.emit(
            Snapshot::new(
                SnapshotKind::Biomes,
                self.biome_document(),
                self.config,
                &runtime_version,
            ),
            &mut report,
        );

        tracing::info!(
            "Export finished: {} written, {} failed",
            report.written.len(),
            report.failed.len()
        );
        report
    }

    /// Host versions plus the active module list
    pub fn version_document(&self) -> PropertyTree {
        let version = self.host.version_info();
        let extractor = PropertyExtractor::new(self.host);

        let mut tree = PropertyTree::new();
        tree.insert("RuntimeVersionString", version.runtime_version)
            .insert_opt("MappingsVersionString", version.mappings_version)
            .insert_opt("LoaderVersionString", version.loader_version)
            .insert_trees(
                "ActiveModList",
                self.host
                    .active_modules()
                    .into_iter()
                    .map(|module| extractor.extract_module(module)),
            );
        tree
    }

    /// Blocks registered under one namespace
    pub fn block_document(&self, namespace: &NamespaceKey) -> PropertyTree {
        let registry = self.host.blocks();
        let extractor = PropertyExtractor::new(self.host);

        let blocks = self
            .block_walker()
            .walk_namespace(registry, namespace)
            .into_iter()
            .map(|(id, block)| {
                extractor.extract_block(id, &registry.canonical_name(block), block)
            })
            .collect::<Vec<_>>();
        tracing::debug!("Extracted {} blocks for {}", blocks.len(), namespace);

        let mut tree = PropertyTree::new();
        tree.insert_trees("Blocks", blocks);
        tree
    }

    pub fn biome_document(&self) -> PropertyTree {
        let extractor = PropertyExtractor::new(self.host);
        let walker = RegistryWalker::new(self.config.biome_capacity);

        let biomes = walker
            .walk(self.host.biomes())
            .into_iter()
            .map(|(_, biome)| extractor.extract_biome(biome))
            .collect::<Vec<_>>();
        tracing::debug!("Extracted {} biomes", biomes.len());

        let mut tree = PropertyTree::new();
        tree.insert_trees("Biomes", biomes);
        tree
    }

    fn block_walker(&self) -> RegistryWalker {
        RegistryWalker::new(self.config.block_capacity)
            .with_sentinel(self.config.void_block_name.as_str())
    }

    fn emit(&self, snapshot: Snapshot, report: &mut ExportReport) {
        let Snapshot { kind, path, tree } = snapshot;
        let result = match self.config.validate() {
            Ok(()) => self.sink.write(&tree, &path).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        match result {
            Ok(()) => {
                tracing::info!("Wrote {} snapshot to {}", kind, path.display());
                report.written.push(path);
            }
            Err(e) => {
                tracing::error!("Failed to write {} snapshot: {}", kind, e);
                report.failed.push(FailedSnapshot {
                    kind,
                    path,
                    error: e,
                });
            }
        }
    }
}

/// Suffix `fragment` with `_2`, `_3`, ... until no earlier namespace uses it
fn unique_fragment(fragment: String, taken: &[String]) -> String {
    if !taken.contains(&fragment) {
        return fragment;
    }
    let unique = (2..)
        .map(|n| format!("{}_{}", fragment, n))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_default();
    tracing::warn!(
        "Block fragment {} already taken by another namespace, using {}",
        fragment,
        unique
    );
    unique
}

/// Runs the export when the host finishes initialization
///
/// The export happens at most once; repeated notifications are ignored.
pub struct ExportOnPostInit {
    config: ExportConfig,
    sink: Box<dyn SnapshotSinkPort>,
    report: Option<ExportReport>,
}

impl ExportOnPostInit {
    pub fn new(config: ExportConfig, sink: Box<dyn SnapshotSinkPort>) -> Self {
        Self {
            config,
            sink,
            report: None,
        }
    }

    /// Report of the completed export, if it has run
    pub fn report(&self) -> Option<&ExportReport> {
        self.report.as_ref()
    }
}

impl LifecycleListener for ExportOnPostInit {
    fn on_post_init(&mut self, host: &dyn HostPort) {
        if self.report.is_some() {
            tracing::warn!("Post-init delivered again, export already ran");
            return;
        }
        let service = ExportService::new(host, self.sink.as_ref(), &self.config);
        self.report = Some(service.run_export());
    }
}
