//! MetaDump demo host
//!
//! Builds an in-memory host from a JSON registry fixture, then delivers the
//! post-initialization notification the way a real host would, which runs
//! the export once.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use metadump::infrastructure::config::AppConfig;
use metadump::infrastructure::fixture_host::FixtureHost;
use metadump::{ExportOnPostInit, LifecycleListener, SnapshotWriter};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "metadump=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Fixture: {}", config.fixture_path.display());
    tracing::info!("  Output: {}", config.export.output_dir.display());

    let host = FixtureHost::load(&config.fixture_path)?;

    let mut listener = ExportOnPostInit::new(config.export, Box::new(SnapshotWriter::new()));
    listener.on_post_init(&host);

    if let Some(report) = listener.report() {
        for failed in &report.failed {
            tracing::warn!("Missing snapshot {}: {}", failed.path.display(), failed.error);
        }
    }

    Ok(())
}
