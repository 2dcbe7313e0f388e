//! Storage setup and initialization

use anyhow::{Context, Result};
use std::sync::Arc;
use tubely_core::Config;
use tubely_storage::{create_asset_storage, create_video_storage, Storage};

/// Storage backends used by the handlers
pub struct StorageSetup {
    pub assets: Arc<dyn Storage>,
    pub videos: Arc<dyn Storage>,
}

/// Create the assets directory storage and the configured video backend
pub async fn setup_storage(config: &Config) -> Result<StorageSetup> {
    tracing::info!("Initializing storage...");

    let assets = create_asset_storage(config)
        .await
        .context("Failed to initialize assets storage")?;
    let videos = create_video_storage(config)
        .await
        .context("Failed to initialize video storage")?;

    tracing::info!(
        assets_root = %config.assets_root().display(),
        video_backend = %videos.backend_type(),
        bucket = config.s3_bucket().unwrap_or("-"),
        "Storage initialized successfully"
    );

    Ok(StorageSetup { assets, videos })
}
