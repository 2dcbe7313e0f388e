//! Service initialization and application state setup

use crate::auth::JwtService;
use crate::setup::storage::StorageSetup;
use crate::state::AppState;
use anyhow::{Context, Result};
use sqlx::PgPool;
use std::sync::Arc;
use tubely_core::Config;
use tubely_db::PgVideoRepository;
use tubely_processing::{Ffmpeg, Ffprobe};

/// Build the shared application state
pub fn initialize_services(
    config: &Config,
    pool: PgPool,
    storage: StorageSetup,
) -> Result<Arc<AppState>> {
    let prober = Ffprobe::new(config.ffprobe_path()).context("Invalid FFPROBE_PATH")?;
    let remuxer = Ffmpeg::new(config.ffmpeg_path()).context("Invalid FFMPEG_PATH")?;

    tracing::info!(
        ffprobe = %prober.path(),
        ffmpeg = %remuxer.path(),
        "Media tools configured"
    );

    Ok(Arc::new(AppState {
        config: config.clone(),
        videos: Arc::new(PgVideoRepository::new(pool)),
        assets: storage.assets,
        video_storage: storage.videos,
        prober: Arc::new(prober),
        remuxer: Arc::new(remuxer),
        jwt: Arc::new(JwtService::new(
            config.jwt_secret(),
            config.jwt_expiry_hours(),
        )),
    }))
}
