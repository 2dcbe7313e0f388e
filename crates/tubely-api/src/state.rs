//! Application state shared by every handler.

use crate::auth::JwtService;
use std::sync::Arc;
use tubely_core::Config;
use tubely_db::VideoRepository;
use tubely_processing::{FastStartRemuxer, MediaProber};
use tubely_storage::Storage;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub videos: Arc<dyn VideoRepository>,
    /// Local assets directory; thumbnails always land here
    pub assets: Arc<dyn Storage>,
    /// Video backend selected by `STORAGE_BACKEND`
    pub video_storage: Arc<dyn Storage>,
    pub prober: Arc<dyn MediaProber>,
    pub remuxer: Arc<dyn FastStartRemuxer>,
    pub jwt: Arc<JwtService>,
}
