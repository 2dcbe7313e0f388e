pub mod thumbnail_upload;
pub mod video_get;
pub mod video_upload;

use crate::auth::UserContext;
use crate::error::HttpAppError;
use crate::state::AppState;
use tubely_core::{models::Video, AppError};
use uuid::Uuid;

/// Parse the path id, load the record and check the caller owns it
pub(crate) async fn load_owned_video(
    state: &AppState,
    raw_id: &str,
    user: UserContext,
) -> Result<Video, HttpAppError> {
    let video_id = Uuid::parse_str(raw_id)
        .map_err(|_| AppError::InvalidInput(format!("Invalid video ID: {}", raw_id)))?;

    let video = state
        .videos
        .get_video(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Video {} not found", video_id)))?;

    if !video.is_owned_by(user.user_id) {
        tracing::warn!(
            video_id = %video_id,
            user_id = %user.user_id,
            "Rejected access to a video owned by another user"
        );
        return Err(AppError::Unauthorized("You do not own this video".to_string()).into());
    }

    Ok(video)
}
