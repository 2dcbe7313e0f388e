use crate::auth::UserContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::load_owned_video;
use crate::state::AppState;
use crate::utils::upload::{
    field_media_type, multipart_error, multipart_rejection, stream_field_to_file,
};
use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    Json,
};
use std::sync::Arc;
use tempfile::{NamedTempFile, TempPath};
use tubely_core::constants::{VIDEO_CONTENT_TYPE, VIDEO_FIELD};
use tubely_core::models::VideoResponse;
use tubely_core::AppError;
use tubely_processing::fast_start_path;
use tubely_storage::keys::video_key;

const UPLOAD_PREFIX: &str = "tubely-upload";

#[utoipa::path(
    post,
    path = "/api/video_upload/{videoID}",
    tag = "videos",
    params(
        ("videoID" = String, Path, description = "Video ID")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Video stored", body = VideoResponse),
        (status = 400, description = "Invalid input or unreadable video", body = ErrorResponse),
        (status = 401, description = "Not authenticated or not the owner", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(
    skip(state, multipart),
    fields(user_id = %user.user_id, operation = "upload_video")
)]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    user: UserContext,
    Path(video_id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let mut video = load_owned_video(&state, &video_id, user).await?;

    let mut multipart = multipart.map_err(multipart_rejection)?;
    let upload = receive_video(&mut multipart).await?;

    let orientation = state.prober.aspect_ratio(upload.path()).await?;

    // Removes partial ffmpeg output if the remux fails
    let artifact = TempPath::from_path(fast_start_path(upload.path()));
    let remuxed = state.remuxer.remux(upload.path()).await?;
    let _remuxed_guard = (remuxed != *artifact).then(|| TempPath::from_path(&remuxed));

    let key = video_key(orientation.as_str());
    let url = state
        .video_storage
        .upload_file(&key, &remuxed, VIDEO_CONTENT_TYPE)
        .await?;

    video.video_url = Some(url);
    let updated = match state.videos.update_video(&video).await {
        Ok(updated) => updated,
        Err(e) => {
            tracing::error!(
                error = %e,
                video_id = %video.id,
                key = %key,
                "Record update failed after upload, stored object is orphaned"
            );
            return Err(e.into());
        }
    };

    tracing::info!(
        video_id = %updated.id,
        key = %key,
        orientation = %orientation,
        "Video uploaded"
    );

    Ok(Json(updated.into()))
}

/// Find the video field and stream it into a temporary file
async fn receive_video(multipart: &mut Multipart) -> Result<NamedTempFile, AppError> {
    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(VIDEO_FIELD) {
            continue;
        }

        if field_media_type(&field).as_deref() != Some(VIDEO_CONTENT_TYPE) {
            return Err(AppError::InvalidInput(format!(
                "Invalid content type. Allowed types: {}",
                VIDEO_CONTENT_TYPE
            )));
        }

        let upload = tempfile::Builder::new()
            .prefix(UPLOAD_PREFIX)
            .suffix(".mp4")
            .tempfile()?;
        let mut file = tokio::fs::File::from_std(upload.as_file().try_clone()?);
        let size = stream_field_to_file(&mut field, &mut file).await?;

        tracing::debug!(
            path = %upload.path().display(),
            size_bytes = size,
            "Video upload written to temporary file"
        );

        return Ok(upload);
    }

    Err(AppError::InvalidInput(format!(
        "Missing '{}' field",
        VIDEO_FIELD
    )))
}
