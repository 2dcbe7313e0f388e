use crate::auth::UserContext;
use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::load_owned_video;
use crate::state::AppState;
use crate::utils::upload::{
    field_media_type, multipart_error, multipart_rejection, validate_file_size,
};
use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    Json,
};
use std::sync::Arc;
use tubely_core::constants::{THUMBNAIL_CONTENT_TYPES, THUMBNAIL_FIELD};
use tubely_core::models::{Thumbnail, VideoResponse};
use tubely_core::AppError;
use tubely_storage::keys::thumbnail_key;

#[utoipa::path(
    post,
    path = "/api/thumbnail_upload/{videoID}",
    tag = "thumbnails",
    params(
        ("videoID" = String, Path, description = "Video ID")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Thumbnail stored", body = VideoResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated or not the owner", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(
    skip(state, multipart),
    fields(user_id = %user.user_id, operation = "upload_thumbnail")
)]
pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    user: UserContext,
    Path(video_id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let mut video = load_owned_video(&state, &video_id, user).await?;

    let mut multipart = multipart.map_err(multipart_rejection)?;
    let thumbnail = read_thumbnail(&mut multipart).await?;
    validate_file_size(thumbnail.data.len(), state.config.max_thumbnail_size_bytes())?;

    let extension = thumbnail.extension().ok_or_else(|| {
        AppError::InvalidInput(format!("Unsupported thumbnail type: {}", thumbnail.media_type))
    })?;
    let key = thumbnail_key(video.id, extension);
    let size = thumbnail.data.len();

    let url = state
        .assets
        .upload_with_key(&key, thumbnail.data, &thumbnail.media_type)
        .await?;

    video.thumbnail_url = Some(url);
    let updated = state.videos.update_video(&video).await?;

    tracing::info!(
        video_id = %updated.id,
        key = %key,
        size_bytes = size,
        "Thumbnail uploaded"
    );

    Ok(Json(updated.into()))
}

/// Find the thumbnail field and read it into memory after checking its media type
async fn read_thumbnail(multipart: &mut Multipart) -> Result<Thumbnail, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(THUMBNAIL_FIELD) {
            continue;
        }

        let media_type = field_media_type(&field).unwrap_or_default();
        if !THUMBNAIL_CONTENT_TYPES.contains(&media_type.as_str()) {
            return Err(AppError::InvalidInput(format!(
                "Invalid content type. Allowed types: {}",
                THUMBNAIL_CONTENT_TYPES.join(", ")
            )));
        }

        let data = field.bytes().await.map_err(multipart_error)?;
        return Ok(Thumbnail { data, media_type });
    }

    Err(AppError::InvalidInput(format!(
        "Missing '{}' field",
        THUMBNAIL_FIELD
    )))
}
