//! Common utilities for file upload handlers

use crate::error::HttpAppError;
use axum::extract::multipart::{Field, MultipartError, MultipartRejection};
use axum::extract::{Request, State};
use axum::http::{header::CONTENT_LENGTH, HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tokio::io::AsyncWriteExt;
use tubely_core::AppError;

/// Normalize MIME type by stripping parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
pub fn normalize_mime_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
        .to_lowercase()
}

/// Declared media type of a multipart field, normalized. Missing means unknown.
pub fn field_media_type(field: &Field<'_>) -> Option<String> {
    field.content_type().map(normalize_mime_type)
}

/// Map a multipart read failure to 413 when a body limit tripped, 400 otherwise
pub fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Upload exceeds maximum allowed size".to_string())
    } else {
        AppError::BadRequest(format!("Failed to read multipart: {}", err.body_text()))
    }
}

/// Map a failed `Multipart` extraction (wrong or missing content type) to a 400
pub fn multipart_rejection(rejection: MultipartRejection) -> AppError {
    AppError::BadRequest(format!("Invalid multipart request: {}", rejection.body_text()))
}

/// Stream a multipart field into `file` chunk by chunk; returns bytes written
pub async fn stream_field_to_file(
    field: &mut Field<'_>,
    file: &mut tokio::fs::File,
) -> Result<u64, AppError> {
    let mut written = 0u64;
    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    Ok(written)
}

/// Validate file size
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

/// Body length announced by the client, if any
pub fn declared_content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Answer a declared oversize body with the JSON 413 before any of it is read.
/// Chunked bodies carry no length and are capped while streaming instead.
pub async fn reject_oversized_content_length(
    State(limit): State<usize>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(length) = declared_content_length(request.headers()) {
        if length > limit as u64 {
            tracing::debug!(
                content_length = length,
                limit_bytes = limit,
                "Rejecting oversized upload"
            );
            return HttpAppError(AppError::PayloadTooLarge(format!(
                "Upload exceeds maximum allowed size of {} MB",
                limit / 1024 / 1024
            )))
            .into_response();
        }
    }
    next.run(request).await
}
