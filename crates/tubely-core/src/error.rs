//! Error types module
//!
//! All request-level failures are unified under the `AppError` enum, which can
//! represent database, storage, media processing, validation and auth errors.
//!
//! The `Database` variant wraps `sqlx::Error` when the `sqlx` feature is enabled.
//! Without it the variant carries a plain message.

use std::io;

#[cfg(feature = "sqlx")]
use sqlx::Error as SqlxError;

/// Severity at which a failed request is logged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Warn,
    Error,
}

/// How an error presents itself over HTTP
pub trait ErrorMetadata {
    fn http_status_code(&self) -> u16;

    /// Stable code clients can match on, e.g. `"NOT_FOUND"`
    fn error_code(&self) -> &'static str;

    /// Whether the same request may succeed if retried
    fn is_recoverable(&self) -> bool;

    fn suggested_action(&self) -> Option<&'static str>;

    /// Message safe to show to the caller
    fn client_message(&self) -> String;

    /// Sensitive errors never expose details, even outside production
    fn is_sensitive(&self) -> bool;

    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[cfg(not(feature = "sqlx"))]
    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Media processing error: {0}")]
    MediaProcessing(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

#[cfg(feature = "sqlx")]
impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::InvalidInput(format!("UUID parsing error: {}", err))
    }
}

struct Meta {
    status: u16,
    code: &'static str,
    recoverable: bool,
    action: Option<&'static str>,
    sensitive: bool,
    level: LogLevel,
}

const fn client_error(status: u16, code: &'static str, action: &'static str) -> Meta {
    Meta {
        status,
        code,
        recoverable: false,
        action: Some(action),
        sensitive: false,
        level: LogLevel::Debug,
    }
}

const fn server_error(code: &'static str) -> Meta {
    Meta {
        status: 500,
        code,
        recoverable: true,
        action: Some("Retry after a short delay"),
        sensitive: true,
        level: LogLevel::Error,
    }
}

fn meta(err: &AppError) -> Meta {
    match err {
        AppError::Database(_) => server_error("DATABASE_ERROR"),
        AppError::Storage(_) => server_error("STORAGE_ERROR"),
        AppError::Internal(_) | AppError::InternalWithSource { .. } => {
            server_error("INTERNAL_ERROR")
        }
        AppError::MediaProcessing(_) => Meta {
            level: LogLevel::Warn,
            ..client_error(
                400,
                "MEDIA_PROCESSING_ERROR",
                "Upload a playable MP4 file",
            )
        },
        AppError::InvalidInput(_) => {
            client_error(400, "INVALID_INPUT", "Check the video ID and form fields")
        }
        AppError::BadRequest(_) => {
            client_error(400, "BAD_REQUEST", "Send a multipart/form-data body")
        }
        AppError::NotFound(_) => client_error(404, "NOT_FOUND", "Verify the video ID exists"),
        AppError::PayloadTooLarge(_) => {
            client_error(413, "PAYLOAD_TOO_LARGE", "Upload a smaller file")
        }
        AppError::Unauthorized(_) => client_error(
            401,
            "UNAUTHORIZED",
            "Send a valid bearer token for the video owner",
        ),
    }
}

impl AppError {
    /// Variant name reported as `error_type` outside production
    pub fn error_type(&self) -> &str {
        match self {
            AppError::Database(_) => "Database",
            AppError::Storage(_) => "Storage",
            AppError::MediaProcessing(_) => "MediaProcessing",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::BadRequest(_) => "BadRequest",
            AppError::NotFound(_) => "NotFound",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
            AppError::Unauthorized(_) => "Unauthorized",
        }
    }

    /// Display text followed by up to five levels of `source()`
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();
        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            if depth == 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
            depth += 1;
        }
        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        meta(self).status
    }

    fn error_code(&self) -> &'static str {
        meta(self).code
    }

    fn is_recoverable(&self) -> bool {
        meta(self).recoverable
    }

    fn suggested_action(&self) -> Option<&'static str> {
        meta(self).action
    }

    fn is_sensitive(&self) -> bool {
        meta(self).sensitive
    }

    fn log_level(&self) -> LogLevel {
        meta(self).level
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Database(_) => "Failed to access database".to_string(),
            AppError::Storage(_) => "Failed to access storage".to_string(),
            AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "Internal server error".to_string()
            }
            AppError::MediaProcessing(msg)
            | AppError::InvalidInput(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::Unauthorized(msg) => msg.clone(),
        }
    }
}
