use std::process::ExitStatus;

/// Failures from the external media tools.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("failed to parse ffprobe output: {0}")]
    MalformedOutput(#[from] serde_json::Error),

    #[error("no streams found in media file")]
    NoStreams,

    #[error("invalid tool path: {0}")]
    InvalidPath(String),
}

impl MediaError {
    /// Whether the failure was caused by the input file rather than the host.
    ///
    /// A tool that cannot be started, or a misconfigured tool path, is an
    /// operator problem; everything else points at the uploaded media.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, MediaError::Spawn { .. } | MediaError::InvalidPath(_))
    }
}
