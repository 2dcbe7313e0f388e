//! Fast-start remuxing with ffmpeg

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{error, info};

use crate::error::MediaError;
use crate::tool::validate_tool_path;
use crate::traits::FastStartRemuxer;

const OUTPUT_SUFFIX: &str = ".processing";

/// Output path for a remux of `input`: the input path with `.processing` appended.
pub fn fast_start_path(input: &Path) -> PathBuf {
    let mut output = OsString::from(input.as_os_str());
    output.push(OUTPUT_SUFFIX);
    PathBuf::from(output)
}

/// [`FastStartRemuxer`] backed by the ffmpeg binary.
///
/// Streams are copied, never re-encoded.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    ffmpeg_path: String,
}

impl Ffmpeg {
    pub fn new(ffmpeg_path: impl Into<String>) -> Result<Self, MediaError> {
        let ffmpeg_path = ffmpeg_path.into();
        validate_tool_path(&ffmpeg_path)?;
        Ok(Self { ffmpeg_path })
    }

    pub fn path(&self) -> &str {
        &self.ffmpeg_path
    }
}

#[async_trait]
impl FastStartRemuxer for Ffmpeg {
    #[tracing::instrument(skip(self), fields(tool = "ffmpeg"))]
    async fn remux(&self, path: &Path) -> Result<PathBuf, MediaError> {
        let output_path = fast_start_path(path);

        let output = Command::new(&self.ffmpeg_path)
            .arg("-y")
            .arg("-i")
            .arg(path)
            .args(["-c", "copy", "-movflags", "faststart", "-f", "mp4"])
            .arg(&output_path)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| MediaError::Spawn {
                tool: self.ffmpeg_path.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!(status = %output.status, stderr = %stderr, "ffmpeg remux failed");
            return Err(MediaError::ToolFailed {
                tool: self.ffmpeg_path.clone(),
                status: output.status,
                stderr,
            });
        }

        info!(output = %output_path.display(), "Remuxed for fast start");
        Ok(output_path)
    }
}
