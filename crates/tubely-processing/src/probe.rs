//! Aspect-ratio probing with ffprobe

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::{debug, error};

use crate::error::MediaError;
use crate::tool::validate_tool_path;
use crate::traits::MediaProber;

const LANDSCAPE_RATIO: f64 = 16.0 / 9.0;
const PORTRAIT_RATIO: f64 = 9.0 / 16.0;
const RATIO_TOLERANCE: f64 = 0.02;

/// Orientation class of a video, also used as its storage key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Landscape,
    Portrait,
    Other,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "landscape",
            AspectRatio::Portrait => "portrait",
            AspectRatio::Other => "other",
        }
    }
}

impl Display for AspectRatio {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
struct FFprobeOutput {
    #[serde(default)]
    streams: Vec<FFprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FFprobeStream {
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
}

/// Classify `width / height` against the 16:9 and 9:16 bands.
pub fn classify_aspect_ratio(width: u32, height: u32) -> AspectRatio {
    let ratio = f64::from(width) / f64::from(height);
    if !ratio.is_finite() {
        return AspectRatio::Other;
    }

    if (ratio - LANDSCAPE_RATIO).abs() <= RATIO_TOLERANCE {
        AspectRatio::Landscape
    } else if (ratio - PORTRAIT_RATIO).abs() <= RATIO_TOLERANCE {
        AspectRatio::Portrait
    } else {
        AspectRatio::Other
    }
}

/// Parse `ffprobe -print_format json -show_streams` output.
///
/// Only the first stream is considered.
pub fn parse_probe_output(stdout: &[u8]) -> Result<Dimensions, MediaError> {
    let output: FFprobeOutput = serde_json::from_slice(stdout)?;
    let stream = output.streams.into_iter().next().ok_or(MediaError::NoStreams)?;
    Ok(Dimensions {
        width: stream.width,
        height: stream.height,
    })
}

/// [`MediaProber`] backed by the ffprobe binary.
#[derive(Debug, Clone)]
pub struct Ffprobe {
    ffprobe_path: String,
}

impl Ffprobe {
    pub fn new(ffprobe_path: impl Into<String>) -> Result<Self, MediaError> {
        let ffprobe_path = ffprobe_path.into();
        validate_tool_path(&ffprobe_path)?;
        Ok(Self { ffprobe_path })
    }

    pub fn path(&self) -> &str {
        &self.ffprobe_path
    }
}

#[async_trait]
impl MediaProber for Ffprobe {
    #[tracing::instrument(skip(self), fields(tool = "ffprobe"))]
    async fn probe(&self, path: &Path) -> Result<Dimensions, MediaError> {
        let output = Command::new(&self.ffprobe_path)
            .args(["-v", "error", "-print_format", "json", "-show_streams"])
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| MediaError::Spawn {
                tool: self.ffprobe_path.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!(status = %output.status, stderr = %stderr, "ffprobe failed");
            return Err(MediaError::ToolFailed {
                tool: self.ffprobe_path.clone(),
                status: output.status,
                stderr,
            });
        }

        let dimensions = parse_probe_output(&output.stdout)?;
        debug!(
            width = dimensions.width,
            height = dimensions.height,
            "Probed media dimensions"
        );
        Ok(dimensions)
    }
}
