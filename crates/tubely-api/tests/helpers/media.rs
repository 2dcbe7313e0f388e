use async_trait::async_trait;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::sync::Mutex;
use tubely_processing::{fast_start_path, Dimensions, FastStartRemuxer, MediaError, MediaProber};

/// Reports fixed dimensions, or `NoStreams` when none are configured
pub struct FakeProber {
    pub dimensions: Option<Dimensions>,
}

#[async_trait]
impl MediaProber for FakeProber {
    async fn probe(&self, path: &Path) -> Result<Dimensions, MediaError> {
        assert!(path.exists(), "probed file must exist");
        self.dimensions.ok_or(MediaError::NoStreams)
    }
}

/// Copies the input to its fast-start path and remembers both paths.
/// A failing remuxer leaves a partial output behind and exits non-zero, like
/// an ffmpeg run that dies mid-write.
#[derive(Default)]
pub struct FakeRemuxer {
    seen: Mutex<Vec<(PathBuf, PathBuf)>>,
    fail: bool,
}

impl FakeRemuxer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Every (input, output) pair remuxed so far
    pub fn seen(&self) -> Vec<(PathBuf, PathBuf)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl FastStartRemuxer for FakeRemuxer {
    async fn remux(&self, path: &Path) -> Result<PathBuf, MediaError> {
        let output = fast_start_path(path);
        self.seen
            .lock()
            .unwrap()
            .push((path.to_path_buf(), output.clone()));

        if self.fail {
            tokio::fs::write(&output, b"ftyp partial")
                .await
                .expect("write partial output");
            return Err(MediaError::ToolFailed {
                tool: "ffmpeg".to_string(),
                status: ExitStatus::from_raw(1 << 8),
                stderr: "moov atom not found".to_string(),
            });
        }

        tokio::fs::copy(path, &output)
            .await
            .map_err(|source| MediaError::Spawn {
                tool: "fake-remuxer".to_string(),
                source,
            })?;
        Ok(output)
    }
}
