//! Seams around the external media tools.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::MediaError;
use crate::probe::{classify_aspect_ratio, AspectRatio, Dimensions};

/// Reads the pixel dimensions of a media file.
#[async_trait]
pub trait MediaProber: Send + Sync {
    /// Dimensions of the first stream in the file.
    async fn probe(&self, path: &Path) -> Result<Dimensions, MediaError>;

    /// Orientation class of the file's first stream.
    async fn aspect_ratio(&self, path: &Path) -> Result<AspectRatio, MediaError> {
        let dimensions = self.probe(path).await?;
        Ok(classify_aspect_ratio(dimensions.width, dimensions.height))
    }
}

/// Rewrites an MP4 so its index precedes the media data.
#[async_trait]
pub trait FastStartRemuxer: Send + Sync {
    /// Remux `path` into a sibling file and return the new path.
    ///
    /// The caller owns the output file, including on failure.
    async fn remux(&self, path: &Path) -> Result<PathBuf, MediaError>;
}
