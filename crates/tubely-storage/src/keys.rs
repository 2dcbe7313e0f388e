//! Shared key generation for storage backends.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use tubely_core::constants::VIDEO_KEY_RANDOM_BYTES;
use uuid::Uuid;

use crate::traits::{StorageError, StorageResult};

/// Key of the thumbnail for `video_id`: `{video_id}.{ext}`.
pub fn thumbnail_key(video_id: Uuid, extension: &str) -> String {
    format!("{}.{}", video_id, extension)
}

/// Fresh, unguessable key for a video: `{prefix}/{random}.mp4`.
pub fn video_key(prefix: &str) -> String {
    let mut random = [0u8; VIDEO_KEY_RANDOM_BYTES];
    rand::rng().fill_bytes(&mut random);
    format!("{}/{}.mp4", prefix, URL_SAFE_NO_PAD.encode(random))
}

/// Reject keys that could escape the storage root.
pub fn validate_key(storage_key: &str) -> StorageResult<()> {
    if storage_key.is_empty() || storage_key.contains("..") || storage_key.starts_with('/') {
        return Err(StorageError::InvalidKey(
            "Storage key contains invalid characters".to_string(),
        ));
    }
    Ok(())
}
