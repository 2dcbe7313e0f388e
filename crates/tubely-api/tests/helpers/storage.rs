use async_trait::async_trait;
use bytes::Bytes;
use std::path::Path;
use tubely_storage::{Storage, StorageBackend, StorageError, StorageResult};

/// Video store whose every write fails, as if the bucket were unreachable
pub struct UnreachableStorage;

#[async_trait]
impl Storage for UnreachableStorage {
    async fn upload_with_key(
        &self,
        storage_key: &str,
        _data: Bytes,
        _content_type: &str,
    ) -> StorageResult<String> {
        Err(StorageError::UploadFailed(format!(
            "bucket unreachable for {}",
            storage_key
        )))
    }

    async fn upload_file(
        &self,
        storage_key: &str,
        path: &Path,
        _content_type: &str,
    ) -> StorageResult<String> {
        assert!(path.exists(), "upload source must exist");
        Err(StorageError::UploadFailed(format!(
            "bucket unreachable for {}",
            storage_key
        )))
    }

    fn url_for(&self, storage_key: &str) -> String {
        format!("https://unreachable.invalid/{}", storage_key)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
