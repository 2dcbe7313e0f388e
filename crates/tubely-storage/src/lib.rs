//! Tubely Storage Library
//!
//! Storage abstraction with a local filesystem backend and an S3 backend.
//!
//! # Storage key format
//!
//! - **Thumbnails**: `{video_id}.{ext}` at the root of the assets directory
//! - **Videos**: `{orientation}/{random}.mp4`, where `random` is 32 bytes of
//!   CSPRNG output encoded as URL-safe base64 without padding
//!
//! Keys must not contain `..` or a leading `/`. Key generation is centralized in
//! the `keys` module so all backends stay consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::{create_asset_storage, create_video_storage};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
pub use tubely_core::StorageBackend;
