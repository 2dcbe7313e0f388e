//! Application-wide constants.

/// Issuer claim carried by every access token.
pub const JWT_ISSUER: &str = "tubely-access";

/// Multipart field carrying a thumbnail image.
pub const THUMBNAIL_FIELD: &str = "thumbnail";

/// Multipart field carrying a video file.
pub const VIDEO_FIELD: &str = "video";

/// Content type stored with every uploaded video object.
pub const VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// Thumbnail media types accepted by the upload handler.
pub const THUMBNAIL_CONTENT_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Number of random bytes behind every video object key.
pub const VIDEO_KEY_RANDOM_BYTES: usize = 32;
