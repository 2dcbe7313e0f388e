use bytes::Bytes;

/// An uploaded thumbnail image, held in memory for the duration of a request.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub data: Bytes,
    pub media_type: String,
}

impl Thumbnail {
    /// File extension for the stored image, `None` for unsupported media types.
    pub fn extension(&self) -> Option<&'static str> {
        match self.media_type.as_str() {
            "image/jpeg" => Some("jpg"),
            "image/png" => Some("png"),
            _ => None,
        }
    }
}
