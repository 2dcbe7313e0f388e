use crate::error::MediaError;

/// Reject tool paths that could smuggle shell syntax or traverse directories.
pub(crate) fn validate_tool_path(path: &str) -> Result<(), MediaError> {
    if path.is_empty() {
        return Err(MediaError::InvalidPath("path is empty".to_string()));
    }

    let dangerous_chars = [';', '|', '&', '$', '`', '(', ')', '<', '>', '\n', '\r'];
    if path.chars().any(|c| dangerous_chars.contains(&c)) {
        return Err(MediaError::InvalidPath(format!(
            "path contains dangerous characters: {}",
            path
        )));
    }

    if path.contains("..") {
        return Err(MediaError::InvalidPath(format!(
            "path contains directory traversal: {}",
            path
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_and_absolute_paths() {
        assert!(validate_tool_path("ffprobe").is_ok());
        assert!(validate_tool_path("/usr/local/bin/ffmpeg").is_ok());
        assert!(validate_tool_path("C:\\ffmpeg\\bin\\ffmpeg.exe").is_ok());
        assert!(validate_tool_path("/opt/My Tools/ffmpeg").is_ok());
    }

    #[test]
    fn test_rejects_shell_syntax() {
        assert!(validate_tool_path("ffmpeg; rm -rf /").is_err());
        assert!(validate_tool_path("$(which ffmpeg)").is_err());
        assert!(validate_tool_path("ffmpeg | tee out").is_err());
        assert!(validate_tool_path("ffmpeg\n-version").is_err());
    }

    #[test]
    fn test_rejects_traversal_and_empty() {
        assert!(validate_tool_path("../bin/ffmpeg").is_err());
        assert!(validate_tool_path("").is_err());
    }
}
