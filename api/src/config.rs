//! Endpoint configuration for the upload client.

/// Analysis endpoint used when the launcher does not provide one.
pub const DEFAULT_UPLOAD_URL: &str = "http://127.0.0.1:8000/api/upload/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub endpoint: String,
}

impl UploadConfig {
    pub fn new<T: Into<String>>(endpoint: T) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self::new(DEFAULT_UPLOAD_URL)
    }
}
