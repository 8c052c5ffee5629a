use thiserror::Error;

/// Failures that the backend did not describe with a `{ "Empty": ... }` body.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid content type for upload part")]
    InvalidContentType(#[source] reqwest::Error),
    #[error("server responded with status {status}")]
    Status { status: u16 },
    #[error("server response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("server did not report a successful analysis")]
    Unsuccessful,
}
