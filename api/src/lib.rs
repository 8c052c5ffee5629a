//! HTTP client for the dataset analysis backend.
//!
//! The UI hands a picked file to [`UploadClient::upload`] and gets back an
//! [`UploadOutcome`], which always resolves to one of three terminal shapes:
//! a parsed analysis, a server-authored rejection message, or a failure.

mod client;
mod config;
mod error;
mod wire;

pub use client::{content_type_for, interpret_response, UploadClient, UploadFile};
pub use config::{UploadConfig, DEFAULT_UPLOAD_URL};
pub use error::UploadError;
pub use wire::{AnalysisResponse, RejectionBody, UploadOutcome};
