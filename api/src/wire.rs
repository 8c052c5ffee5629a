//! Response bodies exchanged with the analysis backend.

use serde::{Deserialize, Serialize};

use crate::error::UploadError;

/// Body returned by a successful analysis. Every field defaults so a body
/// with `success: false` (or a rejection body on a 2xx) still decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub total_columns: u64,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub na_values: Vec<u64>,
    #[serde(default)]
    pub result: String,
}

/// Structured error body: the message is meant for the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionBody {
    #[serde(rename = "Empty")]
    pub empty: String,
}

/// Terminal result of one upload attempt.
#[derive(Debug)]
pub enum UploadOutcome {
    Success(AnalysisResponse),
    Rejected(String),
    Failed(UploadError),
}
