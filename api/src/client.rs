use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info, warn};

use crate::config::UploadConfig;
use crate::error::UploadError;
use crate::wire::{AnalysisResponse, RejectionBody, UploadOutcome};

/// Multipart field the backend reads the dataset from.
const FILE_FIELD: &str = "file";

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A picked file, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new<T: Into<String>>(name: T, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadClient {
    http: reqwest::Client,
    config: UploadConfig,
}

impl UploadClient {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Send one file to the analysis endpoint. Never retries.
    pub async fn upload(&self, file: UploadFile, token: Option<&str>) -> UploadOutcome {
        let name = file.name.clone();
        match self.try_upload(file, token).await {
            Ok(outcome) => {
                match &outcome {
                    UploadOutcome::Success(resp) => info!(
                        file = %name,
                        rows = resp.total_rows,
                        columns = resp.total_columns,
                        "analysis received"
                    ),
                    UploadOutcome::Rejected(message) => {
                        info!(file = %name, %message, "upload rejected by server")
                    }
                    UploadOutcome::Failed(err) => warn!(file = %name, error = %err, "upload failed"),
                }
                outcome
            }
            Err(err) => {
                warn!(file = %name, error = %err, "upload failed");
                UploadOutcome::Failed(err)
            }
        }
    }

    async fn try_upload(
        &self,
        file: UploadFile,
        token: Option<&str>,
    ) -> Result<UploadOutcome, UploadError> {
        let content_type = content_type_for(&file.name);
        debug!(
            endpoint = %self.config.endpoint,
            file = %file.name,
            bytes = file.bytes.len(),
            content_type,
            "posting dataset"
        );

        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(content_type)
            .map_err(UploadError::InvalidContentType)?;
        let form = Form::new().part(FILE_FIELD, part);

        let mut request = self.http.post(&self.config.endpoint).multipart(form);
        match token {
            Some(token) => request = request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => debug!("no session token available; sending without Authorization"),
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        interpret_response(status, &body)
    }
}

/// Classify a backend response into an outcome.
///
/// A `{ "Empty": .. }` body with a non-blank message is a rejection whatever
/// the status. Any other non-2xx status, an undecodable 2xx body, or
/// `success: false` is an error.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<UploadOutcome, UploadError> {
    if let Ok(rejection) = serde_json::from_slice::<RejectionBody>(body) {
        if !rejection.empty.trim().is_empty() {
            return Ok(UploadOutcome::Rejected(rejection.empty));
        }
    }

    if !(200..300).contains(&status) {
        return Err(UploadError::Status { status });
    }

    let parsed: AnalysisResponse = serde_json::from_slice(body)?;
    if parsed.success {
        Ok(UploadOutcome::Success(parsed))
    } else {
        Err(UploadError::Unsuccessful)
    }
}

/// MIME type for the multipart part, picked from the file extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => "text/csv",
        "xlsx" => XLSX_MIME,
        _ => "application/octet-stream",
    }
}
