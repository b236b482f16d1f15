use std::path::Path;

use async_trait::async_trait;
use reqwest::{multipart, Client};
use shared::{error::ErrorBody, protocol::AnalysisResult};
use tracing::{debug, info, warn};
use url::Url;

pub mod config;
pub mod error;
pub mod form;
pub mod render;

pub use config::{load_settings, ClientSettings, SettingsError};
pub use error::AnalyzeError;
pub use form::{
    DispatchError, FilePicker, FileSource, FormController, FormView, RequestState,
    SelectedFile, SubmitDispatcher, SubmitOutcome,
};
pub use render::{render_analysis, ResultsPanel, SectionRow, UiUpdate};

/// Multipart field name the analysis endpoint reads the file from.
pub const RESUME_FIELD: &str = "resume";

#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub filename: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait AnalysisTransport: Send + Sync {
    async fn analyze(&self, upload: ResumeUpload) -> Result<AnalysisResult, AnalyzeError>;
}

/// Reads a resume from disk. Files over `limit` bytes are refused from their
/// metadata, before any contents are loaded.
pub async fn read_resume_file(path: &Path, limit: u64) -> Result<Vec<u8>, AnalyzeError> {
    let size = tokio::fs::metadata(path).await?.len();
    if size > limit {
        warn!(path = %path.display(), size, limit, "resume file exceeds upload limit");
        return Err(AnalyzeError::TooLarge { size, limit });
    }
    Ok(tokio::fs::read(path).await?)
}

pub struct UploadClient {
    http: Client,
    upload_url: Url,
    max_upload_bytes: u64,
}

impl UploadClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, AnalyzeError> {
        let http = Client::builder()
            .timeout(settings.request_timeout())
            .build()?;
        Ok(Self {
            http,
            upload_url: settings.upload_url()?,
            max_upload_bytes: settings.max_upload_bytes,
        })
    }

    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }

    fn build_form(upload: ResumeUpload) -> Result<multipart::Form, AnalyzeError> {
        let mut part = multipart::Part::bytes(upload.bytes).file_name(upload.filename);
        if let Some(mime_type) = upload.mime_type.as_deref() {
            part = part.mime_str(mime_type)?;
        }
        Ok(multipart::Form::new().part(RESUME_FIELD, part))
    }
}

#[async_trait]
impl AnalysisTransport for UploadClient {
    async fn analyze(&self, upload: ResumeUpload) -> Result<AnalysisResult, AnalyzeError> {
        let size = upload.bytes.len() as u64;
        if size > self.max_upload_bytes {
            return Err(AnalyzeError::TooLarge {
                size,
                limit: self.max_upload_bytes,
            });
        }

        info!(filename = %upload.filename, size, "uploading resume for analysis");
        let form = Self::build_form(upload)?;
        let response = self
            .http
            .post(self.upload_url.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            let error: ErrorBody = serde_json::from_slice(&body)?;
            let message = error.message_or_default();
            warn!(status = status.as_u16(), %message, "analysis server rejected upload");
            return Err(AnalyzeError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let result: AnalysisResult = serde_json::from_slice(&body)?;
        debug!(word_count = result.word_count, "analysis result decoded");
        Ok(result)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
