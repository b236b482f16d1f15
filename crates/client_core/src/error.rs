use shared::messages::{GENERIC_ANALYSIS_ERROR, REQUEST_TIMED_OUT};
use thiserror::Error;

use crate::config::SettingsError;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Non-2xx answer; `message` is the server's `error` field or the unknown-error fallback.
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("{}", REQUEST_TIMED_OUT)]
    Timeout,
    #[error("failed to reach analysis server: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("malformed response from analysis server: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("file is {size} bytes; the upload limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },
    #[error("failed to read resume file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl From<reqwest::Error> for AnalyzeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err)
        }
    }
}

impl AnalyzeError {
    /// Text shown to the user when an analysis fails.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ANALYSIS_ERROR.to_string()
        } else {
            message
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
