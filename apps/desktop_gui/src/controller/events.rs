//! UI/backend events and error modeling for the desktop controller.

use client_core::AnalyzeError;
use shared::{domain::RequestId, protocol::AnalysisResult};

pub enum UiEvent {
    Info(String),
    AnalysisCompleted {
        request_id: RequestId,
        result: AnalysisResult,
    },
    AnalysisFailed {
        request_id: RequestId,
        error: UiError,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Server,
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Analysis,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_analyze_error(context: UiErrorContext, err: &AnalyzeError) -> Self {
        let category = match err {
            AnalyzeError::Server { .. } => UiErrorCategory::Server,
            AnalyzeError::Timeout | AnalyzeError::Transport(_) => UiErrorCategory::Transport,
            AnalyzeError::TooLarge { .. } | AnalyzeError::Settings(_) => {
                UiErrorCategory::Validation
            }
            AnalyzeError::Decode(_) | AnalyzeError::Io(_) => UiErrorCategory::Unknown,
        };
        Self {
            category,
            context,
            message: err.user_message(),
        }
    }

    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("unsupported")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("unavailable")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_keep_server_text() {
        let err = AnalyzeError::Server {
            status: 400,
            message: "Could not extract text from the file".to_string(),
        };
        let ui_error = UiError::from_analyze_error(UiErrorContext::Analysis, &err);
        assert_eq!(ui_error.category(), UiErrorCategory::Server);
        assert_eq!(ui_error.context(), UiErrorContext::Analysis);
        assert_eq!(ui_error.message(), "Could not extract text from the file");
    }

    #[test]
    fn timeouts_are_transport_errors() {
        let ui_error =
            UiError::from_analyze_error(UiErrorContext::Analysis, &AnalyzeError::Timeout);
        assert_eq!(ui_error.category(), UiErrorCategory::Transport);
        assert_eq!(
            ui_error.message(),
            "The analysis request timed out. Please try again."
        );
    }

    #[test]
    fn startup_messages_are_classified_by_text() {
        let ui_error = UiError::from_message(
            UiErrorContext::BackendStartup,
            "backend worker startup failure: invalid server url",
        );
        assert_eq!(ui_error.category(), UiErrorCategory::Validation);

        let ui_error = UiError::from_message(UiErrorContext::BackendStartup, "something odd");
        assert_eq!(ui_error.category(), UiErrorCategory::Unknown);
    }
}
