use serde::{Deserialize, Serialize};

use crate::messages::UNKNOWN_SERVER_ERROR;

/// Body the analysis server sends alongside a non-2xx status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    pub fn message_or_default(&self) -> String {
        match self.error.as_deref() {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => UNKNOWN_SERVER_ERROR.to_string(),
        }
    }
}
