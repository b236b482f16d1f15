//! Backend commands queued from UI to backend worker.

use client_core::SelectedFile;
use shared::domain::RequestId;

pub enum BackendCommand {
    AnalyzeResume {
        request_id: RequestId,
        file: SelectedFile,
    },
    Shutdown,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::AnalyzeResume { .. } => "analyze_resume",
            BackendCommand::Shutdown => "shutdown",
        }
    }
}
