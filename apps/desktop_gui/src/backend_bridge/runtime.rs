//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{
    read_resume_file, AnalysisTransport, AnalyzeError, FileSource, ResumeUpload, SelectedFile,
};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    transport: Arc<dyn AnalysisTransport>,
    max_upload_bytes: u64,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::AnalyzeResume { request_id, file } => {
                        tracing::info!(
                            request_id = request_id.0,
                            filename = %file.name,
                            "backend: analyze_resume"
                        );
                        let result = match read_upload(file, max_upload_bytes).await {
                            Ok(upload) => transport.analyze(upload).await,
                            Err(err) => Err(err),
                        };

                        let event = match result {
                            Ok(result) => UiEvent::AnalysisCompleted { request_id, result },
                            Err(err) => {
                                tracing::error!(
                                    request_id = request_id.0,
                                    status = err.status(),
                                    "backend: analyze_resume failed: {err}"
                                );
                                UiEvent::AnalysisFailed {
                                    request_id,
                                    error: UiError::from_analyze_error(
                                        UiErrorContext::Analysis,
                                        &err,
                                    ),
                                }
                            }
                        };
                        if ui_tx.send(event).is_err() {
                            tracing::debug!("ui event receiver dropped; stopping backend worker");
                            break;
                        }
                    }
                    BackendCommand::Shutdown => {
                        tracing::info!("backend: shutdown");
                        break;
                    }
                }
            }
        });
    })
}

pub(crate) async fn read_upload(
    file: SelectedFile,
    max_upload_bytes: u64,
) -> Result<ResumeUpload, AnalyzeError> {
    let mime_type = mime_guess::from_path(&file.name)
        .first_raw()
        .map(str::to_string);
    let bytes = match file.source {
        FileSource::Path(path) => read_resume_file(&path, max_upload_bytes).await?,
        FileSource::Bytes(bytes) => bytes.to_vec(),
    };
    Ok(ResumeUpload {
        filename: file.name,
        mime_type,
        bytes,
    })
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
