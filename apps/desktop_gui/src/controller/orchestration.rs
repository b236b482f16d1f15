//! Command orchestration helpers from UI actions to backend command queue.

use client_core::{DispatchError, SelectedFile, SubmitDispatcher};
use crossbeam_channel::{Sender, TrySendError};
use shared::domain::RequestId;

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), DispatchError> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err(DispatchError::QueueFull)
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            Err(DispatchError::Disconnected)
        }
    }
}

/// Hands form submissions to the backend worker.
pub struct ChannelDispatcher {
    cmd_tx: Sender<BackendCommand>,
}

impl ChannelDispatcher {
    pub fn new(cmd_tx: Sender<BackendCommand>) -> Self {
        Self { cmd_tx }
    }
}

impl SubmitDispatcher for ChannelDispatcher {
    fn dispatch(&mut self, request_id: RequestId, file: SelectedFile) -> Result<(), DispatchError> {
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::AnalyzeResume { request_id, file },
        )
    }
}
