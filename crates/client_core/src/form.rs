//! Upload form controller.
//!
//! The controller owns the selection and request state; everything visible
//! goes through an injected [`FormView`], file picking through a
//! [`FilePicker`] and the network hand-off through a [`SubmitDispatcher`].

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use shared::{
    domain::{RequestId, ResumeFormat},
    messages::{
        FILE_NAME_PLACEHOLDER, GENERIC_ANALYSIS_ERROR, NO_FILE_SELECTED, UNSUPPORTED_FORMAT,
    },
    protocol::AnalysisResult,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::render::{render_analysis, UiUpdate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    Path(PathBuf),
    Bytes(Arc<[u8]>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub source: FileSource,
}

impl SelectedFile {
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let name = path.file_name()?.to_string_lossy().into_owned();
        Some(Self {
            name,
            source: FileSource::Path(path.to_path_buf()),
        })
    }

    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            source: FileSource::Bytes(bytes.into()),
        }
    }
}

pub trait FormView {
    fn set_file_label(&mut self, label: &str);
    fn set_submit_enabled(&mut self, enabled: bool);
    fn set_drop_highlight(&mut self, highlighted: bool);
    fn set_loading_visible(&mut self, visible: bool);
    fn set_results_visible(&mut self, visible: bool);
    fn apply_results(&mut self, updates: Vec<UiUpdate>);
    /// Blocking notice; the user has to acknowledge it.
    fn alert(&mut self, message: &str);
}

pub trait FilePicker {
    /// Empty when the user cancels.
    fn pick_files(&mut self) -> Vec<SelectedFile>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("Analysis queue is full; please retry.")]
    QueueFull,
    #[error("Analysis worker is unavailable; restart the application and retry.")]
    Disconnected,
}

pub trait SubmitDispatcher {
    fn dispatch(&mut self, request_id: RequestId, file: SelectedFile) -> Result<(), DispatchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    InFlight(RequestId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Dispatched(RequestId),
    Rejected(&'static str),
    Busy,
    DispatchFailed(DispatchError),
}

pub struct FormController<V, P, D> {
    view: V,
    picker: P,
    dispatcher: D,
    selected: Option<SelectedFile>,
    request: RequestState,
    next_request_id: u64,
}

impl<V, P, D> FormController<V, P, D>
where
    V: FormView,
    P: FilePicker,
    D: SubmitDispatcher,
{
    pub fn new(mut view: V, picker: P, dispatcher: D) -> Self {
        view.set_file_label(FILE_NAME_PLACEHOLDER);
        view.set_submit_enabled(false);
        view.set_drop_highlight(false);
        view.set_loading_visible(false);
        view.set_results_visible(false);
        Self {
            view,
            picker,
            dispatcher,
            selected: None,
            request: RequestState::Idle,
            next_request_id: 1,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn request_state(&self) -> RequestState {
        self.request
    }

    /// File input change: the first file wins, an empty list clears the selection.
    pub fn files_selected(&mut self, files: Vec<SelectedFile>) {
        self.adopt(files.into_iter().next());
    }

    pub fn drag_over(&mut self) {
        self.view.set_drop_highlight(true);
    }

    pub fn drag_leave(&mut self) {
        self.view.set_drop_highlight(false);
    }

    /// An empty drop keeps the current selection.
    pub fn drop_files(&mut self, files: Vec<SelectedFile>) {
        self.view.set_drop_highlight(false);
        if let Some(first) = files.into_iter().next() {
            debug!(filename = %first.name, "file dropped on upload zone");
            self.adopt(Some(first));
        }
    }

    pub fn drop_zone_clicked(&mut self) {
        let files = self.picker.pick_files();
        if !files.is_empty() {
            self.files_selected(files);
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if let RequestState::InFlight(request_id) = self.request {
            debug!(%request_id, "submit ignored while analysis is in flight");
            return SubmitOutcome::Busy;
        }

        let Some(file) = self.selected.clone() else {
            self.view.alert(NO_FILE_SELECTED);
            return SubmitOutcome::Rejected(NO_FILE_SELECTED);
        };

        if let Err(err) = ResumeFormat::from_file_name(&file.name) {
            warn!(filename = %file.name, extension = %err.extension, "unsupported resume format");
            self.view.alert(&err.to_string());
            self.adopt(None);
            return SubmitOutcome::Rejected(UNSUPPORTED_FORMAT);
        }

        self.view.set_loading_visible(true);
        self.view.set_results_visible(false);

        let request_id = RequestId(self.next_request_id);
        self.next_request_id += 1;
        self.request = RequestState::InFlight(request_id);
        info!(%request_id, filename = %file.name, "submitting resume for analysis");

        match self.dispatcher.dispatch(request_id, file) {
            Ok(()) => SubmitOutcome::Dispatched(request_id),
            Err(err) => {
                warn!(%request_id, "failed to dispatch analysis: {err}");
                self.request = RequestState::Idle;
                self.view.set_loading_visible(false);
                self.view.alert(&err.to_string());
                SubmitOutcome::DispatchFailed(err)
            }
        }
    }

    /// Returns false when the completion belongs to a superseded request.
    pub fn analysis_succeeded(&mut self, request_id: RequestId, result: AnalysisResult) -> bool {
        if !self.finish(request_id) {
            return false;
        }
        self.view.set_loading_visible(false);
        self.view.set_results_visible(true);
        self.view.apply_results(render_analysis(&result));
        true
    }

    pub fn analysis_failed(&mut self, request_id: RequestId, message: &str) -> bool {
        if !self.finish(request_id) {
            return false;
        }
        self.view.set_loading_visible(false);
        if message.trim().is_empty() {
            self.view.alert(GENERIC_ANALYSIS_ERROR);
        } else {
            self.view.alert(message);
        }
        true
    }

    /// "New analysis": back to an empty form. A response still in flight is dropped.
    pub fn reset(&mut self) {
        self.request = RequestState::Idle;
        self.view.set_results_visible(false);
        self.view.set_loading_visible(false);
        self.view.set_drop_highlight(false);
        self.adopt(None);
    }

    fn adopt(&mut self, file: Option<SelectedFile>) {
        match &file {
            Some(file) => {
                self.view.set_file_label(&file.name);
                self.view.set_submit_enabled(true);
            }
            None => {
                self.view.set_file_label(FILE_NAME_PLACEHOLDER);
                self.view.set_submit_enabled(false);
            }
        }
        self.selected = file;
    }

    fn finish(&mut self, request_id: RequestId) -> bool {
        if self.request != RequestState::InFlight(request_id) {
            debug!(%request_id, state = ?self.request, "dropping stale analysis completion");
            return false;
        }
        self.request = RequestState::Idle;
        true
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
