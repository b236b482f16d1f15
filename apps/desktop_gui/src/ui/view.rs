use std::collections::VecDeque;

use client_core::{FilePicker, FormView, ResultsPanel, SelectedFile, UiUpdate};
use shared::domain::ResumeFormat;

/// Everything the window draws for the upload form, written only through [`FormView`].
#[derive(Debug, Default)]
pub struct FormViewModel {
    pub file_label: String,
    pub submit_enabled: bool,
    pub drop_highlight: bool,
    pub loading_visible: bool,
    pub results_visible: bool,
    pub results: ResultsPanel,
    alerts: VecDeque<String>,
}

impl FormViewModel {
    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    pub fn push_alert(&mut self, message: impl Into<String>) {
        self.alerts.push_back(message.into());
    }
}

impl FormView for FormViewModel {
    fn set_file_label(&mut self, label: &str) {
        self.file_label = label.to_string();
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn set_drop_highlight(&mut self, highlighted: bool) {
        self.drop_highlight = highlighted;
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.loading_visible = visible;
    }

    fn set_results_visible(&mut self, visible: bool) {
        self.results_visible = visible;
    }

    fn apply_results(&mut self, updates: Vec<UiUpdate>) {
        self.results.apply_all(updates);
    }

    fn alert(&mut self, message: &str) {
        self.push_alert(message);
    }
}

/// Native file dialog limited to resume formats.
pub struct RfdPicker;

fn default_upload_dir() -> Option<std::path::PathBuf> {
    dirs::document_dir()
        .or_else(dirs::download_dir)
        .or_else(dirs::desktop_dir)
        .or_else(dirs::home_dir)
}

impl FilePicker for RfdPicker {
    fn pick_files(&mut self) -> Vec<SelectedFile> {
        let extensions = ResumeFormat::all().map(ResumeFormat::extension);
        let mut dialog = rfd::FileDialog::new().add_filter("Resume (PDF, DOCX)", &extensions);
        if let Some(dir) = default_upload_dir() {
            dialog = dialog.set_directory(dir);
        }
        dialog
            .pick_file()
            .and_then(SelectedFile::from_path)
            .into_iter()
            .collect()
    }
}
