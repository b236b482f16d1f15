use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiErrorCategory, UiEvent};
use crate::controller::orchestration::{dispatch_backend_command, ChannelDispatcher};
use crate::ui::view::{FormViewModel, RfdPicker};
use client_core::{FormController, SelectedFile};

const DROP_HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(76, 175, 80);
const SECTION_FOUND: egui::Color32 = egui::Color32::from_rgb(76, 175, 80);
const SECTION_MISSING: egui::Color32 = egui::Color32::from_rgb(229, 57, 53);
const WARNING_FILL: egui::Color32 = egui::Color32::from_rgb(255, 243, 205);
const WARNING_TEXT: egui::Color32 = egui::Color32::from_rgb(133, 100, 4);

type UploadForm = FormController<FormViewModel, RfdPicker, ChannelDispatcher>;

fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Server => "Server",
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

pub(crate) fn selected_from_dropped(file: &egui::DroppedFile) -> Option<SelectedFile> {
    if let Some(path) = &file.path {
        return SelectedFile::from_path(path);
    }
    file.bytes
        .as_ref()
        .map(|bytes| SelectedFile::from_bytes(file.name.clone(), bytes.clone()))
}

pub struct ResumeAnalyzerApp {
    form: UploadForm,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    server_url: String,
    status: String,
    files_hovering: bool,
}

impl ResumeAnalyzerApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        server_url: String,
    ) -> Self {
        Self {
            form: FormController::new(
                FormViewModel::default(),
                RfdPicker,
                ChannelDispatcher::new(cmd_tx.clone()),
            ),
            cmd_tx,
            ui_rx,
            server_url,
            status: "Backend worker starting...".to_string(),
            files_hovering: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::AnalysisCompleted { request_id, result } => {
                    if self.form.analysis_succeeded(request_id, result) {
                        self.status = "Analysis complete".to_string();
                    }
                }
                UiEvent::AnalysisFailed { request_id, error } => {
                    if self.form.analysis_failed(request_id, error.message()) {
                        self.status =
                            format!("{} error during analysis", err_label(error.category()));
                    }
                }
                UiEvent::Error(error) => {
                    self.status = format!("{} error", err_label(error.category()));
                    self.form.view_mut().push_alert(error.message());
                }
            }
        }
    }

    fn handle_file_drag(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.clone(),
            )
        });
        self.apply_file_drag(hovering, &dropped);
    }

    /// Hover changes toggle the highlight; a drop adopts only the first file.
    fn apply_file_drag(&mut self, hovering: bool, dropped: &[egui::DroppedFile]) {
        if let Some(first) = dropped.first() {
            let files = selected_from_dropped(first).into_iter().collect();
            self.form.drop_files(files);
            self.files_hovering = false;
        } else if hovering != self.files_hovering {
            if hovering {
                self.form.drag_over();
            } else {
                self.form.drag_leave();
            }
            self.files_hovering = hovering;
        }
    }

    fn show_upload_form(&mut self, ui: &mut egui::Ui) {
        let view = self.form.view();
        let file_label = view.file_label.clone();
        let highlighted = view.drop_highlight;
        let submit_enabled = view.submit_enabled;
        let loading = view.loading_visible;

        let (stroke_color, fill) = if highlighted {
            (DROP_HIGHLIGHT, DROP_HIGHLIGHT.gamma_multiply(0.05))
        } else {
            (
                ui.visuals().widgets.noninteractive.bg_stroke.color,
                egui::Color32::TRANSPARENT,
            )
        };

        let zone = egui::Frame::NONE
            .fill(fill)
            .stroke(egui::Stroke::new(2.0, stroke_color))
            .corner_radius(10.0)
            .inner_margin(egui::Margin::symmetric(16, 28))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("⬆").size(28.0));
                    ui.label("Drag & drop your resume here, or click to browse");
                    ui.weak("Supported formats: PDF, DOCX");
                    ui.add_space(6.0);
                    ui.label(egui::RichText::new(file_label).strong());
                });
            })
            .response
            .interact(egui::Sense::click());
        if zone.clicked() {
            self.form.drop_zone_clicked();
        }

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            let analyze = ui.add_enabled(
                submit_enabled,
                egui::Button::new("Analyze Resume").min_size(egui::vec2(160.0, 32.0)),
            );
            if analyze.clicked() {
                let outcome = self.form.submit();
                tracing::debug!(?outcome, "analyze clicked");
            }
        });

        if loading {
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Analyzing your resume...");
                });
            });
        }
    }

    fn show_results(&mut self, ui: &mut egui::Ui) {
        let mut reset_requested = false;
        let results = &self.form.view().results;

        ui.separator();
        ui.heading("Analysis Results");
        ui.horizontal(|ui| {
            ui.label("Word count:");
            ui.strong(&results.word_count);
        });

        if let Some(warning) = &results.length_warning {
            egui::Frame::NONE
                .fill(WARNING_FILL)
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(format!("⚠ {warning}")).color(WARNING_TEXT));
                });
        }

        ui.add_space(10.0);
        ui.strong("Sections");
        for row in &results.sections {
            ui.horizontal(|ui| {
                if row.present {
                    ui.label(egui::RichText::new(row.icon()).color(SECTION_FOUND));
                    ui.label(row.label);
                } else {
                    ui.label(egui::RichText::new(row.icon()).color(SECTION_MISSING));
                    ui.label(egui::RichText::new(row.label).color(SECTION_MISSING).weak());
                }
            });
        }

        ui.add_space(10.0);
        ui.strong("Skills");
        match &results.skills_placeholder {
            Some(placeholder) => {
                ui.label(placeholder);
            }
            None => {
                ui.horizontal_wrapped(|ui| {
                    for skill in &results.skill_tags {
                        egui::Frame::NONE
                            .fill(ui.visuals().faint_bg_color)
                            .stroke(egui::Stroke::new(1.0, DROP_HIGHLIGHT))
                            .corner_radius(12.0)
                            .inner_margin(egui::Margin::symmetric(8, 3))
                            .show(ui, |ui| {
                                ui.label(skill);
                            });
                    }
                });
            }
        }

        ui.add_space(10.0);
        ui.strong("Recommendations");
        for recommendation in &results.recommendations {
            ui.label(format!("• {recommendation}"));
        }

        ui.add_space(14.0);
        ui.vertical_centered(|ui| {
            if ui.button("New Analysis").clicked() {
                reset_requested = true;
            }
        });

        if reset_requested {
            self.form.reset();
            self.status = "Ready".to_string();
        }
    }

    fn show_alert_window(&mut self, ctx: &egui::Context) {
        let Some(message) = self.form.view().current_alert().map(str::to_string) else {
            return;
        };

        let mut acknowledged = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_max_width(360.0);
                ui.label(message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        acknowledged = true;
                    }
                });
            });

        if acknowledged {
            self.form.view_mut().dismiss_alert();
        }
    }
}

impl eframe::App for ResumeAnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.handle_file_drag(ctx);

        let alert_open = self.form.view().current_alert().is_some();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak(&self.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(&self.server_url);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!alert_open, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.heading("Resume Analyzer");
                            ui.weak(
                                "Upload your resume to get feedback on sections, skills, and length.",
                            );
                        });
                        ui.add_space(16.0);
                        self.show_upload_form(ui);
                        if self.form.view().results_visible {
                            self.show_results(ui);
                        }
                    });
            });
        });

        self.show_alert_window(ctx);

        if self.form.view().loading_visible {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}

impl Drop for ResumeAnalyzerApp {
    fn drop(&mut self) {
        let _ = dispatch_backend_command(&self.cmd_tx, BackendCommand::Shutdown);
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
