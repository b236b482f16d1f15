use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod controller;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{load_settings, UploadClient};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::ResumeAnalyzerApp;

#[derive(Debug, Parser)]
#[command(name = "resume-analyzer", about = "Desktop client for the resume analysis service")]
struct Args {
    /// Base URL of the analysis server, overriding config file and environment.
    #[arg(long)]
    server_url: Option<String>,

    /// TOML settings file (defaults to ./resume_client.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let settings = load_settings(args.config.as_deref())
        .context("failed to load client settings")?
        .with_server_url(args.server_url);
    let client = UploadClient::new(&settings).context("failed to build upload client")?;
    tracing::info!(
        upload_url = %client.upload_url(),
        timeout_secs = settings.request_timeout_secs,
        "starting resume analyzer"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(
        cmd_rx,
        ui_tx,
        Arc::new(client),
        settings.max_upload_bytes,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Resume Analyzer")
            .with_inner_size([760.0, 820.0])
            .with_min_inner_size([520.0, 560.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    let server_url = settings.server_url.clone();
    eframe::run_native(
        "Resume Analyzer",
        options,
        Box::new(move |_cc| Ok(Box::new(ResumeAnalyzerApp::new(cmd_tx, ui_rx, server_url)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop window failed: {err}"))
}
