use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    load_settings, read_resume_file, AnalysisTransport, ResultsPanel, ResumeUpload, UploadClient,
};
use shared::{domain::ResumeFormat, protocol::AnalysisResult};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "resume-check", about = "Upload a resume and print its analysis")]
struct Args {
    /// Base URL of the analysis server, overriding config file and environment.
    #[arg(long)]
    server_url: Option<String>,

    /// TOML settings file (defaults to ./resume_client.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the raw analysis JSON instead of the formatted report.
    #[arg(long)]
    json: bool,

    /// PDF or DOCX resume to analyze.
    file: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<String> {
    let settings = load_settings(args.config.as_deref())
        .context("failed to load client settings")?
        .with_server_url(args.server_url);
    let upload = read_resume(&args.file, settings.max_upload_bytes).await?;
    let client = UploadClient::new(&settings).context("failed to build upload client")?;

    tracing::info!(
        upload_url = %client.upload_url(),
        filename = %upload.filename,
        "analyzing resume"
    );
    let result = client
        .analyze(upload)
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message()))?;
    format_report(&result, args.json)
}

async fn read_resume(path: &Path, max_upload_bytes: u64) -> Result<ResumeUpload> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("{} is not a file path", path.display()))?;
    let format = ResumeFormat::from_file_name(&filename)?;
    let bytes = read_resume_file(path, max_upload_bytes)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(ResumeUpload {
        filename,
        mime_type: Some(format.mime_type().to_string()),
        bytes,
    })
}

fn format_report(result: &AnalysisResult, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(result).context("failed to encode analysis as JSON");
    }
    Ok(ResultsPanel::from_result(result).to_text())
}
