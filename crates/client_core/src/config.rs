use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "resume_client.toml";

/// Mirrors the analysis server's 16 MiB request cap.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_url: String,
    pub request_timeout_secs: u64,
    pub max_upload_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".into(),
            request_timeout_secs: 120,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
    #[error("invalid server url '{url}': {source}")]
    InvalidServerUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    request_timeout_secs: Option<u64>,
    max_upload_bytes: Option<u64>,
}

impl ClientSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Absolute URL of the analysis endpoint.
    pub fn upload_url(&self) -> Result<Url, SettingsError> {
        let base = parse_server_url(&self.server_url)?;
        base.join("upload")
            .map_err(|source| SettingsError::InvalidServerUrl {
                url: self.server_url.clone(),
                source,
            })
    }

    pub fn with_server_url(mut self, server_url: Option<String>) -> Self {
        if let Some(url) = server_url {
            self.server_url = url;
        }
        self
    }
}

/// Defaults, then the TOML file, then environment overrides.
///
/// An explicit `path` must exist; the default file is optional.
pub fn load_settings(path: Option<&Path>) -> Result<ClientSettings, SettingsError> {
    let mut settings = ClientSettings::default();

    match path {
        Some(path) => apply_file(&mut settings, path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                apply_file(&mut settings, default_path)?;
            }
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok())?;
    validate(&settings)?;
    Ok(settings)
}

/// A zero timeout fails every request and a zero limit refuses every file.
pub(crate) fn validate(settings: &ClientSettings) -> Result<(), SettingsError> {
    if settings.request_timeout_secs == 0 {
        return Err(SettingsError::InvalidValue {
            name: "request_timeout_secs",
            value: "0".to_string(),
        });
    }
    if settings.max_upload_bytes == 0 {
        return Err(SettingsError::InvalidValue {
            name: "max_upload_bytes",
            value: "0".to_string(),
        });
    }
    parse_server_url(&settings.server_url)?;
    Ok(())
}

fn apply_file(settings: &mut ClientSettings, path: &Path) -> Result<(), SettingsError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file_cfg: FileSettings = toml::from_str(&raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(v) = file_cfg.server_url {
        settings.server_url = v;
    }
    if let Some(v) = file_cfg.request_timeout_secs {
        settings.request_timeout_secs = v;
    }
    if let Some(v) = file_cfg.max_upload_bytes {
        settings.max_upload_bytes = v;
    }
    Ok(())
}

pub(crate) fn apply_env_overrides(
    settings: &mut ClientSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), SettingsError> {
    if let Some(v) = lookup("RESUME_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = lookup("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        settings.request_timeout_secs = parse_number("APP__REQUEST_TIMEOUT_SECS", v)?;
    }
    if let Some(v) = lookup("APP__MAX_UPLOAD_BYTES") {
        settings.max_upload_bytes = parse_number("APP__MAX_UPLOAD_BYTES", v)?;
    }
    Ok(())
}

fn parse_number(name: &'static str, value: String) -> Result<u64, SettingsError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SettingsError::InvalidValue { name, value }),
    }
}

/// Base URLs are treated as directories so `join` keeps any path prefix.
fn parse_server_url(raw: &str) -> Result<Url, SettingsError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).map_err(|source| SettingsError::InvalidServerUrl {
        url: raw.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
