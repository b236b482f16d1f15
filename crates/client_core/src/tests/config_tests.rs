use super::*;
use std::{collections::HashMap, io::Write};

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_point_at_local_analysis_server() {
    let settings = ClientSettings::default();
    assert_eq!(settings.server_url, "http://127.0.0.1:5000");
    assert_eq!(settings.request_timeout(), Duration::from_secs(120));
    assert_eq!(settings.max_upload_bytes, 16 * 1024 * 1024);
    assert_eq!(
        settings.upload_url().expect("url").as_str(),
        "http://127.0.0.1:5000/upload"
    );
}

#[test]
fn explicit_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "server_url = \"https://resumes.example.com/\"\nrequest_timeout_secs = 30"
    )
    .expect("write config");

    let mut settings = ClientSettings::default();
    apply_file(&mut settings, file.path()).expect("apply file");

    assert_eq!(settings.server_url, "https://resumes.example.com/");
    assert_eq!(settings.request_timeout_secs, 30);
    assert_eq!(settings.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    assert_eq!(
        settings.upload_url().expect("url").as_str(),
        "https://resumes.example.com/upload"
    );
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_settings(Some(dir.path().join("absent.toml").as_path()))
        .expect_err("missing file");
    assert!(matches!(err, SettingsError::Read { .. }));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "request_timeout_secs = \"soon\"").expect("write config");

    let mut settings = ClientSettings::default();
    let err = apply_file(&mut settings, file.path()).expect_err("parse error");
    assert!(matches!(err, SettingsError::Parse { .. }));
}

#[test]
fn app_prefixed_env_wins_over_legacy_name() {
    let mut settings = ClientSettings::default();
    apply_env_overrides(
        &mut settings,
        lookup_from(&[
            ("RESUME_SERVER_URL", "http://legacy:5000"),
            ("APP__SERVER_URL", "http://preferred:5000"),
            ("APP__REQUEST_TIMEOUT_SECS", " 15 "),
            ("APP__MAX_UPLOAD_BYTES", "1024"),
        ]),
    )
    .expect("env overrides");

    assert_eq!(settings.server_url, "http://preferred:5000");
    assert_eq!(settings.request_timeout_secs, 15);
    assert_eq!(settings.max_upload_bytes, 1024);
}

#[test]
fn non_numeric_env_value_is_rejected() {
    let mut settings = ClientSettings::default();
    let err = apply_env_overrides(
        &mut settings,
        lookup_from(&[("APP__REQUEST_TIMEOUT_SECS", "forever")]),
    )
    .expect_err("invalid value");
    assert!(matches!(
        err,
        SettingsError::InvalidValue {
            name: "APP__REQUEST_TIMEOUT_SECS",
            ..
        }
    ));
}

#[test]
fn invalid_server_url_is_reported() {
    let settings = ClientSettings::default().with_server_url(Some("not a url".to_string()));
    assert!(matches!(
        settings.upload_url(),
        Err(SettingsError::InvalidServerUrl { .. })
    ));
}

#[test]
fn zero_env_values_are_rejected() {
    for name in ["APP__REQUEST_TIMEOUT_SECS", "APP__MAX_UPLOAD_BYTES"] {
        let mut settings = ClientSettings::default();
        let err = apply_env_overrides(&mut settings, lookup_from(&[(name, "0")]))
            .expect_err("zero rejected");
        match err {
            SettingsError::InvalidValue { name: rejected, value } => {
                assert_eq!(rejected, name);
                assert_eq!(value, "0");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn zero_values_from_file_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "max_upload_bytes = 0").expect("write config");

    let err = load_settings(Some(file.path())).expect_err("zero limit");
    assert!(matches!(
        err,
        SettingsError::InvalidValue {
            name: "max_upload_bytes",
            ..
        }
    ));
}

#[test]
fn zero_timeout_fails_validation() {
    let settings = ClientSettings {
        request_timeout_secs: 0,
        ..ClientSettings::default()
    };
    assert!(matches!(
        validate(&settings),
        Err(SettingsError::InvalidValue {
            name: "request_timeout_secs",
            ..
        })
    ));
    assert!(validate(&ClientSettings::default()).is_ok());
}
