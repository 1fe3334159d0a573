//! Integration tests for layered configuration loading
//!
//! These tests run the settings file merger and the loader against real files
//! in temporary directories and a hermetic `MapEnv`.

use conjur_config::{
    config::env::{ENV_ACCOUNT, ENV_APPLIANCE_URL, ENV_AUTHN_TYPE, ENV_CONJURRC, ENV_SERVICE_ID},
    Config, ConfigError, Loader, MapEnv,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to write a settings file into `dir`
fn write_conjurrc(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn filled_conjurrc(index: usize, version_line: &str) -> String {
    format!(
        r#"
---
appliance_url: http://path/to/appliance{index}
account: some account{index}
cert_file: "/path/to/cert/file/pem{index}"
netrc_path: "/path/to/netrc/file{index}"
authn_type: ldap
service_id: my-ldap-service
{version_line}
"#
    )
}

#[test]
fn test_merge_file_with_any_version_marker() {
    let dir = TempDir::new().unwrap();

    for (index, version_line) in ["version: 4", "version: 5", ""].iter().enumerate() {
        let path = write_conjurrc(
            dir.path(),
            &format!("conjurrc{index}"),
            &filled_conjurrc(index, version_line),
        );

        let mut config = Config::default();
        assert!(config.merge_file(&path).unwrap());

        assert_eq!(
            config,
            Config {
                account: format!("some account{index}"),
                appliance_url: format!("http://path/to/appliance{index}"),
                netrc_path: format!("/path/to/netrc/file{index}"),
                ssl_cert_path: format!("/path/to/cert/file/pem{index}"),
                authn_type: "ldap".to_string(),
                service_id: "my-ldap-service".to_string(),
                ..Default::default()
            },
            "version line {version_line:?}"
        );
        assert!(config.ssl_cert.is_empty());
    }
}

#[test]
fn test_merge_file_rejects_malformed_document() {
    let dir = TempDir::new().unwrap();
    let path = write_conjurrc(
        dir.path(),
        ".conjurrc",
        r#"
---
appliance_url: http://path/to/appliance
account: some account
cert_file: "C:\badly\escaped\path"
"#,
    );

    let mut config = Config::default();
    let err = config.merge_file(&path).unwrap_err();

    match err {
        ConfigError::Parse { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_merge_file_unreadable_path_is_io_error() {
    let dir = TempDir::new().unwrap();

    // A directory exists but cannot be read as a file
    let mut config = Config::default();
    let err = config.merge_file(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_loader_defaults_netrc_under_home() {
    let home = TempDir::new().unwrap();
    let mut env = MapEnv::new();
    env.set("HOME", home.path().to_string_lossy())
        .set(ENV_ACCOUNT, "account")
        .set(ENV_APPLIANCE_URL, "appliance-url");

    let config = Loader::with_env(env).load().unwrap();

    assert_eq!(
        config,
        Config {
            account: "account".to_string(),
            appliance_url: "appliance-url".to_string(),
            netrc_path: home.path().join(".netrc").to_string_lossy().into_owned(),
            ..Default::default()
        }
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_loader_environment_beats_file() {
    let home = TempDir::new().unwrap();
    write_conjurrc(
        home.path(),
        ".conjurrc",
        "account: file-account\nappliance_url: https://file.example.com\nnetrc_path: /from/file/netrc\n",
    );

    let mut env = MapEnv::new();
    env.set("HOME", home.path().to_string_lossy())
        .set(ENV_ACCOUNT, "env-account")
        .set(ENV_AUTHN_TYPE, "oidc")
        .set(ENV_SERVICE_ID, "okta");

    let config = Loader::with_env(env).load().unwrap();

    assert_eq!(config.account, "env-account");
    assert_eq!(config.appliance_url, "https://file.example.com");
    assert_eq!(config.netrc_path, "/from/file/netrc");
    assert_eq!(config.authn_type, "oidc");
    assert_eq!(config.service_id, "okta");
    assert!(config.validate().is_ok());
}

#[test]
fn test_loader_conjurrc_variable_relocates_file() {
    let home = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    write_conjurrc(home.path(), ".conjurrc", "account: home-account\n");
    let relocated = write_conjurrc(other.path(), "conjur.yml", "account: relocated-account\n");

    let mut env = MapEnv::new();
    env.set("HOME", home.path().to_string_lossy())
        .set(ENV_CONJURRC, relocated.to_string_lossy());

    let config = Loader::with_env(env).load().unwrap();
    assert_eq!(config.account, "relocated-account");
}

#[test]
fn test_loader_surfaces_parse_errors() {
    let home = TempDir::new().unwrap();
    write_conjurrc(home.path(), ".conjurrc", "account: [unterminated\n");

    let mut env = MapEnv::new();
    env.set("HOME", home.path().to_string_lossy());

    let err = Loader::with_env(env).load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_loader_does_not_validate() {
    let home = TempDir::new().unwrap();
    let mut env = MapEnv::new();
    env.set("HOME", home.path().to_string_lossy());

    let config = Loader::with_env(env).load().unwrap();
    let err = config.validate().unwrap_err();

    assert!(err.to_string().contains("appliance URL"));
    assert!(err.to_string().contains("account"));
}

#[test]
fn test_written_file_merges_back() {
    let home = TempDir::new().unwrap();
    let config = Config {
        account: "acme: prod".to_string(),
        appliance_url: "https://conjur.example.com:8443".to_string(),
        authn_type: "ldap".to_string(),
        service_id: "true".to_string(),
        ssl_cert: "raw-pem".to_string(),
        ssl_cert_path: "C:\\conjur\\conjur.pem".to_string(),
        netrc_path: "/home/user/.netrc".to_string(),
    };

    let path = home.path().join(".conjurrc");
    config.write_conjurrc(&path).unwrap();

    let on_disk = fs::read_to_string(&path).unwrap();
    assert!(!on_disk.contains("raw-pem"));

    let mut reloaded = Config::default();
    reloaded.merge_file(&path).unwrap();

    assert_eq!(
        reloaded,
        Config {
            ssl_cert: String::new(),
            ..config
        }
    );
}
