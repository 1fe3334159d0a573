//! Settings file (`.conjurrc`) overlay
//!
//! The file is a YAML mapping. It is decoded into [`ConjurrcFile`], which has
//! one field per recognized key; anything else in the document is ignored.

use crate::config::settings::{set_if_present, Config};
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// On-disk shape of the settings file.
///
/// Field order is the persisted key order.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConjurrcFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appliance_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub netrc_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authn_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    /// Schema marker written by older tooling. Accepted, never acted on.
    #[serde(default, skip_serializing)]
    pub version: Option<serde_yaml::Value>,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl From<&Config> for ConjurrcFile {
    fn from(config: &Config) -> Self {
        Self {
            account: non_empty(&config.account),
            appliance_url: non_empty(&config.appliance_url),
            netrc_path: non_empty(&config.netrc_path),
            cert_file: non_empty(&config.ssl_cert_path),
            authn_type: non_empty(&config.authn_type),
            service_id: non_empty(&config.service_id),
            version: None,
        }
    }
}

impl ConjurrcFile {
    /// Parse settings file text. `path` is only used for error reporting.
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let parsed: Option<Self> =
            serde_yaml::from_str(contents).map_err(|e| ConfigError::parse(path, e))?;
        Ok(parsed.unwrap_or_default())
    }

    /// Overlay the present, non-empty keys onto `config`.
    pub fn apply(&self, config: &mut Config) {
        let fields = [
            (&self.account, &mut config.account),
            (&self.appliance_url, &mut config.appliance_url),
            (&self.netrc_path, &mut config.netrc_path),
            (&self.cert_file, &mut config.ssl_cert_path),
            (&self.authn_type, &mut config.authn_type),
            (&self.service_id, &mut config.service_id),
        ];

        for (value, field) in fields {
            if let Some(value) = value {
                set_if_present(field, value);
            }
        }
    }
}

impl Config {
    /// Overlay the settings file at `path` onto this config.
    ///
    /// Returns `Ok(false)` when the file does not exist. A malformed document
    /// is a [`ConfigError::Parse`].
    pub fn merge_file<P: AsRef<Path>>(&mut self, path: P) -> Result<bool> {
        let path = path.as_ref();

        let contents = {
            let mut file = match File::open(path) {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!("No settings file at {}", path.display());
                    return Ok(false);
                }
                Err(e) => return Err(ConfigError::io(path, e)),
            };
            let mut contents = String::new();
            file.read_to_string(&mut contents)
                .map_err(|e| ConfigError::io(path, e))?;
            contents
        };

        ConjurrcFile::parse(&contents, path)?.apply(self);
        debug!("Merged settings file {}", path.display());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let parsed = ConjurrcFile::parse(
            "account: acme\nplugins: [policy]\nversion: 5\n",
            Path::new(".conjurrc"),
        )
        .unwrap();

        assert_eq!(parsed.account.as_deref(), Some("acme"));
        assert!(parsed.version.is_some());
    }

    #[test]
    fn test_parse_empty_document() {
        assert_eq!(
            ConjurrcFile::parse("\n  \n", Path::new(".conjurrc")).unwrap(),
            ConjurrcFile::default()
        );
        assert_eq!(
            ConjurrcFile::parse("---\n", Path::new(".conjurrc")).unwrap(),
            ConjurrcFile::default()
        );
    }

    #[test]
    fn test_apply_skips_empty_values() {
        let parsed = ConjurrcFile::parse(
            "account: \"\"\nappliance_url: https://conjur.example.com\n",
            Path::new(".conjurrc"),
        )
        .unwrap();

        let mut config = Config {
            account: "from-defaults".to_string(),
            ..Default::default()
        };
        parsed.apply(&mut config);

        assert_eq!(config.account, "from-defaults");
        assert_eq!(config.appliance_url, "https://conjur.example.com");
    }

    #[test]
    fn test_merge_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();

        let merged = config.merge_file(dir.path().join(".conjurrc")).unwrap();

        assert!(!merged);
        assert_eq!(config, Config::default());
    }
}
