//! Configuration entity
//!
//! `Config` is the resolved connection and authentication record handed to
//! the network client. Every field is a string where empty means unset.

use crate::error::{ConfigError, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Authentication mechanisms accepted when no custom list is supplied.
pub const DEFAULT_AUTHN_TYPES: &[&str] = &["ldap", "oidc", "jwt", "iam", "azure", "gcp"];

#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    pub account: String,
    pub appliance_url: String,
    pub authn_type: String,
    pub service_id: String,
    /// Raw PEM material. In memory only, never serialized.
    #[serde(skip)]
    pub ssl_cert: String,
    pub ssl_cert_path: String,
    pub netrc_path: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("account", &self.account)
            .field("appliance_url", &self.appliance_url)
            .field("authn_type", &self.authn_type)
            .field("service_id", &self.service_id)
            .field(
                "ssl_cert",
                &if self.ssl_cert.is_empty() { "" } else { "<redacted>" },
            )
            .field("ssl_cert_path", &self.ssl_cert_path)
            .field("netrc_path", &self.netrc_path)
            .finish()
    }
}

/// Overwrite `dst` only when `src` carries a value.
pub(crate) fn set_if_present(dst: &mut String, src: &str) -> bool {
    if src.is_empty() {
        return false;
    }
    *dst = src.to_string();
    true
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the connection should be made over HTTPS
    pub fn is_https(&self) -> bool {
        !self.ssl_cert.is_empty() || !self.ssl_cert_path.is_empty()
    }

    /// Overlay the non-empty fields of `other` onto this config.
    pub fn overlay(&mut self, other: &Config) {
        set_if_present(&mut self.account, &other.account);
        set_if_present(&mut self.appliance_url, &other.appliance_url);
        set_if_present(&mut self.authn_type, &other.authn_type);
        set_if_present(&mut self.service_id, &other.service_id);
        set_if_present(&mut self.ssl_cert, &other.ssl_cert);
        set_if_present(&mut self.ssl_cert_path, &other.ssl_cert_path);
        set_if_present(&mut self.netrc_path, &other.netrc_path);
    }

    /// Certificate bytes for the transport layer.
    ///
    /// The in-memory certificate wins over the file path. Returns `None`
    /// when neither is configured.
    pub fn read_ssl_cert(&self) -> Result<Option<Vec<u8>>> {
        if !self.ssl_cert.is_empty() {
            return Ok(Some(self.ssl_cert.as_bytes().to_vec()));
        }
        if self.ssl_cert_path.is_empty() {
            return Ok(None);
        }

        let path = Path::new(&self.ssl_cert_path);
        std::fs::read(path)
            .map(Some)
            .map_err(|e| ConfigError::io(path, e))
    }
}

/// The set of supported authentication mechanism names.
///
/// Kept as plain data so deployments can replace or extend it without
/// touching merge or validation code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthnTypes(Vec<String>);

impl Default for AuthnTypes {
    fn default() -> Self {
        Self::new(DEFAULT_AUTHN_TYPES.iter().copied())
    }
}

impl AuthnTypes {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Add a mechanism to the set
    pub fn with<S: Into<String>>(mut self, name: S) -> Self {
        let name = name.into();
        if !self.contains(&name) {
            self.0.push(name);
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for AuthnTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}
