//! Environment variable configuration overlay
//!
//! Recognized variables:
//! - `CONJUR_ACCOUNT`
//! - `CONJUR_APPLIANCE_URL`
//! - `CONJUR_NETRC_PATH`
//! - `CONJUR_CERT_FILE`
//! - `CONJUR_SSL_CERTIFICATE` (raw PEM, kept in memory only)
//! - `CONJUR_AUTHN_TYPE`
//! - `CONJUR_SERVICE_ID`
//!
//! Lookups go through [`EnvSource`] so callers can supply a hermetic
//! environment instead of the process one.

use crate::config::settings::{set_if_present, Config};
use std::collections::HashMap;
use tracing::debug;

pub const ENV_ACCOUNT: &str = "CONJUR_ACCOUNT";
pub const ENV_APPLIANCE_URL: &str = "CONJUR_APPLIANCE_URL";
pub const ENV_NETRC_PATH: &str = "CONJUR_NETRC_PATH";
pub const ENV_CERT_FILE: &str = "CONJUR_CERT_FILE";
pub const ENV_SSL_CERTIFICATE: &str = "CONJUR_SSL_CERTIFICATE";
pub const ENV_AUTHN_TYPE: &str = "CONJUR_AUTHN_TYPE";
pub const ENV_SERVICE_ID: &str = "CONJUR_SERVICE_ID";
/// Overrides the settings file location
pub const ENV_CONJURRC: &str = "CONJURRC";

/// Read-only view of environment variables
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// The real process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment for tests and embedding
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl Config {
    /// Overlay recognized environment variables onto this config.
    ///
    /// Unset and empty variables leave the current value alone.
    pub fn merge_env<E: EnvSource + ?Sized>(&mut self, env: &E) {
        let fields: [(&str, &mut String); 7] = [
            (ENV_ACCOUNT, &mut self.account),
            (ENV_APPLIANCE_URL, &mut self.appliance_url),
            (ENV_NETRC_PATH, &mut self.netrc_path),
            (ENV_CERT_FILE, &mut self.ssl_cert_path),
            (ENV_SSL_CERTIFICATE, &mut self.ssl_cert),
            (ENV_AUTHN_TYPE, &mut self.authn_type),
            (ENV_SERVICE_ID, &mut self.service_id),
        ];

        for (key, field) in fields {
            if let Some(value) = env.var(key) {
                if set_if_present(field, &value) {
                    debug!("Applied {} from environment", key);
                }
            }
        }
    }
}
