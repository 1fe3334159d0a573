//! Configuration validation
//!
//! Required-field and cross-field rules checked before a `Config` is handed
//! to the network client. Rules are evaluated independently so every
//! violation is reported at once.

use crate::config::settings::{AuthnTypes, Config};
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default)]
pub struct Validator {
    authn_types: AuthnTypes,
}

impl Validator {
    pub fn new(authn_types: AuthnTypes) -> Self {
        Self { authn_types }
    }

    pub fn authn_types(&self) -> &AuthnTypes {
        &self.authn_types
    }

    /// Every rule `config` breaks, in rule order
    pub fn violations(&self, config: &Config) -> Vec<String> {
        let mut reasons = Vec::new();

        if config.account.is_empty() {
            reasons.push("must specify an account".to_string());
        }

        if config.appliance_url.is_empty() {
            reasons.push("must specify an appliance URL".to_string());
        }

        if !config.authn_type.is_empty() {
            if config.service_id.is_empty() {
                reasons.push(format!(
                    "must specify a service id when using {}",
                    config.authn_type
                ));
            }

            if !self.authn_types.contains(&config.authn_type) {
                reasons.push(format!(
                    "authentication type must be one of {}",
                    self.authn_types
                ));
            }
        }

        reasons
    }

    pub fn validate(&self, config: &Config) -> Result<()> {
        let reasons = self.violations(config);
        if reasons.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::validation(reasons))
        }
    }
}

impl Config {
    /// Validate against the default set of authentication types
    pub fn validate(&self) -> Result<()> {
        Validator::default().validate(self)
    }
}
