//! conjur-config - Conjur client configuration resolution
//!
//! Resolves the connection and authentication settings of a Conjur client
//! from defaults, the `.conjurrc` settings file and `CONJUR_*` environment
//! variables, validates them, and renders them back to the settings file.

pub mod cli;
pub mod config;
pub mod error;
pub mod utils;

// Re-export commonly used types
pub use config::{load_config, AuthnTypes, Config, EnvSource, Loader, MapEnv, Validator};
pub use error::{ConfigError, Result};
