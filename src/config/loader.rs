//! Layered configuration loading
//!
//! Priority order, lowest first:
//! 1. Defaults (netrc path under the home directory)
//! 2. Settings file
//! 3. Environment variables
//!
//! The loader does not validate; callers run [`Config::validate`] before use.

use crate::config::env::{EnvSource, ProcessEnv, ENV_CONJURRC};
use crate::config::settings::Config;
use crate::error::{ConfigError, Result};
use std::path::PathBuf;
use tracing::debug;

const CONJURRC_FILE_NAME: &str = ".conjurrc";
const NETRC_FILE_NAME: &str = ".netrc";

#[derive(Debug, Clone)]
pub struct Loader<E: EnvSource = ProcessEnv> {
    env: E,
    home_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
}

impl Loader<ProcessEnv> {
    /// Loader bound to the process environment
    pub fn new() -> Self {
        Self::with_env(ProcessEnv)
    }
}

impl Default for Loader<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvSource> Loader<E> {
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            home_dir: None,
            config_file: None,
        }
    }

    pub fn home_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.home_dir = Some(path.into());
        self
    }

    pub fn config_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Explicit override, then `HOME`, then the platform home directory
    pub fn resolve_home_dir(&self) -> Result<PathBuf> {
        if let Some(home) = &self.home_dir {
            return Ok(home.clone());
        }

        if let Some(home) = self.env.var("HOME").filter(|h| !h.is_empty()) {
            return Ok(PathBuf::from(home));
        }

        dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)
    }

    /// Explicit override, then `CONJURRC`, then `~/.conjurrc`
    pub fn conjurrc_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.config_file {
            return Ok(path.clone());
        }

        if let Some(path) = self.env.var(ENV_CONJURRC).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        Ok(self.resolve_home_dir()?.join(CONJURRC_FILE_NAME))
    }

    pub fn load(&self) -> Result<Config> {
        let home = self.resolve_home_dir()?;

        let mut config = Config {
            netrc_path: home.join(NETRC_FILE_NAME).to_string_lossy().into_owned(),
            ..Default::default()
        };

        let conjurrc = self.conjurrc_path()?;
        if !config.merge_file(&conjurrc)? {
            debug!("Using defaults, {} not found", conjurrc.display());
        }

        config.merge_env(&self.env);

        Ok(config)
    }
}

/// Load configuration from the default locations and the process environment
pub fn load_config() -> Result<Config> {
    Loader::new().load()
}
