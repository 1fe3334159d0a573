//! Settings file rendering and persistence
//!
//! Only path references are persisted. The raw certificate held in
//! `Config::ssl_cert` never reaches disk.

use crate::config::file::ConjurrcFile;
use crate::config::settings::Config;
use crate::error::{ConfigError, Result};
use std::path::Path;
use tracing::info;

impl Config {
    /// Render the persisted `.conjurrc` form.
    ///
    /// Keys are emitted in a fixed order and empty fields are omitted, so
    /// identical configs always render identically.
    pub fn to_conjurrc(&self) -> Result<String> {
        serde_yaml::to_string(&ConjurrcFile::from(self))
            .map_err(|e| ConfigError::serialization(e.to_string()))
    }

    /// Write the rendered settings file to `path`, creating parent directories.
    pub fn write_conjurrc<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contents = self.to_conjurrc()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }

        std::fs::write(path, contents).map_err(|e| ConfigError::io(path, e))?;
        info!("Wrote settings file {}", path.display());

        Ok(())
    }
}
