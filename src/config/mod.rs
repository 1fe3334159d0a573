//! Configuration management module
//!
//! This module resolves the client configuration from defaults, the
//! `.conjurrc` settings file and environment variables, validates it, and
//! renders it back to the persisted form.

pub mod conjurrc;
pub mod env;
pub mod file;
pub mod loader;
pub mod settings;
pub mod validate;

pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use file::ConjurrcFile;
pub use loader::{load_config, Loader};
pub use settings::*;
pub use validate::Validator;
