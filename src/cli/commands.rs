//! CLI commands and argument parsing
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, subcommands, and their arguments.

use crate::config::{Config, Loader};
use crate::error::{ConfigError, Result};
use crate::utils::format::{format_config, OutputFormat};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "conjurrc")]
#[command(about = "Resolve, validate and persist Conjur client configuration")]
#[command(version, author)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Settings file to read instead of $CONJURRC or ~/.conjurrc
    #[arg(long, global = true, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: ConfigOverrides,

    #[command(subcommand)]
    pub command: Commands,
}

/// Values that take precedence over the settings file and environment
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Organization account
    #[arg(long, global = true)]
    pub account: Option<String>,

    /// Conjur appliance URL
    #[arg(long, global = true, value_name = "URL")]
    pub appliance_url: Option<String>,

    /// Authentication type (e.g. ldap, oidc, jwt)
    #[arg(long, global = true, value_name = "TYPE")]
    pub authn_type: Option<String>,

    /// Service id of the authenticator
    #[arg(long, global = true)]
    pub service_id: Option<String>,

    /// Path to the appliance certificate
    #[arg(long, global = true, value_name = "PATH")]
    pub cert_file: Option<String>,

    /// Path to the netrc credentials file
    #[arg(long, global = true, value_name = "PATH")]
    pub netrc_path: Option<String>,
}

impl ConfigOverrides {
    pub fn to_config(&self) -> Config {
        Config {
            account: self.account.clone().unwrap_or_default(),
            appliance_url: self.appliance_url.clone().unwrap_or_default(),
            authn_type: self.authn_type.clone().unwrap_or_default(),
            service_id: self.service_id.clone().unwrap_or_default(),
            ssl_cert_path: self.cert_file.clone().unwrap_or_default(),
            netrc_path: self.netrc_path.clone().unwrap_or_default(),
            ..Default::default()
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Show the resolved configuration
    Show,
    /// Check the resolved configuration for missing or inconsistent values
    Validate,
    /// Print the resolved configuration in settings file form
    Render,
    /// Validate and write the resolved configuration to a settings file
    Write {
        /// Destination (defaults to the settings file location)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Show settings file path
    Path,
}

impl Cli {
    fn loader(&self) -> Loader {
        match &self.config_file {
            Some(path) => Loader::new().config_file(path.clone()),
            None => Loader::new(),
        }
    }

    /// Load, apply command-line overrides, and run the command
    pub fn execute(self) -> Result<()> {
        let loader = self.loader();
        let mut config = loader.load()?;
        config.overlay(&self.overrides.to_config());
        debug!("Resolved configuration: {:?}", config);

        match self.command {
            Commands::Show => execute_show(&config, self.format),
            Commands::Validate => execute_validate(&config),
            Commands::Render => execute_render(&config),
            Commands::Write { output, force } => {
                let path = match output {
                    Some(path) => path,
                    None => loader.conjurrc_path()?,
                };
                execute_write(&config, &path, force)
            }
            Commands::Path => {
                println!("{}", loader.conjurrc_path()?.display());
                Ok(())
            }
        }
    }
}

fn execute_show(config: &Config, format: OutputFormat) -> Result<()> {
    println!("{}", format_config(config, format)?);
    Ok(())
}

fn execute_validate(config: &Config) -> Result<()> {
    config.validate()?;
    println!("✅ Configuration is valid");
    Ok(())
}

fn execute_render(config: &Config) -> Result<()> {
    print!("{}", config.to_conjurrc()?);
    Ok(())
}

pub fn execute_write(config: &Config, path: &std::path::Path, force: bool) -> Result<()> {
    config.validate()?;

    if path.exists() && !force {
        return Err(ConfigError::invalid_argument(format!(
            "{} already exists, use --force to overwrite",
            path.display()
        )));
    }

    config.write_conjurrc(path)?;
    println!("✅ Configuration written to {}", path.display());
    Ok(())
}
