//! Output formatting for resolved configuration
//!
//! Renders a `Config` as a styled table, JSON, or the `.conjurrc` YAML form.
//! No format ever includes raw certificate material.

use crate::config::Config;
use crate::error::Result;
use crossterm::terminal::size;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Padding, Style, Width},
    Table, Tabled,
};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Tabled)]
struct ConfigItem {
    #[tabled(rename = "Setting")]
    key: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn display_value(value: &str) -> String {
    if value.is_empty() {
        "<not set>".to_string()
    } else {
        value.to_string()
    }
}

fn config_items(config: &Config) -> Vec<ConfigItem> {
    vec![
        ConfigItem {
            key: "account",
            value: display_value(&config.account),
        },
        ConfigItem {
            key: "appliance_url",
            value: display_value(&config.appliance_url),
        },
        ConfigItem {
            key: "authn_type",
            value: display_value(&config.authn_type),
        },
        ConfigItem {
            key: "service_id",
            value: display_value(&config.service_id),
        },
        ConfigItem {
            key: "cert_file",
            value: display_value(&config.ssl_cert_path),
        },
        ConfigItem {
            key: "ssl_certificate",
            value: if config.ssl_cert.is_empty() {
                "<not set>".to_string()
            } else {
                "<set, not shown>".to_string()
            },
        },
        ConfigItem {
            key: "netrc_path",
            value: display_value(&config.netrc_path),
        },
        ConfigItem {
            key: "https",
            value: config.is_https().to_string(),
        },
    ]
}

/// Apply the standard table styling
pub fn format_table(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Padding::new(1, 1, 0, 0));

    if let Ok((width, _)) = size() {
        table.with(Width::wrap(width as usize));
    }

    table.to_string()
}

/// Render `config` in the requested format
pub fn format_config(config: &Config, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(Table::new(config_items(config)))),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Yaml => config.to_conjurrc(),
    }
}
