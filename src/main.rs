//! conjurrc - Conjur client configuration tool
//!
//! Shows, validates and writes the configuration a Conjur client resolves
//! from `~/.conjurrc` and `CONJUR_*` environment variables.

use clap::Parser;
use conjur_config::cli::Cli;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.debug);

    debug!("Starting conjurrc");

    // Execute the command
    if let Err(e) = cli.execute() {
        error!("Error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug {
        "conjur_config=debug,conjurrc=debug"
    } else {
        "conjur_config=warn,conjurrc=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
