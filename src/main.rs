//! Contact Book - main entry point.
//!
//! Wires up logging and configuration, then hands stdin/stdout to the
//! command loop. The address book lives for exactly one session; there is
//! no persistence.

use anyhow::Result;
use contact_book::{AddressBook, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter.
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logging goes to stderr so replies on stdout stay clean.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        window_days = config.birthday_window_days,
        "starting assistant bot"
    );

    let mut book = AddressBook::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = contact_book::repl::run(&mut book, &config, stdin.lock(), stdout.lock()) {
        error!("command loop failed: {}", e);
        return Err(e.into());
    }

    info!("assistant bot shutdown complete");
    Ok(())
}
