//! # purpleair
//!
//! An interactive console for browsing particulate concentration statistics
//! from a PurpleAir CSV export, built on purpleairlib.
//!
//! ## Overview
//!
//! The interactive session greets the user, asks for a menu header, and
//! then offers a numbered menu:
//!
//! - **1/2/3**: average, minimum, or maximum concentration by zip code and
//!   time of day
//! - **4**: toggle which zip codes appear in the tables
//! - **5**: load (or reload) the data file
//! - **9**: quit
//!
//! ## Usage
//!
//! ```bash
//! # Interactive session reading ./purple_air.csv
//! purpleair
//!
//! # Another file, skipping the prompts
//! purpleair --file readings.csv --name Sam --header "Data For A Cleaner World"
//!
//! # Print one table and exit
//! purpleair --stat max --exclude 95014
//!
//! # Same table as JSON
//! purpleair --stat avg --output json
//! ```

mod cli;
mod session;

use std::io;
use std::process::ExitCode;

use purpleairlib::{build_table, RecordStore};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{build_command, BatchOptions, Config, OutputFormat};
use session::Session;

/// Initialise the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `log_level` is used. Logs go to
/// stderr so they never interleave with tables on stdout.
fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry().with(filter).with(layer).init();
}

/// Load the data file, hide excluded zip codes and print one table
fn run_batch(config: &Config, batch: &BatchOptions) -> anyhow::Result<()> {
    let mut store = RecordStore::new();
    let count = store.load_path(&config.file)?;
    info!(count, "loaded {}", config.file.display());

    for zip_code in &batch.exclude {
        store.toggle(zip_code)?;
    }

    let table = build_table(&store, batch.stat)?;
    match batch.output {
        OutputFormat::Text => print!("{}", table.render()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
    }
    Ok(())
}

fn run_interactive(config: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new(&config.file, stdin.lock(), io::stdout());
    session.run(config.name.clone(), config.header.clone())?;
    debug!(loaded = session.store().is_loaded(), "session ended");
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    let config = match Config::from_matches(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    setup_logging(&config.log_level);
    debug!(?config, "starting");

    let result = match &config.batch {
        Some(batch) => run_batch(&config, batch),
        None => run_interactive(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
