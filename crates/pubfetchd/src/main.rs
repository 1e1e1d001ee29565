//! Command line front end for `pubfetch`.
//!
//! Searches PubMed, classifies the authors of every hit and either prints a report block per
//! paper or writes a CSV file.
//!
//! # Usage
//!
//! ```bash
//! # Print the ten most relevant papers
//! get-papers-list "crispr cancer therapy"
//!
//! # Fetch up to 50 papers into a CSV file, with debug logging
//! get-papers-list "semaglutide" -m 50 -f results.csv -d
//!
//! # Identify yourself to NCBI and keep going when a single record fails
//! get-papers-list "mrna vaccine" --email me@example.org --skip-failed
//!
//! # Use an NCBI API key for the higher rate limit
//! get-papers-list "tirzepatide" --api-key 0123456789abcdef
//! ```
//!
//! Logs go to stderr, so the report on stdout can be piped safely. `RUST_LOG` overrides the
//! level chosen by `--debug`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use clap::Parser;
use console::style;
use pubfetch::{config::Config, error::PubfetchError, pipeline::FailurePolicy};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub mod error;
pub mod run;

use crate::{error::*, run::*};

/// Prefix for success messages
static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
static ERROR_PREFIX: &str = "✗ ";

/// Fetch research papers from PubMed and identify authors affiliated with non-academic
/// institutions.
#[derive(Parser, Debug)]
#[command(name = "get-papers-list", author, version, about, long_about = None)]
pub struct Cli {
  /// Search query for PubMed
  pub query: String,

  /// Write results as CSV to this file instead of printing them
  #[arg(short, long)]
  pub file: Option<PathBuf>,

  /// Enable debug output
  #[arg(short, long)]
  pub debug: bool,

  /// Maximum number of results to fetch
  #[arg(short, long = "max_results", visible_alias = "max-results", default_value_t = 10)]
  pub max_results: usize,

  /// Configuration file; defaults to the platform config directory if present
  #[arg(short, long)]
  pub config: Option<PathBuf>,

  /// Contact email sent to NCBI, overriding the configuration file
  #[arg(long)]
  pub email: Option<String>,

  /// NCBI API key, overriding the configuration file
  #[arg(long)]
  pub api_key: Option<String>,

  /// Keep the papers that could be fetched when some records fail
  #[arg(long)]
  pub skip_failed: bool,
}

impl Cli {
  /// Failure policy selected on the command line.
  pub fn policy(&self) -> FailurePolicy {
    if self.skip_failed {
      FailurePolicy::SkipFailed
    } else {
      FailurePolicy::AllOrNothing
    }
  }
}

/// Configures logging to stderr.
///
/// `RUST_LOG` wins if set; otherwise `info`, or `debug` when `debug` is true.
fn setup_logging(debug: bool) {
  let filter = if debug { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(debug)
    .with_file(debug)
    .with_line_number(debug)
    .init();
}

/// Entry point for `get-papers-list`.
///
/// Exits with status 1 when the configuration is unusable or the report cannot be written.
#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  setup_logging(cli.debug);
  if cli.debug {
    debug!("Debug mode enabled.");
  }

  if let Err(e) = run(&cli).await {
    eprintln!("{} {e}", style(ERROR_PREFIX).red());
    std::process::exit(1);
  }
}
