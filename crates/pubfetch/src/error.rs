//! Error types for the pubfetch library.
//!
//! Parsing and classification never fail; everything in here comes from talking to NCBI,
//! reading configuration, or writing reports.
//!
//! # Examples
//!
//! ```no_run
//! use pubfetch::{
//!   entrez::{EntrezClient, EntrezConfig},
//!   error::PubfetchError,
//!   prelude::*,
//! };
//!
//! # async fn example() -> Result<(), PubfetchError> {
//! let client = EntrezClient::new(EntrezConfig::default())?;
//! match client.fetch("31452104").await {
//!   Err(PubfetchError::Network(e)) => println!("Network error: {}", e),
//!   Err(PubfetchError::Api(msg)) => println!("NCBI refused: {}", msg),
//!   Err(e) => println!("Other error: {}", e),
//!   Ok(record) => println!("{record}"),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`pubfetch`](crate) crate.
pub type Result<T> = core::result::Result<T, PubfetchError>;

/// Errors that can occur when fetching, configuring or reporting.
#[derive(Error, Debug)]
pub enum PubfetchError {
  /// A network request failed.
  ///
  /// This can occur when:
  /// - The network is unavailable
  /// - The E-utilities host is unreachable
  /// - The request times out
  /// - TLS errors occur
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The E-utilities answered with a non-success status.
  ///
  /// The string carries the status code and whatever body NCBI sent back.
  #[error("API error: {0}")]
  Api(String),

  /// An esearch response could not be read as XML.
  #[error(transparent)]
  Xml(#[from] quick_xml::Error),

  /// A file system operation failed, typically while reading a config file or creating the
  /// CSV output.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// Writing a CSV record failed.
  #[error(transparent)]
  Csv(#[from] csv::Error),

  /// A configuration file was not valid TOML or did not match [`Config`](crate::config::Config).
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The configuration was readable but unusable.
  #[error("{0}")]
  Config(String),
}
