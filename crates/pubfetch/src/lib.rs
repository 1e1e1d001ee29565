//! PubMed paper retrieval with a heuristic for spotting industry-affiliated authors.
//!
//! `pubfetch` searches PubMed through the NCBI E-utilities, pulls each hit as a MEDLINE
//! text record and reduces it to a [`Paper`](paper::Paper). A small rule chain then decides,
//! author by author, whether the paper's affiliation and contact email point at a
//! non-academic (pharma, biotech, corporate) institution.
//!
//! # Features
//!
//! - **MEDLINE parsing**: best-effort extraction of `PMID`, `TI`, `DP`, `AU` and `AD` tags plus
//!   any contact email found in the record
//! - **Author classification**: keyword and free-mail-domain heuristics with an explicit
//!   "no evidence of academia" default
//! - **Pluggable transport**: anything implementing [`RecordSource`](entrez::RecordSource) can
//!   feed the pipeline; [`EntrezClient`](entrez::EntrezClient) talks to NCBI
//! - **Output**: console report blocks or a CSV file with one row per paper
//!
//! # Getting Started
//!
//! ```no_run
//! use pubfetch::{
//!   classify::Heuristics,
//!   config::Config,
//!   entrez::EntrezClient,
//!   format,
//!   pipeline::{fetch_papers, FailurePolicy},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let config = Config::default().with_email("someone@example.org");
//!   let client = EntrezClient::new(config.entrez.clone())?;
//!
//!   let papers = fetch_papers(&client, "crispr cancer", 5, FailurePolicy::AllOrNothing).await;
//!   format::write_console(&papers, &config.heuristics, &mut std::io::stdout())?;
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`medline`]: MEDLINE record parsing
//! - [`classify`]: academic vs. non-academic author heuristics
//! - [`paper`]: the normalized paper entity
//! - [`entrez`]: the record-fetching collaborator and its NCBI implementation
//! - [`pipeline`]: search, fetch and parse with a configurable failure policy
//! - [`format`]: console and CSV rendering
//! - [`config`]: TOML configuration
//! - [`error`]: the crate error type

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  fmt::Display,
  io::Write,
  path::{Path, PathBuf},
};

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace, warn};
#[cfg(test)] use tracing_test::traced_test;

pub mod classify;
pub mod config;
pub mod entrez;
pub mod error;
pub mod format;
pub mod medline;
pub mod paper;
pub mod pipeline;

use crate::{classify::*, error::*, paper::*};

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use pubfetch::prelude::*;
///
/// async fn ids(source: &impl RecordSource) -> Result<Vec<String>, PubfetchError> {
///   source.search("aspirin", 3).await
/// }
/// ```
pub mod prelude {
  pub use crate::{entrez::RecordSource, error::PubfetchError};
}
