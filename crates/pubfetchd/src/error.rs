//! Errors surfaced by the command line front end.

use thiserror::Error;

use super::*;

/// Error type alias used throughout the binary.
pub type Result<T> = core::result::Result<T, PubfetchdError>;

/// Failures that end a `get-papers-list` run with a non-zero exit code.
///
/// Network trouble is not among them: the pipeline logs it and reports fewer (or no) papers.
#[derive(Error, Debug)]
pub enum PubfetchdError {
  /// Anything bubbling up from the library, such as a bad config file or an unwritable CSV
  /// path.
  #[error(transparent)]
  Pubfetch(#[from] PubfetchError),

  /// Writing the console report failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
