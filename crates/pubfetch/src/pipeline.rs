//! Search, fetch and parse in one call.
//!
//! [`fetch_papers`] never returns an error. Transport problems are logged and turned into a
//! smaller (possibly empty) result, according to a [`FailurePolicy`]:
//!
//! - [`FailurePolicy::AllOrNothing`] throws the whole batch away as soon as one request fails,
//!   so a single bad identifier yields no papers at all
//! - [`FailurePolicy::SkipFailed`] drops only the records whose fetch failed
//!
//! A failed search yields an empty result under either policy.

use super::*;
use crate::{entrez::RecordSource, medline::parse_record};

/// What to do when fetching one record of a batch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
  /// Discard every paper of the batch and return nothing.
  #[default]
  AllOrNothing,
  /// Log the failure, skip that record and keep the rest.
  SkipFailed,
}

/// Runs a query against `source` and parses every returned record.
///
/// Records are requested one at a time, in the order the search returned their identifiers.
///
/// # Examples
///
/// ```no_run
/// use pubfetch::{
///   entrez::{EntrezClient, EntrezConfig},
///   pipeline::{fetch_papers, FailurePolicy},
/// };
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EntrezClient::new(EntrezConfig::default())?;
/// let papers = fetch_papers(&client, "crispr", 10, FailurePolicy::SkipFailed).await;
/// println!("{} papers", papers.len());
/// # Ok(())
/// # }
/// ```
pub async fn fetch_papers<S>(
  source: &S,
  query: &str,
  max_results: usize,
  policy: FailurePolicy,
) -> Vec<Paper>
where
  S: RecordSource + ?Sized,
{
  let ids = match source.search(query, max_results).await {
    Ok(ids) => ids,
    Err(e) => {
      error!("Error fetching papers: {e}");
      return Vec::new();
    },
  };
  debug!("Fetching {} records for {query:?}", ids.len());

  let mut papers = Vec::with_capacity(ids.len());
  for id in &ids {
    match source.fetch(id).await {
      Ok(record) => papers.push(parse_record(&record)),
      Err(e) => match policy {
        FailurePolicy::AllOrNothing => {
          error!("Error fetching papers: record {id} failed: {e}");
          return Vec::new();
        },
        FailurePolicy::SkipFailed => warn!("Skipping record {id}: {e}"),
      },
    }
  }

  papers
}
