//! The normalized paper entity produced from a MEDLINE record.
//!
//! MEDLINE records handed back by efetch in text mode carry a single `AD` line per record as
//! far as this crate is concerned, so a [`Paper`] holds one affiliation and one email for
//! the whole author list. Classification still happens per author: the shared values are
//! broadcast across every name (see [`Paper::broadcast`]). Two authors of the same paper
//! therefore always land on the same side of the heuristic.
//!
//! # Examples
//!
//! ```
//! use pubfetch::{classify::Heuristics, paper::Paper};
//!
//! let paper = Paper {
//!   pubmed_id: Some("123".into()),
//!   authors: vec!["Doe J".into(), "Smith A".into()],
//!   affiliation: Some("Acme Biotech Inc".into()),
//!   ..Default::default()
//! };
//!
//! assert_eq!(paper.non_academic_authors(&Heuristics::default()), vec!["Doe J", "Smith A"]);
//! ```

use super::*;

/// A paper as recovered from one MEDLINE record.
///
/// Every scalar field is optional: a tag missing from the record leaves the field `None`
/// rather than an empty string, and renderers substitute their own placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
  /// PubMed identifier from the `PMID-` line
  pub pubmed_id:        Option<String>,
  /// Article title from the `TI  -` line
  pub title:            Option<String>,
  /// Free-form publication date from the `DP  -` line, e.g. `2020 Mar 3`
  pub publication_date: Option<String>,
  /// Author names from `AU  -` lines, in record order, duplicates kept
  pub authors:          Vec<String>,
  /// Affiliation shared by all authors; the last `AD  -` line of the record
  pub affiliation:      Option<String>,
  /// Contact email shared by all authors; the last email-shaped match in the record
  pub email:            Option<String>,
}

impl Paper {
  /// Repeats the shared affiliation and email once per author.
  ///
  /// Absent values become empty strings, which the classifier treats as "no signal". The
  /// three returned vectors always have `self.authors.len()` elements.
  pub fn broadcast(&self) -> (Vec<String>, Vec<String>, Vec<String>) {
    let n = self.authors.len();
    let affiliation = self.affiliation.clone().unwrap_or_default();
    let email = self.email.clone().unwrap_or_default();
    (self.authors.clone(), vec![affiliation; n], vec![email; n])
  }

  /// Authors classified as non-academic under `heuristics`, in record order.
  pub fn non_academic_authors(&self, heuristics: &Heuristics) -> Vec<String> {
    let (authors, affiliations, emails) = self.broadcast();
    heuristics.identify_non_academic_authors(&authors, &affiliations, &emails)
  }
}

impl Display for Paper {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{} ({})",
      self.title.as_deref().unwrap_or("Untitled"),
      self.pubmed_id.as_deref().unwrap_or("no PMID")
    )
  }
}
