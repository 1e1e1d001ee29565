//! MEDLINE text record parsing.
//!
//! efetch with `rettype=medline&retmode=text` returns records made of tagged lines:
//!
//! ```text
//! PMID- 31452104
//! TI  - Pembrolizumab in advanced melanoma.
//! DP  - 2019 Aug
//! AU  - Doe J
//! AD  - Merck & Co., Inc., Kenilworth, NJ, USA. jane.doe@merck.com.
//! ```
//!
//! Only a handful of tags are of interest. Parsing is best effort and never fails: lines
//! that don't look like anything useful are skipped and missing tags simply leave the
//! corresponding [`Paper`] field empty.

use super::*;

/// Tag prefix for the PubMed identifier line.
const PMID: &str = "PMID-";
/// Tag prefix for the title line.
const TITLE: &str = "TI  -";
/// Tag prefix for the publication date line.
const DATE: &str = "DP  -";
/// Tag prefix for an author line.
const AUTHOR: &str = "AU  -";
/// Tag prefix for an affiliation line.
const AFFILIATION: &str = "AD  -";

lazy_static! {
  /// Loose `local@domain.tld` shape, matched anywhere in a line.
  static ref EMAIL: Regex = Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap();
}

/// Parses a single MEDLINE record into a [`Paper`].
///
/// Tagged lines are handled as follows:
///
/// - `PMID-` sets the identifier to the text between the first and second hyphen, trimmed
/// - `TI  -` and `DP  -` set the title and publication date
/// - `AU  -` appends an author
/// - `AD  -` replaces the affiliation, so the last one wins
///
/// Independently of its tag, every line is also searched for an email address; the first
/// address in a line replaces any address seen on earlier lines.
///
/// # Examples
///
/// ```
/// use pubfetch::medline::parse_record;
///
/// let record = "PMID- 123\nTI  -Some Title\nAU  -Doe J\nCN  - Contact: foo@bar.com\n";
/// let paper = parse_record(record);
/// assert_eq!(paper.pubmed_id.as_deref(), Some("123"));
/// assert_eq!(paper.title.as_deref(), Some("Some Title"));
/// assert_eq!(paper.authors, vec!["Doe J"]);
/// assert_eq!(paper.email.as_deref(), Some("foo@bar.com"));
/// ```
pub fn parse_record(record: &str) -> Paper {
  let mut paper = Paper::default();

  for line in record.lines() {
    if line.starts_with(PMID) {
      // `PMID- 12-34` keeps only `12`; identifiers never contain hyphens in practice.
      let id = line.split('-').nth(1).unwrap_or_default();
      paper.pubmed_id = Some(id.trim().to_string());
    } else if let Some(title) = line.strip_prefix(TITLE) {
      paper.title = Some(title.trim().to_string());
    } else if let Some(date) = line.strip_prefix(DATE) {
      paper.publication_date = Some(date.trim().to_string());
    } else if let Some(author) = line.strip_prefix(AUTHOR) {
      paper.authors.push(author.trim().to_string());
    } else if let Some(affiliation) = line.strip_prefix(AFFILIATION) {
      paper.affiliation = Some(affiliation.trim().to_string());
    }

    if let Some(email) = EMAIL.find(line) {
      trace!("Found email {} in line: {line}", email.as_str());
      paper.email = Some(email.as_str().to_string());
    }
  }

  debug!("Parsed record {}", paper);
  paper
}

/// Splits a payload holding several MEDLINE records into one block per record.
///
/// Records are separated by one or more blank lines. Whitespace-only blocks are dropped.
pub fn split_records(text: &str) -> Vec<String> {
  let mut records = Vec::new();
  let mut current = String::new();

  for line in text.lines() {
    if line.trim().is_empty() {
      if !current.trim().is_empty() {
        records.push(std::mem::take(&mut current));
      }
      current.clear();
    } else {
      current.push_str(line);
      current.push('\n');
    }
  }
  if !current.trim().is_empty() {
    records.push(current);
  }

  records
}

/// Parses every record in a multi-record payload.
pub fn parse_records(text: &str) -> Vec<Paper> {
  split_records(text).iter().map(|record| parse_record(record)).collect()
}
