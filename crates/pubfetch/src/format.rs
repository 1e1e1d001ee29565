//! Console and CSV rendering of classified papers.
//!
//! Both renderers first turn a [`Paper`] into a [`PaperReport`], classifying its authors with
//! the paper's shared affiliation and email. They then differ only in layout:
//!
//! - the console block shows `N/A` for anything missing and ends with a line of 80 dashes
//! - the CSV file has one row per paper under a fixed header, with missing values left empty

use super::*;

/// Placeholder printed on the console for missing values.
pub const MISSING: &str = "N/A";

/// Separator between non-academic author names.
pub const AUTHOR_SEPARATOR: &str = ", ";

/// Fixed CSV header, in column order.
pub const CSV_HEADER: [&str; 6] =
  ["PubmedID", "Title", "PublicationDate", "Non-academic Authors", "Affiliation", "E-mail"];

/// One paper with its authors already classified. This is also the CSV row layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperReport {
  /// PubMed identifier
  #[serde(rename = "PubmedID")]
  pub pubmed_id:            Option<String>,
  /// Article title
  #[serde(rename = "Title")]
  pub title:                Option<String>,
  /// Free-form publication date
  #[serde(rename = "PublicationDate")]
  pub publication_date:     Option<String>,
  /// Authors classified non-academic, joined with [`AUTHOR_SEPARATOR`]
  #[serde(rename = "Non-academic Authors")]
  pub non_academic_authors: String,
  /// Shared affiliation of the paper
  #[serde(rename = "Affiliation")]
  pub affiliation:          Option<String>,
  /// Shared contact email of the paper
  #[serde(rename = "E-mail")]
  pub email:                Option<String>,
}

impl PaperReport {
  /// Classifies `paper`'s authors and collects the fields to print.
  pub fn new(paper: &Paper, heuristics: &Heuristics) -> Self {
    Self {
      pubmed_id:            paper.pubmed_id.clone(),
      title:                paper.title.clone(),
      publication_date:     paper.publication_date.clone(),
      non_academic_authors: paper.non_academic_authors(heuristics).join(AUTHOR_SEPARATOR),
      affiliation:          paper.affiliation.clone(),
      email:                paper.email.clone(),
    }
  }
}

impl Display for PaperReport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let or_missing = |value: &Option<String>| value.as_deref().unwrap_or(MISSING).to_string();
    let authors = if self.non_academic_authors.is_empty() {
      MISSING
    } else {
      self.non_academic_authors.as_str()
    };

    writeln!(f, "PubmedID: {}", or_missing(&self.pubmed_id))?;
    writeln!(f, "Title: {}", or_missing(&self.title))?;
    writeln!(f, "Publication Date: {}", or_missing(&self.publication_date))?;
    writeln!(f, "Non-academic Authors: {authors}")?;
    writeln!(f, "Affiliation: {}", or_missing(&self.affiliation))?;
    writeln!(f, "Email: {}", or_missing(&self.email))?;
    write!(f, "{}", "-".repeat(80))
  }
}

/// Writes one console block per paper.
pub fn write_console<W: Write>(
  papers: &[Paper],
  heuristics: &Heuristics,
  writer: &mut W,
) -> Result<()> {
  for paper in papers {
    writeln!(writer, "{}", PaperReport::new(paper, heuristics))?;
  }
  writer.flush()?;
  Ok(())
}

/// Writes the CSV header followed by one row per paper.
///
/// The header is written even when `papers` is empty.
pub fn write_csv<W: Write>(papers: &[Paper], heuristics: &Heuristics, writer: W) -> Result<()> {
  let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
  wtr.write_record(CSV_HEADER)?;
  for paper in papers {
    wtr.serialize(PaperReport::new(paper, heuristics))?;
  }
  wtr.flush()?;
  Ok(())
}

/// Creates (or truncates) `path` and writes the papers to it as CSV.
pub fn save_to_csv(
  papers: &[Paper],
  heuristics: &Heuristics,
  path: impl AsRef<Path>,
) -> Result<()> {
  let path = path.as_ref();
  let file = std::fs::File::create(path)?;
  write_csv(papers, heuristics, file)?;
  debug!("Wrote {} papers to {}", papers.len(), path.display());
  Ok(())
}
