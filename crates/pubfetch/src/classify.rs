//! Academic vs. non-academic author heuristics.
//!
//! The classifier is a short rule chain, not a scoring model. For each author, given an
//! affiliation string and an email address:
//!
//! 1. An affiliation containing an industry keyword (`pharma`, `inc`, `ltd`, ...) or an email
//!    at a free-mail provider marks the author non-academic.
//! 2. Otherwise an affiliation with no academic keyword (`university`, `lab`, ...) also marks
//!    the author non-academic. An empty affiliation lands here.
//! 3. Everything else is academic.
//!
//! Keyword matching is a case-insensitive *substring* test, so `"inc"` matches inside
//! `"Lincoln"` and `"lab"` inside `"Laboratory"`. The heuristic is coarse on purpose and its
//! behaviour should not be tightened without changing the published results.
//!
//! # Examples
//!
//! ```
//! use pubfetch::classify::{Classification, Heuristics};
//!
//! let heuristics = Heuristics::default();
//! assert_eq!(heuristics.classify("Acme Biotech Inc", ""), Classification::NonAcademicByKeyword);
//! assert_eq!(
//!   heuristics.classify("Research Lab", "a@gmail.com"),
//!   Classification::NonAcademicByEmailDomain
//! );
//! assert_eq!(heuristics.classify("", ""), Classification::NonAcademicByDefault);
//! assert_eq!(heuristics.classify("MIT University", "x@mit.edu"), Classification::Academic);
//! ```

use super::*;

/// Outcome of classifying one author.
///
/// The three non-academic variants record *which* rule fired; use
/// [`Classification::is_non_academic`] when only the side of the split matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
  /// The affiliation contains an industry keyword.
  NonAcademicByKeyword,
  /// The email belongs to a free-mail provider.
  NonAcademicByEmailDomain,
  /// No industry signal, but no academic keyword either.
  NonAcademicByDefault,
  /// The affiliation contains an academic keyword and nothing points at industry.
  Academic,
}

impl Classification {
  /// Whether the author falls on the non-academic side.
  pub fn is_non_academic(self) -> bool { !matches!(self, Self::Academic) }
}

impl Display for Classification {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::NonAcademicByKeyword => write!(f, "non-academic (affiliation keyword)"),
      Self::NonAcademicByEmailDomain => write!(f, "non-academic (email domain)"),
      Self::NonAcademicByDefault => write!(f, "non-academic (no academic keyword)"),
      Self::Academic => write!(f, "academic"),
    }
  }
}

/// Keyword and domain lists driving the classifier.
///
/// [`Heuristics::default`] carries the stock lists. A `[heuristics]` table in the
/// configuration file may replace any of them; keywords are lowercased through
/// [`Heuristics::normalized`] before use.
///
/// ```toml
/// [heuristics]
/// non_academic_keywords = ["pharma", "biotech", "gmbh"]
/// academic_keywords     = ["university", "hospital"]
/// free_email_domains    = ["gmail.com", "proton.me"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Heuristics {
  /// Substrings that mark an affiliation as industry
  pub non_academic_keywords: Vec<String>,
  /// Substrings that mark an affiliation as academic
  pub academic_keywords:     Vec<String>,
  /// Email domains (exact match) of free-mail providers
  pub free_email_domains:    Vec<String>,
}

impl Default for Heuristics {
  fn default() -> Self {
    Self {
      non_academic_keywords: ["pharma", "biotech", "inc", "corporation", "company", "llc", "ltd"]
        .map(String::from)
        .to_vec(),
      academic_keywords:     ["university", "college", "institute", "lab", "research center"]
        .map(String::from)
        .to_vec(),
      free_email_domains:    ["gmail.com", "yahoo.com", "outlook.com"].map(String::from).to_vec(),
    }
  }
}

impl Heuristics {
  /// Lowercases all keywords so they compare against a lowercased affiliation.
  ///
  /// Domains are left untouched; the domain rule is an exact, case-sensitive comparison.
  pub fn normalized(mut self) -> Self {
    for keyword in self.non_academic_keywords.iter_mut().chain(self.academic_keywords.iter_mut()) {
      *keyword = keyword.to_lowercase();
    }
    self
  }

  /// Classifies a single author from their affiliation and email.
  ///
  /// The first rule that fires decides; see the [module docs](self) for the chain.
  pub fn classify(&self, affiliation: &str, email: &str) -> Classification {
    let domain = email_domain(email);
    let affiliation = affiliation.to_lowercase();

    if contains_any(&affiliation, &self.non_academic_keywords) {
      Classification::NonAcademicByKeyword
    } else if self.free_email_domains.iter().any(|d| d == domain) {
      Classification::NonAcademicByEmailDomain
    } else if !contains_any(&affiliation, &self.academic_keywords) {
      Classification::NonAcademicByDefault
    } else {
      Classification::Academic
    }
  }

  /// Returns the authors classified non-academic, in input order.
  ///
  /// The three slices are walked in lockstep; if their lengths differ the extra tail of the
  /// longer ones is ignored. Callers holding a single paper-wide affiliation should use
  /// [`Paper::non_academic_authors`] which broadcasts it for them.
  pub fn identify_non_academic_authors<S: AsRef<str>>(
    &self,
    authors: &[S],
    affiliations: &[S],
    emails: &[S],
  ) -> Vec<String> {
    authors
      .iter()
      .zip(affiliations)
      .zip(emails)
      .filter_map(|((author, affiliation), email)| {
        let classification = self.classify(affiliation.as_ref(), email.as_ref());
        trace!("{} classified as {classification}", author.as_ref());
        classification.is_non_academic().then(|| author.as_ref().to_string())
      })
      .collect()
  }
}

/// [`Heuristics::identify_non_academic_authors`] with the stock keyword lists.
pub fn identify_non_academic_authors<S: AsRef<str>>(
  authors: &[S],
  affiliations: &[S],
  emails: &[S],
) -> Vec<String> {
  Heuristics::default().identify_non_academic_authors(authors, affiliations, emails)
}

/// Everything after the last `@`, or `""` when there is none.
fn email_domain(email: &str) -> &str { email.rsplit_once('@').map_or("", |(_, domain)| domain) }

/// Substring test of `haystack` against every keyword.
fn contains_any(haystack: &str, keywords: &[String]) -> bool {
  keywords.iter().any(|keyword| haystack.contains(keyword.as_str()))
}
