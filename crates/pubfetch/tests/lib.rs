use std::{collections::BTreeMap, error::Error};

use async_trait::async_trait;
use pubfetch::{
  classify::Heuristics,
  format,
  medline::{parse_record, parse_records, split_records},
  paper::Paper,
  pipeline::{fetch_papers, FailurePolicy},
  prelude::*,
};
use tempfile::tempdir;

mod workflows;

pub type TestResult<T> = Result<T, Box<dyn Error>>;

pub const INDUSTRY: &str = include_str!("fixtures/industry.medline");
pub const ACADEMIC: &str = include_str!("fixtures/academic.medline");

/// In-memory stand-in for NCBI: search returns every known identifier in insertion order,
/// fetch fails for identifiers listed in `failing`.
#[derive(Default)]
pub struct FixtureSource {
  pub records: Vec<(String, String)>,
  pub failing: Vec<String>,
}

impl FixtureSource {
  pub fn with_record(mut self, id: &str, record: &str) -> Self {
    self.records.push((id.to_string(), record.to_string()));
    self
  }

  pub fn with_failing(mut self, id: &str) -> Self {
    self.records.push((id.to_string(), String::new()));
    self.failing.push(id.to_string());
    self
  }
}

#[async_trait]
impl RecordSource for FixtureSource {
  async fn search(&self, _query: &str, max_results: usize) -> Result<Vec<String>, PubfetchError> {
    Ok(self.records.iter().take(max_results).map(|(id, _)| id.clone()).collect())
  }

  async fn fetch(&self, id: &str) -> Result<String, PubfetchError> {
    if self.failing.iter().any(|f| f == id) {
      return Err(PubfetchError::Api(format!("efetch returned 500 for {id}")));
    }
    let records: BTreeMap<_, _> = self.records.iter().cloned().collect();
    records.get(id).cloned().ok_or_else(|| PubfetchError::Api(format!("unknown id {id}")))
  }
}

pub fn fixture_source() -> FixtureSource {
  FixtureSource::default().with_record("38012345", INDUSTRY).with_record("38054321", ACADEMIC)
}
