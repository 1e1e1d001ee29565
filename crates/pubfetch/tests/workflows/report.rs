use super::*;

#[tokio::test]
async fn test_csv_has_one_row_per_paper() -> TestResult<()> {
  let papers = fetch_papers(&fixture_source(), "glp-1", 10, FailurePolicy::AllOrNothing).await;
  let dir = tempdir()?;
  let path = dir.path().join("results.csv");

  format::save_to_csv(&papers, &Heuristics::default(), &path)?;

  let mut reader = csv::Reader::from_path(&path)?;
  let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
  assert_eq!(headers, format::CSV_HEADER);

  let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
  assert_eq!(rows.len(), papers.len());
  assert_eq!(&rows[0][0], "38012345");
  assert_eq!(&rows[0][3], "Doe J, Smith A");
  assert_eq!(&rows[0][5], "alan.smith@acmebio.com");
  assert_eq!(&rows[1][0], "38054321");
  assert_eq!(&rows[1][3], "");
  Ok(())
}

#[test]
fn test_csv_line_count_is_papers_plus_header() -> TestResult<()> {
  let papers: Vec<Paper> = (0..5)
    .map(|i| Paper {
      pubmed_id: Some(i.to_string()),
      authors: vec![format!("Author {i}")],
      ..Default::default()
    })
    .collect();

  let dir = tempdir()?;
  let path = dir.path().join("five.csv");
  format::save_to_csv(&papers, &Heuristics::default(), &path)?;

  let content = std::fs::read_to_string(&path)?;
  assert_eq!(content.lines().count(), papers.len() + 1);
  // No affiliation at all: every author takes the default non-academic path.
  assert!(content.lines().nth(1).unwrap().contains("Author 0"));
  Ok(())
}

#[test]
fn test_save_to_csv_into_missing_directory_fails() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("no").join("such").join("dir.csv");
  let err = format::save_to_csv(&[], &Heuristics::default(), &path).unwrap_err();
  assert!(matches!(err, PubfetchError::Io(_)));
}

#[tokio::test]
async fn test_console_report_for_fixtures() -> TestResult<()> {
  let papers = fetch_papers(&fixture_source(), "glp-1", 10, FailurePolicy::AllOrNothing).await;
  let mut out = Vec::new();
  format::write_console(&papers, &Heuristics::default(), &mut out)?;
  let out = String::from_utf8(out)?;

  assert_eq!(out.matches(&"-".repeat(80)).count(), 2);
  assert!(out.contains("Non-academic Authors: Doe J, Smith A\n"));
  assert!(out.contains("PubmedID: 38054321\n"));
  assert!(out.contains("Non-academic Authors: N/A\n"));
  Ok(())
}
