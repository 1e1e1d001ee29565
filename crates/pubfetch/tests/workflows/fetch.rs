use super::*;

#[tokio::test]
async fn test_fixture_records_parse() -> TestResult<()> {
  let papers = fetch_papers(&fixture_source(), "glp-1", 10, FailurePolicy::AllOrNothing).await;
  assert_eq!(papers.len(), 2);

  let industry = &papers[0];
  assert_eq!(industry.pubmed_id.as_deref(), Some("38012345"));
  assert_eq!(
    industry.title.as_deref(),
    Some("Oral GLP-1 receptor agonist pharmacokinetics in healthy volunteers.")
  );
  assert_eq!(industry.publication_date.as_deref(), Some("2023 Dec 4"));
  assert_eq!(industry.authors, vec!["Doe J", "Smith A"]);
  assert_eq!(
    industry.affiliation.as_deref(),
    Some("Acme Biotech Inc, Cambridge, MA, USA. alan.smith@acmebio.com.")
  );
  assert_eq!(industry.email.as_deref(), Some("alan.smith@acmebio.com"));

  let academic = &papers[1];
  assert_eq!(academic.authors, vec!["Lee K", "Park M"]);
  assert_eq!(
    academic.affiliation.as_deref(),
    Some("Sleep Research Center, Example University, Boston, MA, USA.")
  );
  assert_eq!(academic.email.as_deref(), Some("mpark@example.edu"));
  Ok(())
}

#[tokio::test]
async fn test_classification_uses_shared_affiliation() {
  let papers = fetch_papers(&fixture_source(), "glp-1", 10, FailurePolicy::AllOrNothing).await;
  let heuristics = Heuristics::default();

  // Doe J's own affiliation never reaches the classifier; the last AD line speaks for both.
  assert_eq!(papers[0].non_academic_authors(&heuristics), vec!["Doe J", "Smith A"]);
  assert!(papers[1].non_academic_authors(&heuristics).is_empty());
}

#[tokio::test]
async fn test_failing_record_policies() {
  let source = fixture_source().with_failing("1");

  assert!(fetch_papers(&source, "q", 10, FailurePolicy::AllOrNothing).await.is_empty());

  let papers = fetch_papers(&source, "q", 10, FailurePolicy::SkipFailed).await;
  assert_eq!(papers.len(), 2);
  assert!(papers.iter().all(|p| p.pubmed_id.as_deref() != Some("1")));
}

#[test]
fn test_pipeline_matches_direct_parse() {
  let papers = tokio_test::block_on(fetch_papers(
    &FixtureSource::default().with_record("38054321", ACADEMIC),
    "sleep",
    1,
    FailurePolicy::AllOrNothing,
  ));
  assert_eq!(papers, vec![parse_record(ACADEMIC)]);
}

#[tokio::test]
async fn test_batched_payload_matches_per_record_fetch() {
  let payload = format!("{INDUSTRY}\n{ACADEMIC}");
  assert_eq!(split_records(&payload).len(), 2);

  let papers = fetch_papers(&fixture_source(), "glp-1", 10, FailurePolicy::AllOrNothing).await;
  assert_eq!(parse_records(&payload), papers);
}
