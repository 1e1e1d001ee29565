//! The single `get-papers-list` command: fetch, classify, report.

use std::io::Write;

use pubfetch::{entrez::EntrezClient, format, pipeline::fetch_papers};

use super::*;

/// Loads the configuration, applying command line overrides on top of the file.
pub fn load_config(cli: &Cli) -> Result<Config> {
  let mut config = Config::load(cli.config.as_deref())?;
  if let Some(email) = &cli.email {
    config = config.with_email(email.clone());
  }
  if let Some(api_key) = &cli.api_key {
    config = config.with_api_key(api_key.clone());
  }
  config.validate()?;
  Ok(config)
}

/// Runs a query end to end and writes the report to stdout or to `--file`.
pub async fn run(cli: &Cli) -> Result<()> {
  let config = load_config(cli)?;
  let client = EntrezClient::new(config.entrez.clone())?;

  info!("Fetching papers for query: {}", cli.query);
  let papers = fetch_papers(&client, &cli.query, cli.max_results, cli.policy()).await;
  debug!("Retrieved {} papers", papers.len());

  match &cli.file {
    Some(path) => {
      format::save_to_csv(&papers, &config.heuristics, path)?;
      info!("Results saved to {}", path.display());
      eprintln!(
        "{} Saved {} papers to {}",
        style(SUCCESS_PREFIX).green(),
        papers.len(),
        style(path.display()).cyan()
      );
    },
    None => {
      let stdout = std::io::stdout();
      let mut handle = stdout.lock();
      format::write_console(&papers, &config.heuristics, &mut handle)?;
      handle.flush()?;
    },
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_cli_defaults() {
    let cli = Cli::try_parse_from(["get-papers-list", "aspirin"]).unwrap();
    assert_eq!(cli.query, "aspirin");
    assert_eq!(cli.max_results, 10);
    assert!(!cli.debug);
    assert!(cli.file.is_none());
    assert_eq!(cli.policy(), FailurePolicy::AllOrNothing);
  }

  #[test]
  fn test_cli_short_and_long_flags() {
    let args = ["get-papers-list", "q", "-f", "out.csv", "-d", "-m", "3", "--skip-failed"];
    let cli = Cli::try_parse_from(args).unwrap();
    assert_eq!(cli.file, Some(PathBuf::from("out.csv")));
    assert!(cli.debug);
    assert_eq!(cli.max_results, 3);
    assert_eq!(cli.policy(), FailurePolicy::SkipFailed);

    let cli = Cli::try_parse_from(["get-papers-list", "q", "--max_results", "5"]).unwrap();
    assert_eq!(cli.max_results, 5);
    let cli = Cli::try_parse_from(["get-papers-list", "q", "--max-results", "6"]).unwrap();
    assert_eq!(cli.max_results, 6);
  }

  #[test]
  fn test_query_is_required() {
    assert!(Cli::try_parse_from(["get-papers-list"]).is_err());
  }

  #[test]
  fn test_email_override() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[entrez]\nemail = \"file@example.org\"\n").unwrap();

    let cli = Cli::try_parse_from([
      "get-papers-list",
      "q",
      "--config",
      path.to_str().unwrap(),
      "--email",
      "flag@example.org",
    ])
    .unwrap();
    let config = load_config(&cli).unwrap();
    assert_eq!(config.entrez.email.as_deref(), Some("flag@example.org"));
    assert_eq!(config.entrez.api_key, None);
  }

  #[test]
  fn test_api_key_override() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[entrez]\napi_key = \"from-file\"\n").unwrap();

    let args = ["get-papers-list", "q", "--config", path.to_str().unwrap(), "--api-key", "k"];
    let config = load_config(&Cli::try_parse_from(args).unwrap()).unwrap();
    assert_eq!(config.entrez.api_key.as_deref(), Some("k"));
  }

  #[test]
  fn test_bad_email_override_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    let cli = Cli::try_parse_from([
      "get-papers-list",
      "q",
      "--config",
      path.to_str().unwrap(),
      "--email",
      "nope",
    ])
    .unwrap();
    assert!(matches!(load_config(&cli), Err(PubfetchdError::Pubfetch(PubfetchError::Config(_)))));
  }
}
