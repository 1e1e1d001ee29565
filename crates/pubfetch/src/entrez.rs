//! Record fetching from NCBI's Entrez E-utilities.
//!
//! The pipeline only needs two things from a transport: the PubMed identifiers matching a
//! query, and the raw MEDLINE text for one identifier. Those are captured by
//! [`RecordSource`]; [`EntrezClient`] is the real implementation, tests plug in their own.
//!
//! NCBI asks every caller to identify itself with `tool` and `email` parameters, and
//! optionally an API key for a higher rate limit. These come from an explicit
//! [`EntrezConfig`] handed to [`EntrezClient::new`].
//!
//! # Examples
//!
//! ```no_run
//! use pubfetch::{
//!   entrez::{EntrezClient, EntrezConfig},
//!   prelude::*,
//! };
//!
//! # async fn example() -> Result<(), PubfetchError> {
//! let config = EntrezConfig { email: Some("someone@example.org".into()), ..Default::default() };
//! let client = EntrezClient::new(config)?;
//!
//! for id in client.search("tirzepatide", 3).await? {
//!   println!("{}", client.fetch(&id).await?);
//! }
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use quick_xml::{events::Event, Reader};
use reqwest::Client;

use super::*;

/// Default location of the E-utilities.
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/";

/// Default value sent as the `tool` parameter.
pub const DEFAULT_TOOL: &str = "pubfetch";

/// Source of raw MEDLINE records.
///
/// Implementations report failures as errors; deciding what a failure means for the batch
/// is left to [`pipeline::fetch_papers`](crate::pipeline::fetch_papers).
#[async_trait]
pub trait RecordSource: Send + Sync {
  /// Returns at most `max_results` PubMed identifiers matching `query`.
  async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>>;

  /// Returns the MEDLINE text record for a single identifier.
  async fn fetch(&self, id: &str) -> Result<String>;
}

/// Connection settings for the E-utilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntrezConfig {
  /// Contact address NCBI can use to reach whoever runs the tool
  pub email:    Option<String>,
  /// Name of the calling application, sent as `tool`
  pub tool:     String,
  /// Optional NCBI API key
  pub api_key:  Option<String>,
  /// Base URL the `esearch.fcgi` and `efetch.fcgi` endpoints hang off
  pub base_url: String,
}

impl Default for EntrezConfig {
  fn default() -> Self {
    Self {
      email:    None,
      tool:     DEFAULT_TOOL.to_string(),
      api_key:  None,
      base_url: DEFAULT_BASE_URL.to_string(),
    }
  }
}

impl EntrezConfig {
  /// Builds the full URL of an E-utility such as `esearch.fcgi`.
  fn endpoint(&self, utility: &str) -> String {
    format!("{}/{utility}", self.base_url.trim_end_matches('/'))
  }

  /// Identification parameters attached to every request.
  fn identification(&self) -> Vec<(&'static str, String)> {
    let mut params = vec![("tool", self.tool.clone())];
    if let Some(email) = &self.email {
      params.push(("email", email.clone()));
    }
    if let Some(api_key) = &self.api_key {
      params.push(("api_key", api_key.clone()));
    }
    params
  }
}

/// [`RecordSource`] backed by the NCBI E-utilities over HTTPS.
#[derive(Debug, Clone)]
pub struct EntrezClient {
  /// Settings the client was built with
  config: EntrezConfig,
  /// Shared HTTP client
  http:   Client,
}

impl EntrezClient {
  /// Creates a client for the given settings.
  ///
  /// A missing contact email is allowed but logged, since NCBI may throttle or block
  /// anonymous callers.
  pub fn new(config: EntrezConfig) -> Result<Self> {
    if config.email.is_none() {
      warn!("No contact email configured for NCBI; set one with --email or in the config file");
    }

    let http = Client::builder()
      .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
      .timeout(Duration::from_secs(30))
      .connect_timeout(Duration::from_secs(10))
      .build()?;

    Ok(Self { config, http })
  }

  /// Settings this client was built with.
  pub fn config(&self) -> &EntrezConfig { &self.config }

  /// Sends a GET to one utility and returns the body, turning non-2xx into
  /// [`PubfetchError::Api`].
  async fn get(&self, utility: &str, params: Vec<(&'static str, String)>) -> Result<String> {
    let url = self.config.endpoint(utility);
    debug!("Requesting {url} with {params:?}");

    let response = self
      .http
      .get(&url)
      .query(&params)
      .query(&self.config.identification())
      .send()
      .await?;

    let status = response.status();
    let body = response.text().await?;
    trace!("{utility} responded {status}: {body}");

    if !status.is_success() {
      return Err(PubfetchError::Api(format!("{utility} returned {status}: {}", body.trim())));
    }
    Ok(body)
  }
}

#[async_trait]
impl RecordSource for EntrezClient {
  async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
    let params = vec![
      ("db", "pubmed".to_string()),
      ("term", query.to_string()),
      ("retmax", max_results.to_string()),
      ("retmode", "xml".to_string()),
    ];
    let body = self.get("esearch.fcgi", params).await?;
    let ids = parse_id_list(&body)?;
    debug!("esearch found {} identifiers for {query:?}", ids.len());
    Ok(ids)
  }

  async fn fetch(&self, id: &str) -> Result<String> {
    let params = vec![
      ("db", "pubmed".to_string()),
      ("id", id.to_string()),
      ("rettype", "medline".to_string()),
      ("retmode", "text".to_string()),
    ];
    self.get("efetch.fcgi", params).await
  }
}

/// Extracts the `<IdList><Id>` values from an esearch XML response.
///
/// An `<ERROR>` element anywhere in the document is reported as [`PubfetchError::Api`];
/// NCBI answers malformed queries that way with a 200 status.
pub fn parse_id_list(xml: &str) -> Result<Vec<String>> {
  let mut reader = Reader::from_str(xml);
  let mut ids = Vec::new();
  let mut path: Vec<Vec<u8>> = Vec::new();

  loop {
    match reader.read_event()? {
      Event::Start(ref e) => path.push(e.name().as_ref().to_vec()),
      Event::End(_) => {
        path.pop();
      },
      Event::Text(e) => {
        let Ok(text) = e.unescape() else { continue };
        let text = text.trim();
        if text.is_empty() {
          continue;
        }
        match path.as_slice() {
          [.., parent, tag] if parent.as_slice() == b"IdList" && tag.as_slice() == b"Id" =>
            ids.push(text.to_string()),
          [.., tag] if tag.as_slice() == b"ERROR" =>
            return Err(PubfetchError::Api(format!("esearch error: {text}"))),
          _ => (),
        }
      },
      Event::Eof => break,
      _ => (),
    }
  }

  Ok(ids)
}
