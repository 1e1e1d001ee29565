//! TOML configuration.
//!
//! Everything is optional; a missing file or section means stock settings.
//!
//! ```toml
//! [entrez]
//! email   = "someone@example.org"
//! tool    = "pubfetch"
//! api_key = "0123456789abcdef"
//!
//! [heuristics]
//! free_email_domains = ["gmail.com", "yahoo.com", "outlook.com", "hotmail.com"]
//! ```

use super::*;
use crate::entrez::EntrezConfig;

/// Settings for a pubfetch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// How to reach and identify ourselves to NCBI
  pub entrez:     EntrezConfig,
  /// Keyword and domain lists used to classify authors
  pub heuristics: Heuristics,
}

impl Config {
  /// Platform-specific default location of the configuration file.
  ///
  /// - On Unix: `~/.config/pubfetch/config.toml`
  /// - On macOS: `~/Library/Application Support/pubfetch/config.toml`
  /// - On Windows: `%APPDATA%\pubfetch\config.toml`
  /// - Fallback: `./pubfetch/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("pubfetch").join("config.toml")
  }

  /// Reads and validates a configuration file.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading config from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    content.parse()
  }

  /// Loads `path` if given, else the default file if it exists, else stock settings.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    match path {
      Some(path) => Self::from_path(path),
      None => {
        let default = Self::default_path();
        if default.exists() {
          Self::from_path(default)
        } else {
          debug!("No config file at {}, using defaults", default.display());
          Ok(Self::default())
        }
      },
    }
  }

  /// Sets the contact email sent to NCBI.
  pub fn with_email(mut self, email: impl Into<String>) -> Self {
    self.entrez.email = Some(email.into());
    self
  }

  /// Sets the NCBI API key.
  pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
    self.entrez.api_key = Some(api_key.into());
    self
  }

  /// Replaces the classifier lists.
  pub fn with_heuristics(mut self, heuristics: Heuristics) -> Self {
    self.heuristics = heuristics.normalized();
    self
  }

  /// Checks values that deserialize fine but cannot work.
  pub fn validate(&self) -> Result<()> {
    if let Some(email) = &self.entrez.email {
      if !email.contains('@') {
        return Err(PubfetchError::Config(format!(
          "Contact email {email:?} is not an email address"
        )));
      }
    }
    if self.entrez.tool.trim().is_empty() {
      return Err(PubfetchError::Config("Entrez tool name must not be empty".into()));
    }
    let base_url = &self.entrez.base_url;
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
      return Err(PubfetchError::Config(format!(
        "Entrez base_url {base_url:?} must be an http(s) URL"
      )));
    }
    Ok(())
  }
}

impl std::str::FromStr for Config {
  type Err = PubfetchError;

  fn from_str(s: &str) -> Result<Self> {
    let mut config: Config = toml::from_str(s)?;
    config.heuristics = config.heuristics.normalized();
    config.validate()?;
    Ok(config)
  }
}
