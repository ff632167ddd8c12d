//! Site configuration
//!
//! A blog is described by a small YAML file naming the CMS repository and the
//! listing / reading-time parameters:
//!
//! ```yaml
//! api_endpoint: https://my-blog.cdn.prismic.io/api/v2
//! access_token: MC5ZR...
//! page_size: 5
//! locale: pt-BR
//! words_per_minute: 150
//! http:
//!   timeout_secs: 10
//! ```

use crate::error::{Error, Result};
use crate::reading_time::DEFAULT_WORDS_PER_MINUTE;
use crate::render::parse_locale;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Largest page size the CMS accepts
pub const MAX_PAGE_SIZE: u32 = 100;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete site configuration loaded from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogConfig {
    /// Repository API root (e.g. `https://repo.cdn.prismic.io/api/v2`)
    pub api_endpoint: String,

    /// Access token for private repositories
    #[serde(default)]
    pub access_token: Option<String>,

    /// Document type listed as posts
    #[serde(default = "default_document_type")]
    pub document_type: String,

    /// Field projection requested for listing pages
    #[serde(default = "default_fetch")]
    pub fetch: Vec<String>,

    /// Number of posts per listing page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Locale used to format publication dates
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Assumed reading speed
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,

    /// Number of post pages generated ahead of time
    #[serde(default = "default_static_paths")]
    pub static_paths: usize,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_document_type() -> String {
    "post".to_string()
}

fn default_fetch() -> Vec<String> {
    ["post.title", "post.subtitle", "post.first_publication_date", "post.author"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_page_size() -> u32 {
    5
}

fn default_locale() -> String {
    "pt-BR".to_string()
}

fn default_words_per_minute() -> u32 {
    DEFAULT_WORDS_PER_MINUTE
}

fn default_static_paths() -> usize {
    2
}

impl BlogConfig {
    /// Create a config with defaults for everything but the endpoint
    pub fn new(api_endpoint: impl Into<String>) -> Self {
        Self {
            api_endpoint: api_endpoint.into(),
            access_token: None,
            document_type: default_document_type(),
            fetch: default_fetch(),
            page_size: default_page_size(),
            locale: default_locale(),
            words_per_minute: default_words_per_minute(),
            static_paths: default_static_paths(),
            http: HttpConfig::default(),
        }
    }

    /// Set the access token
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Check the config for values the rest of the crate cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.api_endpoint.trim().is_empty() {
            return Err(Error::missing_field("api_endpoint"));
        }
        url::Url::parse(&self.api_endpoint)
            .map_err(|e| Error::invalid_value("api_endpoint", e.to_string()))?;

        if self.document_type.trim().is_empty() {
            return Err(Error::missing_field("document_type"));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(Error::invalid_value(
                "page_size",
                format!("must be between 1 and {MAX_PAGE_SIZE}"),
            ));
        }
        if self.words_per_minute == 0 {
            return Err(Error::invalid_value(
                "words_per_minute",
                "must be greater than zero",
            ));
        }
        parse_locale(&self.locale)?;
        Ok(())
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds (absent = no client-side timeout)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl HttpConfig {
    /// Timeout as a duration
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load and validate a config from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<BlogConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load and validate a config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<BlogConfig> {
    let config: BlogConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}
