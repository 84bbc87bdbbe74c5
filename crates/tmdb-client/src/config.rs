//! Connection settings for the TMDB API.
//!
//! Settings come from the environment (optionally via a `.env` file):
//!
//! | variable            | default                        |
//! |---------------------|--------------------------------|
//! | `TMDB_API_KEY`      | required                       |
//! | `TMDB_BASE_URL`     | `https://api.themoviedb.org/3` |
//! | `TMDB_LANGUAGE`     | `en-US`                        |
//! | `TMDB_TIMEOUT_SECS` | `10`                           |

use std::env;
use std::time::Duration;

use tracing::{debug, info};

use crate::TmdbError;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    /// Base URL without a trailing slash
    pub base_url: String,
    pub language: String,
    /// Whole-request timeout applied by the HTTP client
    pub request_timeout: Duration,
}

impl TmdbConfig {
    /// Config with default endpoint, language and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self, TmdbError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }

        let api_key = env::var("TMDB_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(TmdbError::MissingApiKey)?;

        let mut config = Self::new(api_key);

        if let Ok(base_url) = env::var("TMDB_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        if let Ok(language) = env::var("TMDB_LANGUAGE") {
            config.language = language;
        }
        if let Ok(raw) = env::var("TMDB_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                TmdbError::InvalidConfig(format!("TMDB_TIMEOUT_SECS must be whole seconds, got {raw:?}"))
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        info!(
            "TMDB config: base_url={}, language={}, timeout={:?}",
            config.base_url, config.language, config.request_timeout
        );
        Ok(config)
    }

    /// Point at a different endpoint (builder pattern).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the request timeout (builder pattern).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), TmdbError> {
        if self.api_key.trim().is_empty() {
            return Err(TmdbError::MissingApiKey);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(TmdbError::InvalidConfig(format!(
                "base URL must be http(s), got {:?}",
                self.base_url
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(TmdbError::InvalidConfig("timeout must be non-zero".into()));
        }
        Ok(())
    }
}
