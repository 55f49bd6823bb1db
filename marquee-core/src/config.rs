//! Provider configuration resolved once at startup.
//!
//! A deployment either talks to the live metadata service or serves the
//! built-in fallback catalog; the choice is made here and never re-checked
//! per request.

use std::time::Duration;

/// Placeholder credential shipped in sample configuration files.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_TMDB_API_KEY";

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_REGION: &str = "US";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    Live(LiveProviderConfig),
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveProviderConfig {
    pub api_key: String,
    pub base_url: String,
    /// Preferred region for streaming availability
    pub region: String,
    /// Applied to every upstream call
    pub request_timeout: Duration,
}

impl LiveProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            region: DEFAULT_REGION.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl ProviderConfig {
    /// Picks live mode for a usable credential and offline mode for a
    /// missing, blank or placeholder one. `configure` only runs in live mode.
    pub fn from_credential<F>(credential: Option<&str>, configure: F) -> Self
    where
        F: FnOnce(LiveProviderConfig) -> LiveProviderConfig,
    {
        match credential.map(str::trim) {
            Some(key) if is_usable_credential(key) => {
                ProviderConfig::Live(configure(LiveProviderConfig::new(key)))
            }
            _ => ProviderConfig::Offline,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, ProviderConfig::Live(_))
    }
}

pub fn is_usable_credential(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != PLACEHOLDER_API_KEY
}
