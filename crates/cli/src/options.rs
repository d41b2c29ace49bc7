// ABOUTME: Fetch configuration for the liiga CLI: FetchOptions and its builder.
// ABOUTME: Holds base URL, series, timeout, user agent, and the optional page cache directory.

use std::path::PathBuf;
use std::time::Duration;

use liiga_stats::{DEFAULT_BASE_URL, REGULAR_SEASON};

/// Settings for fetching season pages.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub base_url: String,
    pub series: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Directory where fetched pages are stored and reused from.
    pub cache_dir: Option<PathBuf>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            series: REGULAR_SEASON.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("liiga-stats/{}", env!("CARGO_PKG_VERSION")),
            cache_dir: None,
        }
    }
}

impl FetchOptions {
    pub fn builder() -> FetchOptionsBuilder {
        FetchOptionsBuilder::new()
    }
}

/// Builder for [`FetchOptions`].
#[derive(Debug, Clone)]
pub struct FetchOptionsBuilder {
    opts: FetchOptions,
}

impl FetchOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            opts: FetchOptions::default(),
        }
    }

    /// Set the site root, e.g. `https://liiga.fi`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.opts.base_url = base_url.into();
        self
    }

    /// Set the series token used in season URLs.
    pub fn series(mut self, series: impl Into<String>) -> Self {
        self.opts.series = series.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Cache fetched pages under this directory.
    pub fn cache_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.opts.cache_dir = dir;
        self
    }

    pub fn build(self) -> FetchOptions {
        self.opts
    }
}

impl Default for FetchOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
