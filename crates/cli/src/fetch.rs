// ABOUTME: Blocking HTTP retrieval of liiga.fi pages with an optional on-disk page cache.
// ABOUTME: Season pages are cached as <kind>_<series>_<year>.html and reused on later runs.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use liiga_stats::{season_url, validate_source_url, PageKind};
use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::options::FetchOptions;

pub struct Fetcher {
    client: Client,
    opts: FetchOptions,
}

impl Fetcher {
    pub fn new(opts: FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.clone())
            .build()
            .context("building HTTP client")?;
        Ok(Self { client, opts })
    }

    /// GETs a page and returns its body. Non-2xx responses are errors.
    pub fn get_html(&self, raw_url: &str) -> Result<String> {
        let url = validate_source_url(raw_url)?;
        info!(url = %url, "fetching page");
        let body = self
            .client
            .get(url.clone())
            .send()
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("GET {url}"))?
            .text()
            .with_context(|| format!("reading body from {url}"))?;
        debug!(url = %url, bytes = body.len(), "fetched page");
        Ok(body)
    }

    /// Loads the page of one season, from the cache when present.
    pub fn season_page(&self, kind: PageKind, year: u16) -> Result<String> {
        let cached = self.cache_path(kind, year);
        if let Some(path) = &cached {
            if path.exists() {
                info!(path = %path.display(), "using cached page");
                return fs::read_to_string(path)
                    .with_context(|| format!("reading cached page {}", path.display()));
            }
        }

        let url = season_url(&self.opts.base_url, kind, year, &self.opts.series)?;
        let html = self.get_html(url.as_str())?;

        if let Some(path) = &cached {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating cache dir {}", parent.display()))?;
            }
            fs::write(path, &html)
                .with_context(|| format!("writing cached page {}", path.display()))?;
            debug!(path = %path.display(), "cached page");
        }
        Ok(html)
    }

    fn cache_path(&self, kind: PageKind, year: u16) -> Option<PathBuf> {
        self.opts
            .cache_dir
            .as_ref()
            .map(|dir| dir.join(cache_file_name(kind, &self.opts.series, year)))
    }
}

pub fn cache_file_name(kind: PageKind, series: &str, year: u16) -> String {
    format!("{kind}_{series}_{year}.html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_names_are_per_kind_series_and_year() {
        assert_eq!(
            cache_file_name(PageKind::SeriesStandings, "runkosarja", 1980),
            "standings_runkosarja_1980.html"
        );
        assert_eq!(
            cache_file_name(PageKind::GameResults, "runkosarja", 2005),
            "games_runkosarja_2005.html"
        );
    }

    #[test]
    fn cached_page_is_used_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let opts = FetchOptions::builder()
            // nothing listens here; a fetch attempt would fail
            .base_url("http://127.0.0.1:9")
            .cache_dir(Some(dir.path().to_path_buf()))
            .build();
        let file = dir.path().join(cache_file_name(PageKind::PlayerStats, "runkosarja", 1999));
        fs::write(&file, "<html>cached</html>").unwrap();

        let fetcher = Fetcher::new(opts).unwrap();
        let html = fetcher.season_page(PageKind::PlayerStats, 1999).unwrap();
        assert_eq!(html, "<html>cached</html>");
    }
}
