// ABOUTME: URL construction and validation for liiga.fi statistics pages.
// ABOUTME: Builds per-season page URLs and rejects source URLs carrying a query string.

use url::Url;

use crate::error::ExtractError;
use crate::models::PageKind;

pub const DEFAULT_BASE_URL: &str = "https://liiga.fi";

/// Series token of the regular season, the only series the site lists tables for.
pub const REGULAR_SEASON: &str = "runkosarja";

/// Builds the page URL for one season starting in `year`.
///
/// ```
/// use liiga_stats::{season_url, PageKind};
///
/// let url = season_url("https://liiga.fi", PageKind::SeriesStandings, 1980, "runkosarja").unwrap();
/// assert_eq!(url.as_str(), "https://liiga.fi/fi/tilastot/1980-1981/runkosarja/joukkueet/");
/// ```
pub fn season_url(
    base: &str,
    kind: PageKind,
    year: u16,
    series: &str,
) -> Result<Url, ExtractError> {
    let base = Url::parse(base)
        .map_err(|e| ExtractError::invalid_input(format!("bad base URL {base:?}: {e}")))?;
    let season = format!("{}-{}", year, u32::from(year) + 1);
    let path = match kind {
        PageKind::SeriesStandings => format!("/fi/tilastot/{season}/{series}/joukkueet/"),
        PageKind::PlayerStats => format!("/fi/tilastot/{season}/{series}/pelaajat/"),
        PageKind::GameResults => format!("/fi/ottelut/{season}/{series}/"),
    };
    base.join(&path)
        .map_err(|e| ExtractError::invalid_input(format!("cannot build page URL {path:?}: {e}")))
}

/// Checks that a URL is a plain http(s) page address.
///
/// Statistics pages are addressed by path only; a query string means the
/// URL points at a filtered or paginated view the extractor does not handle.
pub fn validate_source_url(raw: &str) -> Result<Url, ExtractError> {
    let url = Url::parse(raw)
        .map_err(|e| ExtractError::invalid_input(format!("invalid URL {raw:?}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ExtractError::invalid_input(format!(
            "unsupported URL scheme {:?}",
            url.scheme()
        )));
    }
    if url.query().is_some() {
        return Err(ExtractError::invalid_input(format!(
            "URL {raw:?} must not carry a query string"
        )));
    }
    Ok(url)
}
