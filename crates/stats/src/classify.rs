// ABOUTME: Page classification from the canonical og:url metadata.
// ABOUTME: Derives PageContext (year, series, kind) from the tilastot/ottelut URL templates.

use tracing::debug;
use url::Url;

use crate::error::ExtractError;
use crate::models::{PageContext, PageKind};
use crate::page::Page;

const STATS_SECTION: &str = "tilastot";
const GAMES_SECTION: &str = "ottelut";

/// Classifies a page by the canonical URL in its `og:url` metadata.
///
/// # Returns
/// * `Ok(PageContext)` - Year, series, and kind of the page
/// * `Err(ExtractError::InvalidInput)` - Missing metadata or an unrecognized URL
pub fn classify(page: &Page) -> Result<PageContext, ExtractError> {
    let url = page
        .meta_property("og:url")
        .ok_or_else(|| ExtractError::invalid_input("page has no og:url metadata"))?;
    classify_url(url)
}

/// Classifies an absolute canonical URL.
pub fn classify_url(url: &str) -> Result<PageContext, ExtractError> {
    let parsed = Url::parse(url).map_err(|e| {
        ExtractError::invalid_input(format!("canonical URL {url:?} does not parse: {e}"))
    })?;
    classify_path(parsed.path())
}

/// Classifies a URL path such as `/fi/tilastot/1980-1981/runkosarja/joukkueet/`.
///
/// The leading language segment is optional: `/tilastot/...` is accepted as well.
pub fn classify_path(path: &str) -> Result<PageContext, ExtractError> {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    // Skip the language prefix unless the path starts with a section.
    let offset = match segments.first() {
        Some(&first) if is_section(first) => 0,
        _ => 1,
    };

    let (range, series, kind) = match segments.get(offset..) {
        Some([STATS_SECTION, range, series, subsection]) => {
            let kind = PageKind::from_stats_subsection(subsection).ok_or_else(|| {
                ExtractError::invalid_input(format!(
                    "unrecognized statistics subsection {subsection:?} in {path:?}"
                ))
            })?;
            (*range, *series, kind)
        }
        Some([GAMES_SECTION, range, series]) => (*range, *series, PageKind::GameResults),
        Some([section, ..]) if !is_section(section) => {
            return Err(ExtractError::invalid_input(format!(
                "unrecognized section {section:?} in {path:?}"
            )))
        }
        _ => {
            return Err(ExtractError::invalid_input(format!(
                "path {path:?} matches no known page template"
            )))
        }
    };

    let year = season_start_year(range)
        .ok_or_else(|| ExtractError::invalid_input(format!("bad season token {range:?} in {path:?}")))?;

    if series.is_empty() {
        return Err(ExtractError::invalid_input(format!("empty series in {path:?}")));
    }

    let context = PageContext {
        year: year.to_string(),
        series: series.to_string(),
        kind,
    };
    debug!(path, year = %context.year, series = %context.series, kind = %context.kind, "classified page");
    Ok(context)
}

fn is_section(segment: &str) -> bool {
    segment == STATS_SECTION || segment == GAMES_SECTION
}

/// Text before the first `-` of a season token like `1980-1981`, if it is a
/// four digit year.
fn season_start_year(range: &str) -> Option<&str> {
    let year = range.split('-').next()?;
    (year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())).then_some(year)
}
