// ABOUTME: Integration tests for page classification.
// ABOUTME: Covers both URL templates, rejected paths, and missing or malformed og:url metadata.

use liiga_stats::{classify, classify_path, classify_url, Page, PageContext, PageKind};
use pretty_assertions::assert_eq;

fn page_with_og_url(url: &str) -> Page {
    Page::parse(&format!(
        r#"<html><head><meta property="og:url" content="{url}"></head><body></body></html>"#
    ))
}

#[test]
fn test_standings_path() {
    let ctx = classify_path("/tilastot/1980-1981/runkosarja/joukkueet/").unwrap();
    assert_eq!(
        ctx,
        PageContext {
            year: "1980".to_string(),
            series: "runkosarja".to_string(),
            kind: PageKind::SeriesStandings,
        }
    );
}

#[test]
fn test_games_path() {
    let ctx = classify_path("/ottelut/2005-2006/runkosarja/").unwrap();
    assert_eq!(ctx.year, "2005");
    assert_eq!(ctx.series, "runkosarja");
    assert_eq!(ctx.kind, PageKind::GameResults);
}

#[test]
fn test_players_url_with_language_prefix() {
    let ctx = classify_url("https://www.liiga.fi/fi/tilastot/2019-2020/runkosarja/pelaajat/").unwrap();
    assert_eq!(ctx.kind, PageKind::PlayerStats);
    assert_eq!(ctx.year, "2019");
}

#[test]
fn test_unknown_section_is_invalid_input() {
    let err = classify_path("/foo/2000-2001/runkosarja/bar/").unwrap_err();
    assert!(err.is_invalid_input(), "got {err:?}");

    let err = classify_url("https://liiga.fi/fi/uutiset/2000-2001/runkosarja/").unwrap_err();
    assert!(err.is_invalid_input(), "got {err:?}");
}

#[test]
fn test_unknown_subsection_is_invalid_input() {
    let err = classify_url("https://liiga.fi/fi/tilastot/2000-2001/runkosarja/maalivahdit/").unwrap_err();
    assert!(err.is_invalid_input(), "got {err:?}");
}

#[test]
fn test_year_is_always_four_digits() {
    for start in [1980u16, 1999, 2000, 2019] {
        let url = format!(
            "https://liiga.fi/fi/ottelut/{}-{}/runkosarja/",
            start,
            start + 1
        );
        let ctx = classify_url(&url).unwrap();
        assert_eq!(ctx.year, start.to_string());
        assert_eq!(ctx.year.len(), 4);
    }

    let err = classify_url("https://liiga.fi/fi/ottelut/kausi-2000/runkosarja/").unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_classify_reads_og_url_from_page() {
    let page = page_with_og_url("https://liiga.fi/fi/tilastot/1980-1981/runkosarja/joukkueet/");
    let ctx = classify(&page).unwrap();
    assert_eq!(ctx.kind, PageKind::SeriesStandings);
    assert_eq!(ctx.year, "1980");
}

#[test]
fn test_missing_metadata_is_invalid_input() {
    let page = Page::parse("<html><head><title>Liiga</title></head></html>");
    assert!(classify(&page).unwrap_err().is_invalid_input());

    let page = page_with_og_url("");
    assert!(classify(&page).unwrap_err().is_invalid_input());

    let page = page_with_og_url("/fi/ottelut/2005-2006/runkosarja/");
    assert!(classify(&page).unwrap_err().is_invalid_input());
}

#[test]
fn test_extra_segments_are_invalid_input() {
    for path in [
        "/fi/ottelut/2005-2006/runkosarja/1/",
        "/fi/tilastot/1980-1981/runkosarja/joukkueet/extra/more/",
        "/tilastot/2019-2020/runkosarja/pelaajat/123/",
    ] {
        let err = classify_path(path).unwrap_err();
        assert!(err.is_invalid_input(), "{path}: got {err:?}");
    }

    let err = classify_url("https://liiga.fi/fi/ottelut/2005-2006/runkosarja/1/").unwrap_err();
    assert!(err.is_invalid_input(), "got {err:?}");
}
