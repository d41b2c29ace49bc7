// ABOUTME: Core extraction library for liiga.fi statistics pages.
// ABOUTME: Classifies pages and turns standings, player stats, and game results into record tables.

//! Liiga statistics extraction.
//!
//! ```no_run
//! use liiga_stats::{scrape_page, Page};
//!
//! let html = std::fs::read_to_string("joukkueet.html").unwrap();
//! let table = scrape_page(&Page::parse(&html)).unwrap();
//! println!("{} rows of {}", table.len(), table.kind());
//! ```

pub mod classify;
pub mod columns;
pub mod dataset;
pub mod error;
pub mod extract;
pub mod models;
pub mod page;
pub mod urls;

pub use classify::{classify, classify_path, classify_url};
pub use columns::{translate_label, StandingsLabel};
pub use dataset::Dataset;
pub use error::ExtractError;
pub use extract::{extract, scrape_page, split_composite};
pub use models::{PageContext, PageKind, Record, RecordTable, SERIES_COLUMN, YEAR_COLUMN};
pub use page::{Locator, Node, Page};
pub use urls::{season_url, validate_source_url, DEFAULT_BASE_URL, REGULAR_SEASON};
