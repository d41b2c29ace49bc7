// ABOUTME: CLI for extracting liiga.fi statistics tables.
// ABOUTME: Reads saved pages or fetches a range of seasons, combines them into one table, prints JSON.

mod fetch;
mod options;
mod output;

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use liiga_stats::{
    scrape_page, Dataset, Page, PageKind, RecordTable, DEFAULT_BASE_URL, REGULAR_SEASON,
};
use tracing::info;
use tracing_subscriber::{fmt as log_fmt, EnvFilter};

use crate::fetch::Fetcher;
use crate::options::FetchOptions;

/// Page layouts selectable with --kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Standings,
    Players,
    Games,
}

impl From<KindArg> for PageKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Standings => PageKind::SeriesStandings,
            KindArg::Players => PageKind::PlayerStats,
            KindArg::Games => PageKind::GameResults,
        }
    }
}

/// Extract Liiga statistics pages into one JSON table.
#[derive(Parser, Debug)]
#[command(name = "liiga")]
#[command(about = "Extract Liiga standings, player stats and game results as JSON", long_about = None)]
struct Args {
    /// Saved HTML pages or page URLs (http/https). Use "-" to read one page from stdin.
    targets: Vec<String>,

    /// Fetch this kind of page for a range of seasons instead of reading targets.
    #[arg(long, value_enum)]
    kind: Option<KindArg>,

    /// First season start year, e.g. 1980 for 1980-1981.
    #[arg(long, requires = "kind")]
    from: Option<u16>,

    /// Last season start year, inclusive (defaults to --from).
    #[arg(long, requires = "from")]
    to: Option<u16>,

    /// Series token used in season URLs.
    #[arg(long, default_value = REGULAR_SEASON)]
    series: String,

    /// Site root used to build season URLs.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// HTTP request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// User-Agent header sent with every request.
    #[arg(long)]
    user_agent: Option<String>,

    /// Store fetched season pages here and reuse them on later runs.
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Output file path (default: stdout).
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Write to liiga_stats_<kind>_<timestamp>.json when no --output is given.
    #[arg(long, default_value_t = false)]
    save: bool,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

/// Where one page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Stdin,
    File(PathBuf),
    Url(String),
    Season(PageKind, u16),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => f.write_str(url),
            Source::Season(kind, year) => write!(f, "{kind} {}-{}", year, u32::from(*year) + 1),
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let sources = plan_sources(&args)?;
    let mut builder = FetchOptions::builder()
        .base_url(args.base_url.clone())
        .series(args.series.clone())
        .timeout(Duration::from_secs(args.timeout_secs))
        .cache_dir(args.cache_dir.clone());
    if let Some(user_agent) = &args.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }
    let fetcher = Fetcher::new(builder.build())?;

    let table = collect(&sources, args.kind.map(PageKind::from), &fetcher)?;
    let rendered = output::render(&table, args.compact).context("serializing table")?;

    let target = args.output.clone().or_else(|| {
        args.save
            .then(|| PathBuf::from(output::default_output_name(table.kind(), &Local::now())))
    });
    match target {
        Some(path) => {
            fs::write(&path, format!("{rendered}\n"))
                .with_context(|| format!("writing {}", path.display()))?;
            info!(rows = table.len(), path = %path.display(), "wrote table");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn init_tracing() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    log_fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();
}

/// Turns the arguments into the ordered list of pages to extract.
fn plan_sources(args: &Args) -> Result<Vec<Source>> {
    if let Some(kind) = args.kind {
        if !args.targets.is_empty() {
            bail!("positional targets cannot be combined with --kind");
        }
        let from = args
            .from
            .ok_or_else(|| anyhow!("--kind requires --from <year>"))?;
        let to = args.to.unwrap_or(from);
        if to < from {
            bail!("--to {to} is before --from {from}");
        }
        let kind = PageKind::from(kind);
        return Ok((from..=to).map(|year| Source::Season(kind, year)).collect());
    }

    if args.targets.is_empty() {
        bail!("at least one target is required, or use --kind with --from");
    }

    Ok(args
        .targets
        .iter()
        .map(|target| {
            if target == "-" {
                Source::Stdin
            } else if target.starts_with("http://") || target.starts_with("https://") {
                Source::Url(target.clone())
            } else {
                Source::File(PathBuf::from(target))
            }
        })
        .collect())
}

/// Extracts every source in order and combines the tables.
fn collect(sources: &[Source], expected: Option<PageKind>, fetcher: &Fetcher) -> Result<RecordTable> {
    let mut dataset = expected.map(Dataset::new);

    for source in sources {
        let html = load(source, fetcher)?;
        let table = scrape_page(&Page::parse(&html))
            .with_context(|| format!("extracting {source}"))?;
        info!(source = %source, kind = %table.kind(), rows = table.len(), "extracted page");

        let kind = table.kind();
        dataset
            .get_or_insert_with(|| Dataset::new(kind))
            .push(table)
            .with_context(|| format!("combining {source}"))?;
    }

    let dataset = dataset.ok_or_else(|| anyhow!("no pages to extract"))?;
    info!(pages = dataset.pages(), rows = dataset.len(), "combined pages");
    Ok(dataset.into_table())
}

fn load(source: &Source, fetcher: &Fetcher) -> Result<String> {
    match source {
        Source::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading page from stdin")?;
            Ok(buf)
        }
        Source::File(path) => {
            if !path.exists() {
                return Err(anyhow!("file not found: {}", path.display()));
            }
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        Source::Url(url) => fetcher.get_html(url),
        Source::Season(kind, year) => fetcher.season_page(*kind, *year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("liiga").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn season_range_is_inclusive() {
        let sources = plan_sources(&args(&["--kind", "games", "--from", "2005", "--to", "2007"])).unwrap();
        assert_eq!(
            sources,
            vec![
                Source::Season(PageKind::GameResults, 2005),
                Source::Season(PageKind::GameResults, 2006),
                Source::Season(PageKind::GameResults, 2007),
            ]
        );
    }

    #[test]
    fn to_defaults_to_from() {
        let sources = plan_sources(&args(&["--kind", "players", "--from", "1980"])).unwrap();
        assert_eq!(sources, vec![Source::Season(PageKind::PlayerStats, 1980)]);
    }

    #[test]
    fn targets_are_classified_by_scheme() {
        let sources = plan_sources(&args(&["-", "page.html", "https://liiga.fi/fi/ottelut/2005-2006/runkosarja/"]))
            .unwrap();
        assert_eq!(
            sources,
            vec![
                Source::Stdin,
                Source::File(PathBuf::from("page.html")),
                Source::Url("https://liiga.fi/fi/ottelut/2005-2006/runkosarja/".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_conflicting_or_missing_inputs() {
        assert!(plan_sources(&args(&[])).is_err());
        assert!(plan_sources(&args(&["page.html", "--kind", "games", "--from", "2005"])).is_err());
        assert!(plan_sources(&args(&["--kind", "games"])).is_err());
        assert!(plan_sources(&args(&["--kind", "games", "--from", "2006", "--to", "2005"])).is_err());
    }

    #[test]
    fn season_source_displays_range() {
        assert_eq!(
            Source::Season(PageKind::SeriesStandings, 1980).to_string(),
            "standings 1980-1981"
        );
    }
}
