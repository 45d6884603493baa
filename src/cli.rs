// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use clap's "derive" API: the struct below IS the CLI. Each field is an
// argument, the doc comments become the --help text, and the #[arg(...)]
// attributes say whether it's positional, a flag, and what the default is.
//
// Everything here is raw user input. Turning it into a validated
// CrawlConfig happens in config.rs.
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_DELAY_MS, DEFAULT_PAGE_LIMIT};

#[derive(Parser, Debug)]
#[command(
    name = "site-mapper",
    version,
    about = "Crawl a website and write an XML sitemap of every page visited",
    long_about = "site-mapper starts at a seed URL, follows every link that starts with that URL, \
                  visits each page at most once, stops after a page limit, and writes the \
                  visited pages as a sitemaps.org XML file."
)]
pub struct Cli {
    /// Seed URL (e.g., https://example.com/docs/)
    ///
    /// Crawling starts here, and only links starting with this exact
    /// string are followed.
    pub seed_url: String,

    /// Milliseconds to wait after each page before moving on
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Maximum number of distinct pages to visit
    #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
    pub limit: usize,

    /// Where to write the sitemap
    #[arg(long, short, default_value = "sitemap.xml")]
    pub output: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Extra attempts for timeouts, connection errors and 5xx responses
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Stop starting new fetches after this many seconds
    #[arg(long)]
    pub max_duration_secs: Option<u64>,

    /// Print the crawl report as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    /// Log every discovered link and skipped href (same as RUST_LOG=debug)
    #[arg(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["site-mapper", "https://ex.com/"]).unwrap();
        assert_eq!(cli.seed_url, "https://ex.com/");
        assert_eq!(cli.delay_ms, 50);
        assert_eq!(cli.limit, 50);
        assert_eq!(cli.output, PathBuf::from("sitemap.xml"));
        assert_eq!(cli.max_duration_secs, None);
        assert!(!cli.json);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "site-mapper",
            "https://ex.com/",
            "--delay-ms",
            "0",
            "--limit",
            "3",
            "-o",
            "out.xml",
            "--retries",
            "2",
            "--max-duration-secs",
            "60",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.delay_ms, 0);
        assert_eq!(cli.limit, 3);
        assert_eq!(cli.output, PathBuf::from("out.xml"));
        assert_eq!(cli.retries, 2);
        assert_eq!(cli.max_duration_secs, Some(60));
        assert!(cli.json);
    }

    #[test]
    fn test_seed_required() {
        assert!(Cli::try_parse_from(["site-mapper"]).is_err());
    }
}
