// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap and set up logging
// 2. Validate them into a CrawlConfig (bad input stops us before any fetch)
// 3. Crawl, then render and save the sitemap
// 4. Print a summary (or JSON) and exit with the right code:
//    0 = sitemap written, 2 = bad configuration or the sitemap couldn't be
//    saved. Pages that failed to load never change the exit code.
// =============================================================================

mod cli;
mod config;
mod crawl;
mod fetch;
mod links;
mod sitemap;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::CrawlConfig;
use crawl::{CrawlReport, Crawler};
use fetch::HttpFetcher;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = CrawlConfig::new(&cli.seed_url, cli.delay_ms, cli.limit)?;
    let fetcher = HttpFetcher::new(Duration::from_secs(cli.timeout_secs), cli.retries)
        .context("failed to build HTTP client")?;

    let cancel = Arc::new(AtomicBool::new(false));
    spawn_cancel_triggers(cancel.clone(), cli.max_duration_secs);

    let mut crawler = Crawler::new(config, fetcher).with_cancel_flag(cancel);
    crawler.run().await;
    info!(pages = crawler.tracker().len(), "Crawl finished");

    let report = crawler.report();
    let document = sitemap::render(crawler.tracker().snapshot_ordered());

    // A failed save is reported, but the crawl result is still printed
    let saved = sitemap::persist(&document, &cli.output).await;

    print_report(&report, cli.json)?;

    match saved {
        Ok(()) => {
            if !cli.json {
                println!(
                    "🗺️  Sitemap with {} URL(s) saved to {}",
                    document.url_count(),
                    cli.output.display()
                );
            }
            Ok(0)
        }
        Err(e) => {
            error!("{}", e);
            Ok(2)
        }
    }
}

// Logs go to stderr so --json output on stdout stays machine-readable.
// RUST_LOG wins over --verbose when both are set.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Ctrl-C and --max-duration-secs both end the crawl the same way: by setting
// the flag the crawler checks before every page.
fn spawn_cancel_triggers(cancel: Arc<AtomicBool>, max_duration_secs: Option<u64>) {
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, finishing current page");
            on_signal.store(true, Ordering::Relaxed);
        }
    });

    if let Some(secs) = max_duration_secs {
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(secs)).await;
            warn!(secs, "Maximum crawl duration reached");
            cancel.store(true, Ordering::Relaxed);
        });
    }
}

fn print_report(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        print_summary(report);
    }
    Ok(())
}

fn print_summary(report: &CrawlReport) {
    println!();
    println!("🔍 Crawled from {}", report.seed);

    if !report.failed.is_empty() {
        println!("{:<70} {:<30}", "URL", "ERROR");
        println!("{}", "=".repeat(100));
        for failed in &report.failed {
            println!("{:<70} {:<30}", failed.url, failed.error);
        }
        println!();
    }

    println!("📊 Summary:");
    println!("   ✅ OK: {}", report.succeeded());
    println!("   ❌ Failed: {}", report.failed.len());
    println!("   📋 Visited: {}", report.visited.len());

    if report.limit_reached {
        println!("   ⛔ Page limit reached");
    }
    if report.cancelled {
        println!("   ⏹️  Crawl was cancelled before finishing");
    }
}
