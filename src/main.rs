// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up tracing (diagnostics on stderr)
// 3. Dispatch to the appropriate subcommand handler
// 4. Stream the live crawl log, then print the final report
// 5. Exit with proper code (0 = nothing found, 1 = findings, 2 = error)
// =============================================================================

mod cli; // src/cli.rs - command-line parsing

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

use trinetra::checker::Classifier;
use trinetra::{report, CrawlTarget, Crawler, ScanConfig};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = no broken links or candidates
//   Ok(1) = something was found
//   Err   = bad input or unexpected error (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Scan {
            target_url,
            max_depth,
            timeout,
            user_agent,
            json,
        } => {
            let config = ScanConfig::default()
                .with_timeout(Duration::from_secs(timeout))
                .with_user_agent(user_agent);
            handle_scan(&target_url, max_depth, config, json).await
        }
        Commands::Classify { urls } => handle_classify(&urls),
    }
}

// Diagnostics go to stderr so `--json` output on stdout stays clean
fn init_tracing(verbose: bool) {
    let filter = if verbose { "trinetra=debug" } else { "trinetra=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// Handles the 'scan' subcommand
async fn handle_scan(target_url: &str, max_depth: usize, config: ScanConfig, json: bool) -> Result<i32> {
    // Reject bad input before anything is spawned
    let target = CrawlTarget::new(target_url, max_depth)?;
    let crawler = Crawler::new(&config)?;

    if !json {
        println!("🔍 Scanning website: {}", target.seed());
        println!("📊 Max crawl depth: {}\n", max_depth);
    }

    let mut handle = crawler.start(target);

    // Ctrl-C stops the crawl but still prints what was found so far
    let token = handle.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    });

    while let Some(event) = handle.next_log().await {
        if json {
            eprintln!("{}", event);
        } else {
            println!("{}", event);
        }
    }

    let result = handle.finish().await?;

    if json {
        println!("{}", report::render_json(&result)?);
    } else {
        println!();
        print!("{}", report::render_text(&result));
    }

    Ok(if result.has_findings() { 1 } else { 0 })
}

// Handles the 'classify' subcommand
fn handle_classify(urls: &[String]) -> Result<i32> {
    let classifier = Classifier::from_config(&ScanConfig::default())?;

    let mut flagged = 0;
    for url in urls {
        if classifier.classify(url) {
            flagged += 1;
            println!("CANDIDATE  {}", url);
        } else {
            println!("-          {}", url);
        }
    }

    Ok(if flagged > 0 { 1 } else { 0 })
}
