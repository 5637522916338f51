// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Two subcommands:
// - scan:     crawl a website and report broken links + BAC/IDOR candidates
// - classify: run only the candidate heuristics over URLs given on the
//             command line (no network access)
// =============================================================================

use clap::{Parser, Subcommand};

use trinetra::config::{DEFAULT_MAX_DEPTH, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "trinetra",
    version,
    about = "Find broken links and access-control candidate endpoints on a website",
    long_about = "trinetra crawls a website within its own origin, depth-first, and reports \
                  pages that answer with an HTTP error as well as URLs that look like \
                  Broken Access Control / IDOR candidates (numeric identifiers, admin-ish paths). \
                  Only scan sites you are authorized to test."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug diagnostics on stderr (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a website and report broken links and BAC/IDOR candidates
    ///
    /// Example: trinetra scan http://testphp.vulnweb.com --max-depth 2
    Scan {
        /// Website URL to start from (must start with http:// or https://)
        target_url: String,

        /// Maximum crawl depth
        ///
        /// Depth 0 = just the starting page
        /// Depth 1 = starting page + all pages it links to
        /// etc.
        #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Per-request timeout in seconds
        #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout: u64,

        /// User-Agent header sent with every request
        #[arg(long, default_value = DEFAULT_USER_AGENT)]
        user_agent: String,

        /// Output the final report as JSON (the live log moves to stderr)
        #[arg(long)]
        json: bool,
    },

    /// Check URLs against the candidate heuristics without fetching them
    ///
    /// Example: trinetra classify "http://example.com/admin?id=5"
    Classify {
        /// One or more URLs to classify
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_defaults() {
        let cli = Cli::try_parse_from(["trinetra", "scan", "http://example.com"]).unwrap();
        match cli.command {
            Commands::Scan {
                target_url,
                max_depth,
                timeout,
                user_agent,
                json,
            } => {
                assert_eq!(target_url, "http://example.com");
                assert_eq!(max_depth, DEFAULT_MAX_DEPTH);
                assert_eq!(timeout, DEFAULT_TIMEOUT_SECS);
                assert_eq!(user_agent, DEFAULT_USER_AGENT);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_non_numeric_depth_is_rejected() {
        let parsed = Cli::try_parse_from(["trinetra", "scan", "http://example.com", "-d", "two"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_classify_requires_urls() {
        assert!(Cli::try_parse_from(["trinetra", "classify"]).is_err());

        let cli = Cli::try_parse_from(["trinetra", "-v", "classify", "a", "b"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Classify { ref urls } if urls.len() == 2));
    }
}
