//! Docscrap main entry point
//!
//! This is the command-line interface for the docscrap documentation scraper.

use anyhow::Context;
use clap::Parser;
use docscrap::config::{load_file_config, OutputMode, ScrapeConfig};
use docscrap::crawler::crawl;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Docscrap: a documentation site to Markdown scraper
///
/// Docscrap crawls a documentation site breadth-first from a seed URL,
/// pausing politely between requests, and writes the content of every
/// in-scope page as Markdown.
#[derive(Parser, Debug)]
#[command(name = "docscrap")]
#[command(version = "1.0.0")]
#[command(about = "Scrape a documentation site into Markdown", long_about = None)]
struct Cli {
    /// Seed URL of the documentation site
    #[arg(short = 'u', long = "url", value_name = "URL")]
    url: String,

    /// Output file (single) or output path whose stem names the directory (chapters/pages)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: PathBuf,

    /// Minimum delay between requests, in seconds [default: 0.5]
    #[arg(long = "min", value_name = "SECONDS")]
    min_delay: Option<f64>,

    /// Maximum delay between requests, in seconds [default: 5.0]
    #[arg(long = "max", value_name = "SECONDS")]
    max_delay: Option<f64>,

    /// Disable the delay between requests
    #[arg(short = 'n', long = "nodelay")]
    no_delay: bool,

    /// Scrape only the given URL, without following links
    #[arg(short = 's', long = "single-page")]
    single_page: bool,

    /// Output organization: single, chapters or pages [default: single]
    #[arg(long = "org", visible_alias = "organization", value_name = "MODE")]
    organization: Option<OutputMode>,

    /// Path to a TOML file with scraper defaults
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {:#}", e);
            return Err(e);
        }
    };

    tracing::info!(
        "Scraping {} into {} (organization: {}, single page: {})",
        config.base_url,
        config.output_path.display(),
        config.organization,
        config.single_page
    );

    match crawl(config, StdRng::from_os_rng()).await {
        Ok(report) => {
            tracing::info!(
                "Scraped {} pages ({} failed), wrote {} files",
                report.pages.len(),
                report.failed.len(),
                report.written_files.len()
            );
            for path in &report.written_files {
                tracing::debug!("Wrote {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}

/// Layers command-line values over the optional config file
fn build_config(cli: &Cli) -> anyhow::Result<ScrapeConfig> {
    let mut config = ScrapeConfig::new(cli.url.trim(), cli.output.clone());

    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
        let file = load_file_config(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        config.apply_file(&file);
    }

    if let Some(min) = cli.min_delay {
        config.min_delay = min;
    }
    if let Some(max) = cli.max_delay {
        config.max_delay = max;
    }
    if cli.no_delay {
        config.no_delay = true;
    }
    if let Some(organization) = cli.organization {
        config.organization = organization;
    }
    config.single_page = cli.single_page;

    docscrap::config::validate(&config)?;
    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("docscrap=info,warn"),
            1 => EnvFilter::new("docscrap=debug,info"),
            2 => EnvFilter::new("docscrap=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["docscrap", "-u", "https://example.com/docs", "-o", "out.md"]);
        let config = build_config(&cli).unwrap();

        assert_eq!(config.min_delay, 0.5);
        assert_eq!(config.max_delay, 5.0);
        assert!(!config.no_delay);
        assert!(!config.single_page);
        assert_eq!(config.organization, OutputMode::Single);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "docscrap",
            "--url",
            "https://example.com",
            "--output",
            "docs.md",
            "--min",
            "1",
            "--max",
            "2",
            "-n",
            "-s",
            "--organization",
            "pages",
        ]);
        let config = build_config(&cli).unwrap();

        assert_eq!(config.min_delay, 1.0);
        assert_eq!(config.max_delay, 2.0);
        assert!(config.no_delay);
        assert!(config.single_page);
        assert_eq!(config.organization, OutputMode::Pages);
    }

    #[test]
    fn test_cli_rejects_unknown_organization() {
        let result = Cli::try_parse_from([
            "docscrap", "-u", "https://example.com", "-o", "out.md", "--org", "books",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_url_and_output() {
        assert!(Cli::try_parse_from(["docscrap", "-o", "out.md"]).is_err());
        assert!(Cli::try_parse_from(["docscrap", "-u", "https://example.com"]).is_err());
    }

    #[test]
    fn test_min_greater_than_max_is_fatal() {
        let cli = Cli::parse_from([
            "docscrap", "-u", "https://example.com", "-o", "out.md", "--min", "3", "--max", "1",
        ]);
        assert!(build_config(&cli).is_err());
    }

    #[test]
    fn test_cli_overrides_config_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[scraper]\nmin-delay = 1.0\nmax-delay = 4.0\norganization = \"chapters\""
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::parse_from([
            "docscrap", "-u", "https://example.com", "-o", "out.md", "-c", &path, "--max", "2",
        ]);
        let config = build_config(&cli).unwrap();

        assert_eq!(config.min_delay, 1.0);
        assert_eq!(config.max_delay, 2.0);
        assert_eq!(config.organization, OutputMode::Chapters);
    }
}
