use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Identification header sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Per-request timeout
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Default lower bound of the politeness delay, in seconds
pub const DEFAULT_MIN_DELAY: f64 = 0.5;

/// Default upper bound of the politeness delay, in seconds
pub const DEFAULT_MAX_DELAY: f64 = 5.0;

/// Largest accepted delay bound, in seconds
pub const MAX_DELAY_SECONDS: f64 = 3600.0;

/// How crawled pages map onto output files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Every page concatenated into one Markdown document
    #[default]
    Single,

    /// One file per page plus an index
    Chapters,

    /// One file per page plus an index
    Pages,
}

impl OutputMode {
    /// Returns true if this mode writes one file per page
    pub fn is_multi_file(&self) -> bool {
        matches!(self, Self::Chapters | Self::Pages)
    }

    /// Returns the name accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Chapters => "chapters",
            Self::Pages => "pages",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "chapters" => Ok(Self::Chapters),
            "pages" => Ok(Self::Pages),
            other => Err(format!(
                "unknown organization '{}' (expected single, chapters or pages)",
                other
            )),
        }
    }
}

/// Immutable per-run configuration
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Seed URL of the crawl
    pub base_url: String,

    /// Output file (single mode) or the path whose extension-less form
    /// is the output directory (chapters/pages modes)
    pub output_path: PathBuf,

    /// Lower bound of the politeness delay, in seconds
    pub min_delay: f64,

    /// Upper bound of the politeness delay, in seconds
    pub max_delay: f64,

    /// Disables the politeness delay entirely
    pub no_delay: bool,

    /// How pages map onto output files
    pub organization: OutputMode,

    /// Process only the seed URL, without link discovery
    pub single_page: bool,

    /// Identification header sent with every request
    pub user_agent: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl ScrapeConfig {
    /// Creates a configuration with default delays and single-file output
    pub fn new(base_url: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            output_path: output_path.into(),
            min_delay: DEFAULT_MIN_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            no_delay: false,
            organization: OutputMode::default(),
            single_page: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: FETCH_TIMEOUT,
        }
    }

    /// Applies defaults from a TOML config file
    ///
    /// Only values present in the file are applied; command-line values
    /// are layered on top afterwards by the caller.
    pub fn apply_file(&mut self, file: &FileConfig) {
        let defaults = &file.scraper;
        if let Some(min) = defaults.min_delay {
            self.min_delay = min;
        }
        if let Some(max) = defaults.max_delay {
            self.max_delay = max;
        }
        if let Some(no_delay) = defaults.no_delay {
            self.no_delay = no_delay;
        }
        if let Some(organization) = defaults.organization {
            self.organization = organization;
        }
    }

    /// Directory receiving per-page files: the output path without its extension
    pub fn output_dir(&self) -> PathBuf {
        strip_extension(&self.output_path)
    }
}

fn strip_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(_) => path.with_extension(""),
        None => path.to_path_buf(),
    }
}

/// Contents of an optional TOML defaults file
///
/// ```toml
/// [scraper]
/// min-delay = 1.0
/// max-delay = 3.0
/// organization = "pages"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub scraper: ScraperDefaults,
}

/// Scraper defaults that may be set from a config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScraperDefaults {
    pub min_delay: Option<f64>,
    pub max_delay: Option<f64>,
    pub no_delay: Option<bool>,
    pub organization: Option<OutputMode>,
}
