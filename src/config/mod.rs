//! Configuration module for docscrap
//!
//! This module holds the immutable per-run configuration, loads optional
//! TOML defaults, and validates everything before any network activity.
//!
//! # Example
//!
//! ```no_run
//! use docscrap::config::{load_file_config, validate, ScrapeConfig};
//! use std::path::Path;
//!
//! let mut config = ScrapeConfig::new("https://docs.python.org/3/", "python_doc.md");
//! config.apply_file(&load_file_config(Path::new("docscrap.toml")).unwrap());
//! validate(&config).unwrap();
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    FileConfig, OutputMode, ScrapeConfig, ScraperDefaults, DEFAULT_MAX_DELAY, DEFAULT_MIN_DELAY,
    DEFAULT_USER_AGENT, FETCH_TIMEOUT, MAX_DELAY_SECONDS,
};

pub use parser::load_file_config;
pub use validation::validate;
