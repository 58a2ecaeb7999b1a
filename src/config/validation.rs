use crate::config::types::{ScrapeConfig, MAX_DELAY_SECONDS};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &ScrapeConfig) -> Result<(), ConfigError> {
    validate_base_url(&config.base_url)?;
    validate_output_path(config)?;
    validate_delays(config.min_delay, config.max_delay)?;
    Ok(())
}

/// Validates the seed URL: absolute, http(s), with a host
fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(base_url.trim())
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid URL '{}': {}", base_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "URL '{}' must use the http or https scheme",
            base_url
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "URL '{}' has no host",
            base_url
        )));
    }

    Ok(())
}

fn validate_output_path(config: &ScrapeConfig) -> Result<(), ConfigError> {
    if config.output_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the politeness delay bounds
fn validate_delays(min_delay: f64, max_delay: f64) -> Result<(), ConfigError> {
    for (name, value) in [("minimum", min_delay), ("maximum", max_delay)] {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::Validation(format!(
                "{} delay must be a non-negative number of seconds, got {}",
                name, value
            )));
        }
        if value > MAX_DELAY_SECONDS {
            return Err(ConfigError::Validation(format!(
                "{} delay must be at most {} seconds, got {}",
                name, MAX_DELAY_SECONDS, value
            )));
        }
    }

    if min_delay > max_delay {
        return Err(ConfigError::Validation(format!(
            "Minimum delay must be less than maximum delay ({} > {})",
            min_delay, max_delay
        )));
    }

    Ok(())
}
