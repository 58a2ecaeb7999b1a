use crate::config::types::FileConfig;
use crate::ConfigError;
use std::path::Path;

/// Loads scraper defaults from a TOML file
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(FileConfig)` - Successfully loaded defaults
/// * `Err(ConfigError)` - Failed to read or parse the file
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use docscrap::config::load_file_config;
///
/// let defaults = load_file_config(Path::new("docscrap.toml")).unwrap();
/// println!("Organization: {:?}", defaults.scraper.organization);
/// ```
pub fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
