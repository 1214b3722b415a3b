//! Configuration loading.
//!
//! Settings come from an optional TOML file overlaid with command-line
//! values. The result is validated once at startup and passed down
//! explicitly; nothing in the pipeline reads the environment.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{NotifierConfig, Settings};

use std::path::Path;
use tracing::info;

/// Loads a TOML config file.
///
/// ```toml
/// organization = "acme"
/// channel = "#pull-requests"
/// webhook-url = "https://hooks.slack.com/services/..."
/// tracker-url = "https://app.clubhouse.io/acme/story/"
/// schedule = "0 9 * * Mon-Fri"
/// ```
///
/// # Errors
///
/// Returns an error if the file doesn't exist, can't be read or isn't valid TOML.
pub fn load_config(path: &Path) -> Result<NotifierConfig, ConfigError> {
    info!(path = %path.display(), "Loading config file");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::TomlError {
        path: path.display().to_string(),
        source: e,
    })
}
