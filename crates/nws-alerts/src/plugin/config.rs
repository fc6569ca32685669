//! Configuration loading utilities.

use serde::de::DeserializeOwned;
use std::path::Path;

use super::error::ModuleError;

/// Load configuration from a YAML file.
///
/// # Example
///
/// ```rust,ignore
/// let config: AlertsConfig = load_config("config.yaml")?;
/// ```
pub fn load_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ModuleError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ModuleError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;

    serde_yaml::from_str(&contents).map_err(|e| {
        ModuleError::Parse(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Parse configuration from a YAML string.
///
/// Useful for testing or inline configuration.
pub fn parse_config<T: DeserializeOwned>(yaml: &str) -> Result<T, ModuleError> {
    Ok(serde_yaml::from_str(yaml)?)
}
