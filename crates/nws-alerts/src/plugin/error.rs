//! Error types for host modules.

use thiserror::Error;

/// Errors that can occur while loading or running a module.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// Configuration file not found or unreadable
    #[error("Config error: {0}")]
    Config(String),

    /// Failed to parse configuration YAML
    #[error("Parse error: {0}")]
    Parse(String),

    /// Module initialization failed
    #[error("Init error: {0}")]
    Init(String),
}

impl From<serde_yaml::Error> for ModuleError {
    fn from(err: serde_yaml::Error) -> Self {
        ModuleError::Parse(err.to_string())
    }
}

impl From<ctrlc::Error> for ModuleError {
    fn from(err: ctrlc::Error) -> Self {
        ModuleError::Init(err.to_string())
    }
}
