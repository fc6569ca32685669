//! Core trait for host modules.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use super::definitions::{ConfigField, FeedbackRequest};
use super::error::ModuleError;
use super::host::Host;

/// Metadata about a module.
///
/// Use the `module_metadata!` macro to generate this from Cargo.toml:
/// ```rust,ignore
/// fn metadata() -> ModuleMetadata {
///     module_metadata!(endpoints: &["https://api.weather.gov"])
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ModuleMetadata {
    /// Short name identifier from CARGO_PKG_NAME
    pub name: &'static str,
    /// SemVer version string from CARGO_PKG_VERSION
    pub version: &'static str,
    /// Human-readable description from CARGO_PKG_DESCRIPTION
    pub description: &'static str,
    /// Remote services this module talks to
    pub endpoints: &'static [&'static str],
}

/// Macro to generate ModuleMetadata from Cargo.toml manifest.
#[macro_export]
macro_rules! module_metadata {
    (endpoints: $endpoints:expr $(,)?) => {
        $crate::plugin::ModuleMetadata {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            endpoints: $endpoints,
        }
    };
}

/// Lifecycle contract between the host runtime and a module.
///
/// 1. `new()` - Construct the module against a host
/// 2. `init()` - Start with a configuration; failures are reported through
///    the host status, never returned
/// 3. `config_updated()` - Tear down and restart with a new configuration
/// 4. `destroy()` - Release every background task
///
/// `evaluate_feedback()` may be called by the host at any time between
/// `init()` and `destroy()`.
#[async_trait]
pub trait Module: Send + Sync + Sized {
    /// The configuration type for this module.
    /// Must be deserializable from YAML.
    type Config: DeserializeOwned + Serialize + Send + Sync;

    /// Return metadata about this module.
    fn metadata() -> ModuleMetadata;

    /// Describe the configuration form the host renders.
    fn config_fields() -> Vec<ConfigField>;

    /// Default log filter for the given configuration.
    fn log_filter(_config: &Self::Config) -> &'static str {
        "info"
    }

    /// Create a new instance bound to a host.
    fn new(host: Arc<dyn Host>, config: &Self::Config) -> Result<Self, ModuleError>;

    /// Start the module.
    async fn init(&mut self, config: Self::Config);

    /// Apply a new configuration.
    async fn config_updated(&mut self, config: Self::Config);

    /// Stop every background task owned by the module.
    async fn destroy(&mut self);

    /// Evaluate a boolean feedback on demand.
    fn evaluate_feedback(&self, request: &FeedbackRequest) -> bool;
}
