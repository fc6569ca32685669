//! Host module SDK
//!
//! Traits and utilities shared by modules that plug into a device-control
//! host: the lifecycle trait, the host registries, descriptor types,
//! configuration loading and a standalone runner.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use nws_alerts::plugin::*;
//!
//! struct MyModule {
//!     host: Arc<dyn Host>,
//! }
//!
//! #[async_trait]
//! impl Module for MyModule {
//!     type Config = MyConfig;
//!
//!     fn metadata() -> ModuleMetadata {
//!         module_metadata!(endpoints: &[])
//!     }
//!
//!     fn config_fields() -> Vec<ConfigField> {
//!         vec![]
//!     }
//!
//!     fn new(host: Arc<dyn Host>, _config: &MyConfig) -> Result<Self, ModuleError> {
//!         Ok(Self { host })
//!     }
//!
//!     async fn init(&mut self, _config: MyConfig) {
//!         self.host.update_status(InstanceStatus::Ok, None);
//!     }
//!
//!     // config_updated, destroy, evaluate_feedback ...
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     run_module::<MyModule>().await?;
//!     Ok(())
//! }
//! ```

mod config;
mod definitions;
mod error;
mod host;
mod runner;
mod traits;

pub use config::{load_config, parse_config};
pub use definitions::{
    combine_rgb, Choice, ConfigField, FeedbackDefinition, FeedbackKind, FeedbackOption,
    FeedbackRequest, FeedbackStyle, InstanceStatus, PresetDefinition, VariableDefinition,
    VariableValues, VisibleWhen,
};
pub use error::ModuleError;
pub use host::{Host, HostState, MemoryHost};
pub use runner::{run_module, run_module_with, setup_logging, ModuleArgs};
pub use traits::{Module, ModuleMetadata};
