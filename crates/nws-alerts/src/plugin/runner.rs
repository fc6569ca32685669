//! Module runner utilities for standard main() implementations.

use argh::FromArgs;
use std::sync::Arc;
use tokio::sync::watch;

use super::config::load_config;
use super::error::ModuleError;
use super::host::{Host, MemoryHost};
use super::traits::Module;

/// Standard CLI arguments for standalone modules.
#[derive(FromArgs, Debug)]
#[argh(description = "Standalone host for a device-control module")]
pub struct ModuleArgs {
    /// path to YAML configuration file
    #[argh(option, short = 'c', default = "String::from(\"config.yaml\")")]
    pub config: String,
}

/// Initialize logging with env_logger.
///
/// Respects RUST_LOG environment variable, falling back to `default_filter`.
pub fn setup_logging(default_filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();
}

/// Run a Module against an in-memory host until Ctrl+C.
///
/// This is the recommended way to create a module's main() function.
/// It handles:
/// - CLI argument parsing
/// - Configuration loading
/// - Logging setup
/// - Lifecycle (init, destroy) and graceful shutdown on Ctrl+C
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     run_module::<AlertsInstance>().await?;
///     Ok(())
/// }
/// ```
pub async fn run_module<M: Module>() -> Result<(), ModuleError> {
    let args: ModuleArgs = argh::from_env();
    let config: M::Config = load_config(&args.config)?;

    setup_logging(M::log_filter(&config));

    let metadata = M::metadata();
    log::info!("Starting {} v{}", metadata.name, metadata.version);
    log::info!("  {}", metadata.description);
    log::info!("Loaded config from: {}", args.config);

    let (shutdown_tx, shutdown_rx) = watch::channel(());
    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        let _ = shutdown_tx.send(());
    })?;

    log::info!("Module running. Press Ctrl+C to stop.");
    let host: Arc<dyn Host> = Arc::new(MemoryHost::new());
    run_module_with::<M>(config, host, shutdown_rx).await?;

    log::info!("Module stopped");
    Ok(())
}

/// Run a module with an explicit host and shutdown signal.
///
/// Use this when embedding a module in another runtime or in tests.
pub async fn run_module_with<M: Module>(
    config: M::Config,
    host: Arc<dyn Host>,
    mut shutdown: watch::Receiver<()>,
) -> Result<(), ModuleError> {
    let mut module = M::new(host, &config)?;
    module.init(config).await;

    // Either a send or a dropped sender ends the run.
    let _ = shutdown.changed().await;

    module.destroy().await;
    Ok(())
}
