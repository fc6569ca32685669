//! NWS alert adapter running against the in-memory host.

use nws_alerts::plugin::run_module;
use nws_alerts::AlertsInstance;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run_module::<AlertsInstance>().await?;
    Ok(())
}
