//! Check command implementation
//!
//! Prints the effective configuration after every source is applied.

use serde::Serialize;
use tracing::info;

use crate::config::EngineConfig;
use crate::Result;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport<'a> {
    version: &'static str,
    config_file: &'a str,
    config: &'a EngineConfig,
}

/// Run the check command
pub fn run(config_file: &str, config: &EngineConfig, compact: bool) -> Result<()> {
    info!("Checking configuration...");
    let report = CheckReport {
        version: env!("CARGO_PKG_VERSION"),
        config_file,
        config,
    };
    super::emit(&report, compact)?;
    info!("Configuration OK");
    Ok(())
}
