//! Terminal client entry point.
use std::io;

use anyhow::Result;
use cat_client::{Shell, logging};
use client_bootstrap::{ClientConfig, EngineBuilder};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting trap-the-cat");
    let setup = EngineBuilder::new(config).build()?;

    let stdin = io::stdin();
    let mut shell = Shell::new(setup.engine, stdin.lock(), io::stdout().lock());
    shell.run()?;

    tracing::info!("Shutdown complete");
    Ok(())
}
