mod config;
mod errors;
mod rewriter;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only the completion line
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting layout rewriter v{}", env!("CARGO_PKG_VERSION"));

    rewriter::run(&config.target_path)?;

    println!("Layout modification completed successfully!");
    Ok(())
}
