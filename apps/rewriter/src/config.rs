use std::path::PathBuf;

use anyhow::Result;

use crate::rewriter::pattern::TARGET_PATH;

/// Runtime configuration for the rewriter.
/// The target file is fixed; only the log level comes from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub target_path: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            target_path: PathBuf::from(TARGET_PATH),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
