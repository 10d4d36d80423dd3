use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const APP_DIR: &str = ".dharma_path";
const CATALOG_FILE: &str = "dharma_data.json";
const RESOURCE_DIR: &str = "resources";

/// Default tokenizer for the simple analyzer: runs of word characters.
pub const DEFAULT_TOKEN_PATTERN: &str = r"\w+";

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed numbers fail at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub resource_dir: PathBuf,
    /// Base URL for the background resource fetch. Unset means no fetch.
    pub resource_url: Option<String>,
    pub token_pattern: String,
    /// Seed for alignment / insight selection. Unset means OS entropy.
    pub seed: Option<u64>,
    pub pause: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let app_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);

        Ok(Config {
            catalog_path: optional_env("DHARMA_CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| app_dir.join(CATALOG_FILE)),
            resource_dir: optional_env("DHARMA_RESOURCE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| app_dir.join(RESOURCE_DIR)),
            resource_url: optional_env("DHARMA_RESOURCE_URL")
                .map(|u| u.trim_end_matches('/').to_string()),
            token_pattern: optional_env("DHARMA_TOKEN_PATTERN")
                .unwrap_or_else(|| DEFAULT_TOKEN_PATTERN.to_string()),
            seed: optional_env("DHARMA_SEED")
                .map(|s| s.parse::<u64>())
                .transpose()
                .context("DHARMA_SEED must be an unsigned integer")?,
            pause: Duration::from_millis(
                optional_env("DHARMA_PAUSE_MS")
                    .map(|s| s.parse::<u64>())
                    .transpose()
                    .context("DHARMA_PAUSE_MS must be a number of milliseconds")?
                    .unwrap_or(300),
            ),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        })
    }
}

/// Reads an env var, treating empty values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
