//! Resource fetcher: best-effort download of the optional linguistic resources.
//!
//! Runs once per process as a detached tokio task. The analyzer check has
//! already happened by the time anything lands on disk, so a fetched
//! resource is first used on the next run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::analysis::lexicon::{Lexicon, Stopwords, LEXICON_FILE, RESOURCE_FILES, STOPWORDS_FILE};
use crate::errors::AppError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RETRIES: u32 = 3;

/// Where resource bodies come from. HTTP in production, in-memory in tests.
#[async_trait]
pub trait ResourceSource: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<String, AppError>;
}

/// Fetches `<base_url>/<name>` over HTTP.
#[derive(Clone)]
pub struct HttpResourceSource {
    client: Client,
    base_url: String,
}

impl HttpResourceSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Config(format!("HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }
}

#[async_trait]
impl ResourceSource for HttpResourceSource {
    /// Retries on connection errors and 5xx with exponential backoff.
    async fn fetch(&self, name: &str) -> Result<String, AppError> {
        let url = self.url_for(name);
        let fetch_error = |message: String| AppError::ResourceFetch {
            resource: name.to_string(),
            message,
        };

        let mut last_error = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // 500ms, 1s
                let delay = Duration::from_millis(500 * (1 << (attempt - 1)));
                debug!("Retrying {url} after {}ms", delay.as_millis());
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.get(&url).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(fetch_error(e.to_string()));
                    continue;
                }
            };

            let status = response.status();
            if status.is_server_error() {
                last_error = Some(fetch_error(format!("status {status}")));
                continue;
            }
            if !status.is_success() {
                return Err(fetch_error(format!("status {status}")));
            }

            return response
                .text()
                .await
                .map_err(|e| fetch_error(e.to_string()));
        }

        Err(last_error.unwrap_or_else(|| fetch_error("no attempts made".to_string())))
    }
}

/// Rejects bodies the analyzer would refuse to load anyway.
fn validate(name: &str, body: &str) -> Result<(), AppError> {
    let invalid = |message: &str| AppError::InvalidResource {
        resource: name.to_string(),
        message: message.to_string(),
    };
    match name {
        STOPWORDS_FILE if Stopwords::from_text(body).is_empty() => Err(invalid("no stopwords")),
        LEXICON_FILE => Lexicon::from_tsv(body).map(|_| ()),
        _ => Ok(()),
    }
}

/// Downloads every resource file missing from `dir`.
/// Returns the names written. Stops at the first failure.
pub async fn fetch_missing(
    dir: &Path,
    source: &dyn ResourceSource,
) -> Result<Vec<&'static str>, AppError> {
    let missing: Vec<&'static str> = RESOURCE_FILES
        .iter()
        .copied()
        .filter(|name| !dir.join(name).exists())
        .collect();

    if missing.is_empty() {
        debug!("All resources present in {}", dir.display());
        return Ok(missing);
    }

    tokio::fs::create_dir_all(dir).await?;

    let mut written = Vec::with_capacity(missing.len());
    for name in missing {
        let body = source.fetch(name).await?;
        validate(name, &body)?;
        tokio::fs::write(dir.join(name), body).await?;
        info!("Fetched resource {name} into {}", dir.display());
        written.push(name);
    }
    Ok(written)
}

/// Spawns the fire-and-forget fetch. Never awaited by the session.
pub fn spawn_background_fetch(resource_dir: PathBuf, resource_url: Option<String>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let Some(url) = resource_url else {
            if RESOURCE_FILES.iter().any(|name| !resource_dir.join(name).exists()) {
                info!("No resource URL configured; rich analysis stays unavailable");
            }
            return;
        };

        let source = match HttpResourceSource::new(url) {
            Ok(source) => source,
            Err(e) => {
                warn!("Resource fetch disabled: {e}");
                return;
            }
        };

        if let Err(e) = fetch_missing(&resource_dir, &source).await {
            warn!("Background resource fetch failed: {e}");
        }
    })
}
