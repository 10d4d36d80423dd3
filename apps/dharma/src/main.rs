mod analysis;
mod calling;
mod catalog;
mod config;
mod console;
mod errors;
mod exit;
mod journey;
mod models;
mod resources;
mod snapshot;
mod state;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::AsyncWriteExt;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::select_analyzer;
use crate::calling::scoring::ScoringWeights;
use crate::catalog::{load_or_create, CatalogOrigin};
use crate::config::Config;
use crate::console::stdin::spawn_stdin_reader;
use crate::console::{presenter, Prompter};
use crate::exit::{run_until_interrupted, SessionEnd};
use crate::journey::{Journey, JourneyOutcome};
use crate::resources::spawn_background_fetch;
use crate::state::AppState;

/// Every ending, startup faults included, is reported on stdout and exits 0.
#[tokio::main]
async fn main() -> Result<()> {
    let end = match Config::from_env() {
        Ok(config) => {
            init_tracing(&config);
            SessionEnd::from_result(run(config).await)
        }
        // Tracing is not up yet; the notice below is the only report
        Err(e) => SessionEnd::from_result(Err(e)),
    };

    match &end {
        SessionEnd::Completed(outcome) => info!(
            "Session for {} complete: {} callings, {} suggestions, snapshot {}",
            outcome.session.name,
            outcome.report.true_callings.len(),
            outcome.report.career_suggestions.len(),
            outcome
                .saved_to
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "not saved".to_string())
        ),
        SessionEnd::Interrupted => info!("Session interrupted"),
        SessionEnd::Failed(message) => error!("Session failed: {message}"),
    }

    if let Some(notice) = end.notice() {
        let mut stdout = tokio::io::stdout();
        let _ = stdout.write_all(notice.as_bytes()).await;
        let _ = stdout.flush().await;
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    // Logs go to stderr so they never land between a prompt and its answer
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(config: Config) -> Result<JourneyOutcome> {
    info!("Starting Dharma Path v{}", env!("CARGO_PKG_VERSION"));

    // Fire-and-forget; the handle is dropped on purpose
    let _ = spawn_background_fetch(config.resource_dir.clone(), config.resource_url.clone());

    let loaded = load_or_create(&config.catalog_path);
    if let CatalogOrigin::Corrupt(reason) = &loaded.origin {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(presenter::catalog_notice(reason).as_bytes())
            .await?;
        stdout.flush().await?;
    }

    let analyzer = select_analyzer(&config.resource_dir, &config.token_pattern);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let save_dir = std::env::current_dir().context("cannot resolve the working directory")?;

    let state = AppState {
        config,
        catalog: loaded.catalog,
        analyzer,
        weights: ScoringWeights::default(),
    };

    let prompter = Prompter::new(spawn_stdin_reader()?, tokio::io::stdout());
    let journey = Journey::new(&state, prompter, &mut rng, &save_dir);

    Ok(run_until_interrupted(journey, tokio::signal::ctrl_c()).await?)
}
