//! How a run ends: completed, interrupted or failed. All three exit with status 0.

use std::future::Future;

use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::console::presenter;
use crate::errors::AppError;
use crate::journey::{Journey, JourneyOutcome};

#[derive(Debug)]
pub enum SessionEnd {
    Completed(JourneyOutcome),
    /// Ctrl-C or end of input.
    Interrupted,
    /// Any other fault, already reduced to a one-line message.
    Failed(String),
}

impl SessionEnd {
    /// Sorts a run result into one of the three endings.
    /// Error chains are flattened into one line; no backtrace is kept.
    pub fn from_result(result: anyhow::Result<JourneyOutcome>) -> Self {
        match result {
            Ok(outcome) => SessionEnd::Completed(outcome),
            Err(e)
                if e
                    .downcast_ref::<AppError>()
                    .map_or(false, AppError::is_interrupt) =>
            {
                SessionEnd::Interrupted
            }
            Err(e) => SessionEnd::Failed(format!("{e:#}")),
        }
    }

    /// Final text for the user. A completed journey has already said goodbye.
    pub fn notice(&self) -> Option<String> {
        match self {
            SessionEnd::Completed(_) => None,
            SessionEnd::Interrupted => Some(presenter::interrupted_notice()),
            SessionEnd::Failed(message) => Some(presenter::error_notice(message)),
        }
    }
}

/// Runs the journey until it finishes or `interrupt` resolves, whichever is first.
/// The losing future is dropped, including any pending read.
pub async fn run_until_interrupted<R, W, G, F>(
    journey: Journey<'_, R, W, G>,
    interrupt: F,
) -> Result<JourneyOutcome, AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    G: Rng + ?Sized,
    F: Future,
{
    tokio::select! {
        result = journey.run() => result,
        _ = interrupt => Err(AppError::Interrupted),
    }
}
