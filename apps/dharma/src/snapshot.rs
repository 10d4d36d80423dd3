//! Opt-in JSON snapshot of one finished session.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::calling::recommender::Recommendation;
use crate::calling::report::DharmaReport;
use crate::catalog::to_pretty_json;
use crate::errors::AppError;
use crate::models::session::UserSession;

const SNAPSHOT_SUFFIX: &str = "_dharma_path.json";
const ANONYMOUS: &str = "anonymous";

/// On-disk layout of a saved session.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub user_data: &'a UserSession,
    pub true_callings: &'a [String],
    pub career_suggestions: &'a [Recommendation],
    pub personalized_insights: &'a [String],
    pub nlp_keywords: &'a [String],
}

impl<'a> SessionSnapshot<'a> {
    pub fn new(session: &'a UserSession, report: &'a DharmaReport) -> Self {
        Self {
            user_data: session,
            true_callings: &report.true_callings,
            career_suggestions: &report.career_suggestions,
            personalized_insights: &report.personalized_insights,
            nlp_keywords: &report.nlp_keywords,
        }
    }
}

/// File-name-safe form of a user name.
///
/// Lower-cased; whitespace runs become `_`; anything outside `[a-z0-9_-]`
/// is dropped. Falls back to `anonymous` when nothing survives.
pub fn slugify(name: &str) -> String {
    let slug: String = name
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect();

    if slug.trim_matches('_').is_empty() {
        ANONYMOUS.to_string()
    } else {
        slug
    }
}

pub fn snapshot_filename(name: &str) -> String {
    format!("{}{}", slugify(name), SNAPSHOT_SUFFIX)
}

/// Writes the snapshot into `dir`, replacing any previous one for the same name.
pub fn save_snapshot(
    dir: &Path,
    session: &UserSession,
    report: &DharmaReport,
) -> Result<PathBuf, AppError> {
    let path = dir.join(snapshot_filename(&session.name));
    fs::write(&path, to_pretty_json(&SessionSnapshot::new(session, report))?)?;
    info!("Saved session snapshot to {}", path.display());
    Ok(path)
}
