use std::sync::Arc;

use crate::analysis::TextAnalyzer;
use crate::calling::scoring::ScoringWeights;
use crate::config::Config;
use crate::models::catalog::Catalog;

/// Everything a session needs, assembled once in `main`.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded (or freshly created) category catalog. Empty if the document was corrupt.
    pub catalog: Catalog,
    /// Rich or simple, decided at startup from the resource directory.
    pub analyzer: Arc<dyn TextAnalyzer>,
    pub weights: ScoringWeights,
}
