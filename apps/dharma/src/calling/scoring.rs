//! Calling scorer: ranks catalog categories against the user's answers.
//!
//! Algorithm, per category:
//! 1. `direct` × each keyword that occurs anywhere in the answer text
//! 2. `word` × each analyzer key word that contains, or is contained in, a keyword
//! 3. `phrase` × each analyzer key phrase that contains a keyword
//!
//! Occurrence is boolean per keyword, not frequency-weighted. A single word
//! can hit terms 1 and 2 for the same keyword; that overlap is kept.

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
use crate::catalog::FALLBACK_CATEGORIES;
use crate::models::catalog::{Catalog, Category};

/// Number of callings reported to the user.
pub const TOP_CALLINGS: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub direct: f64,
    pub word: f64,
    pub phrase: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            direct: 2.0,
            word: 1.0,
            phrase: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub id: String,
    pub score: f64,
}

/// Scores one category. `text` must already be lower-cased.
pub fn score_category(
    category: &Category,
    text: &str,
    analysis: &AnalysisResult,
    weights: &ScoringWeights,
) -> f64 {
    let keywords = &category.keywords;

    let direct = keywords.iter().filter(|k| text.contains(k.as_str())).count();

    let words = analysis
        .key_words
        .iter()
        .filter(|w| {
            keywords
                .iter()
                .any(|k| w.contains(k.as_str()) || k.contains(w.as_str()))
        })
        .count();

    let phrases = analysis
        .key_phrases
        .iter()
        .filter(|p| keywords.iter().any(|k| p.contains(k.as_str())))
        .count();

    weights.direct * direct as f64 + weights.word * words as f64 + weights.phrase * phrases as f64
}

/// Scores every category and sorts descending. Ties keep catalog order.
pub fn rank_categories(
    catalog: &Catalog,
    text: &str,
    analysis: &AnalysisResult,
    weights: &ScoringWeights,
) -> Vec<CategoryScore> {
    let mut scores: Vec<CategoryScore> = catalog
        .iter()
        .map(|category| CategoryScore {
            id: category.id.clone(),
            score: score_category(category, text, analysis, weights),
        })
        .collect();

    // Stable sort, equal scores stay in catalog order
    scores.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scores
}

/// Picks the top callings. Falls back to the fixed defaults when nothing
/// scored (or the catalog is empty), so the result always has two ids.
pub fn select_callings(ranked: &[CategoryScore]) -> Vec<String> {
    match ranked.first() {
        Some(top) if top.score > 0.0 => ranked
            .iter()
            .take(TOP_CALLINGS)
            .map(|s| s.id.clone())
            .collect(),
        _ => FALLBACK_CATEGORIES.iter().map(|id| id.to_string()).collect(),
    }
}
