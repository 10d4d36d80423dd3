use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::TextAnalyzer;
use crate::calling::recommender::{personalized_insights, recommend, Recommendation};
use crate::calling::scoring::{rank_categories, select_callings, ScoringWeights};
use crate::models::catalog::Catalog;
use crate::models::session::UserSession;

/// Number of analyzer key words shown back to the user.
const DISPLAY_KEYWORDS: usize = 5;

/// Everything shown to the user at the end of a session, and saved on request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DharmaReport {
    /// Calling ids in rank order. Not part of the saved snapshot.
    #[serde(skip)]
    pub calling_ids: Vec<String>,
    /// Descriptions of the selected callings, in rank order.
    pub true_callings: Vec<String>,
    pub career_suggestions: Vec<Recommendation>,
    pub personalized_insights: Vec<String>,
    pub nlp_keywords: Vec<String>,
}

/// Runs the whole pipeline: analyze → score → select → recommend.
pub fn build_report<R: Rng + ?Sized>(
    catalog: &Catalog,
    session: &UserSession,
    analyzer: &dyn TextAnalyzer,
    weights: &ScoringWeights,
    rng: &mut R,
) -> DharmaReport {
    let analysis = analyzer.analyze(&session.analysis_text());
    debug!(
        "Analysis ({}): words={:?} phrases={:?}",
        analyzer.backend(),
        analysis.key_words,
        analysis.key_phrases
    );

    let ranked = rank_categories(catalog, &session.scoring_text(), &analysis, weights);
    debug!("Category scores: {:?}", ranked);

    let calling_ids = select_callings(&ranked);
    info!("Selected callings: {:?}", calling_ids);

    let career_suggestions = recommend(catalog, &calling_ids, &session.skills, rng);
    let personalized_insights = personalized_insights(&calling_ids, rng);

    DharmaReport {
        true_callings: calling_ids
            .iter()
            .filter_map(|id| catalog.get(id))
            .map(|c| c.description.clone())
            .collect(),
        calling_ids,
        career_suggestions,
        personalized_insights,
        nlp_keywords: analysis
            .key_words
            .into_iter()
            .take(DISPLAY_KEYWORDS)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::simple::SimpleAnalyzer;
    use crate::catalog::default_catalog;
    use crate::config::DEFAULT_TOKEN_PATTERN;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn teaching_session() -> UserSession {
        let mut session = UserSession::new("Ada");
        session.add_passion("I love teaching and mentoring students");
        session.set_dream_impact("");
        session
    }

    #[test]
    fn test_teaching_scenario_end_to_end() {
        let analyzer = SimpleAnalyzer::new(DEFAULT_TOKEN_PATTERN, None);
        let report = build_report(
            &default_catalog(),
            &teaching_session(),
            &analyzer,
            &ScoringWeights::default(),
            &mut StdRng::seed_from_u64(9),
        );

        assert_eq!(report.calling_ids.len(), 2);
        assert!(report.calling_ids.contains(&"helping_others_grow".to_string()));
        assert_eq!(report.true_callings.len(), 2);

        let teacher = report
            .career_suggestions
            .iter()
            .find(|r| r.title == "Teacher/Professor")
            .expect("Teacher/Professor must be recommended");
        assert!(!teacher.has_relevant_skills);
        assert!(teacher.suggested_skills.contains(&"communication".to_string()));
        assert!(report.nlp_keywords.len() <= 5);
    }

    #[test]
    fn test_no_matches_falls_back_to_default_callings() {
        let mut session = UserSession::new("Bo");
        session.add_passion("xyzzy");
        session.set_dream_impact("plugh");
        let analyzer = SimpleAnalyzer::new(DEFAULT_TOKEN_PATTERN, None);

        let report = build_report(
            &default_catalog(),
            &session,
            &analyzer,
            &ScoringWeights::default(),
            &mut StdRng::seed_from_u64(9),
        );
        assert_eq!(
            report.calling_ids,
            vec!["helping_others_grow", "creating_and_innovating"]
        );
        assert_eq!(report.career_suggestions.len(), 12);
        assert_eq!(report.personalized_insights.len(), 2);
    }

    #[test]
    fn test_empty_catalog_produces_empty_report_without_panicking() {
        let analyzer = SimpleAnalyzer::new(DEFAULT_TOKEN_PATTERN, None);
        let report = build_report(
            &Catalog::default(),
            &teaching_session(),
            &analyzer,
            &ScoringWeights::default(),
            &mut StdRng::seed_from_u64(9),
        );
        assert_eq!(report.calling_ids.len(), 2);
        assert!(report.true_callings.is_empty());
        assert!(report.career_suggestions.is_empty());
    }

    #[test]
    fn test_calling_ids_not_serialized() {
        let analyzer = SimpleAnalyzer::new(DEFAULT_TOKEN_PATTERN, None);
        let report = build_report(
            &default_catalog(),
            &teaching_session(),
            &analyzer,
            &ScoringWeights::default(),
            &mut StdRng::seed_from_u64(9),
        );
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("calling_ids").is_none());
        assert!(json.get("true_callings").is_some());
    }
}
