//! Recommender: expands selected callings into annotated role suggestions.
//!
//! Randomness is injected (`&mut impl Rng`) so a seeded `StdRng` makes the
//! sentence choices reproducible.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::calling::messages::{
    pool_for, ALIGNMENT_EXPLANATIONS, GENERIC_ALIGNMENTS, PERSONALIZED_INSIGHTS,
};
use crate::models::catalog::{Catalog, Category, Role};

/// Number of category keywords offered as skills when no title rule applies.
const KEYWORD_SUGGESTIONS: usize = 3;

/// Fixed skill suggestions keyed on substrings of the role title.
/// First matching row wins.
const SKILL_RULES: &[(&[&str], &[&str])] = &[
    (
        &["Teacher", "Trainer"],
        &["communication", "curriculum development", "presentation skills"],
    ),
    (
        &["Developer"],
        &["programming", "problem-solving", "technical design"],
    ),
    (
        &["Designer"],
        &["visual design", "user research", "creative thinking"],
    ),
    (
        &["Manager", "Leader"],
        &["leadership", "team management", "strategic planning"],
    ),
];

/// One suggested role, tied to the calling it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub true_calling: String,
    pub calling_description: String,
    pub has_relevant_skills: bool,
    pub relevant_skills: Vec<String>,
    /// Empty whenever `has_relevant_skills` is true.
    pub suggested_skills: Vec<String>,
    pub alignment_explanation: String,
}

/// Builds recommendations for every role of every selected calling.
/// Ids missing from the catalog contribute nothing. Duplicate titles across
/// callings are kept.
pub fn recommend<R: Rng + ?Sized>(
    catalog: &Catalog,
    callings: &[String],
    skills: &[String],
    rng: &mut R,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    for category in callings.iter().filter_map(|id| catalog.get(id)) {
        for role in &category.careers {
            recommendations.push(recommend_role(category, role, skills, rng));
        }
    }
    recommendations
}

fn recommend_role<R: Rng + ?Sized>(
    category: &Category,
    role: &Role,
    skills: &[String],
    rng: &mut R,
) -> Recommendation {
    let relevant_skills = matching_skills(category, role, skills);
    let has_relevant_skills = !relevant_skills.is_empty();

    let suggested_skills = if has_relevant_skills {
        Vec::new()
    } else {
        suggest_skills(category, role)
    };

    Recommendation {
        title: role.title.clone(),
        description: role.description.clone(),
        true_calling: category.id.clone(),
        calling_description: category.description.clone(),
        has_relevant_skills,
        relevant_skills,
        suggested_skills,
        alignment_explanation: alignment_explanation(&role.title, rng),
    }
}

/// Skills whose text names the role, or mentions any of the calling's keywords.
/// Case-insensitive; the user's original spelling is returned.
pub fn matching_skills(category: &Category, role: &Role, skills: &[String]) -> Vec<String> {
    let title = role.title.to_lowercase();
    skills
        .iter()
        .filter(|skill| {
            let skill = skill.to_lowercase();
            skill.contains(&title)
                || category
                    .keywords
                    .iter()
                    .any(|k| skill.contains(&k.to_lowercase()))
        })
        .cloned()
        .collect()
}

/// Skill-gap suggestions from the title rule table, else the calling's first keywords.
pub fn suggest_skills(category: &Category, role: &Role) -> Vec<String> {
    SKILL_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| role.title.contains(n)))
        .map(|(_, skills)| skills.iter().map(|s| s.to_string()).collect())
        .unwrap_or_else(|| {
            category
                .keywords
                .iter()
                .take(KEYWORD_SUGGESTIONS)
                .map(|k| capitalize(k))
                .collect()
        })
}

pub fn alignment_explanation<R: Rng + ?Sized>(title: &str, rng: &mut R) -> String {
    pool_for(ALIGNMENT_EXPLANATIONS, title)
        .unwrap_or(GENERIC_ALIGNMENTS)
        .choose(rng)
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// One random insight per calling that has a curated pool.
pub fn personalized_insights<R: Rng + ?Sized>(callings: &[String], rng: &mut R) -> Vec<String> {
    callings
        .iter()
        .filter_map(|id| pool_for(PERSONALIZED_INSIGHTS, id))
        .filter_map(|pool| pool.choose(&mut *rng).map(|s| s.to_string()))
        .collect()
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn role(title: &str) -> Role {
        Role {
            title: title.to_string(),
            description: String::new(),
        }
    }

    fn category(keywords: &[&str], titles: &[&str]) -> Category {
        Category {
            id: "test_calling".to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            description: "Test calling".to_string(),
            careers: titles.iter().map(|t| role(t)).collect(),
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_teacher_without_skills_gets_teacher_rule() {
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(7);
        let recs = recommend(
            &catalog,
            &strings(&["helping_others_grow", "creating_and_innovating"]),
            &[],
            &mut rng,
        );
        let teacher = recs.iter().find(|r| r.title == "Teacher/Professor").unwrap();
        assert!(!teacher.has_relevant_skills);
        assert_eq!(
            teacher.suggested_skills,
            strings(&["communication", "curriculum development", "presentation skills"])
        );
        assert_eq!(teacher.true_calling, "helping_others_grow");
    }

    #[test]
    fn test_no_skills_means_no_relevant_skills_anywhere() {
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let ids: Vec<String> = catalog.iter().map(|c| c.id.clone()).collect();
        let recs = recommend(&catalog, &ids, &[], &mut rng);
        assert_eq!(recs.len(), catalog.iter().map(|c| c.careers.len()).sum::<usize>());
        for rec in &recs {
            assert!(!rec.has_relevant_skills, "{}", rec.title);
            assert!(rec.relevant_skills.is_empty(), "{}", rec.title);
            assert!(!rec.suggested_skills.is_empty(), "{}", rec.title);
        }
    }

    #[test]
    fn test_skill_matching_title_or_keyword() {
        let c = category(&["mentor"], &["Coach"]);
        let skills = strings(&["Executive COACHING", "Peer Mentoring", "Baking"]);
        let matched = matching_skills(&c, &c.careers[0], &skills);
        assert_eq!(matched, strings(&["Executive COACHING", "Peer Mentoring"]));
    }

    #[test]
    fn test_matched_skills_suppress_suggestions() {
        let c = category(&["code"], &["Software Developer"]);
        let catalog = Catalog::new(vec![c]);
        let mut rng = StdRng::seed_from_u64(3);
        let recs = recommend(
            &catalog,
            &strings(&["test_calling"]),
            &strings(&["I code in Rust"]),
            &mut rng,
        );
        assert!(recs[0].has_relevant_skills);
        assert_eq!(recs[0].relevant_skills, strings(&["I code in Rust"]));
        assert!(recs[0].suggested_skills.is_empty());
    }

    #[test]
    fn test_skill_rule_table() {
        let c = category(&["build", "create art", "make"], &[]);
        let suggest = |title: &str| suggest_skills(&c, &role(title));
        assert_eq!(suggest("Corporate Trainer")[0], "communication");
        assert_eq!(suggest("Software Developer")[0], "programming");
        assert_eq!(suggest("UX/UI Designer")[0], "visual design");
        assert_eq!(suggest("Operations Manager")[0], "leadership");
        assert_eq!(suggest("Community Leader")[0], "leadership");
        // "Curriculum Developer" hits the Developer rule, not a keyword fallback.
        assert_eq!(suggest("Curriculum Developer")[0], "programming");
        assert_eq!(suggest("Artist"), strings(&["Build", "Create art", "Make"]));
    }

    #[test]
    fn test_keyword_fallback_takes_at_most_three() {
        let c = category(&["Solve"], &[]);
        assert_eq!(suggest_skills(&c, &role("Consultant")), strings(&["Solve"]));
    }

    #[test]
    fn test_curated_alignment_for_known_title() {
        let mut rng = StdRng::seed_from_u64(11);
        let text = alignment_explanation("Coach", &mut rng);
        let pool = pool_for(ALIGNMENT_EXPLANATIONS, "Coach").unwrap();
        assert!(pool.contains(&text.as_str()));
    }

    #[test]
    fn test_generic_alignment_for_unknown_title() {
        let mut rng = StdRng::seed_from_u64(11);
        let text = alignment_explanation("Lighthouse Keeper", &mut rng);
        assert!(GENERIC_ALIGNMENTS.contains(&text.as_str()));
    }

    #[test]
    fn test_same_seed_same_choices() {
        let catalog = default_catalog();
        let ids = strings(&["solving_problems", "leading_and_inspiring"]);
        let a = recommend(&catalog, &ids, &[], &mut StdRng::seed_from_u64(42));
        let b = recommend(&catalog, &ids, &[], &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_calling_contributes_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        let recs = recommend(&default_catalog(), &strings(&["nope"]), &[], &mut rng);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_duplicate_titles_are_kept() {
        let mut rng = StdRng::seed_from_u64(0);
        let recs = recommend(
            &default_catalog(),
            &strings(&["creating_and_innovating", "leading_and_inspiring"]),
            &[],
            &mut rng,
        );
        assert_eq!(recs.iter().filter(|r| r.title == "Entrepreneur").count(), 2);
    }

    #[test]
    fn test_insights_only_for_known_callings() {
        let mut rng = StdRng::seed_from_u64(5);
        let insights = personalized_insights(
            &strings(&["helping_others_grow", "custom_calling"]),
            &mut rng,
        );
        assert_eq!(insights.len(), 1);
        let pool = pool_for(PERSONALIZED_INSIGHTS, "helping_others_grow").unwrap();
        assert!(pool.contains(&insights[0].as_str()));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("help others"), "Help others");
        assert_eq!(capitalize("TEACH"), "Teach");
        assert_eq!(capitalize(""), "");
    }
}
