//! Built-in category catalog, written to disk on first run.

use crate::models::catalog::{Catalog, Category, Role};

/// Used when no category scores above zero.
pub const FALLBACK_CATEGORIES: [&str; 2] = ["helping_others_grow", "creating_and_innovating"];

type CategoryRow = (
    &'static str,
    &'static [&'static str],
    &'static str,
    &'static [(&'static str, &'static str)],
);

const DEFAULT_CATEGORIES: &[CategoryRow] = &[
    (
        "helping_others_grow",
        &["teach", "help others", "mentor", "guide", "develop people", "inspire", "educate", "growth", "potential"],
        "Your true calling is to help others develop and reach their potential. You find fulfillment in guiding, teaching, and witnessing the growth of others.",
        &[
            ("Teacher/Professor", "Educate and inspire students in formal educational settings"),
            ("Corporate Trainer", "Help professionals develop new skills and knowledge in business settings"),
            ("Coach", "Guide individuals to achieve their personal or professional goals"),
            ("Mentor", "Provide guidance and wisdom to help others navigate their path"),
            ("Instructional Designer", "Create educational content and learning experiences"),
            ("Educational Content Creator", "Develop videos, articles, or courses that teach others"),
        ],
    ),
    (
        "creating_and_innovating",
        &["build", "create", "make", "design", "craft", "construct", "develop", "invent", "innovate"],
        "Your true calling is to bring new things into existence. You thrive when you're creating, designing, or building something meaningful.",
        &[
            ("Software Developer", "Create applications and systems that solve problems"),
            ("Product Designer", "Design products that meet user needs and provide value"),
            ("Artist", "Express ideas and emotions through various artistic mediums"),
            ("Writer", "Craft stories, articles, or content that informs or entertains"),
            ("Architect", "Design spaces and structures that serve human needs"),
            ("Entrepreneur", "Create and build businesses that provide value"),
        ],
    ),
    (
        "solving_problems",
        &["solve", "fix", "figure out", "analyze", "troubleshoot", "improve", "optimize", "solution"],
        "Your true calling is to solve complex problems. You find satisfaction in analyzing situations, identifying issues, and developing effective solutions.",
        &[
            ("Consultant", "Help organizations solve business problems and improve performance"),
            ("Engineer", "Apply scientific principles to design solutions to technical problems"),
            ("Research Scientist", "Investigate questions and develop new knowledge through research"),
            ("Data Analyst/Scientist", "Extract insights from data to solve business problems"),
            ("Technical Support Specialist", "Help users solve technical issues with products or services"),
            ("Quality Assurance Specialist", "Identify and solve quality issues in products or processes"),
        ],
    ),
    (
        "caring_for_others",
        &["care", "nurture", "support", "heal", "comfort", "protect", "help", "serve", "empathy"],
        "Your true calling is to care for and support others. You find meaning in helping people through difficult times and improving their wellbeing.",
        &[
            ("Healthcare Professional", "Provide medical care and support to patients"),
            ("Counselor/Therapist", "Help people navigate emotional challenges and improve mental health"),
            ("Social Worker", "Support individuals and families facing difficult circumstances"),
            ("Customer Support Specialist", "Help customers solve problems and have positive experiences"),
            ("Community Outreach Coordinator", "Connect people with resources and support in their community"),
            ("Caregiver", "Provide direct care and support to those who need assistance"),
        ],
    ),
    (
        "organizing_and_planning",
        &["organize", "plan", "arrange", "coordinate", "structure", "manage", "order", "systematize"],
        "Your true calling is to create order from chaos. You thrive when organizing, planning, and ensuring things run smoothly and efficiently.",
        &[
            ("Project Manager", "Plan and execute projects to achieve specific goals"),
            ("Operations Manager", "Ensure efficient and effective daily operations"),
            ("Event Planner", "Coordinate and organize events from concept to execution"),
            ("Logistics Coordinator", "Manage the flow of goods, information, or people"),
            ("Administrative Professional", "Support organizations by maintaining order and efficiency"),
            ("Process Improvement Specialist", "Analyze and optimize organizational processes"),
        ],
    ),
    (
        "expressing_creativity",
        &["express", "create art", "perform", "write", "play music", "design", "imagine", "creative"],
        "Your true calling is to express yourself creatively. You find fulfillment in artistic expression and bringing beauty or meaning into the world.",
        &[
            ("Graphic Designer", "Create visual content to communicate messages"),
            ("Content Creator", "Develop engaging content across various platforms"),
            ("UX/UI Designer", "Design user experiences for digital products"),
            ("Marketing Creative", "Develop creative campaigns and materials"),
            ("Performer", "Express yourself through acting, music, or other performance arts"),
            ("Creative Director", "Guide the creative vision for projects or organizations"),
        ],
    ),
    (
        "discovering_knowledge",
        &["learn", "discover", "research", "investigate", "study", "examine", "understand", "knowledge"],
        "Your true calling is to discover and share knowledge. You thrive when learning, researching, and understanding complex topics.",
        &[
            ("Researcher", "Investigate questions and contribute to knowledge in your field"),
            ("Journalist", "Investigate and report on events and issues"),
            ("Market Research Analyst", "Gather and analyze data about markets and consumers"),
            ("Business Intelligence Analyst", "Transform data into actionable business insights"),
            ("Librarian/Information Specialist", "Help others access and navigate information"),
            ("Curriculum Developer", "Research and develop educational content and programs"),
        ],
    ),
    (
        "leading_and_inspiring",
        &["lead", "direct", "guide team", "manage people", "influence", "motivate", "inspire", "vision"],
        "Your true calling is to lead and inspire others. You find fulfillment in guiding groups toward a shared vision and bringing out the best in people.",
        &[
            ("Team Leader/Manager", "Guide teams to achieve goals while developing team members"),
            ("Executive", "Set organizational direction and make high-level decisions"),
            ("Community Leader", "Bring people together around shared interests or causes"),
            ("Motivational Speaker", "Inspire and motivate others through public speaking"),
            ("Leadership Coach", "Help others develop their leadership abilities"),
            ("Entrepreneur", "Lead organizations that bring your vision to life"),
        ],
    ),
];

/// Returns the built-in eight-category catalog.
pub fn default_catalog() -> Catalog {
    Catalog::new(
        DEFAULT_CATEGORIES
            .iter()
            .map(|(id, keywords, description, careers)| Category {
                id: id.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
                description: description.to_string(),
                careers: careers
                    .iter()
                    .map(|(title, description)| Role {
                        title: title.to_string(),
                        description: description.to_string(),
                    })
                    .collect(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_eight_categories() {
        assert_eq!(default_catalog().len(), 8);
    }

    #[test]
    fn test_every_category_has_keywords_and_roles() {
        for category in default_catalog().iter() {
            assert!(
                (6..=9).contains(&category.keywords.len()),
                "{} has {} keywords",
                category.id,
                category.keywords.len()
            );
            assert!(
                (5..=6).contains(&category.careers.len()),
                "{} has {} roles",
                category.id,
                category.careers.len()
            );
            assert!(!category.description.is_empty());
        }
    }

    #[test]
    fn test_fallback_categories_exist_in_defaults() {
        let catalog = default_catalog();
        for id in FALLBACK_CATEGORIES {
            assert!(catalog.get(id).is_some(), "missing fallback {id}");
        }
    }

    #[test]
    fn test_entrepreneur_appears_in_two_categories() {
        let count = default_catalog()
            .iter()
            .filter(|c| c.careers.iter().any(|r| r.title == "Entrepreneur"))
            .count();
        assert_eq!(count, 2);
    }
}
