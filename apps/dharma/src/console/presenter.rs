//! Presenter: renders every screen of the questionnaire to a `String`.
//!
//! Nothing here touches the terminal; the journey writes the strings through
//! the prompter. Styling uses crossterm's `Stylize`, which emits plain ANSI
//! sequences, so rendered text still contains each message verbatim.

use std::fmt::Write;

use crossterm::style::{Color, Stylize};

use crate::calling::recommender::Recommendation;
use crate::calling::report::DharmaReport;

// ────────────────────────────────────────────────────────────────────────────
// Panels
// ────────────────────────────────────────────────────────────────────────────

/// Draws a boxed panel sized to its widest line.
fn panel(title: &str, heading: &str, body: &[&str], color: Color) -> String {
    let width = body
        .iter()
        .map(|l| l.chars().count())
        .chain([heading.chars().count(), title.chars().count() + 2])
        .max()
        .unwrap_or(0);

    let title_fill = width + 2 - (title.chars().count() + 2);
    let top = format!(
        "╭─ {} {}╮",
        title,
        "─".repeat(title_fill.saturating_sub(1))
    );
    let bottom = format!("╰{}╯", "─".repeat(width + 2));
    let row = |text: String, visible: usize| {
        format!(
            "{} {}{} {}\n",
            "│".with(color),
            text,
            " ".repeat(width - visible),
            "│".with(color)
        )
    };

    let mut out = String::new();
    let _ = writeln!(out, "\n{}", top.with(color));
    out.push_str(&row(heading.bold().with(color).to_string(), heading.chars().count()));
    out.push_str(&row(String::new(), 0));
    for line in body {
        out.push_str(&row(line.to_string(), line.chars().count()));
    }
    let _ = writeln!(out, "{}", bottom.with(color));
    out
}

pub fn welcome_banner() -> String {
    panel(
        "Find Your True Calling",
        "Welcome to Dharma Path",
        &[
            "This application will help you discover your true calling (dharma) and career paths",
            "where you can express it. We'll guide you through introspective questions to understand",
            "what truly motivates you and where you can best serve with your unique gifts.",
        ],
        Color::Cyan,
    )
}

pub fn greeting(name: &str) -> String {
    format!(
        "\n{}\n",
        format!("Great to meet you, {name}! Let's begin your journey of self-discovery.").green()
    )
}

pub fn passions_banner() -> String {
    panel(
        "Soul Searching",
        "Exploring Your True Calling",
        &[
            "Let's discover what activities and experiences truly light you up inside.",
            "Take a moment to reflect deeply on these questions about your dharma (true calling).",
        ],
        Color::Yellow,
    )
}

pub fn skills_banner() -> String {
    panel(
        "Your Toolkit",
        "Your Skills & Qualifications",
        &[
            "Now let's take stock of your current skills and qualifications.",
            "This will help us understand how you might express your dharma in practical ways.",
        ],
        Color::Green,
    )
}

pub fn analysis_banner() -> String {
    panel(
        "Finding Your Dharma",
        "Discovering Your True Calling",
        &[
            "Based on your passions, memories, and aspirations,",
            "we're identifying your dharma (true calling) and career paths where you can express it.",
        ],
        Color::Magenta,
    )
}

/// Bold lead-in followed by an optional plain hint.
pub fn heading(text: &str, hint: Option<&str>) -> String {
    match hint {
        Some(hint) => format!("\n{} {}\n", text.bold(), hint),
        None => format!("\n{}\n", text.bold()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Results
// ────────────────────────────────────────────────────────────────────────────

/// The full results screen: callings, insights, themes, grouped careers,
/// closing panel and next steps.
pub fn render_results(name: &str, report: &DharmaReport) -> String {
    let mut out = panel(
        "Your Dharma",
        &format!("Your True Calling - {name}"),
        &["Based on your reflections, we've identified your dharma (true calling)."],
        Color::Blue,
    );

    let _ = writeln!(out, "\n{}", "Your True Calling Appears To Be:".bold().yellow());
    for (i, calling) in report.true_callings.iter().enumerate() {
        let _ = writeln!(out, "\n{} {}", format!("{}.", i + 1).bold(), calling);
    }

    if !report.personalized_insights.is_empty() {
        let _ = writeln!(out, "\n{}", "Personal Insights:".bold().cyan());
        for insight in &report.personalized_insights {
            let _ = writeln!(out, "• {insight}");
        }
    }

    if !report.nlp_keywords.is_empty() {
        let _ = writeln!(out, "\n{}", "Key Themes In Your Responses:".bold());
        let _ = writeln!(out, "{}", sentence_case(&report.nlp_keywords.join(", ")));
    }

    let _ = writeln!(
        out,
        "\n\n{}",
        "Career Paths Where You Can Express Your True Calling:".bold().green()
    );
    let _ = writeln!(
        out,
        "{}",
        "These are roles where you can serve your dharma with your unique gifts".italic()
    );

    for (calling, careers) in group_by_calling(&report.career_suggestions) {
        let _ = writeln!(
            out,
            "\n{}",
            format!("For your calling to {}:", calling.replace('_', " "))
                .bold()
                .cyan()
        );
        for (i, career) in careers.iter().enumerate() {
            render_career(&mut out, i + 1, career);
        }
    }

    out.push_str(&panel(
        "Living Your Dharma",
        "Remember:",
        &[
            "Your true calling isn't just about what you do, but how you do it and why.",
            "Any role can become a vehicle for your dharma when approached with the right intention.",
            "The perfect career is where your true calling meets your skills and the world's needs.",
        ],
        Color::Green,
    ));

    let _ = writeln!(out, "\n{}", "Practical Next Steps:".bold());
    for (i, step) in NEXT_STEPS.iter().enumerate() {
        let _ = writeln!(out, "{}. {step}", i + 1);
    }
    out
}

const NEXT_STEPS: [&str; 5] = [
    "Reflect on which of these paths resonates most deeply with you",
    "Research the specific roles that interest you",
    "Connect with people already in these fields",
    "Identify one small step you can take this week toward your dharma",
    "Remember that living your dharma is a journey, not a destination",
];

fn render_career(out: &mut String, index: usize, career: &Recommendation) {
    let _ = writeln!(out, "\n{}", format!("{index}. {}", career.title).bold());
    let _ = writeln!(out, "{}", career.description.as_str().italic());

    if career.has_relevant_skills {
        let _ = writeln!(
            out,
            "{}",
            "✓ You already have relevant skills for this path:".green()
        );
        for skill in &career.relevant_skills {
            let _ = writeln!(out, "  • {skill}");
        }
    } else {
        let _ = writeln!(
            out,
            "{}",
            "To pursue this path, consider developing these skills:".yellow()
        );
        for skill in &career.suggested_skills {
            let _ = writeln!(out, "  • {skill}");
        }
    }

    let _ = writeln!(out, "\n{}", "How This Aligns With Your Dharma:".bold());
    let _ = writeln!(out, "{}", career.alignment_explanation);
}

/// Groups careers by calling, in order of first appearance.
fn group_by_calling(careers: &[Recommendation]) -> Vec<(&str, Vec<&Recommendation>)> {
    let mut groups: Vec<(&str, Vec<&Recommendation>)> = Vec::new();
    for career in careers {
        match groups.iter_mut().find(|(id, _)| *id == career.true_calling) {
            Some((_, group)) => group.push(career),
            None => groups.push((career.true_calling.as_str(), vec![career])),
        }
    }
    groups
}

/// Upper-cases the first character and lower-cases the rest.
fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Notices
// ────────────────────────────────────────────────────────────────────────────

pub fn analyzing_line() -> String {
    "Analyzing".bold().to_string()
}

pub fn saved_notice(filename: &str) -> String {
    format!("{}\n", format!("Results saved to {filename}").green())
}

pub fn catalog_notice(reason: &str) -> String {
    format!(
        "{}\n",
        format!("Error loading dharma data ({reason}). Continuing with an empty catalog.")
            .bold()
            .red()
    )
}

pub fn closing() -> String {
    format!(
        "\n{}\n{}\n",
        "Thank you for using Dharma Path!".bold().cyan(),
        "Remember, finding your dharma is a journey of self-discovery and service.".italic()
    )
}

pub fn interrupted_notice() -> String {
    format!("\n{}\n", "Program interrupted. Exiting...".yellow())
}

pub fn error_notice(message: &str) -> String {
    format!("{}\n", format!("An error occurred: {message}").bold().red())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(title: &str, calling: &str, has_skills: bool) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            description: format!("{title} description"),
            true_calling: calling.to_string(),
            calling_description: String::new(),
            has_relevant_skills: has_skills,
            relevant_skills: if has_skills { vec!["Rust".to_string()] } else { vec![] },
            suggested_skills: if has_skills { vec![] } else { vec!["programming".to_string()] },
            alignment_explanation: format!("{title} aligns"),
        }
    }

    fn report() -> DharmaReport {
        DharmaReport {
            calling_ids: vec!["creating_and_innovating".into(), "solving_problems".into()],
            true_callings: vec!["Create things.".into(), "Solve things.".into()],
            career_suggestions: vec![
                rec("Software Developer", "creating_and_innovating", true),
                rec("Engineer", "solving_problems", false),
                rec("Artist", "creating_and_innovating", false),
            ],
            personalized_insights: vec!["You build.".into()],
            nlp_keywords: vec!["build".into(), "code".into()],
        }
    }

    #[test]
    fn test_results_contain_every_section() {
        let out = render_results("Ada", &report());
        for needle in [
            "Your True Calling - Ada",
            "Create things.",
            "Solve things.",
            "You build.",
            "Build, code",
            "For your calling to creating and innovating:",
            "For your calling to solving problems:",
            "You already have relevant skills for this path:",
            "consider developing these skills:",
            "Engineer aligns",
            "Practical Next Steps:",
            "5. Remember that living your dharma",
        ] {
            assert!(out.contains(needle), "missing {needle:?}");
        }
    }

    #[test]
    fn test_careers_grouped_in_first_appearance_order() {
        let r = report();
        let groups = group_by_calling(&r.career_suggestions);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "creating_and_innovating");
        let titles: Vec<&str> = groups[0].1.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Software Developer", "Artist"]);
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let mut r = report();
        r.personalized_insights.clear();
        r.nlp_keywords.clear();
        let out = render_results("Ada", &r);
        assert!(!out.contains("Personal Insights:"));
        assert!(!out.contains("Key Themes"));
    }

    #[test]
    fn test_panel_rows_are_aligned() {
        let out = panel("T", "Heading", &["short", "a much longer line"], Color::Cyan);
        assert!(out.contains("Heading"));
        assert!(out.contains("a much longer line"));
        assert!(out.contains("╭─ T "));
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(sentence_case("teaching, Mentoring"), "Teaching, mentoring");
        assert_eq!(sentence_case(""), "");
    }
}
