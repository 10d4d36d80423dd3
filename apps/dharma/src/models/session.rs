use serde::{Deserialize, Serialize};

/// Everything the user told us during one questionnaire run.
///
/// Built incrementally by the prompter; read-only once analysis starts.
/// Serialized as the `user_data` block of a saved snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub name: String,
    pub passions: Vec<String>,
    pub childhood_memories: Vec<String>,
    pub skills: Vec<String>,
    pub qualifications: Vec<String>,
    pub dream_impact: String,
    /// Free-text answers in the order they were given (childhood, passions, impact).
    pub responses_raw: Vec<String>,
}

impl UserSession {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Records a childhood answer. Blank answers are dropped.
    pub fn add_childhood_memory(&mut self, answer: &str) {
        if !answer.trim().is_empty() {
            self.childhood_memories.push(answer.to_string());
            self.responses_raw.push(answer.to_string());
        }
    }

    /// Records a current-passion answer. Blank answers are dropped.
    pub fn add_passion(&mut self, answer: &str) {
        if !answer.trim().is_empty() {
            self.passions.push(answer.to_string());
            self.responses_raw.push(answer.to_string());
        }
    }

    /// Records the impact answer. Always kept, even when empty.
    pub fn set_dream_impact(&mut self, answer: &str) {
        self.dream_impact = answer.to_string();
        self.responses_raw.push(answer.to_string());
    }

    pub fn add_skill(&mut self, skill: &str) {
        self.skills.push(skill.to_string());
    }

    pub fn add_qualification(&mut self, qualification: &str) {
        self.qualifications.push(qualification.to_string());
    }

    /// Lower-cased input to the text analyzer: every free-text answer.
    pub fn analysis_text(&self) -> String {
        self.responses_raw.join(" ").to_lowercase()
    }

    /// Lower-cased input to direct keyword matching.
    /// Skills and qualifications are deliberately not part of it.
    pub fn scoring_text(&self) -> String {
        self.passions
            .iter()
            .chain(self.childhood_memories.iter())
            .chain(std::iter::once(&self.dream_impact))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}
