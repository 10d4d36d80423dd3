//! Rich analyzer: lexicon-driven part-of-speech tagging, lemmatization and
//! noun-chunk extraction.
//!
//! Only constructed when the lexicon and stopword resources both load.
//! Any failure inside `try_analyze` hands the text to the simple analyzer.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::analysis::frequency::most_common;
use crate::analysis::lexicon::{Lexicon, PosTag, Stopwords};
use crate::analysis::simple::SimpleAnalyzer;
use crate::analysis::{AnalysisResult, TextAnalyzer};
use crate::errors::AppError;

const MAX_KEY_WORDS: usize = 10;
const MAX_KEY_PHRASES: usize = 10;
/// Chunks must be longer than this many characters to count as phrases.
const MIN_CHUNK_LEN: usize = 3;
/// Inputs longer than this are refused and handled by the fallback.
const MAX_TEXT_LEN: usize = 1_000_000;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w']+|[^\w\s]").unwrap());

#[derive(Debug, Clone, PartialEq)]
struct TaggedToken {
    text: String,
    tag: PosTag,
    lemma: String,
}

pub struct RichAnalyzer {
    lexicon: Lexicon,
    stopwords: Stopwords,
    fallback: SimpleAnalyzer,
}

impl RichAnalyzer {
    pub fn new(lexicon: Lexicon, stopwords: Stopwords, fallback: SimpleAnalyzer) -> Self {
        Self {
            lexicon,
            stopwords,
            fallback,
        }
    }

    pub fn try_analyze(&self, text: &str) -> Result<AnalysisResult, AppError> {
        if text.len() > MAX_TEXT_LEN {
            return Err(AppError::Analysis(format!(
                "text of {} bytes exceeds the {MAX_TEXT_LEN} byte limit",
                text.len()
            )));
        }

        let tokens = self.tag(text);

        let lemmas = tokens
            .iter()
            .filter(|t| matches!(t.tag, PosTag::Noun | PosTag::Verb))
            .filter(|t| !self.stopwords.contains(&t.text))
            .map(|t| t.lemma.clone());

        Ok(AnalysisResult {
            key_words: most_common(lemmas, MAX_KEY_WORDS),
            key_phrases: noun_chunks(&tokens)
                .into_iter()
                .filter(|c| c.chars().count() > MIN_CHUNK_LEN)
                .take(MAX_KEY_PHRASES)
                .collect(),
        })
    }

    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        TOKEN_RE
            .find_iter(text)
            .map(|m| {
                let word = m.as_str().to_lowercase();
                match self.lexicon.lookup(&word) {
                    Some(entry) => TaggedToken {
                        tag: entry.tag,
                        lemma: entry.lemma.clone(),
                        text: word,
                    },
                    None => {
                        let (tag, lemma) = guess(&word, self.stopwords.contains(&word));
                        TaggedToken {
                            text: word,
                            tag,
                            lemma,
                        }
                    }
                }
            })
            .collect()
    }
}

impl TextAnalyzer for RichAnalyzer {
    fn analyze(&self, text: &str) -> AnalysisResult {
        match self.try_analyze(text) {
            Ok(result) => result,
            Err(e) => {
                warn!("Rich analysis encountered an issue: {e}. Using simpler analysis.");
                self.fallback.analyze(text)
            }
        }
    }

    fn backend(&self) -> &'static str {
        "rich"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Unknown-word heuristics
// ────────────────────────────────────────────────────────────────────────────

/// Tags and lemmatizes a word the lexicon does not know, from its shape.
fn guess(word: &str, is_stop: bool) -> (PosTag, String) {
    if !word.chars().any(char::is_alphanumeric) {
        return (PosTag::Punct, word.to_string());
    }
    if word.chars().all(|c| c.is_ascii_digit()) {
        return (PosTag::Num, word.to_string());
    }
    if is_stop {
        return (PosTag::Other, word.to_string());
    }

    let len = word.chars().count();
    if len > 5 && word.ends_with("ing") {
        return (PosTag::Verb, undouble(&word[..word.len() - 3]));
    }
    if len > 4 && word.ends_with("ied") {
        return (PosTag::Verb, format!("{}y", &word[..word.len() - 3]));
    }
    if len > 4 && word.ends_with("ed") {
        return (PosTag::Verb, undouble(&word[..word.len() - 2]));
    }
    if len > 4 && word.ends_with("ly") {
        return (PosTag::Adv, word.to_string());
    }
    if ["ful", "ous", "ive", "able", "ible"]
        .iter()
        .any(|s| len > s.len() + 2 && word.ends_with(s))
    {
        return (PosTag::Adj, word.to_string());
    }
    (PosTag::Noun, singular(word))
}

/// "runn" → "run", "swimm" → "swim"; leaves "call", "miss", "buzz" alone.
fn undouble(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    match chars.as_slice() {
        [.., a, b] if a == b && !matches!(*a, 'l' | 's' | 'z') && !"aeiou".contains(*a) => {
            chars[..chars.len() - 1].iter().collect()
        }
        _ => stem.to_string(),
    }
}

fn singular(word: &str) -> String {
    let len = word.chars().count();
    if len > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }
    if len > 4 && ["ches", "shes", "sses", "xes"].iter().any(|s| word.ends_with(s)) {
        return word[..word.len() - 2].to_string();
    }
    if len > 3 && word.ends_with('s') && !["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Noun chunks
// ────────────────────────────────────────────────────────────────────────────

/// Maximal runs of determiners / adjectives / numbers followed by one or more
/// nouns. Anything else, punctuation included, closes the current chunk.
fn noun_chunks(tokens: &[TaggedToken]) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut has_noun = false;

    for token in tokens {
        match token.tag {
            PosTag::Noun => {
                current.push(&token.text);
                has_noun = true;
            }
            PosTag::Det | PosTag::Adj | PosTag::Num => {
                if has_noun {
                    chunks.push(current.join(" "));
                    current.clear();
                    has_noun = false;
                }
                current.push(&token.text);
            }
            _ => {
                if has_noun {
                    chunks.push(current.join(" "));
                }
                current.clear();
                has_noun = false;
            }
        }
    }
    if has_noun {
        chunks.push(current.join(" "));
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TOKEN_PATTERN;

    const LEXICON: &str = "\
i\tPRON
love\tVERB
taught\tVERB\tteach
my\tDET
the\tDET
young\tADJ
children\tNOUN\tchild
and\tCCONJ
to\tPART
";

    fn analyzer() -> RichAnalyzer {
        let stopwords = Stopwords::from_text("i\nmy\nthe\nand\nto\n");
        RichAnalyzer::new(
            Lexicon::from_tsv(LEXICON).unwrap(),
            stopwords.clone(),
            SimpleAnalyzer::new(DEFAULT_TOKEN_PATTERN, Some(stopwords)),
        )
    }

    #[test]
    fn test_key_words_are_lemmas_of_nouns_and_verbs() {
        let result = analyzer().analyze("i love teaching and mentoring students");
        assert_eq!(
            result.key_words,
            vec!["love", "teach", "mentor", "student"]
        );
    }

    #[test]
    fn test_lexicon_lemma_wins_over_heuristics() {
        let result = analyzer().analyze("i taught the young children");
        assert!(result.key_words.contains(&"teach".to_string()));
        assert!(result.key_words.contains(&"child".to_string()));
    }

    #[test]
    fn test_noun_chunks_include_modifiers() {
        let result = analyzer().analyze("i taught the young children");
        assert_eq!(result.key_phrases, vec!["the young children"]);
    }

    #[test]
    fn test_punctuation_breaks_chunks() {
        let tokens = analyzer().tag("robots, puzzles");
        let chunks = noun_chunks(&tokens);
        assert_eq!(chunks, vec!["robots", "puzzles"]);
    }

    #[test]
    fn test_short_chunks_are_dropped() {
        let result = analyzer().analyze("my cat");
        // "my cat" is 6 chars and kept; a bare "cat" would not be.
        assert_eq!(result.key_phrases, vec!["my cat"]);
        let result = analyzer().analyze("cat");
        assert!(result.key_phrases.is_empty());
    }

    #[test]
    fn test_frequency_ordering_of_lemmas() {
        let result = analyzer().analyze("puzzles and puzzle games and more puzzles");
        assert_eq!(result.key_words[0], "puzzle");
    }

    #[test]
    fn test_phrases_capped_at_ten() {
        let text = (0..15)
            .map(|i| format!("robot{i}, "))
            .collect::<String>();
        let result = analyzer().analyze(&text);
        assert_eq!(result.key_phrases.len(), 10);
    }

    #[test]
    fn test_oversized_text_falls_back_to_simple() {
        let a = analyzer();
        let text = "teaching ".repeat(MAX_TEXT_LEN / 9 + 1);
        assert!(a.try_analyze(&text).is_err());
        let result = a.analyze(&text);
        // Simple analyzer keeps the surface form, not the lemma.
        assert_eq!(result.key_words, vec!["teaching"]);
    }

    #[test]
    fn test_guess_rules() {
        assert_eq!(guess("running", false), (PosTag::Verb, "run".to_string()));
        assert_eq!(guess("studied", false), (PosTag::Verb, "study".to_string()));
        assert_eq!(guess("helped", false), (PosTag::Verb, "help".to_string()));
        assert_eq!(guess("stories", false), (PosTag::Noun, "story".to_string()));
        assert_eq!(guess("boxes", false), (PosTag::Noun, "box".to_string()));
        assert_eq!(guess("class", false), (PosTag::Noun, "class".to_string()));
        assert_eq!(guess("quickly", false), (PosTag::Adv, "quickly".to_string()));
        assert_eq!(guess("creative", false), (PosTag::Adj, "creative".to_string()));
        assert_eq!(guess("42", false), (PosTag::Num, "42".to_string()));
        assert_eq!(guess(",", false), (PosTag::Punct, ",".to_string()));
        assert_eq!(guess("about", true), (PosTag::Other, "about".to_string()));
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(analyzer().backend(), "rich");
    }
}
