//! Simple analyzer: word-frequency and bigram counting. Always available.
//!
//! Fallback chain inside this strategy:
//! 1. regex tokenizer + stopword filter
//! 2. regex tokenizer, alphanumeric filter only (no stopword resource)
//! 3. whitespace split, tokens longer than 2 characters (no tokenizer)

use regex::Regex;
use tracing::warn;

use crate::analysis::frequency::most_common;
use crate::analysis::lexicon::Stopwords;
use crate::analysis::{AnalysisResult, TextAnalyzer};

const MAX_KEY_WORDS: usize = 10;
const MAX_KEY_PHRASES: usize = 5;
/// Both words of a bigram must be longer than this (in characters).
const MIN_PHRASE_WORD_LEN: usize = 3;
/// Whitespace-fallback tokens must be longer than this.
const MIN_SPLIT_TOKEN_LEN: usize = 2;

pub struct SimpleAnalyzer {
    tokenizer: Option<Regex>,
    stopwords: Option<Stopwords>,
}

impl SimpleAnalyzer {
    /// Builds the analyzer. An invalid `token_pattern` disables the tokenizer
    /// and every call falls through to whitespace splitting.
    pub fn new(token_pattern: &str, stopwords: Option<Stopwords>) -> Self {
        let tokenizer = match Regex::new(token_pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Tokenizer pattern '{token_pattern}' is invalid ({e}); using whitespace splitting");
                None
            }
        };
        Self {
            tokenizer,
            stopwords,
        }
    }

    fn key_words(&self, text: &str) -> Vec<String> {
        let Some(tokenizer) = &self.tokenizer else {
            let tokens = text
                .split_whitespace()
                .filter(|w| w.chars().count() > MIN_SPLIT_TOKEN_LEN);
            return most_common(tokens, MAX_KEY_WORDS);
        };

        let tokens = tokenizer
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|w| !w.is_empty() && w.chars().all(char::is_alphanumeric))
            .filter(|w| {
                self.stopwords
                    .as_ref()
                    .map_or(true, |sw| !sw.contains(w))
            });
        most_common(tokens, MAX_KEY_WORDS)
    }
}

/// Adjacent whitespace-separated word pairs where both words are long enough.
fn key_phrases(text: &str) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let bigrams = words
        .windows(2)
        .filter(|pair| pair.iter().all(|w| w.chars().count() > MIN_PHRASE_WORD_LEN))
        .map(|pair| format!("{} {}", pair[0], pair[1]));
    most_common(bigrams, MAX_KEY_PHRASES)
}

impl TextAnalyzer for SimpleAnalyzer {
    fn analyze(&self, text: &str) -> AnalysisResult {
        AnalysisResult {
            key_words: self.key_words(text),
            key_phrases: key_phrases(text),
        }
    }

    fn backend(&self) -> &'static str {
        match (&self.tokenizer, &self.stopwords) {
            (Some(_), Some(_)) => "simple",
            (Some(_), None) => "simple-no-stopwords",
            (None, _) => "simple-split",
        }
    }
}
