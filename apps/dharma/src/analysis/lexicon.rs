//! Optional linguistic resources: a stopword list and a part-of-speech lexicon.
//!
//! Both are plain-text files in the resource directory. Either may be missing;
//! the startup analyzer check decides which strategy the files allow.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::errors::AppError;

pub const STOPWORDS_FILE: &str = "stopwords.txt";
pub const LEXICON_FILE: &str = "lexicon.tsv";

/// Every file the background fetcher knows how to retrieve.
pub const RESOURCE_FILES: &[&str] = &[STOPWORDS_FILE, LEXICON_FILE];

// ────────────────────────────────────────────────────────────────────────────
// Stopwords
// ────────────────────────────────────────────────────────────────────────────

/// Lower-cased stopword set. One word per line; `#` starts a comment line.
#[derive(Debug, Clone, Default)]
pub struct Stopwords(HashSet<String>);

impl Stopwords {
    pub fn from_text(text: &str) -> Self {
        Self(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .map(str::to_lowercase)
                .collect(),
        )
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let stopwords = Self::from_text(&fs::read_to_string(path)?);
        if stopwords.is_empty() {
            return Err(AppError::InvalidResource {
                resource: STOPWORDS_FILE.to_string(),
                message: "no stopwords listed".to_string(),
            });
        }
        Ok(stopwords)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lexicon
// ────────────────────────────────────────────────────────────────────────────

/// Coarse part-of-speech tags, named after the universal tag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    Verb,
    Adj,
    Adv,
    Det,
    Pron,
    Adp,
    Aux,
    Conj,
    Part,
    Num,
    Punct,
    Other,
}

impl FromStr for PosTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "NOUN" | "PROPN" => PosTag::Noun,
            "VERB" => PosTag::Verb,
            "ADJ" => PosTag::Adj,
            "ADV" => PosTag::Adv,
            "DET" => PosTag::Det,
            "PRON" => PosTag::Pron,
            "ADP" => PosTag::Adp,
            "AUX" => PosTag::Aux,
            "CONJ" | "CCONJ" | "SCONJ" => PosTag::Conj,
            "PART" => PosTag::Part,
            "NUM" => PosTag::Num,
            "PUNCT" => PosTag::Punct,
            "X" | "SYM" | "INTJ" => PosTag::Other,
            other => return Err(format!("unknown tag '{other}'")),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LexEntry {
    pub tag: PosTag,
    pub lemma: String,
}

/// Word → (tag, lemma) table. Lines are `word<TAB>TAG<TAB>lemma`;
/// the lemma column may be omitted when it equals the word.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, LexEntry>,
}

impl Lexicon {
    pub fn from_tsv(text: &str) -> Result<Self, AppError> {
        let mut entries = HashMap::new();

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut cols = line.split('\t');
            let word = cols.next().unwrap_or_default().trim().to_lowercase();
            let tag = cols
                .next()
                .ok_or_else(|| invalid_lexicon(line_no, "missing tag column"))?
                .parse::<PosTag>()
                .map_err(|e| invalid_lexicon(line_no, &e))?;
            let lemma = cols
                .next()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| word.clone());

            if word.is_empty() {
                return Err(invalid_lexicon(line_no, "empty word column"));
            }
            entries.insert(word, LexEntry { tag, lemma });
        }

        let lexicon = Self { entries };
        if lexicon.is_empty() {
            return Err(AppError::InvalidResource {
                resource: LEXICON_FILE.to_string(),
                message: "no entries".to_string(),
            });
        }
        Ok(lexicon)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        Self::from_tsv(&fs::read_to_string(path)?)
    }

    pub fn lookup(&self, word: &str) -> Option<&LexEntry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn invalid_lexicon(line_no: usize, message: &str) -> AppError {
    AppError::InvalidResource {
        resource: LEXICON_FILE.to_string(),
        message: format!("line {}: {message}", line_no + 1),
    }
}
