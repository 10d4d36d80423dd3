//! Text analysis: turns the user's free-text answers into frequent words and phrases.
//!
//! `TextAnalyzer` is the seam: `RichAnalyzer` when the linguistic resources
//! are on disk, `SimpleAnalyzer` otherwise. The choice is made once, at
//! startup, by `select_analyzer`. Callers only ever see `Arc<dyn TextAnalyzer>`.

pub mod frequency;
pub mod lexicon;
pub mod rich;
pub mod simple;

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::analysis::lexicon::{Lexicon, Stopwords, LEXICON_FILE, STOPWORDS_FILE};
use crate::analysis::rich::RichAnalyzer;
use crate::analysis::simple::SimpleAnalyzer;

/// Frequency-ranked words and phrases from the combined answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub key_words: Vec<String>,
    pub key_phrases: Vec<String>,
}

/// Capability interface for the analyzer strategies.
///
/// Implementations never fail: internal problems degrade to a simpler path
/// and, at worst, to empty lists.
pub trait TextAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> AnalysisResult;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

/// Inspects `resource_dir` and builds the richest analyzer its contents allow.
pub fn select_analyzer(resource_dir: &Path, token_pattern: &str) -> Arc<dyn TextAnalyzer> {
    let stopwords = match Stopwords::load(&resource_dir.join(STOPWORDS_FILE)) {
        Ok(sw) => {
            debug!("Loaded {} stopwords", sw.len());
            Some(sw)
        }
        Err(e) => {
            warn!("Stopword list unavailable ({e}); stopword filtering disabled");
            None
        }
    };

    let lexicon = match Lexicon::load(&resource_dir.join(LEXICON_FILE)) {
        Ok(lex) => {
            debug!("Loaded {} lexicon entries", lex.len());
            Some(lex)
        }
        Err(e) => {
            warn!("Lexicon unavailable ({e}); rich analysis disabled");
            None
        }
    };

    let analyzer: Arc<dyn TextAnalyzer> = match (lexicon, stopwords) {
        (Some(lexicon), Some(stopwords)) => Arc::new(RichAnalyzer::new(
            lexicon,
            stopwords.clone(),
            SimpleAnalyzer::new(token_pattern, Some(stopwords)),
        )),
        (_, stopwords) => Arc::new(SimpleAnalyzer::new(token_pattern, stopwords)),
    };

    info!("Text analyzer backend: {}", analyzer.backend());
    analyzer
}
