// Linguistic analysis seam: sentence spans and tokens.
// The summarization core only depends on the `LinguisticPipeline` trait.

use crate::error::Result;

pub mod abbreviations;
pub mod rule_based;
pub mod tokenizer;

pub use abbreviations::AbbreviationChecker;
pub use rule_based::{BoundaryRules, RuleBasedPipeline};

/// A single token of an analyzed span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub is_punctuation: bool,
    pub is_whitespace: bool,
}

impl Token {
    pub fn word(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_punctuation: false,
            is_whitespace: false,
        }
    }

    pub fn punctuation(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_punctuation: true,
            is_whitespace: false,
        }
    }

    pub fn whitespace(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_punctuation: false,
            is_whitespace: true,
        }
    }

    /// Content tokens are everything except punctuation and whitespace
    pub fn is_content(&self) -> bool {
        !self.is_punctuation && !self.is_whitespace
    }
}

/// One sentence span as reported by a linguistic pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedSpan {
    /// Raw span text, a contiguous slice of the analyzed input
    pub text: String,
    pub tokens: Vec<Token>,
    pub has_named_entities: bool,
    /// Root verb of the span, when the pipeline can tell
    pub root_verb: Option<String>,
}

impl AnalyzedSpan {
    /// Build a span whose tokens come from the bundled tokenizer
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            tokens: tokenizer::tokenize(text),
            has_named_entities: false,
            root_verb: None,
        }
    }

    pub fn content_tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|t| t.is_content())
            .map(|t| t.text.as_str())
    }
}

/// Sentence boundary detection plus tokenization.
///
/// Implementations are expensive to construct and are built once per process,
/// then passed by reference into the summarizer.
pub trait LinguisticPipeline {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Split text into ordered sentence spans
    fn segment(&self, text: &str) -> Result<Vec<AnalyzedSpan>>;
}

impl<T: LinguisticPipeline + ?Sized> LinguisticPipeline for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn segment(&self, text: &str) -> Result<Vec<AnalyzedSpan>> {
        (**self).segment(text)
    }
}

impl<T: LinguisticPipeline + ?Sized> LinguisticPipeline for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn segment(&self, text: &str) -> Result<Vec<AnalyzedSpan>> {
        (**self).segment(text)
    }
}

/// A bare numbered-list marker: one digit `1`-`9` followed by a period.
/// Longer numbers such as years or counts are ordinary words.
pub fn is_list_marker(word: &str) -> bool {
    matches!(word.as_bytes(), [b'1'..=b'9', b'.'])
}
