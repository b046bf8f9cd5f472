//! Token corpus fed to the ranker: one line per sentence, same indices.

use crate::error::{Result, SummaryError};
use crate::segmenter::Sentence;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    lines: Vec<String>,
}

impl Corpus {
    /// Join each sentence's content tokens with single spaces.
    ///
    /// Fails with `CorpusNotReady` when no sentences have been segmented yet.
    pub fn build(sentences: &[Sentence]) -> Result<Self> {
        if sentences.is_empty() {
            return Err(SummaryError::CorpusNotReady);
        }
        let lines = sentences
            .iter()
            .map(|s| s.content_tokens().collect::<Vec<_>>().join(" "))
            .collect();
        Ok(Self { lines })
    }

    /// Corpus from prepared token lines, one per sentence
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines with at least one token
    pub fn non_empty_lines(&self) -> usize {
        self.lines.iter().filter(|l| !l.trim().is_empty()).count()
    }
}
