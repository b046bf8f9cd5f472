//! Summarizer settings and their validation

use crate::error::{Result, SummaryError};
use crate::normalizer::NormalizerOptions;
use crate::rank::LexRankConfig;
use crate::segmenter::DEFAULT_SECTION_MARKERS;

/// Everything a [`crate::Summarizer`] needs besides its linguistic pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryConfig {
    /// Fraction of sentences to keep, strictly between 0 and 1
    pub compression_ratio: f64,
    /// Lower bound on summary length, at least 1
    pub min_sentences: usize,
    /// Stop-word language, English name or ISO 639-1 code
    pub language: String,
    pub section_markers: Vec<String>,
    pub normalizer: NormalizerOptions,
    pub lexrank: LexRankConfig,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            compression_ratio: 0.3,
            min_sentences: 5,
            language: "english".to_string(),
            section_markers: DEFAULT_SECTION_MARKERS.iter().map(|m| m.to_string()).collect(),
            normalizer: NormalizerOptions::default(),
            lexrank: LexRankConfig::default(),
        }
    }
}

impl SummaryConfig {
    pub fn with_compression_ratio(mut self, ratio: f64) -> Self {
        self.compression_ratio = ratio;
        self
    }

    pub fn with_min_sentences(mut self, min_sentences: usize) -> Self {
        self.min_sentences = min_sentences;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Reject out-of-range parameters before any work is done
    pub fn validate(&self) -> Result<()> {
        validate_compression_ratio(self.compression_ratio)?;
        if self.min_sentences < 1 {
            return Err(SummaryError::invalid_input(
                "Minimum sentences must be at least 1",
            ));
        }
        if !(0.0..1.0).contains(&self.lexrank.damping) {
            return Err(SummaryError::invalid_input(
                "Damping factor must be in [0, 1)",
            ));
        }
        Ok(())
    }
}

/// Ratio must lie in the open interval (0, 1); NaN is rejected too
pub fn validate_compression_ratio(ratio: f64) -> Result<()> {
    if ratio > 0.0 && ratio < 1.0 {
        Ok(())
    } else {
        Err(SummaryError::invalid_input(
            "Compression ratio must be between 0 and 1",
        ))
    }
}
