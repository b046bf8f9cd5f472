//! End-to-end extractive summarization.
//!
//! A [`Summarizer`] is built once around a linguistic pipeline and can then
//! summarize any number of documents. Each call runs normalize, segment,
//! corpus, rank and select from scratch; only the pipeline and the stop-word
//! list are shared between calls.

use std::time::Instant;

use tracing::{debug, info};

use crate::config::SummaryConfig;
use crate::corpus::Corpus;
use crate::error::{Result, SummaryError};
use crate::format::{format_sentence, group_sections};
use crate::normalizer::normalize;
use crate::rank::{LexRank, ScoreVector};
use crate::segmenter::{Segmenter, Sentence};
use crate::selector::{select, target_sentences, SummarySelection};
use crate::sentence_detector::LinguisticPipeline;
use crate::stopwords::StopwordFilter;

/// Result of one summarization run
#[derive(Debug, Clone)]
pub struct Summary {
    pub sentences: Vec<Sentence>,
    pub scores: ScoreVector,
    pub selection: SummarySelection,
    pub target_sentences: usize,
}

impl Summary {
    /// Selected sentences in document order
    pub fn selected(&self) -> impl Iterator<Item = &Sentence> {
        self.selection
            .indices()
            .iter()
            .filter_map(|&i| self.sentences.get(i))
    }

    /// Selected sentence source texts in document order
    pub fn selected_texts(&self) -> Vec<&str> {
        self.selected().map(|s| s.text.as_str()).collect()
    }

    /// Selected sentences after display cleanup
    pub fn formatted(&self) -> Vec<String> {
        self.selected().map(|s| format_sentence(&s.text)).collect()
    }

    pub fn total_sentences(&self) -> usize {
        self.sentences.len()
    }
}

pub struct Summarizer<P> {
    segmenter: Segmenter<P>,
    ranker: LexRank,
    config: SummaryConfig,
}

impl<P: LinguisticPipeline> Summarizer<P> {
    /// Validate the configuration and load the stop-word list
    pub fn new(pipeline: P, config: SummaryConfig) -> Result<Self> {
        config.validate()?;
        let stopwords = StopwordFilter::for_language(&config.language)?;
        info!(
            pipeline = pipeline.name(),
            language = %config.language,
            stopwords = stopwords.len(),
            "Summarizer ready"
        );
        let segmenter = Segmenter::new(pipeline).with_section_markers(config.section_markers.clone());
        let ranker = LexRank::with_config(stopwords, config.lexrank.clone());
        Ok(Self {
            segmenter,
            ranker,
            config,
        })
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    pub fn segmenter(&self) -> &Segmenter<P> {
        &self.segmenter
    }

    /// Summarize a raw document.
    ///
    /// Empty input is rejected before the pipeline sees it. Failures past
    /// validation come back wrapped as `SummaryError::Summarization`.
    pub fn summarize(&self, text: &str) -> Result<Summary> {
        if text.trim().is_empty() {
            return Err(SummaryError::invalid_input("Input text cannot be empty"));
        }
        self.run(text).map_err(SummaryError::into_summarization)
    }

    /// Group the formatted selection into sections for rendering
    pub fn sections(&self, summary: &Summary) -> Vec<Vec<String>> {
        group_sections(&summary.formatted(), &self.config.section_markers)
    }

    fn run(&self, text: &str) -> Result<Summary> {
        let started = Instant::now();

        let normalized = normalize(text, &self.config.normalizer)?;
        let sentences = self.segmenter.segment(&normalized)?;
        let corpus = Corpus::build(&sentences)?;
        let scores = self.ranker.rank(&corpus)?;

        let target = target_sentences(
            sentences.len(),
            self.config.compression_ratio,
            self.config.min_sentences,
        );
        let selection = select(&scores, target);

        debug!(
            total = sentences.len(),
            target,
            iterations = scores.iterations(),
            converged = scores.converged(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Summary selected"
        );

        Ok(Summary {
            sentences,
            scores,
            selection,
            target_sentences: target,
        })
    }
}
