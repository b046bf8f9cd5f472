//! LexRank sentence centrality.
//!
//! Sentences become TF-IDF vectors, edges are thresholded cosine similarities,
//! and the stationary distribution of a damped random walk over the
//! row-normalized graph is each sentence's score.

pub mod graph;
pub mod power;
pub mod tfidf;

use tracing::debug;

use crate::corpus::Corpus;
use crate::error::{Result, SummaryError};
use crate::stopwords::StopwordFilter;
use power::PowerIteration;

/// LexRank tuning constants
#[derive(Debug, Clone, PartialEq)]
pub struct LexRankConfig {
    /// Cosine similarities below this are not edges
    pub threshold: f64,
    /// Damping factor of the random walk
    pub damping: f64,
    /// L1 convergence tolerance
    pub tolerance: f64,
    /// Hard cap on power iterations
    pub max_iterations: usize,
}

impl Default for LexRankConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            damping: 0.85,
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

impl LexRankConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Centrality score per sentence index; scores sum to 1
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreVector {
    scores: Vec<f64>,
    iterations: usize,
    converged: bool,
}

impl ScoreVector {
    pub fn new(scores: Vec<f64>, iterations: usize, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            converged,
        }
    }

    /// Equal score for every sentence, used when ranking is degenerate
    pub fn uniform(n: usize) -> Self {
        let score = if n == 0 { 0.0 } else { 1.0 / n as f64 };
        Self::new(vec![score; n], 0, true)
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Indices by descending score, ties broken by ascending index
    pub fn ranked(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.scores.len()).collect();
        indices.sort_by(|&a, &b| self.scores[b].total_cmp(&self.scores[a]).then(a.cmp(&b)));
        indices
    }
}

/// LexRank ranker for one language
#[derive(Debug, Clone)]
pub struct LexRank {
    config: LexRankConfig,
    stopwords: StopwordFilter,
}

impl LexRank {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self::with_config(stopwords, LexRankConfig::default())
    }

    pub fn with_config(stopwords: StopwordFilter, config: LexRankConfig) -> Self {
        Self { config, stopwords }
    }

    pub fn config(&self) -> &LexRankConfig {
        &self.config
    }

    /// Score every corpus line.
    ///
    /// With fewer than two non-empty lines there is nothing to compare and
    /// every line gets `1/n`.
    pub fn rank(&self, corpus: &Corpus) -> Result<ScoreVector> {
        let n = corpus.len();
        if corpus.non_empty_lines() < 2 {
            debug!(sentences = n, "Degenerate corpus, assigning uniform scores");
            return Ok(ScoreVector::uniform(n));
        }

        let vectors = tfidf::vectorize(corpus, &self.stopwords);
        let similarity = graph::similarity_matrix(&vectors, self.config.threshold);
        let transition = graph::transition_matrix(&similarity);

        let runner = PowerIteration {
            damping: self.config.damping,
            max_iterations: self.config.max_iterations,
            tolerance: self.config.tolerance,
        };
        let result = runner.run(&transition);

        if let Some(bad) = result.scores.iter().position(|s| !s.is_finite()) {
            return Err(SummaryError::Ranking(format!(
                "non-finite score for sentence {bad}"
            )));
        }

        debug!(
            sentences = n,
            iterations = result.iterations,
            delta = result.delta,
            converged = result.converged,
            "LexRank power iteration finished"
        );
        Ok(ScoreVector::new(result.scores, result.iterations, result.converged))
    }
}
