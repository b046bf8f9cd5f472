//! TF-IDF sentence vectors over the corpus vocabulary

use std::collections::{BTreeMap, HashMap};

use crate::corpus::Corpus;
use crate::stopwords::StopwordFilter;

/// Sparse term-weight vector, entries sorted by term id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_map(map: BTreeMap<usize, f64>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &Self) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_term, a_weight) = self.entries[i];
            let (b_term, b_weight) = other.entries[j];
            match a_term.cmp(&b_term) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_weight * b_weight;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Cosine similarity; 0 when either vector is empty
    pub fn cosine(&self, other: &Self) -> f64 {
        let denominator = self.norm() * other.norm();
        if denominator == 0.0 {
            0.0
        } else {
            self.dot(other) / denominator
        }
    }
}

/// Vectorize each corpus line.
///
/// Terms are lowercased whitespace-separated tokens containing at least one
/// alphanumeric character, minus stop words and possessive `'s`. TF is the raw count divided by
/// the line's highest count; IDF is `ln((1 + n) / (1 + df)) + 1`.
pub fn vectorize(corpus: &Corpus, stopwords: &StopwordFilter) -> Vec<SparseVector> {
    let mut vocabulary: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<BTreeMap<usize, u32>> = Vec::with_capacity(corpus.len());

    for line in corpus.lines() {
        let mut line_counts = BTreeMap::new();
        for raw in line.split_whitespace() {
            if !raw.chars().any(char::is_alphanumeric) || is_clitic(raw) || stopwords.is_stopword(raw) {
                continue;
            }
            let next_id = vocabulary.len();
            let id = *vocabulary.entry(raw.to_lowercase()).or_insert(next_id);
            *line_counts.entry(id).or_insert(0u32) += 1;
        }
        counts.push(line_counts);
    }

    let mut document_frequency = vec![0u32; vocabulary.len()];
    for line_counts in &counts {
        for &id in line_counts.keys() {
            document_frequency[id] += 1;
        }
    }

    let n = corpus.len() as f64;
    let idf: Vec<f64> = document_frequency
        .iter()
        .map(|&df| ((1.0 + n) / (1.0 + f64::from(df))).ln() + 1.0)
        .collect();

    counts
        .into_iter()
        .map(|line_counts| {
            let max_count = line_counts.values().copied().max().unwrap_or(0);
            let weights = line_counts
                .into_iter()
                .map(|(id, count)| (id, f64::from(count) / f64::from(max_count) * idf[id]))
                .collect();
            SparseVector::from_map(weights)
        })
        .collect()
}

/// Possessive `'s` split off by the tokenizer
fn is_clitic(token: &str) -> bool {
    matches!(token, "'s" | "'S" | "\u{2019}s" | "\u{2019}S")
}
