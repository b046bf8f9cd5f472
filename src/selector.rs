//! Summary length and top-N sentence selection

use crate::rank::ScoreVector;

/// `max(min_sentences, floor(total * compression_ratio))`, clamped to `[1, total]`.
/// Returns 0 only for an empty document.
pub fn target_sentences(total: usize, compression_ratio: f64, min_sentences: usize) -> usize {
    if total == 0 {
        return 0;
    }
    let by_ratio = (total as f64 * compression_ratio).floor() as usize;
    by_ratio.max(min_sentences).clamp(1, total)
}

/// Chosen sentence indices in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySelection {
    indices: Vec<usize>,
}

impl SummarySelection {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }
}

/// Take the `target` best-scoring indices (ties go to the earlier sentence)
/// and return them in ascending document order
pub fn select(scores: &ScoreVector, target: usize) -> SummarySelection {
    let mut indices = scores.ranked();
    indices.truncate(target);
    indices.sort_unstable();
    SummarySelection { indices }
}
