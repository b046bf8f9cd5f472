//! Sentence similarity graph as dense matrices.
//!
//! Documents are small enough that an `n x n` matrix is the simplest
//! representation; nothing here is persisted between calls.

use super::tfidf::SparseVector;

/// Pairwise cosine similarity, diagonal included. Values below `threshold`
/// are dropped to zero.
pub fn similarity_matrix(vectors: &[SparseVector], threshold: f64) -> Vec<Vec<f64>> {
    let n = vectors.len();
    let mut matrix = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in i..n {
            let similarity = vectors[i].cosine(&vectors[j]);
            let weight = if similarity < threshold { 0.0 } else { similarity };
            matrix[i][j] = weight;
            matrix[j][i] = weight;
        }
    }

    matrix
}

/// Row-normalize into a stochastic matrix. All-zero rows become uniform.
pub fn transition_matrix(similarity: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = similarity.len();
    similarity
        .iter()
        .map(|row| {
            let total: f64 = row.iter().sum();
            if total > 0.0 {
                row.iter().map(|w| w / total).collect()
            } else {
                vec![1.0 / n as f64; n]
            }
        })
        .collect()
}
