//! Damped power iteration over a row-stochastic transition matrix

/// Power iteration settings
#[derive(Debug, Clone)]
pub struct PowerIteration {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 change between iterations
    pub tolerance: f64,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Result of a power iteration run
#[derive(Debug, Clone)]
pub struct StationaryDistribution {
    pub scores: Vec<f64>,
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    pub converged: bool,
}

impl PowerIteration {
    /// Run until the L1 delta drops to `tolerance` or `max_iterations` is hit.
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, transition: &[Vec<f64>]) -> StationaryDistribution {
        let n = transition.len();
        if n == 0 {
            return StationaryDistribution {
                scores: Vec::new(),
                iterations: 0,
                delta: 0.0,
                converged: true,
            };
        }

        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];
        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.tolerance {
            iterations += 1;
            new_scores.fill(teleport);

            for (row, &score) in transition.iter().zip(scores.iter()) {
                if score == 0.0 {
                    continue;
                }
                for (target, &weight) in row.iter().enumerate() {
                    new_scores[target] += self.damping * score * weight;
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        // Should already sum to ~1; renormalize for numerical stability
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        StationaryDistribution {
            scores,
            iterations,
            delta,
            converged: delta <= self.tolerance,
        }
    }
}
