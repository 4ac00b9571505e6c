use crate::sentence::SentenceScores;
use precis_core::Ratio;

/// Picks the top-scoring sentences for a given ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceSelector {
    ratio: Ratio,
}

impl SentenceSelector {
    pub fn new(ratio: Ratio) -> Self {
        Self { ratio }
    }

    pub fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// Number of sentences to keep out of `n`: at least one, at most all.
    pub fn target_count(&self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let k = (n as f64 * self.ratio.get()).floor() as usize;
        k.max(1).min(n)
    }

    /// Indices of the chosen sentences, best first.
    ///
    /// Ranked by descending score; equal scores keep document order.
    pub fn select(&self, scores: &SentenceScores) -> Vec<usize> {
        let k = self.target_count(scores.len());
        let mut ranked: Vec<(usize, f64)> = scores.as_slice().iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(k);
        ranked.into_iter().map(|(i, _)| i).collect()
    }
}
