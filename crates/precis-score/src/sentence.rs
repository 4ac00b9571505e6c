use crate::frequency::FrequencyTable;
use precis_core::{KeyMode, Sentence};

/// Per-sentence scores, indexed by sentence position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentenceScores {
    scores: Vec<f64>,
}

impl SentenceScores {
    /// Sum each sentence's word weights. Tokens absent from the table add 0.
    pub fn compute(sentences: &[Sentence], table: &FrequencyTable, mode: KeyMode) -> Self {
        let scores = sentences
            .iter()
            .map(|s| s.tokens.iter().map(|t| table.weight(mode.key(t))).sum())
            .collect();
        Self { scores }
    }

    pub fn from_vec(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.scores.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }
}
