use crate::stopwords::StopwordFilter;
use precis_core::{KeyMode, Sentence, Token};
use std::collections::HashMap;

/// Word counts over the non-excluded tokens of a document, normalized
/// against the most frequent word.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    max_count: usize,
}

impl FrequencyTable {
    pub fn build<'a>(
        tokens: impl IntoIterator<Item = &'a Token>,
        filter: &StopwordFilter,
        mode: KeyMode,
    ) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in tokens {
            if filter.is_excluded(&token.text) {
                continue;
            }
            *counts.entry(mode.key(token).to_string()).or_insert(0) += 1;
        }
        let max_count = counts.values().copied().max().unwrap_or(1);

        tracing::trace!(words = counts.len(), max_count, %mode, "built frequency table");
        Self { counts, max_count }
    }

    /// Table over every token of every sentence.
    pub fn from_sentences(sentences: &[Sentence], filter: &StopwordFilter, mode: KeyMode) -> Self {
        Self::build(sentences.iter().flat_map(|s| &s.tokens), filter, mode)
    }

    /// Normalized weight in `(0, 1]`, or 0.0 for a key not in the table.
    pub fn weight(&self, key: &str) -> f64 {
        self.counts
            .get(key)
            .map_or(0.0, |&c| c as f64 / self.max_count as f64)
    }

    pub fn count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Highest count in the table; 1 when empty.
    pub fn max_count(&self) -> usize {
        self.max_count.max(1)
    }

    /// Entries as `(key, count, weight)`, heaviest first, ties by key.
    pub fn iter_ranked(&self) -> Vec<(&str, usize, f64)> {
        let mut entries: Vec<(&str, usize, f64)> = self
            .counts
            .iter()
            .map(|(k, &c)| (k.as_str(), c, self.weight(k)))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| Token::new(*w, 0)).collect()
    }

    // --- Counting ---

    #[test]
    fn counts_skip_stopwords_and_punctuation() {
        let toks = tokens(&["Cats", "are", "great", ".", "Dogs", "are", "great", "too", "."]);
        let table = FrequencyTable::build(&toks, &StopwordFilter::english(), KeyMode::Folded);
        assert_eq!(table.count("great"), 2);
        assert_eq!(table.count("cats"), 1);
        assert_eq!(table.count("are"), 0);
        assert_eq!(table.count("."), 0);
        assert_eq!(table.len(), 3);
        assert_eq!(table.max_count(), 2);
    }

    #[test]
    fn folded_merges_case_variants() {
        let toks = tokens(&["Cats", "cats"]);
        let table = FrequencyTable::build(&toks, &StopwordFilter::english(), KeyMode::Folded);
        assert_eq!(table.count("cats"), 2);
        assert_eq!(table.weight("cats"), 1.0);
    }

    #[test]
    fn exact_keeps_case_variants_apart() {
        let toks = tokens(&["Cats", "cats", "cats"]);
        let table = FrequencyTable::build(&toks, &StopwordFilter::english(), KeyMode::Exact);
        assert_eq!(table.count("Cats"), 1);
        assert_eq!(table.count("cats"), 2);
        assert_eq!(table.weight("Cats"), 0.5);
    }

    #[test]
    fn exact_mode_still_filters_capitalized_stopwords() {
        let toks = tokens(&["The", "cat"]);
        let table = FrequencyTable::build(&toks, &StopwordFilter::english(), KeyMode::Exact);
        assert_eq!(table.count("The"), 0);
        assert_eq!(table.len(), 1);
    }

    // --- Empty ---

    #[test]
    fn empty_when_everything_is_filtered() {
        let toks = tokens(&["the", "and", "."]);
        let table = FrequencyTable::build(&toks, &StopwordFilter::english(), KeyMode::Folded);
        assert!(table.is_empty());
        assert_eq!(table.max_count(), 1);
        assert_eq!(table.weight("the"), 0.0);
    }

    // --- Ranking ---

    #[test]
    fn ranked_by_count_then_key() {
        let toks = tokens(&["pear", "apple", "fig", "pear"]);
        let table = FrequencyTable::build(&toks, &StopwordFilter::english(), KeyMode::Folded);
        let keys: Vec<&str> = table.iter_ranked().iter().map(|e| e.0).collect();
        assert_eq!(keys, vec!["pear", "apple", "fig"]);
        assert_eq!(table.iter_ranked()[0].2, 1.0);
    }

    proptest! {
        #[test]
        fn weights_bounded_with_a_maximum(words in prop::collection::vec("[a-z]{3,6}", 1..60)) {
            let toks: Vec<Token> = words.iter().map(|w| Token::new(w.as_str(), 0)).collect();
            let table = FrequencyTable::build(&toks, &StopwordFilter::none(), KeyMode::Folded);
            prop_assert!(!table.is_empty());
            let mut max = 0.0_f64;
            for (key, _, weight) in table.iter_ranked() {
                prop_assert!(weight > 0.0 && weight <= 1.0, "{key} -> {weight}");
                max = max.max(weight);
            }
            prop_assert_eq!(max, 1.0);
        }
    }
}
