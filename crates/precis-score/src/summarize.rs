use crate::assemble::assemble;
use crate::frequency::FrequencyTable;
use crate::selector::SentenceSelector;
use crate::sentence::SentenceScores;
use crate::stopwords::StopwordFilter;
use precis_core::{KeyMode, PrecisError, Ratio, Sentence, Summary};

/// Summarize with the English stopword list and case-folded counting.
///
/// Fails with [`PrecisError::InvalidRatio`] when `ratio` is outside `[0, 1]`.
pub fn summarize(sentences: &[Sentence], ratio: f64) -> Result<Summary, PrecisError> {
    let ratio = Ratio::new(ratio)?;
    Ok(Summarizer::new().summarize(sentences, ratio))
}

/// Intermediate results of the scoring pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub table: FrequencyTable,
    pub scores: SentenceScores,
}

/// Configurable frequency-based summarizer.
///
/// ```
/// use precis_core::{KeyMode, Ratio, Sentence};
/// use precis_score::{StopwordFilter, Summarizer};
///
/// let sentences = vec![Sentence::from_words(0, "Cats purr.", &["Cats", "purr", "."])];
/// let summary = Summarizer::new()
///     .with_filter(StopwordFilter::english().with_extra(["purr"]))
///     .with_key_mode(KeyMode::Exact)
///     .summarize(&sentences, Ratio::DEFAULT);
/// assert_eq!(summary.text, "Cats purr.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    filter: StopwordFilter,
    mode: KeyMode,
}

impl Summarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: StopwordFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_key_mode(mut self, mode: KeyMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn filter(&self) -> &StopwordFilter {
        &self.filter
    }

    pub fn key_mode(&self) -> KeyMode {
        self.mode
    }

    /// Build the frequency table and score every sentence.
    pub fn analyze(&self, sentences: &[Sentence]) -> Analysis {
        let table = FrequencyTable::from_sentences(sentences, &self.filter, self.mode);
        let scores = SentenceScores::compute(sentences, &table, self.mode);
        Analysis { table, scores }
    }

    pub fn summarize(&self, sentences: &[Sentence], ratio: Ratio) -> Summary {
        if sentences.is_empty() {
            tracing::debug!("no sentences to summarize");
            return Summary::empty(ratio);
        }

        let analysis = self.analyze(sentences);
        let selected = SentenceSelector::new(ratio).select(&analysis.scores);
        tracing::debug!(
            selected = selected.len(),
            total = sentences.len(),
            words = analysis.table.len(),
            %ratio,
            "selected sentences"
        );
        assemble(sentences, &analysis.scores, &selected, ratio)
    }
}
