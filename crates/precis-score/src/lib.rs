//! Frequency-weighted sentence scoring and selection.
//!
//! The pipeline is: filter tokens, count words into a [`FrequencyTable`],
//! score sentences by summed word weight, select the top `k` by ratio, and
//! reassemble them in document order.

mod assemble;
mod frequency;
mod selector;
mod sentence;
mod stopwords;
mod summarize;

pub use assemble::assemble;
pub use frequency::FrequencyTable;
pub use selector::SentenceSelector;
pub use sentence::SentenceScores;
pub use stopwords::StopwordFilter;
pub use summarize::{Analysis, Summarizer, summarize};
