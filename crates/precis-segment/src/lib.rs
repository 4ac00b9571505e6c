//! Sentence and word segmentation.
//!
//! Turns a document body into ordered [`Sentence`]s, each carrying its
//! [`Token`](precis_core::Token)s. The default [`UnicodeSegmenter`] follows
//! UAX #29 boundaries and is steered by an immutable [`SegmenterModel`].

mod model;
mod unicode;

pub use model::SegmenterModel;
pub use unicode::UnicodeSegmenter;

use precis_core::Sentence;

/// Trait for splitting a document body into sentences.
///
/// Implementations must cover every byte of a non-blank body with exactly one
/// sentence span and return sentences in source order.
pub trait Segmenter {
    fn segment(&self, body: &str) -> Vec<Sentence>;
}

/// Segment a body with the default segmenter and shared model.
pub fn segment(body: &str) -> Vec<Sentence> {
    UnicodeSegmenter::new().segment(body)
}
