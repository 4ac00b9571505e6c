//! Precis core domain types and errors.

mod error;
mod types;

pub use error::PrecisError;
pub use types::{Document, KeyMode, Ratio, SelectedSentence, Sentence, Summary, Token};
