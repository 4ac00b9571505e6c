use crate::PrecisError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single word occurrence produced by segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Surface text exactly as it appears in the source.
    pub text: String,
    /// Lower-cased form used for stopword matching.
    pub normalized: String,
    /// Position of the containing sentence.
    pub sentence: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, sentence: usize) -> Self {
        let text = text.into();
        let normalized = text.to_lowercase();
        Self {
            text,
            normalized,
            sentence,
        }
    }
}

/// A sentence of the source document with its tokens.
///
/// Identity is the `index`: two sentences with identical text at different
/// positions are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Original position in the document (0-based).
    pub index: usize,
    /// Surface text of the sentence span, trimmed of surrounding whitespace.
    pub text: String,
    /// Byte offset where the span starts in the source body.
    pub start: usize,
    /// Byte offset where the span ends (exclusive).
    pub end: usize,
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Build a sentence whose tokens are the given words, in order.
    ///
    /// Span offsets are left at zero; this is meant for callers that
    /// segment text themselves.
    pub fn from_words(index: usize, text: impl Into<String>, words: &[&str]) -> Self {
        Self {
            index,
            text: text.into(),
            start: 0,
            end: 0,
            tokens: words.iter().map(|w| Token::new(*w, index)).collect(),
        }
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

/// A loaded document: what a document source hands to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: Option<String>,
    pub body: String,
    /// Where the document came from (URL, path, or `-` for stdin).
    pub source: String,
}

impl Document {
    pub fn new(source: impl Into<String>, title: Option<String>, body: impl Into<String>) -> Self {
        Self {
            title,
            body: body.into(),
            source: source.into(),
        }
    }

    /// True when the body has no visible text.
    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// Fraction of sentences to keep, guaranteed to lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Ratio(f64);

impl Ratio {
    /// Default summary ratio.
    pub const DEFAULT: Ratio = Ratio(0.3);

    /// Validate a caller-supplied ratio. Values outside `[0, 1]` (and NaN)
    /// are rejected, never clamped.
    pub fn new(value: f64) -> Result<Self, PrecisError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PrecisError::InvalidRatio(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Ratio {
    type Error = PrecisError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Ratio> for f64 {
    fn from(ratio: Ratio) -> Self {
        ratio.0
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a token maps to its frequency-table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyMode {
    /// Count lower-cased forms, so "The" and "the" are one word.
    #[default]
    Folded,
    /// Count exact surface text, so "The" and "the" are distinct words.
    Exact,
}

impl KeyMode {
    /// The frequency-table key for a token under this mode.
    pub fn key(self, token: &Token) -> &str {
        match self {
            KeyMode::Folded => &token.normalized,
            KeyMode::Exact => &token.text,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KeyMode::Folded => "folded",
            KeyMode::Exact => "exact",
        }
    }
}

impl fmt::Display for KeyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentence chosen for the summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedSentence {
    pub index: usize,
    pub text: String,
    pub score: f64,
}

/// The assembled extractive summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Selected sentences in original document order.
    pub sentences: Vec<SelectedSentence>,
    /// Sentence texts joined by single spaces.
    pub text: String,
    /// Number of sentences selected (k).
    pub selected: usize,
    /// Number of sentences in the document (N).
    pub total: usize,
    /// Ratio the selection was made with.
    pub ratio: f64,
}

impl Summary {
    /// Summary of a document with no sentences.
    pub fn empty(ratio: Ratio) -> Self {
        Self {
            sentences: Vec::new(),
            text: String::new(),
            selected: 0,
            total: 0,
            ratio: ratio.get(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Indices of the selected sentences, in document order.
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index).collect()
    }
}
