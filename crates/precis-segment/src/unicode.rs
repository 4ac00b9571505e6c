use crate::Segmenter;
use crate::model::SegmenterModel;
use precis_core::{Sentence, Token};
use unicode_segmentation::UnicodeSegmentation;

/// Segmenter built on UAX #29 sentence and word boundaries.
///
/// Candidate sentences come from `split_sentence_bound_indices`; candidates
/// that are whitespace only, or that continue after an abbreviation, are
/// folded into their neighbour so every byte of the body belongs to exactly
/// one sentence.
#[derive(Debug, Clone, Copy)]
pub struct UnicodeSegmenter<'m> {
    model: &'m SegmenterModel,
}

impl UnicodeSegmenter<'static> {
    /// Segmenter backed by the process-wide English model.
    pub fn new() -> Self {
        Self {
            model: SegmenterModel::shared(),
        }
    }
}

impl Default for UnicodeSegmenter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'m> UnicodeSegmenter<'m> {
    pub fn with_model(model: &'m SegmenterModel) -> Self {
        Self { model }
    }

    /// Byte spans of each sentence, in order, covering the whole body.
    ///
    /// A blank body has no spans.
    pub fn spans(&self, body: &str) -> Vec<(usize, usize)> {
        let mut spans: Vec<(usize, usize)> = Vec::new();
        let mut leading: Option<usize> = None;

        for (offset, piece) in body.split_sentence_bound_indices() {
            let end = offset + piece.len();

            if piece.trim().is_empty() {
                match spans.last_mut() {
                    Some(last) => last.1 = end,
                    None => {
                        leading.get_or_insert(offset);
                    }
                }
                continue;
            }

            if let Some(last) = spans.last_mut() {
                if self.model.continues(&body[last.0..last.1], piece) {
                    last.1 = end;
                    continue;
                }
            }

            let start = leading.take().unwrap_or(offset);
            spans.push((start, end));
        }

        spans
    }

    /// Word tokens of one sentence, with clitics split off ("It's" gives
    /// "It" and "'s").
    fn tokens(&self, span: &str, index: usize) -> Vec<Token> {
        let mut tokens = Vec::new();
        for word in span.split_word_bounds().filter(|w| !w.trim().is_empty()) {
            match self.model.split_clitic(word) {
                Some((stem, clitic)) => {
                    tokens.push(Token::new(stem, index));
                    tokens.push(Token::new(clitic, index));
                }
                None => tokens.push(Token::new(word, index)),
            }
        }
        tokens
    }
}

impl Segmenter for UnicodeSegmenter<'_> {
    fn segment(&self, body: &str) -> Vec<Sentence> {
        let sentences: Vec<Sentence> = self
            .spans(body)
            .into_iter()
            .enumerate()
            .map(|(index, (start, end))| {
                let span = &body[start..end];
                Sentence {
                    index,
                    text: span.trim().to_string(),
                    start,
                    end,
                    tokens: self.tokens(span, index),
                }
            })
            .collect();

        tracing::debug!(
            sentences = sentences.len(),
            tokens = sentences.iter().map(Sentence::token_count).sum::<usize>(),
            "segmented document"
        );
        sentences
    }
}
