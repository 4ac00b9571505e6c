use crate::sentence::SentenceScores;
use precis_core::{Ratio, SelectedSentence, Sentence, Summary};

/// Build the summary from selected sentence positions, ordering them by
/// [`Sentence::index`] and joining texts with single spaces.
pub fn assemble(
    sentences: &[Sentence],
    scores: &SentenceScores,
    selected: &[usize],
    ratio: Ratio,
) -> Summary {
    let mut order: Vec<usize> = selected
        .iter()
        .copied()
        .filter(|&i| i < sentences.len())
        .collect();
    order.sort_unstable_by_key(|&i| (sentences[i].index, i));
    order.dedup();

    let chosen: Vec<SelectedSentence> = order
        .into_iter()
        .map(|i| SelectedSentence {
            index: sentences[i].index,
            text: sentences[i].text.clone(),
            score: scores.get(i).unwrap_or(0.0),
        })
        .collect();

    let text = chosen
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    Summary {
        selected: chosen.len(),
        total: sentences.len(),
        ratio: ratio.get(),
        sentences: chosen,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences() -> Vec<Sentence> {
        ["One.", "Two.", "Three.", "Four."]
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::from_words(i, *t, &[]))
            .collect()
    }

    #[test]
    fn restores_document_order() {
        let scores = SentenceScores::from_vec(vec![0.1, 0.4, 0.2, 0.9]);
        let summary = assemble(&sentences(), &scores, &[3, 1], Ratio::new(0.5).unwrap());
        assert_eq!(summary.text, "Two. Four.");
        assert_eq!(summary.indices(), vec![1, 3]);
        assert_eq!(summary.sentences[1].score, 0.9);
        assert_eq!(summary.selected, 2);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.ratio, 0.5);
    }

    #[test]
    fn nothing_selected_is_empty_text() {
        let summary = assemble(&[], &SentenceScores::default(), &[], Ratio::DEFAULT);
        assert!(summary.is_empty());
        assert_eq!(summary.text, "");
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn orders_by_sentence_index_not_slice_position() {
        let mut shuffled = sentences();
        shuffled.reverse();
        let scores = SentenceScores::from_vec(vec![0.9, 0.1, 0.4, 0.2]);
        let summary = assemble(&shuffled, &scores, &[0, 2], Ratio::new(0.5).unwrap());
        assert_eq!(summary.text, "Two. Four.");
        assert_eq!(summary.indices(), vec![1, 3]);
        assert_eq!(summary.sentences[1].score, 0.9);
    }

    #[test]
    fn duplicate_texts_are_kept_by_position() {
        let sentences = vec![
            Sentence::from_words(0, "Yes.", &[]),
            Sentence::from_words(1, "Yes.", &[]),
        ];
        let scores = SentenceScores::from_vec(vec![1.0, 1.0]);
        let summary = assemble(&sentences, &scores, &[1, 0], Ratio::new(1.0).unwrap());
        assert_eq!(summary.text, "Yes. Yes.");
    }
}
