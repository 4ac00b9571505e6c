use once_cell::sync::Lazy;

/// Lower-cased abbreviations after which a sentence boundary is suppressed.
const ABBREVIATIONS: &[&str] = &[
    "approx.", "apr.", "aug.", "capt.", "cf.", "co.", "col.", "corp.", "dec.", "dept.", "dr.",
    "e.g.", "feb.", "fig.", "gen.", "gov.", "i.e.", "jan.", "jr.", "jul.", "jun.", "lt.", "mar.",
    "mr.", "mrs.", "ms.", "mt.", "nov.", "oct.", "prof.", "rep.", "rev.", "sen.", "sep.", "sept.",
    "sgt.", "sr.", "st.", "vol.", "vs.",
];

/// Lower-cased words that commonly open a sentence. A capital initial
/// followed by one of these ends its sentence ("Vitamin C. It helps.").
const OPENERS: &[&str] = &[
    "a", "an", "he", "her", "his", "i", "it", "its", "my", "our", "she", "that", "the", "their",
    "there", "these", "they", "this", "those", "we", "you",
];

/// English clitic suffixes split off a word as their own token, in match
/// order (`n't` before the single-quote forms).
const CLITICS: &[&str] = &[
    "n't", "n’t", "n‘t", "'s", "'m", "'re", "'ve", "'d", "'ll", "’s", "’m", "’re", "’ve", "’d",
    "’ll", "‘s", "‘m", "‘re", "‘ve", "‘d", "‘ll",
];

static SHARED: Lazy<SegmenterModel> = Lazy::new(SegmenterModel::english);

/// Immutable linguistic resources used by the segmenter.
///
/// Built once per process via [`SegmenterModel::shared`] and handed to
/// segmenters explicitly.
#[derive(Debug, Clone)]
pub struct SegmenterModel {
    abbreviations: Vec<String>,
    clitics: &'static [&'static str],
}

impl SegmenterModel {
    /// The process-wide English model.
    pub fn shared() -> &'static SegmenterModel {
        &SHARED
    }

    /// English model with the built-in abbreviation list.
    pub fn english() -> Self {
        Self::with_abbreviations(ABBREVIATIONS.iter().copied())
    }

    /// A model with no abbreviation or contraction handling: every UAX #29
    /// boundary is kept and words are never split.
    pub fn plain() -> Self {
        Self {
            abbreviations: Vec::new(),
            clitics: &[],
        }
    }

    /// English clitic handling with a custom abbreviation list.
    pub fn with_abbreviations<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut abbreviations: Vec<String> = words.into_iter().map(str::to_lowercase).collect();
        abbreviations.sort();
        abbreviations.dedup();
        Self {
            abbreviations,
            clitics: CLITICS,
        }
    }

    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations
            .binary_search_by(|a| a.as_str().cmp(word))
            .is_ok()
    }

    /// Whether the sentence candidate `next` continues `prev` instead of
    /// starting a new sentence.
    ///
    /// True after a listed abbreviation ("Dr."), and after a capital initial
    /// that follows a capitalised word ("John F.") unless `next` opens with
    /// a common sentence starter.
    pub fn continues(&self, prev: &str, next: &str) -> bool {
        if self.abbreviations.is_empty() {
            return false;
        }
        let mut words = prev.split_whitespace().rev();
        let Some(last) = words.next() else {
            return false;
        };
        if self.is_abbreviation(&last.to_lowercase()) {
            return true;
        }
        if !is_initial(last) {
            return false;
        }
        let after_name = words
            .next()
            .and_then(|w| w.chars().next())
            .is_some_and(char::is_uppercase);
        after_name && !opens_sentence(next)
    }

    /// Split a trailing clitic off `word`: "Don't" gives ("Do", "n't").
    pub fn split_clitic<'w>(&self, word: &'w str) -> Option<(&'w str, &'w str)> {
        self.clitics.iter().find_map(|suffix| {
            let at = word.len().checked_sub(suffix.len()).filter(|&at| at > 0)?;
            if !word.is_char_boundary(at) {
                return None;
            }
            let (stem, tail) = word.split_at(at);
            (tail.to_lowercase() == *suffix).then_some((stem, tail))
        })
    }
}

/// A single capital letter and a period, excluding the pronoun "I".
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), Some('.'), None) if c.is_uppercase() && c != 'I'
    )
}

fn opens_sentence(text: &str) -> bool {
    let Some(first) = text.split_whitespace().next() else {
        return false;
    };
    let word: String = first
        .trim_start_matches(|c: char| !c.is_alphabetic())
        .chars()
        .take_while(|c| c.is_alphabetic())
        .collect::<String>()
        .to_lowercase();
    OPENERS.binary_search(&word.as_str()).is_ok()
}

impl Default for SegmenterModel {
    fn default() -> Self {
        Self::english()
    }
}
