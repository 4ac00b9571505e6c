//! Stopword and punctuation filtering for frequency scoring.

/// English stopwords (spaCy's `STOP_WORDS`), sorted by byte order for
/// binary search. Includes contraction suffixes in straight and curly
/// apostrophe forms.
const STOP_WORDS: &[&str] = &[
    "'d", "'ll", "'m", "'re", "'s", "'ve", "a", "about", "above", "across", "after", "afterwards",
    "again", "against", "all", "almost", "alone", "along", "already", "also", "although", "always",
    "am", "among", "amongst", "amount", "an", "and", "another", "any", "anyhow", "anyone",
    "anything", "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became",
    "because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind", "being",
    "below", "beside", "besides", "between", "beyond", "both", "bottom", "but", "by", "ca", "call",
    "can", "cannot", "could", "did", "do", "does", "doing", "done", "down", "due", "during",
    "each", "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "even", "ever",
    "every", "everyone", "everything", "everywhere", "except", "few", "fifteen", "fifty", "first",
    "five", "for", "former", "formerly", "forty", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "have", "he", "hence", "her", "here", "hereafter", "hereby",
    "herein", "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "hundred",
    "i", "if", "in", "indeed", "into", "is", "it", "its", "itself", "just", "keep", "last",
    "latter", "latterly", "least", "less", "made", "make", "many", "may", "me", "meanwhile",
    "might", "mine", "more", "moreover", "most", "mostly", "move", "much", "must", "my", "myself",
    "n't", "name", "namely", "neither", "never", "nevertheless", "next", "nine", "no", "nobody",
    "none", "noone", "nor", "not", "nothing", "now", "nowhere", "n‘t", "n’t", "of", "off", "often",
    "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise", "our", "ours",
    "ourselves", "out", "over", "own", "part", "per", "perhaps", "please", "put", "quite",
    "rather", "re", "really", "regarding", "same", "say", "see", "seem", "seemed", "seeming",
    "seems", "serious", "several", "she", "should", "show", "side", "since", "six", "sixty", "so",
    "some", "somehow", "someone", "something", "sometime", "sometimes", "somewhere", "still",
    "such", "take", "ten", "than", "that", "the", "their", "them", "themselves", "then", "thence",
    "there", "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they",
    "third", "this", "those", "though", "three", "through", "throughout", "thru", "thus", "to",
    "together", "too", "top", "toward", "towards", "twelve", "twenty", "two", "under", "unless",
    "until", "up", "upon", "us", "used", "using", "various", "very", "via", "was", "we", "well",
    "were", "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who",
    "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without", "would",
    "yet", "you", "your", "yours", "yourself", "yourselves", "‘d", "‘ll", "‘m", "‘re", "‘s", "‘ve",
    "’d", "’ll", "’m", "’re", "’s", "’ve",
];

/// Decides which tokens are ignored when building a frequency table.
///
/// A token is excluded when its lower-cased form is a stopword, or when its
/// surface text is made only of punctuation (ASCII punctuation and `\n`).
/// Filters are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordFilter {
    builtin: bool,
    extra: Vec<String>,
}

impl StopwordFilter {
    /// The built-in English list.
    pub fn english() -> Self {
        Self {
            builtin: true,
            extra: Vec::new(),
        }
    }

    /// No stopwords at all. Punctuation is still excluded.
    pub fn none() -> Self {
        Self {
            builtin: false,
            extra: Vec::new(),
        }
    }

    /// A filter using only the given words (matched case-insensitively).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::none().with_extra(words)
    }

    /// Add words on top of the current set.
    pub fn with_extra<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        self.extra.sort();
        self.extra.dedup();
        self
    }

    /// Whether `word` (any case) is in the stopword set.
    pub fn is_stopword(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        (self.builtin && STOP_WORDS.binary_search(&lower.as_str()).is_ok())
            || self.extra.binary_search(&lower).is_ok()
    }

    /// Whether `text` consists solely of punctuation. The empty string does.
    pub fn is_punctuation(text: &str) -> bool {
        text.chars().all(|c| c.is_ascii_punctuation() || c == '\n')
    }

    pub fn is_excluded(&self, text: &str) -> bool {
        Self::is_punctuation(text) || self.is_stopword(text)
    }

    /// The effective stopword set, sorted and deduplicated.
    pub fn words(&self) -> Vec<&str> {
        let builtin: &[&str] = if self.builtin { STOP_WORDS } else { &[] };
        let mut words: Vec<&str> = builtin
            .iter()
            .copied()
            .chain(self.extra.iter().map(String::as_str))
            .collect();
        words.sort_unstable();
        words.dedup();
        words
    }

    pub fn len(&self) -> usize {
        self.words().len()
    }

    pub fn is_empty(&self) -> bool {
        !self.builtin && self.extra.is_empty()
    }
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}
