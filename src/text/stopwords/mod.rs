
use std::collections::HashSet;

/// English function words excluded from term counting.
///
/// The list follows the common NLTK/scikit-learn intersection: articles,
/// pronouns, prepositions, conjunctions, auxiliary verbs, and a handful of
/// near-content-free fillers.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    // articles and determiners
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
    "both", "all", "any", "some", "such", "no", "none", "own", "other", "another", "same",
    // pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    // interrogatives and relatives
    "what", "which", "who", "whom", "whose", "when", "where", "why", "how",
    // prepositions
    "about", "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beneath", "beside", "between", "beyond", "by", "down", "during", "for",
    "from", "in", "inside", "into", "near", "of", "off", "on", "onto", "out", "outside", "over",
    "through", "to", "toward", "under", "until", "up", "upon", "with", "within", "without",
    // conjunctions
    "and", "as", "because", "but", "if", "or", "nor", "since", "so", "than", "though", "unless",
    "while", "whether",
    // auxiliary and copular verbs
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "can", "could", "may", "might", "must", "shall", "should",
    "will", "would",
    // fillers
    "again", "also", "further", "here", "there", "then", "once", "only", "just", "too", "very",
    "more", "most", "much", "few", "not", "now", "ever", "even",
];

/// Stop-word membership test with case-insensitive matching.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build a filter from a custom word list.
    #[inline]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().to_lowercase())
            .collect();
        Self { words }
    }

    /// Build the default English filter.
    #[inline]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// An empty filter that excludes nothing.
    #[inline]
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
