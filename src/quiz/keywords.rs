//! Keyword extraction: the distinct non-stopword alphanumeric words of the
//! notes, used both as answer candidates and as the distractor pool.

use std::collections::HashSet;

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::quiz::tokenize;

/// Words too common to be worth asking about.
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "her", "hers", "herself", "it", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing",
    "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between",
    "into", "through", "during", "before", "after", "above", "below", "to",
    "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "should", "now",
];

/// An immutable stopword list, passed in wherever keywords are extracted.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// The default English list.
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOPWORDS.iter().copied())
    }

    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            words: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Expects an already-lowercased word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// The distinct lowercase non-stopword alphanumeric words of a text,
/// in first-seen order so that seeded sampling stays reproducible.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    words: Vec<String>,
}

impl KeywordSet {
    /// A text made of nothing but stopwords and punctuation yields an empty
    /// set; callers degrade to an empty quiz rather than failing.
    pub fn extract(text: &str, stopwords: &Stopwords) -> Self {
        let mut seen = HashSet::new();
        let mut words = Vec::new();

        for token in tokenize::words(text) {
            if !token.chars().all(char::is_alphanumeric) {
                continue;
            }
            let lower = token.to_lowercase();
            if stopwords.contains(&lower) {
                continue;
            }
            if seen.insert(lower.clone()) {
                words.push(lower);
            }
        }

        Self { words }
    }

    /// Expects an already-lowercased word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sample up to `count` distinct keywords, excluding the answer, without
    /// replacement. Returns fewer than `count` when the pool is too small.
    pub fn sample_distractors<R: Rng>(
        &self,
        answer_lowercase: &str,
        count: usize,
        rng: &mut R,
    ) -> Vec<String> {
        self.words
            .iter()
            .filter(|w| w.as_str() != answer_lowercase)
            .cloned()
            .choose_multiple(rng, count)
    }
}
