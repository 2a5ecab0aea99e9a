//! Lexical tokenizer for French and English knowledge-base text.
//!
//! Lowercases, replaces punctuation and symbols with spaces
//! (accented Latin letters are kept), splits hyphenated
//! compounds, then drops one-character tokens and stop words.
//! No stemming is performed.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::core::indexer::normalizer::normalize;

/// Minimum token length in characters
pub const MIN_TOKEN_LEN: usize = 2;

/// Accented Latin letters kept as part of words (lowercase)
pub const ACCENTED_LETTERS: &[char] = &[
    'à', 'â', 'ä', 'ç', 'é', 'è', 'ê', 'ë', 'î', 'ï', 'ô', 'ö', 'ù', 'û', 'ü', 'ÿ', 'œ', 'æ',
];

/// Built-in French + English stop words
pub const STOP_WORDS: &[&str] = &[
    // French: articles, determiners
    "le", "la", "les", "un", "une", "des", "de", "du", "au", "aux", "ce", "cet", "cette", "ces",
    "mon", "ma", "mes", "ton", "ta", "tes", "son", "sa", "ses", "notre", "nos", "votre", "vos",
    "leur", "leurs",
    // French: pronouns
    "je", "tu", "il", "elle", "on", "nous", "vous", "ils", "elles", "me", "te", "se", "lui",
    "qui", "que", "quoi", "dont", "où", "y", "en",
    // French: prepositions, conjunctions
    "et", "ou", "mais", "donc", "or", "ni", "car", "à", "dans", "par", "pour", "sur", "avec",
    "sans", "sous", "entre", "vers", "chez",
    // French: negations, adverbs, common verbs
    "ne", "pas", "plus", "très", "est", "sont", "été", "être", "avoir", "fait", "comme",
    "si", "aussi", "tout", "tous", "toute", "toutes",
    // English: articles, pronouns
    "the", "a", "an", "this", "that", "these", "those", "it", "its", "he", "she", "they",
    "we", "you", "i", "my", "your", "our", "their", "his", "her",
    // English: prepositions, conjunctions
    "and", "or", "but", "to", "of", "in", "on", "for", "with", "at", "by", "from", "as",
    "into", "about", "if", "then", "than", "so",
    // English: auxiliaries, negations, adverbs
    "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "has", "have",
    "had", "not", "no", "can", "will", "would", "should", "very", "also",
];

static DEFAULT_STOP_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Tokenizer with a configurable stop-word table.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    /// Stop words added on top of [`STOP_WORDS`] (lowercase)
    extra_stop_words: HashSet<String>,
}

impl Tokenizer {
    /// Create a tokenizer using only the built-in stop words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with additional stop words.
    ///
    /// Extras are lowercased so they match normalized tokens.
    pub fn with_extra_stop_words<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra_stop_words: extra
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Check a lowercase token against the stop-word tables.
    pub fn is_stop_word(&self, token: &str) -> bool {
        DEFAULT_STOP_WORDS.contains(token) || self.extra_stop_words.contains(token)
    }

    /// Tokenize text into an ordered list of index terms.
    ///
    /// Duplicates are kept so callers can count term frequency.
    ///
    /// # Example
    ///
    /// ```
    /// use chatbot_indexer::core::indexer::Tokenizer;
    ///
    /// let tokens = Tokenizer::new().tokenize("Le chat mange la souris");
    /// assert_eq!(tokens, vec!["chat", "mange", "souris"]);
    /// ```
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = normalize(text).to_lowercase();

        let cleaned: String = lowered
            .chars()
            .map(|c| if is_word_char(c) { c } else { ' ' })
            .collect();

        cleaned
            .split_whitespace()
            .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
            .filter(|token| !self.is_stop_word(token))
            .map(str::to_string)
            .collect()
    }
}

/// Characters that survive punctuation stripping.
///
/// Hyphens are dropped here too, so hyphenated compounds split
/// into separate tokens.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ACCENTED_LETTERS.contains(&c)
}
