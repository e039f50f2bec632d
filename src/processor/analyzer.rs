//! Counting and statistics over a document.
//!
//! # Examples
//!
//! ```
//! use wordsmith::processor::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new("Anna swims quickly, Otto laughs loudly.").unwrap();
//! assert_eq!(analyzer.count_words(), 6);
//! assert_eq!(analyzer.count_sentences(), 1);
//! assert_eq!(analyzer.find_palindromes(), vec!["anna", "otto"]);
//! ```

use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::LazyLock;

use ahash::AHashSet;
use regex::Regex;

use crate::config::ProcessorConfig;
use crate::error::Result;
use crate::text::DocumentText;

/// A run of non-terminators closed by one or more terminators.
static SENTENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("Sentence pattern should be valid"));

static LETTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}").expect("Letter pattern should be valid"));

/// Word, sentence and character statistics.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    text: Rc<DocumentText>,
}

impl TextAnalyzer {
    /// Create an analyzer with the default limits.
    pub fn new(text: &str) -> Result<Self> {
        Self::with_config(text, &ProcessorConfig::default())
    }

    /// Create an analyzer with the limits in `config`.
    pub fn with_config(text: &str, config: &ProcessorConfig) -> Result<Self> {
        Ok(Self::from_document(Rc::new(DocumentText::with_config(
            text, config,
        )?)))
    }

    /// Create an analyzer over an already bound text.
    pub fn from_document(text: Rc<DocumentText>) -> Self {
        TextAnalyzer { text }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Number of words.
    pub fn count_words(&self) -> usize {
        self.text.word_count()
    }

    /// Number of sentences.
    ///
    /// A sentence ends with one or more of `.`, `!`, `?` (so `...` is a single
    /// end) and must contain at least one letter or digit. Text after the last
    /// terminator is not counted.
    pub fn count_sentences(&self) -> usize {
        SENTENCE_PATTERN
            .find_iter(self.text.as_str())
            .filter(|mat| mat.as_str().chars().any(char::is_alphanumeric))
            .count()
    }

    /// Number of characters, optionally excluding all Unicode whitespace.
    pub fn count_characters(&self, include_spaces: bool) -> usize {
        let chars = self.text.as_str().chars();
        if include_spaces {
            chars.count()
        } else {
            chars.filter(|c| !c.is_whitespace()).count()
        }
    }

    /// Occurrences of each lowercased letter.
    ///
    /// Only Unicode letters are counted; digits, punctuation and combining
    /// marks are skipped.
    pub fn letter_frequency(&self) -> BTreeMap<char, usize> {
        let lowered = self.text.as_str().to_lowercase();
        let mut frequency = BTreeMap::new();

        for letter in LETTER_PATTERN
            .find_iter(&lowered)
            .filter_map(|mat| mat.as_str().chars().next())
        {
            *frequency.entry(letter).or_insert(0) += 1;
        }

        frequency
    }

    /// Unique lowercase palindromic words, in order of first appearance.
    ///
    /// Single-letter words never count, even though they read the same
    /// reversed.
    pub fn find_palindromes(&self) -> Vec<String> {
        let mut seen = AHashSet::new();
        let mut palindromes = Vec::new();

        for word in self.text.lowercase_words() {
            if word.chars().count() > 1
                && word.chars().eq(word.chars().rev())
                && seen.insert(word.as_str())
            {
                palindromes.push(word.clone());
            }
        }

        palindromes
    }

    /// Number of distinct words, ignoring case.
    pub fn unique_word_count(&self) -> usize {
        self.text
            .lowercase_words()
            .iter()
            .collect::<AHashSet<_>>()
            .len()
    }

    /// Mean word length in characters, 0.0 when there are no words.
    pub fn average_word_length(&self) -> f64 {
        let count = self.count_words();
        if count == 0 {
            return 0.0;
        }
        let total: usize = self.text.word_texts().map(|w| w.chars().count()).sum();
        total as f64 / count as f64
    }
}
