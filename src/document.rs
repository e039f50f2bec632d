//! A single entry point that owns one text and every processor over it.
//!
//! [`TextDocument`] binds a text once, shares it between the five
//! processors and forwards their operations. Unlike the processors it
//! accepts blank text: a document without content is valid but inert, and
//! its read operations return empty results.
//!
//! # Examples
//!
//! ```
//! use wordsmith::document::TextDocument;
//!
//! let mut doc = TextDocument::new("Anna swims quickly, Otto laughs loudly.").unwrap();
//! assert_eq!(doc.count_words(), 6);
//! assert_eq!(doc.to_kebab_case(), "anna-swims-quickly-otto-laughs-loudly");
//!
//! doc.set_text("   ").unwrap();
//! assert!(doc.is_empty());
//! assert_eq!(doc.count_words(), 0);
//! ```

use std::collections::BTreeMap;
use std::rc::Rc;

use rand::Rng;

use crate::config::ProcessorConfig;
use crate::error::Result;
use crate::processor::searcher::{validate_search_arguments, validate_search_pattern};
use crate::processor::{TextAnalyzer, TextFormatter, TextReverser, TextSearcher, TextTransformer};
use crate::text::DocumentText;
use crate::validation::{
    is_empty_or_whitespace, validate_max_length, validate_non_empty_string,
    validate_positive_integer,
};

/// The processors built over one bound text.
#[derive(Debug)]
struct Processors {
    text: Rc<DocumentText>,
    analyzer: TextAnalyzer,
    formatter: TextFormatter,
    searcher: TextSearcher,
    transformer: TextTransformer,
    reverser: TextReverser,
}

impl Processors {
    fn build(text: DocumentText, config: &ProcessorConfig) -> Self {
        let text = Rc::new(text);
        Processors {
            analyzer: TextAnalyzer::from_document(Rc::clone(&text)),
            formatter: TextFormatter::from_document(Rc::clone(&text)),
            searcher: TextSearcher::from_document(Rc::clone(&text), config),
            transformer: TextTransformer::from_document(Rc::clone(&text)),
            reverser: TextReverser::from_document(Rc::clone(&text)),
            text,
        }
    }
}

#[derive(Debug)]
enum DocumentState {
    /// Blank text; kept as given.
    Empty(String),
    Loaded(Processors),
}

/// One text and all operations over it.
#[derive(Debug)]
pub struct TextDocument {
    config: ProcessorConfig,
    state: DocumentState,
}

impl Default for TextDocument {
    fn default() -> Self {
        TextDocument {
            config: ProcessorConfig::default(),
            state: DocumentState::Empty(String::new()),
        }
    }
}

impl TextDocument {
    /// Bind `text` with the default limits.
    ///
    /// Blank text gives an empty document; text over the length limit is
    /// rejected with `TooLong`.
    pub fn new(text: &str) -> Result<Self> {
        Self::with_config(text, ProcessorConfig::default())
    }

    /// Bind `text` with the limits in `config`.
    pub fn with_config(text: &str, config: ProcessorConfig) -> Result<Self> {
        config.validate()?;
        let state = Self::bind(text, &config)?;
        Ok(TextDocument { config, state })
    }

    /// Replace the bound text, rebuilding every processor.
    ///
    /// On error the previous text stays bound.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        self.state = Self::bind(text, &self.config)?;
        log::debug!(
            "document text replaced: {} characters, empty = {}",
            text.chars().count(),
            self.is_empty()
        );
        Ok(())
    }

    fn bind(text: &str, config: &ProcessorConfig) -> Result<DocumentState> {
        validate_max_length(text, config.max_text_length, "Text")?;
        if is_empty_or_whitespace(text) {
            return Ok(DocumentState::Empty(text.to_string()));
        }
        let text = DocumentText::with_config(text, config)?;
        Ok(DocumentState::Loaded(Processors::build(text, config)))
    }

    /// The bound text (NFC-normalized unless the document is empty).
    pub fn text(&self) -> &str {
        match &self.state {
            DocumentState::Empty(raw) => raw,
            DocumentState::Loaded(processors) => processors.text.as_str(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, DocumentState::Empty(_))
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    fn loaded(&self) -> Option<&Processors> {
        match &self.state {
            DocumentState::Empty(_) => None,
            DocumentState::Loaded(processors) => Some(processors),
        }
    }

    // Analysis

    pub fn count_words(&self) -> usize {
        self.loaded().map_or(0, |p| p.analyzer.count_words())
    }

    pub fn count_sentences(&self) -> usize {
        self.loaded().map_or(0, |p| p.analyzer.count_sentences())
    }

    pub fn count_characters(&self, include_spaces: bool) -> usize {
        self.loaded()
            .map_or(0, |p| p.analyzer.count_characters(include_spaces))
    }

    pub fn letter_frequency(&self) -> BTreeMap<char, usize> {
        self.loaded()
            .map(|p| p.analyzer.letter_frequency())
            .unwrap_or_default()
    }

    pub fn find_palindromes(&self) -> Vec<String> {
        self.loaded()
            .map(|p| p.analyzer.find_palindromes())
            .unwrap_or_default()
    }

    pub fn unique_word_count(&self) -> usize {
        self.loaded().map_or(0, |p| p.analyzer.unique_word_count())
    }

    pub fn average_word_length(&self) -> f64 {
        self.loaded().map_or(0.0, |p| p.analyzer.average_word_length())
    }

    // Formatting

    /// Lowercase words, as used by the identifier conversions.
    pub fn words(&self) -> Vec<String> {
        self.loaded()
            .map(|p| p.formatter.words())
            .unwrap_or_default()
    }

    pub fn to_upper_case(&self) -> String {
        self.format_with(TextFormatter::to_upper_case)
    }

    pub fn to_lower_case(&self) -> String {
        self.format_with(TextFormatter::to_lower_case)
    }

    pub fn capitalize_words(&self) -> String {
        self.format_with(TextFormatter::capitalize_words)
    }

    pub fn to_camel_case(&self) -> String {
        self.format_with(TextFormatter::to_camel_case)
    }

    pub fn to_snake_case(&self) -> String {
        self.format_with(TextFormatter::to_snake_case)
    }

    pub fn to_pascal_case(&self) -> String {
        self.format_with(TextFormatter::to_pascal_case)
    }

    pub fn to_kebab_case(&self) -> String {
        self.format_with(TextFormatter::to_kebab_case)
    }

    pub fn trim_whitespace(&self) -> String {
        self.format_with(TextFormatter::trim_whitespace)
    }

    fn format_with(&self, op: fn(&TextFormatter) -> String) -> String {
        self.loaded()
            .map(|p| op(&p.formatter))
            .unwrap_or_default()
    }

    // Search

    pub fn find_first(&self, substring: &str, case_sensitive: bool) -> Result<Option<usize>> {
        match self.loaded() {
            Some(p) => p.searcher.find_first(substring, case_sensitive),
            None => validate_search_arguments(substring, &self.config).map(|_| None),
        }
    }

    pub fn find_all(&self, substring: &str, case_sensitive: bool) -> Result<Vec<usize>> {
        match self.loaded() {
            Some(p) => p.searcher.find_all(substring, case_sensitive),
            None => validate_search_arguments(substring, &self.config).map(|_| Vec::new()),
        }
    }

    pub fn exists(&self, substring: &str, case_sensitive: bool) -> Result<bool> {
        Ok(self.find_first(substring, case_sensitive)?.is_some())
    }

    pub fn count(&self, substring: &str, case_sensitive: bool) -> Result<usize> {
        Ok(self.find_all(substring, case_sensitive)?.len())
    }

    pub fn match_pattern(&self, pattern: &str) -> Result<Vec<String>> {
        match self.loaded() {
            Some(p) => p.searcher.match_pattern(pattern),
            None => validate_search_pattern(pattern, "pattern", &self.config).map(|_| Vec::new()),
        }
    }

    pub fn search_regexp(&self, pattern: &str) -> Result<Option<usize>> {
        match self.loaded() {
            Some(p) => p.searcher.search_regexp(pattern),
            None => validate_search_pattern(pattern, "regexp", &self.config).map(|_| None),
        }
    }

    pub fn test_pattern(&self, pattern: &str) -> Result<bool> {
        match self.loaded() {
            Some(p) => p.searcher.test_pattern(pattern),
            None => validate_search_pattern(pattern, "pattern", &self.config).map(|_| false),
        }
    }

    // Transformation

    /// Words with their original casing.
    pub fn original_words(&self) -> Vec<String> {
        self.loaded()
            .map(|p| p.transformer.words())
            .unwrap_or_default()
    }

    pub fn transform_words<F>(&self, transform: F) -> String
    where
        F: Fn(&str) -> String,
    {
        self.loaded()
            .map(|p| p.transformer.transform_words(transform))
            .unwrap_or_default()
    }

    pub fn transform_words_by_position<F>(&self, transform: F) -> String
    where
        F: Fn(&str, usize) -> String,
    {
        self.loaded()
            .map(|p| p.transformer.transform_words_by_position(transform))
            .unwrap_or_default()
    }

    pub fn filter_words<F>(&self, predicate: F) -> Vec<String>
    where
        F: Fn(&str) -> bool,
    {
        self.loaded()
            .map(|p| p.transformer.filter_words(predicate))
            .unwrap_or_default()
    }

    /// Words in reverse order, joined with single spaces.
    pub fn reverse_word_order(&self) -> String {
        self.loaded()
            .map(|p| p.transformer.reverse_word_order())
            .unwrap_or_default()
    }

    pub fn replace_word(&self, old_word: &str, new_word: &str, case_sensitive: bool) -> Result<String> {
        match self.loaded() {
            Some(p) => p.transformer.replace_word(old_word, new_word, case_sensitive),
            None => validate_non_empty_string(old_word, "oldWord").map(|_| String::new()),
        }
    }

    pub fn remove_words<S: AsRef<str>>(&self, words: &[S], case_sensitive: bool) -> Result<String> {
        match self.loaded() {
            Some(p) => p.transformer.remove_words(words, case_sensitive),
            None => {
                for word in words {
                    validate_non_empty_string(word.as_ref(), "oldWord")?;
                }
                Ok(String::new())
            }
        }
    }

    pub fn sort_words(&self, descending: bool) -> String {
        self.loaded()
            .map(|p| p.transformer.sort_words(descending))
            .unwrap_or_default()
    }

    pub fn shuffle_words(&self) -> String {
        self.loaded()
            .map(|p| p.transformer.shuffle_words())
            .unwrap_or_default()
    }

    pub fn shuffle_words_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.loaded()
            .map(|p| p.transformer.shuffle_words_with(rng))
            .unwrap_or_default()
    }

    // Reversal

    pub fn reverse(&self) -> String {
        self.reverse_with(TextReverser::reverse)
    }

    pub fn reverse_words_individually(&self) -> String {
        self.reverse_with(TextReverser::reverse_words_individually)
    }

    /// Whitespace chunks in reverse order, spacing kept.
    pub fn reverse_chunk_order(&self) -> String {
        self.reverse_with(TextReverser::reverse_word_order)
    }

    pub fn reverse_lines(&self) -> String {
        self.reverse_with(TextReverser::reverse_lines)
    }

    pub fn reverse_long_words(&self, min_length: i64) -> Result<String> {
        match self.loaded() {
            Some(p) => p.reverser.reverse_long_words(min_length),
            None => validate_positive_integer(min_length, "minLength").map(|_| String::new()),
        }
    }

    pub fn reverse_each_sentence(&self) -> String {
        self.reverse_with(TextReverser::reverse_each_sentence)
    }

    pub fn is_palindrome(&self, ignore_case: bool, ignore_spaces: bool) -> bool {
        self.loaded()
            .is_some_and(|p| p.reverser.is_palindrome(ignore_case, ignore_spaces))
    }

    pub fn reverse_and_capitalize_words(&self) -> String {
        self.reverse_with(TextReverser::reverse_and_capitalize_words)
    }

    pub fn reverse_alternating_words(&self) -> String {
        self.reverse_with(TextReverser::reverse_alternating_words)
    }

    pub fn mirror(&self, separator: &str) -> String {
        self.loaded()
            .map(|p| p.reverser.mirror(separator))
            .unwrap_or_default()
    }

    fn reverse_with(&self, op: fn(&TextReverser) -> String) -> String {
        self.loaded()
            .map(|p| op(&p.reverser))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const SAMPLE: &str = "Anna swims quickly, Otto laughs loudly.";

    #[test]
    fn test_loaded_document_forwards() {
        let doc = TextDocument::new(SAMPLE).unwrap();
        assert!(!doc.is_empty());
        assert_eq!(doc.text(), SAMPLE);
        assert_eq!(doc.count_words(), 6);
        assert_eq!(doc.count_sentences(), 1);
        assert_eq!(doc.find_palindromes(), vec!["anna", "otto"]);
        assert_eq!(doc.to_kebab_case(), "anna-swims-quickly-otto-laughs-loudly");
        assert_eq!(doc.find_first("Otto", true).unwrap(), Some(20));
        assert_eq!(
            doc.reverse_word_order(),
            "loudly laughs Otto quickly swims Anna"
        );
        assert_eq!(
            doc.reverse_chunk_order(),
            "loudly. laughs Otto quickly, swims Anna"
        );
    }

    #[test]
    fn test_empty_document_returns_zero_values() {
        let doc = TextDocument::new("  \n\t ").unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.text(), "  \n\t ");
        assert_eq!(doc.count_words(), 0);
        assert_eq!(doc.count_sentences(), 0);
        assert_eq!(doc.count_characters(true), 0);
        assert!(doc.letter_frequency().is_empty());
        assert!(doc.find_palindromes().is_empty());
        assert_eq!(doc.average_word_length(), 0.0);
        assert_eq!(doc.to_camel_case(), "");
        assert_eq!(doc.trim_whitespace(), "");
        assert_eq!(doc.reverse(), "");
        assert_eq!(doc.sort_words(false), "");
        assert_eq!(doc.mirror("|"), "");
        assert!(!doc.is_palindrome(true, true));
        assert!(doc.filter_words(|_| true).is_empty());
    }

    #[test]
    fn test_empty_document_still_validates_arguments() {
        let doc = TextDocument::default();
        assert!(doc.is_empty());
        assert_eq!(doc.find_first("ros", true).unwrap(), None);
        assert!(!doc.exists("ros", false).unwrap());
        assert_eq!(doc.count("ros", true).unwrap(), 0);
        assert_eq!(
            doc.find_first("", true).unwrap_err().kind(),
            ErrorKind::EmptyValue
        );
        assert_eq!(
            doc.find_all(&"x".repeat(1001), true).unwrap_err().kind(),
            ErrorKind::TooLong
        );
        assert!(doc.match_pattern(r"\w+").unwrap().is_empty());
        assert_eq!(
            doc.search_regexp("(").unwrap_err().kind(),
            ErrorKind::InvalidPattern
        );
        assert!(!doc.test_pattern("a").unwrap());
        assert_eq!(
            doc.replace_word("", "x", true).unwrap_err().kind(),
            ErrorKind::EmptyValue
        );
        assert_eq!(
            doc.remove_words(&[""], true).unwrap_err().kind(),
            ErrorKind::EmptyValue
        );
        assert_eq!(
            doc.reverse_long_words(0).unwrap_err().kind(),
            ErrorKind::InvalidType
        );
    }

    #[test]
    fn test_too_long_text_is_rejected() {
        let config = ProcessorConfig::new().with_max_text_length(5);
        let err = TextDocument::with_config("abcdef", config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooLong);

        let config = ProcessorConfig::new().with_max_text_length(5);
        let err = TextDocument::with_config("       ", config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooLong);
    }

    #[test]
    fn test_set_text() {
        let mut doc = TextDocument::default();
        doc.set_text("Madam Otto").unwrap();
        assert_eq!(doc.count_words(), 2);
        assert_eq!(doc.find_palindromes(), vec!["madam", "otto"]);

        doc.set_text("").unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.count_words(), 0);
    }

    #[test]
    fn test_set_text_failure_keeps_previous_text() {
        let config = ProcessorConfig::new().with_max_text_length(10);
        let mut doc = TextDocument::with_config("kort", config).unwrap();
        assert!(doc.set_text("alldeles för lång").is_err());
        assert_eq!(doc.text(), "kort");
    }

    #[test]
    fn test_custom_limits_reach_searcher() {
        let config = ProcessorConfig::new().with_max_substring_length(3);
        let doc = TextDocument::with_config("abcdef", config).unwrap();
        assert_eq!(doc.find_first("abc", true).unwrap(), Some(0));
        assert_eq!(
            doc.find_first("abcd", true).unwrap_err().kind(),
            ErrorKind::TooLong
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ProcessorConfig::new().with_max_pattern_length(0);
        let err = TextDocument::with_config("text", config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
    }
}
