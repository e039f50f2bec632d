//! The validated, normalized text every processor is bound to.

use std::fmt;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::unicode_normalize::NfcCharFilter;
use crate::analysis::token::Token;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::config::ProcessorConfig;
use crate::error::Result;
use crate::validation::{validate_max_length, validate_non_empty_string};

/// Immutable document text.
///
/// Construction checks that the text is non-blank and within the configured
/// length, then stores it in NFC so that offsets and reversals are stable.
/// The word sequence (cased and lowercased) is computed once here; a new text
/// means a new `DocumentText`.
///
/// # Examples
///
/// ```
/// use wordsmith::text::DocumentText;
///
/// let text = DocumentText::new("Anna swims, Otto laughs.").unwrap();
/// assert_eq!(text.word_count(), 4);
/// assert_eq!(text.lowercase_words()[0], "anna");
/// ```
#[derive(Debug, Clone)]
pub struct DocumentText {
    text: String,
    words: Vec<Token>,
    lowercase_words: Vec<String>,
}

impl DocumentText {
    /// Bind `text` with the default limits.
    pub fn new(text: &str) -> Result<Self> {
        Self::with_config(text, &ProcessorConfig::default())
    }

    /// Bind `text` with the limits in `config`.
    pub fn with_config(text: &str, config: &ProcessorConfig) -> Result<Self> {
        validate_non_empty_string(text, "Text")?;
        validate_max_length(text, config.max_text_length, "Text")?;

        let text = NfcCharFilter::new().filter(text);
        let words: Vec<Token> = WordTokenizer::new().tokenize(&text)?.collect();
        let lowercase_words = LowercaseFilter::new()
            .filter(Box::new(words.clone().into_iter()))?
            .map(|token| token.text)
            .collect();

        log::trace!(
            "bound document text: {} bytes, {} words",
            text.len(),
            words.len()
        );

        Ok(DocumentText {
            text,
            words,
            lowercase_words,
        })
    }

    /// The NFC-normalized text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Word tokens with their original casing and byte offsets.
    pub fn words(&self) -> &[Token] {
        &self.words
    }

    /// Word texts with their original casing.
    pub fn word_texts(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|token| token.text.as_str())
    }

    /// Lowercased words, in order.
    pub fn lowercase_words(&self) -> &[String] {
        &self.lowercase_words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl AsRef<str> for DocumentText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for DocumentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
