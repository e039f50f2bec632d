//! Word tokenizer: the single definition of a word.
//!
//! A word is a maximal run of Unicode letters (`\p{L}`), optionally followed
//! by one hyphen and a second letter run. Digits, punctuation, symbols,
//! underscores and whitespace all separate words.
//!
//! ```text
//! "well-known"   → ["well-known"]
//! "well--known"  → ["well", "known"]
//! "snake_case"   → ["snake", "case"]
//! "kajak."       → ["kajak"]
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{L}+(?:-\p{L}+)?").expect("Word pattern should be valid")
});

/// A tokenizer that extracts word tokens.
///
/// Case is preserved; lowercasing is a separate
/// [`LowercaseFilter`](crate::analysis::token_filter::lowercase::LowercaseFilter) step.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }

    /// The regex every word matches.
    pub fn pattern(&self) -> &str {
        WORD_PATTERN.as_str()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(extract_tokens(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

/// Extract word tokens, with byte offsets, in order of appearance.
pub fn extract_tokens(text: &str) -> Vec<Token> {
    WORD_PATTERN
        .find_iter(text)
        .enumerate()
        .map(|(position, mat)| Token::with_offsets(mat.as_str(), position, mat.start(), mat.end()))
        .collect()
}

/// Extract the words of `text`, case preserved, in order of appearance.
///
/// # Examples
///
/// ```
/// use wordsmith::analysis::extract_words;
///
/// assert_eq!(extract_words("Anna swims, Otto laughs."), vec!["Anna", "swims", "Otto", "laughs"]);
/// assert!(extract_words("123 ... !!!").is_empty());
/// ```
pub fn extract_words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|mat| mat.as_str().to_string())
        .collect()
}
