//! The token type shared by tokenizers and filters.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A slice of text cut out by a tokenizer.
///
/// Offsets are byte offsets into the text the token was cut from, so
/// `&text[token.byte_range()]` is the token as it appeared there. Filters may
/// rewrite `text` (lowercasing, say) but never the offsets.
///
/// # Examples
///
/// ```
/// use wordsmith::analysis::token::Token;
///
/// let source = "blå bär";
/// let token = Token::with_offsets("bär", 1, 5, 9);
/// assert_eq!(&source[token.byte_range()], "bär");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,

    /// Ordinal of the token in its stream (0-based)
    pub position: usize,

    pub start_offset: usize,
    pub end_offset: usize,
}

impl Token {
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// The token's span in the source text.
    pub fn byte_range(&self) -> Range<usize> {
        self.start_offset..self.end_offset
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The same token (position and offsets) carrying different text.
    pub fn with_text<S: Into<String>>(self, text: S) -> Self {
        Token {
            text: text.into(),
            ..self
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Tokens flowing from a tokenizer through filters.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
