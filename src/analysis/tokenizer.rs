//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split input text into [`Token`](crate::analysis::token::Token)s.
//!
//! # Available Tokenizers
//!
//! - [`word::WordTokenizer`] - Unicode letter runs, optionally hyphen-joined
//! - [`whitespace::WhitespaceTokenizer`] - Whitespace-delimited chunks
//!
//! # Examples
//!
//! ```
//! use wordsmith::analysis::tokenizer::Tokenizer;
//! use wordsmith::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, well-known world!").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[1].text, "well-known");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;
pub mod word;
