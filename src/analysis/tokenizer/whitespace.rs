//! Whitespace tokenizer implementation.
//!
//! Splits on Unicode whitespace and keeps punctuation attached to its chunk,
//! so `"kajak. Madam"` yields `"kajak."` and `"Madam"`.

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(split_chunks(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

/// Split `text` into whitespace-delimited chunks with byte offsets.
pub fn split_chunks(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push(Token::with_offsets(&text[s..i], tokens.len(), s, i));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(Token::with_offsets(&text[s..], tokens.len(), s, text.len()));
    }

    tokens
}

/// Rebuild `text` with each chunk replaced by the corresponding entry of
/// `replacements`, keeping every whitespace gap exactly as it was.
///
/// `chunks` must come from [`split_chunks`] over the same `text` and
/// `replacements` must have the same length.
pub fn rebuild_with_chunks<S: AsRef<str>>(text: &str, chunks: &[Token], replacements: &[S]) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;

    for (chunk, replacement) in chunks.iter().zip(replacements) {
        let span = chunk.byte_range();
        result.push_str(&text[last_end..span.start]);
        result.push_str(replacement.as_ref());
        last_end = span.end;
    }
    result.push_str(&text[last_end..]);

    result
}
