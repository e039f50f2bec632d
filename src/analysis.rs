//! Text analysis module for Wordsmith.
//!
//! This module defines what a "word" is. Raw text flows through a small
//! pipeline inspired by Lucene-style analyzers:
//!
//! ```text
//! Raw Text → CharFilter (NFC) → Tokenizer → Filter (lowercase) → Tokens
//! ```
//!
//! Every processor that needs words goes through [`tokenizer::word::extract_words`]
//! so that counting, formatting and transforming never disagree on word
//! boundaries.

pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use token::{Token, TokenStream};
pub use tokenizer::word::{extract_tokens, extract_words};
