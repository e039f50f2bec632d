//! Token filter implementations.
//!
//! Filters transform a token stream produced by a tokenizer.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Unicode lowercasing of token text

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
