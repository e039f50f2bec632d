//! # Wordsmith
//!
//! A Unicode-aware text processing toolkit.
//!
//! ## Features
//!
//! - One shared definition of a word (letter runs, optionally hyphen-joined)
//! - Counting, letter frequency and palindrome detection
//! - Case and identifier-style conversions
//! - Substring and regex search with character offsets
//! - Word-level replacement, removal, sorting and shuffling
//! - Grapheme-correct reversal of text, words, lines and sentences
//!
//! ## Example
//!
//! ```
//! use wordsmith::prelude::*;
//!
//! let doc = TextDocument::new("Anna swims quickly, Otto laughs loudly.").unwrap();
//! assert_eq!(doc.count_words(), 6);
//! assert_eq!(doc.find_palindromes(), vec!["anna", "otto"]);
//! assert_eq!(doc.to_snake_case(), "anna_swims_quickly_otto_laughs_loudly");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod processor;
pub mod text;
pub mod validation;

pub mod prelude {
    pub use crate::config::ProcessorConfig;
    pub use crate::document::TextDocument;
    pub use crate::error::{ErrorKind, Result, WordsmithError};
    pub use crate::processor::{
        TextAnalyzer, TextFormatter, TextReverser, TextSearcher, TextTransformer,
    };
    pub use crate::text::DocumentText;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
