//! Text processors bound to one [`DocumentText`](crate::text::DocumentText).
//!
//! - [`analyzer::TextAnalyzer`] - counts, letter frequency, palindromes
//! - [`formatter::TextFormatter`] - case and identifier-style conversions
//! - [`searcher::TextSearcher`] - substring and regex search
//! - [`transformer::TextTransformer`] - word-level transformations
//! - [`reverser::TextReverser`] - string, chunk, line and sentence reversal
//!
//! Every processor is created over one text and never mutated; binding new
//! text means building a new processor.

pub mod analyzer;
pub mod formatter;
pub mod reverser;
pub mod searcher;
pub mod transformer;

pub use analyzer::TextAnalyzer;
pub use formatter::TextFormatter;
pub use reverser::TextReverser;
pub use searcher::TextSearcher;
pub use transformer::TextTransformer;
