//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the text string before it is tokenized.
//!
//! # Available Filters
//!
//! - [`unicode_normalize::NfcCharFilter`] - canonical composition (NFC)

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod unicode_normalize;
