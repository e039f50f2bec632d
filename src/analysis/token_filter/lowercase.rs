//! Unicode lowercasing of token text.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercases each token with full Unicode case mapping.
///
/// Offsets still point into the cased source text. Lowercasing may change a
/// token's length ("İ" becomes two characters), so offsets must not be
/// derived from the lowered text.
///
/// # Examples
///
/// ```
/// use wordsmith::analysis::token::Token;
/// use wordsmith::analysis::token_filter::Filter;
/// use wordsmith::analysis::token_filter::lowercase::LowercaseFilter;
///
/// let tokens = vec![Token::with_offsets("ÅSA", 0, 0, 5)];
/// let lowered: Vec<_> = LowercaseFilter::new()
///     .filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
/// assert_eq!(lowered[0].text, "åsa");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            let lowered = token.text.to_lowercase();
            token.with_text(lowered)
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
