//! Canonical composition (NFC) of input text.

use unicode_normalization::{IsNormalized, UnicodeNormalization, is_nfc_quick};

use super::CharFilter;

/// Rewrites text into Unicode Normalization Form C.
///
/// Document text is stored composed so that `"e\u{301}"` and `"é"` count,
/// search and reverse as the same single character. Text that is already
/// NFC (the common case) is copied without running the composer.
///
/// # Examples
///
/// ```
/// use wordsmith::analysis::char_filter::CharFilter;
/// use wordsmith::analysis::char_filter::unicode_normalize::NfcCharFilter;
///
/// assert_eq!(NfcCharFilter::new().filter("Ame\u{301}lie"), "Am\u{e9}lie");
/// ```
#[derive(Clone, Debug, Default)]
pub struct NfcCharFilter;

impl NfcCharFilter {
    pub fn new() -> Self {
        NfcCharFilter
    }

    /// Whether `input` is already composed.
    pub fn is_normalized(&self, input: &str) -> bool {
        match is_nfc_quick(input.chars()) {
            IsNormalized::Yes => true,
            IsNormalized::No => false,
            IsNormalized::Maybe => input.chars().eq(input.nfc()),
        }
    }
}

impl CharFilter for NfcCharFilter {
    fn filter(&self, input: &str) -> String {
        if self.is_normalized(input) {
            input.to_string()
        } else {
            input.nfc().collect()
        }
    }

    fn name(&self) -> &'static str {
        "nfc"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composes_decomposed_text() {
        let filter = NfcCharFilter::new();
        assert_eq!(filter.filter("Am\u{0065}\u{0301}lie"), "Am\u{00e9}lie");
        assert_eq!(filter.filter("A\u{030a}sa"), "\u{00c5}sa");
    }

    #[test]
    fn test_composed_text_is_unchanged() {
        let filter = NfcCharFilter::new();
        assert!(filter.is_normalized("blåbär"));
        assert!(!filter.is_normalized("bla\u{030a}ba\u{0308}r"));
        assert_eq!(filter.filter("blåbär"), "blåbär");
    }

    #[test]
    fn test_compatibility_forms_are_kept() {
        // NFC is canonical only: fullwidth letters and ligatures survive.
        let filter = NfcCharFilter::new();
        assert_eq!(filter.filter("\u{ff21}\u{fb01}"), "\u{ff21}\u{fb01}");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(NfcCharFilter::new().name(), "nfc");
    }
}
