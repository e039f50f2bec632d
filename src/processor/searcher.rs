//! Substring and regex search over the raw (NFC) text.
//!
//! Search ignores word boundaries entirely: a needle may span several words.
//! All offsets are zero-based character offsets into the normalized text.
//!
//! Unlike the other processors, every call validates its arguments strictly:
//! an empty needle or a malformed pattern is a caller bug and is reported as
//! an error instead of "not found".
//!
//! # Examples
//!
//! ```
//! use wordsmith::processor::TextSearcher;
//!
//! let searcher = TextSearcher::new("En röd ros. En blå ros. En ROS.").unwrap();
//! assert_eq!(searcher.find_first("ros", true).unwrap(), Some(7));
//! assert_eq!(searcher.find_all("ros", false).unwrap(), vec![7, 19, 27]);
//! assert_eq!(searcher.match_pattern(r"(?i)ros").unwrap().len(), 3);
//! ```

use std::cell::OnceCell;
use std::rc::Rc;

use regex::Regex;

use crate::config::ProcessorConfig;
use crate::error::Result;
use crate::text::DocumentText;
use crate::validation::{validate_max_length, validate_non_empty_string, validate_pattern};

/// A haystack plus the byte offset at which each original character starts.
///
/// For case-insensitive search the haystack is the per-character lowercase
/// fold of the text, which may be longer than the text itself; `char_starts`
/// maps positions in the fold back to original characters.
#[derive(Debug)]
struct SearchSpace {
    haystack: String,
    char_starts: Vec<usize>,
}

impl SearchSpace {
    fn exact(text: &str) -> Self {
        SearchSpace {
            haystack: text.to_string(),
            char_starts: text.char_indices().map(|(i, _)| i).collect(),
        }
    }

    fn folded(text: &str) -> Self {
        let mut haystack = String::with_capacity(text.len());
        let mut char_starts = Vec::with_capacity(text.len());
        for c in text.chars() {
            char_starts.push(haystack.len());
            haystack.extend(c.to_lowercase());
        }
        SearchSpace {
            haystack,
            char_starts,
        }
    }

    /// The original character whose (folded) bytes contain `byte`.
    fn char_index(&self, byte: usize) -> usize {
        self.char_starts
            .partition_point(|&start| start <= byte)
            .saturating_sub(1)
    }

    /// Non-overlapping matches of `needle`, scanning forward.
    fn find_all(&self, needle: &str) -> Vec<usize> {
        let mut positions = Vec::new();
        let mut from = 0;
        while let Some(found) = self.haystack[from..].find(needle) {
            let start = from + found;
            positions.push(self.char_index(start));
            from = start + needle.len();
        }
        positions
    }
}

/// Fold a needle the same way the folded haystack is built.
fn fold(value: &str) -> String {
    value.chars().flat_map(char::to_lowercase).collect()
}

/// Substring and regex search.
#[derive(Debug)]
pub struct TextSearcher {
    text: Rc<DocumentText>,
    max_substring_length: usize,
    max_pattern_length: usize,
    exact: OnceCell<SearchSpace>,
    folded: OnceCell<SearchSpace>,
}

impl TextSearcher {
    /// Create a searcher with the default limits.
    pub fn new(text: &str) -> Result<Self> {
        Self::with_config(text, &ProcessorConfig::default())
    }

    /// Create a searcher with the limits in `config`.
    pub fn with_config(text: &str, config: &ProcessorConfig) -> Result<Self> {
        let document = Rc::new(DocumentText::with_config(text, config)?);
        Ok(Self::from_document(document, config))
    }

    /// Create a searcher over an already bound text.
    pub fn from_document(text: Rc<DocumentText>, config: &ProcessorConfig) -> Self {
        TextSearcher {
            text,
            max_substring_length: config.max_substring_length,
            max_pattern_length: config.max_pattern_length,
            exact: OnceCell::new(),
            folded: OnceCell::new(),
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Offset of the first occurrence of `substring`, if any.
    pub fn find_first(&self, substring: &str, case_sensitive: bool) -> Result<Option<usize>> {
        self.validate_substring(substring)?;
        let (space, needle) = self.prepare(substring, case_sensitive);
        Ok(space
            .haystack
            .find(needle.as_str())
            .map(|byte| space.char_index(byte)))
    }

    /// Offsets of all non-overlapping occurrences of `substring`.
    ///
    /// After a match the scan resumes at the end of that match, so `"aa"` in
    /// `"aaaa"` is found at 0 and 2 only.
    pub fn find_all(&self, substring: &str, case_sensitive: bool) -> Result<Vec<usize>> {
        self.validate_substring(substring)?;
        let (space, needle) = self.prepare(substring, case_sensitive);
        Ok(space.find_all(&needle))
    }

    pub fn exists(&self, substring: &str, case_sensitive: bool) -> Result<bool> {
        Ok(self.find_first(substring, case_sensitive)?.is_some())
    }

    pub fn count(&self, substring: &str, case_sensitive: bool) -> Result<usize> {
        Ok(self.find_all(substring, case_sensitive)?.len())
    }

    /// Every match of `pattern`, in order.
    ///
    /// Case-insensitive matching is requested with the inline `(?i)` flag.
    pub fn match_pattern(&self, pattern: &str) -> Result<Vec<String>> {
        let regex = self.compile(pattern, "pattern")?;
        Ok(regex
            .find_iter(self.text.as_str())
            .map(|mat| mat.as_str().to_string())
            .collect())
    }

    /// Offset of the first match of `pattern`, if any.
    pub fn search_regexp(&self, pattern: &str) -> Result<Option<usize>> {
        let regex = self.compile(pattern, "regexp")?;
        Ok(regex
            .find(self.text.as_str())
            .map(|mat| self.exact_space().char_index(mat.start())))
    }

    /// Whether `pattern` matches anywhere in the text.
    pub fn test_pattern(&self, pattern: &str) -> Result<bool> {
        let regex = self.compile(pattern, "pattern")?;
        Ok(regex.is_match(self.text.as_str()))
    }

    fn validate_substring(&self, substring: &str) -> Result<()> {
        validate_non_empty_string(substring, "Substring")?;
        validate_max_length(substring, self.max_substring_length, "Substring")
    }

    fn compile(&self, pattern: &str, param: &str) -> Result<Regex> {
        validate_pattern(pattern, self.max_pattern_length, param)
    }

    fn prepare(&self, substring: &str, case_sensitive: bool) -> (&SearchSpace, String) {
        if case_sensitive {
            (self.exact_space(), substring.to_string())
        } else {
            (self.folded_space(), fold(substring))
        }
    }

    fn exact_space(&self) -> &SearchSpace {
        self.exact
            .get_or_init(|| SearchSpace::exact(self.text.as_str()))
    }

    fn folded_space(&self) -> &SearchSpace {
        self.folded
            .get_or_init(|| SearchSpace::folded(self.text.as_str()))
    }
}

/// Validate search arguments without a bound text.
///
/// Used where no text is bound but arguments must still be rejected the same
/// way a [`TextSearcher`] would.
pub(crate) fn validate_search_arguments(substring: &str, config: &ProcessorConfig) -> Result<()> {
    validate_non_empty_string(substring, "Substring")?;
    validate_max_length(substring, config.max_substring_length, "Substring")
}

/// Validate a regex argument without a bound text.
pub(crate) fn validate_search_pattern(
    pattern: &str,
    param: &str,
    config: &ProcessorConfig,
) -> Result<()> {
    validate_pattern(pattern, config.max_pattern_length, param).map(|_| ())
}
