//! Word-level transformations.
//!
//! Operations that rebuild text from words join them with single spaces, so
//! punctuation and original spacing are dropped. `replace_word` and
//! `remove_words` instead edit the raw text in place.
//!
//! # Examples
//!
//! ```
//! use wordsmith::processor::TextTransformer;
//!
//! let transformer = TextTransformer::new("Anna och Otto paddlar kajak").unwrap();
//! assert_eq!(transformer.reverse_word_order(), "kajak paddlar Otto och Anna");
//! assert_eq!(
//!     transformer.replace_word("paddlar", "seglar", true).unwrap(),
//!     "Anna och Otto seglar kajak"
//! );
//! ```

use std::rc::Rc;
use std::sync::LazyLock;

use rand::Rng;
use rand::seq::SliceRandom;
use regex::{Regex, RegexBuilder};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::analysis::extract_tokens;
use crate::config::ProcessorConfig;
use crate::error::{Result, WordsmithError};
use crate::text::DocumentText;
use crate::validation::validate_non_empty_string;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Whitespace pattern should be valid"));

static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+([.,!?;:])").expect("Punctuation pattern should be valid")
});

/// Word-level transformations over a document.
#[derive(Debug, Clone)]
pub struct TextTransformer {
    text: Rc<DocumentText>,
}

impl TextTransformer {
    /// Create a transformer with the default limits.
    pub fn new(text: &str) -> Result<Self> {
        Self::with_config(text, &ProcessorConfig::default())
    }

    /// Create a transformer with the limits in `config`.
    pub fn with_config(text: &str, config: &ProcessorConfig) -> Result<Self> {
        Ok(Self::from_document(Rc::new(DocumentText::with_config(
            text, config,
        )?)))
    }

    /// Create a transformer over an already bound text.
    pub fn from_document(text: Rc<DocumentText>) -> Self {
        TextTransformer { text }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Words with their original casing.
    pub fn words(&self) -> Vec<String> {
        self.text.word_texts().map(str::to_string).collect()
    }

    /// Apply `transform` to every word.
    pub fn transform_words<F>(&self, transform: F) -> String
    where
        F: Fn(&str) -> String,
    {
        self.text
            .word_texts()
            .map(transform)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Apply `transform` to every word together with its index.
    pub fn transform_words_by_position<F>(&self, transform: F) -> String
    where
        F: Fn(&str, usize) -> String,
    {
        self.text
            .word_texts()
            .enumerate()
            .map(|(index, word)| transform(word, index))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Words for which `predicate` holds, in order.
    pub fn filter_words<F>(&self, predicate: F) -> Vec<String>
    where
        F: Fn(&str) -> bool,
    {
        self.text
            .word_texts()
            .filter(|word| predicate(word))
            .map(str::to_string)
            .collect()
    }

    pub fn reverse_word_order(&self) -> String {
        let mut words: Vec<&str> = self.text.word_texts().collect();
        words.reverse();
        words.join(" ")
    }

    /// Replace every whole-word occurrence of `old_word` with `new_word`.
    ///
    /// A match counts only when it does not cut through a word, where words
    /// are the ones [`extract_words`](crate::analysis::extract_words) finds.
    /// So `"är"` is never replaced inside `"bär"` and `"well"` is never
    /// replaced inside `"well-known"`. `new_word` may be empty.
    pub fn replace_word(&self, old_word: &str, new_word: &str, case_sensitive: bool) -> Result<String> {
        replace_whole_word(self.text.as_str(), old_word, new_word, case_sensitive)
    }

    /// Remove every whole-word occurrence of each of `words`.
    ///
    /// Whitespace runs left behind collapse to one space, the ends are
    /// trimmed and space before trailing punctuation is dropped.
    pub fn remove_words<S: AsRef<str>>(&self, words: &[S], case_sensitive: bool) -> Result<String> {
        let mut text = self.text.as_str().to_string();
        for word in words {
            text = replace_whole_word(&text, word.as_ref(), "", case_sensitive)?;
        }

        let collapsed = WHITESPACE_RUN.replace_all(&text, " ");
        let tidied = SPACE_BEFORE_PUNCTUATION.replace_all(collapsed.trim(), "$1");
        Ok(tidied.into_owned())
    }

    /// Words sorted alphabetically, ignoring case and accents.
    ///
    /// Accented letters sort with their base letter, so `"éclair"` comes
    /// before `"ost"`. Ties fall back to the lowercase form and then to the
    /// original text, which makes the order total and the sort idempotent.
    pub fn sort_words(&self, descending: bool) -> String {
        let mut words: Vec<&str> = self.text.word_texts().collect();
        words.sort_by_cached_key(|w| (collation_key(w), w.to_lowercase(), *w));
        if descending {
            words.reverse();
        }
        words.join(" ")
    }

    /// Words in a uniformly random order.
    pub fn shuffle_words(&self) -> String {
        self.shuffle_words_with(&mut rand::rng())
    }

    /// Words in a random order drawn from `rng`.
    pub fn shuffle_words_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut words: Vec<&str> = self.text.word_texts().collect();
        words.shuffle(rng);
        words.join(" ")
    }
}

/// Lowercase base letters: `"Éclair"` gives `"eclair"`.
fn collation_key(word: &str) -> String {
    word.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Replace whole-word matches of `old_word` in `text`.
///
/// A match is whole when no word token of `text` crosses its edges.
fn replace_whole_word(text: &str, old_word: &str, new_word: &str, case_sensitive: bool) -> Result<String> {
    validate_non_empty_string(old_word, "oldWord")?;

    let pattern = RegexBuilder::new(&regex::escape(old_word))
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|e| WordsmithError::invalid_pattern("oldWord", e.to_string()))?;
    let tokens = extract_tokens(text);

    let mut result = String::with_capacity(text.len());
    let mut copied = 0;
    let mut from = 0;

    while let Some(mat) = pattern.find_at(text, from) {
        let first = tokens.partition_point(|t| t.end_offset <= mat.start());
        let bounded = tokens[first..]
            .iter()
            .take_while(|t| t.start_offset < mat.end())
            .all(|t| t.start_offset >= mat.start() && t.end_offset <= mat.end());

        if bounded {
            result.push_str(&text[copied..mat.start()]);
            result.push_str(new_word);
            copied = mat.end();
            from = mat.end();
        } else {
            // Retry one character further on; a bounded match may overlap.
            from = mat.start()
                + text[mat.start()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
        }
    }
    result.push_str(&text[copied..]);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extract_words;
    use crate::error::ErrorKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SAMPLE: &str = "Anna och Otto paddlar kajak";

    fn transformer(text: &str) -> TextTransformer {
        TextTransformer::new(text).unwrap()
    }

    #[test]
    fn test_transform_words() {
        let reversed = transformer(SAMPLE).transform_words(|w| w.chars().rev().collect());
        assert_eq!(reversed, "annA hco ottO ralddap kajak");
    }

    #[test]
    fn test_transform_words_drops_punctuation() {
        let upper = transformer("hej, då!").transform_words(str::to_uppercase);
        assert_eq!(upper, "HEJ DÅ");
    }

    #[test]
    fn test_transform_words_by_position() {
        let numbered =
            transformer(SAMPLE).transform_words_by_position(|w, i| format!("{i}:{w}"));
        assert_eq!(numbered, "0:Anna 1:och 2:Otto 3:paddlar 4:kajak");
    }

    #[test]
    fn test_filter_words() {
        let long = transformer(SAMPLE).filter_words(|w| w.chars().count() > 4);
        assert_eq!(long, vec!["paddlar", "kajak"]);
    }

    #[test]
    fn test_reverse_word_order() {
        assert_eq!(
            transformer(SAMPLE).reverse_word_order(),
            "kajak paddlar Otto och Anna"
        );
    }

    #[test]
    fn test_replace_word() {
        let t = transformer(SAMPLE);
        assert_eq!(
            t.replace_word("paddlar", "seglar", true).unwrap(),
            "Anna och Otto seglar kajak"
        );
        assert_eq!(
            t.replace_word("Anna", "Eva", true).unwrap(),
            "Eva och Otto paddlar kajak"
        );
        assert_eq!(t.replace_word("anna", "Eva", true).unwrap(), SAMPLE);
        assert_eq!(
            t.replace_word("anna", "Eva", false).unwrap(),
            "Eva och Otto paddlar kajak"
        );
    }

    #[test]
    fn test_replace_word_unicode_boundaries() {
        let t = transformer("Det är en bär, är det inte?");
        assert_eq!(
            t.replace_word("är", "var", true).unwrap(),
            "Det var en bär, var det inte?"
        );
    }

    #[test]
    fn test_replace_word_keeps_hyphenated_words_whole() {
        let t = transformer("well-known well, known-well - well-");
        assert_eq!(
            t.replace_word("well", "X", true).unwrap(),
            "well-known X, known-well - X-"
        );
        assert_eq!(
            t.replace_word("well-known", "famous", true).unwrap(),
            "famous well, known-well - well-"
        );
        assert_eq!(extract_words("well-known"), vec!["well-known"]);

        let t = transformer("här-och-där");
        assert_eq!(t.replace_word("där", "hit", true).unwrap(), "här-och-hit");
        assert_eq!(t.replace_word("och", "X", true).unwrap(), "här-och-där");
    }

    #[test]
    fn test_replace_word_retries_after_rejected_match() {
        let t = transformer("anana ana");
        assert_eq!(t.replace_word("ana", "X", true).unwrap(), "anana X");
    }

    #[test]
    fn test_replace_word_validation() {
        let t = transformer(SAMPLE);
        assert_eq!(
            t.replace_word("", "nytt", true).unwrap_err().kind(),
            ErrorKind::EmptyValue
        );
        assert_eq!(t.replace_word("gammalt", "", true).unwrap(), SAMPLE);
        assert_eq!(
            t.replace_word("och", "", true).unwrap(),
            "Anna  Otto paddlar kajak"
        );
    }

    #[test]
    fn test_replace_word_escapes_metacharacters() {
        let t = transformer("a.b a+b");
        assert_eq!(t.replace_word("a+b", "sum", true).unwrap(), "a.b sum");
    }

    #[test]
    fn test_remove_words() {
        let t = transformer("Anna och Otto paddlar kajak.");
        assert_eq!(
            t.remove_words(&["och", "kajak"], true).unwrap(),
            "Anna Otto paddlar."
        );
        assert_eq!(
            t.remove_words(&["ANNA"], false).unwrap(),
            "och Otto paddlar kajak."
        );
    }

    #[test]
    fn test_remove_words_leaves_no_whole_token() {
        let t = transformer("Är det här? Här är det, här-och-där.");
        let removed = t.remove_words(&["här", "är"], false).unwrap();
        let remaining: Vec<String> = extract_words(&removed)
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        assert!(!remaining.contains(&"här".to_string()));
        assert!(!remaining.contains(&"är".to_string()));
    }

    #[test]
    fn test_remove_words_validation() {
        let t = transformer(SAMPLE);
        assert_eq!(
            t.remove_words(&["och", " "], true).unwrap_err().kind(),
            ErrorKind::EmptyValue
        );
        let none: [&str; 0] = [];
        assert_eq!(t.remove_words(&none, true).unwrap(), SAMPLE);
    }

    #[test]
    fn test_sort_words() {
        let t = transformer("pear Apple banana apple");
        assert_eq!(t.sort_words(false), "Apple apple banana pear");
        assert_eq!(t.sort_words(true), "pear banana apple Apple");
    }

    #[test]
    fn test_sort_words_files_accents_with_base_letter() {
        let t = transformer("zebra éclair apple Ödla ost");
        assert_eq!(t.sort_words(false), "apple éclair Ödla ost zebra");
        assert_eq!(t.sort_words(true), "zebra ost Ödla éclair apple");

        let t = transformer("ecl éclair Eclair eclair");
        assert_eq!(t.sort_words(false), "ecl Eclair eclair éclair");
    }

    #[test]
    fn test_sort_words_idempotent_permutation() {
        let t = transformer("Åsa älskar åska, och åskan älskar Åsa.");
        let sorted = t.sort_words(false);
        let mut original = t.words();
        let mut result = extract_words(&sorted);
        assert_eq!(transformer(&sorted).sort_words(false), sorted);
        original.sort();
        result.sort();
        assert_eq!(original, result);
    }

    #[test]
    fn test_shuffle_words_is_permutation() {
        let t = transformer("one two three four five six seven eight");
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = t.shuffle_words_with(&mut rng);

        let mut expected = t.words();
        let mut actual = extract_words(&shuffled);
        expected.sort();
        actual.sort();
        assert_eq!(expected, actual);

        let mut again = extract_words(&t.shuffle_words());
        again.sort();
        assert_eq!(again, expected);
    }

    #[test]
    fn test_shuffle_words_changes_order_eventually() {
        let t = transformer("one two three four five six seven eight");
        let original = t.words().join(" ");
        let mut rng = StdRng::seed_from_u64(42);
        assert!((0..20).any(|_| t.shuffle_words_with(&mut rng) != original));
    }
}
