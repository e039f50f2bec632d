//! Reversal of strings, chunks, lines and sentences.
//!
//! Reversal works on grapheme clusters, so a character built from several
//! code points (an accented letter, a flag, a family emoji) is never split.
//! Chunk operations split on whitespace, keep punctuation attached to its
//! chunk and leave the whitespace between chunks exactly where it was.
//!
//! # Examples
//!
//! ```
//! use wordsmith::processor::TextReverser;
//!
//! let reverser = TextReverser::new("Eva och Bob paddlar kajak.").unwrap();
//! assert_eq!(reverser.reverse(), ".kajak ralddap boB hco avE");
//! assert_eq!(reverser.reverse_word_order(), "kajak. paddlar Bob och Eva");
//! ```

use std::rc::Rc;

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::whitespace::{rebuild_with_chunks, split_chunks};
use crate::config::ProcessorConfig;
use crate::error::Result;
use crate::text::DocumentText;
use crate::validation::validate_positive_integer;

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Reverse `value` grapheme by grapheme.
fn reverse_graphemes(value: &str) -> String {
    value.graphemes(true).rev().collect()
}

/// Uppercase the first character, leaving the rest as is.
fn upper_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// String, chunk, line and sentence reversal.
#[derive(Debug, Clone)]
pub struct TextReverser {
    text: Rc<DocumentText>,
}

impl TextReverser {
    /// Create a reverser with the default limits.
    pub fn new(text: &str) -> Result<Self> {
        Self::with_config(text, &ProcessorConfig::default())
    }

    /// Create a reverser with the limits in `config`.
    pub fn with_config(text: &str, config: &ProcessorConfig) -> Result<Self> {
        Ok(Self::from_document(Rc::new(DocumentText::with_config(
            text, config,
        )?)))
    }

    /// Create a reverser over an already bound text.
    pub fn from_document(text: Rc<DocumentText>) -> Self {
        TextReverser { text }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// The whole text reversed.
    pub fn reverse(&self) -> String {
        reverse_graphemes(self.text.as_str())
    }

    /// Each chunk reversed in place.
    pub fn reverse_words_individually(&self) -> String {
        self.map_chunks(|_, chunk| reverse_graphemes(chunk))
    }

    /// Chunk order reversed; each chunk stays intact.
    pub fn reverse_word_order(&self) -> String {
        let text = self.text.as_str();
        let chunks = split_chunks(text);
        let reversed: Vec<&str> = chunks.iter().rev().map(|c| c.text.as_str()).collect();
        rebuild_with_chunks(text, &chunks, &reversed)
    }

    /// Line order reversed.
    ///
    /// Lines break at `\n` and at `\r\n`. The line endings stay in their
    /// original slots, so `"a\r\nb\nc"` becomes `"c\r\nb\na"`.
    pub fn reverse_lines(&self) -> String {
        let text = self.text.as_str();
        let mut lines: Vec<&str> = text.split('\n').collect();
        let last = lines.len() - 1;
        let mut endings = Vec::with_capacity(last);

        // The last line has no ending of its own; a bare `\r` there is content.
        for line in &mut lines[..last] {
            let current: &str = *line;
            match current.strip_suffix('\r') {
                Some(stripped) => {
                    *line = stripped;
                    endings.push("\r\n");
                }
                None => endings.push("\n"),
            }
        }

        let mut result = String::with_capacity(text.len());
        for (i, line) in lines.iter().rev().enumerate() {
            result.push_str(line);
            if let Some(ending) = endings.get(i) {
                result.push_str(ending);
            }
        }
        result
    }

    /// Reverse only chunks with at least `min_length` characters.
    pub fn reverse_long_words(&self, min_length: i64) -> Result<String> {
        let min_length = validate_positive_integer(min_length, "minLength")?;
        Ok(self.map_chunks(|_, chunk| {
            if chunk.graphemes(true).count() >= min_length {
                reverse_graphemes(chunk)
            } else {
                chunk.to_string()
            }
        }))
    }

    /// Reverse the text between sentence terminators.
    ///
    /// Terminators stay where they are. Each span between them is trimmed
    /// before it is reversed, so the space after a terminator is lost:
    /// `"Hej då. Vi ses!"` becomes `"åd jeH.ses iV!"`.
    pub fn reverse_each_sentence(&self) -> String {
        let text = self.text.as_str();
        let mut result = String::with_capacity(text.len());
        let mut span_start = 0;

        for (i, c) in text.char_indices() {
            if SENTENCE_TERMINATORS.contains(&c) {
                result.push_str(&reverse_graphemes(text[span_start..i].trim()));
                result.push(c);
                span_start = i + c.len_utf8();
            }
        }
        result.push_str(&reverse_graphemes(text[span_start..].trim()));

        result
    }

    /// Whether the text reads the same reversed.
    ///
    /// With `ignore_spaces`, everything that is not a letter or digit
    /// (whitespace, punctuation) is dropped before comparing.
    pub fn is_palindrome(&self, ignore_case: bool, ignore_spaces: bool) -> bool {
        let text = self.text.as_str();
        let stripped: String = if ignore_spaces {
            text.chars().filter(|c| c.is_alphanumeric()).collect()
        } else {
            text.to_string()
        };
        let prepared = if ignore_case {
            stripped.to_lowercase()
        } else {
            stripped
        };

        if prepared.trim().is_empty() {
            return false;
        }
        let graphemes: Vec<&str> = prepared.graphemes(true).collect();
        graphemes.iter().eq(graphemes.iter().rev())
    }

    /// Each chunk reversed, with its new first character uppercased.
    pub fn reverse_and_capitalize_words(&self) -> String {
        self.map_chunks(|_, chunk| upper_first(&reverse_graphemes(chunk)))
    }

    /// Every second chunk (the 2nd, 4th, ...) reversed.
    pub fn reverse_alternating_words(&self) -> String {
        self.map_chunks(|index, chunk| {
            if index % 2 == 1 {
                reverse_graphemes(chunk)
            } else {
                chunk.to_string()
            }
        })
    }

    /// The text, `separator`, then the text reversed.
    pub fn mirror(&self, separator: &str) -> String {
        format!("{}{}{}", self.text.as_str(), separator, self.reverse())
    }

    fn map_chunks<F>(&self, transform: F) -> String
    where
        F: Fn(usize, &str) -> String,
    {
        let text = self.text.as_str();
        let chunks: Vec<Token> = split_chunks(text);
        let replaced: Vec<String> = chunks
            .iter()
            .map(|chunk| transform(chunk.position, &chunk.text))
            .collect();
        rebuild_with_chunks(text, &chunks, &replaced)
    }
}
