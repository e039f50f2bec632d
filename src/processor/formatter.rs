//! Case and identifier-style conversions.
//!
//! Two families of operations live here. Case mapping, capitalization and
//! trimming work on the raw string and keep its layout. Identifier
//! conversions (camel, snake, pascal, kebab) are built from the lowercase word
//! sequence and drop every separator.
//!
//! # Examples
//!
//! ```
//! use wordsmith::processor::TextFormatter;
//!
//! let formatter = TextFormatter::new("  HeLlo World-Example_text  ").unwrap();
//! assert_eq!(formatter.capitalize_words(), "  Hello World-Example_Text  ");
//! assert_eq!(formatter.to_camel_case(), "helloWorldExampleText");
//! assert_eq!(formatter.to_kebab_case(), "hello-world-example-text");
//! ```

use std::rc::Rc;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::ProcessorConfig;
use crate::error::Result;
use crate::text::DocumentText;

static LETTER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+").expect("Letter run pattern should be valid"));

/// Case conversions over a document.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    text: Rc<DocumentText>,
}

impl TextFormatter {
    /// Create a formatter with the default limits.
    pub fn new(text: &str) -> Result<Self> {
        Self::with_config(text, &ProcessorConfig::default())
    }

    /// Create a formatter with the limits in `config`.
    pub fn with_config(text: &str, config: &ProcessorConfig) -> Result<Self> {
        Ok(Self::from_document(Rc::new(DocumentText::with_config(
            text, config,
        )?)))
    }

    /// Create a formatter over an already bound text.
    pub fn from_document(text: Rc<DocumentText>) -> Self {
        TextFormatter { text }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// The lowercase word sequence identifier conversions are built from.
    pub fn words(&self) -> Vec<String> {
        self.text.lowercase_words().to_vec()
    }

    pub fn to_upper_case(&self) -> String {
        self.text.as_str().to_uppercase()
    }

    pub fn to_lower_case(&self) -> String {
        self.text.as_str().to_lowercase()
    }

    /// Uppercase the first letter of every letter run and lowercase the rest
    /// of the run. Everything that is not a letter is left as is.
    pub fn capitalize_words(&self) -> String {
        LETTER_RUN
            .replace_all(self.text.as_str(), |caps: &Captures| capitalize(&caps[0]))
            .into_owned()
    }

    /// `firstWordLowerRestCapitalized`
    pub fn to_camel_case(&self) -> String {
        self.identifier_parts()
            .enumerate()
            .map(|(i, part)| if i == 0 { part.to_string() } else { capitalize(part) })
            .collect()
    }

    /// `all_lowercase_with_underscores`
    pub fn to_snake_case(&self) -> String {
        self.identifier_parts().collect::<Vec<_>>().join("_")
    }

    /// `EveryWordCapitalized`
    pub fn to_pascal_case(&self) -> String {
        self.identifier_parts().map(capitalize).collect()
    }

    /// `all-lowercase-with-hyphens`
    pub fn to_kebab_case(&self) -> String {
        self.identifier_parts().collect::<Vec<_>>().join("-")
    }

    /// Remove leading and trailing whitespace; interior spacing is kept.
    pub fn trim_whitespace(&self) -> String {
        self.text.as_str().trim().to_string()
    }

    /// Lowercase letter runs; hyphen-joined words contribute each half.
    fn identifier_parts(&self) -> impl Iterator<Item = &str> {
        self.text
            .lowercase_words()
            .iter()
            .flat_map(|word| word.split('-'))
            .filter(|part| !part.is_empty())
    }
}

/// Uppercase the first character and lowercase the remainder.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}
