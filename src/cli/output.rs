//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{FormatStyle, OutputFormat, ReverseMode, TransformOperation, WordsmithArgs};
use crate::error::Result;

/// Result structure for text analysis.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub words: usize,
    pub unique_words: usize,
    pub sentences: usize,
    pub characters: usize,
    pub characters_without_spaces: usize,
    pub average_word_length: f64,
    pub palindromes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_frequency: Option<BTreeMap<char, usize>>,
}

/// Result structure for formatting.
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatResult {
    pub style: FormatStyle,
    pub output: String,
}

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchReport {
    pub query: String,
    pub regex: bool,
    pub first: Option<usize>,
    pub count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<String>,
}

/// Result structure for word transformations.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransformResult {
    pub operation: TransformOperation,
    pub output: String,
}

/// Result structure for reversal.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReverseResult {
    pub mode: ReverseMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palindrome: Option<bool>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &WordsmithArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &WordsmithArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    for line in render_human(&value) {
        println!("{line}");
    }
    Ok(())
}

/// One `key: value` line per field, in key order; a bare value prints as is.
fn render_human(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{key}: {}", format_value(val)))
            .collect(),
        _ => vec![format_value(value)],
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordsmithArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{key}={}", format_value(val)))
            .collect::<Vec<_>>()
            .join(" "),
        serde_json::Value::Null => "none".to_string(),
    }
}
