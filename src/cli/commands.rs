//! Command implementations for the wordsmith CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::anyhow;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ProcessorConfig;
use crate::document::TextDocument;
use crate::error::Result;
use crate::validation::validate_bool;

/// Execute a CLI command.
pub fn execute_command(args: WordsmithArgs) -> Result<()> {
    let config = load_config(&args)?;
    let text = read_input(args.command.input())?;
    let document = TextDocument::with_config(&text, config)?;

    match &args.command {
        Command::Analyze(analyze_args) => {
            let report = analyze(&document, analyze_args);
            output_result("Text analysis", &report, &args)
        }
        Command::Format(format_args) => {
            let result = format(&document, format_args);
            output_result("Formatted text", &result, &args)
        }
        Command::Search(search_args) => {
            let report = search(&document, search_args)?;
            output_result("Search results", &report, &args)
        }
        Command::Transform(transform_args) => {
            let result = transform(&document, transform_args)?;
            output_result("Transformed text", &result, &args)
        }
        Command::Reverse(reverse_args) => {
            let result = reverse(&document, reverse_args)?;
            output_result("Reversed text", &result, &args)
        }
    }
}

/// Limits from `--config`, or the defaults.
fn load_config(args: &WordsmithArgs) -> Result<ProcessorConfig> {
    match &args.config {
        Some(path) => {
            log::info!("loading configuration from {}", path.display());
            ProcessorConfig::load(path)
        }
        None => Ok(ProcessorConfig::default()),
    }
}

/// Read the whole input; `-` reads stdin.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        log::debug!("reading input from stdin");
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        log::debug!("reading input from {}", path.display());
        Ok(fs::read_to_string(path)?)
    }
}

fn analyze(document: &TextDocument, args: &AnalyzeArgs) -> AnalysisReport {
    AnalysisReport {
        words: document.count_words(),
        unique_words: document.unique_word_count(),
        sentences: document.count_sentences(),
        characters: document.count_characters(true),
        characters_without_spaces: document.count_characters(false),
        average_word_length: document.average_word_length(),
        palindromes: document.find_palindromes(),
        letter_frequency: args.letters.then(|| document.letter_frequency()),
    }
}

fn format(document: &TextDocument, args: &FormatArgs) -> FormatResult {
    let output = match args.style {
        FormatStyle::Upper => document.to_upper_case(),
        FormatStyle::Lower => document.to_lower_case(),
        FormatStyle::Capitalize => document.capitalize_words(),
        FormatStyle::Camel => document.to_camel_case(),
        FormatStyle::Snake => document.to_snake_case(),
        FormatStyle::Pascal => document.to_pascal_case(),
        FormatStyle::Kebab => document.to_kebab_case(),
        FormatStyle::Trim => document.trim_whitespace(),
    };
    FormatResult {
        style: args.style,
        output,
    }
}

fn search(document: &TextDocument, args: &SearchArgs) -> Result<SearchReport> {
    if args.regex {
        let matches = document.match_pattern(&args.query)?;
        Ok(SearchReport {
            query: args.query.clone(),
            regex: true,
            first: document.search_regexp(&args.query)?,
            count: matches.len(),
            positions: Vec::new(),
            matches,
        })
    } else {
        let case_sensitive = !args.ignore_case;
        let positions = document.find_all(&args.query, case_sensitive)?;
        Ok(SearchReport {
            query: args.query.clone(),
            regex: false,
            first: positions.first().copied(),
            count: positions.len(),
            positions,
            matches: Vec::new(),
        })
    }
}

fn transform(document: &TextDocument, args: &TransformArgs) -> Result<TransformResult> {
    let case_sensitive = validate_bool(&args.case_sensitive, "caseSensitive")?;

    let output = match args.operation {
        TransformOperation::Replace => {
            let old = args
                .old
                .as_deref()
                .ok_or_else(|| anyhow!("--old is required for the replace operation"))?;
            document.replace_word(old, &args.new, case_sensitive)?
        }
        TransformOperation::Remove => document.remove_words(&args.words, case_sensitive)?,
        TransformOperation::Sort => document.sort_words(args.descending),
        TransformOperation::Shuffle => document.shuffle_words(),
        TransformOperation::ReverseOrder => document.reverse_word_order(),
    };

    Ok(TransformResult {
        operation: args.operation,
        output,
    })
}

fn reverse(document: &TextDocument, args: &ReverseArgs) -> Result<ReverseResult> {
    let output = match args.mode {
        ReverseMode::Text => document.reverse(),
        ReverseMode::Words => document.reverse_words_individually(),
        ReverseMode::Order => document.reverse_chunk_order(),
        ReverseMode::Lines => document.reverse_lines(),
        ReverseMode::LongWords => document.reverse_long_words(args.min_length)?,
        ReverseMode::Sentences => document.reverse_each_sentence(),
        ReverseMode::Capitalize => document.reverse_and_capitalize_words(),
        ReverseMode::Alternating => document.reverse_alternating_words(),
        ReverseMode::Mirror => document.mirror(&args.separator),
        ReverseMode::Palindrome => {
            let palindrome = document.is_palindrome(!args.case_sensitive, !args.keep_spaces);
            return Ok(ReverseResult {
                mode: args.mode,
                output: None,
                palindrome: Some(palindrome),
            });
        }
    };

    Ok(ReverseResult {
        mode: args.mode,
        output: Some(output),
        palindrome: None,
    })
}
