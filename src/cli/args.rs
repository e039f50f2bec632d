//! Command line argument parsing for the wordsmith CLI using clap.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Wordsmith - analyze, format, search, transform and reverse text files
#[derive(Parser, Debug, Clone)]
#[command(name = "wordsmith")]
#[command(about = "Unicode-aware text analysis and transformation")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordsmithArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Processor limits (JSON file)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDSMITH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordsmithArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Count words, sentences and characters
    Analyze(AnalyzeArgs),

    /// Convert case or identifier style
    Format(FormatArgs),

    /// Find a substring or regex
    Search(SearchArgs),

    /// Replace, remove, sort or shuffle words
    Transform(TransformArgs),

    /// Reverse text, words, lines or sentences
    Reverse(ReverseArgs),
}

impl Command {
    /// The input file of any subcommand.
    pub fn input(&self) -> &Path {
        match self {
            Command::Analyze(args) => &args.input,
            Command::Format(args) => &args.input,
            Command::Search(args) => &args.input,
            Command::Transform(args) => &args.input,
            Command::Reverse(args) => &args.input,
        }
    }
}

/// Arguments for text analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Input file, or `-` for stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Include per-letter counts
    #[arg(long)]
    pub letters: bool,
}

/// Arguments for formatting
#[derive(Parser, Debug, Clone)]
pub struct FormatArgs {
    /// Input file, or `-` for stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Target style
    #[arg(short, long, value_enum, default_value = "capitalize")]
    pub style: FormatStyle,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Input file, or `-` for stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Substring (or regex with --regex) to look for
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Treat QUERY as a regular expression
    #[arg(short, long)]
    pub regex: bool,

    /// Case-insensitive substring search
    #[arg(short, long)]
    pub ignore_case: bool,
}

/// Arguments for word transformations
#[derive(Parser, Debug, Clone)]
pub struct TransformArgs {
    /// Input file, or `-` for stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Operation to apply
    #[arg(short, long, value_enum)]
    pub operation: TransformOperation,

    /// Word to replace (replace)
    #[arg(long, value_name = "WORD")]
    pub old: Option<String>,

    /// Replacement word (replace)
    #[arg(long, value_name = "WORD", default_value = "")]
    pub new: String,

    /// Comma-separated words to remove (remove)
    #[arg(long, value_name = "WORDS", value_delimiter = ',')]
    pub words: Vec<String>,

    /// Match case when replacing or removing ("true" or "false")
    #[arg(long, value_name = "BOOL", default_value = "true")]
    pub case_sensitive: String,

    /// Sort in descending order (sort)
    #[arg(long)]
    pub descending: bool,
}

/// Arguments for reversal
#[derive(Parser, Debug, Clone)]
pub struct ReverseArgs {
    /// Input file, or `-` for stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// What to reverse
    #[arg(short, long, value_enum, default_value = "text")]
    pub mode: ReverseMode,

    /// Minimum word length (long-words)
    #[arg(long, default_value = "5", allow_negative_numbers = true)]
    pub min_length: i64,

    /// Separator between text and its reversal (mirror)
    #[arg(long, default_value = " | ")]
    pub separator: String,

    /// Compare case-sensitively (palindrome)
    #[arg(long)]
    pub case_sensitive: bool,

    /// Keep whitespace and punctuation when comparing (palindrome)
    #[arg(long)]
    pub keep_spaces: bool,
}

/// Case and identifier styles
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatStyle {
    Upper,
    Lower,
    Capitalize,
    Camel,
    Snake,
    Pascal,
    Kebab,
    Trim,
}

/// Word transformations
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformOperation {
    Replace,
    Remove,
    Sort,
    Shuffle,
    ReverseOrder,
}

/// Reversal modes
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReverseMode {
    Text,
    Words,
    Order,
    Lines,
    LongWords,
    Sentences,
    Capitalize,
    Alternating,
    Mirror,
    Palindrome,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
