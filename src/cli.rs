//! CLI argument parsing for bintrace

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for search traces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable step narration (default)
    #[default]
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
    /// Standalone HTML report
    Html,
}

#[derive(Parser, Debug)]
#[command(name = "bintrace")]
#[command(version)]
#[command(about = "Step-by-step binary search tracer", long_about = None)]
pub struct Cli {
    /// Comma-separated integers to search (sorted before searching)
    #[arg(short = 'v', long = "values", value_name = "LIST", allow_hyphen_values = true)]
    pub values: Option<String>,

    /// Integer to search for
    #[arg(short = 't', long = "target", value_name = "N", allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Run a built-in or configured example by name or number
    #[arg(
        short = 'x',
        long = "example",
        value_name = "NAME",
        conflicts_with_all = ["values", "target"]
    )]
    pub example: Option<String>,

    /// List available examples and exit
    #[arg(long = "list-examples")]
    pub list_examples: bool,

    /// Explain how binary search works and exit
    #[arg(long = "about")]
    pub about: bool,

    /// Output format (overrides the config file)
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Show statistics summary only instead of the step-by-step trace
    #[arg(short = 'c', long = "summary")]
    pub summary: bool,

    /// Omit pointer diagrams from text and HTML output
    #[arg(long = "no-diagram")]
    pub no_diagram: bool,

    /// Load settings and extra examples from a TOML file
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start an interactive session reading commands from stdin
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_values_and_target() {
        let cli = Cli::parse_from(["bintrace", "--values", "3,1,2", "--target", "2"]);
        assert_eq!(cli.values.as_deref(), Some("3,1,2"));
        assert_eq!(cli.target.as_deref(), Some("2"));
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["bintrace", "-v", "1,2", "-t", "2", "-c"]);
        assert!(cli.summary);
        assert_eq!(cli.values.as_deref(), Some("1,2"));
    }

    #[test]
    fn test_cli_accepts_negative_numbers() {
        let cli = Cli::parse_from(["bintrace", "-v", "-5,3", "-t", "-5"]);
        assert_eq!(cli.values.as_deref(), Some("-5,3"));
        assert_eq!(cli.target.as_deref(), Some("-5"));
    }

    #[test]
    fn test_cli_format() {
        let cli = Cli::parse_from(["bintrace", "--format", "json", "-v", "1", "-t", "1"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_example_conflicts_with_values() {
        let result = Cli::try_parse_from(["bintrace", "--example", "evens", "--values", "1,2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["bintrace"]);
        assert!(!cli.summary);
        assert!(!cli.no_diagram);
        assert!(!cli.interactive);
        assert!(!cli.debug);
        assert!(!cli.about);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_output_format_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
