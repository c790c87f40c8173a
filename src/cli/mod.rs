//! CLI interface using clap
//!
//! Provides the command-line interface for ifacediff

mod commands;

pub use commands::*;

use clap::Parser;
use std::path::PathBuf;

/// ifacediff - checks that a Go interface documented in a README
/// matches its source declaration
#[derive(Parser, Debug)]
#[command(name = "ifacediff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the documentation file (e.g. README.md)
    pub docs: PathBuf,

    /// Path to the Go source file declaring the interface
    pub source: PathBuf,

    /// Name of the interface to check
    pub interface: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["ifacediff", "README.md", "iface.go", "Client"]);
        assert_eq!(cli.docs, PathBuf::from("README.md"));
        assert_eq!(cli.source, PathBuf::from("iface.go"));
        assert_eq!(cli.interface, "Client");
        assert!(!cli.verbose);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_json_format_flag() {
        let cli = Cli::parse_from([
            "ifacediff",
            "README.md",
            "iface.go",
            "Client",
            "--format",
            "json",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_wrong_argument_count_is_a_usage_error() {
        assert!(Cli::try_parse_from(["ifacediff", "README.md", "iface.go"]).is_err());
        assert!(Cli::try_parse_from(["ifacediff", "a", "b", "c", "d"]).is_err());
    }
}
