//! CLI command definitions and argument parsing.

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};

/// Default server address
pub const DEFAULT_SERVER: &str = "http://localhost:3000";

/// FactLens CLI - Fact-check text, web pages and images.
#[derive(Debug, Parser)]
#[command(name = "factlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "text")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// FactLens server URL
    #[arg(short, long, global = true, env = "FACTLENS_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => OutputFormat::Text,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fact-check text, a URL and/or images
    Check(CheckArgs),

    /// Show or clear the server's latest result
    Results(ResultsArgs),

    /// Check that the server is up
    Health,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Text to fact-check
    #[arg(short, long)]
    pub text: Option<String>,

    /// Web page to fact-check
    #[arg(short, long)]
    pub url: Option<String>,

    /// Image file to fact-check (repeatable)
    #[arg(short, long = "image", value_name = "PATH")]
    pub images: Vec<String>,

    /// Also print a results page link carrying the result
    #[arg(long)]
    pub link: bool,
}

/// Arguments for the results command.
#[derive(Debug, Parser)]
pub struct ResultsArgs {
    /// Clear the stored result instead of showing it
    #[arg(long)]
    pub clear: bool,
}
