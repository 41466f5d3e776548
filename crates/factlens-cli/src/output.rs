//! Output formatting for the CLI.

use crate::client::Health;
use crate::error::Result;
use colored::*;
use factlens_domain::{FactCheckResult, Rating};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a fact-check result.
    pub fn format_result(&self, result: &FactCheckResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Text => Ok(self.format_result_text(result)),
        }
    }

    fn format_result_text(&self, result: &FactCheckResult) -> String {
        let mut out = format!("Rating: {}\n", self.rating(result.rating));
        out.push_str(&format!("\n{}\n", result.explanation));
        out.push_str(&format!("\nAnalyzed text:\n{}\n", self.highlight(&result.analyzed_text)));

        if result.verification_sources.is_empty() {
            out.push_str(&format!("\n{}\n", self.colorize("No verification sources.", "yellow")));
        } else {
            out.push_str("\nSources:\n");
            for (i, source) in result.verification_sources.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, source));
            }
        }

        out.trim_end().to_string()
    }

    /// Format server health.
    pub fn format_health(&self, server: &str, health: &Health) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "server": server,
                "status": health.status,
                "model": health.model,
                "promptVersion": health.prompt_version,
            }))?),
            OutputFormat::Text => Ok(self.success(&format!(
                "{} is {} (model: {}, prompt: {})",
                server, health.status, health.model, health.prompt_version
            ))),
        }
    }

    /// Rating label, colored by verdict.
    pub fn rating(&self, rating: Rating) -> String {
        let label = rating.as_str();
        if !self.color_enabled {
            return label.to_string();
        }

        let colored = match rating {
            Rating::True => label.green(),
            Rating::False => label.red(),
            Rating::Misleading => label.yellow(),
            Rating::Unverifiable => label.blue(),
        };
        colored.bold().to_string()
    }

    /// Render `**span**` markers; bold when color is on, kept as-is otherwise.
    pub fn highlight(&self, text: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        text.split("**")
            .enumerate()
            .map(|(i, part)| {
                if i % 2 == 1 {
                    part.bold().underline().to_string()
                } else {
                    part.to_string()
                }
            })
            .collect()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
