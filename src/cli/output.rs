//! Output formatting for CLI commands

use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
///
/// Human lines carry a glyph so operators can scan progress at a glance.
/// In JSON mode those lines are suppressed and only [`Output::data`]
/// reaches stdout.
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints an informational line with its glyph (text only)
    pub fn info(&self, glyph: &str, message: &str) {
        if self.is_text() {
            println!("{} {}", glyph, message);
        }
    }

    /// Prints a success line (text only)
    pub fn success(&self, message: &str) {
        if self.is_text() {
            println!("✅ {}", message);
        }
    }

    /// Prints a completed sub-step, indented under the current step (text only)
    pub fn step(&self, message: &str) {
        if self.is_text() {
            println!("   ✅ {}", message);
        }
    }

    /// Prints a failure
    pub fn failure(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("❌ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": false,
                        "error": message
                    })
                );
            }
        }
    }

    /// Prints a plain line (text only)
    pub fn line(&self, message: &str) {
        if self.is_text() {
            println!("{}", message);
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        match self.format {
            OutputFormat::Text => {
                if let Ok(json) = serde_json::to_string_pretty(data) {
                    println!("{}", json);
                }
            }
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string(data) {
                    println!("{}", json);
                }
            }
        }
    }

    /// Prints a blank line (text only)
    pub fn blank(&self) {
        if self.is_text() {
            println!();
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Returns true if using text format
    pub fn is_text(&self) -> bool {
        self.format == OutputFormat::Text
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
