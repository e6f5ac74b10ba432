//! Output formatter for review results.

use crate::cli::OutputFormat;
use crate::findings::ReviewResult;
use crate::reporter::{
    Reporter, json::JsonReporter, sarif::SarifReporter, table::TableReporter,
};

/// Unified output formatter that selects the appropriate reporter.
pub struct OutputFormatter {
    format: OutputFormat,
    color: bool,
}

impl OutputFormatter {
    /// Create a new output formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: true,
        }
    }

    /// Enable or disable ANSI colors (table output only).
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Format the review result to a string.
    pub fn format(&self, result: &ReviewResult) -> String {
        match self.format {
            OutputFormat::Json => {
                let reporter = JsonReporter::new();
                reporter.report(result)
            }
            OutputFormat::Sarif => {
                let reporter = SarifReporter::new();
                reporter.report(result)
            }
            OutputFormat::Table => {
                let reporter = TableReporter::new().with_color(self.color);
                reporter.report(result)
            }
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}
