pub mod cli;
pub mod error;
pub mod findings;
pub mod output;
pub mod records;
pub mod reporter;
pub mod run;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Cli, OutputFormat};
pub use error::{FormatError, Result};
pub use findings::{Finding, ReviewResult, Severity, Summary, Verdict};
pub use output::OutputFormatter;
pub use records::parse_records;
pub use reporter::{Reporter, json::JsonReporter, sarif::SarifReporter, table::TableReporter};
