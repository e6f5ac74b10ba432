use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    Sarif,
    #[default]
    Table,
}

impl OutputFormat {
    /// Map a user-supplied format label to a format.
    ///
    /// Unrecognized labels fall back to the table format instead of
    /// failing; existing pipelines rely on this.
    pub fn from_label(label: &str) -> Self {
        match label {
            "json" => OutputFormat::Json,
            "sarif" => OutputFormat::Sarif,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Parser, Debug, Default)]
#[command(
    name = "reviewfmt",
    version,
    about = "Formats code review findings as JSON, SARIF, or a terminal table",
    long_about = "reviewfmt reads pipe-delimited finding records from stdin (or --input), \
renders them in the requested format, and exits non-zero when the review verdict \
is REQUEST_CHANGES."
)]
pub struct Cli {
    /// Output format: json, sarif, or table (unknown values fall back to table)
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Language label recorded in the report
    #[arg(short, long, default_value = "unknown")]
    pub language: String,

    /// Number of files the producing review scanned
    #[arg(long, default_value_t = 0)]
    pub files_scanned: usize,

    /// Number of critical findings reported by the producer
    #[arg(long, default_value_t = 0)]
    pub critical: usize,

    /// Number of warnings reported by the producer
    #[arg(long, default_value_t = 0)]
    pub warnings: usize,

    /// File the review found no issues in (repeatable, table output only)
    #[arg(long = "clean-file", value_name = "PATH")]
    pub clean_files: Vec<String>,

    /// Read finding records from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable ANSI colors in table output
    #[arg(long)]
    pub no_color: bool,
}
