//! Run orchestration: read records, assemble the result, render, exit.

use crate::cli::{Cli, OutputFormat};
use crate::error::{FormatError, Result};
use crate::findings::{ReviewResult, Summary, Verdict};
use crate::output::OutputFormatter;
use crate::records::parse_records;
use std::fs;
use std::io::Read;
use std::process::ExitCode;
use tracing::debug;

/// Format a record stream according to the CLI options.
///
/// Exit codes: 0 when the verdict is APPROVE or COMMENT, 1 on
/// REQUEST_CHANGES, 2 when input or output I/O fails.
pub fn run(cli: &Cli) -> ExitCode {
    let raw = match read_input(cli) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let findings = parse_records(&raw);
    debug!(findings = findings.len(), "Parsed finding records");

    let result = ReviewResult {
        language: cli.language.clone(),
        summary: Summary {
            files_scanned: cli.files_scanned,
            critical: cli.critical,
            warnings: cli.warnings,
        },
        findings,
        clean_files: cli.clean_files.clone(),
    };

    let format = OutputFormat::from_label(&cli.format);
    let output = OutputFormatter::new(format)
        .with_color(!cli.no_color)
        .format(&result);

    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, &output).map_err(|source| FormatError::WriteError {
            path: path.display().to_string(),
            source,
        }) {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    } else {
        println!("{}", output);
    }

    debug!(
        critical = result.summary.critical,
        warnings = result.summary.warnings,
        verdict = %result.verdict(),
        "Report rendered"
    );

    match result.verdict() {
        Verdict::RequestChanges => ExitCode::from(1),
        Verdict::Approve | Verdict::Comment => ExitCode::SUCCESS,
    }
}

fn read_input(cli: &Cli) -> Result<String> {
    match cli.input {
        Some(ref path) => fs::read_to_string(path).map_err(|source| FormatError::ReadError {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(FormatError::Stdin)?;
            Ok(buf)
        }
    }
}
