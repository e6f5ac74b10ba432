//! Pipe-delimited finding record parsing.
//!
//! One record per line, seven fields in fixed order:
//! `id|file|line|severity|confidence|issue|fix`.

use crate::findings::{Finding, Severity};

const FIELD_COUNT: usize = 7;

/// Parse a record stream into findings, preserving input order.
///
/// Records that are blank, short, or carry a non-numeric id, line, or
/// confidence are dropped without a diagnostic. Consumers feed this from
/// partially-written streams and expect the run to keep going.
pub fn parse_records(input: &str) -> Vec<Finding> {
    input.lines().filter_map(parse_record).collect()
}

fn parse_record(line: &str) -> Option<Finding> {
    // splitn keeps any extra delimiters inside the final fix field, the
    // same way a shell `IFS='|' read` assigns the remainder.
    let fields: Vec<&str> = line.splitn(FIELD_COUNT, '|').collect();
    if fields.len() < FIELD_COUNT {
        return None;
    }

    let id: u32 = fields[0].trim().parse().ok()?;
    let line_no: u32 = fields[2].trim().parse().ok()?;
    let confidence: u8 = fields[4].trim().parse().ok()?;

    Some(Finding {
        id,
        file: fields[1].to_string(),
        line: line_no,
        severity: Severity::from_label(fields[3]),
        confidence,
        issue: fields[5].to_string(),
        fix: fields[6].to_string(),
    })
}
