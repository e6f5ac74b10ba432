use crate::findings::{Finding, ReviewResult, Verdict};
use crate::reporter::Reporter;
use serde::Serialize;

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, result: &ReviewResult) -> String {
        let report = JsonReport::from_result(result);
        serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize report: {}"}}"#, e))
    }
}

#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub tool: String,
    pub version: String,
    pub language: String,
    pub summary: JsonSummary,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Serialize)]
pub struct JsonSummary {
    pub files_scanned: usize,
    pub critical: usize,
    pub warnings: usize,
    pub verdict: Verdict,
}

impl JsonReport {
    pub fn from_result(result: &ReviewResult) -> Self {
        JsonReport {
            tool: "reviewfmt".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            language: result.language.clone(),
            summary: JsonSummary {
                files_scanned: result.summary.files_scanned,
                critical: result.summary.critical,
                warnings: result.summary.warnings,
                verdict: result.verdict(),
            },
            findings: result.findings.clone(),
        }
    }
}
