use crate::findings::{ReviewResult, Severity};
use crate::reporter::Reporter;
use serde::Serialize;

pub struct SarifReporter;

impl SarifReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SarifReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for SarifReporter {
    fn report(&self, result: &ReviewResult) -> String {
        let sarif = SarifReport::from_result(result);
        serde_json::to_string_pretty(&sarif)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize SARIF: {}"}}"#, e))
    }
}

#[derive(Debug, Serialize)]
pub struct SarifReport {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub version: String,
    pub runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
pub struct SarifRun {
    pub tool: SarifTool,
    pub results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
pub struct SarifTool {
    pub driver: SarifDriver,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifDriver {
    pub name: String,
    pub version: String,
    pub information_uri: String,
    // The rules table stays empty; results carry rule ids derived from
    // the issue text instead.
    pub rules: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct SarifResult {
    #[serde(rename = "ruleId")]
    pub rule_id: String,
    pub level: String,
    pub message: SarifMessage,
    pub locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize)]
pub struct SarifMessage {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifLocation {
    pub physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifPhysicalLocation {
    pub artifact_location: SarifArtifactLocation,
    pub region: SarifRegion,
}

#[derive(Debug, Serialize)]
pub struct SarifArtifactLocation {
    pub uri: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRegion {
    pub start_line: u32,
}

const RULE_ID_MAX_LEN: usize = 50;

impl SarifReport {
    pub fn from_result(result: &ReviewResult) -> Self {
        let results: Vec<SarifResult> = result
            .findings
            .iter()
            .map(|f| SarifResult {
                rule_id: Self::rule_id(&f.issue),
                level: Self::severity_to_level(&f.severity).to_string(),
                message: SarifMessage {
                    text: format!("{}. Fix: {}", f.issue, f.fix),
                },
                locations: vec![SarifLocation {
                    physical_location: SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation {
                            uri: f.file.clone(),
                        },
                        region: SarifRegion { start_line: f.line },
                    },
                }],
            })
            .collect();

        SarifReport {
            schema: "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json".to_string(),
            version: "2.1.0".to_string(),
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: "reviewfmt".to_string(),
                        version: env!("CARGO_PKG_VERSION").to_string(),
                        information_uri: "https://github.com/reviewfmt/reviewfmt".to_string(),
                        rules: Vec::new(),
                    },
                },
                results,
            }],
        }
    }

    /// Derive a stable rule id from the issue text: case preserved,
    /// every non-alphanumeric character becomes a hyphen, truncated to
    /// 50 characters, trailing hyphens stripped. Identical issue text
    /// always yields the identical id so downstream tools can group on it.
    fn rule_id(issue: &str) -> String {
        let mut id: String = issue
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .take(RULE_ID_MAX_LEN)
            .collect();
        while id.ends_with('-') {
            id.pop();
        }
        id
    }

    fn severity_to_level(severity: &Severity) -> &'static str {
        match severity {
            Severity::Critical => "error",
            Severity::Warning => "warning",
        }
    }
}
