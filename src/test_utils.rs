#[cfg(test)]
pub mod fixtures {
    use crate::findings::{Finding, ReviewResult, Severity, Summary};

    pub fn create_result(findings: Vec<Finding>) -> ReviewResult {
        ReviewResult {
            language: "python".to_string(),
            summary: Summary {
                files_scanned: 3,
                critical: 0,
                warnings: 0,
            },
            findings,
            clean_files: Vec::new(),
        }
    }

    pub fn create_finding(
        id: u32,
        severity: Severity,
        file: &str,
        line: u32,
        issue: &str,
    ) -> Finding {
        Finding {
            id,
            file: file.to_string(),
            line,
            severity,
            confidence: 90,
            issue: issue.to_string(),
            fix: "test fix".to_string(),
        }
    }
}
