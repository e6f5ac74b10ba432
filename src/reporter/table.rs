use crate::findings::{ReviewResult, Severity, Verdict};
use crate::reporter::Reporter;
use colored::Colorize;

/// Clean-file entries printed before collapsing into "and N more".
const CLEAN_FILES_SHOWN: usize = 20;

pub struct TableReporter {
    color: bool,
}

impl TableReporter {
    pub fn new() -> Self {
        Self { color: true }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn severity_cell(&self, severity: &Severity) -> String {
        if !self.color {
            return severity.as_str().to_string();
        }
        match severity {
            Severity::Critical => severity.as_str().red().bold().to_string(),
            Severity::Warning => severity.as_str().yellow().to_string(),
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn red(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn yellow(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn format_verdict(&self, result: &ReviewResult) -> String {
        let label = self.bold("VERDICT:");
        match result.verdict() {
            Verdict::RequestChanges => format!(
                "{} {} — {} critical issues found\n",
                label,
                self.red(Verdict::RequestChanges.label()),
                result.summary.critical
            ),
            Verdict::Comment => format!(
                "{} {} — {} warnings to consider\n",
                label,
                self.yellow(Verdict::Comment.label()),
                result.summary.warnings
            ),
            Verdict::Approve => format!(
                "{} {} — No issues detected\n",
                label,
                self.green(Verdict::Approve.label())
            ),
        }
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TableReporter {
    fn report(&self, result: &ReviewResult) -> String {
        let mut output = String::new();

        if !result.findings.is_empty() {
            output.push('\n');
            output.push_str(&format!(
                "| {:>3} | File:Line | Severity | Confidence | Issue | Fix |\n",
                "#"
            ));
            output.push_str("| ---|----------|----------|------------|-------|-----|\n");
            for f in &result.findings {
                output.push_str(&format!(
                    "| {:>3} | {}:{} | {} | {}% | {} | {} |\n",
                    f.id,
                    f.file,
                    f.line,
                    self.severity_cell(&f.severity),
                    f.confidence,
                    f.issue,
                    f.fix
                ));
            }
            output.push('\n');
        }

        output.push_str(&format!("{}\n", "=".repeat(40)));
        output.push_str(&format!(
            "  Files scanned:  {}\n",
            result.summary.files_scanned
        ));
        output.push_str(&format!(
            "  Findings:       {}, {}\n",
            self.red(&format!("{} critical", result.summary.critical)),
            self.yellow(&format!("{} warnings", result.summary.warnings))
        ));
        output.push('\n');

        if !result.clean_files.is_empty() {
            output.push_str("Clean files (no issues):\n");
            for clean in result.clean_files.iter().take(CLEAN_FILES_SHOWN) {
                output.push_str(&format!("  {} {}\n", self.green("\u{2713}"), clean));
            }
            if result.clean_files.len() > CLEAN_FILES_SHOWN {
                output.push_str(&format!(
                    "  ... and {} more\n",
                    result.clean_files.len() - CLEAN_FILES_SHOWN
                ));
            }
            output.push('\n');
        }

        output.push_str(&self.format_verdict(result));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::findings::Summary;
    use crate::test_utils::fixtures::{create_finding, create_result};

    fn plain() -> TableReporter {
        TableReporter::new().with_color(false)
    }

    #[test]
    fn test_table_header_and_row() {
        let finding = create_finding(1, Severity::Critical, "app/views.py", 42, "eval() call");
        let result = create_result(vec![finding]);
        let output = plain().report(&result);

        assert!(output.contains("| File:Line | Severity | Confidence | Issue | Fix |"));
        assert!(output.contains("app/views.py:42"));
        assert!(output.contains("CRITICAL"));
        assert!(output.contains("90%"));
        assert!(output.contains("eval() call"));
    }

    #[test]
    fn test_table_no_findings_skips_table() {
        let result = create_result(vec![]);
        let output = plain().report(&result);

        assert!(!output.contains("File:Line"));
        assert!(output.contains("Files scanned:"));
    }

    #[test]
    fn test_table_summary_block() {
        let mut result = create_result(vec![]);
        result.summary = Summary {
            files_scanned: 14,
            critical: 2,
            warnings: 5,
        };
        let output = plain().report(&result);

        assert!(output.contains("Files scanned:  14"));
        assert!(output.contains("2 critical"));
        assert!(output.contains("5 warnings"));
    }

    #[test]
    fn test_table_preserves_input_order() {
        let findings = vec![
            create_finding(3, Severity::Warning, "c.py", 3, "third"),
            create_finding(1, Severity::Critical, "a.py", 1, "first"),
            create_finding(2, Severity::Warning, "b.py", 2, "second"),
        ];
        let result = create_result(findings);
        let output = plain().report(&result);

        let pos_c = output.find("c.py:3").unwrap();
        let pos_a = output.find("a.py:1").unwrap();
        let pos_b = output.find("b.py:2").unwrap();
        assert!(pos_c < pos_a && pos_a < pos_b);
    }

    #[test]
    fn test_table_clean_files_listed() {
        let mut result = create_result(vec![]);
        result.clean_files = vec!["src/a.py".to_string(), "src/b.py".to_string()];
        let output = plain().report(&result);

        assert!(output.contains("Clean files (no issues):"));
        assert!(output.contains("src/a.py"));
        assert!(output.contains("src/b.py"));
        assert!(!output.contains("more"));
    }

    #[test]
    fn test_table_clean_files_capped_at_twenty() {
        let mut result = create_result(vec![]);
        result.clean_files = (1..=25).map(|i| format!("src/file{}.py", i)).collect();
        let output = plain().report(&result);

        assert!(output.contains("src/file20.py"));
        assert!(!output.contains("src/file21.py"));
        assert!(output.contains("... and 5 more"));
    }

    #[test]
    fn test_table_clean_files_exactly_twenty_no_more_line() {
        let mut result = create_result(vec![]);
        result.clean_files = (1..=20).map(|i| format!("src/file{}.py", i)).collect();
        let output = plain().report(&result);

        assert!(output.contains("src/file20.py"));
        assert!(!output.contains("more"));
    }

    #[test]
    fn test_table_verdict_approve() {
        let result = create_result(vec![]);
        let output = plain().report(&result);
        assert!(output.contains("VERDICT: APPROVE — No issues detected"));
    }

    #[test]
    fn test_table_verdict_comment() {
        let mut result = create_result(vec![]);
        result.summary.warnings = 3;
        let output = plain().report(&result);
        assert!(output.contains("VERDICT: COMMENT — 3 warnings to consider"));
    }

    #[test]
    fn test_table_verdict_request_changes() {
        let mut result = create_result(vec![]);
        result.summary.critical = 2;
        result.summary.warnings = 5;
        let output = plain().report(&result);
        assert!(output.contains("VERDICT: REQUEST CHANGES — 2 critical issues found"));
    }

    #[test]
    fn test_table_row_uses_finding_id() {
        let finding = create_finding(7, Severity::Warning, "a.py", 1, "issue");
        let result = create_result(vec![finding]);
        let output = plain().report(&result);
        assert!(output.contains("|   7 |"));
    }

    #[test]
    fn test_table_no_color_has_no_escapes() {
        let finding = create_finding(1, Severity::Critical, "a.py", 1, "issue");
        let mut result = create_result(vec![finding]);
        result.summary.critical = 1;
        let output = plain().report(&result);
        assert!(!output.contains('\u{1b}'));
    }
}
