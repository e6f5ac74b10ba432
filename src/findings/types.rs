use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Map a severity label from the record stream. Anything other than
    /// the literal `CRITICAL` is treated as a warning.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "CRITICAL" => Severity::Critical,
            _ => Severity::Warning,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One reported review issue with location, severity, confidence,
/// description, and suggested fix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub id: u32,
    pub file: String,
    pub line: u32,
    pub severity: Severity,
    pub confidence: u8,
    pub issue: String,
    pub fix: String,
}

/// Summary counters as supplied by the producing review. They are never
/// recomputed from the finding sequence; if they diverge, that is the
/// producer's contract.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Summary {
    pub files_scanned: usize,
    pub critical: usize,
    pub warnings: usize,
}

impl Summary {
    /// Derive the review verdict. Warnings demote APPROVE to COMMENT;
    /// criticals win over any number of warnings.
    pub fn verdict(&self) -> Verdict {
        let mut verdict = Verdict::Approve;
        if self.warnings > 0 {
            verdict = Verdict::Comment;
        }
        if self.critical > 0 {
            verdict = Verdict::RequestChanges;
        }
        verdict
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Approve,
    Comment,
    RequestChanges,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Approve => "APPROVE",
            Verdict::Comment => "COMMENT",
            Verdict::RequestChanges => "REQUEST_CHANGES",
        }
    }

    /// Human-readable label for the table verdict line.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Approve => "APPROVE",
            Verdict::Comment => "COMMENT",
            Verdict::RequestChanges => "REQUEST CHANGES",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A full review run handed to the formatter: the ordered finding
/// sequence, the supplied summary counters, a language label, and the
/// files the review found clean.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResult {
    pub language: String,
    pub summary: Summary,
    pub findings: Vec<Finding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clean_files: Vec<String>,
}

impl ReviewResult {
    pub fn verdict(&self) -> Verdict {
        self.summary.verdict()
    }
}
