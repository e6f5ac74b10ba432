pub mod types;

pub use types::{Finding, ReviewResult, Severity, Summary, Verdict};
