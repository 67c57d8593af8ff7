//! Failure and summary text for fixture runs.

use std::fmt::Write;

use crate::runner::CaseOutcome;

/// Multi-line failure report for one fixture file. Empty when every case
/// passed, so callers can assert on emptiness directly.
pub fn format_failures(fixture: &str, outcomes: &[CaseOutcome]) -> String {
    let mut output = String::new();
    for outcome in outcomes {
        if outcome.passed() {
            continue;
        }
        writeln!(output, "FAIL: {} / {}", fixture, outcome.name).unwrap();
        for divergence in &outcome.divergences {
            writeln!(
                output,
                "    {}: expected `{}`, found `{}`",
                divergence.field, divergence.expected, divergence.actual
            )
            .unwrap();
        }
    }
    output
}

/// One-line pass count for a fixture file.
pub fn format_summary(fixture: &str, outcomes: &[CaseOutcome]) -> String {
    let passed = outcomes.iter().filter(|o| o.passed()).count();
    format!("{}: {}/{} cases passed", fixture, passed, outcomes.len())
}
