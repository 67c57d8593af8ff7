//! Fixture execution.
//!
//! Runs fixture cases through the classifier and diffs the outcome against
//! each case's pinned expectations. Expectation fields left unset are not
//! compared, so a case only breaks when a column it explicitly pins moves.

use narralens::{classify_sentence, NarrativeSchema, SentenceOutcome};

use crate::fixture::{Expectation, FixtureCase, FixtureFile};

/// One pinned column that came out different.
#[derive(Debug, Clone, PartialEq)]
pub struct Divergence {
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

/// The result of one executed case.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub name: String,
    pub divergences: Vec<Divergence>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.divergences.is_empty()
    }
}

/// Run every case in a fixture file.
pub fn run_file(file: &FixtureFile, doc_id: &str, schema: &NarrativeSchema) -> Vec<CaseOutcome> {
    file.cases
        .iter()
        .map(|case| run_case(case, doc_id, schema))
        .collect()
}

/// Run a single case and collect its divergences.
pub fn run_case(case: &FixtureCase, doc_id: &str, schema: &NarrativeSchema) -> CaseOutcome {
    let record = case.record(doc_id);
    let outcome = classify_sentence(&record, schema);
    CaseOutcome {
        name: case.name.clone(),
        divergences: diff_outcome(&case.expect, &outcome),
    }
}

fn diff_outcome(expect: &Expectation, outcome: &SentenceOutcome) -> Vec<Divergence> {
    let mut divergences = Vec::new();

    let row = match outcome {
        SentenceOutcome::Skipped(reason) => {
            match expect.skipped.as_deref() {
                Some(code) if code == reason.to_string() => {}
                Some(code) => divergences.push(Divergence {
                    field: "outcome",
                    expected: format!("skipped: {}", code),
                    actual: format!("skipped: {}", reason),
                }),
                None => divergences.push(Divergence {
                    field: "outcome",
                    expected: "a classification row".to_string(),
                    actual: format!("skipped: {}", reason),
                }),
            }
            return divergences;
        }
        SentenceOutcome::Event(row) => row,
    };

    if let Some(code) = expect.skipped.as_deref() {
        divergences.push(Divergence {
            field: "outcome",
            expected: format!("skipped: {}", code),
            actual: "a classification row".to_string(),
        });
        return divergences;
    }

    if expect.unclassified {
        if let Some(actual) = row.narrative_type.as_deref() {
            divergences.push(Divergence {
                field: "narrative_type",
                expected: "none".to_string(),
                actual: actual.to_string(),
            });
        }
    }

    check_column(
        &mut divergences,
        "narrative_type",
        &expect.narrative_type,
        &row.narrative_type,
    );
    check_column(
        &mut divergences,
        "narrative_subtype",
        &expect.narrative_subtype,
        &row.narrative_subtype,
    );
    check_column(
        &mut divergences,
        "claim_strength",
        &expect.claim_strength,
        &row.claim_strength,
    );
    check_column(
        &mut divergences,
        "risk_posture",
        &expect.risk_posture,
        &row.risk_posture,
    );
    check_column(
        &mut divergences,
        "direction_type",
        &expect.direction_type,
        &row.direction_type,
    );
    check_column(
        &mut divergences,
        "product_a_role",
        &expect.product_a_role,
        &row.product_a_role,
    );
    check_column(
        &mut divergences,
        "product_b_role",
        &expect.product_b_role,
        &row.product_b_role,
    );

    if let Some(expected) = expect.confidence {
        // Gate penalties subtract floats, so pinned confidences compare
        // within an epsilon rather than bit-exactly.
        let matches = row
            .narrative_confidence
            .map_or(false, |actual| (actual - expected).abs() < 1e-9);
        if !matches {
            divergences.push(Divergence {
                field: "confidence",
                expected: expected.to_string(),
                actual: match row.narrative_confidence {
                    Some(actual) => actual.to_string(),
                    None => "none".to_string(),
                },
            });
        }
    }

    if let Some(expected) = expect.invariant_ok {
        if row.narrative_invariant_ok != Some(expected) {
            divergences.push(Divergence {
                field: "invariant_ok",
                expected: expected.to_string(),
                actual: match row.narrative_invariant_ok {
                    Some(actual) => actual.to_string(),
                    None => "none".to_string(),
                },
            });
        }
    }

    divergences
}

fn check_column(
    divergences: &mut Vec<Divergence>,
    field: &'static str,
    expected: &Option<String>,
    actual: &Option<String>,
) {
    if let Some(expected) = expected.as_deref() {
        if actual.as_deref() != Some(expected) {
            divergences.push(Divergence {
                field,
                expected: expected.to_string(),
                actual: actual.clone().unwrap_or_else(|| "none".to_string()),
            });
        }
    }
}
