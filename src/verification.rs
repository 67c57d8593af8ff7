//! Invariant validation of an assigned narrative.
//!
//! A second pass that re-reads the raw sentence and checks that the text can
//! actually carry the claim the classifier assigned to it. The pass is
//! advisory: a failing row keeps its classification and is persisted with
//! `ok = false` and a reason code, so downstream quality metrics can track
//! the pass rate instead of silently losing rows.

use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::anchors;
use crate::labels::ContextLabels;
use crate::narrative::NarrativeClassification;

const MIN_CLAIM_WORDS: usize = 8;

/// Why a classified sentence failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantReason {
    ShortText,
    DisplayReferenceOnly,
    BaselineDescriptor,
    MissingComparativeAnchor,
    MissingOutcomeSignal,
    MissingSafetyAssertion,
    MissingDirectionalTerm,
    MissingEquivalenceTerm,
    NonClaimContext,
}

impl InvariantReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvariantReason::ShortText => "short_text",
            InvariantReason::DisplayReferenceOnly => "display_reference_only",
            InvariantReason::BaselineDescriptor => "baseline_descriptor",
            InvariantReason::MissingComparativeAnchor => "missing_comparative_anchor",
            InvariantReason::MissingOutcomeSignal => "missing_outcome_signal",
            InvariantReason::MissingSafetyAssertion => "missing_safety_assertion",
            InvariantReason::MissingDirectionalTerm => "missing_directional_term",
            InvariantReason::MissingEquivalenceTerm => "missing_equivalence_term",
            InvariantReason::NonClaimContext => "non_claim_context",
        }
    }
}

impl std::fmt::Display for InvariantReason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation verdict. `ok = true` carries no reason.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NarrativeValidation {
    pub ok: bool,
    pub reason: Option<InvariantReason>,
}

impl NarrativeValidation {
    fn pass() -> NarrativeValidation {
        NarrativeValidation {
            ok: true,
            reason: None,
        }
    }

    fn fail(reason: InvariantReason) -> NarrativeValidation {
        NarrativeValidation {
            ok: false,
            reason: Some(reason),
        }
    }
}

/// Re-check an assigned classification against the raw sentence. Sentences
/// without a narrative type pass vacuously.
pub fn validate_narrative_event(
    classification: &NarrativeClassification,
    labels: &ContextLabels,
    text: &str,
    section: Option<&str>,
) -> NarrativeValidation {
    let narrative_type = match classification.narrative_type.as_deref() {
        Some(t) => t,
        None => return NarrativeValidation::pass(),
    };

    let claim_like = narrative_type == "comparative" || narrative_type == "safety";
    if claim_like && text.unicode_words().count() < MIN_CLAIM_WORDS {
        return fail(narrative_type, InvariantReason::ShortText);
    }
    if anchors::is_display_reference_only(text) {
        return fail(narrative_type, InvariantReason::DisplayReferenceOnly);
    }
    if anchors::is_baseline_descriptor(text) {
        return fail(narrative_type, InvariantReason::BaselineDescriptor);
    }

    let section_lower = section.map(str::to_lowercase);
    match narrative_type {
        "comparative" => validate_comparative(classification, text),
        "safety" => validate_safety(labels, text, section_lower.as_deref()),
        _ => NarrativeValidation::pass(),
    }
}

fn fail(narrative_type: &str, reason: InvariantReason) -> NarrativeValidation {
    debug!(narrative_type, reason = %reason, "narrative failed invariant validation");
    NarrativeValidation::fail(reason)
}

/// A comparative claim must carry its anchor plus whatever sub-signal the
/// subtype implies: an outcome keyword for efficacy subtypes, a safety
/// assertion for safety subtypes, a directional term for advantage or
/// disadvantage subtypes, an equivalence term for parity subtypes.
fn validate_comparative(
    classification: &NarrativeClassification,
    text: &str,
) -> NarrativeValidation {
    if !anchors::has_comparative_anchor(text) {
        return fail("comparative", InvariantReason::MissingComparativeAnchor);
    }
    let subtype = classification.narrative_subtype.as_deref().unwrap_or("");
    if subtype.contains("efficacy") && !anchors::has_outcome_signal(text) {
        return fail("comparative", InvariantReason::MissingOutcomeSignal);
    }
    if subtype.contains("safety") && !anchors::has_safety_assertion(text) {
        return fail("comparative", InvariantReason::MissingSafetyAssertion);
    }
    let directional = subtype.contains("advantage")
        || subtype.contains("disadvantage")
        || subtype.contains("tradeoff");
    if directional && !anchors::has_directional_term(text) {
        return fail("comparative", InvariantReason::MissingDirectionalTerm);
    }
    let equivalence = subtype.contains("equivalence")
        || subtype.contains("parity")
        || subtype.contains("non_inferiority")
        || subtype.contains("noninferiority");
    if equivalence && !anchors::has_equivalence_term(text) {
        return fail("comparative", InvariantReason::MissingEquivalenceTerm);
    }
    NarrativeValidation::pass()
}

/// A safety claim needs a risk label and an assertion shape, outside of a
/// non-claim context. Methods-section sentences describe procedure, not
/// claims, and fail the same way.
fn validate_safety(labels: &ContextLabels, text: &str, section: Option<&str>) -> NarrativeValidation {
    if section == Some("methods") || anchors::is_non_claim_context(text) {
        return fail("safety", InvariantReason::NonClaimContext);
    }
    if labels.risk_terms.is_empty() || !anchors::has_safety_assertion(text) {
        return fail("safety", InvariantReason::MissingSafetyAssertion);
    }
    NarrativeValidation::pass()
}
