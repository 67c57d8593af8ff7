//! Narrative rule engine.
//!
//! Evaluates the priority-ordered rule table against extracted labels,
//! sentiment, and section. A structurally matching rule must still pass a
//! type-specific anchor check on the raw text before it is accepted; a
//! failed anchor continues with the next rule. When no rule fires at all, a
//! fixed legacy decision chain takes over. Claim strength and risk posture
//! derive independently and attach to whichever classification comes out.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, trace};

use crate::anchors;
use crate::labels::ContextLabels;
use crate::schema::{NarrativeRule, NarrativeSchema};

/// Outcome of rule/legacy evaluation. All-`None` means "no narrative
/// assigned", a valid terminal state rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NarrativeClassification {
    pub narrative_type: Option<String>,
    pub narrative_subtype: Option<String>,
    pub confidence: Option<f64>,
    pub risk_posture: Option<String>,
    pub claim_strength: Option<String>,
}

impl NarrativeClassification {
    pub(crate) fn assigned(
        narrative_type: &str,
        narrative_subtype: Option<&str>,
        confidence: f64,
    ) -> NarrativeClassification {
        NarrativeClassification {
            narrative_type: Some(narrative_type.to_string()),
            narrative_subtype: narrative_subtype.map(str::to_string),
            confidence: Some(confidence),
            risk_posture: None,
            claim_strength: None,
        }
    }
}

/// Classify one sentence against the schema's rule table.
pub fn classify_narrative(
    labels: &ContextLabels,
    sentiment: Option<&str>,
    section: Option<&str>,
    text: &str,
    schema: &NarrativeSchema,
) -> NarrativeClassification {
    let aliases = sentiment_aliases(sentiment);
    let section_lower = section.map(str::to_lowercase);
    let section_ref = section_lower.as_deref();

    let mut classification = schema
        .rules
        .iter()
        .find_map(|rule| {
            if !rule_matches(rule, labels, &aliases, section_ref) {
                return None;
            }
            if !anchor_allows(
                &rule.narrative_type,
                rule.narrative_subtype.as_deref(),
                labels,
                text,
            ) {
                trace!(rule = %rule.name, "anchor check rejected rule");
                return None;
            }
            debug!(rule = %rule.name, "narrative rule fired");
            Some(NarrativeClassification::assigned(
                &rule.narrative_type,
                rule.narrative_subtype.as_deref(),
                rule.confidence,
            ))
        })
        .unwrap_or_else(|| classify_legacy(labels, &aliases, section_ref, text));

    attach_derived(&mut classification, labels, &aliases, section_ref, text);
    classification
}

/// Normalized sentiment plus its aliases; the rule's `requires_sentiment`
/// set must intersect this.
fn sentiment_aliases(sentiment: Option<&str>) -> BTreeSet<String> {
    let mut aliases = BTreeSet::new();
    let raw = match sentiment {
        Some(s) => s.trim().to_lowercase(),
        None => return aliases,
    };
    if raw.is_empty() {
        return aliases;
    }
    match raw.as_str() {
        "pos" | "positive" => {
            aliases.insert("pos".to_string());
            aliases.insert("positive".to_string());
        }
        "neg" | "negative" => {
            aliases.insert("neg".to_string());
            aliases.insert("negative".to_string());
        }
        "neu" | "neutral" => {
            aliases.insert("neu".to_string());
            aliases.insert("neutral".to_string());
        }
        _ => {}
    }
    aliases.insert(raw);
    aliases
}

/// Structural match: label requirements, sentiment, and section constraints.
/// `section` must already be lowercased.
fn rule_matches(
    rule: &NarrativeRule,
    labels: &ContextLabels,
    aliases: &BTreeSet<String>,
    section: Option<&str>,
) -> bool {
    for (category, required) in &rule.requires {
        let present = labels.category(*category);
        if required.is_empty() || required.contains("*") {
            if present.is_empty() {
                return false;
            }
            continue;
        }
        let satisfied = present
            .iter()
            .any(|label| required.iter().any(|value| label.contains(value.as_str())));
        if !satisfied {
            return false;
        }
    }
    if !rule.requires_sentiment.is_empty()
        && rule.requires_sentiment.intersection(aliases).next().is_none()
    {
        return false;
    }
    if !rule.include_sections.is_empty() {
        match section {
            Some(s) if rule.include_sections.contains(s) => {}
            _ => return false,
        }
    }
    if let Some(s) = section {
        if rule.exclude_sections.contains(s) {
            return false;
        }
    }
    true
}

/// Type-specific textual re-validation of a structurally matching rule.
pub(crate) fn anchor_allows(
    narrative_type: &str,
    narrative_subtype: Option<&str>,
    labels: &ContextLabels,
    text: &str,
) -> bool {
    match narrative_type {
        "comparative" => {
            if !anchors::has_comparative_anchor(text) {
                return false;
            }
            let needs_outcome = narrative_subtype.map_or(false, |s| s.contains("efficacy"));
            !needs_outcome || anchors::has_outcome_signal(text)
        }
        "safety" => {
            !labels.risk_terms.is_empty()
                && anchors::has_safety_assertion(text)
                && !anchors::has_comparative_anchor(text)
                && !anchors::is_non_claim_context(text)
        }
        "positioning" => {
            if narrative_subtype == Some("combination") {
                anchors::has_outcome_signal(text) || anchors::has_guideline_cue(text)
            } else {
                true
            }
        }
        _ => true,
    }
}

/// Fixed fallback decision chain for schemas whose rule table did not fire.
/// Each step passes through the same anchor checks the rules use.
pub(crate) fn classify_legacy(
    labels: &ContextLabels,
    aliases: &BTreeSet<String>,
    section: Option<&str>,
    text: &str,
) -> NarrativeClassification {
    if !labels.risk_terms.is_empty()
        && section != Some("methods")
        && anchor_allows("safety", None, labels, text)
    {
        debug!("legacy fallback: safety");
        return NarrativeClassification::assigned("safety", None, 0.9);
    }

    if anchors::has_comparative_anchor(text) {
        debug!("legacy fallback: comparative");
        return NarrativeClassification::assigned("comparative", None, 0.65);
    }

    for (kind, confidence) in [
        ("combination", 0.85),
        ("switching", 0.8),
        ("delivery", 0.75),
    ]
    .iter()
    {
        if !labels.relationship_types.contains(*kind) {
            continue;
        }
        if *kind == "combination" && !anchor_allows("positioning", Some("combination"), labels, text)
        {
            continue;
        }
        debug!(kind, "legacy fallback: positioning");
        return NarrativeClassification::assigned("positioning", Some(*kind), *confidence);
    }

    if !labels.study_context.is_empty() {
        let (subtype, confidence) = if labels.real_world_terms.is_empty() {
            ("clinical_context", 0.7)
        } else {
            ("real_world", 0.72)
        };
        debug!(subtype, "legacy fallback: evidence");
        return NarrativeClassification::assigned("evidence", Some(subtype), confidence);
    }

    if aliases.contains("pos") {
        return NarrativeClassification::assigned("efficacy", Some("positive_signal"), 0.6);
    }
    if aliases.contains("neg") {
        return NarrativeClassification::assigned("concern", Some("negative_signal"), 0.6);
    }

    NarrativeClassification::default()
}

fn attach_derived(
    classification: &mut NarrativeClassification,
    labels: &ContextLabels,
    aliases: &BTreeSet<String>,
    section: Option<&str>,
    text: &str,
) {
    let narrative_type = classification.narrative_type.clone();
    match narrative_type.as_deref() {
        Some("safety") => {
            let posture = derive_risk_posture(labels, section);
            if classification.narrative_subtype.is_none() {
                let name = posture.as_deref().unwrap_or("acknowledgment");
                classification.narrative_subtype = Some(format!("safety_{}", name));
            }
            classification.risk_posture = posture;
        }
        Some("comparative") if classification.narrative_subtype.is_none() => {
            if aliases.contains("pos") {
                classification.narrative_subtype = Some("comparative_advantage".to_string());
            } else if aliases.contains("neg") {
                classification.narrative_subtype = Some("comparative_disadvantage".to_string());
            }
        }
        _ => {}
    }
    if narrative_type.is_some() {
        classification.claim_strength = derive_claim_strength(labels, aliases, text);
    }
}

/// Reassurance beats minimization beats acknowledgment; bare risk terms
/// default to acknowledgment. Methods-section sentences carry no posture.
fn derive_risk_posture(labels: &ContextLabels, section: Option<&str>) -> Option<String> {
    if section == Some("methods") {
        return None;
    }
    for posture in ["reassurance", "minimization", "acknowledgment"].iter() {
        if labels.risk_posture_labels.contains(*posture) {
            return Some((*posture).to_string());
        }
    }
    if labels.risk_terms.is_empty() {
        None
    } else {
        Some("acknowledgment".to_string())
    }
}

fn derive_claim_strength(
    labels: &ContextLabels,
    aliases: &BTreeSet<String>,
    text: &str,
) -> Option<String> {
    for tier in ["confirmatory", "suggestive", "exploratory"].iter() {
        if labels.claim_strength_labels.contains(*tier) {
            return Some((*tier).to_string());
        }
    }
    let max_phase = labels
        .trial_phase_terms
        .iter()
        .filter_map(|label| phase_level(label))
        .max();
    match max_phase {
        Some(level) if level >= 3 && !labels.endpoint_terms.is_empty() => {
            return Some("confirmatory".to_string());
        }
        Some(level) if level <= 2 => return Some("exploratory".to_string()),
        Some(_) => return Some("suggestive".to_string()),
        None => {}
    }
    if !labels.endpoint_terms.is_empty() {
        return Some("suggestive".to_string());
    }
    let neutral = aliases.is_empty() || aliases.contains("neu");
    if !neutral && anchors::has_comparative_anchor(text) {
        return Some("suggestive".to_string());
    }
    None
}

/// Numeric phase of a matched phase mention, digits preferred over roman
/// numerals ("phase 3/4" reads as 4).
fn phase_level(label: &str) -> Option<u8> {
    let max_digit = label
        .chars()
        .filter_map(|c| c.to_digit(10))
        .filter(|d| (1..=4).contains(d))
        .max();
    if let Some(digit) = max_digit {
        return Some(digit as u8);
    }
    let lower = label.to_lowercase();
    for (numeral, level) in [("iv", 4u8), ("iii", 3), ("ii", 2), ("i", 1)].iter() {
        if lower.contains(numeral) {
            return Some(*level);
        }
    }
    None
}
