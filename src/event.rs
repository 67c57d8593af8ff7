//! Sentence event assembly.
//!
//! The batch-facing entry point. One upstream co-mention record goes through
//! section normalization, the guardrail gate, label extraction, narrative and
//! directional classification, and invariant validation, and comes out as
//! either a skip verdict or the flat row persisted downstream. Classification
//! never fails: a sentence that earns no decision still produces a row with
//! all-`None` narrative columns.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::directional::{classify_directional_roles, ProductRoleContext};
use crate::gate::{should_classify_pair, SkipReason};
use crate::narrative::{classify_narrative, NarrativeClassification};
use crate::schema::NarrativeSchema;
use crate::sections::resolve_section;
use crate::verification::validate_narrative_event;

/// Fallback section name when neither the record nor the text supplies one.
const UNKNOWN_SECTION: &str = "unknown";

/// One co-mention sentence as delivered by the upstream mention store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SentenceRecord {
    pub doc_id: String,
    pub sentence_id: String,
    pub product_a: String,
    #[serde(default)]
    pub product_a_alias: Option<String>,
    pub product_b: String,
    #[serde(default)]
    pub product_b_alias: Option<String>,
    pub sentence_text: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub sentiment_label: Option<String>,
}

/// The flat classification row for one gated-in sentence. Label columns are
/// comma-joined in sorted order; audit columns are JSON-encoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceEventRecord {
    pub doc_id: String,
    pub sentence_id: String,
    pub product_a: String,
    pub product_b: String,
    pub section: String,
    pub comparative_terms: Option<String>,
    pub relationship_types: Option<String>,
    pub risk_terms: Option<String>,
    pub study_context: Option<String>,
    pub matched_terms: Option<String>,
    pub triggered_rules: Option<String>,
    pub narrative_type: Option<String>,
    pub narrative_subtype: Option<String>,
    pub narrative_confidence: Option<f64>,
    pub claim_strength: Option<String>,
    pub risk_posture: Option<String>,
    pub direction_type: Option<String>,
    pub product_a_role: Option<String>,
    pub product_b_role: Option<String>,
    pub direction_triggers: Option<String>,
    pub narrative_invariant_ok: Option<bool>,
    pub narrative_invariant_reason: Option<String>,
}

/// What became of one input record.
#[derive(Debug, Clone, PartialEq)]
pub enum SentenceOutcome {
    /// The gate excluded the sentence; no row is emitted for it.
    Skipped(SkipReason),
    Event(Box<SentenceEventRecord>),
}

/// Run the full classification flow over one record.
pub fn classify_sentence(record: &SentenceRecord, schema: &NarrativeSchema) -> SentenceOutcome {
    let product_a = product_context(&record.product_a, record.product_a_alias.as_deref());
    let product_b = product_context(&record.product_b, record.product_b_alias.as_deref());

    let (section, cleaned) = resolve_section(
        record.section.as_deref(),
        &record.sentence_text,
        &schema.section_aliases,
    );
    let text = cleaned.as_ref();

    let decision = should_classify_pair(text, section.as_deref(), &product_a, &product_b);
    if let Some(reason) = decision.skip_reason {
        debug!(
            doc_id = %record.doc_id,
            sentence_id = %record.sentence_id,
            reason = %reason,
            "sentence gated out"
        );
        return SentenceOutcome::Skipped(reason);
    }

    let labels = schema.extract_labels(text);

    let mut classification = if decision.reroute_real_world {
        NarrativeClassification::assigned("evidence", Some("real_world"), 0.72)
    } else {
        classify_narrative(
            &labels,
            record.sentiment_label.as_deref(),
            section.as_deref(),
            text,
            schema,
        )
    };
    if decision.confidence_penalty > 0.0 {
        if let Some(confidence) = classification.confidence.as_mut() {
            *confidence = (*confidence - decision.confidence_penalty).max(0.0);
        }
    }

    let directional = classify_directional_roles(text, &product_a, &product_b, schema);
    let validation = validate_narrative_event(&classification, &labels, text, section.as_deref());

    let narrative_assigned = classification.narrative_type.is_some();
    let row = SentenceEventRecord {
        doc_id: record.doc_id.clone(),
        sentence_id: record.sentence_id.clone(),
        product_a: record.product_a.clone(),
        product_b: record.product_b.clone(),
        section: section.unwrap_or_else(|| UNKNOWN_SECTION.to_string()),
        comparative_terms: join_labels(&labels.comparative_terms),
        relationship_types: join_labels(&labels.relationship_types),
        risk_terms: join_labels(&labels.risk_terms),
        study_context: join_labels(&labels.study_context),
        matched_terms: if labels.matched_terms.is_empty() {
            None
        } else {
            encode_json(&labels.matched_terms)
        },
        triggered_rules: if labels.triggered_rules.is_empty() {
            None
        } else {
            encode_json(&labels.triggered_rules)
        },
        narrative_type: classification.narrative_type,
        narrative_subtype: classification.narrative_subtype,
        narrative_confidence: classification.confidence,
        claim_strength: classification.claim_strength,
        risk_posture: classification.risk_posture,
        direction_type: directional.direction_type,
        product_a_role: directional.product_a_role,
        product_b_role: directional.product_b_role,
        direction_triggers: if directional.triggers.is_empty() {
            None
        } else {
            encode_json(&directional.triggers)
        },
        narrative_invariant_ok: if narrative_assigned {
            Some(validation.ok)
        } else {
            None
        },
        narrative_invariant_reason: validation.reason.map(|r| r.as_str().to_string()),
    };
    SentenceOutcome::Event(Box::new(row))
}

fn product_context(canonical: &str, alias: Option<&str>) -> ProductRoleContext {
    match alias {
        Some(alias) => ProductRoleContext::with_alias(canonical, alias),
        None => ProductRoleContext::new(canonical),
    }
}

fn join_labels(labels: &BTreeSet<String>) -> Option<String> {
    if labels.is_empty() {
        None
    } else {
        Some(
            labels
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

/// JSON-encode an audit column. Encoding plain string collections cannot
/// fail; mapping a failure to `None` keeps the row-never-fails contract.
fn encode_json<T: Serialize>(value: &T) -> Option<String> {
    serde_json::to_string(value).ok()
}
