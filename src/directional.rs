//! Directional role classification.
//!
//! Finds directional trigger phrases ("preferred over", "switched to") and
//! decides which of the two co-mentioned products plays which competitive
//! role, by proximity of product mention spans to the trigger. Patterns
//! evaluate in priority order and the first occurrence that assigns a role
//! to either product wins, the same first-match discipline the rule engine
//! uses.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::schema::{DirectionalPattern, MatchType, NarrativeSchema};

/// The two products under discussion in a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRoleContext {
    /// Normalized product name used for grouping.
    pub canonical: String,
    /// Literal surface form to also look for in text, if different.
    pub alias: Option<String>,
}

impl ProductRoleContext {
    pub fn new(canonical: impl Into<String>) -> ProductRoleContext {
        ProductRoleContext {
            canonical: canonical.into(),
            alias: None,
        }
    }

    pub fn with_alias(canonical: impl Into<String>, alias: impl Into<String>) -> ProductRoleContext {
        ProductRoleContext {
            canonical: canonical.into(),
            alias: Some(alias.into()),
        }
    }
}

/// Outcome of directional classification. `triggers` records every phrase
/// occurrence examined, in evaluation order, ending with the winner when a
/// direction was assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DirectionalClassification {
    pub direction_type: Option<String>,
    pub product_a_role: Option<String>,
    pub product_b_role: Option<String>,
    pub triggers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Which {
    A,
    B,
}

impl Which {
    fn other(self) -> Which {
        match self {
            Which::A => Which::B,
            Which::B => Which::A,
        }
    }
}

/// Byte spans of every canonical/alias occurrence in the lowercased text.
pub(crate) fn mention_spans(lower_text: &str, product: &ProductRoleContext) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut needles = vec![product.canonical.trim().to_lowercase()];
    if let Some(alias) = &product.alias {
        needles.push(alias.trim().to_lowercase());
    }
    for needle in needles {
        if needle.is_empty() {
            continue;
        }
        for (start, found) in lower_text.match_indices(needle.as_str()) {
            spans.push((start, start + found.len()));
        }
    }
    spans.sort();
    spans.dedup();
    spans
}

/// Assign competitive roles for one sentence.
pub fn classify_directional_roles(
    text: &str,
    product_a: &ProductRoleContext,
    product_b: &ProductRoleContext,
    schema: &NarrativeSchema,
) -> DirectionalClassification {
    let lower = text.to_lowercase();
    let spans_a = mention_spans(&lower, product_a);
    let spans_b = mention_spans(&lower, product_b);
    let mut out = DirectionalClassification::default();
    if spans_a.is_empty() && spans_b.is_empty() {
        return out;
    }

    for pattern in &schema.directional_patterns {
        for phrase in &pattern.phrases {
            for (start, found) in lower.match_indices(phrase.as_str()) {
                let end = start + found.len();
                out.triggers.push(phrase.clone());
                if let Some((role_a, role_b)) =
                    assign_roles(pattern, start, end, &spans_a, &spans_b)
                {
                    trace!(
                        pattern = %pattern.name,
                        phrase = %phrase,
                        "directional roles assigned"
                    );
                    out.direction_type = Some(pattern.direction_type.clone());
                    out.product_a_role = role_a;
                    out.product_b_role = role_b;
                    return out;
                }
            }
        }
    }
    out
}

fn assign_roles(
    pattern: &DirectionalPattern,
    match_start: usize,
    match_end: usize,
    spans_a: &[(usize, usize)],
    spans_b: &[(usize, usize)],
) -> Option<(Option<String>, Option<String>)> {
    let (subject, object) = match pattern.match_type {
        MatchType::Between => {
            let subject = nearest_before(spans_a, spans_b, match_start);
            let mut object = nearest_after(spans_a, spans_b, match_end);
            // A lone product mentioned on both sides carries no direction.
            if subject.is_some() && subject == object {
                object = None;
            }
            (subject, object)
        }
        MatchType::Before => {
            let subject = nearest_before(spans_a, spans_b, match_start)?;
            (Some(subject), Some(subject.other()))
        }
        MatchType::After => {
            let object = nearest_after(spans_a, spans_b, match_end)?;
            (Some(object.other()), Some(object))
        }
    };

    let mut role_a = None;
    let mut role_b = None;
    if let (Some(which), Some(role)) = (subject, pattern.subject_role.as_ref()) {
        match which {
            Which::A => role_a = Some(role.clone()),
            Which::B => role_b = Some(role.clone()),
        }
    }
    if let (Some(which), Some(role)) = (object, pattern.object_role.as_ref()) {
        match which {
            Which::A => role_a = role_a.or_else(|| Some(role.clone())),
            Which::B => role_b = role_b.or_else(|| Some(role.clone())),
        }
    }
    if role_a.is_none() && role_b.is_none() {
        None
    } else {
        Some((role_a, role_b))
    }
}

/// The product whose mention ends nearest before `position`.
fn nearest_before(
    spans_a: &[(usize, usize)],
    spans_b: &[(usize, usize)],
    position: usize,
) -> Option<Which> {
    let best_a = spans_a.iter().filter(|(_, end)| *end <= position).last();
    let best_b = spans_b.iter().filter(|(_, end)| *end <= position).last();
    match (best_a, best_b) {
        (Some(a), Some(b)) => {
            if a.1 >= b.1 {
                Some(Which::A)
            } else {
                Some(Which::B)
            }
        }
        (Some(_), None) => Some(Which::A),
        (None, Some(_)) => Some(Which::B),
        (None, None) => None,
    }
}

/// The product whose mention starts nearest after `position`.
fn nearest_after(
    spans_a: &[(usize, usize)],
    spans_b: &[(usize, usize)],
    position: usize,
) -> Option<Which> {
    let best_a = spans_a.iter().find(|(start, _)| *start >= position);
    let best_b = spans_b.iter().find(|(start, _)| *start >= position);
    match (best_a, best_b) {
        (Some(a), Some(b)) => {
            if a.0 <= b.0 {
                Some(Which::A)
            } else {
                Some(Which::B)
            }
        }
        (Some(_), None) => Some(Which::A),
        (None, Some(_)) => Some(Which::B),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::NarrativeSchema;
    use std::sync::Arc;

    fn schema() -> Arc<NarrativeSchema> {
        NarrativeSchema::builtin().unwrap()
    }

    #[test]
    fn switch_roles_follow_the_trigger() {
        let insulin = ProductRoleContext::new("insulin");
        let semaglutide = ProductRoleContext::new("semaglutide");
        let out = classify_directional_roles(
            "Participants switched to semaglutide from insulin after 12 weeks.",
            &insulin,
            &semaglutide,
            &schema(),
        );
        assert_eq!(out.direction_type.as_deref(), Some("switch"));
        assert_eq!(out.product_a_role.as_deref(), Some("switch_source"));
        assert_eq!(out.product_b_role.as_deref(), Some("switch_destination"));
        assert!(out.triggers.contains(&"switched to".to_string()));
    }

    #[test]
    fn preference_assigns_favored_and_disfavored() {
        let a = ProductRoleContext::new("drugx");
        let b = ProductRoleContext::new("drugy");
        let out = classify_directional_roles(
            "DrugX was preferred over DrugY in recent guidelines.",
            &a,
            &b,
            &schema(),
        );
        assert_eq!(out.direction_type.as_deref(), Some("alternative"));
        assert_eq!(out.product_a_role.as_deref(), Some("favored"));
        assert_eq!(out.product_b_role.as_deref(), Some("disfavored"));
    }

    #[test]
    fn swapping_products_swaps_roles() {
        let text = "DrugX was preferred over DrugY in recent guidelines.";
        let a = ProductRoleContext::new("drugx");
        let b = ProductRoleContext::new("drugy");
        let swapped = classify_directional_roles(text, &b, &a, &schema());
        assert_eq!(swapped.product_a_role.as_deref(), Some("disfavored"));
        assert_eq!(swapped.product_b_role.as_deref(), Some("favored"));
    }

    #[test]
    fn aliases_count_as_mentions() {
        let a = ProductRoleContext::with_alias("semaglutide", "Ozempic");
        let b = ProductRoleContext::new("insulin");
        let out = classify_directional_roles(
            "Most patients switched to Ozempic from insulin.",
            &a,
            &b,
            &schema(),
        );
        assert_eq!(out.product_a_role.as_deref(), Some("switch_destination"));
        assert_eq!(out.product_b_role.as_deref(), Some("switch_source"));
    }

    #[test]
    fn trailing_preference_derives_the_other_product() {
        let a = ProductRoleContext::new("drugx");
        let b = ProductRoleContext::new("drugy");
        let out = classify_directional_roles(
            "Among payers comparing DrugY options, DrugX was preferred.",
            &a,
            &b,
            &schema(),
        );
        assert_eq!(out.direction_type.as_deref(), Some("alternative"));
        assert_eq!(out.product_a_role.as_deref(), Some("favored"));
        assert_eq!(out.product_b_role.as_deref(), Some("disfavored"));
    }

    #[test]
    fn higher_priority_pattern_wins() {
        let a = ProductRoleContext::new("drugx");
        let b = ProductRoleContext::new("drugy");
        let out = classify_directional_roles(
            "DrugX was superior to DrugY, and some patients later switched to DrugY.",
            &a,
            &b,
            &schema(),
        );
        assert_eq!(out.direction_type.as_deref(), Some("alternative"));
        assert_eq!(out.triggers, vec!["superior to".to_string()]);
    }

    #[test]
    fn failed_occurrences_stay_in_the_trigger_audit() {
        let a = ProductRoleContext::new("drugx");
        let b = ProductRoleContext::new("drugy");
        let out = classify_directional_roles(
            "Participants on DrugX switched to placebo midway.",
            &a,
            &b,
            &schema(),
        );
        assert_eq!(out.direction_type, None);
        assert_eq!(out.triggers, vec!["switched to".to_string()]);
    }

    #[test]
    fn no_mentions_mean_no_roles() {
        let a = ProductRoleContext::new("drugx");
        let b = ProductRoleContext::new("drugy");
        let out =
            classify_directional_roles("Metformin was preferred over insulin.", &a, &b, &schema());
        assert_eq!(out.direction_type, None);
        assert!(out.triggers.is_empty());
    }

    #[test]
    fn classification_is_deterministic() {
        let a = ProductRoleContext::with_alias("semaglutide", "Ozempic");
        let b = ProductRoleContext::new("insulin");
        let text = "Ozempic was preferred over insulin and patients switched to Ozempic.";
        let first = classify_directional_roles(text, &a, &b, &schema());
        let second = classify_directional_roles(text, &a, &b, &schema());
        assert_eq!(first, second);
    }
}
