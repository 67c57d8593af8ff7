//! Context label extraction.
//!
//! Matches the loaded lexicon against a sentence and returns the structured
//! label sets the rule engine consumes, together with a `matched_terms` audit
//! map and a flat `triggered_rules` trace. Extraction is a pure function of
//! the text and the schema.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::schema::{LabelledMatchers, NarrativeSchema, TermMatcher};

/// The label categories a narrative rule may constrain via `requires`.
///
/// Declaration order is the canonical reporting order used by
/// [`ContextLabels::triggered_rules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelCategory {
    ComparativeTerms,
    RelationshipTypes,
    RiskTerms,
    RiskPostureLabels,
    StudyContext,
    TrialPhaseTerms,
    EndpointTerms,
    LineOfTherapyTerms,
    RealWorldTerms,
    AccessTerms,
    ClaimStrengthLabels,
}

impl LabelCategory {
    pub const ALL: [LabelCategory; 11] = [
        LabelCategory::ComparativeTerms,
        LabelCategory::RelationshipTypes,
        LabelCategory::RiskTerms,
        LabelCategory::RiskPostureLabels,
        LabelCategory::StudyContext,
        LabelCategory::TrialPhaseTerms,
        LabelCategory::EndpointTerms,
        LabelCategory::LineOfTherapyTerms,
        LabelCategory::RealWorldTerms,
        LabelCategory::AccessTerms,
        LabelCategory::ClaimStrengthLabels,
    ];

    /// The snake_case key used in config files and JSON output columns.
    pub fn key(&self) -> &'static str {
        match self {
            LabelCategory::ComparativeTerms => "comparative_terms",
            LabelCategory::RelationshipTypes => "relationship_types",
            LabelCategory::RiskTerms => "risk_terms",
            LabelCategory::RiskPostureLabels => "risk_posture_labels",
            LabelCategory::StudyContext => "study_context",
            LabelCategory::TrialPhaseTerms => "trial_phase_terms",
            LabelCategory::EndpointTerms => "endpoint_terms",
            LabelCategory::LineOfTherapyTerms => "line_of_therapy_terms",
            LabelCategory::RealWorldTerms => "real_world_terms",
            LabelCategory::AccessTerms => "access_terms",
            LabelCategory::ClaimStrengthLabels => "claim_strength_labels",
        }
    }

    pub fn from_key(key: &str) -> Option<LabelCategory> {
        LabelCategory::ALL.iter().copied().find(|c| c.key() == key)
    }
}

/// All labels extracted from one sentence. Sets iterate in sorted order, so
/// identical inputs always serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContextLabels {
    pub comparative_terms: BTreeSet<String>,
    pub relationship_types: BTreeSet<String>,
    pub risk_terms: BTreeSet<String>,
    pub risk_posture_labels: BTreeSet<String>,
    pub study_context: BTreeSet<String>,
    pub trial_phase_terms: BTreeSet<String>,
    pub endpoint_terms: BTreeSet<String>,
    pub line_of_therapy_terms: BTreeSet<String>,
    pub real_world_terms: BTreeSet<String>,
    pub access_terms: BTreeSet<String>,
    pub claim_strength_labels: BTreeSet<String>,
    /// Category key → matched lexicon terms, for audit. Only non-empty
    /// categories appear.
    pub matched_terms: BTreeMap<String, Vec<String>>,
    /// Category keys that fired, in canonical category order.
    pub triggered_rules: Vec<String>,
}

impl ContextLabels {
    /// The label set for one category.
    pub fn category(&self, category: LabelCategory) -> &BTreeSet<String> {
        match category {
            LabelCategory::ComparativeTerms => &self.comparative_terms,
            LabelCategory::RelationshipTypes => &self.relationship_types,
            LabelCategory::RiskTerms => &self.risk_terms,
            LabelCategory::RiskPostureLabels => &self.risk_posture_labels,
            LabelCategory::StudyContext => &self.study_context,
            LabelCategory::TrialPhaseTerms => &self.trial_phase_terms,
            LabelCategory::EndpointTerms => &self.endpoint_terms,
            LabelCategory::LineOfTherapyTerms => &self.line_of_therapy_terms,
            LabelCategory::RealWorldTerms => &self.real_world_terms,
            LabelCategory::AccessTerms => &self.access_terms,
            LabelCategory::ClaimStrengthLabels => &self.claim_strength_labels,
        }
    }

    /// True when no category matched anything.
    pub fn is_empty(&self) -> bool {
        LabelCategory::ALL
            .iter()
            .all(|c| self.category(*c).is_empty())
    }

    fn finish(mut self) -> ContextLabels {
        for category in LabelCategory::ALL.iter() {
            if !self.category(*category).is_empty() {
                self.triggered_rules.push(category.key().to_string());
            }
        }
        self
    }
}

impl NarrativeSchema {
    /// Extract every context label the lexicon recognizes in `text`.
    pub fn extract_labels(&self, text: &str) -> ContextLabels {
        let mut labels = ContextLabels::default();
        let mut matched: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let m = &self.matchers;

        collect_plain(
            text,
            &m.comparative,
            LabelCategory::ComparativeTerms,
            &mut labels.comparative_terms,
            &mut matched,
        );
        collect_labelled(
            text,
            &m.relationship,
            LabelCategory::RelationshipTypes,
            &mut labels.relationship_types,
            &mut matched,
        );
        collect_plain(
            text,
            &m.risk,
            LabelCategory::RiskTerms,
            &mut labels.risk_terms,
            &mut matched,
        );
        collect_labelled(
            text,
            &m.risk_posture,
            LabelCategory::RiskPostureLabels,
            &mut labels.risk_posture_labels,
            &mut matched,
        );
        collect_plain(
            text,
            &m.study_context,
            LabelCategory::StudyContext,
            &mut labels.study_context,
            &mut matched,
        );
        collect_plain(
            text,
            &m.endpoint,
            LabelCategory::EndpointTerms,
            &mut labels.endpoint_terms,
            &mut matched,
        );
        collect_plain(
            text,
            &m.line_of_therapy,
            LabelCategory::LineOfTherapyTerms,
            &mut labels.line_of_therapy_terms,
            &mut matched,
        );
        collect_plain(
            text,
            &m.real_world,
            LabelCategory::RealWorldTerms,
            &mut labels.real_world_terms,
            &mut matched,
        );
        collect_plain(
            text,
            &m.access,
            LabelCategory::AccessTerms,
            &mut labels.access_terms,
            &mut matched,
        );
        collect_labelled(
            text,
            &m.claim_strength,
            LabelCategory::ClaimStrengthLabels,
            &mut labels.claim_strength_labels,
            &mut matched,
        );

        // Phase mentions are their own category and also count as study
        // context, so phase-only sentences still carry evidence signal.
        for regex in &m.trial_phase {
            for hit in regex.find_iter(text) {
                let term = hit.as_str().trim().to_lowercase();
                if term.is_empty() {
                    continue;
                }
                labels.study_context.insert(term.clone());
                labels.trial_phase_terms.insert(term.clone());
                matched
                    .entry(LabelCategory::TrialPhaseTerms.key().to_string())
                    .or_default()
                    .insert(term.clone());
                matched
                    .entry(LabelCategory::StudyContext.key().to_string())
                    .or_default()
                    .insert(term);
            }
        }

        labels.matched_terms = matched
            .into_iter()
            .map(|(key, terms)| (key, terms.into_iter().collect()))
            .collect();
        labels.finish()
    }
}

fn collect_plain(
    text: &str,
    matchers: &[TermMatcher],
    category: LabelCategory,
    out: &mut BTreeSet<String>,
    matched: &mut BTreeMap<String, BTreeSet<String>>,
) {
    for matcher in matchers {
        if matcher.is_match(text) {
            out.insert(matcher.term.clone());
            matched
                .entry(category.key().to_string())
                .or_default()
                .insert(matcher.term.clone());
        }
    }
}

fn collect_labelled(
    text: &str,
    groups: &[LabelledMatchers],
    category: LabelCategory,
    out: &mut BTreeSet<String>,
    matched: &mut BTreeMap<String, BTreeSet<String>>,
) {
    for group in groups {
        for matcher in &group.matchers {
            if matcher.is_match(text) {
                out.insert(group.label.clone());
                matched
                    .entry(category.key().to_string())
                    .or_default()
                    .insert(matcher.term.clone());
            }
        }
    }
}
