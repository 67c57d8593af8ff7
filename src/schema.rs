//! Narrative schema loading and validation.
//!
//! The schema is a declarative JSON document carrying the term lexicon, the
//! priority-ordered narrative rule table, and the directional phrase patterns.
//! It is loaded once, validated, normalized, compiled, and never mutated
//! afterwards; classifiers receive it by reference (usually behind an `Arc`)
//! so batches can fan out across threads without coordination.
//!
//! Loading fails closed: a missing file, malformed JSON, a rule without a
//! `name`/`narrative_type`, an unknown `requires` category, or an invalid
//! configured regex all abort the run with a [`ConfigError`] before any
//! sentence is processed.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use once_cell::sync::OnceCell;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ConfigError, ConfigResult};
use crate::labels::LabelCategory;
use crate::sections;

const BUILTIN_SCHEMA_JSON: &str = include_str!("../config/narratives.json");

// ── Document shape (raw deserialization) ──

#[derive(Debug, Deserialize)]
struct SchemaDoc {
    #[serde(default)]
    terms: TermsDoc,
    #[serde(default)]
    narratives: Vec<RuleDoc>,
    #[serde(default)]
    directional_patterns: Vec<PatternDoc>,
    /// Optional canonical-section → aliases map merged over the builtin table.
    #[serde(default)]
    section_aliases: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct TermsDoc {
    #[serde(default)]
    comparative_terms: Vec<String>,
    #[serde(default)]
    relationship_patterns: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    risk_terms: Vec<String>,
    #[serde(default)]
    risk_posture_terms: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    study_context_terms: Vec<String>,
    #[serde(default)]
    trial_phase_patterns: Vec<String>,
    #[serde(default)]
    endpoint_terms: Vec<String>,
    #[serde(default)]
    line_of_therapy_terms: Vec<String>,
    #[serde(default)]
    real_world_terms: Vec<String>,
    #[serde(default)]
    access_terms: Vec<String>,
    #[serde(default)]
    claim_strength_terms: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleDoc {
    name: String,
    narrative_type: String,
    #[serde(default)]
    narrative_subtype: Option<String>,
    #[serde(default = "default_rule_confidence")]
    confidence: f64,
    #[serde(default)]
    priority: i64,
    #[serde(default)]
    requires: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    requires_sentiment: Vec<String>,
    #[serde(default)]
    include_sections: Vec<String>,
    #[serde(default)]
    exclude_sections: Vec<String>,
}

fn default_rule_confidence() -> f64 {
    0.5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PatternDoc {
    name: String,
    direction_type: String,
    #[serde(default)]
    subject_role: Option<String>,
    #[serde(default)]
    object_role: Option<String>,
    #[serde(default)]
    priority: i64,
    #[serde(default)]
    phrases: Vec<String>,
    #[serde(default)]
    match_type: MatchType,
}

/// How a directional phrase relates to the two product mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Subject mention ends before the phrase, object mention starts after it.
    Between,
    /// Only the subject mention (before the phrase) is located in text; the
    /// other product is derived as the object.
    Before,
    /// Only the object mention (after the phrase) is located in text; the
    /// other product is derived as the subject.
    After,
}

impl Default for MatchType {
    fn default() -> Self {
        MatchType::Between
    }
}

// ── Validated schema ──

/// Normalized term lexicon. All lists are trimmed, case-folded, deduplicated,
/// and sorted at load time.
#[derive(Debug, Clone, Default)]
pub struct NarrativeTerms {
    pub comparative_terms: Vec<String>,
    pub relationship_patterns: BTreeMap<String, Vec<String>>,
    pub risk_terms: Vec<String>,
    pub risk_posture_terms: BTreeMap<String, Vec<String>>,
    pub study_context_terms: Vec<String>,
    pub trial_phase_patterns: Vec<String>,
    pub endpoint_terms: Vec<String>,
    pub line_of_therapy_terms: Vec<String>,
    pub real_world_terms: Vec<String>,
    pub access_terms: Vec<String>,
    pub claim_strength_terms: BTreeMap<String, Vec<String>>,
}

impl NarrativeTerms {
    fn is_empty(&self) -> bool {
        self.comparative_terms.is_empty()
            && self.relationship_patterns.is_empty()
            && self.risk_terms.is_empty()
            && self.risk_posture_terms.is_empty()
            && self.study_context_terms.is_empty()
            && self.trial_phase_patterns.is_empty()
            && self.endpoint_terms.is_empty()
            && self.line_of_therapy_terms.is_empty()
            && self.real_world_terms.is_empty()
            && self.access_terms.is_empty()
            && self.claim_strength_terms.is_empty()
    }
}

/// One declarative narrative rule. The table is sorted by descending
/// `priority` once at load; evaluation stops at the first rule that both
/// matches structurally and passes its anchor check.
#[derive(Debug, Clone)]
pub struct NarrativeRule {
    pub name: String,
    pub narrative_type: String,
    pub narrative_subtype: Option<String>,
    pub confidence: f64,
    pub priority: i64,
    /// Label category → required values. `"*"` (or an empty set) means the
    /// category only has to be non-empty.
    pub requires: BTreeMap<LabelCategory, BTreeSet<String>>,
    pub requires_sentiment: BTreeSet<String>,
    pub include_sections: BTreeSet<String>,
    pub exclude_sections: BTreeSet<String>,
}

/// One directional trigger pattern, e.g. "preferred over" assigning
/// favored/disfavored roles. Sorted by descending `priority` at load.
#[derive(Debug, Clone)]
pub struct DirectionalPattern {
    pub name: String,
    pub direction_type: String,
    pub subject_role: Option<String>,
    pub object_role: Option<String>,
    pub priority: i64,
    pub phrases: Vec<String>,
    pub match_type: MatchType,
}

/// A single lexicon term compiled to a case-insensitive word-boundary matcher.
#[derive(Debug)]
pub(crate) struct TermMatcher {
    pub(crate) term: String,
    regex: Regex,
}

impl TermMatcher {
    fn compile(context: &str, term: &str) -> ConfigResult<Self> {
        let regex = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
            .case_insensitive(true)
            .build()
            .map_err(|e| ConfigError::Pattern {
                context: context.to_string(),
                pattern: term.to_string(),
                message: e.to_string(),
            })?;
        Ok(TermMatcher {
            term: term.to_string(),
            regex,
        })
    }

    pub(crate) fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Matchers for a labelled term group (e.g. risk posture "reassurance").
#[derive(Debug)]
pub(crate) struct LabelledMatchers {
    pub(crate) label: String,
    pub(crate) matchers: Vec<TermMatcher>,
}

/// All compiled lexicon matchers, built once at load time.
#[derive(Debug, Default)]
pub(crate) struct CategoryMatchers {
    pub(crate) comparative: Vec<TermMatcher>,
    pub(crate) relationship: Vec<LabelledMatchers>,
    pub(crate) risk: Vec<TermMatcher>,
    pub(crate) risk_posture: Vec<LabelledMatchers>,
    pub(crate) study_context: Vec<TermMatcher>,
    pub(crate) trial_phase: Vec<Regex>,
    pub(crate) endpoint: Vec<TermMatcher>,
    pub(crate) line_of_therapy: Vec<TermMatcher>,
    pub(crate) real_world: Vec<TermMatcher>,
    pub(crate) access: Vec<TermMatcher>,
    pub(crate) claim_strength: Vec<LabelledMatchers>,
}

/// The immutable, fully validated narrative schema.
#[derive(Debug)]
pub struct NarrativeSchema {
    pub terms: NarrativeTerms,
    pub rules: Vec<NarrativeRule>,
    pub directional_patterns: Vec<DirectionalPattern>,
    /// Lowercased section alias → canonical section name.
    pub section_aliases: BTreeMap<String, String>,
    pub(crate) matchers: CategoryMatchers,
}

impl NarrativeSchema {
    /// Parse and validate a schema from a JSON string. `origin` only feeds
    /// error messages.
    pub fn from_json(origin: &str, content: &str) -> ConfigResult<NarrativeSchema> {
        let doc: SchemaDoc = serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        NarrativeSchema::from_doc(doc)
    }

    /// The schema shipped with the crate (`config/narratives.json`), parsed
    /// once behind a process-wide guard.
    pub fn builtin() -> ConfigResult<Arc<NarrativeSchema>> {
        static BUILTIN: OnceCell<Arc<NarrativeSchema>> = OnceCell::new();
        let schema = BUILTIN.get_or_try_init(|| {
            NarrativeSchema::from_json("builtin", BUILTIN_SCHEMA_JSON).map(Arc::new)
        })?;
        Ok(Arc::clone(schema))
    }

    fn from_doc(doc: SchemaDoc) -> ConfigResult<NarrativeSchema> {
        let terms = normalize_terms_doc(doc.terms);
        if terms.is_empty() {
            return Err(ConfigError::invalid("schema defines no term categories"));
        }
        if doc.narratives.is_empty() {
            return Err(ConfigError::invalid("schema defines no narrative rules"));
        }

        let mut rules = Vec::with_capacity(doc.narratives.len());
        for rule in doc.narratives {
            rules.push(validate_rule(rule)?);
        }
        // Stable sort: equal priorities keep their configuration order.
        rules.sort_by(|a, b| b.priority.cmp(&a.priority));

        let mut patterns = Vec::with_capacity(doc.directional_patterns.len());
        for pattern in doc.directional_patterns {
            patterns.push(validate_pattern(pattern)?);
        }
        patterns.sort_by(|a, b| b.priority.cmp(&a.priority));

        let matchers = compile_matchers(&terms)?;
        let section_aliases = sections::merge_aliases(&doc.section_aliases);

        debug!(
            rules = rules.len(),
            patterns = patterns.len(),
            "narrative schema validated"
        );
        Ok(NarrativeSchema {
            terms,
            rules,
            directional_patterns: patterns,
            section_aliases,
            matchers,
        })
    }
}

/// Read, parse, and validate a schema file.
pub fn load_schema(path: &Path) -> ConfigResult<Arc<NarrativeSchema>> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let schema = NarrativeSchema::from_json(&path.display().to_string(), &content)?;
    debug!(path = %path.display(), "narrative schema loaded");
    Ok(Arc::new(schema))
}

/// Compute-once cache of schemas keyed by resolved path.
///
/// The lock is held across the load itself, so two threads racing on the same
/// path perform exactly one read and share the resulting `Arc`.
#[derive(Default)]
pub struct SchemaCache {
    entries: Mutex<HashMap<PathBuf, Arc<NarrativeSchema>>>,
}

impl SchemaCache {
    pub fn new() -> Self {
        SchemaCache::default()
    }

    pub fn load(&self, path: &Path) -> ConfigResult<Arc<NarrativeSchema>> {
        let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let mut entries = lock_entries(&self.entries);
        if let Some(found) = entries.get(&resolved) {
            debug!(path = %resolved.display(), "schema cache hit");
            return Ok(Arc::clone(found));
        }
        let schema = load_schema(&resolved)?;
        entries.insert(resolved, Arc::clone(&schema));
        Ok(schema)
    }
}

fn lock_entries(
    entries: &Mutex<HashMap<PathBuf, Arc<NarrativeSchema>>>,
) -> MutexGuard<'_, HashMap<PathBuf, Arc<NarrativeSchema>>> {
    match entries.lock() {
        Ok(guard) => guard,
        // A poisoned cache still holds valid Arcs; keep serving them.
        Err(poisoned) => poisoned.into_inner(),
    }
}

// ── Normalization and validation ──

fn normalize_list(values: &[String]) -> Vec<String> {
    let mut out: Vec<String> = values
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}

fn normalize_set(values: &[String]) -> BTreeSet<String> {
    values
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

fn normalize_map(map: BTreeMap<String, Vec<String>>) -> BTreeMap<String, Vec<String>> {
    map.into_iter()
        .filter_map(|(label, values)| {
            let label = label.trim().to_lowercase();
            let values = normalize_list(&values);
            if label.is_empty() || values.is_empty() {
                None
            } else {
                Some((label, values))
            }
        })
        .collect()
}

fn normalize_terms_doc(doc: TermsDoc) -> NarrativeTerms {
    NarrativeTerms {
        comparative_terms: normalize_list(&doc.comparative_terms),
        relationship_patterns: normalize_map(doc.relationship_patterns),
        risk_terms: normalize_list(&doc.risk_terms),
        risk_posture_terms: normalize_map(doc.risk_posture_terms),
        study_context_terms: normalize_list(&doc.study_context_terms),
        // Regex sources: trimmed and deduplicated but never case-folded,
        // since case handling belongs to the compiled matcher.
        trial_phase_patterns: {
            let mut out: Vec<String> = doc
                .trial_phase_patterns
                .iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect();
            out.sort();
            out.dedup();
            out
        },
        endpoint_terms: normalize_list(&doc.endpoint_terms),
        line_of_therapy_terms: normalize_list(&doc.line_of_therapy_terms),
        real_world_terms: normalize_list(&doc.real_world_terms),
        access_terms: normalize_list(&doc.access_terms),
        claim_strength_terms: normalize_map(doc.claim_strength_terms),
    }
}

fn validate_rule(doc: RuleDoc) -> ConfigResult<NarrativeRule> {
    let name = doc.name.trim().to_string();
    let narrative_type = doc.narrative_type.trim().to_lowercase();
    if name.is_empty() {
        return Err(ConfigError::invalid("narrative rule with empty name"));
    }
    if narrative_type.is_empty() {
        return Err(ConfigError::invalid(format!(
            "narrative rule {:?} has an empty narrative_type",
            name
        )));
    }

    let mut requires = BTreeMap::new();
    for (category, values) in doc.requires {
        let key = category.trim().to_lowercase();
        let category = LabelCategory::from_key(&key).ok_or_else(|| {
            ConfigError::invalid(format!(
                "narrative rule {:?} requires unknown category {:?}",
                name, key
            ))
        })?;
        requires.insert(category, normalize_set(&values));
    }

    Ok(NarrativeRule {
        narrative_subtype: doc
            .narrative_subtype
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty()),
        confidence: doc.confidence.max(0.0).min(1.0),
        priority: doc.priority,
        requires,
        requires_sentiment: normalize_set(&doc.requires_sentiment),
        include_sections: normalize_set(&doc.include_sections),
        exclude_sections: normalize_set(&doc.exclude_sections),
        name,
        narrative_type,
    })
}

fn validate_pattern(doc: PatternDoc) -> ConfigResult<DirectionalPattern> {
    let name = doc.name.trim().to_string();
    let direction_type = doc.direction_type.trim().to_lowercase();
    if name.is_empty() {
        return Err(ConfigError::invalid("directional pattern with empty name"));
    }
    if direction_type.is_empty() {
        return Err(ConfigError::invalid(format!(
            "directional pattern {:?} has an empty direction_type",
            name
        )));
    }
    Ok(DirectionalPattern {
        subject_role: doc
            .subject_role
            .map(|r| r.trim().to_lowercase())
            .filter(|r| !r.is_empty()),
        object_role: doc
            .object_role
            .map(|r| r.trim().to_lowercase())
            .filter(|r| !r.is_empty()),
        priority: doc.priority,
        phrases: normalize_list(&doc.phrases),
        match_type: doc.match_type,
        name,
        direction_type,
    })
}

fn compile_terms(context: &str, terms: &[String]) -> ConfigResult<Vec<TermMatcher>> {
    terms
        .iter()
        .map(|term| TermMatcher::compile(context, term))
        .collect()
}

fn compile_labelled(
    context: &str,
    map: &BTreeMap<String, Vec<String>>,
) -> ConfigResult<Vec<LabelledMatchers>> {
    map.iter()
        .map(|(label, terms)| {
            Ok(LabelledMatchers {
                label: label.clone(),
                matchers: compile_terms(context, terms)?,
            })
        })
        .collect()
}

fn compile_matchers(terms: &NarrativeTerms) -> ConfigResult<CategoryMatchers> {
    let trial_phase = terms
        .trial_phase_patterns
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| ConfigError::Pattern {
                    context: "trial_phase_patterns".to_string(),
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })
        })
        .collect::<ConfigResult<Vec<_>>>()?;

    Ok(CategoryMatchers {
        comparative: compile_terms("comparative_terms", &terms.comparative_terms)?,
        relationship: compile_labelled("relationship_patterns", &terms.relationship_patterns)?,
        risk: compile_terms("risk_terms", &terms.risk_terms)?,
        risk_posture: compile_labelled("risk_posture_terms", &terms.risk_posture_terms)?,
        study_context: compile_terms("study_context_terms", &terms.study_context_terms)?,
        trial_phase,
        endpoint: compile_terms("endpoint_terms", &terms.endpoint_terms)?,
        line_of_therapy: compile_terms("line_of_therapy_terms", &terms.line_of_therapy_terms)?,
        real_world: compile_terms("real_world_terms", &terms.real_world_terms)?,
        access: compile_terms("access_terms", &terms.access_terms)?,
        claim_strength: compile_labelled("claim_strength_terms", &terms.claim_strength_terms)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn minimal_doc() -> serde_json::Value {
        serde_json::json!({
            "terms": { "comparative_terms": ["vs", "versus"] },
            "narratives": [
                { "name": "comparative_any", "narrative_type": "comparative" }
            ]
        })
    }

    fn parse(value: serde_json::Value) -> ConfigResult<NarrativeSchema> {
        NarrativeSchema::from_json("test", &value.to_string())
    }

    #[test]
    fn builtin_schema_parses() {
        let schema = NarrativeSchema::builtin().unwrap();
        assert!(!schema.rules.is_empty());
        assert!(!schema.directional_patterns.is_empty());
        for window in schema.rules.windows(2) {
            assert!(window[0].priority >= window[1].priority);
        }
    }

    #[test]
    fn builtin_is_shared() {
        let a = NarrativeSchema::builtin().unwrap();
        let b = NarrativeSchema::builtin().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_schema(Path::new("/nonexistent/narratives.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = NarrativeSchema::from_json("test", "{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn empty_rule_table_is_rejected() {
        let err = parse(serde_json::json!({
            "terms": { "risk_terms": ["adverse event"] },
            "narratives": []
        }))
        .unwrap_err();
        assert!(err.to_string().contains("no narrative rules"));
    }

    #[test]
    fn empty_lexicon_is_rejected() {
        let err = parse(serde_json::json!({
            "terms": {},
            "narratives": [{ "name": "x", "narrative_type": "safety" }]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("no term categories"));
    }

    #[test]
    fn rule_missing_type_is_rejected() {
        let err = parse(serde_json::json!({
            "terms": { "risk_terms": ["adverse event"] },
            "narratives": [{ "name": "x" }]
        }))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn blank_rule_name_is_rejected() {
        let err = parse(serde_json::json!({
            "terms": { "risk_terms": ["adverse event"] },
            "narratives": [{ "name": "  ", "narrative_type": "safety" }]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("empty name"));
    }

    #[test]
    fn unknown_requires_category_is_rejected() {
        let err = parse(serde_json::json!({
            "terms": { "risk_terms": ["adverse event"] },
            "narratives": [{
                "name": "x",
                "narrative_type": "safety",
                "requires": { "hazard_terms": ["*"] }
            }]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("unknown category"));
    }

    #[test]
    fn unknown_match_type_is_rejected() {
        let mut doc = minimal_doc();
        doc["directional_patterns"] = serde_json::json!([{
            "name": "p",
            "direction_type": "switch",
            "match_type": "around"
        }]);
        assert!(matches!(parse(doc).unwrap_err(), ConfigError::Parse { .. }));
    }

    #[test]
    fn invalid_phase_pattern_is_rejected() {
        let mut doc = minimal_doc();
        doc["terms"]["trial_phase_patterns"] = serde_json::json!(["phase [1-4"]);
        assert!(matches!(
            parse(doc).unwrap_err(),
            ConfigError::Pattern { .. }
        ));
    }

    #[test]
    fn term_lists_are_trimmed_folded_and_deduped() {
        let mut doc = minimal_doc();
        doc["terms"]["comparative_terms"] = serde_json::json!([" VS ", "vs", "Versus", ""]);
        let schema = parse(doc).unwrap();
        assert_eq!(schema.terms.comparative_terms, vec!["versus", "vs"]);
    }

    #[test]
    fn rules_sort_by_priority_descending_and_ties_keep_order() {
        let schema = parse(serde_json::json!({
            "terms": { "comparative_terms": ["vs"] },
            "narratives": [
                { "name": "low", "narrative_type": "evidence", "priority": 1 },
                { "name": "tie_a", "narrative_type": "evidence", "priority": 5 },
                { "name": "tie_b", "narrative_type": "evidence", "priority": 5 },
                { "name": "high", "narrative_type": "evidence", "priority": 9 }
            ]
        }))
        .unwrap();
        let names: Vec<&str> = schema.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["high", "tie_a", "tie_b", "low"]);
    }

    #[test]
    fn confidence_is_clamped() {
        let schema = parse(serde_json::json!({
            "terms": { "comparative_terms": ["vs"] },
            "narratives": [
                { "name": "x", "narrative_type": "evidence", "confidence": 1.4 }
            ]
        }))
        .unwrap();
        assert_eq!(schema.rules[0].confidence, 1.0);
    }

    #[test]
    fn section_aliases_extend_the_builtin_table() {
        let mut doc = minimal_doc();
        doc["section_aliases"] = serde_json::json!({ "results": ["findings"] });
        let schema = parse(doc).unwrap();
        assert_eq!(
            schema.section_aliases.get("findings").map(String::as_str),
            Some("results")
        );
        assert_eq!(
            schema.section_aliases.get("methods").map(String::as_str),
            Some("methods")
        );
    }

    #[test]
    fn cache_returns_the_same_arc_per_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("narratives.json");
        fs::write(&path, minimal_doc().to_string()).unwrap();

        let cache = SchemaCache::new();
        let first = cache.load(&path).unwrap();
        let second = cache.load(&path).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn cache_propagates_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{").unwrap();

        let cache = SchemaCache::new();
        assert!(cache.load(&path).is_err());
    }
}
