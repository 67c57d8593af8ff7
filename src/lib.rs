//! Narrative and directional classification for product-pair sentences.
//!
//! `narralens` takes a sentence known to mention two products and produces a
//! flat classification row: which narrative frame the sentence advances, which
//! product it favors, and whether the sentence shape actually supports the
//! assigned label. Classification never fails; a sentence that matches nothing
//! yields an all-`None` row, and a sentence the guardrail gate rejects yields
//! a skip reason instead of a row.
//!
//! ## Pipeline stages
//!
//! - [`resolve_section`] - Normalizes the section name and strips a leading
//!   inline heading from the sentence text
//! - [`should_classify_pair`] - Guardrail gate over non-claim sentence shapes
//!   (citations, protocol text, headings, bracket-heavy asides)
//! - [`NarrativeSchema::extract_labels`] - Lexicon pass producing
//!   [`ContextLabels`]
//! - [`classify_narrative`] - Priority-ordered rules with type-specific anchor
//!   checks, falling back to a fixed legacy chain
//! - [`classify_directional_roles`] - Per-product roles from directional
//!   phrase geometry
//! - [`validate_narrative_event`] - Advisory invariant check on the assigned
//!   narrative
//! - [`classify_sentence`] - The batch entry point running all of the above
//!
//! ## Usage
//!
//! ```ignore
//! use narralens::{classify_sentence, NarrativeSchema, SentenceOutcome, SentenceRecord};
//!
//! let schema = NarrativeSchema::builtin()?;
//! match classify_sentence(&record, &schema) {
//!     SentenceOutcome::Event(row) => store(*row),
//!     SentenceOutcome::Skipped(reason) => tracing::debug!("skipped: {}", reason),
//! }
//! ```
//!
//! Schemas are data: the builtin lexicon, rule table, and directional patterns
//! ship as JSON and can be replaced wholesale with
//! [`NarrativeSchema::from_json`] or [`load_schema`].

mod anchors;
mod directional;
mod display;
mod errors;
mod event;
mod gate;
mod labels;
mod narrative;
mod schema;
mod sections;
mod verification;

pub use directional::{classify_directional_roles, DirectionalClassification, ProductRoleContext};
pub use display::SentenceEventDisplay;
pub use errors::{ConfigError, ConfigResult};
pub use event::{classify_sentence, SentenceEventRecord, SentenceOutcome, SentenceRecord};
pub use gate::{should_classify, should_classify_pair, GateDecision, GateOutcome, SkipReason};
pub use labels::{ContextLabels, LabelCategory};
pub use narrative::{classify_narrative, NarrativeClassification};
pub use schema::{
    load_schema, DirectionalPattern, MatchType, NarrativeRule, NarrativeSchema, NarrativeTerms,
    SchemaCache,
};
pub use sections::{leading_heading, normalize_section, resolve_section};
pub use verification::{validate_narrative_event, InvariantReason, NarrativeValidation};

#[cfg(test)]
mod tests {
    mod custom_schema;
    mod direction_roles;
    mod document_flow;
}
