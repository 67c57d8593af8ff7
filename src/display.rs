//! Compact textual rendering of classification outcomes.
//!
//! One line per populated field, for trace logs and snapshot tests. The
//! rendering is lossy (audit JSON is shown verbatim) and not meant to be
//! parsed back.

use std::fmt;

use crate::event::{SentenceEventRecord, SentenceOutcome};

/// Human-readable view of a [`SentenceOutcome`].
pub struct SentenceEventDisplay<'a> {
    outcome: &'a SentenceOutcome,
}

impl<'a> SentenceEventDisplay<'a> {
    pub fn new(outcome: &'a SentenceOutcome) -> SentenceEventDisplay<'a> {
        SentenceEventDisplay { outcome }
    }
}

impl fmt::Display for SentenceEventDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.outcome {
            SentenceOutcome::Skipped(reason) => write!(f, "skipped: {}", reason),
            SentenceOutcome::Event(row) => write_event(f, row),
        }
    }
}

fn write_event(f: &mut fmt::Formatter, row: &SentenceEventRecord) -> fmt::Result {
    writeln!(f, "[{}] {} / {}", row.section, row.product_a, row.product_b)?;
    match &row.narrative_type {
        Some(narrative_type) => {
            write!(f, "╰ narrative {}", narrative_type)?;
            if let Some(subtype) = &row.narrative_subtype {
                write!(f, "/{}", subtype)?;
            }
            if let Some(confidence) = row.narrative_confidence {
                write!(f, " ({:.2})", confidence)?;
            }
            writeln!(f)?;
        }
        None => writeln!(f, "╰ narrative none")?,
    }
    if let Some(strength) = &row.claim_strength {
        writeln!(f, "╰ strength {}", strength)?;
    }
    if let Some(posture) = &row.risk_posture {
        writeln!(f, "╰ posture {}", posture)?;
    }
    if let Some(direction) = &row.direction_type {
        write!(f, "╰ direction {}", direction)?;
        if let Some(role) = &row.product_a_role {
            write!(f, " {}={}", row.product_a, role)?;
        }
        if let Some(role) = &row.product_b_role {
            write!(f, " {}={}", row.product_b, role)?;
        }
        if let Some(triggers) = &row.direction_triggers {
            write!(f, " via {}", triggers)?;
        }
        writeln!(f)?;
    }
    for (name, column) in [
        ("comparative", &row.comparative_terms),
        ("relationships", &row.relationship_types),
        ("risk", &row.risk_terms),
        ("study", &row.study_context),
    ]
    .iter()
    {
        if let Some(values) = column {
            writeln!(f, "╰ {} {}", name, values)?;
        }
    }
    match row.narrative_invariant_ok {
        Some(true) => writeln!(f, "╰ invariant ok")?,
        Some(false) => writeln!(
            f,
            "╰ invariant failed ({})",
            row.narrative_invariant_reason
                .as_deref()
                .unwrap_or("unspecified")
        )?,
        None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{classify_sentence, SentenceRecord};
    use crate::schema::NarrativeSchema;

    fn classify(text: &str, section: Option<&str>, sentiment: Option<&str>) -> SentenceOutcome {
        let schema = NarrativeSchema::builtin().unwrap();
        let record = SentenceRecord {
            doc_id: "doc-1".to_string(),
            sentence_id: "sent-1".to_string(),
            product_a: "DrugX".to_string(),
            product_a_alias: None,
            product_b: "DrugY".to_string(),
            product_b_alias: None,
            sentence_text: text.to_string(),
            section: section.map(str::to_string),
            sentiment_label: sentiment.map(str::to_string),
        };
        classify_sentence(&record, &schema)
    }

    #[test]
    fn renders_a_classified_row() {
        let outcome = classify(
            "DrugX was superior to DrugY for reducing mortality.",
            Some("results"),
            Some("POS"),
        );
        insta::assert_snapshot!(SentenceEventDisplay::new(&outcome), @r###"
        [results] DrugX / DrugY
        ╰ narrative comparative/comparative_efficacy_advantage (0.70)
        ╰ strength suggestive
        ╰ direction alternative DrugX=favored DrugY=disfavored via ["superior to"]
        ╰ comparative superior
        ╰ invariant ok
        "###);
    }

    #[test]
    fn renders_an_unclassified_row() {
        let outcome = classify(
            "Clinicians discussed DrugX and DrugY at the congress.",
            Some("discussion"),
            None,
        );
        insta::assert_snapshot!(SentenceEventDisplay::new(&outcome), @r###"
        [discussion] DrugX / DrugY
        ╰ narrative none
        "###);
    }

    #[test]
    fn renders_a_skip() {
        let outcome = classify(
            "(Smith et al., 2020) DrugX and DrugY observations.",
            Some("results"),
            None,
        );
        insta::assert_snapshot!(SentenceEventDisplay::new(&outcome), @"skipped: citation_only");
    }
}
