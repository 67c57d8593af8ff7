//! Declarative fixture cases for classification regression tests.
//!
//! A fixture file is a TOML document holding a list of `[[case]]` tables.
//! Each case describes one input sentence plus the subset of row columns it
//! pins down; expectation fields left unset are not compared.

use narralens::SentenceRecord;
use serde::Deserialize;

/// One fixture file: a named batch of cases.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureFile {
    #[serde(default, rename = "case")]
    pub cases: Vec<FixtureCase>,
}

/// One sentence plus its pinned expectations.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureCase {
    pub name: String,
    pub text: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default = "default_product_a")]
    pub product_a: String,
    #[serde(default)]
    pub product_a_alias: Option<String>,
    #[serde(default = "default_product_b")]
    pub product_b: String,
    #[serde(default)]
    pub product_b_alias: Option<String>,
    #[serde(default)]
    pub expect: Expectation,
}

fn default_product_a() -> String {
    "DrugX".to_string()
}

fn default_product_b() -> String {
    "DrugY".to_string()
}

/// Row columns a case pins down.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Expectation {
    /// Expected skip reason code; set when the case should not yield a row.
    #[serde(default)]
    pub skipped: Option<String>,
    /// When true, the row must carry no narrative at all.
    #[serde(default)]
    pub unclassified: bool,
    #[serde(default)]
    pub narrative_type: Option<String>,
    #[serde(default)]
    pub narrative_subtype: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub claim_strength: Option<String>,
    #[serde(default)]
    pub risk_posture: Option<String>,
    #[serde(default)]
    pub direction_type: Option<String>,
    #[serde(default)]
    pub product_a_role: Option<String>,
    #[serde(default)]
    pub product_b_role: Option<String>,
    #[serde(default)]
    pub invariant_ok: Option<bool>,
}

impl FixtureCase {
    /// The input record this case feeds to the classifier.
    pub fn record(&self, doc_id: &str) -> SentenceRecord {
        SentenceRecord {
            doc_id: doc_id.to_string(),
            sentence_id: self.name.clone(),
            product_a: self.product_a.clone(),
            product_a_alias: self.product_a_alias.clone(),
            product_b: self.product_b.clone(),
            product_b_alias: self.product_b_alias.clone(),
            sentence_text: self.text.clone(),
            section: self.section.clone(),
            sentiment_label: self.sentiment.clone(),
        }
    }
}
