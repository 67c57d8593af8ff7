//! Guardrail gate.
//!
//! Decides whether a sentence is even eligible to carry a narrative claim.
//! The gate is an ordered table of independent pure predicates over the raw
//! text; each returns a [`GateOutcome`]. The first `Skip` is terminal and the
//! sentence is never handed to the rule engine. `Penalize` outcomes accumulate
//! into a confidence penalty, and the utilization predicate reroutes to a
//! fixed real-world-evidence classification instead of skipping.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};
use unicode_segmentation::UnicodeSegmentation;

use crate::anchors;
use crate::directional::{mention_spans, ProductRoleContext};

/// Which predicate excluded the sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Heading,
    ObjectiveStatement,
    StudyDescription,
    ProductsOnlyInBrackets,
    BracketHeavy,
    CitationOnly,
    Definition,
    DisplayReference,
    AnalysisMethod,
    BaselineDescriptor,
    AssociationOnly,
    ProtocolOnly,
    ListStructure,
    EligibilityCriteria,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Heading => "heading",
            SkipReason::ObjectiveStatement => "objective_statement",
            SkipReason::StudyDescription => "study_description",
            SkipReason::ProductsOnlyInBrackets => "products_only_in_brackets",
            SkipReason::BracketHeavy => "bracket_heavy",
            SkipReason::CitationOnly => "citation_only",
            SkipReason::Definition => "definition",
            SkipReason::DisplayReference => "display_reference",
            SkipReason::AnalysisMethod => "analysis_method",
            SkipReason::BaselineDescriptor => "baseline_descriptor",
            SkipReason::AssociationOnly => "association_only",
            SkipReason::ProtocolOnly => "protocol_only",
            SkipReason::ListStructure => "list_structure",
            SkipReason::EligibilityCriteria => "eligibility_criteria",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What one predicate decided about the sentence.
#[derive(Debug, Clone, PartialEq)]
pub enum GateOutcome {
    Pass,
    Skip(SkipReason),
    Penalize(f64),
    /// Utilization-only statement: classify as real-world evidence directly.
    Reroute,
}

/// Aggregated gate verdict for one sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct GateDecision {
    pub skip: bool,
    pub skip_reason: Option<SkipReason>,
    pub confidence_penalty: f64,
    pub reroute_real_world: bool,
}

impl GateDecision {
    fn pass() -> GateDecision {
        GateDecision {
            skip: false,
            skip_reason: None,
            confidence_penalty: 0.0,
            reroute_real_world: false,
        }
    }

    fn skipped(reason: SkipReason) -> GateDecision {
        GateDecision {
            skip: true,
            skip_reason: Some(reason),
            confidence_penalty: 0.0,
            reroute_real_world: false,
        }
    }
}

struct GateInput<'a> {
    text: &'a str,
    section: Option<&'a str>,
    products: Option<(&'a ProductRoleContext, &'a ProductRoleContext)>,
}

/// Evaluation order matters: earlier predicates see the sentence first, and
/// the first skip wins.
const PREDICATES: [fn(&GateInput) -> GateOutcome; 15] = [
    heading_like,
    objective_statement,
    study_description,
    products_only_in_brackets,
    bracket_heavy,
    citation_only,
    definition,
    display_reference,
    analysis_method,
    utilization_only,
    baseline_descriptor,
    association_only,
    protocol_only,
    list_structure,
    eligibility_criteria,
];

/// Gate a sentence without product context.
pub fn should_classify(text: &str, section: Option<&str>) -> GateDecision {
    evaluate(&GateInput {
        text,
        section,
        products: None,
    })
}

/// Gate a sentence, also checking where the two product mentions fall.
pub fn should_classify_pair(
    text: &str,
    section: Option<&str>,
    product_a: &ProductRoleContext,
    product_b: &ProductRoleContext,
) -> GateDecision {
    evaluate(&GateInput {
        text,
        section,
        products: Some((product_a, product_b)),
    })
}

fn evaluate(input: &GateInput) -> GateDecision {
    let mut decision = GateDecision::pass();
    for predicate in PREDICATES.iter() {
        match predicate(input) {
            GateOutcome::Pass => {}
            GateOutcome::Skip(reason) => {
                debug!(reason = reason.as_str(), "sentence gated out");
                return GateDecision::skipped(reason);
            }
            GateOutcome::Penalize(amount) => {
                trace!(amount, "confidence penalty applied");
                decision.confidence_penalty += amount;
            }
            GateOutcome::Reroute => decision.reroute_real_world = true,
        }
    }
    decision
}

fn gate_pattern(source: &str) -> Regex {
    Regex::new(source).expect("invalid builtin gate pattern")
}

static OBJECTIVE: Lazy<Regex> = Lazy::new(|| {
    gate_pattern(
        r"(?i)^(?:the\s+)?(?:primary\s+|secondary\s+|main\s+|key\s+)?(?:aims?|objectives?|purpose|goals?)\s+(?:of|was|were|is|are)\b|^(?:we|this\s+(?:study|trial|analysis|review))\s+aim(?:ed|s)?\s+to\b|^to\s+(?:evaluate|assess|investigate|compare|examine|determine|describe|characteri[sz]e)\b",
    )
});

static STUDY_INTRO: Lazy<Regex> = Lazy::new(|| {
    gate_pattern(
        r"(?i)^(?:this|the\s+(?:present|current)|our)\s+(?:study|trial|analysis|review|cohort|meta-analysis)\b|^we\s+(?:conducted|performed|undertook|analy[sz]ed|evaluated|investigated|assessed|examined|compared|included|enrolled|reviewed|identified)\b",
    )
});

static CITATION: Lazy<Regex> = Lazy::new(|| {
    gate_pattern(
        r"(?i)\bet\s+al\b[.,]?\s*,?\s*\(?(?:19|20)\d{2}|\(\s*[a-z][a-z'-]+(?:\s+(?:and|&)\s+[a-z][a-z'-]+)?\s*,\s*(?:19|20)\d{2}[a-z]?\s*\)|\[\s*\d+(?:\s*[,-]\s*\d+)*\s*\]",
    )
});

static DEFINITION: Lazy<Regex> = Lazy::new(|| {
    gate_pattern(
        r"(?i)\b(?:is|are|was|were)\s+defined\s+as\b|\brefers\s+to\b|\bis\s+an?\s+(?:measure|term|score|scale|index|composite)\b",
    )
});

static ANALYSIS_METHOD: Lazy<Regex> = Lazy::new(|| {
    gate_pattern(
        r"(?i)\b(?:cox|logistic|linear|poisson|negative\s+binomial)\s+(?:proportional\s+hazards?\s+)?(?:regression|models?)\b|\bproportional\s+hazards\s+(?:regression|models?)\b|\bkaplan[-\s]meier\b|\bpropensity[-\s]scores?\b|\binverse\s+probability\b|\bsensitivity\s+analys[ei]s\b|\bmodels?\s+(?:was|were)\s+(?:adjusted|fitted|used|constructed)\b|\banalys[ei]s\s+(?:was|were)\s+(?:performed|conducted|repeated)\b|\b(?:was|were)\s+adjusted\s+for\b",
    )
});

static UTILIZATION: Lazy<Regex> = Lazy::new(|| {
    gate_pattern(
        r"(?i)\bprescri(?:bing|bed|bers?|ptions?)\b|\buptake\b|\butili[sz]ation\b|\busage\b|\bmarket\s+share\b|\bdispens(?:ed|ing)\b|\btreatment\s+patterns?\b|\binitiation\s+rates?\b|\badoption\b",
    )
});

static PATIENT_OUTCOME_WORD: Lazy<Regex> = Lazy::new(|| {
    gate_pattern(r"(?i)\b(?:adverse|safety|tolerability|risks?|efficacy|effectiveness|harms?)\b")
});

static ASSOCIATION: Lazy<Regex> = Lazy::new(|| {
    gate_pattern(
        r"(?i)\bassociations?\s+(?:between|of|with)\b|\b(?:factors?|variables?|predictors?|covariates?)\s+(?:independently\s+)?associated\s+with\b|\bcorrelat(?:ion|ions|ed)\s+(?:between|with)\b",
    )
});

static PROTOCOL: Lazy<Regex> = Lazy::new(|| {
    gate_pattern(
        r"(?i)\b(?:patients?|participants?|subjects?|individuals?)\s+(?:was|were)\s+(?:randomi[sz]ed|randomly\s+assigned|assigned|allocated|recruited|enrolled|screened|stratified)\b|\brandomi[sz]ation\b|\bstudy\s+protocol\b|\breceived\s+either\b|\binformed\s+consent\b",
    )
});

static NUMERIC_ANCHOR: Lazy<Regex> = Lazy::new(|| {
    gate_pattern(
        r"(?i)\d+(?:\.\d+)?\s*%|\bp\s*[<=>]\s*0?\.\d+|\bn\s*=\s*\d+|\b(?:hr|rr|ci)\b\s*[=:]?\s*\d|\b\d+(?:\.\d+)?\s*(?:mg|g|kg|ml|mmol|mmhg|weeks?|months?|years?|days?)\b",
    )
});

static ELIGIBILITY: Lazy<Regex> = Lazy::new(|| {
    gate_pattern(
        r"(?i)\beligib(?:le|ility)\b|\binclusion\s+criteria\b|\bexclusion\s+criteria\b|\bcovariates?\b|\bconcomitant\s+(?:use|medications?)\b|\bwashout\b",
    )
});

fn heading_like(input: &GateInput) -> GateOutcome {
    if let Some(section) = input.section {
        if section.eq_ignore_ascii_case("title") {
            return GateOutcome::Skip(SkipReason::Heading);
        }
    }
    let trimmed = input.text.trim();
    if trimmed.is_empty() || trimmed.ends_with(':') {
        return GateOutcome::Skip(SkipReason::Heading);
    }
    let words: Vec<&str> = trimmed.unicode_words().collect();
    let letters: Vec<char> = trimmed.chars().filter(|c| c.is_alphabetic()).collect();
    if !letters.is_empty() && letters.iter().all(|c| c.is_uppercase()) && words.len() <= 12 {
        return GateOutcome::Skip(SkipReason::Heading);
    }
    let terminal = matches!(trimmed.chars().last(), Some('.') | Some('!') | Some('?'));
    if !terminal && words.len() <= 8 {
        let capitalized = words
            .iter()
            .filter(|w| {
                w.chars()
                    .next()
                    .map_or(false, |c| c.is_uppercase() || c.is_ascii_digit())
            })
            .count();
        if capitalized * 2 >= words.len() {
            return GateOutcome::Skip(SkipReason::Heading);
        }
    }
    GateOutcome::Pass
}

fn objective_statement(input: &GateInput) -> GateOutcome {
    if OBJECTIVE.is_match(input.text.trim()) {
        GateOutcome::Skip(SkipReason::ObjectiveStatement)
    } else {
        GateOutcome::Pass
    }
}

fn study_description(input: &GateInput) -> GateOutcome {
    if STUDY_INTRO.is_match(input.text.trim()) && !anchors::has_result_statement(input.text) {
        GateOutcome::Skip(SkipReason::StudyDescription)
    } else {
        GateOutcome::Pass
    }
}

fn products_only_in_brackets(input: &GateInput) -> GateOutcome {
    let (product_a, product_b) = match input.products {
        Some(pair) => pair,
        None => return GateOutcome::Pass,
    };
    let lower = input.text.to_lowercase();
    let spans_a = mention_spans(&lower, product_a);
    let spans_b = mention_spans(&lower, product_b);
    if spans_a.is_empty() || spans_b.is_empty() {
        return GateOutcome::Pass;
    }
    let brackets = bracket_spans(&lower);
    let bracketed = |span: &(usize, usize)| {
        brackets
            .iter()
            .any(|(start, end)| span.0 >= *start && span.1 <= *end)
    };
    if spans_a.iter().all(bracketed) && spans_b.iter().all(bracketed) {
        GateOutcome::Skip(SkipReason::ProductsOnlyInBrackets)
    } else {
        GateOutcome::Pass
    }
}

fn bracket_heavy(input: &GateInput) -> GateOutcome {
    let ratio = bracketed_char_ratio(input.text);
    if ratio >= 0.6 {
        GateOutcome::Skip(SkipReason::BracketHeavy)
    } else if ratio >= 0.4 {
        GateOutcome::Penalize(0.2)
    } else {
        GateOutcome::Pass
    }
}

fn citation_only(input: &GateInput) -> GateOutcome {
    if !CITATION.is_match(input.text) {
        return GateOutcome::Pass;
    }
    let outside = text_outside_brackets(input.text);
    if anchors::has_result_statement(&outside) {
        GateOutcome::Pass
    } else {
        GateOutcome::Skip(SkipReason::CitationOnly)
    }
}

fn definition(input: &GateInput) -> GateOutcome {
    if DEFINITION.is_match(input.text) {
        GateOutcome::Skip(SkipReason::Definition)
    } else {
        GateOutcome::Pass
    }
}

fn display_reference(input: &GateInput) -> GateOutcome {
    if anchors::is_display_reference_only(input.text) {
        GateOutcome::Skip(SkipReason::DisplayReference)
    } else {
        GateOutcome::Pass
    }
}

fn analysis_method(input: &GateInput) -> GateOutcome {
    if ANALYSIS_METHOD.is_match(input.text) && !anchors::has_directional_term(input.text) {
        GateOutcome::Skip(SkipReason::AnalysisMethod)
    } else {
        GateOutcome::Pass
    }
}

fn utilization_only(input: &GateInput) -> GateOutcome {
    if UTILIZATION.is_match(input.text)
        && !anchors::has_outcome_signal(input.text)
        && !PATIENT_OUTCOME_WORD.is_match(input.text)
    {
        GateOutcome::Reroute
    } else {
        GateOutcome::Pass
    }
}

fn baseline_descriptor(input: &GateInput) -> GateOutcome {
    if anchors::is_baseline_descriptor(input.text) {
        GateOutcome::Skip(SkipReason::BaselineDescriptor)
    } else {
        GateOutcome::Pass
    }
}

fn association_only(input: &GateInput) -> GateOutcome {
    if let Some(found) = ASSOCIATION.find(input.text) {
        let tail = &input.text[found.end()..];
        if !anchors::has_result_statement(tail) && !anchors::has_directional_term(tail) {
            return GateOutcome::Skip(SkipReason::AssociationOnly);
        }
    }
    GateOutcome::Pass
}

fn protocol_only(input: &GateInput) -> GateOutcome {
    if PROTOCOL.is_match(input.text) && !anchors::has_result_statement(input.text) {
        GateOutcome::Skip(SkipReason::ProtocolOnly)
    } else {
        GateOutcome::Pass
    }
}

fn list_structure(input: &GateInput) -> GateOutcome {
    let semicolons = input.text.matches(';').count();
    let commas = input.text.matches(',').count();
    let listish =
        semicolons >= 2 || (input.text.contains(':') && commas >= 2) || commas >= 5;
    if !listish {
        GateOutcome::Pass
    } else if NUMERIC_ANCHOR.is_match(input.text) {
        GateOutcome::Penalize(0.1)
    } else {
        GateOutcome::Skip(SkipReason::ListStructure)
    }
}

fn eligibility_criteria(input: &GateInput) -> GateOutcome {
    if ELIGIBILITY.is_match(input.text) && !anchors::has_result_statement(input.text) {
        GateOutcome::Skip(SkipReason::EligibilityCriteria)
    } else {
        GateOutcome::Pass
    }
}

/// Spans of bracketed stretches, bracket characters included. Nested
/// brackets fold into the enclosing span; an unclosed bracket runs to the
/// end of the text.
fn bracket_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut open = 0usize;
    for (index, ch) in text.char_indices() {
        match ch {
            '(' | '[' => {
                if depth == 0 {
                    open = index;
                }
                depth += 1;
            }
            ')' | ']' => {
                if depth > 0 {
                    depth -= 1;
                    if depth == 0 {
                        spans.push((open, index + ch.len_utf8()));
                    }
                }
            }
            _ => {}
        }
    }
    if depth > 0 {
        spans.push((open, text.len()));
    }
    spans
}

fn bracketed_char_ratio(text: &str) -> f64 {
    let mut depth = 0usize;
    let mut bracketed = 0usize;
    let mut total = 0usize;
    for ch in text.chars() {
        total += 1;
        match ch {
            '(' | '[' => {
                depth += 1;
                bracketed += 1;
            }
            ')' | ']' => {
                if depth > 0 {
                    depth -= 1;
                }
                bracketed += 1;
            }
            _ => {
                if depth > 0 {
                    bracketed += 1;
                }
            }
        }
    }
    if total == 0 {
        0.0
    } else {
        bracketed as f64 / total as f64
    }
}

fn text_outside_brackets(text: &str) -> String {
    let mut depth = 0usize;
    let mut outside = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | '[' => depth += 1,
            ')' | ']' => {
                if depth > 0 {
                    depth -= 1;
                }
            }
            _ => {
                if depth == 0 {
                    outside.push(ch);
                }
            }
        }
    }
    outside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn citation_only_sentences_are_skipped() {
        let decision = should_classify("(Smith et al., 2020) DrugX and DrugY observations.", None);
        assert!(decision.skip);
        assert_eq!(decision.skip_reason, Some(SkipReason::CitationOnly));
    }

    #[test]
    fn citation_with_a_result_clause_passes() {
        let decision = should_classify(
            "As reported by Smith et al. (2020), DrugX reduced mortality versus DrugY.",
            None,
        );
        assert!(!decision.skip);
    }

    #[test]
    fn headings_are_skipped() {
        for text in [
            "Comparative Efficacy of DrugX and DrugY",
            "RESULTS",
            "Safety outcomes:",
        ]
        .iter()
        {
            let decision = should_classify(text, None);
            assert_eq!(decision.skip_reason, Some(SkipReason::Heading), "{}", text);
        }
    }

    #[test]
    fn title_section_is_always_a_heading() {
        let decision = should_classify("DrugX versus DrugY in type 2 diabetes.", Some("title"));
        assert_eq!(decision.skip_reason, Some(SkipReason::Heading));
    }

    #[test]
    fn objective_statements_are_skipped() {
        let decision = should_classify(
            "The aim of this study was to compare DrugX and DrugY.",
            None,
        );
        assert_eq!(decision.skip_reason, Some(SkipReason::ObjectiveStatement));
        let decision =
            should_classify("To evaluate the comparative safety of DrugX and DrugY.", None);
        assert_eq!(decision.skip_reason, Some(SkipReason::ObjectiveStatement));
    }

    #[test]
    fn study_intro_without_result_is_skipped() {
        let decision = should_classify(
            "We conducted a retrospective cohort study comparing DrugX and DrugY.",
            None,
        );
        assert_eq!(decision.skip_reason, Some(SkipReason::StudyDescription));
    }

    #[test]
    fn study_intro_with_result_passes() {
        let decision = should_classify(
            "We found that DrugX reduced mortality compared with DrugY.",
            None,
        );
        assert!(!decision.skip);
    }

    #[test]
    fn bracketed_product_mentions_are_skipped() {
        let a = ProductRoleContext::new("drugx");
        let b = ProductRoleContext::new("drugy");
        let decision = should_classify_pair(
            "Adjusted hazard ratios were computed for each cohort (DrugX vs DrugY).",
            None,
            &a,
            &b,
        );
        assert_eq!(decision.skip_reason, Some(SkipReason::ProductsOnlyInBrackets));
    }

    #[test]
    fn mentions_outside_brackets_pass_the_bracket_check() {
        let a = ProductRoleContext::new("drugx");
        let b = ProductRoleContext::new("drugy");
        let decision = should_classify_pair(
            "DrugX reduced mortality versus DrugY (hazard ratio 0.80).",
            None,
            &a,
            &b,
        );
        assert!(!decision.skip);
    }

    #[test]
    fn bracket_heavy_text_is_skipped() {
        let decision = should_classify(
            "DrugX (aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa).",
            None,
        );
        assert_eq!(decision.skip_reason, Some(SkipReason::BracketHeavy));
    }

    #[test]
    fn moderate_bracket_ratio_costs_a_fixed_penalty() {
        let decision = should_classify(
            "DrugX reduced mortality overall (aaaaaaaaaaaaaaaaaaaaaa).",
            None,
        );
        assert!(!decision.skip);
        assert_eq!(decision.confidence_penalty, 0.2);
    }

    #[test]
    fn definitions_are_skipped() {
        let decision = should_classify(
            "MACE was defined as a composite of stroke and cardiovascular death.",
            None,
        );
        assert_eq!(decision.skip_reason, Some(SkipReason::Definition));
    }

    #[test]
    fn display_pointers_without_digits_are_skipped() {
        let decision = should_classify(
            "Differences between DrugX and DrugY are shown in the figure below.",
            None,
        );
        assert_eq!(decision.skip_reason, Some(SkipReason::DisplayReference));
        let decision = should_classify("Figure 2 shows a 12% reduction with DrugX.", None);
        assert_ne!(decision.skip_reason, Some(SkipReason::DisplayReference));
    }

    #[test]
    fn method_descriptions_without_direction_are_skipped() {
        let decision = should_classify(
            "Cox proportional hazards models were adjusted for age and sex.",
            None,
        );
        assert_eq!(decision.skip_reason, Some(SkipReason::AnalysisMethod));
        let decision = should_classify(
            "Cox regression showed lower mortality with DrugX than DrugY.",
            None,
        );
        assert!(!decision.skip);
    }

    #[test]
    fn utilization_statements_reroute_instead_of_skipping() {
        let decision = should_classify(
            "Utilization of DrugX increased while DrugY prescriptions declined.",
            None,
        );
        assert!(!decision.skip);
        assert!(decision.reroute_real_world);
    }

    #[test]
    fn utilization_with_outcomes_is_not_rerouted() {
        let decision = should_classify(
            "DrugX uptake increased and mortality declined in treated patients.",
            None,
        );
        assert!(!decision.reroute_real_world);
    }

    #[test]
    fn baseline_descriptors_are_skipped() {
        let decision = should_classify(
            "Baseline characteristics were similar between the DrugX and DrugY groups.",
            None,
        );
        assert_eq!(decision.skip_reason, Some(SkipReason::BaselineDescriptor));
    }

    #[test]
    fn association_without_a_result_clause_is_skipped() {
        let decision = should_classify(
            "The association between DrugX use and pancreatitis was examined.",
            None,
        );
        assert_eq!(decision.skip_reason, Some(SkipReason::AssociationOnly));
        let decision = should_classify(
            "Analyses revealed an association between DrugX and lower mortality.",
            None,
        );
        assert!(!decision.skip);
    }

    #[test]
    fn protocol_sentences_are_skipped() {
        let decision = should_classify(
            "Patients were randomly assigned to receive DrugX or DrugY.",
            None,
        );
        assert_eq!(decision.skip_reason, Some(SkipReason::ProtocolOnly));
    }

    #[test]
    fn bare_lists_are_skipped_but_numeric_lists_only_pay_a_penalty() {
        let decision = should_classify(
            "Secondary endpoints included: stroke, myocardial infarction, hospitalization, and all-cause mortality.",
            None,
        );
        assert_eq!(decision.skip_reason, Some(SkipReason::ListStructure));
        let decision = should_classify(
            "Event rates were 12%, 9%, and 4% across arms; differences persisted; follow-up continued.",
            None,
        );
        assert!(!decision.skip);
        assert_eq!(decision.confidence_penalty, 0.1);
    }

    #[test]
    fn eligibility_statements_are_skipped() {
        let decision = should_classify(
            "Eligible patients had prior exposure to at least one antidiabetic agent.",
            None,
        );
        assert_eq!(decision.skip_reason, Some(SkipReason::EligibilityCriteria));
    }

    #[test]
    fn ordinary_claims_pass_cleanly() {
        for text in [
            "DrugX was superior to DrugY for reducing mortality.",
            "Adverse events were comparable between groups.",
            "Participants switched to semaglutide from insulin after 12 weeks.",
        ]
        .iter()
        {
            let decision = should_classify(text, Some("results"));
            assert!(!decision.skip, "{}", text);
            assert_eq!(decision.confidence_penalty, 0.0, "{}", text);
        }
    }
}
