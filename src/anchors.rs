//! Textual anchor checks.
//!
//! A rule that matches on labels alone is not enough: the label "superior"
//! also fires on "superior vena cava". These anchors re-read the raw sentence
//! for the lexical shapes a genuine claim takes. They are shared by the rule
//! engine (type-specific anchor checks), the legacy fallback chain, the
//! guardrail gate, and the invariant validator, so all four layers agree on
//! what counts as a comparative anchor or a safety assertion.

use once_cell::sync::Lazy;
use regex::Regex;

fn compiled(source: &str) -> Regex {
    Regex::new(source).expect("invalid builtin anchor pattern")
}

static COMPARATIVE_PHRASE: Lazy<Regex> = Lazy::new(|| {
    compiled(
        r"(?i)\bvs\b|\bversus\b|\bcompared\s+(?:with|to)\b|\bin\s+comparison\b|\bhead-to-head\b|\brelative\s+to\b",
    )
});

static STATISTICAL_TEST: Lazy<Regex> = Lazy::new(|| {
    compiled(
        r"(?i)\b(?:hazard\s+ratio|odds\s+ratio|risk\s+ratio|rate\s+ratio|relative\s+risk)\b|\b(?:hr|rr)\s*[=:<]|\bor\s*[=:]\s*\d|\b95%\s*ci\b|\bp\s*[<=]\s*0?\.\d+|non-?inferiorit",
    )
});

static QUALITATIVE_COMPARISON: Lazy<Regex> = Lazy::new(|| {
    compiled(
        r"(?i)\b(?:was|were|is|are)\s+(?:significantly\s+)?(?:superior|inferior|non-?inferior)\s+to\b|\b(?:better|worse|more\s+effective|less\s+effective|safer)\s+than\b|\bas\s+(?:effective|safe)\s+as\b|\boutperform(?:s|ed)?\b|\bsuperiority\s+(?:of|over)\b",
    )
});

static GROUP_WORD: Lazy<Regex> =
    Lazy::new(|| compiled(r"(?i)\b(?:groups?|arms?|cohorts?|treatment\s+groups?)\b"));

static CONTRAST_WORD: Lazy<Regex> = Lazy::new(|| {
    compiled(r"(?i)\b(?:than|vs|versus|compared|higher|lower|greater|fewer)\b")
});

static OUTCOME_SIGNAL: Lazy<Regex> = Lazy::new(|| {
    compiled(
        r"(?i)\b(?:mortality|survival|deaths?|remission|responses?|responders?|efficacy|effectiveness|outcomes?|hba1c|a1c|glycemic|body\s+weight|weight\s+loss|bmi|exacerbations?|hospitalizations?|mace|stroke|myocardial\s+infarction|progression|relapse|improv(?:ed|es|ement)|reduc(?:ed|es|ing|tion)|symptoms?|quality\s+of\s+life|endpoints?|event\s+rates?)\b",
    )
});

static SAFETY_ASSERTION: Lazy<Regex> = Lazy::new(|| {
    compiled(
        r"(?i)\badverse\s+(?:events?|reactions?)\s+(?:was|were|occurred|rates?|led)\b|\b(?:no|not)\s+(?:significantly\s+)?(?:significant\s+)?(?:increases?|increased|differences?)\s+in\b|\bwell[-\s]tolerated\b|\b(?:higher|lower|increased|decreased|greater|reduced|similar|comparable)\s+(?:rates?|risks?|incidence|frequency|odds)\s+of\b|\bassociated\s+with\s+(?:an?\s+)?(?:increased|decreased|higher|lower|elevated|reduced)\b|\b(?:discontinuations?|withdrawals?)\s+(?:due\s+to|because\s+of|rates?|were|was)\b|\b(?:tolerability|safety)\s+(?:profile|was|were|findings|data)\b|\b(?:reported|experienced|developed)\s+(?:\w+\s+){0,2}(?:adverse|hypoglycemia|hypoglycaemia|pancreatitis|toxicity|side\s+effects?)\b|\bno\s+new\s+safety\s+(?:signals?|concerns?)\b",
    )
});

static GUIDELINE_CUE: Lazy<Regex> = Lazy::new(|| {
    compiled(
        r"(?i)\bguidelines?\b|\brecommended\b|\brecommendations?\b|\bfirst-?\s?line\b|\bsecond-?\s?line\b|\bpreferred\s+(?:agent|option|therapy|treatment)\b|\bstandard\s+of\s+care\b|\bapproved\s+for\b|\bindicated\s+for\b|\bformulary\b",
    )
});

static NON_CLAIM_VOCAB: Lazy<Regex> = Lazy::new(|| {
    compiled(
        r"(?i)\b(?:registry|registries|database|claims\s+data|covariates?|adjust(?:ed|ment)|enroll(?:ed|ment)|eligib(?:le|ility)|inclusion|exclusion|protocol|randomi[sz]ed\s+to|assigned\s+to|baseline\s+characteristics|study\s+population|data\s+were\s+obtained|we\s+used)\b",
    )
});

static DIRECTIONAL_TERM: Lazy<Regex> = Lazy::new(|| {
    compiled(
        r"(?i)\b(?:superior|inferior|better|worse|higher|lower|greater|fewer|more\s+effective|less\s+effective|improved|reduced|increased|decreased|outperformed|advantage|disadvantage|favor(?:ed|able)|exceeded)\b",
    )
});

static EQUIVALENCE_TERM: Lazy<Regex> = Lazy::new(|| {
    compiled(
        r"(?i)\bsimilar\b|\bcomparable\b|\bequivalent\b|\bno\s+(?:significant\s+)?difference\b|\bnon-?inferior\b|\bas\s+effective\s+as\b|\bdid\s+not\s+differ\b",
    )
});

static RESULT_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    compiled(
        r"(?i)\b(?:showed|shows|shown|demonstrated|demonstrates|found|observed|reported|resulted|reduced|increased|improved|worsened|achieved|confirmed|revealed|indicated|suggested|experienced|occurred|led\s+to|was\s+associated|were\s+associated)\b",
    )
});

static DISPLAY_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    compiled(r"(?i)\b(?:table|figure|fig|supplementary\s+(?:table|figure)|appendix)\b")
});

static BASELINE_DESCRIPTOR: Lazy<Regex> = Lazy::new(|| {
    compiled(
        r"(?i)\bbaseline\s+characteristics\b|\bat\s+baseline\b|\bdemographics\b|\b(?:mean|median)\s+(?:age|bmi|hba1c|dose)\b|\b(?:characteristics|demographics)\s+(?:was|were)\s+(?:similar|balanced|comparable|well[-\s]matched)\b",
    )
});

/// A lexical comparison anchor: an explicit phrase, a statistical test, a
/// qualitative superiority/inferiority form, or a group-contrast shape.
pub(crate) fn has_comparative_anchor(text: &str) -> bool {
    COMPARATIVE_PHRASE.is_match(text)
        || STATISTICAL_TEST.is_match(text)
        || QUALITATIVE_COMPARISON.is_match(text)
        || (GROUP_WORD.is_match(text) && CONTRAST_WORD.is_match(text))
}

/// An endpoint or outcome keyword, required before a comparative claim may
/// call itself an efficacy claim.
pub(crate) fn has_outcome_signal(text: &str) -> bool {
    OUTCOME_SIGNAL.is_match(text)
}

/// A textual safety assertion, as opposed to a bare mention of a risk term.
pub(crate) fn has_safety_assertion(text: &str) -> bool {
    SAFETY_ASSERTION.is_match(text)
}

/// Guideline or positioning language ("recommended", "first-line", ...).
pub(crate) fn has_guideline_cue(text: &str) -> bool {
    GUIDELINE_CUE.is_match(text)
}

/// True when the leading clause is registry/covariate/protocol vocabulary
/// with no safety assertion following it.
pub(crate) fn is_non_claim_context(text: &str) -> bool {
    let (lead, rest) = match text.find(',') {
        Some(comma) => (&text[..comma], &text[comma + 1..]),
        None => (text, ""),
    };
    NON_CLAIM_VOCAB.is_match(lead) && !has_safety_assertion(rest)
}

/// A directional term ("superior", "higher", "reduced", ...).
pub(crate) fn has_directional_term(text: &str) -> bool {
    DIRECTIONAL_TERM.is_match(text)
}

/// An equivalence term ("comparable", "non-inferior", ...).
pub(crate) fn has_equivalence_term(text: &str) -> bool {
    EQUIVALENCE_TERM.is_match(text)
}

/// A result-stating verb; its absence marks intro/protocol sentences.
pub(crate) fn has_result_statement(text: &str) -> bool {
    RESULT_STATEMENT.is_match(text)
}

/// A table/figure pointer with no digit anywhere, a caption fragment rather
/// than a reported value.
pub(crate) fn is_display_reference_only(text: &str) -> bool {
    DISPLAY_REFERENCE.is_match(text) && !text.chars().any(|c| c.is_ascii_digit())
}

/// A baseline-characteristics descriptor shape.
pub(crate) fn is_baseline_descriptor(text: &str) -> bool {
    BASELINE_DESCRIPTOR.is_match(text)
}
