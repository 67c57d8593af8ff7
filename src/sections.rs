//! Section name normalization.
//!
//! Upstream stores hand free-form section strings ("RESULTS:", "Materials
//! and Methods", "1. Introduction") and sometimes none at all, with the
//! heading folded into the sentence ("Results: DrugX reduced HbA1c."). Rule
//! section constraints and the methods-section exclusions need one canonical
//! vocabulary, so everything funnels through the alias table here before
//! gating.

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Builtin alias → canonical pairs. A schema's optional `section_aliases`
/// key extends (and may override) this table.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("title", "title"),
    ("abstract", "abstract"),
    ("summary", "abstract"),
    ("synopsis", "abstract"),
    ("introduction", "introduction"),
    ("intro", "introduction"),
    ("background", "introduction"),
    ("background and aims", "introduction"),
    ("methods", "methods"),
    ("method", "methods"),
    ("materials and methods", "methods"),
    ("patients and methods", "methods"),
    ("study design", "methods"),
    ("methodology", "methods"),
    ("statistical analysis", "methods"),
    ("results", "results"),
    ("findings", "results"),
    ("results and discussion", "results"),
    ("safety results", "results"),
    ("discussion", "discussion"),
    ("comment", "discussion"),
    ("commentary", "discussion"),
    ("limitations", "discussion"),
    ("conclusion", "conclusion"),
    ("conclusions", "conclusion"),
    ("concluding remarks", "conclusion"),
    ("summary and conclusions", "conclusion"),
    ("references", "other"),
    ("acknowledgments", "other"),
    ("acknowledgements", "other"),
    ("funding", "other"),
    ("appendix", "other"),
];

/// Build the alias lookup for a schema: builtin pairs plus the config's
/// canonical → aliases entries.
pub(crate) fn merge_aliases(
    configured: &BTreeMap<String, Vec<String>>,
) -> BTreeMap<String, String> {
    let mut aliases: BTreeMap<String, String> = BTreeMap::new();
    for (alias, canonical) in BUILTIN_ALIASES.iter() {
        aliases.insert((*alias).to_string(), (*canonical).to_string());
    }
    for (canonical, names) in configured {
        let canonical = normalize_token(canonical);
        if canonical.is_empty() {
            continue;
        }
        aliases.insert(canonical.clone(), canonical.clone());
        for name in names {
            let name = normalize_token(name);
            if !name.is_empty() {
                aliases.insert(name, canonical.clone());
            }
        }
    }
    aliases
}

/// Lowercase, strip punctuation and leading enumeration, collapse whitespace.
fn normalize_token(raw: &str) -> String {
    let raw = raw.replace('&', " and ");
    let mut cleaned = String::with_capacity(raw.len());
    let mut last_space = true;
    for ch in raw.chars() {
        let ch = if ch.is_alphanumeric() || ch == '-' {
            ch.to_ascii_lowercase()
        } else {
            ' '
        };
        if ch == ' ' {
            if !last_space {
                cleaned.push(' ');
            }
            last_space = true;
        } else {
            cleaned.push(ch);
            last_space = false;
        }
    }
    let cleaned = cleaned.trim();
    // "1 introduction" → "introduction"
    cleaned
        .trim_start_matches(|c: char| c.is_ascii_digit() || c == ' ' || c == '-')
        .to_string()
}

/// Canonicalize an explicit section string. Known aliases map to their
/// canonical name; anything else passes through cleaned.
pub fn normalize_section(raw: &str, aliases: &BTreeMap<String, String>) -> Option<String> {
    let token = normalize_token(raw);
    if token.is_empty() {
        return None;
    }
    Some(aliases.get(&token).cloned().unwrap_or(token))
}

/// Detect a leading `Heading:` prefix that names a known section. Returns
/// the canonical section and the remaining sentence.
pub fn leading_heading<'a>(
    text: &'a str,
    aliases: &BTreeMap<String, String>,
) -> Option<(String, &'a str)> {
    let colon = text.find(':')?;
    if colon == 0 || colon > 40 {
        return None;
    }
    let head = normalize_token(&text[..colon]);
    let canonical = aliases.get(&head)?;
    Some((canonical.clone(), text[colon + 1..].trim_start()))
}

/// Resolve the section for one record: an explicit value wins, otherwise a
/// recognized leading heading supplies it. The returned text has a consumed
/// heading stripped.
pub fn resolve_section<'a>(
    explicit: Option<&str>,
    text: &'a str,
    aliases: &BTreeMap<String, String>,
) -> (Option<String>, Cow<'a, str>) {
    let heading = leading_heading(text, aliases);
    let cleaned = match &heading {
        Some((_, rest)) => Cow::Borrowed(*rest),
        None => Cow::Borrowed(text),
    };
    let section = explicit
        .and_then(|raw| normalize_section(raw, aliases))
        .or_else(|| heading.map(|(canonical, _)| canonical));
    (section, cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aliases() -> BTreeMap<String, String> {
        merge_aliases(&BTreeMap::new())
    }

    #[test]
    fn shouting_and_punctuated_names_normalize() {
        let aliases = aliases();
        assert_eq!(
            normalize_section("RESULTS:", &aliases),
            Some("results".to_string())
        );
        assert_eq!(
            normalize_section("Materials & Methods", &aliases),
            Some("methods".to_string())
        );
        assert_eq!(
            normalize_section("1. Introduction", &aliases),
            Some("introduction".to_string())
        );
    }

    #[test]
    fn unknown_sections_pass_through_cleaned() {
        assert_eq!(
            normalize_section("Post-Marketing Surveillance", &aliases()),
            Some("post-marketing surveillance".to_string())
        );
        assert_eq!(normalize_section("  ", &aliases()), None);
    }

    #[test]
    fn leading_heading_is_detected_and_stripped() {
        let aliases = aliases();
        let (section, rest) =
            leading_heading("Results: DrugX reduced HbA1c vs DrugY.", &aliases).unwrap();
        assert_eq!(section, "results");
        assert_eq!(rest, "DrugX reduced HbA1c vs DrugY.");
    }

    #[test]
    fn non_section_colons_are_not_headings() {
        let aliases = aliases();
        assert!(leading_heading("Note: adverse events were rare.", &aliases).is_none());
        assert!(leading_heading(": leading colon", &aliases).is_none());
    }

    #[test]
    fn explicit_section_wins_over_heading() {
        let aliases = aliases();
        let (section, cleaned) = resolve_section(
            Some("Discussion"),
            "Results: DrugX reduced HbA1c.",
            &aliases,
        );
        assert_eq!(section.as_deref(), Some("discussion"));
        assert_eq!(cleaned.as_ref(), "DrugX reduced HbA1c.");
    }

    #[test]
    fn heading_supplies_a_missing_section() {
        let aliases = aliases();
        let (section, cleaned) =
            resolve_section(None, "Conclusions: DrugX was well tolerated.", &aliases);
        assert_eq!(section.as_deref(), Some("conclusion"));
        assert_eq!(cleaned.as_ref(), "DrugX was well tolerated.");
    }
}
