//! Title canonicalization.
//!
//! Feed titles are long discipline names, often decorated with free
//! text and a bracketed class-type tag ("Функциональная верификация
//! [Лек]"). The alias map shortens the discipline part while the tag is
//! carried through untouched.

use std::collections::HashMap;

/// Shorten a raw feed title against the alias map.
///
/// Alias keys are tried longest first and matched by substring
/// containment on the title with its bracket tag split off; the first
/// match wins. Longest-first matters because discipline names can be
/// prefixes of one another, and containment (rather than equality)
/// lets elective titles carry arbitrary decoration without losing the
/// match. An unmatched title passes through verbatim.
pub fn canonical_title(raw: &str, aliases: &HashMap<String, String>) -> String {
    let (bare, tag) = split_type_tag(raw);

    let mut keys: Vec<&String> = aliases.keys().collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let base = keys
        .iter()
        .find(|key| bare.contains(key.as_str()))
        .map(|key| aliases[*key].as_str())
        .unwrap_or(bare);

    format!("{}{}", base, tag)
}

/// Split a title into its bare discipline part and the `" [...]"` tag
/// (empty when no tag is present).
fn split_type_tag(title: &str) -> (&str, &str) {
    match title.find(" [") {
        Some(pos) => (&title[..pos], &title[pos..]),
        None => (title, ""),
    }
}

/// Strip the class-type tag and any trailing group name from a display
/// title, recovering the bare discipline name used by the exclusion
/// filter. In teacher mode titles end with the owning group's name; we
/// know the configured group names, so the suffix match is exact rather
/// than heuristic.
pub fn base_title<'a>(title: &'a str, groups: &[String]) -> &'a str {
    let (bare, _) = split_type_tag(title);
    for group in groups {
        if let Some(stripped) = bare.strip_suffix(group.as_str()) {
            return stripped.trim_end();
        }
    }
    bare
}
