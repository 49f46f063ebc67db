//! WikiProject naming rules.
//!
//! The `wikiprojects` table stores full page-style keys such as
//! `WikiProject_Physics` or `WikiProject_Physics/Popular_culture`, alongside
//! rows for partnership projects that do not follow the convention at all
//! (`Women in Red`). Reviewers work with the short human-readable names.

use std::collections::BTreeSet;

/// Prefix shared by every conventional WikiProject key.
pub const WIKIPROJECT_PREFIX: &str = "WikiProject_";

/// Turn a human-readable project name into its `wp_project` key.
///
/// Spaces become underscores. Returns `None` for blank input.
pub fn project_key(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(format!("{WIKIPROJECT_PREFIX}{}", name.replace(' ', "_")))
}

/// Parse a pipe-separated list of project names into unique `wp_project` keys.
///
/// Order of first appearance is kept; blank segments are dropped.
pub fn parse_project_list(raw: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    raw.split('|')
        .filter_map(project_key)
        .filter(|key| seen.insert(key.clone()))
        .collect()
}

/// Short name for a `wp_project` value, or `None` when it is not a WikiProject.
///
/// The prefix match is case-insensitive. Subproject qualifiers after the
/// first `/` are dropped.
pub fn display_name(wp_project: &str) -> Option<&str> {
    let start = wp_project
        .to_ascii_lowercase()
        .find(&WIKIPROJECT_PREFIX.to_ascii_lowercase())?
        + WIKIPROJECT_PREFIX.len();
    let name = wp_project[start..].split('/').next().unwrap_or_default();
    (!name.is_empty()).then_some(name)
}

/// Collapse raw `wp_project` values into a sorted, de-duplicated name list.
pub fn collect_display_names<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .filter_map(|value| display_name(value.as_ref()).map(str::to_string))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
