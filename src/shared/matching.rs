//! Name matching shared by every region accessor.
//!
//! A candidate matches when its lowercased name equals the lowercased,
//! trimmed query or contains it. Lowercasing uses the full Unicode mapping,
//! so accented Latin and other scripts compare correctly. Scans stop at the
//! first record in listing order that satisfies either condition; an exact
//! match further down the list does not win over an earlier partial one.

use crate::features::regions::models::Region;

/// Lowercase and trim a query once so scans do not repeat the work
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Match a candidate name against an already normalized query
pub fn name_matches(candidate: &str, normalized_query: &str) -> bool {
    let candidate = candidate.to_lowercase();
    candidate == normalized_query || candidate.contains(normalized_query)
}

/// First region whose name matches, in listing order
pub fn first_by_name<'a>(regions: &'a [Region], query: &str) -> Option<&'a Region> {
    let query = normalize_query(query);
    regions.iter().find(|r| name_matches(&r.name, &query))
}

/// First region matching the earliest query that matches anything.
///
/// Queries are tried in order over the whole slice, so a later record that
/// matches the first query beats an earlier one matching only the second.
pub fn first_by_any_name<'a>(regions: &'a [Region], queries: &[&str]) -> Option<&'a Region> {
    queries
        .iter()
        .find_map(|query| first_by_name(regions, query))
}

/// Every region whose name matches, in listing order
pub fn all_by_name<'a>(regions: &'a [Region], query: &str) -> Vec<&'a Region> {
    let query = normalize_query(query);
    regions
        .iter()
        .filter(|r| name_matches(&r.name, &query))
        .collect()
}

/// Region with exactly this code
pub fn by_code<'a>(regions: &'a [Region], code: &str) -> Option<&'a Region> {
    regions.iter().find(|r| r.code == code)
}

/// Strip one leading administrative prefix ("Kabupaten ", "Kec. ", ...)
/// from a free-text name, ignoring case.
pub fn strip_admin_prefix<'a>(name: &'a str, prefixes: &[&str]) -> &'a str {
    let trimmed = name.trim();
    for prefix in prefixes {
        if let Some(head) = trimmed.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                return trimmed[prefix.len()..].trim_start();
            }
        }
    }
    trimmed
}
