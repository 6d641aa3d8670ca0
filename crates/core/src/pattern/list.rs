//! Order-preserving list helpers shared by the selectors.
//!
//! Every recommendation list in the engine is grown append-only and then
//! deduplicated, or reordered without dropping entries. Keys are compared
//! case-insensitively and the first occurrence wins.

use std::collections::HashSet;

/// Drop later duplicates (case-insensitive), keeping first-occurrence order.
pub fn dedupe_case_insensitive<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let item: String = item.into();
        if seen.insert(item.to_lowercase()) {
            out.push(item);
        }
    }
    out
}

/// True when any entry contains `needle` (case-insensitive substring).
pub fn any_contains(items: &[String], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    items.iter().any(|s| s.to_lowercase().contains(&needle))
}

/// One row of a bias table: entries containing `keyword` are preferred, and
/// `lure` is added when nothing in the list matches yet.
#[derive(Debug, Clone, Copy)]
pub struct Preference {
    pub keyword: &'static str,
    pub lure: &'static str,
}

/// Apply a preference table to a list without removing anything.
///
/// Missing preferred entries are appended first, then the list is stably
/// partitioned so entries matching an earlier preference come first.
pub fn reorder_by_preference(items: &[String], preferences: &[Preference]) -> Vec<String> {
    let mut out: Vec<String> = items.to_vec();
    for pref in preferences {
        if !any_contains(&out, pref.keyword) {
            out.push(pref.lure.to_string());
        }
    }

    let rank = |item: &String| -> usize {
        let lower = item.to_lowercase();
        preferences
            .iter()
            .position(|p| lower.contains(p.keyword))
            .unwrap_or(preferences.len())
    };

    // sort_by_key is stable, so unmatched entries keep their relative order.
    out.sort_by_key(rank);
    dedupe_case_insensitive(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dedupe_keeps_first_spelling() {
        let out = dedupe_case_insensitive(["Jig", "spinnerbait", "jig", "SPINNERBAIT", "fluke"]);
        assert_eq!(out, strings(&["Jig", "spinnerbait", "fluke"]));
    }

    #[test]
    fn reorder_moves_matches_forward_and_keeps_everything() {
        let items = strings(&["spinnerbait", "football jig", "drop shot", "fluke"]);
        let prefs = [
            Preference { keyword: "drop shot", lure: "drop shot" },
            Preference { keyword: "jig", lure: "football jig" },
        ];
        let out = reorder_by_preference(&items, &prefs);
        assert_eq!(
            out,
            strings(&["drop shot", "football jig", "spinnerbait", "fluke"])
        );
    }

    #[test]
    fn reorder_adds_missing_preferences() {
        let items = strings(&["spinnerbait"]);
        let prefs = [Preference { keyword: "jerkbait", lure: "suspending jerkbait" }];
        let out = reorder_by_preference(&items, &prefs);
        assert_eq!(out, strings(&["suspending jerkbait", "spinnerbait"]));
    }
}
