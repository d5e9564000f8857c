//! The fixed reference list backing both search experiences.
//!
//! The simulated backend and the local page's instant filter both select
//! from the same seven items, so the two pages stay comparable. The demo's
//! contrast is in the state handling, not the data.

/// Reference items, in canonical order.
pub const REFERENCE_ITEMS: [&str; 7] = [
    "Apple",
    "Banana",
    "Cherry",
    "Date",
    "Elderberry",
    "Fig",
    "Grape",
];

/// Case-insensitive substring filter over the reference list.
///
/// Returns the subsequence of [`REFERENCE_ITEMS`] whose lowercase form
/// contains the lowercase query as a substring, order preserved. An empty
/// query matches everything.
#[must_use]
pub fn filter_items(query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    REFERENCE_ITEMS
        .iter()
        .filter(|item| item.to_lowercase().contains(&needle))
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_match_preserves_reference_order() {
        assert_eq!(
            filter_items("e"),
            vec!["Apple", "Cherry", "Date", "Elderberry"]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(filter_items("BERRY"), vec!["Elderberry"]);
        assert_eq!(filter_items("fig"), vec!["Fig"]);
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(filter_items("").len(), REFERENCE_ITEMS.len());
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_items("zzz").is_empty());
    }
}
