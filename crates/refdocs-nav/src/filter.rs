//! Free-text filtering of normalized items.

use crate::item::NormalizedItem;

/// Items whose search text contains `term`, ignoring case.
///
/// An empty term returns every item. Relative order is preserved and there is
/// no cap on the number of matches.
#[must_use]
pub fn filter_items(items: &[NormalizedItem], term: &str) -> Vec<NormalizedItem> {
    filter_refs(items, term).into_iter().cloned().collect()
}

/// Borrowing form of [`filter_items`].
#[must_use]
pub fn filter_refs<'a>(items: &'a [NormalizedItem], term: &str) -> Vec<&'a NormalizedItem> {
    if term.is_empty() {
        return items.iter().collect();
    }

    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| matches_lowercase(item, &needle))
        .collect()
}

/// Whether `item` matches `term`, ignoring case.
#[must_use]
pub fn matches(item: &NormalizedItem, term: &str) -> bool {
    term.is_empty() || matches_lowercase(item, &term.to_lowercase())
}

fn matches_lowercase(item: &NormalizedItem, needle: &str) -> bool {
    item.search.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::item::RawItem;
    use crate::normalize::normalize;

    fn items() -> Vec<NormalizedItem> {
        normalize(
            &[
                RawItem::named("sin").with_category("math").with_brief("sine"),
                RawItem::named("Arc").with_category("Shape").with_brief(""),
                RawItem::named("asin").with_category("math").with_brief("Inverse of sin()"),
            ],
            "processing",
        )
    }

    #[test]
    fn test_empty_term_is_identity() {
        let items = items();

        assert_eq!(filter_items(&items, ""), items);
    }

    #[test]
    fn test_filter_matches_brief() {
        let items = items();

        let result = filter_items(&items, "sine");

        let slugs: Vec<_> = result.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(slugs, vec!["sin"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let items = items();

        let result = filter_items(&items, "ARC");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].slug, "Arc");
    }

    #[test]
    fn test_filter_preserves_order() {
        let items = items();

        let result = filter_items(&items, "sin");

        let slugs: Vec<_> = result.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(slugs, vec!["sin", "asin"]);
    }

    #[test]
    fn test_filter_no_matches() {
        assert!(filter_items(&items(), "bezier").is_empty());
    }

    #[test]
    fn test_filter_partitions_items() {
        let items = items();
        let term = "In";

        let kept = filter_refs(&items, term);

        for item in &items {
            let contains = item.search.to_lowercase().contains(&term.to_lowercase());
            assert_eq!(kept.contains(&item), contains, "item {}", item.slug);
        }
    }

    #[test]
    fn test_matches_single_item() {
        let items = items();

        assert!(matches(&items[0], "SIN"));
        assert!(matches(&items[0], ""));
        assert!(!matches(&items[1], "sin"));
    }
}
