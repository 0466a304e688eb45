//! Item normalization.
//!
//! Turns [`RawItem`]s into [`NormalizedItem`]s once at the boundary so the
//! filter and the organizer work on a single typed shape. Malformed records
//! are never rejected: missing values become empty strings and the item still
//! flows through to the tree.

use std::sync::Arc;

use crate::item::{NormalizedItem, RawItem};
use crate::paths::{PathBuilder, ReferencePaths};

/// Fields computed by normalization. Source fields with these names are dropped.
const COMPUTED_FIELDS: [&str; 3] = ["slug", "path", "search"];

/// Normalize reference items using the default path layout.
#[must_use]
pub fn normalize(raw_items: &[RawItem], namespace: &str) -> Vec<NormalizedItem> {
    normalize_with(raw_items, namespace, &ReferencePaths::default())
}

/// Normalize items, computing paths with `paths`.
#[must_use]
pub fn normalize_with<P>(raw_items: &[RawItem], namespace: &str, paths: &P) -> Vec<NormalizedItem>
where
    P: PathBuilder + ?Sized,
{
    raw_items
        .iter()
        .map(|raw| normalize_item(raw, namespace, paths))
        .collect()
}

fn normalize_item<P>(raw: &RawItem, namespace: &str, paths: &P) -> NormalizedItem
where
    P: PathBuilder + ?Sized,
{
    let slug = raw.name.clone().unwrap_or_default();
    let path = paths.item_path(&slug, namespace);

    let label = raw.title.as_deref().unwrap_or(&slug);
    let search = format!("{label} {}", raw.brief.as_deref().unwrap_or_default());

    let subcategory = raw
        .subcategory
        .as_deref()
        .map(title_case)
        .filter(|s| !s.is_empty());

    let mut extra = raw.extra.clone();
    for field in COMPUTED_FIELDS {
        extra.remove(field);
    }

    NormalizedItem {
        slug,
        path,
        title: raw.title.clone(),
        category: raw.category.as_deref().map(title_case).unwrap_or_default(),
        subcategory,
        brief: raw.brief.clone(),
        relative_directory: raw.relative_directory.clone(),
        search,
        extra,
    }
}

/// Title-case a category label.
///
/// Underscores become spaces, runs of separators collapse, and each word is
/// capitalized with the rest lower-cased, so `"SHAPE"`, `"shape"` and
/// `"Shape"` all map to `"Shape"`.
#[must_use]
pub fn title_case(value: &str) -> String {
    value
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Memoized normalization.
///
/// Keeps the last `(raw items, namespace)` input and its result. Asking again
/// with equal inputs returns the same shared slice without recomputing.
#[derive(Debug, Default)]
pub struct PreparedItems<P = ReferencePaths> {
    paths: P,
    last: Option<Prepared>,
}

#[derive(Debug)]
struct Prepared {
    raw_items: Vec<RawItem>,
    namespace: String,
    items: Arc<[NormalizedItem]>,
}

impl<P: PathBuilder> PreparedItems<P> {
    /// Create a memo computing paths with `paths`.
    #[must_use]
    pub fn new(paths: P) -> Self {
        Self { paths, last: None }
    }

    /// Normalized items for the given input, recomputed only when it changed.
    pub fn get(&mut self, raw_items: &[RawItem], namespace: &str) -> Arc<[NormalizedItem]> {
        if let Some(last) = &self.last
            && last.namespace == namespace
            && last.raw_items == raw_items
        {
            return Arc::clone(&last.items);
        }

        let items: Arc<[NormalizedItem]> = normalize_with(raw_items, namespace, &self.paths).into();
        self.last = Some(Prepared {
            raw_items: raw_items.to_vec(),
            namespace: namespace.to_owned(),
            items: Arc::clone(&items),
        });
        items
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::paths::ExamplePaths;

    #[test]
    fn test_title_case_collapses_casing() {
        assert_eq!(title_case("SHAPE"), "Shape");
        assert_eq!(title_case("shape"), "Shape");
        assert_eq!(title_case("Shape"), "Shape");
    }

    #[test]
    fn test_title_case_replaces_underscores() {
        assert_eq!(title_case("lights_camera"), "Lights Camera");
        assert_eq!(title_case("2d_primitives"), "2d Primitives");
        assert_eq!(title_case("__io__"), "Io");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("  "), "");
    }

    #[test]
    fn test_normalize_computes_fields() {
        let raw = vec![
            RawItem::named("sin")
                .with_category("math")
                .with_brief("sine"),
            RawItem::named("Arc").with_category("Shape").with_brief(""),
        ];

        let items = normalize(&raw, "processing");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].slug, "sin");
        assert_eq!(items[0].path, "/reference/sin.html");
        assert_eq!(items[0].category, "Math");
        assert_eq!(items[0].search, "sin sine");
        assert_eq!(items[1].search, "Arc ");
        assert_eq!(items[1].category, "Shape");
    }

    #[test]
    fn test_normalize_missing_brief_is_empty_not_undefined() {
        let items = normalize(&[RawItem::named("noise")], "processing");

        assert_eq!(items[0].search, "noise ");
        assert!(!items[0].search.contains("None"));
    }

    #[test]
    fn test_normalize_uses_title_for_search() {
        let raw = RawItem::named("arc_").with_title("arc()").with_brief("Draws an arc");

        let items = normalize(&[raw], "processing");

        assert_eq!(items[0].slug, "arc_");
        assert_eq!(items[0].search, "arc() Draws an arc");
        assert_eq!(items[0].display_name(), "arc()");
    }

    #[test]
    fn test_normalize_missing_category_is_empty() {
        let items = normalize(&[RawItem::named("x")], "processing");

        assert_eq!(items[0].category, "");
        assert_eq!(items[0].subcategory, None);
    }

    #[test]
    fn test_normalize_blank_subcategory_is_none() {
        let raw = RawItem::named("x").with_category("math").with_subcategory("");

        let items = normalize(&[raw], "processing");

        assert_eq!(items[0].subcategory, None);
    }

    #[test]
    fn test_normalize_missing_name_degrades() {
        let raw = RawItem::default().with_category("math").with_brief("orphan");

        let items = normalize(&[raw], "processing");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].slug, "");
        assert_eq!(items[0].path, "");
        assert_eq!(items[0].search, " orphan");
        assert_eq!(items[0].category, "Math");
    }

    #[test]
    fn test_normalize_library_namespace_path() {
        let items = normalize(&[RawItem::named("SinOsc")], "sound");

        assert_eq!(items[0].path, "/reference/libraries/sound/SinOsc.html");
    }

    #[test]
    fn test_normalize_preserves_extra_fields_and_drops_computed() {
        let mut raw = RawItem::named("arc_");
        raw.extra
            .insert("syntax".to_owned(), serde_json::json!(["arc(a, b)"]));
        raw.extra
            .insert("path".to_owned(), serde_json::json!("/stale.html"));

        let items = normalize(&[raw], "processing");

        assert_eq!(items[0].extra["syntax"], serde_json::json!(["arc(a, b)"]));
        assert!(!items[0].extra.contains_key("path"));
        assert_eq!(items[0].path, "/reference/arc_.html");
    }

    #[test]
    fn test_normalize_with_example_paths() {
        let raw = RawItem::named("PieChart").with_relative_directory("Basics/Shape");

        let items = normalize_with(&[raw], "processing", &ExamplePaths::default());

        assert_eq!(items[0].path, "/examples/PieChart.html");
        assert_eq!(items[0].relative_directory.as_deref(), Some("Basics/Shape"));
    }

    #[test]
    fn test_prepared_items_reuses_result_for_equal_input() {
        let raw = vec![RawItem::named("sin").with_category("math")];
        let mut prepared: PreparedItems = PreparedItems::default();

        let first = prepared.get(&raw, "processing");
        let second = prepared.get(&raw.clone(), "processing");

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_prepared_items_recomputes_on_namespace_change() {
        let raw = vec![RawItem::named("sin")];
        let mut prepared: PreparedItems = PreparedItems::default();

        let core = prepared.get(&raw, "processing");
        let library = prepared.get(&raw, "sound");

        assert!(!Arc::ptr_eq(&core, &library));
        assert_eq!(library[0].path, "/reference/libraries/sound/sin.html");
    }

    #[test]
    fn test_prepared_items_recomputes_on_item_change() {
        let mut raw = vec![RawItem::named("sin")];
        let mut prepared: PreparedItems = PreparedItems::default();

        let before = prepared.get(&raw, "processing");
        raw.push(RawItem::named("cos"));
        let after = prepared.get(&raw, "processing");

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
    }
}
