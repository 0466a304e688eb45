//! Sidebar state.
//!
//! Holds the search term and visibility of a navigation panel as explicit
//! values and derives the filtered tree from them. The tree is cached per
//! search term, so re-reading the view after unrelated changes (toggling
//! visibility, say) does not rebuild it.

use std::sync::Arc;

use serde::Serialize;

use crate::filter::filter_refs;
use crate::item::{ContentKind, NormalizedItem};
use crate::tree::{OrganizeOptions, TreeNode, organize_refs};

/// Navigation panel state for one kind of content.
#[derive(Debug)]
pub struct Sidebar {
    kind: ContentKind,
    items: Arc<[NormalizedItem]>,
    options: OrganizeOptions,
    show: bool,
    search_term: String,
    cached: Option<CachedTree>,
}

#[derive(Debug)]
struct CachedTree {
    term: String,
    tree: TreeNode,
}

/// Snapshot handed to the presentation layer.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarView<'a> {
    pub kind: ContentKind,
    /// Message id of the heading (`reference` / `examples`).
    pub heading: &'static str,
    pub show: bool,
    pub search_term: &'a str,
    /// Tree to render. `None` while the panel is collapsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<&'a TreeNode>,
}

impl Sidebar {
    /// Create a visible sidebar with an empty search term.
    #[must_use]
    pub fn new(kind: ContentKind, items: impl Into<Arc<[NormalizedItem]>>) -> Self {
        Self {
            kind,
            items: items.into(),
            options: OrganizeOptions::default(),
            show: true,
            search_term: String::new(),
            cached: None,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: OrganizeOptions) -> Self {
        self.options = options;
        self.cached = None;
        self
    }

    #[must_use]
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    #[must_use]
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.show
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    /// Flip visibility and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.show = !self.show;
        self.show
    }

    /// Replace the items. The cached tree is dropped unless the new items are
    /// equal to the current ones.
    pub fn set_items(&mut self, items: impl Into<Arc<[NormalizedItem]>>) {
        let items = items.into();
        if Arc::ptr_eq(&items, &self.items) || items == self.items {
            return;
        }
        self.items = items;
        self.cached = None;
    }

    /// Tree for the current search term.
    pub fn tree(&mut self) -> &TreeNode {
        if self
            .cached
            .as_ref()
            .is_some_and(|cached| cached.term != self.search_term)
        {
            self.cached = None;
        }

        let cached = self.cached.get_or_insert_with(|| {
            let filtered = filter_refs(&self.items, &self.search_term);
            CachedTree {
                term: self.search_term.clone(),
                tree: organize_refs(self.kind, &filtered, &self.options),
            }
        });
        &cached.tree
    }

    /// Snapshot of the current state. The tree is only built when shown.
    pub fn view(&mut self) -> SidebarView<'_> {
        if self.show {
            self.tree();
        }
        SidebarView {
            kind: self.kind,
            heading: self.kind.message_id(),
            show: self.show,
            search_term: &self.search_term,
            tree: self
                .cached
                .as_ref()
                .filter(|_| self.show)
                .map(|cached| &cached.tree),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::item::RawItem;
    use crate::normalize::normalize;

    fn sidebar() -> Sidebar {
        let items = normalize(
            &[
                RawItem::named("sin").with_category("math").with_brief("sine"),
                RawItem::named("Arc").with_category("Shape").with_brief(""),
            ],
            "processing",
        );
        Sidebar::new(ContentKind::Reference, items)
    }

    #[test]
    fn test_new_sidebar_is_shown_with_full_tree() {
        let mut sidebar = sidebar();

        assert!(sidebar.is_shown());
        assert_eq!(sidebar.search_term(), "");
        assert_eq!(sidebar.tree().leaf_count(), 2);
    }

    #[test]
    fn test_search_term_filters_tree() {
        let mut sidebar = sidebar();

        sidebar.set_search_term("sine");
        let tree = sidebar.tree();

        assert_eq!(tree.leaf_count(), 1);
        assert!(tree.find_group("Math").is_some());
        assert!(tree.find_group("Shape").is_none());
    }

    #[test]
    fn test_clear_search_restores_tree() {
        let mut sidebar = sidebar();
        sidebar.set_search_term("sine");
        assert_eq!(sidebar.tree().leaf_count(), 1);

        sidebar.clear_search();

        assert_eq!(sidebar.tree().leaf_count(), 2);
    }

    #[test]
    fn test_tree_cached_while_term_unchanged() {
        let mut sidebar = sidebar();

        let first: *const TreeNode = sidebar.tree();
        sidebar.toggle();
        sidebar.toggle();
        let second: *const TreeNode = sidebar.tree();

        assert_eq!(first, second);
    }

    #[test]
    fn test_toggle_hides_tree_in_view() {
        let mut sidebar = sidebar();

        assert!(!sidebar.toggle());
        let view = sidebar.view();

        assert!(!view.show);
        assert!(view.tree.is_none());
        assert_eq!(view.heading, "reference");
    }

    #[test]
    fn test_hidden_sidebar_keeps_search_term() {
        let mut sidebar = sidebar().with_show(false);
        sidebar.set_search_term("arc");

        sidebar.toggle();
        let view = sidebar.view();

        assert_eq!(view.search_term, "arc");
        assert_eq!(view.tree.map(TreeNode::leaf_count), Some(1));
    }

    #[test]
    fn test_set_items_rebuilds_tree() {
        let mut sidebar = sidebar();
        assert_eq!(sidebar.tree().leaf_count(), 2);

        sidebar.set_items(normalize(&[RawItem::named("noise")], "processing"));

        assert_eq!(sidebar.tree().leaf_count(), 1);
    }

    #[test]
    fn test_with_options_uses_fallback_label() {
        let items = normalize(&[RawItem::named("orphan")], "processing");
        let mut sidebar = Sidebar::new(ContentKind::Examples, items).with_options(OrganizeOptions {
            uncategorized_label: "Misc".to_owned(),
        });

        assert!(sidebar.tree().find_group("Misc").is_some());
    }

    #[test]
    fn test_view_serialization() {
        let mut sidebar = sidebar();
        sidebar.set_search_term("arc");

        let json = serde_json::to_value(sidebar.view()).unwrap();

        assert_eq!(json["kind"], "reference");
        assert_eq!(json["searchTerm"], "arc");
        assert_eq!(json["show"], true);
        assert_eq!(json["tree"]["children"][0]["label"], "Shape");
    }
}
