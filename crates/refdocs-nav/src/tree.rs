//! Sidebar tree building.
//!
//! Groups normalized items into a [`TreeNode`] for the navigation panel. Two
//! shapes exist:
//!
//! - **reference**: category → subcategory → items, everything sorted
//!   alphabetically. Items without a subcategory hang directly under their
//!   category, before the subcategory groups.
//! - **examples**: top-level directory → items. Groups appear in the order
//!   their first item was seen and items keep their input order, since
//!   example sets are curated.
//!
//! Every input item ends up in exactly one leaf. Items with no grouping key
//! are collected in a fallback group placed after all named groups.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::item::{ContentKind, NormalizedItem};

/// Default label of the group collecting items without a category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Node of the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    /// Labeled group of child nodes.
    Group {
        label: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<TreeNode>,
    },
    /// Single navigable item.
    Leaf(NormalizedItem),
}

impl TreeNode {
    /// Create a group node.
    #[must_use]
    pub fn group(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self::Group {
            label: label.into(),
            children,
        }
    }

    /// Label of a group, display name of a leaf.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Group { label, .. } => label,
            Self::Leaf(item) => item.display_name(),
        }
    }

    /// Child nodes. Empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        match self {
            Self::Group { children, .. } => children,
            Self::Leaf(_) => &[],
        }
    }

    /// True when the node holds no leaves at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leaf_count() == 0
    }

    /// Number of leaves in this subtree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Group { children, .. } => children.iter().map(Self::leaf_count).sum(),
            Self::Leaf(_) => 1,
        }
    }

    /// Leaf items in depth-first order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&NormalizedItem> {
        fn collect<'a>(node: &'a TreeNode, out: &mut Vec<&'a NormalizedItem>) {
            match node {
                TreeNode::Group { children, .. } => {
                    for child in children {
                        collect(child, out);
                    }
                }
                TreeNode::Leaf(item) => out.push(item),
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }

    /// Direct child group with the given label.
    #[must_use]
    pub fn find_group(&self, label: &str) -> Option<&TreeNode> {
        self.children()
            .iter()
            .find(|child| matches!(child, Self::Group { label: l, .. } if l == label))
    }
}

/// Options shared by both tree shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrganizeOptions {
    /// Label of the fallback group for items without a grouping key.
    pub uncategorized_label: String,
}

impl Default for OrganizeOptions {
    fn default() -> Self {
        Self {
            uncategorized_label: UNCATEGORIZED_LABEL.to_owned(),
        }
    }
}

/// Build the tree shape matching `kind`.
#[must_use]
pub fn organize(kind: ContentKind, items: &[NormalizedItem], options: &OrganizeOptions) -> TreeNode {
    let refs: Vec<_> = items.iter().collect();
    organize_refs(kind, &refs, options)
}

/// Same as [`organize`] over borrowed items, e.g. the output of
/// [`filter_refs`](crate::filter_refs).
#[must_use]
pub fn organize_refs(
    kind: ContentKind,
    items: &[&NormalizedItem],
    options: &OrganizeOptions,
) -> TreeNode {
    match kind {
        ContentKind::Reference => reference_tree(items, options),
        ContentKind::Examples => example_tree(items, options),
    }
}

/// Reference tree with default options.
#[must_use]
pub fn organize_reference_items(items: &[NormalizedItem]) -> TreeNode {
    organize(ContentKind::Reference, items, &OrganizeOptions::default())
}

/// Examples tree with default options.
#[must_use]
pub fn organize_example_items(items: &[NormalizedItem]) -> TreeNode {
    organize(ContentKind::Examples, items, &OrganizeOptions::default())
}

/// Items of one category, split by subcategory.
#[derive(Default)]
struct CategoryBucket<'a> {
    direct: Vec<&'a NormalizedItem>,
    subcategories: HashMap<&'a str, Vec<&'a NormalizedItem>>,
}

fn reference_tree(items: &[&NormalizedItem], options: &OrganizeOptions) -> TreeNode {
    let mut categories: HashMap<&str, CategoryBucket<'_>> = HashMap::new();
    let mut uncategorized = CategoryBucket::default();

    for &item in items {
        let bucket = if item.category.is_empty() {
            &mut uncategorized
        } else {
            categories.entry(item.category.as_str()).or_default()
        };
        match item.subcategory.as_deref() {
            Some(sub) if !sub.is_empty() => bucket.subcategories.entry(sub).or_default().push(item),
            _ => bucket.direct.push(item),
        }
    }

    let mut labels: Vec<&str> = categories.keys().copied().collect();
    labels.sort_by(|a, b| compare_labels(a, b));

    let mut children: Vec<TreeNode> = labels
        .into_iter()
        .filter_map(|label| {
            let bucket = categories.remove(label)?;
            Some(TreeNode::group(label, category_children(bucket)))
        })
        .collect();

    if !uncategorized.direct.is_empty() || !uncategorized.subcategories.is_empty() {
        let fallback = category_children(uncategorized);
        match children
            .iter_mut()
            .find(|child| child.label() == options.uncategorized_label)
        {
            Some(TreeNode::Group { children: existing, .. }) => {
                merge_into(existing, fallback);
            }
            _ => children.push(TreeNode::group(&options.uncategorized_label, fallback)),
        }
    }

    TreeNode::group("", children)
}

/// Direct leaves first, then subcategory groups, all sorted.
fn category_children(bucket: CategoryBucket<'_>) -> Vec<TreeNode> {
    let CategoryBucket {
        mut direct,
        subcategories,
    } = bucket;

    direct.sort_by(|a, b| compare_items(a, b));
    let mut children: Vec<TreeNode> = direct
        .into_iter()
        .map(|item| TreeNode::Leaf(item.clone()))
        .collect();

    let mut groups: Vec<_> = subcategories.into_iter().collect();
    groups.sort_by(|(a, _), (b, _)| compare_labels(a, b));
    for (label, mut leaves) in groups {
        leaves.sort_by(|a, b| compare_items(a, b));
        let leaves = leaves
            .into_iter()
            .map(|item| TreeNode::Leaf(item.clone()))
            .collect();
        children.push(TreeNode::group(label, leaves));
    }

    children
}

/// Merge fallback children into a named group with the same label.
fn merge_into(existing: &mut Vec<TreeNode>, extra: Vec<TreeNode>) {
    for node in extra {
        match node {
            TreeNode::Group { label, children } => {
                match existing.iter_mut().find(|n| {
                    matches!(n, TreeNode::Group { label: l, .. } if *l == label)
                }) {
                    Some(TreeNode::Group { children: into, .. }) => {
                        into.extend(children);
                        into.sort_by(compare_nodes);
                    }
                    _ => existing.push(TreeNode::Group { label, children }),
                }
            }
            leaf @ TreeNode::Leaf(_) => existing.push(leaf),
        }
    }
    existing.sort_by(compare_nodes);
}

fn example_tree(items: &[&NormalizedItem], options: &OrganizeOptions) -> TreeNode {
    let mut groups: Vec<(&str, Vec<TreeNode>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut fallback = Vec::new();

    for &item in items {
        let Some(key) = example_group_key(item) else {
            fallback.push(TreeNode::Leaf(item.clone()));
            continue;
        };
        let idx = *index.entry(key).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[idx].1.push(TreeNode::Leaf(item.clone()));
    }

    let mut children: Vec<TreeNode> = groups
        .into_iter()
        .map(|(label, leaves)| TreeNode::group(label, leaves))
        .collect();

    if !fallback.is_empty() {
        match children
            .iter_mut()
            .find(|child| child.label() == options.uncategorized_label)
        {
            Some(TreeNode::Group { children: existing, .. }) => existing.extend(fallback),
            _ => children.push(TreeNode::group(&options.uncategorized_label, fallback)),
        }
    }

    TreeNode::group("", children)
}

/// Top-level directory of an example, or its category when no directory is known.
fn example_group_key(item: &NormalizedItem) -> Option<&str> {
    let from_dir = item.relative_directory.as_deref().and_then(|dir| {
        dir.split(['/', '\\'])
            .map(str::trim)
            .find(|segment| !segment.is_empty())
    });
    from_dir.or_else(|| Some(item.category.as_str()).filter(|c| !c.is_empty()))
}

/// Case-insensitive label order, ties broken by exact text.
fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Leaf order: display name ignoring case, then slug.
fn compare_items(a: &NormalizedItem, b: &NormalizedItem) -> Ordering {
    compare_labels(a.display_name(), b.display_name()).then_with(|| a.slug.cmp(&b.slug))
}

/// Leaves before groups, each sorted by label.
fn compare_nodes(a: &TreeNode, b: &TreeNode) -> Ordering {
    match (a, b) {
        (TreeNode::Leaf(x), TreeNode::Leaf(y)) => compare_items(x, y),
        (TreeNode::Leaf(_), TreeNode::Group { .. }) => Ordering::Less,
        (TreeNode::Group { .. }, TreeNode::Leaf(_)) => Ordering::Greater,
        (TreeNode::Group { label: x, .. }, TreeNode::Group { label: y, .. }) => {
            compare_labels(x, y)
        }
    }
}
