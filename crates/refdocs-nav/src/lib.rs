//! Sidebar navigation for refdocs.
//!
//! This crate provides:
//! - [`normalize`]: raw content records into [`NormalizedItem`]s
//! - [`filter_items`]: case-insensitive free-text filtering
//! - [`organize`]: navigation [`TreeNode`]s for reference and example content
//! - [`Sidebar`]: explicit search/visibility state with a cached tree
//!
//! Everything here is a pure, synchronous transform of its inputs.
//!
//! # Quick Start
//!
//! ```
//! use refdocs_nav::{RawItem, filter_items, normalize, organize_reference_items};
//!
//! let raw = vec![
//!     RawItem::named("sin").with_category("math").with_brief("sine"),
//!     RawItem::named("Arc").with_category("Shape"),
//! ];
//! let items = normalize(&raw, "processing");
//!
//! let tree = organize_reference_items(&filter_items(&items, "sine"));
//! assert_eq!(tree.leaf_count(), 1);
//! assert!(tree.find_group("Math").is_some());
//! ```

mod filter;
mod item;
mod normalize;
mod paths;
mod sidebar;
mod tree;

pub use filter::{filter_items, filter_refs, matches};
pub use item::{ContentKind, NormalizedItem, RawItem, UnknownKindError};
pub use normalize::{PreparedItems, normalize, normalize_with, title_case};
pub use paths::{
    CORE_NAMESPACE, ExamplePaths, PathBuilder, ReferencePaths, build_path, example_path,
    path_to_name,
};
pub use sidebar::{Sidebar, SidebarView};
pub use tree::{
    OrganizeOptions, TreeNode, UNCATEGORIZED_LABEL, organize, organize_example_items,
    organize_reference_items, organize_refs,
};

/// Path builder matching `kind`, prefixed with `base_url`.
#[must_use]
pub fn paths_for(kind: ContentKind, base_url: &str) -> Box<dyn PathBuilder> {
    match kind {
        ContentKind::Reference => Box::new(ReferencePaths::new(base_url)),
        ContentKind::Examples => Box::new(ExamplePaths::new(base_url)),
    }
}
