//! CLI command implementations.

pub(crate) mod content;
pub(crate) mod examples;
pub(crate) mod items;
pub(crate) mod tree;

pub(crate) use examples::ExamplesArgs;
pub(crate) use items::ItemsArgs;
pub(crate) use tree::TreeArgs;
