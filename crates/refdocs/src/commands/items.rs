//! `refdocs items` command implementation.

use clap::Args;
use refdocs_nav::{NormalizedItem, filter_refs};
use serde::Serialize;

use super::content::ContentArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the items command.
#[derive(Args)]
pub(crate) struct ItemsArgs {
    #[command(flatten)]
    pub content: ContentArgs,
}

/// JSON printed by `refdocs items`.
#[derive(Serialize)]
struct ItemsResponse<'a> {
    /// Items before filtering.
    total: usize,
    /// Items matching the search term, in source order.
    items: Vec<&'a NormalizedItem>,
}

impl ItemsArgs {
    /// Execute the items command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content loading fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let search = self.content.search.clone();
        let loaded = self.content.load(output)?;

        let response = ItemsResponse {
            total: loaded.items.len(),
            items: filter_refs(&loaded.items, &search),
        };
        output.data(&serde_json::to_string_pretty(&response)?);

        Ok(())
    }
}
