//! `refdocs tree` command implementation.

use clap::Args;
use refdocs_nav::Sidebar;

use super::content::ContentArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    pub content: ContentArgs,

    /// Print an indented outline instead of JSON.
    #[arg(long)]
    text: bool,
}

impl TreeArgs {
    /// Execute the tree command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content loading fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let search = self.content.search.clone();
        let loaded = self.content.load(output)?;

        let mut sidebar = Sidebar::new(loaded.config.content_resolved.kind, loaded.items)
            .with_options(loaded.config.tree.organize_options());
        sidebar.set_search_term(search);

        if self.text {
            output.tree(sidebar.tree());
        } else {
            output.data(&serde_json::to_string_pretty(&sidebar.view())?);
        }

        Ok(())
    }
}
