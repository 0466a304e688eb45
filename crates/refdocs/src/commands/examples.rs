//! `refdocs examples` command implementation.

use std::path::PathBuf;

use clap::Args;
use refdocs_content::{load_assets, prepare_examples};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the examples command.
#[derive(Args)]
pub(crate) struct ExamplesArgs {
    /// Directory holding `.pde` example code and preview images.
    dir: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExamplesArgs {
    /// Execute the examples command.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let assets = load_assets(&self.dir)?;
        if self.verbose {
            output.info(&format!(
                "Found {} code files and {} images in {}",
                assets.code.len(),
                assets.images.len(),
                self.dir.display()
            ));
        }

        let prepared = prepare_examples(&assets.code, &assets.images);
        output.data(&serde_json::to_string_pretty(&prepared)?);

        Ok(())
    }
}
