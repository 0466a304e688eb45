//! Content arguments shared by `tree` and `items`.

use std::path::PathBuf;

use clap::Args;
use refdocs_config::{CliSettings, Config};
use refdocs_content::ContentSource;
use refdocs_nav::{ContentKind, NormalizedItem, normalize_with, paths_for};

use crate::error::CliError;
use crate::output::Output;

/// Where to read content from and how to normalize it.
#[derive(Args)]
pub(crate) struct ContentArgs {
    /// Path to configuration file (default: auto-discover refdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Content kind: reference or examples (overrides config).
    #[arg(short, long)]
    kind: Option<ContentKind>,

    /// Library namespace used for reference paths (overrides config).
    #[arg(short, long, env = "REFDOCS_NAMESPACE")]
    namespace: Option<String>,

    /// Prefix for generated paths (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Free-text filter applied to item names and briefs.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Normalized content together with the configuration it was loaded with.
pub(crate) struct LoadedContent {
    pub config: Config,
    pub items: Vec<NormalizedItem>,
}

impl ContentArgs {
    /// Load configuration, read the content directory and normalize it.
    pub(crate) fn load(self, output: &Output) -> Result<LoadedContent, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            kind: self.kind,
            namespace: self.namespace,
            base_url: self.base_url,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let content = &config.content_resolved;

        if self.verbose {
            output.info(&format!(
                "Loading {} content from {}",
                content.kind,
                content.source_dir.display()
            ));
        }

        let raw = ContentSource::new(&content.source_dir, content.kind).load()?;
        let paths = paths_for(content.kind, &config.paths.base_url);
        let items = normalize_with(&raw, &content.namespace, &*paths);

        tracing::info!(
            count = items.len(),
            namespace = %content.namespace,
            "Items normalized"
        );

        Ok(LoadedContent { config, items })
    }
}
