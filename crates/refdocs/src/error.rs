//! CLI error types.

use refdocs_config::ConfigError;
use refdocs_content::ContentError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Content(#[from] ContentError),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}
