//! Content loading errors.

use std::path::PathBuf;

/// Error returned when content cannot be loaded.
///
/// Individual malformed records never produce an error; they degrade to
/// partial records instead. Only problems with the content root itself do.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Content directory does not exist.
    #[error("Content directory not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading the content directory.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
