//! Content file discovery by filesystem walking.
//!
//! The scanner only finds files; it reads nothing. Entries are visited in
//! sorted name order so the resulting record order is stable across
//! platforms and runs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ContentError;

/// Location of one content file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FileRef {
    /// Absolute path to the file.
    pub path: PathBuf,
    /// Directory of the file relative to the scan root, `/` separated
    /// (empty for files directly under the root).
    pub rel_dir: String,
    /// File name without extension.
    pub stem: String,
}

/// Discovers files with the given extensions below a root directory.
pub(crate) struct Scanner<'a> {
    root: &'a Path,
    extensions: &'a [&'a str],
}

impl<'a> Scanner<'a> {
    /// Create a scanner for files whose lower-cased extension is in `extensions`.
    pub fn new(root: &'a Path, extensions: &'a [&'a str]) -> Self {
        Self { root, extensions }
    }

    /// Walk the root and return matching files.
    ///
    /// A missing root is an error. Unreadable subdirectories are skipped with
    /// a warning so one bad directory does not hide the rest of the content.
    pub fn scan(&self) -> Result<Vec<FileRef>, ContentError> {
        if !self.root.is_dir() {
            return Err(ContentError::NotFound(self.root.to_path_buf()));
        }

        let entries = read_sorted(self.root).map_err(|source| ContentError::Io {
            path: self.root.to_path_buf(),
            source,
        })?;

        let mut refs = Vec::new();
        self.collect(entries, "", &mut refs);
        Ok(refs)
    }

    fn collect(&self, entries: Vec<(PathBuf, bool)>, rel_dir: &str, refs: &mut Vec<FileRef>) {
        for (path, is_dir) in entries {
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }

            if is_dir {
                let child_dir = if rel_dir.is_empty() {
                    name
                } else {
                    format!("{rel_dir}/{name}")
                };
                match read_sorted(&path) {
                    Ok(children) => self.collect(children, &child_dir, refs),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to read content directory");
                    }
                }
                continue;
            }

            let Some(extension) = path
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
            else {
                continue;
            };
            if !self.extensions.contains(&extension.as_str()) {
                continue;
            }
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();

            refs.push(FileRef {
                path,
                rel_dir: rel_dir.to_owned(),
                stem,
            });
        }
    }
}

/// Directory entries sorted by file name, with cached directory flags.
fn read_sorted(dir: &Path) -> std::io::Result<Vec<(PathBuf, bool)>> {
    let mut entries: Vec<_> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|e| {
            let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
            (e.path(), is_dir)
        })
        .collect();
    entries.sort_by(|(a, _), (b, _)| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}
