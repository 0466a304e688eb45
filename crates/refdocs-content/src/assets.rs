//! Example code files and their preview images.
//!
//! Reference pages show short code examples next to a rendered image. Both
//! live side by side in the content tree and are matched by file name
//! (`arc_0.pde` goes with `arc_0.png`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ContentError;
use crate::scanner::Scanner;

const CODE_EXTENSIONS: &[&str] = &["pde"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg"];

/// Source code of one example.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CodeFile {
    /// File name without extension, the key used to find the image.
    pub name: String,
    pub content: String,
}

/// Preview image of one example.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageFile {
    pub name: String,
    pub path: PathBuf,
}

/// Code and images found in a directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExampleAssets {
    pub code: Vec<CodeFile>,
    pub images: Vec<ImageFile>,
}

/// Example ready for display: code plus its image, if one exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PreparedExample {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageFile>,
}

/// Collect example code and images below `dir`, in sorted path order.
///
/// Unreadable code files are skipped with a warning.
///
/// # Errors
///
/// Returns [`ContentError::NotFound`] if `dir` does not exist.
pub fn load_assets(dir: &Path) -> Result<ExampleAssets, ContentError> {
    let mut assets = ExampleAssets::default();

    for file in Scanner::new(dir, CODE_EXTENSIONS).scan()? {
        match fs::read_to_string(&file.path) {
            Ok(content) => assets.code.push(CodeFile {
                name: file.stem,
                content,
            }),
            Err(e) => {
                tracing::warn!(path = %file.path.display(), error = %e, "Failed to read example code");
            }
        }
    }

    assets.images = Scanner::new(dir, IMAGE_EXTENSIONS)
        .scan()?
        .into_iter()
        .map(|file| ImageFile {
            name: file.stem,
            path: file.path,
        })
        .collect();

    Ok(assets)
}

/// Pair every code file with the image of the same name.
///
/// Returns nothing when either side is empty: a reference page without
/// images shows no example section at all. When several images share a
/// name, the last one wins.
#[must_use]
pub fn prepare_examples(code: &[CodeFile], images: &[ImageFile]) -> Vec<PreparedExample> {
    if code.is_empty() || images.is_empty() {
        return Vec::new();
    }

    code.iter()
        .map(|file| PreparedExample {
            code: file.content.clone(),
            image: images.iter().rfind(|img| img.name == file.name).cloned(),
        })
        .collect()
}
