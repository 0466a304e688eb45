//! Content records before and after normalization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind of content a sidebar shows.
///
/// Selects both the path layout of normalized items and the shape of the
/// navigation tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// API reference entries grouped by category and subcategory.
    #[default]
    Reference,
    /// Example sketches grouped by their top-level directory.
    Examples,
}

impl ContentKind {
    /// Message identifier used by the presentation layer for the sidebar heading.
    #[must_use]
    pub fn message_id(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Examples => "examples",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message_id())
    }
}

/// Error returned when parsing an unknown [`ContentKind`].
#[derive(Debug, thiserror::Error)]
#[error("Unknown content kind: {0} (expected \"reference\" or \"examples\")")]
pub struct UnknownKindError(String);

impl FromStr for ContentKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reference" => Ok(Self::Reference),
            "examples" | "example" => Ok(Self::Examples),
            _ => Err(UnknownKindError(s.to_owned())),
        }
    }
}

/// Unprocessed content record as handed over by the content layer.
///
/// Every field the organizer relies on is declared here. Anything else the
/// source carried (parameters, syntax, return types...) is kept in `extra`
/// and copied through normalization untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    /// Unique identifier, used as the slug. `None` for malformed records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Display name when it differs from the identifier (e.g. `arc()` for `arc_`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Short description, searched together with the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief: Option<String>,
    /// Directory of an example relative to the examples root (`/` separated).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_directory: Option<String>,
    /// Remaining source fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawItem {
    /// Create a record with only a name set.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    #[must_use]
    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.brief = Some(brief.into());
        self
    }

    #[must_use]
    pub fn with_relative_directory(mut self, dir: impl Into<String>) -> Self {
        self.relative_directory = Some(dir.into());
        self
    }
}

/// Content record after normalization.
///
/// Produced by [`normalize`](crate::normalize). `category` is always present
/// (empty when the source had none) so grouping never has to special-case
/// missing values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedItem {
    /// Identifier copied from [`RawItem::name`]; empty for malformed records.
    pub slug: String,
    /// Navigation target computed from the slug and namespace.
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Title-cased category, empty when the source had none.
    pub category: String,
    /// Title-cased subcategory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_directory: Option<String>,
    /// Text matched by the filter: name, a space, then the brief.
    pub search: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NormalizedItem {
    /// Name shown for this item in navigation.
    ///
    /// Falls back to the slug when the source had no separate display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.slug)
    }
}
