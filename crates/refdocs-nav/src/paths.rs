//! Navigation path building.
//!
//! Paths are pure functions of `(slug, namespace)`: the same inputs always
//! produce the same string, which lets callers memoize anything derived from
//! them.
//!
//! Layout:
//! - core reference (`processing` namespace): `/reference/<slug>.html`
//! - library reference: `/reference/libraries/<namespace>/<slug>.html`
//! - examples: `/examples/<slug>.html`

/// Namespace of the core reference library.
pub const CORE_NAMESPACE: &str = "processing";

const PAGE_EXTENSION: &str = ".html";

/// Computes the navigation target of an item.
pub trait PathBuilder {
    /// Build the path for `slug` within `namespace`.
    ///
    /// An empty slug yields an empty path.
    fn item_path(&self, slug: &str, namespace: &str) -> String;
}

/// Paths of reference pages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferencePaths {
    base_url: String,
}

impl ReferencePaths {
    /// Create a builder that prefixes every path with `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: trim_base(base_url),
        }
    }
}

impl PathBuilder for ReferencePaths {
    fn item_path(&self, slug: &str, namespace: &str) -> String {
        if slug.is_empty() {
            return String::new();
        }
        if namespace.is_empty() || namespace == CORE_NAMESPACE {
            format!("{}/reference/{slug}{PAGE_EXTENSION}", self.base_url)
        } else {
            format!(
                "{}/reference/libraries/{namespace}/{slug}{PAGE_EXTENSION}",
                self.base_url
            )
        }
    }
}

/// Paths of example pages. The namespace does not take part.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExamplePaths {
    base_url: String,
}

impl ExamplePaths {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: trim_base(base_url),
        }
    }
}

impl PathBuilder for ExamplePaths {
    fn item_path(&self, slug: &str, _namespace: &str) -> String {
        if slug.is_empty() {
            return String::new();
        }
        format!("{}/examples/{slug}{PAGE_EXTENSION}", self.base_url)
    }
}

fn trim_base(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_owned()
}

/// Path of a reference page with no base URL.
#[must_use]
pub fn build_path(slug: &str, namespace: &str) -> String {
    ReferencePaths::default().item_path(slug, namespace)
}

/// Path of an example page with no base URL.
#[must_use]
pub fn example_path(slug: &str) -> String {
    ExamplePaths::default().item_path(slug, "")
}

/// Recover the display name of a reference page from its path.
///
/// Takes the last path segment, drops the page extension and renders a
/// trailing underscore as call parentheses (`/reference/arc_.html` → `arc()`).
#[must_use]
pub fn path_to_name(path: &str) -> String {
    let segment = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    let stem = segment.strip_suffix(PAGE_EXTENSION).unwrap_or(segment);
    match stem.strip_suffix('_') {
        Some(function) => format!("{function}()"),
        None => stem.to_owned(),
    }
}
