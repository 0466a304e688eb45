//! Record loading from a content directory.
//!
//! Each `*.json` file below the root is one record. The file stem is the
//! record's identifier. Reference entries carry their display name in the
//! JSON `name` field; example entries use `title` and `description`.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use refdocs_nav::{ContentKind, RawItem};
use serde_json::{Map, Value};

use crate::error::ContentError;
use crate::scanner::{FileRef, Scanner};

const RECORD_EXTENSIONS: &[&str] = &["json"];

/// Content directory holding one kind of records.
#[derive(Debug, Clone)]
pub struct ContentSource {
    root: PathBuf,
    kind: ContentKind,
}

impl ContentSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, kind: ContentKind) -> Self {
        Self {
            root: root.into(),
            kind,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Load every record below the root, in sorted path order.
    ///
    /// Records that cannot be read or parsed are kept with only their name
    /// set, so they still show up in navigation.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if the root does not exist and
    /// [`ContentError::Io`] if it cannot be listed.
    pub fn load(&self) -> Result<Vec<RawItem>, ContentError> {
        let files = Scanner::new(&self.root, RECORD_EXTENSIONS).scan()?;
        let items: Vec<RawItem> = files.iter().map(|file| self.load_record(file)).collect();

        warn_duplicate_names(&items);
        tracing::debug!(
            root = %self.root.display(),
            kind = %self.kind,
            count = items.len(),
            "Content loaded"
        );

        Ok(items)
    }

    fn load_record(&self, file: &FileRef) -> RawItem {
        let fields = match read_object(&file.path) {
            Ok(fields) => fields,
            Err(message) => {
                tracing::warn!(path = %file.path.display(), error = %message, "Malformed content record");
                Map::new()
            }
        };

        match self.kind {
            ContentKind::Reference => reference_record(&file.stem, fields),
            ContentKind::Examples => example_record(&file.stem, &file.rel_dir, fields),
        }
    }
}

fn read_object(path: &Path) -> Result<Map<String, Value>, String> {
    let text = fs::read_to_string(path).map_err(|e| e.to_string())?;
    match serde_json::from_str::<Value>(&text).map_err(|e| e.to_string())? {
        Value::Object(fields) => Ok(fields),
        other => Err(format!("expected a JSON object, found {}", json_type(&other))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Build a reference record. The JSON `name` is the display title.
pub(crate) fn reference_record(stem: &str, mut fields: Map<String, Value>) -> RawItem {
    let title = take_string(&mut fields, "name");
    RawItem {
        name: Some(stem.to_owned()),
        title,
        category: take_string(&mut fields, "category"),
        subcategory: take_string(&mut fields, "subcategory"),
        brief: take_string(&mut fields, "brief"),
        relative_directory: None,
        extra: fields,
    }
}

/// Build an example record located in `rel_dir`.
///
/// `title` (or `name`) is the display title and `description` stands in for
/// a missing `brief`.
pub(crate) fn example_record(stem: &str, rel_dir: &str, mut fields: Map<String, Value>) -> RawItem {
    let title = take_string(&mut fields, "title").or_else(|| take_string(&mut fields, "name"));
    let brief = take_string(&mut fields, "brief").or_else(|| {
        fields
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_owned)
    });

    RawItem {
        name: Some(stem.to_owned()),
        title,
        category: take_string(&mut fields, "category"),
        subcategory: take_string(&mut fields, "subcategory"),
        brief,
        relative_directory: Some(rel_dir.to_owned()).filter(|d| !d.is_empty()),
        extra: fields,
    }
}

/// Remove a string field. Non-string values stay in `fields` untouched.
fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        Some(Value::String(_)) => match fields.remove(key) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        },
        Some(Value::Null) => {
            fields.remove(key);
            None
        }
        _ => None,
    }
}

fn warn_duplicate_names(items: &[RawItem]) {
    let mut seen = HashSet::new();
    for name in items.iter().filter_map(|item| item.name.as_deref()) {
        if !seen.insert(name) {
            tracing::warn!(name, "Duplicate content record name");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_reference_record_maps_fields() {
        let fields = object(json!({
            "name": "arc()",
            "category": "shape",
            "subcategory": "2d_primitives",
            "brief": "Draws an arc",
            "type": "function"
        }));

        let item = reference_record("arc_", fields);

        assert_eq!(item.name.as_deref(), Some("arc_"));
        assert_eq!(item.title.as_deref(), Some("arc()"));
        assert_eq!(item.category.as_deref(), Some("shape"));
        assert_eq!(item.subcategory.as_deref(), Some("2d_primitives"));
        assert_eq!(item.brief.as_deref(), Some("Draws an arc"));
        assert_eq!(item.extra.get("type"), Some(&json!("function")));
        assert!(!item.extra.contains_key("name"));
    }

    #[test]
    fn test_reference_record_null_and_non_string_fields() {
        let fields = object(json!({
            "category": null,
            "subcategory": 3
        }));

        let item = reference_record("odd", fields);

        assert_eq!(item.category, None);
        assert_eq!(item.subcategory, None);
        assert_eq!(item.extra.get("subcategory"), Some(&json!(3)));
        assert!(!item.extra.contains_key("category"));
    }

    #[test]
    fn test_example_record_uses_description_as_brief() {
        let fields = object(json!({
            "title": "Pie Chart",
            "description": "Uses the arc() function to generate a pie chart."
        }));

        let item = example_record("PieChart", "Basics/Shape", fields);

        assert_eq!(item.title.as_deref(), Some("Pie Chart"));
        assert_eq!(
            item.brief.as_deref(),
            Some("Uses the arc() function to generate a pie chart.")
        );
        assert_eq!(item.relative_directory.as_deref(), Some("Basics/Shape"));
        assert!(item.extra.contains_key("description"));
    }

    #[test]
    fn test_example_record_at_root_has_no_directory() {
        let item = example_record("Loose", "", Map::new());

        assert_eq!(item.relative_directory, None);
    }

    #[test]
    fn test_load_reference_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join("sin_.json"),
            r#"{"name": "sin()", "category": "math", "brief": "Calculates the sine"}"#,
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("arc_.json"),
            r#"{"name": "arc()", "category": "shape"}"#,
        )
        .unwrap();

        let items = ContentSource::new(temp_dir.path(), ContentKind::Reference)
            .load()
            .unwrap();

        let names: Vec<_> = items.iter().filter_map(|i| i.name.as_deref()).collect();
        assert_eq!(names, vec!["arc_", "sin_"]);
        assert_eq!(items[1].brief.as_deref(), Some("Calculates the sine"));
    }

    #[test]
    fn test_load_keeps_malformed_records() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("broken.json"), "{ not json").unwrap();
        fs::write(temp_dir.path().join("list.json"), "[1, 2]").unwrap();

        let items = ContentSource::new(temp_dir.path(), ContentKind::Reference)
            .load()
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], RawItem::named("broken"));
        assert_eq!(items[1], RawItem::named("list"));
    }

    #[test]
    fn test_load_examples_sets_relative_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("Basics").join("Shape").join("PieChart");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("PieChart.json"), r#"{"title": "Pie Chart"}"#).unwrap();

        let items = ContentSource::new(temp_dir.path(), ContentKind::Examples)
            .load()
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].relative_directory.as_deref(),
            Some("Basics/Shape/PieChart")
        );
    }

    #[test]
    fn test_load_missing_root() {
        let source = ContentSource::new("/nonexistent/refdocs/content", ContentKind::Reference);

        assert!(matches!(source.load(), Err(ContentError::NotFound(_))));
    }
}
