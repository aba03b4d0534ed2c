//! Resume Document Paths
//!
//! Dot-path addressing into the resume document (`serde_json::Value`) and the
//! handful of whole-value operations the store performs on it.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("empty path")]
    EmptyPath,
    #[error("empty segment in path `{0}`")]
    EmptySegment(String),
    #[error("`{segment}` in `{path}` does not address a container")]
    NotAContainer { path: String, segment: String },
    #[error("index {index} is out of bounds in `{path}`")]
    IndexOutOfBounds { path: String, index: usize },
    #[error("value at `{0}` is not a list")]
    NotAList(String),
    #[error("no item with id `{id}` at `{path}`")]
    ItemNotFound { path: String, id: String },
}

pub type DocumentResult<T> = Result<T, DocumentError>;

/// Parsed dot-path such as `sections.work.items` or `a[0].b`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocPath {
    segments: Vec<String>,
}

impl DocPath {
    pub fn parse(raw: &str) -> DocumentResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DocumentError::EmptyPath);
        }
        // a[0].b -> a.0.b
        let normalized = raw.replace('[', ".").replace(']', "");
        let segments: Vec<String> = normalized.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(DocumentError::EmptySegment(raw.to_string()));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True for the single-segment path `id`
    pub fn is_id(&self) -> bool {
        self.segments.len() == 1 && self.segments[0] == "id"
    }
}

impl FromStr for DocPath {
    type Err = DocumentError;

    fn from_str(s: &str) -> DocumentResult<Self> {
        DocPath::parse(s)
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

fn as_index(segment: &str) -> Option<usize> {
    if segment.bytes().all(|b| b.is_ascii_digit()) {
        segment.parse().ok()
    } else {
        None
    }
}

/// Value at `path`, if every segment resolves
pub fn get<'a>(doc: &'a Value, path: &DocPath) -> Option<&'a Value> {
    path.segments.iter().try_fold(doc, |cursor, segment| match cursor {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => items.get(as_index(segment)?),
        _ => None,
    })
}

fn get_mut<'a>(doc: &'a mut Value, path: &DocPath) -> Option<&'a mut Value> {
    path.segments.iter().try_fold(doc, |cursor, segment| match cursor {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => items.get_mut(as_index(segment)?),
        _ => None,
    })
}

fn child_mut<'a>(
    cursor: &'a mut Value,
    segment: &str,
    next_is_index: bool,
    path: &DocPath,
) -> DocumentResult<&'a mut Value> {
    if cursor.is_null() {
        *cursor = Value::Object(Map::new());
    }
    match cursor {
        Value::Object(map) => Ok(map.entry(segment.to_string()).or_insert_with(|| {
            if next_is_index {
                Value::Array(Vec::new())
            } else {
                Value::Object(Map::new())
            }
        })),
        Value::Array(items) => {
            let index = as_index(segment).ok_or_else(|| DocumentError::NotAContainer {
                path: path.to_string(),
                segment: segment.to_string(),
            })?;
            items
                .get_mut(index)
                .ok_or_else(|| DocumentError::IndexOutOfBounds { path: path.to_string(), index })
        }
        _ => Err(DocumentError::NotAContainer { path: path.to_string(), segment: segment.to_string() }),
    }
}

/// Replace the value at `path`, creating missing intermediate containers
pub fn set(doc: &mut Value, path: &DocPath, value: Value) -> DocumentResult<()> {
    let (last, parents) = path.segments.split_last().ok_or(DocumentError::EmptyPath)?;

    let mut cursor = doc;
    for (i, segment) in parents.iter().enumerate() {
        let next_is_index = as_index(&path.segments[i + 1]).is_some();
        cursor = child_mut(cursor, segment, next_is_index, path)?;
    }

    if cursor.is_null() {
        *cursor = Value::Object(Map::new());
    }
    match cursor {
        Value::Object(map) => {
            map.insert(last.clone(), value);
            Ok(())
        }
        Value::Array(items) => {
            let index = as_index(last).ok_or_else(|| DocumentError::NotAContainer {
                path: path.to_string(),
                segment: last.clone(),
            })?;
            if index < items.len() {
                items[index] = value;
            } else if index == items.len() {
                items.push(value);
            } else {
                return Err(DocumentError::IndexOutOfBounds { path: path.to_string(), index });
            }
            Ok(())
        }
        _ => Err(DocumentError::NotAContainer { path: path.to_string(), segment: last.clone() }),
    }
}

/// Text form of an id value; strings as-is, numbers as their JSON text
pub fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Id of a list entry, if it has a string or numeric `id`
pub fn item_id(value: &Value) -> Option<String> {
    value.get("id").and_then(id_text)
}

/// Remove the entry with `id` from the list at `path`, keeping the order of the rest
pub fn delete_item(doc: &mut Value, path: &DocPath, id: &str) -> DocumentResult<()> {
    let items = get_mut(doc, path)
        .and_then(Value::as_array_mut)
        .ok_or_else(|| DocumentError::NotAList(path.to_string()))?;
    let position = items
        .iter()
        .position(|item| item_id(item).as_deref() == Some(id))
        .ok_or_else(|| DocumentError::ItemNotFound { path: path.to_string(), id: id.to_string() })?;
    items.remove(position);
    Ok(())
}

/// Append an entry to the list at `path`, creating the list if it is missing
pub fn push_item(doc: &mut Value, path: &DocPath, value: Value) -> DocumentResult<()> {
    match get_mut(doc, path) {
        Some(Value::Array(items)) => {
            items.push(value);
            Ok(())
        }
        Some(Value::Null) | None => set(doc, path, Value::Array(vec![value])),
        Some(_) => Err(DocumentError::NotAList(path.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(raw: &str) -> DocPath {
        DocPath::parse(raw).unwrap()
    }

    fn ids(doc: &Value, raw: &str) -> Vec<String> {
        get(doc, &path(raw))
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(item_id).collect())
            .unwrap_or_default()
    }

    fn resume() -> Value {
        json!({
            "sections": {
                "work": {
                    "items": [
                        { "id": "1", "title": "A" },
                        { "id": "2", "title": "B" },
                        { "id": "3", "title": "C" }
                    ]
                }
            }
        })
    }

    #[test]
    fn test_parse_paths() {
        assert_eq!(path("sections.work.items").segments(), ["sections", "work", "items"]);
        assert_eq!(path("a[0].b").segments(), ["a", "0", "b"]);
        assert_eq!(path("title").to_string(), "title");
        assert!(path("id").is_id());
        assert!(!path("ids").is_id());
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(DocPath::parse("  "), Err(DocumentError::EmptyPath));
        assert_eq!(DocPath::parse("a..b"), Err(DocumentError::EmptySegment("a..b".to_string())));
        assert!("a.".parse::<DocPath>().is_err());
    }

    #[test]
    fn test_get_nested_and_indexed() {
        let doc = resume();
        assert_eq!(get(&doc, &path("sections.work.items.1.title")), Some(&json!("B")));
        assert_eq!(get(&doc, &path("sections.work.items[2].id")), Some(&json!("3")));
        assert_eq!(get(&doc, &path("sections.work.missing")), None);
        assert_eq!(get(&doc, &path("sections.work.items.9")), None);
        assert_eq!(get(&doc, &path("sections.work.items.1.title.deeper")), None);
    }

    #[test]
    fn test_set_replaces_whole_value() {
        let mut doc = resume();
        let reordered = json!([{ "id": "3" }, { "id": "1" }, { "id": "2" }]);
        set(&mut doc, &path("sections.work.items"), reordered).unwrap();
        assert_eq!(ids(&doc, "sections.work.items"), ["3", "1", "2"]);
    }

    #[test]
    fn test_set_creates_missing_containers() {
        let mut doc = json!({});
        set(&mut doc, &path("sections.awards.items"), json!([])).unwrap();
        assert_eq!(doc, json!({ "sections": { "awards": { "items": [] } } }));

        let mut doc = json!({});
        set(&mut doc, &path("list.0"), json!("first")).unwrap();
        assert_eq!(doc, json!({ "list": ["first"] }));
    }

    #[test]
    fn test_set_through_scalar_fails() {
        let mut doc = json!({ "name": "Jane" });
        let err = set(&mut doc, &path("name.first"), json!("J")).unwrap_err();
        assert!(matches!(err, DocumentError::NotAContainer { .. }));
        assert_eq!(doc, json!({ "name": "Jane" }));
    }

    #[test]
    fn test_delete_item_removes_exactly_one() {
        let mut doc = resume();
        delete_item(&mut doc, &path("sections.work.items"), "2").unwrap();
        assert_eq!(ids(&doc, "sections.work.items"), ["1", "3"]);
    }

    #[test]
    fn test_delete_item_errors() {
        let mut doc = resume();
        assert_eq!(
            delete_item(&mut doc, &path("sections.work.items"), "42"),
            Err(DocumentError::ItemNotFound { path: "sections.work.items".to_string(), id: "42".to_string() })
        );
        assert_eq!(
            delete_item(&mut doc, &path("sections.work"), "1"),
            Err(DocumentError::NotAList("sections.work".to_string()))
        );
        assert_eq!(ids(&doc, "sections.work.items"), ["1", "2", "3"]);
    }

    #[test]
    fn test_numeric_ids() {
        let mut doc = json!({ "items": [{ "id": 1 }, { "id": 2 }, { "id": "x" }, { "id": null }] });
        assert_eq!(ids(&doc, "items"), ["1", "2", "x"]);
        delete_item(&mut doc, &path("items"), "2").unwrap();
        assert_eq!(doc, json!({ "items": [{ "id": 1 }, { "id": "x" }, { "id": null }] }));
    }

    #[test]
    fn test_push_item() {
        let mut doc = resume();
        push_item(&mut doc, &path("sections.work.items"), json!({ "id": "4" })).unwrap();
        assert_eq!(ids(&doc, "sections.work.items"), ["1", "2", "3", "4"]);

        push_item(&mut doc, &path("sections.projects.items"), json!({ "id": "p" })).unwrap();
        assert_eq!(ids(&doc, "sections.projects.items"), ["p"]);

        assert!(push_item(&mut doc, &path("sections.work"), json!({})).is_err());
    }
}
