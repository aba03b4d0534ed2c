//! Frontend Models
//!
//! List entries of the resume document and the labels rendered for them.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::document::{self, DocPath};

pub const DEFAULT_TITLE_KEY: &str = "title";
pub const DEFAULT_SUBTITLE_KEY: &str = "subtitle";

/// One entry of a resume section (work experience, education, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Ids are stored as strings or numbers; both read as text
fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    document::id_text(&value).ok_or_else(|| D::Error::custom(format!("id must be a string or number, got {}", value)))
}

impl ListItem {
    /// Field value at a dot-path relative to the entry
    pub fn field(&self, path: &DocPath) -> Option<&Value> {
        let (first, rest) = path.segments().split_first()?;
        let head = self.fields.get(first)?;
        if rest.is_empty() {
            return Some(head);
        }
        let rest = DocPath::parse(&rest.join(".")).ok()?;
        document::get(head, &rest)
    }

    /// Display text of a field; `id` resolves to the identifier itself
    pub fn text_at(&self, path: &DocPath) -> String {
        if path.is_id() {
            return self.id.clone();
        }
        display_text(self.field(path))
    }

    /// Same fields under a new identifier
    pub fn duplicate(&self, id: impl Into<String>) -> ListItem {
        ListItem { id: id.into(), fields: self.fields.clone() }
    }
}

/// Coerce a document value to display text.
///
/// Strings render as-is, lists join their coerced elements with `", "`
/// (empty elements keep their place), numbers and booleans render as JSON
/// text, and null, missing values and objects render empty.
pub fn display_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| display_text(Some(v)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
        Some(Value::Object(_)) => {
            log::debug!("object value has no display text");
            String::new()
        }
    }
}

/// Decode the entries of a raw list, skipping entries without a string or numeric `id`
pub fn decode_list(raw: &[Value]) -> Vec<ListItem> {
    raw.iter()
        .filter_map(|value| match serde_json::from_value::<ListItem>(value.clone()) {
            Ok(item) => Some(item),
            Err(err) => {
                log::warn!("skipping list entry: {}", err);
                None
            }
        })
        .collect()
}

/// A list row ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub item: ListItem,
    pub index: usize,
    pub title: String,
    pub subtitle: String,
}

/// Resolve title and subtitle for every entry
pub fn resolve_entries(items: &[ListItem], title_key: Option<&DocPath>, subtitle_key: Option<&DocPath>) -> Vec<ListEntry> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| ListEntry {
            item: item.clone(),
            index,
            title: title_key.map(|k| item.text_at(k)).unwrap_or_default(),
            subtitle: subtitle_key.map(|k| item.text_at(k)).unwrap_or_default(),
        })
        .collect()
}
