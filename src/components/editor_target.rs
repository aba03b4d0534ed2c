//! Edit Target Type
//!
//! The list entry currently open in the edit panel.

use crate::models::ListItem;

#[derive(Clone, Debug, PartialEq)]
pub struct EditTarget {
    /// Document path of the list the entry belongs to
    pub path: String,
    pub item: ListItem,
}

impl EditTarget {
    pub fn new(path: impl Into<String>, item: ListItem) -> Self {
        Self { path: path.into(), item }
    }

    /// Entry fields as pretty JSON, for the read-only preview
    pub fn preview(&self) -> String {
        serde_json::to_string_pretty(&self.item).unwrap_or_else(|err| format!("<unprintable: {}>", err))
    }
}
