//! Global Application State Store
//!
//! Uses Leptos reactive_stores for the resume document. Every mutation goes
//! through `store_dispatch` with a `ResumeAction`, and every successful
//! mutation is recorded in an undo history.

use leptos::prelude::*;
use reactive_stores::Store;
use serde_json::{Map, Value};

use crate::document::{self, DocPath, DocumentResult};
use crate::models::{decode_list, ListItem};

pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Operations the store accepts
#[derive(Clone, Debug, PartialEq)]
pub enum ResumeAction {
    /// Replace the whole value at a path
    SetValue { path: DocPath, value: Value },
    /// Remove the list entry with this id from the list at a path
    DeleteItem { path: DocPath, id: String },
    /// Append an entry to the list at a path
    AddItem { path: DocPath, value: Value },
    Undo,
    Redo,
}

impl ResumeAction {
    fn name(&self) -> &'static str {
        match self {
            ResumeAction::SetValue { .. } => "set-value",
            ResumeAction::DeleteItem { .. } => "delete-item",
            ResumeAction::AddItem { .. } => "add-item",
            ResumeAction::Undo => "undo",
            ResumeAction::Redo => "redo",
        }
    }
}

/// Resume document with past/future snapshots
#[derive(Clone, Debug, PartialEq)]
pub struct ResumeHistory {
    past: Vec<Value>,
    present: Value,
    future: Vec<Value>,
    limit: usize,
}

impl Default for ResumeHistory {
    fn default() -> Self {
        Self::new(Value::Object(Map::new()), DEFAULT_HISTORY_LIMIT)
    }
}

impl ResumeHistory {
    pub fn new(present: Value, limit: usize) -> Self {
        Self { past: Vec::new(), present, future: Vec::new(), limit }
    }

    #[cfg(test)]
    pub fn present(&self) -> &Value {
        &self.present
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Raw entries of the list at `path`; anything that is not a list reads as empty
    pub fn raw_list_at(&self, path: &DocPath) -> Vec<Value> {
        document::get(&self.present, path)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }

    pub fn list_at(&self, path: &DocPath) -> Vec<ListItem> {
        decode_list(&self.raw_list_at(path))
    }

    /// Apply an action. A failed mutation leaves document and history untouched.
    pub fn dispatch(&mut self, action: ResumeAction) -> DocumentResult<()> {
        let mut next = self.present.clone();
        match action {
            ResumeAction::Undo => {
                self.undo();
                return Ok(());
            }
            ResumeAction::Redo => {
                self.redo();
                return Ok(());
            }
            ResumeAction::SetValue { path, value } => document::set(&mut next, &path, value)?,
            ResumeAction::DeleteItem { path, id } => document::delete_item(&mut next, &path, &id)?,
            ResumeAction::AddItem { path, value } => document::push_item(&mut next, &path, value)?,
        }
        self.commit(next);
        Ok(())
    }

    fn commit(&mut self, next: Value) {
        let previous = std::mem::replace(&mut self.present, next);
        if self.limit > 0 {
            self.past.push(previous);
            if self.past.len() > self.limit {
                self.past.remove(0);
            }
        }
        self.future.clear();
    }

    fn undo(&mut self) {
        if let Some(previous) = self.past.pop() {
            let current = std::mem::replace(&mut self.present, previous);
            self.future.push(current);
        }
    }

    fn redo(&mut self) {
        if let Some(next) = self.future.pop() {
            let current = std::mem::replace(&mut self.present, next);
            self.past.push(current);
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The resume being edited
    pub resume: ResumeHistory,
}

impl AppState {
    pub fn new(document: Value, history_limit: usize) -> Self {
        Self { resume: ResumeHistory::new(document, history_limit) }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Raw list entries at a path (tracked)
pub fn store_raw_list_at(store: &AppStore, path: &DocPath) -> Vec<Value> {
    store.resume().read().raw_list_at(path)
}

/// Dispatch an action; failures are logged and leave the store unchanged
pub fn store_dispatch(store: &AppStore, action: ResumeAction) -> bool {
    let name = action.name();
    log::debug!("dispatch {}", name);
    let result = store.resume().try_update(|history| history.dispatch(action));
    match result {
        Some(Ok(())) => true,
        Some(Err(err)) => {
            log::warn!("{} rejected: {}", name, err);
            false
        }
        None => {
            log::warn!("{} dropped: store disposed", name);
            false
        }
    }
}

pub fn store_can_undo(store: &AppStore) -> bool {
    store.resume().read().can_undo()
}

pub fn store_can_redo(store: &AppStore) -> bool {
    store.resume().read().can_redo()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::item_id;
    use serde_json::json;

    fn work_path() -> DocPath {
        DocPath::parse("sections.work.items").unwrap()
    }

    fn history() -> ResumeHistory {
        ResumeHistory::new(
            json!({ "sections": { "work": { "items": [
                { "id": "1", "title": "A" },
                { "id": "2", "title": "B" },
                { "id": "3", "title": "C" }
            ] } } }),
            DEFAULT_HISTORY_LIMIT,
        )
    }

    fn order(history: &ResumeHistory) -> Vec<String> {
        history.raw_list_at(&work_path()).iter().filter_map(item_id).collect()
    }

    #[test]
    fn test_missing_list_reads_empty() {
        let h = history();
        let path = DocPath::parse("sections.awards.items").unwrap();
        assert!(h.raw_list_at(&path).is_empty());
        assert!(h.list_at(&DocPath::parse("sections.work").unwrap()).is_empty());
    }

    #[test]
    fn test_set_value_then_undo_redo() {
        let mut h = history();
        let reordered = json!([{ "id": "3", "title": "C" }, { "id": "1", "title": "A" }, { "id": "2", "title": "B" }]);
        h.dispatch(ResumeAction::SetValue { path: work_path(), value: reordered }).unwrap();
        assert_eq!(order(&h), ["3", "1", "2"]);
        assert!(h.can_undo());

        h.dispatch(ResumeAction::Undo).unwrap();
        assert_eq!(order(&h), ["1", "2", "3"]);
        assert!(h.can_redo());

        h.dispatch(ResumeAction::Redo).unwrap();
        assert_eq!(order(&h), ["3", "1", "2"]);
    }

    #[test]
    fn test_new_action_clears_redo() {
        let mut h = history();
        h.dispatch(ResumeAction::DeleteItem { path: work_path(), id: "1".into() }).unwrap();
        h.dispatch(ResumeAction::Undo).unwrap();
        assert!(h.can_redo());
        h.dispatch(ResumeAction::DeleteItem { path: work_path(), id: "2".into() }).unwrap();
        assert!(!h.can_redo());
        assert_eq!(order(&h), ["1", "3"]);
    }

    #[test]
    fn test_failed_action_leaves_history_untouched() {
        let mut h = history();
        let before = h.clone();
        let result = h.dispatch(ResumeAction::DeleteItem { path: work_path(), id: "missing".into() });
        assert!(result.is_err());
        assert_eq!(h, before);
    }

    #[test]
    fn test_history_limit_drops_oldest() {
        let mut h = ResumeHistory::new(json!({ "n": 0 }), 2);
        let n = DocPath::parse("n").unwrap();
        for i in 1..=3 {
            h.dispatch(ResumeAction::SetValue { path: n.clone(), value: json!(i) }).unwrap();
        }
        h.dispatch(ResumeAction::Undo).unwrap();
        h.dispatch(ResumeAction::Undo).unwrap();
        assert!(!h.can_undo());
        assert_eq!(h.present(), &json!({ "n": 1 }));
    }

    #[test]
    fn test_zero_limit_keeps_no_history() {
        let mut h = ResumeHistory::new(json!({}), 0);
        h.dispatch(ResumeAction::AddItem { path: work_path(), value: json!({ "id": "x" }) }).unwrap();
        assert!(!h.can_undo());
        assert_eq!(order(&h), ["x"]);
    }

    #[test]
    fn test_undo_with_empty_history_is_noop() {
        let mut h = history();
        let before = h.clone();
        h.dispatch(ResumeAction::Undo).unwrap();
        h.dispatch(ResumeAction::Redo).unwrap();
        assert_eq!(h, before);
    }
}
