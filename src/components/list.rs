//! Reorderable List Component
//!
//! Renders the list stored at a document path with drag-to-reorder. Reorders
//! and deletes go to the store; edit and duplicate are handed to the parent.

use leptos::prelude::*;
use leptos_dragdrop::{array_move, DragDropContext, DragEndEvent, SortableContext};
use serde_json::Value;

use crate::components::list_row::{run_if_present, ListRow};
use crate::config::use_ui_config;
use crate::document::{item_id, DocPath};
use crate::i18n::{use_i18n, LIST_EMPTY_TEXT};
use crate::models::{decode_list, resolve_entries, ListEntry, ListItem, DEFAULT_SUBTITLE_KEY, DEFAULT_TITLE_KEY};
use crate::store::{store_dispatch, store_raw_list_at, use_app_store, ResumeAction};

/// Replace action for a finished drag, or `None` when nothing moved.
///
/// The dragged entry is moved (not swapped) from its index to the index of the
/// entry it was dropped over.
pub fn reorder_action(path: &DocPath, list: &[Value], event: &DragEndEvent) -> Option<ResumeAction> {
    let over = event.over.as_deref()?;
    if over == event.active {
        return None;
    }
    let index_of = |id: &str| list.iter().position(|entry| item_id(entry).as_deref() == Some(id));
    let (Some(old_index), Some(new_index)) = (index_of(&event.active), index_of(over)) else {
        log::warn!("drop ignored: `{}` or `{}` not in {}", event.active, over, path);
        return None;
    };
    let value = Value::Array(array_move(list, old_index, new_index));
    Some(ResumeAction::SetValue { path: path.clone(), value })
}

/// The empty notice follows the stored collection, not the entries that decoded
pub fn shows_empty_notice(raw: &[Value]) -> bool {
    raw.is_empty()
}

/// Latest resolved entry for the row keyed by `initial.item.id`.
///
/// Rows are keyed by id only, so a moved or edited row keeps its node and
/// reads its labels from here. `initial` covers the frame where the row is
/// already gone from `entries` but not yet unmounted.
fn entry_signal(entries: Memo<Vec<ListEntry>>, initial: ListEntry) -> Signal<ListEntry> {
    let id = initial.item.id.clone();
    let current = Memo::new(move |_| entries.with(|all| all.iter().find(|e| e.item.id == id).cloned()));
    Signal::derive(move || current.get().unwrap_or_else(|| initial.clone()))
}

fn parse_key(raw: Option<String>, default: &str) -> Option<DocPath> {
    let raw = raw.unwrap_or_else(|| default.to_string());
    match DocPath::parse(&raw) {
        Ok(path) => Some(path),
        Err(err) => {
            log::error!("invalid field key `{}`: {}", raw, err);
            None
        }
    }
}

/// Sortable list bound to the collection at `path`
#[component]
pub fn List(
    #[prop(into)] path: String,
    #[prop(optional, into)] title_key: Option<String>,
    #[prop(optional, into)] subtitle_key: Option<String>,
    #[prop(optional)] on_edit: Option<Callback<ListItem>>,
    #[prop(optional)] on_duplicate: Option<Callback<ListItem>>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let store = use_app_store();
    let i18n = use_i18n();
    let config = use_ui_config();

    let doc_path = match DocPath::parse(&path) {
        Ok(p) => Some(p),
        Err(err) => {
            log::error!("invalid list path `{}`: {}", path, err);
            None
        }
    };
    let title_key = parse_key(title_key, DEFAULT_TITLE_KEY);
    let subtitle_key = parse_key(subtitle_key, DEFAULT_SUBTITLE_KEY);

    // Raw entries, so a reorder writes back exactly what was stored
    let raw_list = Memo::new({
        let doc_path = doc_path.clone();
        move |_| doc_path.as_ref().map(|p| store_raw_list_at(&store, p)).unwrap_or_default()
    });
    let entries = Memo::new(move |_| {
        raw_list.with(|raw| resolve_entries(&decode_list(raw), title_key.as_ref(), subtitle_key.as_ref()))
    });
    let ids = Signal::derive(move || entries.with(|e| e.iter().map(|entry| entry.item.id.clone()).collect::<Vec<_>>()));

    let handle_edit = Callback::new(move |item: ListItem| {
        run_if_present(on_edit, item);
    });

    let handle_duplicate = Callback::new(move |item: ListItem| {
        run_if_present(on_duplicate, item);
    });

    let handle_delete = Callback::new({
        let doc_path = doc_path.clone();
        move |item: ListItem| {
            if let Some(path) = &doc_path {
                store_dispatch(&store, ResumeAction::DeleteItem { path: path.clone(), id: item.id });
            }
        }
    });

    let handle_drag_end = Callback::new(move |event: DragEndEvent| {
        let Some(path) = &doc_path else { return };
        if let Some(action) = raw_list.with_untracked(|list| reorder_action(path, list, &event)) {
            store_dispatch(&store, action);
        }
    });

    let container_class = match class {
        Some(extra) => format!("list-container {}", extra),
        None => "list-container".to_string(),
    };
    let empty_text = i18n.t(LIST_EMPTY_TEXT);

    view! {
        <DragDropContext sensors=config.sensors.sensors() on_drag_end=handle_drag_end>
            <div class=container_class>
                <Show when=move || raw_list.with(|raw| shows_empty_notice(raw))>
                    <div class="list-empty">{empty_text.clone()}</div>
                </Show>

                <SortableContext items=ids>
                    <For
                        each=move || entries.get()
                        key=|entry| entry.item.id.clone()
                        children=move |entry: ListEntry| {
                            let current = entry_signal(entries, entry);
                            view! {
                                <ListRow
                                    item=Signal::derive(move || current.get().item)
                                    index=Signal::derive(move || current.get().index)
                                    title=Signal::derive(move || current.get().title)
                                    subtitle=Signal::derive(move || current.get().subtitle)
                                    path=path.clone()
                                    on_edit=handle_edit
                                    on_duplicate=handle_duplicate
                                    on_delete=handle_delete
                                />
                            }
                        }
                    />
                </SortableContext>
            </div>
        </DragDropContext>
    }
}
