//! List Row Component
//!
//! One sortable entry of a `List`: title, subtitle and the action menu.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, make_on_pointerdown, make_on_touchstart, use_sortable};

use crate::components::action_menu::{RowAction, RowActionMenu};
use crate::models::ListItem;

/// Run `callback` with `value` if the parent supplied one
pub fn run_if_present<T: 'static>(callback: Option<Callback<T>>, value: T) -> bool {
    match callback {
        Some(callback) => {
            callback.run(value);
            true
        }
        None => false,
    }
}

/// A single sortable row
#[component]
pub fn ListRow(
    #[prop(into)] item: Signal<ListItem>,
    #[prop(into)] index: Signal<usize>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] subtitle: Signal<String>,
    #[prop(into)] path: String,
    #[prop(optional)] on_edit: Option<Callback<ListItem>>,
    #[prop(optional)] on_duplicate: Option<Callback<ListItem>>,
    #[prop(optional)] on_delete: Option<Callback<ListItem>>,
) -> impl IntoView {
    // Rows are keyed by id, so it never changes for a mounted row
    let id = item.with_untracked(|item| item.id.clone());
    let sortable = use_sortable(id.clone());

    // DnD activators for every registered sensor
    let on_pointerdown = make_on_pointerdown(sortable.ctx, id.clone());
    let on_mousedown = make_on_mousedown(sortable.ctx, id.clone());
    let on_touchstart = make_on_touchstart(sortable.ctx, id.clone());

    let on_select = Callback::new(move |action: RowAction| {
        let callback = match action {
            RowAction::Edit => on_edit,
            RowAction::Duplicate => on_duplicate,
            RowAction::Delete => on_delete,
        };
        run_if_present(callback, item.get_untracked());
    });

    let is_dragging = sortable.is_dragging;
    let row_class = move || if is_dragging.get() { "list-row dragging" } else { "list-row" };

    view! {
        <div
            node_ref=sortable.node_ref
            class=row_class
            style=move || sortable.style.get()
            data-sortable-id=id
            data-index=move || index.get().to_string()
            data-path=path
            role="button"
            tabindex="0"
            aria-roledescription="sortable"
            aria-pressed=move || is_dragging.get().to_string()
            on:pointerdown=on_pointerdown
            on:mousedown=on_mousedown
            on:touchstart=on_touchstart
        >
            <div class="list-row-meta">
                <h1 class="list-row-title">{move || title.get()}</h1>
                <h2 class="list-row-subtitle">{move || subtitle.get()}</h2>
            </div>

            <RowActionMenu on_select=on_select />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_missing_callback_is_skipped() {
        assert!(!run_if_present(None::<Callback<u32>>, 7));
    }

    #[test]
    fn test_present_callback_runs_once() {
        let owner = Owner::new();
        owner.with(|| {
            let calls = Arc::new(AtomicUsize::new(0));
            let seen = Arc::clone(&calls);
            let callback = Callback::new(move |value: u32| {
                seen.fetch_add(value as usize, Ordering::SeqCst);
            });
            assert!(run_if_present(Some(callback), 3));
            assert_eq!(calls.load(Ordering::SeqCst), 3);
        });
    }
}
