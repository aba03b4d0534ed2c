//! Row Action Menu
//!
//! Overflow button that opens an Edit / Duplicate / Delete menu.

use leptos::prelude::*;

use crate::i18n::{use_i18n, ACTION_DELETE, ACTION_DUPLICATE, ACTION_EDIT, TOOLTIP_DELETE_ITEM, TOOLTIP_MORE_ACTIONS};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Overflow button clicked
    Activate,
    /// Click landed outside the menu
    OutsideClick,
    /// An entry was picked
    Select,
    Close,
}

impl MenuState {
    pub fn next(self, event: MenuEvent) -> MenuState {
        match event {
            MenuEvent::Activate => MenuState::Open,
            MenuEvent::OutsideClick | MenuEvent::Select | MenuEvent::Close => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Duplicate,
    Delete,
}

/// Overflow menu for a list row
#[component]
pub fn RowActionMenu(#[prop(into)] on_select: Callback<RowAction>) -> impl IntoView {
    let i18n = use_i18n();
    let menu = RwSignal::new(MenuState::Closed);
    let send = move |event: MenuEvent| menu.update(|state| *state = state.next(event));

    let pick = move |action: RowAction| {
        send(MenuEvent::Select);
        on_select.run(action);
    };

    let edit_label = i18n.t(ACTION_EDIT);
    let duplicate_label = i18n.t(ACTION_DUPLICATE);
    let delete_label = i18n.t(ACTION_DELETE);
    let delete_tooltip = i18n.t(TOOLTIP_DELETE_ITEM);
    let more_label = i18n.t(TOOLTIP_MORE_ACTIONS);

    view! {
        <div class="row-actions" data-dnd-ignore="">
            <button
                class="icon-btn"
                aria-haspopup="menu"
                aria-label=more_label
                aria-expanded=move || menu.get().is_open().to_string()
                on:click=move |ev| {
                    ev.stop_propagation();
                    send(MenuEvent::Activate);
                }
            >
                "⋮"
            </button>

            <Show when=move || menu.get().is_open()>
                <div class="menu-backdrop" on:click=move |_| send(MenuEvent::OutsideClick)></div>
                <div class="menu" role="menu" on:keydown=move |ev| {
                    if ev.key() == "Escape" {
                        send(MenuEvent::Close);
                    }
                }>
                    <button class="menu-item" role="menuitem" on:click=move |_| pick(RowAction::Edit)>
                        <span class="menu-icon">"✎"</span>
                        <span class="menu-text">{edit_label.clone()}</span>
                    </button>
                    <button class="menu-item" role="menuitem" on:click=move |_| pick(RowAction::Duplicate)>
                        <span class="menu-icon">"⧉"</span>
                        <span class="menu-text">{duplicate_label.clone()}</span>
                    </button>
                    <hr class="menu-divider" />
                    <div class="menu-tooltip" title=delete_tooltip.clone()>
                        <button class="menu-item danger" role="menuitem" on:click=move |_| pick(RowAction::Delete)>
                            <span class="menu-icon">"🗑"</span>
                            <span class="menu-text">{delete_label.clone()}</span>
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_opens_only_on_activate() {
        assert_eq!(MenuState::Closed.next(MenuEvent::Activate), MenuState::Open);
        assert_eq!(MenuState::Open.next(MenuEvent::Activate), MenuState::Open);
        for event in [MenuEvent::OutsideClick, MenuEvent::Select, MenuEvent::Close] {
            assert_eq!(MenuState::Open.next(event), MenuState::Closed);
            assert_eq!(MenuState::Closed.next(event), MenuState::Closed);
        }
    }

    #[test]
    fn test_menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }
}
