//! Edit Panel
//!
//! Side column showing the entry picked with "Edit".

use leptos::prelude::*;

use crate::components::EditTarget;
use crate::i18n::use_i18n;

#[component]
pub fn EditPanel(
    editing_target: ReadSignal<Option<EditTarget>>,
    set_editing_target: WriteSignal<Option<EditTarget>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let heading = i18n.t("builder.editor.heading");
    let close_label = i18n.t("builder.common.actions.close");

    view! {
        <Show when=move || editing_target.with(Option::is_some)>
            <aside class="edit-panel">
                <div class="edit-panel-header">
                    <span class="edit-panel-title">{heading.clone()}</span>
                    <button class="close-btn" on:click=move |_| set_editing_target.set(None)>
                        {close_label.clone()}
                    </button>
                </div>
                <div class="edit-panel-path">
                    {move || editing_target.with(|t| t.as_ref().map(|t| t.path.clone()).unwrap_or_default())}
                </div>
                <pre class="edit-panel-preview">
                    {move || editing_target.with(|t| t.as_ref().map(EditTarget::preview).unwrap_or_default())}
                </pre>
            </aside>
        </Show>
    }
}
