//! Resume Builder App
//!
//! Section lists over a bundled sample resume, with undo/redo and an edit
//! side panel.

use leptos::prelude::*;
use reactive_stores::Store;
use serde_json::Value;
use uuid::Uuid;

use crate::components::{EditPanel, EditTarget, List};
use crate::config::UiConfig;
use crate::document::DocPath;
use crate::i18n::I18n;
use crate::models::ListItem;
use crate::store::{store_can_redo, store_can_undo, store_dispatch, AppState, AppStore, ResumeAction};

const SAMPLE_RESUME: &str = include_str!("../fixtures/sample_resume.json");

pub const WORK_PATH: &str = "sections.work.items";
pub const EDUCATION_PATH: &str = "sections.education.items";
pub const SKILLS_PATH: &str = "sections.skills.items";

fn sample_resume() -> Value {
    serde_json::from_str(SAMPLE_RESUME).unwrap_or_else(|err| {
        log::error!("sample resume unreadable: {}", err);
        Value::Object(Default::default())
    })
}

/// Duplicate handler: appends a copy under a fresh id to the same list
fn duplicate_into(store: AppStore, path: &'static str) -> Callback<ListItem> {
    Callback::new(move |item: ListItem| {
        let Ok(path) = DocPath::parse(path) else { return };
        let copy = item.duplicate(Uuid::new_v4().to_string());
        match serde_json::to_value(&copy) {
            Ok(value) => {
                store_dispatch(&store, ResumeAction::AddItem { path, value });
            }
            Err(err) => log::warn!("cannot duplicate `{}`: {}", item.id, err),
        }
    })
}

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    let store: AppStore = Store::new(AppState::new(sample_resume(), config.history_limit));
    provide_context(store);
    let i18n = I18n::bundled(&config.locale);
    provide_context(i18n.clone());
    provide_context(config);

    let (editing_target, set_editing_target) = signal::<Option<EditTarget>>(None);

    let edit_in = move |path: &'static str| {
        Callback::new(move |item: ListItem| set_editing_target.set(Some(EditTarget::new(path, item))))
    };

    view! {
        <div class="app-layout" lang=i18n.locale().to_string()>
            <main class="main-content">
                <div class="toolbar">
                    <button
                        class="toolbar-btn"
                        disabled=move || !store_can_undo(&store)
                        on:click=move |_| {
                            store_dispatch(&store, ResumeAction::Undo);
                        }
                    >
                        {i18n.t("builder.common.actions.undo")}
                    </button>
                    <button
                        class="toolbar-btn"
                        disabled=move || !store_can_redo(&store)
                        on:click=move |_| {
                            store_dispatch(&store, ResumeAction::Redo);
                        }
                    >
                        {i18n.t("builder.common.actions.redo")}
                    </button>
                </div>

                <section class="section">
                    <h2>{i18n.t("builder.sections.work")}</h2>
                    <List
                        path=WORK_PATH
                        title_key="name"
                        subtitle_key="position"
                        on_edit=edit_in(WORK_PATH)
                        on_duplicate=duplicate_into(store, WORK_PATH)
                    />
                </section>

                <section class="section">
                    <h2>{i18n.t("builder.sections.education")}</h2>
                    <List
                        path=EDUCATION_PATH
                        title_key="institution"
                        subtitle_key="area"
                        on_edit=edit_in(EDUCATION_PATH)
                        on_duplicate=duplicate_into(store, EDUCATION_PATH)
                    />
                </section>

                <section class="section">
                    <h2>{i18n.t("builder.sections.skills")}</h2>
                    // No duplicate handler: the menu entry is a no-op here
                    <List
                        path=SKILLS_PATH
                        title_key="name"
                        subtitle_key="keywords"
                        on_edit=edit_in(SKILLS_PATH)
                        class="compact"
                    />
                </section>
            </main>

            <EditPanel editing_target=editing_target set_editing_target=set_editing_target />
        </div>
    }
}
