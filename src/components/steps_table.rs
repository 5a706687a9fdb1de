//! Steps Table Component
//!
//! One row per record, keyed by record id.

use leptos::prelude::*;

use crate::components::StepRow;
use crate::store::{row_id, use_field_store, FieldStateStoreFields};

#[component]
pub fn StepsTable() -> impl IntoView {
    let store = use_field_store();

    view! {
        <Show
            when=move || store.loaded().get()
            fallback=|| view! { <p class="steps-loading">"Loading…"</p> }
        >
            <table class="steps-table">
                <tbody>
                    <For
                        each=move || store.rows().get()
                        key=row_id
                        let:row
                    >
                        <StepRow row=row />
                    </For>
                </tbody>
            </table>
        </Show>
    }
}
