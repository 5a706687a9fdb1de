//! Add Item Button Component

use leptos::prelude::*;

use crate::context::use_field_context;
use crate::store::{use_field_store, FieldStateStoreFields};

/// Appends a blank step; disabled until the field value can be written
#[component]
pub fn AddItemButton() -> impl IntoView {
    let ctx = use_field_context();
    let store = use_field_store();

    view! {
        <button
            class="add-item-btn"
            disabled=move || !store.writable().get()
            on:click=move |_| ctx.append()
        >
            "+ Add Item"
        </button>
    }
}
