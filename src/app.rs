//! Tutorial Steps Field App
//!
//! Wires the host SDK to the value store and the view state.

use leptos::prelude::*;
use reactive_stores::Store;
use step_store::ValueStore;

use crate::components::{AddItemButton, StepsTable};
use crate::context::FieldContext;
use crate::sdk::FieldExtensionSdk;
use crate::store::{store_set_items, FieldState, FieldStateStoreFields};

#[component]
pub fn App(sdk: FieldExtensionSdk) -> impl IntoView {
    sdk.start_auto_resizer();

    let params = sdk.instance_parameters().unwrap_or_else(|e| {
        log::warn!("[APP] Bad instance parameters, using defaults: {}", e);
        Default::default()
    });

    let store = Store::new(FieldState {
        value_name: params.value_name,
        ..Default::default()
    });

    let value_store = ValueStore::connect(sdk.boundary());
    value_store.on_change(move |items, state| {
        log::debug!("[APP] Rendering {} steps ({:?})", items.len(), state);
        store_set_items(&store, items, state);
    });
    // the host may have replayed its value before the listener existed
    store_set_items(&store, &value_store.items(), value_store.state());

    provide_context(store);
    provide_context(FieldContext::new(value_store));

    view! {
        <div class="steps-field">
            <h3 class="value-name">{move || store.value_name().get()}</h3>
            <StepsTable />
            <AddItemButton />
        </div>
    }
}
