//! Step Row Component
//!
//! Three labelled inputs and a delete button for a single record.

use leptos::prelude::*;
use step_store::{Record, StepField};

use crate::context::use_field_context;
use crate::store::{row_id, use_field_store, FieldStateStoreFields};

#[component]
pub fn StepRow(row: RwSignal<Record>) -> impl IntoView {
    let ctx = use_field_context();
    let store = use_field_store();
    let id = row_id(&row);
    let locked = move || !store.writable().get();

    let cells = StepField::ALL
        .into_iter()
        .map(|field| {
            let write_id = id.clone();
            let input_id = format!("{}-{}", field.name(), id);
            view! {
                <td class="step-cell">
                    <label for=input_id.clone()>{field.label()}</label>
                    <input
                        type="text"
                        id=input_id
                        name=field.name()
                        disabled=locked
                        prop:value=move || row.with(|record| field.get(record).to_string())
                        on:input=move |ev| ctx.update(&write_id, field, &event_target_value(&ev))
                    />
                </td>
            }
        })
        .collect_view();

    view! {
        <tr class="step-row">
            {cells}
            <td class="step-cell actions">
                <button
                    class="delete-btn"
                    title="delete"
                    disabled=locked
                    on:click=move |_| ctx.delete(&id)
                >
                    "×"
                </button>
            </td>
        </tr>
    }
}
