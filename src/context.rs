//! Field Context
//!
//! The value store shared with every row via the Leptos Context API.

use leptos::prelude::*;
use step_store::{StepField, StoreResult, ValueStore};

use crate::sdk::SdkBoundary;

/// Handle to the value store; mutations go straight to the host
#[derive(Clone, Copy)]
pub struct FieldContext {
    store: StoredValue<ValueStore<SdkBoundary>, LocalStorage>,
}

fn report<T>(action: &str, result: StoreResult<T>) {
    if let Err(e) = result {
        log::warn!("[FIELD] {} skipped: {}", action, e);
    }
}

impl FieldContext {
    pub fn new(store: ValueStore<SdkBoundary>) -> Self {
        Self {
            store: StoredValue::new_local(store),
        }
    }

    pub fn append(&self) {
        self.store.with_value(|store| report("Append", store.append()));
    }

    pub fn update(&self, id: &str, field: StepField, text: &str) {
        self.store
            .with_value(|store| report("Update", store.update(id, field, text)));
    }

    pub fn delete(&self, id: &str) {
        self.store.with_value(|store| report("Delete", store.delete(id)));
    }
}

pub fn use_field_context() -> FieldContext {
    expect_context::<FieldContext>()
}
