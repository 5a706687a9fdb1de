//! View State Store
//!
//! Reactive mirror of the step list for rendering, using reactive_stores for
//! field-level reactivity. Each record lives in its own signal so an edit
//! only wakes the row that changed. Written only from store reconciliation.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;
use step_store::{Record, SyncState};

/// What the widget renders
#[derive(Clone, Debug, Default, Store)]
pub struct FieldState {
    /// One signal per step, in display order
    pub rows: Vec<RwSignal<Record>>,
    /// Heading from the instance parameters
    pub value_name: String,
    /// Whether edits may be sent right now
    pub writable: bool,
    /// Set once the host has pushed anything
    pub loaded: bool,
}

pub type FieldStore = Store<FieldState>;

pub fn use_field_store() -> FieldStore {
    expect_context::<FieldStore>()
}

/// Id of the record behind a row signal
pub fn row_id(row: &RwSignal<Record>) -> String {
    row.with_untracked(|record| record.id.clone())
}

/// Fold a reconciled list into the view state. Rows whose record is unchanged
/// keep their signal untouched; the row list itself is only replaced when ids
/// or order change.
pub fn store_set_items(store: &FieldStore, items: &[Record], state: SyncState) {
    let current = store.rows().get_untracked();
    let mut by_id: HashMap<String, RwSignal<Record>> =
        current.iter().map(|row| (row_id(row), *row)).collect();

    let rows: Vec<RwSignal<Record>> = items
        .iter()
        .map(|item| match by_id.remove(&item.id) {
            Some(row) => {
                if row.with_untracked(|record| record != item) {
                    row.set(item.clone());
                }
                row
            }
            None => RwSignal::new(item.clone()),
        })
        .collect();

    let reordered = rows.len() != current.len()
        || rows.iter().zip(current.iter()).any(|(a, b)| row_id(a) != row_id(b));
    if reordered {
        store.rows().set(rows);
    }

    let writable = state.is_writable();
    if store.writable().get_untracked() != writable {
        store.writable().set(writable);
    }
    let loaded = state != SyncState::Uninitialized;
    if store.loaded().get_untracked() != loaded {
        store.loaded().set(loaded);
    }
}
