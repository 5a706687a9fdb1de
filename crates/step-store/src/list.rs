//! List Mutations
//!
//! Next-state functions for the persisted list. Inputs are never modified;
//! each call builds a fresh sequence.

use crate::record::{Record, StepField};

/// `list ++ [record]`
pub fn appended(list: &[Record], record: Record) -> Vec<Record> {
    let mut next = Vec::with_capacity(list.len() + 1);
    next.extend_from_slice(list);
    next.push(record);
    next
}

/// Replace the record with `id` by a copy with `field` set to `text`.
/// Unknown ids leave the list as it was.
pub fn updated(list: &[Record], id: &str, field: StepField, text: &str) -> Vec<Record> {
    list.iter()
        .map(|record| {
            if record.id == id {
                record.with_field(field, text)
            } else {
                record.clone()
            }
        })
        .collect()
}

/// Drop every record with `id`
pub fn removed(list: &[Record], id: &str) -> Vec<Record> {
    list.iter().filter(|record| record.id != id).cloned().collect()
}
