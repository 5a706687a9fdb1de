//! Item Factory
//!
//! Creates blank records with identifiers that stay unique across concurrent
//! editor sessions writing to the same field.

use uuid::Uuid;

use crate::record::Record;

/// Source of new, blank records
pub trait ItemFactory {
    fn create_item(&self) -> Record;
}

/// Random v4 UUIDs, hyphenated lowercase
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidFactory;

impl ItemFactory for UuidFactory {
    fn create_item(&self) -> Record {
        Record::blank(Uuid::new_v4().to_string())
    }
}
