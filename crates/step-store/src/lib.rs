//! Step Store
//!
//! Synchronization core of the tutorial steps field editor:
//! - record: the persisted unit and its editable attributes
//! - factory: blank records with unique ids
//! - list: pure next-state functions
//! - boundary: contract with the host that owns the field value
//! - store: cached replica, mutations and reconciliation
//! - config: instance parameters

mod boundary;
mod config;
mod factory;
mod list;
mod record;
mod store;

#[cfg(test)]
mod testing;

pub use boundary::{HostBoundary, Subscription, ValueHandler};
pub use config::InstanceParameters;
pub use factory::{ItemFactory, UuidFactory};
pub use list::{appended, removed, updated};
pub use record::{Record, StepField, UnknownField};
pub use store::{NotWritable, Reconciled, RejectReason, StoreResult, SyncState, ValueStore};
