//! Value Store
//!
//! Local read replica of the host field value. Mutations compute the next list
//! from the replica and submit it; the replica itself only changes when the
//! host pushes a value back (reconciliation).

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::Deserialize;
use serde_json::Value;

use crate::boundary::{HostBoundary, Subscription};
use crate::factory::{ItemFactory, UuidFactory};
use crate::list;
use crate::record::{Record, StepField};

/// How far the replica can be trusted as a base for the next write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    /// Nothing pushed yet
    #[default]
    Uninitialized,
    /// The replica mirrors the host (an absent value counts as the empty list)
    Synced,
    /// The last push could not be read; the replica holds an older list
    Rejected,
}

impl SyncState {
    pub fn is_writable(self) -> bool {
        self == SyncState::Synced
    }
}

/// Result of handing one pushed value to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciled {
    /// The cache now holds the pushed list
    Applied,
    /// The host has no value yet; cache untouched
    Absent,
    /// The pushed value was not a list of records; cache untouched
    Rejected(RejectReason),
}

/// Why a pushed value was not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    NotAList(&'static str),
    BadRecord { index: usize, message: String },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NotAList(kind) => write!(f, "Expected a list, got {}", kind),
            RejectReason::BadRecord { index, message } => {
                write!(f, "Malformed record at {}: {}", index, message)
            }
        }
    }
}

impl std::error::Error for RejectReason {}

/// A mutation was refused because the replica is not a safe base to write from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotWritable(pub SyncState);

impl fmt::Display for NotWritable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field value not writable while {:?}", self.0)
    }
}

impl std::error::Error for NotWritable {}

pub type StoreResult<T> = Result<T, NotWritable>;

type ChangeListener = Box<dyn FnMut(&[Record], SyncState)>;

#[derive(Default)]
struct Cache {
    items: Vec<Record>,
    state: SyncState,
    listeners: Vec<ChangeListener>,
}

/// Give a repeated id a fresh suffix so every record stays addressable
fn unique_id(seen: &HashSet<String>, id: &str) -> String {
    (2..)
        .map(|n| format!("{}-{}", id, n))
        .find(|candidate| !seen.contains(candidate))
        .unwrap_or_else(|| id.to_string())
}

/// Decode a pushed value. `Ok(None)` means "no value yet".
fn decode(value: &Value) -> Result<Option<Vec<Record>>, RejectReason> {
    let elements = match value {
        Value::Null => return Ok(None),
        Value::Array(elements) => elements,
        Value::Bool(_) => return Err(RejectReason::NotAList("a boolean")),
        Value::Number(_) => return Err(RejectReason::NotAList("a number")),
        Value::String(_) => return Err(RejectReason::NotAList("a string")),
        Value::Object(_) => return Err(RejectReason::NotAList("an object")),
    };

    let mut seen = HashSet::with_capacity(elements.len());
    let mut records = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        let mut record = Record::deserialize(element).map_err(|e| RejectReason::BadRecord {
            index,
            message: e.to_string(),
        })?;
        if seen.contains(&record.id) {
            let id = unique_id(&seen, &record.id);
            log::debug!("[STORE] Repeated record id {} renamed to {}", record.id, id);
            record.id = id;
        }
        seen.insert(record.id.clone());
        records.push(record);
    }
    Ok(Some(records))
}

fn reconcile_into(cache: &RefCell<Cache>, value: &Value) -> Reconciled {
    let decoded = decode(value);

    // Listeners run without the cache borrowed so they may read the store.
    let (outcome, items, state, mut listeners) = {
        let mut cache = cache.borrow_mut();
        let outcome = match decoded {
            Ok(Some(records)) => {
                log::debug!("[STORE] Reconciled {} records", records.len());
                cache.items = records;
                cache.state = SyncState::Synced;
                Reconciled::Applied
            }
            Ok(None) => {
                log::debug!("[STORE] Host has no value yet");
                cache.state = SyncState::Synced;
                Reconciled::Absent
            }
            Err(reason) => {
                // not surfaced; the next readable push recovers
                log::debug!("[STORE] Ignoring pushed value: {}", reason);
                cache.state = SyncState::Rejected;
                Reconciled::Rejected(reason)
            }
        };
        let listeners = std::mem::take(&mut cache.listeners);
        (outcome, cache.items.clone(), cache.state, listeners)
    };

    for listener in listeners.iter_mut() {
        listener(&items, state);
    }
    let mut cache = cache.borrow_mut();
    listeners.append(&mut cache.listeners);
    cache.listeners = listeners;

    outcome
}

/// Cached field value plus the three list mutations
pub struct ValueStore<B: HostBoundary, F: ItemFactory = UuidFactory> {
    boundary: B,
    factory: F,
    cache: Rc<RefCell<Cache>>,
    _subscription: Subscription,
}

impl<B: HostBoundary> ValueStore<B> {
    pub fn connect(boundary: B) -> Self {
        Self::with_factory(boundary, UuidFactory)
    }
}

impl<B: HostBoundary, F: ItemFactory> ValueStore<B, F> {
    /// Subscribe to `boundary` for the lifetime of the store
    pub fn with_factory(boundary: B, factory: F) -> Self {
        let cache = Rc::new(RefCell::new(Cache::default()));
        let weak: Weak<RefCell<Cache>> = Rc::downgrade(&cache);
        let subscription = boundary.subscribe(Box::new(move |value: Value| {
            if let Some(cache) = weak.upgrade() {
                reconcile_into(&cache, &value);
            }
        }));

        Self {
            boundary,
            factory,
            cache,
            _subscription: subscription,
        }
    }

    /// Snapshot of the cached list
    pub fn items(&self) -> Vec<Record> {
        self.cache.borrow().items.clone()
    }

    pub fn state(&self) -> SyncState {
        self.cache.borrow().state
    }

    pub fn len(&self) -> usize {
        self.cache.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `listener` with the list and state after every push
    pub fn on_change(&self, listener: impl FnMut(&[Record], SyncState) + 'static) {
        self.cache.borrow_mut().listeners.push(Box::new(listener));
    }

    /// Replace the cache with `value` if it is a readable list
    pub fn reconcile(&self, value: &Value) -> Reconciled {
        reconcile_into(&self.cache, value)
    }

    /// Submit the cached list with a new blank record at the end
    pub fn append(&self) -> StoreResult<Vec<Record>> {
        let next = {
            let cache = self.writable()?;
            let record = self.factory.create_item();
            log::debug!("[STORE] Appending record {}", record.id);
            list::appended(&cache.items, record)
        };
        Ok(self.submit(next))
    }

    /// Submit the cached list with `field` of record `id` set to `text`
    pub fn update(&self, id: &str, field: StepField, text: &str) -> StoreResult<Vec<Record>> {
        let next = {
            let cache = self.writable()?;
            if !cache.items.iter().any(|record| record.id == id) {
                log::debug!("[STORE] Update for unknown record {}", id);
            }
            list::updated(&cache.items, id, field, text)
        };
        Ok(self.submit(next))
    }

    /// Submit the cached list without record `id`
    pub fn delete(&self, id: &str) -> StoreResult<Vec<Record>> {
        let next = {
            let cache = self.writable()?;
            log::debug!("[STORE] Deleting record {}", id);
            list::removed(&cache.items, id)
        };
        Ok(self.submit(next))
    }

    fn writable(&self) -> StoreResult<std::cell::Ref<'_, Cache>> {
        let cache = self.cache.borrow();
        if cache.state.is_writable() {
            Ok(cache)
        } else {
            log::debug!("[STORE] Mutation refused while {:?}", cache.state);
            Err(NotWritable(cache.state))
        }
    }

    fn submit(&self, next: Vec<Record>) -> Vec<Record> {
        log::debug!("[STORE] Submitting {} records", next.len());
        self.boundary.submit(&next);
        next
    }
}
