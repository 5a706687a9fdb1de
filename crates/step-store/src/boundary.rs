//! Host Boundary
//!
//! The two-method contract with whatever owns the persisted field value:
//! an inbound stream of full-list snapshots and an outbound full-list write.

use serde_json::Value;

use crate::record::Record;

/// Callback invoked with every value the host pushes
pub type ValueHandler = Box<dyn FnMut(Value)>;

/// Access to the externally owned field value.
///
/// Implementations must deliver inbound values one at a time per handler.
/// `Value::Null` stands for "no value yet".
pub trait HostBoundary {
    /// Register `handler` for the current value (replayed immediately, if the
    /// host does that) and every later change, including echoes of `submit`.
    fn subscribe(&self, handler: ValueHandler) -> Subscription;

    /// Request persistence of `list` as the whole new value. Fire-and-forget.
    fn submit(&self, list: &[Record]);
}

/// Keeps a handler registered until dropped or cancelled
#[must_use = "dropping a Subscription detaches its handler"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// For hosts that offer no way to unregister
    pub fn detached() -> Self {
        Self { detach: None }
    }

    pub fn cancel(mut self) {
        self.run_detach();
    }

    fn run_detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_detach();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}
