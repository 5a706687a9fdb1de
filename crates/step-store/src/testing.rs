//! In-memory host and deterministic factory for tests

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata};
use serde_json::Value;

use crate::boundary::{HostBoundary, Subscription, ValueHandler};
use crate::factory::ItemFactory;
use crate::record::Record;

#[derive(Default)]
struct HostInner {
    value: RefCell<Value>,
    handlers: RefCell<Vec<(u64, ValueHandler)>>,
    submissions: RefCell<Vec<Vec<Record>>>,
    next_handler: Cell<u64>,
    echo: Cell<bool>,
    silent: Cell<bool>,
}

/// Host that replays its value on subscribe and can echo submissions back
#[derive(Clone, Default)]
pub struct FakeHost {
    inner: Rc<HostInner>,
}

impl FakeHost {
    pub fn with_value(value: Value) -> Self {
        let host = Self::default();
        *host.inner.value.borrow_mut() = value;
        host
    }

    /// Push every submission straight back to the subscribers
    pub fn echoing() -> Self {
        let host = Self::default();
        host.inner.echo.set(true);
        host
    }

    /// Host that only notifies on later changes, never on subscribe
    pub fn without_replay() -> Self {
        let host = Self::default();
        host.inner.silent.set(true);
        host
    }

    /// Set the value and notify every subscriber, as the host does on any write
    pub fn push(&self, value: Value) {
        *self.inner.value.borrow_mut() = value.clone();
        for (_, handler) in self.inner.handlers.borrow_mut().iter_mut() {
            handler(value.clone());
        }
    }

    pub fn value(&self) -> Value {
        self.inner.value.borrow().clone()
    }

    pub fn submissions(&self) -> Vec<Vec<Record>> {
        self.inner.submissions.borrow().clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.handlers.borrow().len()
    }
}

impl HostBoundary for FakeHost {
    fn subscribe(&self, mut handler: ValueHandler) -> Subscription {
        if !self.inner.silent.get() {
            handler(self.value());
        }

        let id = self.inner.next_handler.get();
        self.inner.next_handler.set(id + 1);
        self.inner.handlers.borrow_mut().push((id, handler));

        let weak: Weak<HostInner> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.handlers.borrow_mut().retain(|(h, _)| *h != id);
            }
        })
    }

    fn submit(&self, list: &[Record]) {
        self.inner.submissions.borrow_mut().push(list.to_vec());
        if self.inner.echo.get() {
            let value = serde_json::to_value(list).unwrap();
            self.push(value);
        }
    }
}

/// Hands out "id-1", "id-2", ...
#[derive(Default)]
pub struct SequentialFactory {
    next: Cell<u32>,
}

impl ItemFactory for SequentialFactory {
    fn create_item(&self) -> Record {
        let n = self.next.get() + 1;
        self.next.set(n);
        Record::blank(format!("id-{}", n))
    }
}

thread_local! {
    static CAPTURED: RefCell<Option<Vec<(Level, String)>>> = const { RefCell::new(None) };
}

struct CaptureLogger;

static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        CAPTURED.with(|captured| {
            if let Some(lines) = captured.borrow_mut().as_mut() {
                lines.push((record.level(), record.args().to_string()));
            }
        });
    }

    fn flush(&self) {}
}

/// Log lines emitted on this thread while `f` runs
pub fn capture_logs(f: impl FnOnce()) -> Vec<(Level, String)> {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        if log::set_logger(&CAPTURE_LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });

    CAPTURED.with(|captured| *captured.borrow_mut() = Some(Vec::new()));
    f();
    CAPTURED.with(|captured| captured.borrow_mut().take().unwrap_or_default())
}
