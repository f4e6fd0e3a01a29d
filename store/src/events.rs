//! Change events and the synchronous emitter.
//!
//! Every successful `set` on a declared attribute fires one event named
//! `"<attribute>Change"` carrying the old and new values. Dispatch is
//! synchronous and in-process: listeners run before `set` returns, in the
//! order they were registered.

use attra_core::Value;
use std::collections::HashMap;
use std::rc::Rc;

/// Event name for changes to the given attribute.
pub fn change_event_name(attr: &str) -> String {
    format!("{}Change", attr)
}

/// Payload delivered to change listeners.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    /// Name of the attribute that changed.
    pub attr: String,
    /// Stored value before the write (`Null` if never set).
    pub old_val: Value,
    /// Stored value after the write.
    pub new_val: Value,
}

impl ChangeEvent {
    /// Create a new change event.
    pub fn new(attr: impl Into<String>, old_val: Value, new_val: Value) -> Self {
        Self {
            attr: attr.into(),
            old_val,
            new_val,
        }
    }
}

/// A registered change listener.
pub type Listener = Rc<dyn Fn(&ChangeEvent)>;

/// Listener registry keyed by event name.
#[derive(Default)]
pub struct Emitter {
    listeners: HashMap<String, Vec<Listener>>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for an event name. Listeners for the same event
    /// fire in registration order.
    pub fn subscribe(&mut self, event: impl Into<String>, listener: impl Fn(&ChangeEvent) + 'static) {
        self.listeners
            .entry(event.into())
            .or_default()
            .push(Rc::new(listener));
    }

    /// Dispatch an event to its listeners, synchronously.
    pub fn emit(&self, event: &str, change: &ChangeEvent) {
        if let Some(listeners) = self.listeners.get(event) {
            for listener in listeners {
                listener(change);
            }
        }
    }

    /// Number of listeners registered for an event name.
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.get(event).map_or(0, |l| l.len())
    }
}
