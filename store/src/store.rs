//! The per-instance attribute store.
//!
//! An `AttrStore` is wired from a [`Template`] at instance-construction
//! time: descriptors are cloned so the instance owns its `value` and
//! `initialized` state while callbacks stay shared. All operations are
//! total; unknown names route through the fallback hooks or fall out as
//! `Value::Null` / no-ops, never errors. Callbacks that panic propagate
//! unmasked.

use crate::descriptor::{Descriptor, FallbackGetter, FallbackSetter};
use crate::events::{change_event_name, ChangeEvent, Emitter};
use crate::template::Template;
use attra_core::{Value, ValueEntries, ValueError};
use indexmap::IndexMap;

/// Instance-scoped attribute store with get/set/bulk operations and
/// change notification.
pub struct AttrStore {
    attrs: IndexMap<String, Descriptor>,
    fallback_getter: Option<FallbackGetter>,
    fallback_setter: Option<FallbackSetter>,
    emitter: Emitter,
}

impl AttrStore {
    /// Wire a store from a template. Each instance gets its own descriptor
    /// state; callbacks and fallbacks are shared with the template.
    pub fn new(template: &Template) -> Self {
        Self {
            attrs: template.attrs.clone(),
            fallback_getter: template.fallback_getter.clone(),
            fallback_setter: template.fallback_setter.clone(),
            emitter: Emitter::new(),
        }
    }

    /// Read an attribute.
    ///
    /// Runs the lazy initializer on first read, then applies the getter
    /// transform to the raw stored value. Undeclared names go to the
    /// fallback getter, or come back as `Value::Null` without one.
    ///
    /// Takes `&mut self` because the first read of a lazily-valued
    /// attribute stores its computed default, and because callbacks
    /// receive the store and may themselves read or write.
    pub fn get(&mut self, name: &str) -> Value {
        if !self.attrs.contains_key(name) {
            return match self.fallback_getter.clone() {
                Some(fallback) => fallback(self, name),
                None => Value::Null,
            };
        }

        // Callback handles are cloned out before invocation so the
        // descriptor borrow is not held across re-entrant store access.
        let pending_init = {
            let desc = &self.attrs[name];
            if desc.initialized {
                None
            } else {
                desc.value_fn.clone()
            }
        };
        if let Some(value_fn) = pending_init {
            // Flip the flag first: a re-entrant read of the same attribute
            // inside the initializer must not run it again.
            self.attrs[name].initialized = true;
            let value = value_fn(self);
            if let Some(desc) = self.attrs.get_mut(name) {
                desc.value = value;
            }
        }

        let (raw, getter) = match self.attrs.get(name) {
            Some(desc) => (desc.value.clone(), desc.getter.clone()),
            // A callback removed the descriptor out from under us.
            None => return Value::Null,
        };
        match getter {
            Some(getter) => getter(self, &raw),
            None => raw,
        }
    }

    /// Read an attribute and convert it to a concrete type.
    pub fn get_as<T>(&mut self, name: &str) -> Result<T, ValueError>
    where
        T: TryFrom<Value, Error = ValueError>,
    {
        T::try_from(self.get(name))
    }

    /// Write an attribute.
    ///
    /// Read-only attributes ignore the write. Otherwise the validator (if
    /// any) gates the candidate; on approval the setter transform (if any)
    /// produces the stored value and one `"<name>Change"` event fires with
    /// the old and new values. Validator rejection is silent: no mutation,
    /// no event. Undeclared names go to the fallback setter (no event) or
    /// are ignored.
    pub fn set(&mut self, name: &str, value: Value) {
        if !self.attrs.contains_key(name) {
            if let Some(fallback) = self.fallback_setter.clone() {
                fallback(self, name, value);
            }
            return;
        }

        let (old_val, validator, setter) = {
            let desc = &self.attrs[name];
            if desc.read_only {
                return;
            }
            (desc.value.clone(), desc.validator.clone(), desc.setter.clone())
        };

        if let Some(validator) = validator {
            if !validator(self, &value) {
                return;
            }
        }
        let new_val = match setter {
            Some(setter) => setter(self, value),
            None => value,
        };

        if let Some(desc) = self.attrs.get_mut(name) {
            desc.value = new_val.clone();
            // An explicit write supersedes a pending lazy default.
            desc.initialized = true;
        }

        let event = ChangeEvent::new(name, old_val, new_val);
        self.emitter.emit(&change_event_name(name), &event);
    }

    /// Apply `set` once per entry, in the given order. Each entry succeeds
    /// or is silently rejected independently; there is no atomicity.
    pub fn set_attributes(&mut self, entries: impl IntoIterator<Item = (String, Value)>) {
        for (name, value) in entries {
            self.set(&name, value);
        }
    }

    /// Snapshot every declared attribute as `(name, get(name))`, in
    /// declaration order. Goes through `get`, so getter transforms apply
    /// and pending lazy initializers run. Fallback-handled names are not
    /// enumerable.
    pub fn get_attributes(&mut self) -> ValueEntries {
        let names: Vec<String> = self.attrs.keys().cloned().collect();
        names
            .into_iter()
            .map(|name| {
                let value = self.get(&name);
                (name, value)
            })
            .collect()
    }

    /// Insert a descriptor into this instance's store, overwriting any
    /// existing entry for the name. The descriptor's shape is the caller's
    /// responsibility.
    pub fn add_attribute(&mut self, name: impl Into<String>, descriptor: Descriptor) -> &mut Self {
        self.attrs.insert(name.into(), descriptor);
        self
    }

    /// Insert several descriptors, in the given order.
    pub fn add_attributes(&mut self, entries: impl IntoIterator<Item = (String, Descriptor)>) {
        for (name, descriptor) in entries {
            self.add_attribute(name, descriptor);
        }
    }

    /// Returns true if a descriptor is declared for the name.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Register a listener for changes to one attribute. Listeners fire
    /// synchronously after a successful `set`, in registration order.
    pub fn on_change(&mut self, attr: &str, listener: impl Fn(&ChangeEvent) + 'static) {
        self.emitter.subscribe(change_event_name(attr), listener);
    }

    /// Access the underlying emitter.
    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// Mutable access to the underlying emitter.
    pub fn emitter_mut(&mut self) -> &mut Emitter {
        &mut self.emitter
    }
}
