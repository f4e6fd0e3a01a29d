//! Per-attribute descriptors.
//!
//! A `Descriptor` is the declarative configuration for one attribute:
//! its stored value, a read-only flag, and optional validator, setter,
//! getter and lazy-initializer callbacks.
//!
//! Callbacks receive the owning [`AttrStore`] as an explicit first
//! parameter, so a getter can read sibling attributes and a validator can
//! consult instance state. They are reference-counted so that cloning a
//! descriptor from a template into an instance shares the callbacks while
//! giving the instance its own `value`/`initialized` state.

use crate::AttrStore;
use attra_core::Value;
use std::fmt;
use std::rc::Rc;

/// Gates whether a candidate value is accepted by `set`.
pub type Validator = Rc<dyn Fn(&mut AttrStore, &Value) -> bool>;

/// Transforms a candidate value before storage.
pub type Setter = Rc<dyn Fn(&mut AttrStore, Value) -> Value>;

/// Transforms the raw stored value on read.
pub type Getter = Rc<dyn Fn(&mut AttrStore, &Value) -> Value>;

/// Lazily computes a default value, run once on first read.
pub type ValueFn = Rc<dyn Fn(&mut AttrStore) -> Value>;

/// Handles reads of names that have no descriptor.
pub type FallbackGetter = Rc<dyn Fn(&mut AttrStore, &str) -> Value>;

/// Handles writes to names that have no descriptor.
pub type FallbackSetter = Rc<dyn Fn(&mut AttrStore, &str, Value)>;

/// Declarative configuration for one attribute.
#[derive(Clone, Default)]
pub struct Descriptor {
    /// Current stored value (`Null` until a default or write establishes one).
    pub value: Value,
    /// Whether the lazy `value_fn` has already run.
    pub initialized: bool,
    /// If true, `set` is a no-op for this attribute.
    pub read_only: bool,
    /// Gates whether `set` applies.
    pub validator: Option<Validator>,
    /// Transforms input before storage.
    pub setter: Option<Setter>,
    /// Transforms stored value on read.
    pub getter: Option<Getter>,
    /// Lazily computed default, evaluated once on first read.
    pub value_fn: Option<ValueFn>,
}

impl Descriptor {
    /// Create an empty descriptor (`Null` value, no policies).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default stored value.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Mark the attribute read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Attach a validator callback.
    pub fn with_validator(mut self, f: impl Fn(&mut AttrStore, &Value) -> bool + 'static) -> Self {
        self.validator = Some(Rc::new(f));
        self
    }

    /// Attach a setter transform.
    pub fn with_setter(mut self, f: impl Fn(&mut AttrStore, Value) -> Value + 'static) -> Self {
        self.setter = Some(Rc::new(f));
        self
    }

    /// Attach a getter transform.
    pub fn with_getter(mut self, f: impl Fn(&mut AttrStore, &Value) -> Value + 'static) -> Self {
        self.getter = Some(Rc::new(f));
        self
    }

    /// Attach a lazy initializer.
    pub fn with_value_fn(mut self, f: impl Fn(&mut AttrStore) -> Value + 'static) -> Self {
        self.value_fn = Some(Rc::new(f));
        self
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("value", &self.value)
            .field("initialized", &self.initialized)
            .field("read_only", &self.read_only)
            .field("validator", &self.validator.is_some())
            .field("setter", &self.setter.is_some())
            .field("getter", &self.getter.is_some())
            .field("value_fn", &self.value_fn.is_some())
            .finish()
    }
}
