//! Definition-time attribute templates.
//!
//! A `Template` is built once when a type is defined and shared by every
//! instance: an insertion-ordered mapping from attribute name to
//! [`Descriptor`], plus two optional fallback hooks for names that have no
//! descriptor. The fallbacks are explicit fields, never entries of the
//! mapping, so no attribute name is reserved and the hooks are not
//! enumerable as attributes.

use crate::descriptor::{Descriptor, FallbackGetter, FallbackSetter};
use crate::AttrStore;
use attra_core::Value;
use indexmap::IndexMap;
use std::rc::Rc;

/// Immutable definition-time template (use [`Template::builder`] to construct).
#[derive(Clone, Default)]
pub struct Template {
    pub(crate) attrs: IndexMap<String, Descriptor>,
    pub(crate) fallback_getter: Option<FallbackGetter>,
    pub(crate) fallback_setter: Option<FallbackSetter>,
}

impl Template {
    /// Start building a template.
    pub fn builder() -> TemplateBuilder {
        TemplateBuilder::new()
    }

    /// Wire a fresh per-instance store from this template.
    pub fn spawn(&self) -> AttrStore {
        AttrStore::new(self)
    }

    /// Look up a declared descriptor by name.
    pub fn descriptor(&self, name: &str) -> Option<&Descriptor> {
        self.attrs.get(name)
    }

    /// Declared attribute names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attrs.keys().map(String::as_str)
    }

    /// Number of declared attributes.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Returns true if no attributes are declared.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

/// Builder for a [`Template`].
#[derive(Default)]
pub struct TemplateBuilder {
    attrs: IndexMap<String, Descriptor>,
    fallback_getter: Option<FallbackGetter>,
    fallback_setter: Option<FallbackSetter>,
}

impl TemplateBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start declaring an attribute. Re-declaring a name overwrites the
    /// earlier descriptor.
    pub fn attr(self, name: impl Into<String>) -> AttrBuilder {
        AttrBuilder {
            builder: self,
            name: name.into(),
            desc: Descriptor::new(),
        }
    }

    /// Install the fallback getter, invoked for reads of undeclared names.
    pub fn fallback_getter(mut self, f: impl Fn(&mut AttrStore, &str) -> Value + 'static) -> Self {
        self.fallback_getter = Some(Rc::new(f));
        self
    }

    /// Install the fallback setter, invoked for writes to undeclared names.
    pub fn fallback_setter(mut self, f: impl Fn(&mut AttrStore, &str, Value) + 'static) -> Self {
        self.fallback_setter = Some(Rc::new(f));
        self
    }

    /// Finish building the template.
    pub fn build(self) -> Template {
        Template {
            attrs: self.attrs,
            fallback_getter: self.fallback_getter,
            fallback_setter: self.fallback_setter,
        }
    }
}

/// Builder for one attribute declaration.
pub struct AttrBuilder {
    builder: TemplateBuilder,
    name: String,
    desc: Descriptor,
}

impl AttrBuilder {
    /// Set the default stored value.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.desc = self.desc.with_value(value);
        self
    }

    /// Attach a lazy initializer, evaluated once on first read.
    pub fn value_fn(mut self, f: impl Fn(&mut AttrStore) -> Value + 'static) -> Self {
        self.desc = self.desc.with_value_fn(f);
        self
    }

    /// Attach a validator gating writes.
    pub fn validator(mut self, f: impl Fn(&mut AttrStore, &Value) -> bool + 'static) -> Self {
        self.desc = self.desc.with_validator(f);
        self
    }

    /// Attach a setter transform applied before storage.
    pub fn setter(mut self, f: impl Fn(&mut AttrStore, Value) -> Value + 'static) -> Self {
        self.desc = self.desc.with_setter(f);
        self
    }

    /// Attach a getter transform applied on read.
    pub fn getter(mut self, f: impl Fn(&mut AttrStore, &Value) -> Value + 'static) -> Self {
        self.desc = self.desc.with_getter(f);
        self
    }

    /// Mark the attribute read-only.
    pub fn read_only(mut self) -> Self {
        self.desc = self.desc.read_only();
        self
    }

    /// Finish declaring this attribute.
    pub fn done(mut self) -> TemplateBuilder {
        self.builder.attrs.insert(self.name, self.desc);
        self.builder
    }
}
