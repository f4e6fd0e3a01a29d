//! Attra Store
//!
//! Named, typed attributes for object instances: values with optional
//! defaults, lazy computation, validation, transformation and synchronous
//! change notification.
//!
//! Responsibilities:
//! - Build an immutable attribute template at definition time
//! - Wire a per-instance store from the template
//! - Resolve get/set through descriptors and fallback hooks
//! - Fire change events after successful writes
//!
//! # Module Structure
//!
//! - `template` - Definition-time template and its builder
//! - `descriptor` - Per-attribute descriptor and callback types
//! - `store` - The AttrStore engine (get/set/bulk operations)
//! - `events` - Change events and the synchronous emitter
//! - `validate` - Stock validator constructors

mod descriptor;
mod events;
mod store;
mod template;
pub mod validate;

pub use descriptor::{
    Descriptor, FallbackGetter, FallbackSetter, Getter, Setter, Validator, ValueFn,
};
pub use events::{change_event_name, ChangeEvent, Emitter, Listener};
pub use store::AttrStore;
pub use template::{AttrBuilder, Template, TemplateBuilder};
