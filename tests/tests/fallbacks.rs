//! Fallback hook scenarios: undeclared names route to the hooks, declared
//! names never do.

use attra_tests::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_fallback_setter_receives_name_and_value() {
    let writes: Rc<RefCell<Vec<(String, Value)>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = writes.clone();

    let template = Template::builder()
        .fallback_setter(move |_, name, value| sink.borrow_mut().push((name.to_string(), value)))
        .attr("declared")
        .done()
        .build();
    let mut store = template.spawn();

    store.set("ghost", Value::Int(1));

    assert_eq!(
        *writes.borrow(),
        vec![("ghost".to_string(), Value::Int(1))]
    );
}

#[test]
fn test_declared_names_never_reach_fallbacks() {
    let touched = Rc::new(RefCell::new(Vec::new()));
    let reads = touched.clone();
    let writes = touched.clone();

    let template = Template::builder()
        .fallback_getter(move |_, name| {
            reads.borrow_mut().push(name.to_string());
            Value::Null
        })
        .fallback_setter(move |_, name, _| writes.borrow_mut().push(name.to_string()))
        .attr("declared")
        .value(7)
        .done()
        .build();
    let mut store = template.spawn();

    store.set("declared", Value::Int(8));
    assert_eq!(store.get("declared"), Value::Int(8));
    assert!(touched.borrow().is_empty());
}

#[test]
fn test_fallback_getter_can_read_declared_attributes() {
    let template = Template::builder()
        .fallback_getter(|store, name| {
            let prefix = String::try_from(store.get("prefix")).unwrap_or_default();
            Value::from(format!("{}{}", prefix, name))
        })
        .attr("prefix")
        .value("missing:")
        .done()
        .build();
    let mut store = template.spawn();

    assert_eq!(store.get("ghost"), Value::String("missing:ghost".into()));
}

#[test]
fn test_no_fallbacks_means_null_and_ignored() {
    let mut store = Template::builder().attr("declared").done().build().spawn();

    store.set("ghost", Value::Int(1));
    assert_eq!(store.get("ghost"), Value::Null);
    assert!(!store.has_attribute("ghost"));
}

#[test]
fn test_descriptor_added_post_hoc_stops_fallback_routing() {
    let writes: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = writes.clone();

    let template = Template::builder()
        .fallback_setter(move |_, name, _| sink.borrow_mut().push(name.to_string()))
        .build();
    let mut store = template.spawn();

    store.set("late", Value::Int(1));
    store.add_attribute("late", Descriptor::new());
    store.set("late", Value::Int(2));

    assert_eq!(*writes.borrow(), vec!["late"]);
    assert_eq!(store.get("late"), Value::Int(2));
}
