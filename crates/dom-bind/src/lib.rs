//! DOM Binding Utilities
//!
//! Attach event handlers to elements the server already rendered.
//! Handlers stay alive for the lifetime of the page, so their closures are leaked.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, NodeList};

/// Run `f` once the document has been parsed.
///
/// Runs immediately when parsing is already done (deferred or module scripts).
pub fn on_ready<F>(document: &Document, f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    if !is_loading(&document.ready_state()) {
        f();
        return Ok(());
    }

    let cb = Closure::once_into_js(f);
    document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())
}

fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Bind `event` on every element matching `selector`.
///
/// `make_handler` runs once per element, so each element can own its own state.
/// Returns how many elements were bound.
pub fn bind_each<M, H>(
    document: &Document,
    selector: &str,
    event: &str,
    mut make_handler: M,
) -> Result<usize, JsValue>
where
    M: FnMut(Element) -> H,
    H: FnMut(Event) + 'static,
{
    let nodes = document.query_selector_all(selector)?;
    let mut bound = 0;

    for element in elements(&nodes) {
        let handler = make_handler(element.clone());
        let cb = Closure::<dyn FnMut(Event)>::new(handler);
        element.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
        cb.forget();
        bound += 1;
    }

    Ok(bound)
}

/// Elements of a node list, skipping text/comment nodes
pub fn elements(nodes: &NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Read `attribute` from the closest ancestor (or self) matching `selector`
pub fn closest_attribute(element: &Element, selector: &str, attribute: &str) -> Option<String> {
    element
        .closest(selector)
        .ok()
        .flatten()?
        .get_attribute(attribute)
}

/// Human-readable text for a thrown JS value
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    if let Some(text) = value.as_string() {
        return text;
    }
    format!("{:?}", value)
}
