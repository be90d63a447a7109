//! Event subscriptions
//!
//! Handlers are bound to `event` or `event.namespace` keys and invoked synchronously,
//! in the order they were bound.

use tracing::trace;

/// Callback receiving the formatted values, the handle index and the raw values
pub type EventHandler = Box<dyn Fn(&[String], usize, &[f64])>;

/// Events the slider value model fires
pub const EVENT_UPDATE: &str = "update";
pub const EVENT_SET: &str = "set";

struct Binding {
    event: String,
    namespace: String,
    handler: EventHandler,
}

/// Split `update.one` into (`update`, `.one`)
fn split_key(key: &str) -> (&str, &str) {
    match key.find('.') {
        Some(idx) => key.split_at(idx),
        None => (key, ""),
    }
}

/// Ordered registry of event handlers keyed by event name
#[derive(Default)]
pub struct EventRegistry {
    bindings: Vec<Binding>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a handler to `event` or `event.namespace`
    pub fn on(&mut self, key: &str, handler: EventHandler) {
        let (event, namespace) = split_key(key);
        self.bindings.push(Binding {
            event: event.to_string(),
            namespace: namespace.to_string(),
            handler,
        });
    }

    /// Remove handlers matching `key`, returning how many were removed
    ///
    /// `update` removes every `update` handler whatever its namespace, `.ns` removes
    /// every handler in that namespace, and `update.ns` removes only that pair.
    pub fn off(&mut self, key: &str) -> usize {
        let (event, namespace) = split_key(key);
        let before = self.bindings.len();
        self.bindings.retain(|binding| {
            let event_matches = event.is_empty() || binding.event == event;
            let namespace_matches = namespace.is_empty() || binding.namespace == namespace;
            !(event_matches && namespace_matches)
        });
        before - self.bindings.len()
    }

    /// Whether any handler is bound to `event`
    pub fn has(&self, event: &str) -> bool {
        self.bindings.iter().any(|binding| binding.event == event)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Invoke every handler bound to `event`
    pub fn emit(&self, event: &str, values: &[String], handle: usize, raw: &[f64]) {
        for binding in self.bindings.iter().filter(|b| b.event == event) {
            trace!(event, namespace = %binding.namespace, handle, "firing slider event");
            (binding.handler)(values, handle, raw);
        }
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}
