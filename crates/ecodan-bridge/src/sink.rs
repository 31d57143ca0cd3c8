//! Publish sink boundary.

use crate::status::Value;

/// Receiver for decoded field values.
///
/// The dispatcher calls [`publish`](StateSink::publish) once per changed
/// field per dispatched frame. Implementations decide how to expose the
/// values (sensor entities, metrics, a test buffer).
pub trait StateSink {
    /// Publish one named value.
    fn publish(&mut self, name: &'static str, value: Value);
}

/// Sink that records every published update, in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// The recorded updates.
    pub updates: Vec<(&'static str, Value)>,
}

impl MemorySink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        MemorySink::default()
    }

    /// The most recent value published under `name`, if any.
    pub fn last(&self, name: &str) -> Option<&Value> {
        self.updates
            .iter()
            .rev()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Names published, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.updates.iter().map(|(n, _)| *n).collect()
    }
}

impl StateSink for MemorySink {
    fn publish(&mut self, name: &'static str, value: Value) {
        self.updates.push((name, value));
    }
}
