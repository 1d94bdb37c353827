//! Pluggable event sinks.
//!
//! Sinks are the observer side of the engine: they consume events from
//! the bus and react (record them, log them, fire haptics, ...).

use std::sync::{Arc, Mutex};

use crate::events::PaperEvent;

/// Trait for event consumers.
///
/// Implement this to create custom feedback outputs.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &PaperEvent);

    /// Called when the engine shuts down. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// A sink that records events into a shared `Vec` for testing and inspection.
///
/// Clones share the same storage, so a clone kept by the caller sees
/// everything the registered sink receives.
#[derive(Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<PaperEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events.
    pub fn events(&self) -> Vec<PaperEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        match self.events.lock() {
            Ok(events) => events.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &PaperEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink that forwards each event to a closure.
///
/// The usual way for UI or haptics code to subscribe.
pub struct CallbackSink {
    name: String,
    callback: Box<dyn FnMut(&PaperEvent) + Send>,
}

impl CallbackSink {
    pub fn new(name: impl Into<String>, callback: impl FnMut(&PaperEvent) + Send + 'static) -> Self {
        Self {
            name: name.into(),
            callback: Box::new(callback),
        }
    }
}

impl EventSink for CallbackSink {
    fn handle(&mut self, event: &PaperEvent) {
        (self.callback)(event);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A sink that logs events using the `tracing` crate.
pub struct TracingSink {
    level: tracing::Level,
}

impl TracingSink {
    /// Creates a new tracing sink at the given log level.
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(tracing::Level::INFO)
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &PaperEvent) {
        // `tracing` levels must be known statically at each call site.
        let level = self.level;
        if level == tracing::Level::ERROR {
            tracing::error!(tick = event.tick, event = ?event.kind, "paper_event");
        } else if level == tracing::Level::WARN {
            tracing::warn!(tick = event.tick, event = ?event.kind, "paper_event");
        } else if level == tracing::Level::INFO {
            tracing::info!(tick = event.tick, event = ?event.kind, "paper_event");
        } else if level == tracing::Level::DEBUG {
            tracing::debug!(tick = event.tick, event = ?event.kind, "paper_event");
        } else {
            tracing::trace!(tick = event.tick, event = ?event.kind, "paper_event");
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
