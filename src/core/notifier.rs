use std::sync::Arc;

use crate::domain::ports::Observer;

/// Fans a text message out to every registered observer, synchronously and in
/// registration order. Duplicate registrations get duplicate deliveries.
pub struct Notifier {
    observers: Vec<Arc<dyn Observer>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub fn add_observer(&mut self, observer: Arc<dyn Observer>) {
        self.observers.push(observer);
    }

    pub fn notify(&self, message: &str) {
        tracing::debug!(
            "Broadcasting to {} observer(s): {}",
            self.observers.len(),
            message
        );
        for observer in &self.observers {
            observer.receive(message);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
