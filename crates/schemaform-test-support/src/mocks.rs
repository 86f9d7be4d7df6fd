//! Recorders standing in for UI callbacks.

use std::cell::RefCell;
use std::rc::Rc;

/// Captures every value emitted through a callback-shaped closure.
#[derive(Debug)]
pub struct RecordingSink<T> {
    events: Rc<RefCell<Vec<T>>>,
}

impl<T> Clone for RecordingSink<T> {
    fn clone(&self) -> Self {
        Self {
            events: Rc::clone(&self.events),
        }
    }
}

impl<T> Default for RecordingSink<T> {
    fn default() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T: Clone + 'static> RecordingSink<T> {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one emission.
    pub fn record(&self, value: T) {
        self.events.borrow_mut().push(value);
    }

    /// Closure that records into this sink, usable wherever a callback is expected.
    #[must_use]
    pub fn callback(&self) -> impl Fn(T) + 'static {
        let sink = self.clone();
        move |value| sink.record(value)
    }

    /// Snapshot of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<T> {
        self.events.borrow().clone()
    }

    /// Number of recorded emissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Most recent emission.
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.events.borrow().last().cloned()
    }
}
