//! Test doubles that record how they were called.

use std::cell::{Ref, RefCell};
use std::fmt::Display;

use crate::logger::{LogEntry, Logger};

/// Records the argument of every call made through [`Spy::record`].
#[derive(Debug)]
pub struct Spy<T> {
    calls: RefCell<Vec<T>>,
}

impl<T> Spy<T> {
    pub fn new() -> Self {
        Spy {
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn record(&self, arg: T) {
        self.calls.borrow_mut().push(arg);
    }

    pub fn calls(&self) -> Ref<'_, [T]> {
        Ref::map(self.calls.borrow(), Vec::as_slice)
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn called(&self) -> bool {
        !self.calls.borrow().is_empty()
    }
}

impl<T: Clone> Spy<T> {
    /// Argument of the `index`-th call, if there was one.
    pub fn call(&self, index: usize) -> Option<T> {
        self.calls.borrow().get(index).cloned()
    }
}

impl<T> Default for Spy<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`Logger`] that keeps every entry it receives.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: Spy<LogEntry>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.calls().to_vec()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries
            .calls()
            .iter()
            .map(|entry| entry.message.clone())
            .collect()
    }

    /// True when some entry's message or one of its info items equals `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.entries
            .calls()
            .iter()
            .any(|entry| entry.message == text || entry.info.iter().any(|item| item == text))
    }

    pub fn len(&self) -> usize {
        self.entries.call_count()
    }

    pub fn is_empty(&self) -> bool {
        !self.entries.called()
    }

    pub fn clear(&self) {
        self.entries.calls.borrow_mut().clear();
    }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str, info: &[&dyn Display]) {
        self.entries.record(LogEntry::capture(message, info));
    }
}
