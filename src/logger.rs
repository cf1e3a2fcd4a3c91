//! Logging capabilities injected into the generator.
//!
//! Every logger satisfies the same minimal contract, [`Logger::log`], which
//! takes a message plus any number of displayable info items and returns
//! nothing. Where a message ends up (nowhere, a buffer, a `tracing`
//! subscriber) is up to the implementation.

use std::cell::{Cell, Ref, RefCell};
use std::fmt::{self, Display};
use std::rc::Rc;

pub trait Logger {
    fn log(&self, message: &str, info: &[&dyn Display]);
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, message: &str, info: &[&dyn Display]) {
        (**self).log(message, info)
    }
}

impl<L: Logger + ?Sized> Logger for Rc<L> {
    fn log(&self, message: &str, info: &[&dyn Display]) {
        (**self).log(message, info)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, message: &str, info: &[&dyn Display]) {
        (**self).log(message, info)
    }
}

/// A single captured call to [`Logger::log`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LogEntry {
    pub message: String,
    pub info: Vec<String>,
}

impl LogEntry {
    pub fn new<I, S>(message: impl Into<String>, info: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LogEntry {
            message: message.into(),
            info: info.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn capture(message: &str, info: &[&dyn Display]) -> Self {
        LogEntry {
            message: message.to_owned(),
            info: info.iter().map(|item| item.to_string()).collect(),
        }
    }
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for item in &self.info {
            write!(f, " {item}")?;
        }
        Ok(())
    }
}

/// Discards everything it is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _message: &str, _info: &[&dyn Display]) {}
}

/// Wraps another logger and drops messages while disabled.
///
/// Enabled on construction. The switch lives in a `Cell`, so a caller holding
/// only a shared handle (for instance an `Rc` it also injected elsewhere) can
/// still flip it.
#[derive(Debug)]
pub struct SwitchableLogger<L> {
    inner: L,
    enabled: Cell<bool>,
}

impl<L: Logger> SwitchableLogger<L> {
    pub fn new(inner: L) -> Self {
        SwitchableLogger {
            inner,
            enabled: Cell::new(true),
        }
    }

    pub fn enable(&self) {
        self.enabled.set(true);
    }

    pub fn disable(&self) {
        self.enabled.set(false);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: Logger + Default> Default for SwitchableLogger<L> {
    fn default() -> Self {
        Self::new(L::default())
    }
}

impl<L: Logger> Logger for SwitchableLogger<L> {
    fn log(&self, message: &str, info: &[&dyn Display]) {
        if !self.enabled.get() {
            return;
        }
        self.inner.log(message, info);
    }
}

/// Destination for a batch of buffered log entries.
pub trait LogSink {
    fn send(&mut self, logs: Vec<LogEntry>);
}

impl<F> LogSink for F
where
    F: FnMut(Vec<LogEntry>),
{
    fn send(&mut self, logs: Vec<LogEntry>) {
        self(logs)
    }
}

/// Queues log entries until [`BufferedLogger::send_logs`] pushes them to the
/// sink.
///
/// # Example
/// ```
/// use fibonacci_memo::logger::{BufferedLogger, LogEntry, Logger};
///
/// let mut delivered = Vec::new();
/// let logger = BufferedLogger::new(|logs: Vec<LogEntry>| delivered.push(logs));
/// logger.log("foo", &[&"bar"]);
/// logger.send_logs();
/// drop(logger);
///
/// assert_eq!(delivered, vec![vec![LogEntry::new("foo", ["bar"])]]);
/// ```
pub struct BufferedLogger<S> {
    sink: RefCell<S>,
    logs: RefCell<Vec<LogEntry>>,
}

impl<S: LogSink> BufferedLogger<S> {
    pub fn new(sink: S) -> Self {
        BufferedLogger {
            sink: RefCell::new(sink),
            logs: RefCell::new(Vec::new()),
        }
    }

    /// Entries logged since the last flush.
    pub fn pending(&self) -> Ref<'_, [LogEntry]> {
        Ref::map(self.logs.borrow(), Vec::as_slice)
    }

    /// Delivers the whole buffer to the sink in one call, then clears it.
    ///
    /// The sink is called even when nothing was logged.
    pub fn send_logs(&self) {
        let logs = self.logs.take();
        tracing::trace!(target: "fibonacci_memo", count = logs.len(), "sending buffered logs");
        self.sink.borrow_mut().send(logs);
    }

    pub fn into_sink(self) -> S {
        self.sink.into_inner()
    }
}

impl<S: LogSink> Logger for BufferedLogger<S> {
    fn log(&self, message: &str, info: &[&dyn Display]) {
        self.logs
            .borrow_mut()
            .push(LogEntry::capture(message, info));
    }
}

impl<S> fmt::Debug for BufferedLogger<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedLogger")
            .field("logs", &self.logs)
            .finish_non_exhaustive()
    }
}

/// Forwards every message to `tracing` as a `DEBUG` event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str, info: &[&dyn Display]) {
        let info: Vec<String> = info.iter().map(|item| item.to_string()).collect();
        tracing::debug!(target: "fibonacci_memo", ?info, "{message}");
    }
}
