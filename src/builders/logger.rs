//! Mock logger whose level methods are call-tracked doubles.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::double::{DoubleSet, MethodDouble};
use crate::object::MockObject;

/// Severity levels understood by [`LoggerMock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Finest-grained tracing.
    Trace,
    /// Debugging detail.
    Debug,
    /// Informational messages.
    Info,
    /// Warnings.
    Warn,
    /// Errors.
    Error,
    /// Unrecoverable errors.
    Fatal,
}

impl Level {
    /// Every level, from least to most severe.
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Method name of the level on the logger.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const CHILD: &str = "child";

/// A logger that records every message instead of writing it.
///
/// Level methods and `child` are immediate doubles on a [`MockObject`], so
/// their call logs can be inspected like any other double. Children share
/// the parent's doubles.
///
/// # Example
///
/// ```rust
/// use testkit_doubles::builders::{Level, LoggerMock};
///
/// let logger = LoggerMock::new();
/// logger.child(&["request=7"]).warn("slow response");
///
/// assert_eq!(logger.messages(Level::Warn), vec!["slow response"]);
/// assert!(logger.level(Level::Error).responses().is_empty());
/// ```
#[derive(Clone)]
pub struct LoggerMock {
    set: Arc<DoubleSet<String, String>>,
    doubles: Arc<HashMap<String, MethodDouble<String, String>>>,
}

impl LoggerMock {
    /// Create a logger with every level method doubled.
    ///
    /// # Panics
    ///
    /// Panics if the level method names fail validation.
    #[must_use]
    pub fn new() -> Self {
        let set = DoubleSet::default();
        let names: Vec<&str> = Level::ALL
            .iter()
            .map(|level| level.as_str())
            .chain([CHILD])
            .collect();
        set.add_methods(names, String::new(), true)
            .expect("logger method names are valid");

        let doubles = set.doubles();
        Self {
            set: Arc::new(set),
            doubles: Arc::new(doubles),
        }
    }

    /// Record `message` at `level`.
    pub fn log(&self, level: Level, message: impl Into<String>) {
        if let Err(err) = self.set.target().invoke(level.as_str(), &[message.into()]) {
            tracing::warn!(%level, %err, "logger mock method is no longer available");
        }
    }

    /// Record a trace message.
    pub fn trace(&self, message: impl Into<String>) {
        self.log(Level::Trace, message);
    }

    /// Record a debug message.
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    /// Record an info message.
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    /// Record a warning.
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Level::Warn, message);
    }

    /// Record an error.
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    /// Record a fatal error.
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(Level::Fatal, message);
    }

    /// Derive a child logger. The call is recorded and the child shares this
    /// logger's doubles.
    #[must_use]
    pub fn child(&self, fields: &[&str]) -> LoggerMock {
        let args: Vec<String> = fields.iter().map(ToString::to_string).collect();
        if let Err(err) = self.set.target().invoke(CHILD, &args) {
            tracing::warn!(%err, "logger mock method is no longer available");
        }
        self.clone()
    }

    /// The double behind `level`.
    #[must_use]
    pub fn level(&self, level: Level) -> &MethodDouble<String, String> {
        &self.doubles[level.as_str()]
    }

    /// The double behind `child`.
    #[must_use]
    pub fn child_double(&self) -> &MethodDouble<String, String> {
        &self.doubles[CHILD]
    }

    /// Messages recorded at `level`, in call order.
    #[must_use]
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.level(level)
            .responses()
            .into_iter()
            .map(|call| call.args.join(" "))
            .collect()
    }

    /// The underlying logger object.
    #[must_use]
    pub fn target(&self) -> &MockObject<String, String> {
        self.set.target()
    }

    /// Forget every recorded call.
    pub fn reset(&self) {
        for double in self.doubles.values() {
            double.reset();
        }
    }
}

impl Default for LoggerMock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerMock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<_> = Level::ALL
            .iter()
            .map(|level| (level.as_str(), self.level(*level).call_count()))
            .collect();
        f.debug_struct("LoggerMock").field("calls", &counts).finish()
    }
}
