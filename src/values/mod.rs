//! Boundary values for exercising argument validation.
//!
//! [`TestValue`] models the dynamic value kinds a loosely-typed caller can
//! pass: undefined, null, number, string, boolean, object, array, function.
//! The providers return one sample of each kind, minus the kinds a test
//! considers valid, so a validation test can loop over every invalid input.
//!
//! `TestValue` is also a convenient argument type for doubles whose callers
//! pass heterogeneous arguments.
//!
//! # Example
//!
//! ```rust
//! use testkit_doubles::values::{all_but_selected, ValueKind};
//!
//! let invalid = all_but_selected(&[ValueKind::String, ValueKind::Null]);
//! assert_eq!(invalid.len(), 6);
//! assert!(invalid
//!     .iter()
//!     .all(|v| v.kind() != ValueKind::String && v.kind() != ValueKind::Null));
//! ```

use std::collections::BTreeMap;
use std::fmt;

/// The kind of a [`TestValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    /// No value at all.
    Undefined,
    /// An explicit empty value.
    Null,
    /// A number.
    Number,
    /// A string.
    String,
    /// A boolean.
    Boolean,
    /// A keyed object.
    Object,
    /// An ordered list.
    Array,
    /// A callable.
    Function,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Function => "function",
        };
        f.write_str(name)
    }
}

/// A dynamically-typed test value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TestValue {
    /// No value at all.
    #[default]
    Undefined,
    /// An explicit empty value.
    Null,
    /// A number.
    Number(f64),
    /// A string.
    Str(String),
    /// A boolean.
    Bool(bool),
    /// A keyed object.
    Object(BTreeMap<String, TestValue>),
    /// An ordered list.
    Array(Vec<TestValue>),
    /// A callable, identified by name.
    Function(String),
}

impl TestValue {
    /// The kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Undefined => ValueKind::Undefined,
            Self::Null => ValueKind::Null,
            Self::Number(_) => ValueKind::Number,
            Self::Str(_) => ValueKind::String,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Object(_) => ValueKind::Object,
            Self::Array(_) => ValueKind::Array,
            Self::Function(_) => ValueKind::Function,
        }
    }
}

impl From<f64> for TestValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for TestValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for TestValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for TestValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for TestValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// One sample of every kind, in a fixed order.
#[must_use]
pub fn all_samples() -> Vec<TestValue> {
    vec![
        TestValue::Undefined,
        TestValue::Null,
        TestValue::Number(123.0),
        TestValue::Str("abc".to_string()),
        TestValue::Bool(true),
        TestValue::Object(BTreeMap::new()),
        TestValue::Array(Vec::new()),
        TestValue::Function("noop".to_string()),
    ]
}

/// Samples of every kind except those in `omit`.
#[must_use]
pub fn all_but_selected(omit: &[ValueKind]) -> Vec<TestValue> {
    all_samples()
        .into_iter()
        .filter(|value| !omit.contains(&value.kind()))
        .collect()
}

fn all_but(kind: ValueKind, extra: impl IntoIterator<Item = TestValue>) -> Vec<TestValue> {
    let mut values = all_but_selected(&[kind]);
    values.extend(extra);
    values
}

/// Samples of every kind except string, followed by `extra`.
pub fn all_but_string(extra: impl IntoIterator<Item = TestValue>) -> Vec<TestValue> {
    all_but(ValueKind::String, extra)
}

/// Samples of every kind except number, followed by `extra`.
pub fn all_but_number(extra: impl IntoIterator<Item = TestValue>) -> Vec<TestValue> {
    all_but(ValueKind::Number, extra)
}

/// Samples of every kind except object, followed by `extra`.
///
/// Null and arrays are kept: they are not objects here.
pub fn all_but_object(extra: impl IntoIterator<Item = TestValue>) -> Vec<TestValue> {
    all_but(ValueKind::Object, extra)
}

/// Samples of every kind except array, followed by `extra`.
pub fn all_but_array(extra: impl IntoIterator<Item = TestValue>) -> Vec<TestValue> {
    all_but(ValueKind::Array, extra)
}

/// Samples of every kind except function, followed by `extra`.
pub fn all_but_function(extra: impl IntoIterator<Item = TestValue>) -> Vec<TestValue> {
    all_but(ValueKind::Function, extra)
}
