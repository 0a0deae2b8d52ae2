//! `MockObject` implementation.

use std::collections::HashMap;
use std::fmt::Debug;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::future::{self, Ready};
use parking_lot::Mutex;

use crate::double::ResultFuture;
use crate::error::{Error, Result};

/// A callable stored in a method slot.
pub type Method<V, E> = Arc<dyn Fn(&[V]) -> Outcome<V, E> + Send + Sync>;

/// What a method invocation yields.
pub enum Outcome<V, E> {
    /// The method produced its value synchronously.
    Ready(V),
    /// The method returned a result that settles later.
    Deferred(ResultFuture<V, E>),
}

impl<V, E> Outcome<V, E> {
    /// Returns `true` for a synchronous outcome.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Returns `true` for a deferred outcome.
    #[must_use]
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// The synchronous value, if any.
    #[must_use]
    pub fn ready(self) -> Option<V> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Deferred(_) => None,
        }
    }

    /// The deferred observer, if any.
    #[must_use]
    pub fn deferred(self) -> Option<ResultFuture<V, E>> {
        match self {
            Self::Ready(_) => None,
            Self::Deferred(future) => Some(future),
        }
    }
}

impl<V: Debug, E> Debug for Outcome<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Self::Deferred(future) => f.debug_tuple("Deferred").field(future).finish(),
        }
    }
}

/// Future returned by awaiting an [`Outcome`].
///
/// A ready outcome completes immediately with `Ok(value)`.
pub struct OutcomeFuture<V, E> {
    state: OutcomeState<V, E>,
}

enum OutcomeState<V, E> {
    Ready(Ready<std::result::Result<V, E>>),
    Deferred(ResultFuture<V, E>),
}

impl<V: Clone, E: Clone> IntoFuture for Outcome<V, E> {
    type Output = std::result::Result<V, E>;
    type IntoFuture = OutcomeFuture<V, E>;

    fn into_future(self) -> Self::IntoFuture {
        let state = match self {
            Self::Ready(value) => OutcomeState::Ready(future::ready(Ok(value))),
            Self::Deferred(future) => OutcomeState::Deferred(future),
        };
        OutcomeFuture { state }
    }
}

impl<V: Clone, E: Clone> Future for OutcomeFuture<V, E> {
    type Output = std::result::Result<V, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().state {
            OutcomeState::Ready(ready) => Pin::new(ready).poll(cx),
            OutcomeState::Deferred(deferred) => Pin::new(deferred).poll(cx),
        }
    }
}

/// An object made of named, replaceable method slots.
///
/// Cloning yields another handle to the same object, so code under test and
/// test code can share one target.
pub struct MockObject<V, E> {
    slots: Arc<Mutex<HashMap<String, Method<V, E>>>>,
}

impl<V, E> MockObject<V, E> {
    /// Create an object with no methods.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Define (or redefine) a method.
    pub fn define<F>(&self, name: impl Into<String>, method: F) -> &Self
    where
        F: Fn(&[V]) -> Outcome<V, E> + Send + Sync + 'static,
    {
        self.slots.lock().insert(name.into(), Arc::new(method));
        self
    }

    /// Check whether a method is defined under `name`.
    #[must_use]
    pub fn has_method(&self, name: &str) -> bool {
        self.slots.lock().contains_key(name)
    }

    /// Names of all defined methods, sorted.
    #[must_use]
    pub fn method_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.slots.lock().keys().cloned().collect();
        names.sort();
        names
    }

    /// Get the method stored under `name`.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<Method<V, E>> {
        self.slots.lock().get(name).cloned()
    }

    /// Put `method` into the slot, returning whatever was there before.
    pub fn replace(&self, name: impl Into<String>, method: Method<V, E>) -> Option<Method<V, E>> {
        self.slots.lock().insert(name.into(), method)
    }

    /// Empty the slot, returning its method.
    pub fn take(&self, name: &str) -> Option<Method<V, E>> {
        self.slots.lock().remove(name)
    }

    /// Put back a previously saved slot; `None` leaves the slot empty.
    pub fn restore(&self, name: &str, original: Option<Method<V, E>>) {
        let mut slots = self.slots.lock();
        match original {
            Some(method) => {
                slots.insert(name.to_string(), method);
            }
            None => {
                slots.remove(name);
            }
        }
    }

    /// Call the method named `name` with positional `args`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchMethod`] if no method is defined under `name`.
    pub fn invoke(&self, name: &str, args: &[V]) -> Result<Outcome<V, E>> {
        // The slot table is unlocked before the call so methods may re-enter.
        let method = self
            .method(name)
            .ok_or_else(|| Error::NoSuchMethod(name.to_string()))?;
        Ok(method(args))
    }

    /// Check whether two handles refer to the same object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.slots, &other.slots)
    }
}

impl<V, E> Default for MockObject<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Clone for MockObject<V, E> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
        }
    }
}

impl<V, E> Debug for MockObject<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockObject")
            .field("methods", &self.method_names())
            .finish()
    }
}
