//! Polling helpers and assertion macros for futures.
//!
//! - [`poll_once`] - Poll a future once without an executor
//! - [`assert_ready!`] - Assert a future is immediately ready
//! - [`assert_pending!`] - Assert a future is not ready
//! - [`assert_resolves_to!`] - Assert a deferred result resolved to a value
//! - [`assert_rejects_with!`] - Assert a deferred result was rejected
//!
//! These are handy for deferred doubles, whose results stay pending until
//! test code settles them.

use std::future::{Future, IntoFuture};
use std::task::{Context, Poll};

/// Poll a future once and return the result.
///
/// Takes anything convertible into a future, so call outcomes can be
/// polled directly.
///
/// # Example
///
/// ```rust
/// use testkit_doubles::assertions::poll_once;
/// use std::task::Poll;
///
/// assert_eq!(poll_once(async { 42 }), Poll::Ready(42));
/// ```
pub fn poll_once<F: IntoFuture>(future: F) -> Poll<F::Output> {
    let waker = futures::task::noop_waker();
    let mut cx = Context::from_waker(&waker);
    let mut pinned = Box::pin(future.into_future());
    pinned.as_mut().poll(&mut cx)
}

/// Assert that a future is immediately ready, yielding its output.
///
/// # Panics
///
/// Panics if the future returns `Poll::Pending`.
///
/// # Example
///
/// ```rust
/// use testkit_doubles::assert_ready;
///
/// let value = assert_ready!(async { 42 });
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! assert_ready {
    ($future:expr) => {{
        match $crate::assertions::poll_once($future) {
            ::std::task::Poll::Ready(value) => value,
            ::std::task::Poll::Pending => {
                panic!("assertion failed: expected future to be Ready, but it was Pending");
            }
        }
    }};
    ($future:expr, $($arg:tt)+) => {{
        match $crate::assertions::poll_once($future) {
            ::std::task::Poll::Ready(value) => value,
            ::std::task::Poll::Pending => {
                panic!("assertion failed: expected future to be Ready, but it was Pending: {}", format_args!($($arg)+));
            }
        }
    }};
}

/// Assert that a future is pending.
///
/// # Panics
///
/// Panics if the future returns `Poll::Ready`.
///
/// # Example
///
/// ```rust
/// use testkit_doubles::assert_pending;
/// use testkit_doubles::double::PendingResult;
///
/// let pending = PendingResult::<i32, String>::new();
/// assert_pending!(pending.future());
/// ```
#[macro_export]
macro_rules! assert_pending {
    ($future:expr) => {{
        match $crate::assertions::poll_once($future) {
            ::std::task::Poll::Pending => {}
            ::std::task::Poll::Ready(value) => {
                panic!(
                    "assertion failed: expected future to be Pending, but it was Ready({:?})",
                    value
                );
            }
        }
    }};
    ($future:expr, $($arg:tt)+) => {{
        match $crate::assertions::poll_once($future) {
            ::std::task::Poll::Pending => {}
            ::std::task::Poll::Ready(value) => {
                panic!(
                    "assertion failed: expected future to be Pending, but it was Ready({:?}): {}",
                    value,
                    format_args!($($arg)+)
                );
            }
        }
    }};
}

/// Assert that a deferred result has resolved to `expected`.
///
/// Accepts anything [`poll_once`] does, including an
/// [`Outcome`](crate::object::Outcome) or a
/// [`ResultFuture`](crate::double::ResultFuture).
///
/// # Panics
///
/// Panics if the result is still pending, was rejected, or resolved to
/// another value.
///
/// # Example
///
/// ```rust
/// use testkit_doubles::assert_resolves_to;
/// use testkit_doubles::double::PendingResult;
///
/// let pending = PendingResult::<i32, String>::new();
/// pending.resolve(7).unwrap();
/// assert_resolves_to!(pending.future(), 7);
/// ```
#[macro_export]
macro_rules! assert_resolves_to {
    ($future:expr, $expected:expr) => {{
        match $crate::assertions::poll_once($future) {
            ::std::task::Poll::Ready(::std::result::Result::Ok(value)) => {
                assert_eq!(value, $expected, "deferred result resolved to another value");
            }
            ::std::task::Poll::Ready(::std::result::Result::Err(err)) => {
                panic!("assertion failed: expected result to resolve, but it was rejected with {:?}", err);
            }
            ::std::task::Poll::Pending => {
                panic!("assertion failed: expected result to resolve, but it is still pending");
            }
        }
    }};
}

/// Assert that a deferred result has been rejected with `expected`.
///
/// # Panics
///
/// Panics if the result is still pending, was resolved, or was rejected
/// with another error.
///
/// # Example
///
/// ```rust
/// use testkit_doubles::assert_rejects_with;
/// use testkit_doubles::double::PendingResult;
///
/// let pending = PendingResult::<i32, String>::new();
/// pending.reject("timeout".to_string()).unwrap();
/// assert_rejects_with!(pending.future(), "timeout");
/// ```
#[macro_export]
macro_rules! assert_rejects_with {
    ($future:expr, $expected:expr) => {{
        match $crate::assertions::poll_once($future) {
            ::std::task::Poll::Ready(::std::result::Result::Err(err)) => {
                assert_eq!(err, $expected, "deferred result rejected with another error");
            }
            ::std::task::Poll::Ready(::std::result::Result::Ok(value)) => {
                panic!("assertion failed: expected result to be rejected, but it resolved to {:?}", value);
            }
            ::std::task::Poll::Pending => {
                panic!("assertion failed: expected result to be rejected, but it is still pending");
            }
        }
    }};
}
