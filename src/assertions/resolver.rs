//! Callback adapters that settle a [`PendingResult`].
//!
//! Code under test often reports completion through a callback taking a
//! `Result`. A resolver turns such a callback into settlement of a pending
//! result, which test code can then await.
//!
//! # Example
//!
//! ```rust
//! use testkit_doubles::assertions::{poll_once, resolver};
//! use testkit_doubles::double::PendingResult;
//! use std::task::Poll;
//!
//! let pending = PendingResult::<u32, String>::new();
//! let callback = resolver(&pending);
//!
//! callback(Err("disk full".to_string()));
//! assert_eq!(poll_once(pending.future()), Poll::Ready(Err("disk full".to_string())));
//! ```

use crate::double::PendingResult;

/// Create a callback that resolves `pending` on `Ok` and rejects it on `Err`.
///
/// Only the first invocation settles the result; later ones are ignored.
pub fn resolver<T, E>(pending: &PendingResult<T, E>) -> impl Fn(Result<T, E>) {
    let pending = pending.clone();
    move |outcome| {
        let settled = match outcome {
            Ok(value) => pending.resolve(value),
            Err(error) => pending.reject(error),
        };
        if settled.is_err() {
            tracing::trace!("resolver invoked after settlement, ignoring");
        }
    }
}

/// Like [`resolver`], but resolves with `value` whatever the callback's
/// success payload was.
pub fn resolver_with<T, U, E>(pending: &PendingResult<T, E>, value: T) -> impl Fn(Result<U, E>)
where
    T: Clone,
{
    let pending = pending.clone();
    move |outcome| {
        let settled = match outcome {
            Ok(_) => pending.resolve(value.clone()),
            Err(error) => pending.reject(error),
        };
        if settled.is_err() {
            tracing::trace!("resolver invoked after settlement, ignoring");
        }
    }
}
