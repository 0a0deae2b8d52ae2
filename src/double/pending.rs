//! Deferred results settled explicitly by test code.
//!
//! A [`PendingResult`] starts unsettled and transitions exactly once, to
//! resolved or rejected. Any number of [`ResultFuture`] observers may await it;
//! they all observe the same outcome. Nothing settles a pending result except
//! an explicit [`resolve`](PendingResult::resolve) or
//! [`reject`](PendingResult::reject): there are no timers and no cancellation.
//!
//! # Example
//!
//! ```rust
//! use testkit_doubles::double::PendingResult;
//! use testkit_doubles::assertions::poll_once;
//! use std::task::Poll;
//!
//! let pending = PendingResult::<i32, String>::new();
//! let observer = pending.future();
//!
//! pending.resolve(42).unwrap();
//! assert_eq!(poll_once(observer), Poll::Ready(Ok(42)));
//! ```

use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, Waker};

use parking_lot::Mutex;

use crate::error::{Error, Result};

/// Snapshot of a pending result's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement<T, E> {
    /// Not settled yet.
    Pending,
    /// Settled through `resolve`.
    Resolved(T),
    /// Settled through `reject`.
    Rejected(E),
}

impl<T, E> Settlement<T, E> {
    /// Returns `true` if the result has not been settled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

struct PendingInner<T, E> {
    outcome: Option<std::result::Result<T, E>>,
    /// Observers waiting for settlement.
    wakers: Vec<Waker>,
}

/// A result whose settlement is driven by test code.
///
/// Cloning yields another handle to the same result.
pub struct PendingResult<T, E> {
    inner: Arc<Mutex<PendingInner<T, E>>>,
}

impl<T, E> PendingResult<T, E> {
    /// Create a new, unsettled result.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(PendingInner {
                outcome: None,
                wakers: Vec::new(),
            })),
        }
    }

    /// Resolve the result with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadySettled`] if the result was already settled.
    pub fn resolve(&self, value: T) -> Result<()> {
        self.settle(Ok(value))
    }

    /// Reject the result with `error`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadySettled`] if the result was already settled.
    pub fn reject(&self, error: E) -> Result<()> {
        self.settle(Err(error))
    }

    fn settle(&self, outcome: std::result::Result<T, E>) -> Result<()> {
        let wakers = {
            let mut inner = self.inner.lock();
            if inner.outcome.is_some() {
                return Err(Error::AlreadySettled);
            }
            tracing::trace!(resolved = outcome.is_ok(), "settling pending result");
            inner.outcome = Some(outcome);
            std::mem::take(&mut inner.wakers)
        };

        for waker in wakers {
            waker.wake();
        }
        Ok(())
    }

    /// Check whether the result has been settled.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.inner.lock().outcome.is_some()
    }

    /// Create an observer that completes once the result is settled.
    #[must_use]
    pub fn future(&self) -> ResultFuture<T, E> {
        ResultFuture {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Check whether two handles refer to the same result.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone, E: Clone> PendingResult<T, E> {
    /// Get a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> Settlement<T, E> {
        match &self.inner.lock().outcome {
            None => Settlement::Pending,
            Some(Ok(value)) => Settlement::Resolved(value.clone()),
            Some(Err(error)) => Settlement::Rejected(error.clone()),
        }
    }
}

impl<T, E> Default for PendingResult<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for PendingResult<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, E> Debug for PendingResult<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("PendingResult")
            .field("settled", &inner.outcome.is_some())
            .field("waiting", &inner.wakers.len())
            .finish()
    }
}

/// Future observing a [`PendingResult`].
///
/// Stays pending until the result is settled, then yields a copy of the
/// outcome. Several observers of one result all complete with the same value.
pub struct ResultFuture<T, E> {
    inner: Arc<Mutex<PendingInner<T, E>>>,
}

impl<T, E> Clone for ResultFuture<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone, E: Clone> Future for ResultFuture<T, E> {
    type Output = std::result::Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut inner = self.inner.lock();
        if let Some(outcome) = &inner.outcome {
            return Poll::Ready(outcome.clone());
        }

        let waker = cx.waker();
        if !inner.wakers.iter().any(|w| w.will_wake(waker)) {
            inner.wakers.push(waker.clone());
        }
        Poll::Pending
    }
}

impl<T, E> Debug for ResultFuture<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultFuture")
            .field("settled", &self.inner.lock().outcome.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertions::poll_once;

    #[test]
    fn test_pending_until_settled() {
        let pending = PendingResult::<i32, String>::new();

        assert!(!pending.is_settled());
        assert_eq!(pending.state(), Settlement::Pending);
        assert_eq!(poll_once(pending.future()), Poll::Pending);
    }

    #[test]
    fn test_resolve() {
        let pending = PendingResult::<i32, String>::new();
        let observer = pending.future();

        pending.resolve(7).unwrap();

        assert!(pending.is_settled());
        assert_eq!(pending.state(), Settlement::Resolved(7));
        assert_eq!(poll_once(observer), Poll::Ready(Ok(7)));
    }

    #[test]
    fn test_reject() {
        let pending = PendingResult::<i32, String>::new();

        pending.reject("boom".to_string()).unwrap();

        assert_eq!(pending.state(), Settlement::Rejected("boom".to_string()));
        assert_eq!(
            poll_once(pending.future()),
            Poll::Ready(Err("boom".to_string()))
        );
    }

    #[test]
    fn test_settles_only_once() {
        let pending = PendingResult::<i32, String>::new();

        pending.resolve(1).unwrap();

        assert_eq!(pending.resolve(2), Err(Error::AlreadySettled));
        assert_eq!(pending.reject("late".into()), Err(Error::AlreadySettled));
        assert_eq!(pending.state(), Settlement::Resolved(1));
    }

    #[test]
    fn test_clones_share_state() {
        let pending = PendingResult::<i32, String>::new();
        let other = pending.clone();

        other.resolve(3).unwrap();

        assert!(pending.is_settled());
        assert!(pending.ptr_eq(&other));
        assert!(!pending.ptr_eq(&PendingResult::new()));
    }

    #[tokio::test]
    async fn test_multiple_observers_wake() {
        let pending = PendingResult::<&'static str, String>::new();
        let first = tokio::spawn(pending.future());
        let second = tokio::spawn(pending.future());

        tokio::task::yield_now().await;
        pending.resolve("done").unwrap();

        assert_eq!(first.await.unwrap(), Ok("done"));
        assert_eq!(second.await.unwrap(), Ok("done"));
    }

    #[test]
    fn test_debug() {
        let pending = PendingResult::<i32, String>::new();
        let debug = format!("{:?}", pending);
        assert!(debug.contains("PendingResult"));
        assert!(debug.contains("settled"));
    }
}
