// Allow must_use_candidate since double methods often have useful side effects
#![allow(clippy::must_use_candidate)]

//! Call-tracked method doubles.
//!
//! A [`MethodDouble`] replaces one method slot of a [`MockObject`] and records
//! every invocation. It works in one of two modes:
//!
//! - [`Mode::Immediate`]: each call returns a value computed from an
//!   [`OutcomeSpec`], either a fixed value or a factory over the arguments.
//! - [`Mode::Deferred`]: each call returns a [`ResultFuture`] that settles only
//!   when test code resolves or rejects that call's [`PendingResult`].
//!
//! # Example
//!
//! ```rust
//! use testkit_doubles::double::{Behavior, MethodDouble};
//! use testkit_doubles::object::MockObject;
//!
//! let target = MockObject::<i32, String>::new();
//! let double = MethodDouble::install(&target, "answer", Behavior::fixed(42), true).unwrap();
//!
//! let outcome = target.invoke("answer", &[1, 2]).unwrap();
//! assert_eq!(outcome.ready(), Some(42));
//! assert_eq!(double.call_count(), 1);
//! assert_eq!(double.responses()[0].args, vec![1, 2]);
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use super::pending::{PendingResult, ResultFuture};
use crate::error::{Error, Result};
use crate::object::{MockObject, Outcome};

/// Value-producing function for immediate doubles.
pub type Factory<V> = Arc<dyn Fn(&[V]) -> V + Send + Sync>;

/// How an immediate double computes its return value.
pub enum OutcomeSpec<V> {
    /// Every call returns a clone of this value.
    Fixed(V),
    /// Every call returns the factory applied to the call's arguments.
    Factory(Factory<V>),
}

impl<V> OutcomeSpec<V> {
    /// Compute each return value with `f`.
    pub fn factory<F>(f: F) -> Self
    where
        F: Fn(&[V]) -> V + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(f))
    }

    fn produce(&self, args: &[V]) -> V
    where
        V: Clone,
    {
        match self {
            Self::Fixed(value) => value.clone(),
            Self::Factory(factory) => factory(args),
        }
    }
}

impl<V> From<V> for OutcomeSpec<V> {
    fn from(value: V) -> Self {
        Self::Fixed(value)
    }
}

impl<V: Clone> Clone for OutcomeSpec<V> {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed(value) => Self::Fixed(value.clone()),
            Self::Factory(factory) => Self::Factory(Arc::clone(factory)),
        }
    }
}

impl<V: Debug> Debug for OutcomeSpec<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// The configured behavior of a double, chosen at installation.
#[derive(Debug, Clone)]
pub enum Behavior<V> {
    /// Return a value synchronously.
    Immediate(OutcomeSpec<V>),
    /// Return a result that test code settles later.
    Deferred,
}

impl<V> Behavior<V> {
    /// Immediate behavior returning `value` on every call.
    pub fn fixed(value: V) -> Self {
        Self::Immediate(OutcomeSpec::Fixed(value))
    }

    /// Immediate behavior computing each return value from the arguments.
    pub fn factory<F>(f: F) -> Self
    where
        F: Fn(&[V]) -> V + Send + Sync + 'static,
    {
        Self::Immediate(OutcomeSpec::factory(f))
    }

    /// The mode this behavior runs in.
    pub fn mode(&self) -> Mode {
        match self {
            Self::Immediate(_) => Mode::Immediate,
            Self::Deferred => Mode::Deferred,
        }
    }
}

/// Outcome mode of a double.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Values are returned synchronously.
    Immediate,
    /// Results are settled later by test code.
    Deferred,
}

/// What a recorded call produced.
pub enum CallOutcome<V, E> {
    /// The value returned by an immediate call.
    Returned(V),
    /// The per-call handle of a deferred call.
    Deferred(PendingResult<V, E>),
}

impl<V: Clone, E> Clone for CallOutcome<V, E> {
    fn clone(&self) -> Self {
        match self {
            Self::Returned(value) => Self::Returned(value.clone()),
            Self::Deferred(pending) => Self::Deferred(pending.clone()),
        }
    }
}

impl<V: Debug, E> Debug for CallOutcome<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Returned(value) => f.debug_tuple("Returned").field(value).finish(),
            Self::Deferred(pending) => f.debug_tuple("Deferred").field(pending).finish(),
        }
    }
}

/// A record of a single call to a double.
pub struct CallRecord<V, E> {
    /// The arguments passed to the call.
    pub args: Vec<V>,
    /// What the call produced.
    pub outcome: CallOutcome<V, E>,
    /// When the call was made (relative to double creation).
    pub timestamp: Duration,
}

impl<V, E> CallRecord<V, E> {
    /// Returns `true` if the call was made in deferred mode.
    pub fn is_async(&self) -> bool {
        matches!(self.outcome, CallOutcome::Deferred(_))
    }

    /// The value an immediate call returned.
    pub fn return_value(&self) -> Option<&V> {
        match &self.outcome {
            CallOutcome::Returned(value) => Some(value),
            CallOutcome::Deferred(_) => None,
        }
    }

    /// The settlement handle of a deferred call.
    pub fn pending(&self) -> Option<&PendingResult<V, E>> {
        match &self.outcome {
            CallOutcome::Returned(_) => None,
            CallOutcome::Deferred(pending) => Some(pending),
        }
    }
}

impl<V: Clone, E> Clone for CallRecord<V, E> {
    fn clone(&self) -> Self {
        Self {
            args: self.args.clone(),
            outcome: self.outcome.clone(),
            timestamp: self.timestamp,
        }
    }
}

impl<V: Debug, E> Debug for CallRecord<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallRecord")
            .field("args", &self.args)
            .field("outcome", &self.outcome)
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

struct Ledger<V, E> {
    records: Vec<CallRecord<V, E>>,
    /// Handle created ahead of the first deferred call.
    first_pending: Option<PendingResult<V, E>>,
    /// Set once a call has been bound to `first_pending`.
    first_consumed: bool,
}

impl<V, E> Ledger<V, E> {
    fn next_pending(&mut self) -> PendingResult<V, E> {
        if self.records.is_empty() && !self.first_consumed {
            if let Some(first) = &self.first_pending {
                self.first_consumed = true;
                return first.clone();
            }
        }
        PendingResult::new()
    }
}

struct DoubleInner<V, E> {
    name: String,
    mode: Mode,
    ledger: Mutex<Ledger<V, E>>,
    call_count: AtomicUsize,
    installed: AtomicBool,
    created_at: Instant,
}

impl<V: Clone, E> DoubleInner<V, E> {
    fn call(&self, args: &[V], behavior: &Behavior<V>) -> Outcome<V, E> {
        // Factories run unlocked so they may call back into the target.
        let returned = match behavior {
            Behavior::Immediate(spec) => Some(spec.produce(args)),
            Behavior::Deferred => None,
        };

        let mut ledger = self.ledger.lock();
        let (recorded, outcome) = match returned {
            Some(value) => (CallOutcome::Returned(value.clone()), Outcome::Ready(value)),
            None => {
                let pending = ledger.next_pending();
                let future = pending.future();
                (CallOutcome::Deferred(pending), Outcome::Deferred(future))
            }
        };

        tracing::trace!(method = %self.name, call = ledger.records.len(), "recording call");
        ledger.records.push(CallRecord {
            args: args.to_vec(),
            outcome: recorded,
            timestamp: self.created_at.elapsed(),
        });
        self.call_count.fetch_add(1, Ordering::SeqCst);
        outcome
    }
}

/// A double replacing one method of a [`MockObject`].
///
/// Cloning yields another handle to the same double and call log.
pub struct MethodDouble<V, E> {
    inner: Arc<DoubleInner<V, E>>,
    target: MockObject<V, E>,
}

impl<V, E> MethodDouble<V, E>
where
    V: Clone + Default + Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Replace `name` on `target` with a recording double.
    ///
    /// If `create` is `true` and the method does not exist, a no-op method
    /// returning `V::default()` is defined first. The replaced method is not
    /// kept; see [`DoubleSet`](super::DoubleSet) for restoration.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `name` is empty.
    /// - [`Error::InvalidMethod`] if the method is missing and `create` is `false`.
    pub fn install(
        target: &MockObject<V, E>,
        name: &str,
        behavior: Behavior<V>,
        create: bool,
    ) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::invalid_argument(2, "method name not specified"));
        }

        if !target.has_method(name) {
            if !create {
                return Err(Error::invalid_method(name));
            }
            target.define(name, |_: &[V]| Outcome::Ready(V::default()));
        }

        let mode = behavior.mode();
        let inner = Arc::new(DoubleInner {
            name: name.to_string(),
            mode,
            ledger: Mutex::new(Ledger {
                records: Vec::new(),
                first_pending: (mode == Mode::Deferred).then(PendingResult::new),
                first_consumed: false,
            }),
            call_count: AtomicUsize::new(0),
            installed: AtomicBool::new(true),
            created_at: Instant::now(),
        });

        let recorder = Arc::clone(&inner);
        target.replace(
            name,
            Arc::new(move |args: &[V]| recorder.call(args, &behavior)),
        );
        tracing::debug!(method = %name, ?mode, "installed method double");

        Ok(Self {
            inner,
            target: target.clone(),
        })
    }
}

impl<V, E> MethodDouble<V, E> {
    /// Name of the doubled method.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Mode the double was installed in.
    pub fn mode(&self) -> Mode {
        self.inner.mode
    }

    /// The object the double is installed on.
    pub fn target(&self) -> &MockObject<V, E> {
        &self.target
    }

    /// Returns `false` once the owning set removed or replaced this double.
    pub fn is_installed(&self) -> bool {
        self.inner.installed.load(Ordering::SeqCst)
    }

    pub(crate) fn mark_uninstalled(&self) {
        self.inner.installed.store(false, Ordering::SeqCst);
    }

    /// Get the number of times the double was called since the last reset.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.inner.call_count.load(Ordering::SeqCst)
    }

    /// Check if the double was called at least once.
    #[must_use]
    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    /// Check if the double was called exactly N times.
    #[must_use]
    pub fn was_called_times(&self, n: usize) -> bool {
        self.call_count() == n
    }

    /// Empty the call log. The call count is left alone.
    ///
    /// If a call already took the first-call handle, deferred doubles get a
    /// fresh one that the next call binds to.
    pub fn clear_responses(&self) {
        let mut ledger = self.inner.ledger.lock();
        ledger.records.clear();
        if ledger.first_consumed {
            ledger.first_pending = Some(PendingResult::new());
            ledger.first_consumed = false;
        }
    }

    /// Empty the call log and zero the call count.
    ///
    /// Deferred doubles also get a fresh first-call handle.
    pub fn reset(&self) {
        let mut ledger = self.inner.ledger.lock();
        ledger.records.clear();
        if self.inner.mode == Mode::Deferred {
            ledger.first_pending = Some(PendingResult::new());
            ledger.first_consumed = false;
        }
        self.inner.call_count.store(0, Ordering::SeqCst);
    }

    /// The handle of the first deferred call.
    ///
    /// Before any call this is the handle created at installation, so
    /// settlement can be arranged up front. `None` for immediate doubles.
    pub fn pending(&self) -> Option<PendingResult<V, E>> {
        let ledger = self.inner.ledger.lock();
        match ledger.records.first() {
            Some(record) => record.pending().cloned(),
            None => ledger.first_pending.clone(),
        }
    }

    /// Observer of the first deferred call's result.
    pub fn result(&self) -> Option<ResultFuture<V, E>> {
        self.pending().map(|pending| pending.future())
    }

    /// Resolve the first deferred call.
    ///
    /// # Errors
    ///
    /// - [`Error::NotDeferred`] for immediate doubles.
    /// - [`Error::AlreadySettled`] if the first call was already settled.
    pub fn resolve(&self, value: V) -> Result<()> {
        self.first_pending()?.resolve(value)
    }

    /// Reject the first deferred call.
    ///
    /// # Errors
    ///
    /// - [`Error::NotDeferred`] for immediate doubles.
    /// - [`Error::AlreadySettled`] if the first call was already settled.
    pub fn reject(&self, error: E) -> Result<()> {
        self.first_pending()?.reject(error)
    }

    fn first_pending(&self) -> Result<PendingResult<V, E>> {
        self.pending()
            .ok_or_else(|| Error::NotDeferred(self.inner.name.clone()))
    }
}

impl<V: Clone, E> MethodDouble<V, E> {
    /// Get all recorded calls, in call order.
    pub fn responses(&self) -> Vec<CallRecord<V, E>> {
        self.inner.ledger.lock().records.clone()
    }

    /// Get the Nth call record (0-indexed).
    pub fn nth_call(&self, n: usize) -> Option<CallRecord<V, E>> {
        self.inner.ledger.lock().records.get(n).cloned()
    }

    /// Get the most recent call record.
    pub fn last_call(&self) -> Option<CallRecord<V, E>> {
        self.inner.ledger.lock().records.last().cloned()
    }

    /// The value returned by the first immediate call.
    pub fn return_value(&self) -> Option<V> {
        self.inner
            .ledger
            .lock()
            .records
            .first()
            .and_then(|record| record.return_value().cloned())
    }

    /// Check if any recorded call had exactly these arguments.
    pub fn was_called_with(&self, expected: &[V]) -> bool
    where
        V: PartialEq,
    {
        self.inner
            .ledger
            .lock()
            .records
            .iter()
            .any(|record| record.args == expected)
    }
}

impl<V, E> Clone for MethodDouble<V, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            target: self.target.clone(),
        }
    }
}

impl<V: Debug, E> Debug for MethodDouble<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodDouble")
            .field("name", &self.inner.name)
            .field("mode", &self.inner.mode)
            .field("call_count", &self.call_count())
            .field("calls", &self.inner.ledger.lock().records)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertions::poll_once;
    use crate::double::Settlement;
    use std::task::Poll;

    fn target() -> MockObject<i32, String> {
        MockObject::new()
    }

    #[test]
    fn test_install_requires_name() {
        let err = MethodDouble::install(&target(), "", Behavior::fixed(1), true).unwrap_err();
        assert_eq!(err.to_string(), "method name not specified (arg #2)");
    }

    #[test]
    fn test_install_missing_method_without_create() {
        let err = MethodDouble::install(&target(), "absent", Behavior::fixed(1), false).unwrap_err();
        assert_eq!(err, Error::InvalidMethod("absent".to_string()));
    }

    #[test]
    fn test_install_creates_missing_method() {
        let target = target();
        MethodDouble::install(&target, "made", Behavior::fixed(1), true).unwrap();
        assert!(target.has_method("made"));
    }

    #[test]
    fn test_install_replaces_existing_method() {
        let target = target();
        target.define("real", |_: &[i32]| Outcome::Ready(-1));

        MethodDouble::install(&target, "real", Behavior::fixed(1), false).unwrap();

        assert_eq!(target.invoke("real", &[]).unwrap().ready(), Some(1));
    }

    #[test]
    fn test_records_calls_in_order() {
        let target = target();
        let double = MethodDouble::install(&target, "m", Behavior::fixed(0), true).unwrap();

        for i in 0..5 {
            target.invoke("m", &[i, i * 10]).unwrap();
        }

        let calls = double.responses();
        assert_eq!(calls.len(), 5);
        for (i, call) in (0..).zip(calls.iter()) {
            assert_eq!(call.args, vec![i, i * 10]);
            assert!(!call.is_async());
        }
        assert_eq!(double.last_call().unwrap().args, vec![4, 40]);
        assert!(double.nth_call(5).is_none());
    }

    #[test]
    fn test_fixed_value_ignores_arguments() {
        let target = target();
        let double = MethodDouble::install(&target, "m", Behavior::fixed(9), true).unwrap();

        assert_eq!(target.invoke("m", &[]).unwrap().ready(), Some(9));
        assert_eq!(target.invoke("m", &[1, 2, 3]).unwrap().ready(), Some(9));

        assert!(double
            .responses()
            .iter()
            .all(|call| call.return_value() == Some(&9)));
        assert_eq!(double.return_value(), Some(9));
    }

    #[test]
    fn test_factory_sees_call_arguments() {
        let target = target();
        let double = MethodDouble::install(
            &target,
            "sum",
            Behavior::factory(|args: &[i32]| args.iter().sum()),
            true,
        )
        .unwrap();

        target.invoke("sum", &[1, 2]).unwrap();
        target.invoke("sum", &[10, 20, 30]).unwrap();

        let calls = double.responses();
        assert_eq!(calls[0].return_value(), Some(&3));
        assert_eq!(calls[1].return_value(), Some(&60));
    }

    #[test]
    fn test_deferred_call_is_pending() {
        let target = target();
        let double = MethodDouble::install(&target, "fetch", Behavior::Deferred, true).unwrap();

        let future = target.invoke("fetch", &[1]).unwrap().deferred().unwrap();

        assert_eq!(poll_once(future.clone()), Poll::Pending);
        assert!(double.responses()[0].is_async());
        assert!(double.return_value().is_none());

        double.resolve(5).unwrap();
        assert_eq!(poll_once(future), Poll::Ready(Ok(5)));
    }

    #[test]
    fn test_deferred_calls_settle_independently() {
        let target = target();
        let double = MethodDouble::install(&target, "fetch", Behavior::Deferred, true).unwrap();

        let futures: Vec<_> = (0..3)
            .map(|i| target.invoke("fetch", &[i]).unwrap().deferred().unwrap())
            .collect();
        let calls = double.responses();

        calls[2].pending().unwrap().resolve(30).unwrap();
        assert_eq!(poll_once(futures[0].clone()), Poll::Pending);
        assert_eq!(poll_once(futures[1].clone()), Poll::Pending);
        assert_eq!(poll_once(futures[2].clone()), Poll::Ready(Ok(30)));

        calls[0].pending().unwrap().reject("no".into()).unwrap();
        assert_eq!(poll_once(futures[0].clone()), Poll::Ready(Err("no".to_string())));
        assert_eq!(poll_once(futures[1].clone()), Poll::Pending);

        assert!(!calls[0].pending().unwrap().ptr_eq(calls[1].pending().unwrap()));
    }

    #[test]
    fn test_first_call_handle_available_before_call() {
        let target = target();
        let double = MethodDouble::install(&target, "fetch", Behavior::Deferred, true).unwrap();

        let early = double.pending().unwrap();
        assert!(!early.is_settled());

        let future = target.invoke("fetch", &[]).unwrap().deferred().unwrap();
        assert!(double.responses()[0].pending().unwrap().ptr_eq(&early));

        early.reject("early".into()).unwrap();
        assert_eq!(poll_once(future), Poll::Ready(Err("early".to_string())));
        assert_eq!(
            double.pending().unwrap().state(),
            Settlement::Rejected("early".to_string())
        );
    }

    #[test]
    fn test_resolve_before_call() {
        let target = target();
        let double = MethodDouble::install(&target, "fetch", Behavior::Deferred, true).unwrap();

        double.resolve(11).unwrap();

        let future = target.invoke("fetch", &[]).unwrap().deferred().unwrap();
        assert_eq!(poll_once(future), Poll::Ready(Ok(11)));
    }

    #[test]
    fn test_immediate_double_has_no_pending() {
        let target = target();
        let double = MethodDouble::install(&target, "m", Behavior::fixed(1), true).unwrap();

        assert!(double.pending().is_none());
        assert!(double.result().is_none());
        assert_eq!(double.resolve(1), Err(Error::NotDeferred("m".to_string())));
        assert_eq!(
            double.reject("x".into()),
            Err(Error::NotDeferred("m".to_string()))
        );
    }

    #[test]
    fn test_clear_responses() {
        let target = target();
        let double = MethodDouble::install(&target, "m", Behavior::fixed(1), true).unwrap();

        target.invoke("m", &[1]).unwrap();
        target.invoke("m", &[2]).unwrap();
        double.clear_responses();

        assert!(double.responses().is_empty());
        assert_eq!(double.call_count(), 2);

        target.invoke("m", &[3]).unwrap();
        assert_eq!(double.responses().len(), 1);
        assert_eq!(double.nth_call(0).unwrap().args, vec![3]);
    }

    #[test]
    fn test_clear_responses_rearms_first_handle() {
        let target = target();
        let double = MethodDouble::install(&target, "fetch", Behavior::Deferred, true).unwrap();

        target.invoke("fetch", &[]).unwrap();
        let first = double.pending().unwrap();
        first.resolve(1).unwrap();
        double.clear_responses();

        let rearmed = double.pending().unwrap();
        assert!(!rearmed.ptr_eq(&first));
        assert!(!rearmed.is_settled());
        assert_eq!(double.call_count(), 1);

        target.invoke("fetch", &[]).unwrap();
        assert!(double.responses()[0].pending().unwrap().ptr_eq(&rearmed));
    }

    #[test]
    fn test_resolve_after_clear_settles_next_call() {
        let target = target();
        let double = MethodDouble::install(&target, "fetch", Behavior::Deferred, true).unwrap();

        let abandoned = target.invoke("fetch", &[1]).unwrap().deferred().unwrap();
        double.clear_responses();
        double.resolve(5).unwrap();

        let future = target.invoke("fetch", &[2]).unwrap().deferred().unwrap();
        assert_eq!(poll_once(future), Poll::Ready(Ok(5)));
        assert!(double.responses()[0].pending().unwrap().is_settled());
        assert_eq!(poll_once(abandoned), Poll::Pending);
    }

    #[test]
    fn test_clear_responses_before_any_call_keeps_handle() {
        let target = target();
        let double = MethodDouble::install(&target, "fetch", Behavior::Deferred, true).unwrap();

        let early = double.pending().unwrap();
        double.clear_responses();

        assert!(double.pending().unwrap().ptr_eq(&early));
    }

    #[test]
    fn test_reset() {
        let target = target();
        let double = MethodDouble::install(&target, "fetch", Behavior::Deferred, true).unwrap();

        target.invoke("fetch", &[]).unwrap();
        let before = double.pending().unwrap();
        double.reset();

        assert!(double.responses().is_empty());
        assert_eq!(double.call_count(), 0);
        assert!(!double.was_called());

        let rearmed = double.pending().unwrap();
        assert!(!rearmed.ptr_eq(&before));

        target.invoke("fetch", &[]).unwrap();
        assert!(double.responses()[0].pending().unwrap().ptr_eq(&rearmed));
    }

    #[test]
    fn test_was_called_with() {
        let target = target();
        let double = MethodDouble::install(&target, "m", Behavior::fixed(0), true).unwrap();

        target.invoke("m", &[1, 2]).unwrap();

        assert!(double.was_called_with(&[1, 2]));
        assert!(!double.was_called_with(&[2, 1]));
        assert!(double.was_called_times(1));
    }

    #[test]
    fn test_factory_may_reenter_target() {
        let target = target();
        target.define("inner", |_: &[i32]| Outcome::Ready(5));
        let reentrant = target.clone();
        MethodDouble::install(
            &target,
            "outer",
            Behavior::factory(move |_: &[i32]| {
                reentrant.invoke("inner", &[]).unwrap().ready().unwrap() + 1
            }),
            true,
        )
        .unwrap();

        assert_eq!(target.invoke("outer", &[]).unwrap().ready(), Some(6));
    }

    #[test]
    fn test_debug() {
        let target = target();
        let double = MethodDouble::install(&target, "m", Behavior::fixed(1), true).unwrap();
        target.invoke("m", &[42]).unwrap();

        let debug = format!("{:?}", double);
        assert!(debug.contains("MethodDouble"));
        assert!(debug.contains("call_count"));
    }
}
