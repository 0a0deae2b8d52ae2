//! Assertions and glue for asynchronous test outcomes.
//!
//! - [`poll_once`] - Poll a future once and return the result
//! - [`assert_ready!`] - Assert a future is immediately ready
//! - [`assert_pending!`] - Assert a future is not ready
//! - [`assert_resolves_to!`] / [`assert_rejects_with!`] - Check how a deferred
//!   result settled
//! - [`resolver`] - Settle a [`PendingResult`](crate::double::PendingResult)
//!   from a `Result` callback
//!
//! # Example
//!
//! ```rust
//! use testkit_doubles::{assert_pending, assert_ready};
//! use testkit_doubles::assertions::resolver;
//! use testkit_doubles::double::PendingResult;
//!
//! let pending = PendingResult::<i32, String>::new();
//! assert_pending!(pending.future());
//!
//! resolver(&pending)(Ok(42));
//! assert_eq!(assert_ready!(pending.future()), Ok(42));
//! ```

mod future;
mod resolver;

pub use future::poll_once;
pub use resolver::{resolver, resolver_with};
