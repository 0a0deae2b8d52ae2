//! Dynamic target objects whose methods can be doubled.
//!
//! A [`MockObject`] is a table of named method slots. Code under test calls
//! methods by name with positional arguments; test code replaces slots with
//! doubles (see [`crate::double`]) and restores them afterwards.
//!
//! # Example
//!
//! ```rust
//! use testkit_doubles::object::{MockObject, Outcome};
//!
//! let target = MockObject::<i32, String>::new();
//! target.define("double", |args: &[i32]| Outcome::Ready(args[0] * 2));
//!
//! let outcome = target.invoke("double", &[21]).unwrap();
//! assert_eq!(outcome.ready(), Some(42));
//! ```

mod mock_object;

pub use mock_object::{Method, MockObject, Outcome, OutcomeFuture};
