//! Call-tracked method doubles and the sets that own them.
//!
//! - [`MethodDouble`] - Replaces one method and records every call
//! - [`PendingResult`] - Deferred result settled by test code
//! - [`DoubleSet`] - All doubles installed on one target object
//!
//! # Immediate Doubles
//!
//! ```rust
//! use testkit_doubles::double::{DoubleSet, OutcomeSpec};
//!
//! let set = DoubleSet::<i32, String>::default();
//! set.add_methods("compute", OutcomeSpec::factory(|args: &[i32]| args[0] * 2), true)
//!     .unwrap();
//!
//! let result = set.target().invoke("compute", &[21]).unwrap();
//! assert_eq!(result.ready(), Some(42));
//! assert_eq!(set.double("compute").unwrap().return_value(), Some(42));
//! ```
//!
//! # Deferred Doubles
//!
//! ```rust
//! use testkit_doubles::double::DoubleSet;
//! use testkit_doubles::{assert_pending, assert_ready};
//!
//! let set = DoubleSet::<String, String>::default();
//! set.add_async_methods("fetch", true).unwrap();
//!
//! let outcome = set.target().invoke("fetch", &["42".to_string()]).unwrap();
//! let future = outcome.deferred().unwrap();
//! assert_pending!(future.clone());
//!
//! set.double("fetch").unwrap().resolve("ok".to_string()).unwrap();
//! assert_eq!(assert_ready!(future), Ok("ok".to_string()));
//! ```

mod method;
mod pending;
mod set;

pub use method::{
    Behavior, CallOutcome, CallRecord, Factory, MethodDouble, Mode, OutcomeSpec,
};
pub use pending::{PendingResult, ResultFuture, Settlement};
pub use set::{ConstructorDouble, DoubleSet, MethodNames};
