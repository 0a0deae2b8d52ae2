//! # testkit-doubles 🧪
//!
//! > Call-tracking test doubles for Rust
//!
//! **testkit-doubles** replaces methods on a target object with doubles that
//! record every call and either return a value right away or hand back a
//! result that the test settles when it is ready.
//!
//! ## Quick Start
//!
//! ```rust
//! use testkit_doubles::prelude::*;
//! use testkit_doubles::{assert_pending, assert_resolves_to};
//!
//! let set = DoubleSet::<i32, String>::default();
//! set.add_methods("compute", OutcomeSpec::factory(|args: &[i32]| args[0] * 2), true)
//!     .unwrap()
//!     .add_async_methods("fetch", true)
//!     .unwrap();
//!
//! let target = set.target();
//! assert_eq!(target.invoke("compute", &[21]).unwrap().ready(), Some(42));
//!
//! let fetched = target.invoke("fetch", &[42]).unwrap().deferred().unwrap();
//! assert_pending!(fetched.clone());
//!
//! let fetch = set.double("fetch").unwrap();
//! assert_eq!(fetch.responses()[0].args, vec![42]);
//! fetch.resolve(7).unwrap();
//! assert_resolves_to!(fetched, 7);
//! ```
//!
//! ## Features
//!
//! - 🎯 **Method Doubles** - Record arguments and outcomes of every call
//! - ⏳ **Deferred Results** - Settle each call's result from the test
//! - 🧩 **Double Sets** - Install, overwrite and restore doubles on one object
//! - 📋 **Mock Builders** - Logger and config mocks out of the box
//! - 🧪 **Test Values** - Boundary inputs for argument validation tests

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assertions;
pub mod builders;
pub mod double;
pub mod error;
pub mod object;
pub mod values;

/// Prelude for convenient imports
///
/// ```rust
/// use testkit_doubles::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assertions::{poll_once, resolver};
    pub use crate::double::{
        Behavior, CallRecord, DoubleSet, MethodDouble, Mode, OutcomeSpec, PendingResult,
        Settlement,
    };
    pub use crate::error::{Error, Result};
    pub use crate::object::{MockObject, Outcome};
}

// Re-exports
pub use error::{Error, Result};
