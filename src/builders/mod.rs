//! Ready-made mocks for common collaborators.
//!
//! - [`LoggerMock`] - Logger whose level methods record every message
//! - [`ConfigMock`] - Config object answering dotted-path lookups
//!
//! Both are built on [`DoubleSet`](crate::double::DoubleSet), so every call is
//! available for inspection through the usual double accessors.

mod config;
mod logger;

pub use config::ConfigMock;
pub use logger::{Level, LoggerMock};
