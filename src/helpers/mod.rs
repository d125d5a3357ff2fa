//! Helper Utilities
//!
//! Common utilities used across the library.

mod bounded;
mod fs;

pub use bounded::*;
pub use fs::*;
