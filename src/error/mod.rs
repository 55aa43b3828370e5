//! Crate-wide error types.
//!
//! Layout itself is total over integer inputs and has no error paths; the
//! variants here cover the runtime loop, logging, and terminal I/O.

mod types;

pub use types::{Result, WeftError};
