//! Command module for access-log analysis
//!
//! Each CLI command lives in its own module; the binary only parses arguments,
//! loads configuration and hands off to these functions.

pub mod analyse;

pub use analyse::run_analyse;
