//! # Interval sources for isolap.
//!
//! This small crate feeds the detectors. It reads and writes two-column CSV interval
//! files (`low,high`, header row first, optionally gzip'd) and generates random
//! interval sets for benchmarking and differential testing.
//!
//! Rows are validated as they are read; a malformed row fails the whole file with an
//! [`IoError`] naming the offending line.
//!
pub mod consts;
pub mod error;
pub mod random;
pub mod table;

// re-expose core functions
pub use consts::*;
pub use error::*;
pub use random::*;
pub use table::*;
