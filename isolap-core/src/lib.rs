//! # isolap-core
//!
//! Core models shared by the isolap crates: the closed [`Interval`](models::Interval)
//! type, the [`DetectionResult`](models::DetectionResult) returned by every isolation
//! detector, and a handful of file utilities used by the loaders.
//!
//! Intervals are validated once, at construction. Everything downstream assumes
//! `low <= high` and never re-checks it.
//!
//! ```rust
//! use isolap_core::models::Interval;
//!
//! let a = Interval::new(0u32, 3).unwrap();
//! let b = Interval::new(3u32, 5).unwrap();
//! assert!(a.overlaps(&b));
//! ```
pub mod errors;
pub mod models;
pub mod utils;
