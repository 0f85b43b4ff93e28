//! File system writes with transaction support.
//!
//! Manifest rewrites are staged, then committed or rolled back as a unit.

pub mod transaction;

pub use transaction::{FileUpdate, Transaction};
