//! Validation of the module directories given on the command line.

pub mod preflight;

pub use preflight::{locate_manifest, preflight_checks};
