//! Common utilities for integration tests
//!
//! Each test crate uses a different subset of these helpers.
#![allow(dead_code, unused_imports)]

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{mixed_species_csv, png_files, write_csv, MIXED_SPECIES_CSV};
