//! I/O helpers for exporting computed profiles.

pub mod csv;

pub use csv::*;
