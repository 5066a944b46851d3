#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants and unit scale factors.
pub mod constants;
/// Shared numerical primitives (scalar and vector aliases, grids).
pub mod math;
/// Magnetostatic field models, including the rectangular-conductor evaluator.
pub mod fields;
/// Parameter sets describing a profile computation.
pub mod config;
/// Field profiles sampled across the conductor width.
pub mod profile;
/// Export helpers for computed profiles.
pub mod io;
/// Error types raised during input validation.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
