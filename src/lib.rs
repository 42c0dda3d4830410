#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants and calculator defaults.
pub mod constants;
/// Strongly typed unit helpers and quantity abstractions.
pub mod units;
/// Shared numeric primitives.
pub mod math;
/// Dielectric material presets.
pub mod materials;
/// Closed-form electrostatics calculators.
pub mod calculators;
/// Error types shared across the crate.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
