//! Shared numerical primitives.

/// Primary scalar type used across the crate.
pub type Scalar = f64;
