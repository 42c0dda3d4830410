//! Closed-form electrostatics calculators.
//!
//! Each calculator is a pure function: validate first, compute second,
//! return a single typed quantity. Inputs arrive in the sub-units a lab
//! worksheet records (cm², mm, pF, MΩ, mL) and are converted to SI through
//! the fixed scale factors in [`crate::units`]. No calculator prints, logs,
//! or touches shared state, so calls are trivially safe from any thread.

/// Parallel-plate capacitance.
pub mod capacitance;
/// Charge density from capacitance, voltage, and volume.
pub mod charge_density;
/// RC discharge timing.
pub mod discharge;

pub use capacitance::{parallel_plate_capacitance, parallel_plate_capacitance_with};
pub use charge_density::charge_density;
pub use discharge::{discharge_time, discharge_time_to_default_fraction, rc_time_constant};
