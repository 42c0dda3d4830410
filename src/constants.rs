//! Baseline physical constants and calculator defaults.
//!
//! ε₀ is carried at the four-significant-figure value the reference
//! calculations were published with, so their documented results reproduce
//! exactly. CODATA 2018 lists 8.8541878128 × 10⁻¹² F/m if more digits
//! matter for your application.

/// Vacuum permittivity ε₀ in farads per meter (F/m).
pub const VACUUM_PERMITTIVITY: f64 = 8.854e-12;

/// Relative permittivity of soda-lime glass (a wine glass).
pub const EPSILON_R_GLASS: f64 = 7.0;

/// Relative permittivity of a polyethylene-like plastic bag.
pub const EPSILON_R_PLASTIC: f64 = 2.5;

/// Relative permittivity assumed when no dielectric is chosen.
pub const EPSILON_R_DEFAULT: f64 = EPSILON_R_GLASS;

/// Default target fraction of charge remaining after an RC discharge
/// (0.60, i.e. 40% lost).
pub const DEFAULT_REMAINING_FRACTION: f64 = 0.60;
