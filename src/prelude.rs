//! Convenience re-exports for running the calculators.

pub use crate::calculators::{
    capacitance::{parallel_plate_capacitance, parallel_plate_capacitance_with},
    charge_density::charge_density,
    discharge::{discharge_time, discharge_time_to_default_fraction, rc_time_constant},
};
pub use crate::constants::*;
pub use crate::errors::ElectrostaticsError;
pub use crate::materials::Dielectric;
pub use crate::math::Scalar;
pub use crate::units::{
    Area, Capacitance, Charge, ChargeDensity, Coulomb, Farad, Length, Liter, Meter,
    MicrocoulombPerLiter, Ohm, Quantity, Resistance, Second, SquareMeter, Time, Unit, Volt,
    Voltage, Volume,
};
