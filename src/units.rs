//! Strongly typed unit helpers and quantity abstractions.
//!
//! A [`Quantity`] is a thin newtype over [`Scalar`] tagged with a zero-sized
//! unit marker. Each marker names the base unit a quantity is stored in;
//! conversions to and from the common sub-units are exact linear scale
//! factors, never approximate.

use core::fmt;
use core::marker::PhantomData;

use crate::math::Scalar;

/// Marker trait implemented by unit tags.
pub trait Unit {
    /// Display symbol, e.g. `"F"`.
    const SYMBOL: &'static str;
}

/// Farad (capacitance).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Farad;

/// Ohm (resistance).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ohm;

/// Volt (electric potential).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volt;

/// Coulomb (electric charge).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coulomb;

/// Second (time).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Second;

/// Square meter (area).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareMeter;

/// Meter (length).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meter;

/// Liter (volume).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Liter;

/// Microcoulomb per liter (volumetric charge density).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MicrocoulombPerLiter;

impl Unit for Farad {
    const SYMBOL: &'static str = "F";
}

impl Unit for Ohm {
    const SYMBOL: &'static str = "Ω";
}

impl Unit for Volt {
    const SYMBOL: &'static str = "V";
}

impl Unit for Coulomb {
    const SYMBOL: &'static str = "C";
}

impl Unit for Second {
    const SYMBOL: &'static str = "s";
}

impl Unit for SquareMeter {
    const SYMBOL: &'static str = "m²";
}

impl Unit for Meter {
    const SYMBOL: &'static str = "m";
}

impl Unit for Liter {
    const SYMBOL: &'static str = "L";
}

impl Unit for MicrocoulombPerLiter {
    const SYMBOL: &'static str = "µC/L";
}

/// Scalar value tagged with the unit it is expressed in.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<T, U> {
    value: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    _unit: PhantomData<U>,
}

impl<U: Unit> Quantity<Scalar, U> {
    /// Wraps a magnitude already expressed in the base unit.
    #[must_use]
    pub const fn new(value: Scalar) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    /// Magnitude in the base unit.
    #[must_use]
    pub const fn value(&self) -> Scalar {
        self.value
    }
}

impl<U: Unit> fmt::Display for Quantity<Scalar, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        write!(f, " {}", U::SYMBOL)
    }
}

/// Capacitance in farads.
pub type Capacitance = Quantity<Scalar, Farad>;
/// Resistance in ohms.
pub type Resistance = Quantity<Scalar, Ohm>;
/// Electric potential in volts.
pub type Voltage = Quantity<Scalar, Volt>;
/// Electric charge in coulombs.
pub type Charge = Quantity<Scalar, Coulomb>;
/// Time in seconds.
pub type Time = Quantity<Scalar, Second>;
/// Area in square meters.
pub type Area = Quantity<Scalar, SquareMeter>;
/// Length in meters.
pub type Length = Quantity<Scalar, Meter>;
/// Volume in liters.
pub type Volume = Quantity<Scalar, Liter>;
/// Volumetric charge density in microcoulombs per liter.
pub type ChargeDensity = Quantity<Scalar, MicrocoulombPerLiter>;

impl Quantity<Scalar, Farad> {
    /// Builds a capacitance from picofarads (1 pF = 10⁻¹² F).
    #[must_use]
    pub const fn from_picofarads(picofarads: Scalar) -> Self {
        Self::new(picofarads * 1.0e-12)
    }

    /// Builds a capacitance from nanofarads (1 nF = 10⁻⁹ F).
    #[must_use]
    pub const fn from_nanofarads(nanofarads: Scalar) -> Self {
        Self::new(nanofarads * 1.0e-9)
    }

    /// Magnitude in picofarads.
    #[must_use]
    pub const fn as_picofarads(&self) -> Scalar {
        self.value() * 1.0e12
    }

    /// Magnitude in nanofarads.
    #[must_use]
    pub const fn as_nanofarads(&self) -> Scalar {
        self.value() * 1.0e9
    }
}

impl Quantity<Scalar, Ohm> {
    /// Builds a resistance from megaohms (1 MΩ = 10⁶ Ω).
    #[must_use]
    pub const fn from_megaohms(megaohms: Scalar) -> Self {
        Self::new(megaohms * 1.0e6)
    }
}

impl Quantity<Scalar, Coulomb> {
    /// Magnitude in microcoulombs.
    #[must_use]
    pub const fn as_microcoulombs(&self) -> Scalar {
        self.value() * 1.0e6
    }
}

impl Quantity<Scalar, SquareMeter> {
    /// Builds an area from square centimeters (1 cm² = 10⁻⁴ m²).
    #[must_use]
    pub const fn from_square_centimeters(square_centimeters: Scalar) -> Self {
        Self::new(square_centimeters * 1.0e-4)
    }
}

impl Quantity<Scalar, Meter> {
    /// Builds a length from millimeters (1 mm = 10⁻³ m).
    #[must_use]
    pub const fn from_millimeters(millimeters: Scalar) -> Self {
        Self::new(millimeters * 1.0e-3)
    }
}

impl Quantity<Scalar, Liter> {
    /// Builds a volume from milliliters (1 mL = 10⁻³ L).
    #[must_use]
    pub const fn from_milliliters(milliliters: Scalar) -> Self {
        Self::new(milliliters * 1.0e-3)
    }
}
