//! Dielectric material presets.

use crate::constants::{EPSILON_R_GLASS, EPSILON_R_PLASTIC};
use crate::math::Scalar;

/// Dielectric fill between capacitor plates.
///
/// The two presets carry the relative permittivities of the reference
/// experiment's materials; `Custom` admits any other value. Preset selection
/// is a convenience on top of [`parallel_plate_capacitance`], which accepts
/// any positive εr directly.
///
/// [`parallel_plate_capacitance`]: crate::calculators::capacitance::parallel_plate_capacitance
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dielectric {
    /// Soda-lime glass (a wine glass), εr ≈ 7.0.
    Glass,
    /// Polyethylene-like plastic bag, εr ≈ 2.5.
    PlasticBag,
    /// User-supplied relative permittivity.
    Custom(Scalar),
}

impl Dielectric {
    /// Relative permittivity εr of the dielectric.
    #[must_use]
    pub const fn relative_permittivity(self) -> Scalar {
        match self {
            Self::Glass => EPSILON_R_GLASS,
            Self::PlasticBag => EPSILON_R_PLASTIC,
            Self::Custom(epsilon_r) => epsilon_r,
        }
    }
}

impl Default for Dielectric {
    fn default() -> Self {
        Self::Glass
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn presets_match_reference_permittivities() {
        assert_relative_eq!(Dielectric::Glass.relative_permittivity(), 7.0);
        assert_relative_eq!(Dielectric::PlasticBag.relative_permittivity(), 2.5);
        assert_relative_eq!(Dielectric::Custom(3.9).relative_permittivity(), 3.9);
    }
}
