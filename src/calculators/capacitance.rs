use crate::constants::VACUUM_PERMITTIVITY;
use crate::errors::ElectrostaticsError;
use crate::materials::Dielectric;
use crate::math::Scalar;
use crate::units::{Area, Capacitance, Length};

/// Capacitance of an ideal parallel-plate capacitor with a dielectric fill.
///
/// Implements `C = ε₀ · εr · A / d` with the plate area in cm² and the gap
/// in mm; the result is in farads. The output grows with area and εr and
/// shrinks with the gap.
///
/// # Errors
///
/// Returns [`ElectrostaticsError::InvalidInput`] when `gap_mm <= 0`,
/// `area_cm2 < 0`, or `epsilon_r <= 0`.
pub fn parallel_plate_capacitance(
    area_cm2: Scalar,
    gap_mm: Scalar,
    epsilon_r: Scalar,
) -> Result<Capacitance, ElectrostaticsError> {
    if gap_mm <= 0.0 {
        return Err(ElectrostaticsError::invalid("gap_mm must be > 0"));
    }
    if area_cm2 < 0.0 {
        return Err(ElectrostaticsError::invalid("area_cm2 must be >= 0"));
    }
    if epsilon_r <= 0.0 {
        return Err(ElectrostaticsError::invalid("epsilon_r must be > 0"));
    }

    let area = Area::from_square_centimeters(area_cm2);
    let gap = Length::from_millimeters(gap_mm);
    Ok(Capacitance::new(
        VACUUM_PERMITTIVITY * epsilon_r * area.value() / gap.value(),
    ))
}

/// [`parallel_plate_capacitance`] with εr taken from a [`Dielectric`] preset.
///
/// # Errors
///
/// Same conditions as [`parallel_plate_capacitance`]; a non-positive
/// `Dielectric::Custom` value is rejected like any other εr.
pub fn parallel_plate_capacitance_with(
    area_cm2: Scalar,
    gap_mm: Scalar,
    dielectric: Dielectric,
) -> Result<Capacitance, ElectrostaticsError> {
    parallel_plate_capacitance(area_cm2, gap_mm, dielectric.relative_permittivity())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn glass_plate_matches_reference_value() {
        // 10 cm² plates at 1 mm: A/d = 1 m, so C = 7 ε₀ ≈ 6.2e-11 F.
        let c = parallel_plate_capacitance(10.0, 1.0, 7.0).unwrap();
        assert_relative_eq!(c.value(), 6.197_8e-11, max_relative = 1.0e-12);
        assert_relative_eq!(c.as_picofarads(), 61.978, max_relative = 1.0e-12);
    }

    #[test]
    fn capacitance_is_positive_and_monotone() {
        let base = parallel_plate_capacitance(10.0, 1.0, 7.0).unwrap().value();
        assert!(base > 0.0);

        let wider = parallel_plate_capacitance(20.0, 1.0, 7.0).unwrap().value();
        let farther = parallel_plate_capacitance(10.0, 2.0, 7.0).unwrap().value();
        let weaker = parallel_plate_capacitance(10.0, 1.0, 2.5).unwrap().value();
        assert!(wider > base);
        assert!(farther < base);
        assert!(weaker < base);
    }

    #[test]
    fn zero_area_yields_zero_capacitance() {
        let c = parallel_plate_capacitance(0.0, 1.0, 7.0).unwrap();
        assert_eq!(c.value(), 0.0);
    }

    #[test]
    fn out_of_range_inputs_are_rejected() {
        for (area, gap, eps) in [(10.0, 0.0, 7.0), (-1.0, 1.0, 7.0), (10.0, 1.0, 0.0)] {
            let result = parallel_plate_capacitance(area, gap, eps);
            assert!(matches!(
                result,
                Err(ElectrostaticsError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn preset_wrapper_matches_scalar_call() {
        let preset = parallel_plate_capacitance_with(10.0, 1.0, Dielectric::Glass).unwrap();
        let scalar = parallel_plate_capacitance(10.0, 1.0, 7.0).unwrap();
        assert_eq!(preset, scalar);
    }

    #[test]
    fn identical_inputs_yield_identical_outputs() {
        let first = parallel_plate_capacitance(12.5, 0.8, 2.5).unwrap();
        let second = parallel_plate_capacitance(12.5, 0.8, 2.5).unwrap();
        assert_eq!(first, second);
    }
}
