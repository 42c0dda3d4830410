use crate::errors::ElectrostaticsError;
use crate::math::Scalar;
use crate::units::{Capacitance, Charge, ChargeDensity, Volume};

/// Volumetric density of the charge stored on a charged capacitor plate.
///
/// `Q = C · V`, spread through the plate's volume and reported in µC/L.
/// Capacitance arrives in pF and volume in mL. Voltage may be negative
/// (reversed polarity); the density sign follows it.
///
/// # Errors
///
/// Returns [`ElectrostaticsError::InvalidInput`] when `volume_ml <= 0` or
/// `capacitance_pf < 0`.
pub fn charge_density(
    capacitance_pf: Scalar,
    voltage_v: Scalar,
    volume_ml: Scalar,
) -> Result<ChargeDensity, ElectrostaticsError> {
    if volume_ml <= 0.0 {
        return Err(ElectrostaticsError::invalid("volume_ml must be > 0"));
    }
    if capacitance_pf < 0.0 {
        return Err(ElectrostaticsError::invalid("capacitance_pf must be >= 0"));
    }

    let capacitance = Capacitance::from_picofarads(capacitance_pf);
    let volume = Volume::from_milliliters(volume_ml);
    let charge = Charge::new(capacitance.value() * voltage_v);
    Ok(ChargeDensity::new(
        charge.as_microcoulombs() / volume.value(),
    ))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn matches_reference_value() {
        // 100 pF at 1000 V stores 1e-7 C = 0.1 µC; spread through 0.05 L
        // that is 2 µC/L.
        let rho = charge_density(100.0, 1000.0, 50.0).unwrap();
        assert_relative_eq!(rho.value(), 2.0, max_relative = 1.0e-12);
    }

    #[test]
    fn sign_follows_voltage() {
        let forward = charge_density(100.0, 1000.0, 50.0).unwrap().value();
        let reversed = charge_density(100.0, -1000.0, 50.0).unwrap().value();
        assert!(reversed < 0.0);
        assert_relative_eq!(reversed, -forward, max_relative = 1.0e-12);
    }

    #[test]
    fn zero_capacitance_is_valid_and_yields_zero() {
        let rho = charge_density(0.0, 1000.0, 50.0).unwrap();
        assert_eq!(rho.value(), 0.0);
    }

    #[test]
    fn out_of_range_inputs_are_rejected() {
        assert!(matches!(
            charge_density(100.0, 1000.0, 0.0),
            Err(ElectrostaticsError::InvalidInput(_))
        ));
        assert!(matches!(
            charge_density(-1.0, 1000.0, 50.0),
            Err(ElectrostaticsError::InvalidInput(_))
        ));
    }

    #[test]
    fn identical_inputs_yield_identical_outputs() {
        let first = charge_density(42.0, 230.0, 12.0).unwrap();
        let second = charge_density(42.0, 230.0, 12.0).unwrap();
        assert_eq!(first, second);
    }
}
