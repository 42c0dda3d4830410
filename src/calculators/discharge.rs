use crate::constants::DEFAULT_REMAINING_FRACTION;
use crate::errors::ElectrostaticsError;
use crate::math::Scalar;
use crate::units::{Capacitance, Resistance, Time};

/// RC time constant τ = R·C in seconds, from SI inputs.
#[inline]
#[must_use]
pub fn rc_time_constant(resistance_ohms: Scalar, capacitance_farads: Scalar) -> Scalar {
    resistance_ohms * capacitance_farads
}

/// Time for an RC discharge to decay to `remaining_fraction` of the initial
/// charge.
///
/// Inverts `V(t)/V₀ = exp(−t / RC)` into `t = −RC · ln(f)`. Resistance
/// arrives in MΩ and capacitance in pF; the result is in seconds.
/// `remaining_fraction = 1` is a valid edge case and yields `t = 0` (no
/// decay needed).
///
/// # Errors
///
/// Returns [`ElectrostaticsError::InvalidInput`] when `resistance_mohm < 0`,
/// `capacitance_pf < 0`, or `remaining_fraction` lies outside `(0, 1]`.
pub fn discharge_time(
    resistance_mohm: Scalar,
    capacitance_pf: Scalar,
    remaining_fraction: Scalar,
) -> Result<Time, ElectrostaticsError> {
    if resistance_mohm < 0.0 {
        return Err(ElectrostaticsError::invalid("resistance_mohm must be >= 0"));
    }
    if capacitance_pf < 0.0 {
        return Err(ElectrostaticsError::invalid("capacitance_pf must be >= 0"));
    }
    if !(remaining_fraction > 0.0 && remaining_fraction <= 1.0) {
        return Err(ElectrostaticsError::invalid(
            "remaining_fraction must be in (0, 1]",
        ));
    }

    let resistance = Resistance::from_megaohms(resistance_mohm);
    let capacitance = Capacitance::from_picofarads(capacitance_pf);
    let tau = rc_time_constant(resistance.value(), capacitance.value());
    Ok(Time::new(-tau * remaining_fraction.ln()))
}

/// [`discharge_time`] with the default remaining fraction,
/// [`DEFAULT_REMAINING_FRACTION`] (60% remaining, i.e. 40% lost).
///
/// # Errors
///
/// Same conditions as [`discharge_time`] for the resistance and capacitance.
pub fn discharge_time_to_default_fraction(
    resistance_mohm: Scalar,
    capacitance_pf: Scalar,
) -> Result<Time, ElectrostaticsError> {
    discharge_time(resistance_mohm, capacitance_pf, DEFAULT_REMAINING_FRACTION)
}
