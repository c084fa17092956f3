//! Log-mean temperature difference relations for counter-flow exchangers.

use crate::support::constraint::{ConstraintError, ConstraintResult, StrictlyPositive};
use uom::si::{
    f64::{Area, HeatTransfer, TemperatureInterval},
    temperature_interval::kelvin as delta_kelvin,
};

use super::HeatLoad;

/// Log-mean temperature difference of two end differences.
///
/// For a counter-flow exchanger `delta_t_a` is the hot outlet minus the cold
/// inlet and `delta_t_b` is the hot inlet minus the cold outlet, though the
/// relation is symmetric in its arguments.
///
/// When the end differences are equal (parallel temperature profiles) the
/// result is that difference itself, with no logarithm evaluated.
///
/// # Errors
///
/// Returns `Err` if either end difference is not strictly positive and finite,
/// which indicates a temperature cross.
pub fn log_mean_temperature_difference(
    delta_t_a: TemperatureInterval,
    delta_t_b: TemperatureInterval,
) -> ConstraintResult<TemperatureInterval> {
    for delta_t in [delta_t_a, delta_t_b] {
        StrictlyPositive::new(delta_t)?;
        if !delta_t.is_finite() {
            return Err(ConstraintError::AboveMaximum);
        }
    }

    if delta_t_a == delta_t_b {
        tracing::trace!(
            delta_t = delta_t_a.get::<delta_kelvin>(),
            "equal end differences, lmtd taken directly"
        );
        return Ok(delta_t_a);
    }

    // ln(a/b) as ln_1p((a-b)/b) stays accurate when the ends nearly match.
    let a = delta_t_a.get::<delta_kelvin>();
    let b = delta_t_b.get::<delta_kelvin>();
    Ok(TemperatureInterval::new::<delta_kelvin>(
        (a - b) / ((a - b) / b).ln_1p(),
    ))
}

/// Surface area needed to carry `heat_load` at the given overall coefficient
/// and log-mean temperature difference: `A = Q / (U * LMTD)`.
#[must_use]
pub fn required_area(heat_load: HeatLoad, u: HeatTransfer, lmtd: TemperatureInterval) -> Area {
    *heat_load / (u * lmtd)
}

/// Log-mean temperature difference forced by a fixed surface area:
/// `LMTD = Q / (U * A)`.
#[must_use]
pub fn lmtd_for_area(heat_load: HeatLoad, u: HeatTransfer, area: Area) -> TemperatureInterval {
    *heat_load / (u * area)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, heat_transfer::watt_per_square_meter_kelvin, power::kilowatt,
    };

    use super::*;

    fn dt(value: f64) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(value)
    }

    #[test]
    fn textbook_value() -> ConstraintResult<()> {
        let lmtd = log_mean_temperature_difference(dt(20.), dt(78.9))?;

        assert_relative_eq!(
            lmtd.get::<delta_kelvin>(),
            58.9 / (78.9_f64 / 20.).ln(),
            max_relative = 1e-14
        );
        Ok(())
    }

    #[test]
    fn symmetric_in_ends() -> ConstraintResult<()> {
        let forward = log_mean_temperature_difference(dt(40.), dt(35.))?;
        let backward = log_mean_temperature_difference(dt(35.), dt(40.))?;

        assert_relative_eq!(
            forward.get::<delta_kelvin>(),
            backward.get::<delta_kelvin>(),
            max_relative = 1e-14
        );
        Ok(())
    }

    #[test]
    fn equal_ends_are_returned_exactly() -> ConstraintResult<()> {
        let lmtd = log_mean_temperature_difference(dt(35.), dt(35.))?;

        assert_eq!(lmtd, dt(35.));
        Ok(())
    }

    #[test]
    fn nearly_equal_ends_stay_accurate() -> ConstraintResult<()> {
        let lmtd = log_mean_temperature_difference(dt(35.), dt(35. + 1e-12))?;

        assert_relative_eq!(lmtd.get::<delta_kelvin>(), 35., max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn temperature_cross_is_rejected() {
        assert_eq!(
            log_mean_temperature_difference(dt(-5.), dt(10.)),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            log_mean_temperature_difference(dt(10.), dt(0.)),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            log_mean_temperature_difference(dt(f64::INFINITY), dt(10.)),
            Err(ConstraintError::AboveMaximum)
        );
    }

    #[test]
    fn area_and_lmtd_are_inverse() -> ConstraintResult<()> {
        let load = HeatLoad::new::<kilowatt>(7500.)?;
        let u = HeatTransfer::new::<watt_per_square_meter_kelvin>(500.);

        let lmtd = lmtd_for_area(load, u, Area::new::<square_meter>(350.));
        assert_relative_eq!(lmtd.get::<delta_kelvin>(), 7500. / 175., max_relative = 1e-14);

        let area = required_area(load, u, lmtd);
        assert_relative_eq!(area.get::<square_meter>(), 350., max_relative = 1e-14);
        Ok(())
    }
}
