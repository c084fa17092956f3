use uom::si::f64::{TemperatureInterval, ThermodynamicTemperature};

use crate::support::{hx::log_mean_temperature_difference, units::TemperatureDifference};

use super::HxError;

/// Temperatures one stream has where it meets the exchanger surface.
///
/// With a mixer these differ from the stream's own inlet and outlet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceTemperatures {
    pub inlet: ThermodynamicTemperature,
    pub outlet: ThermodynamicTemperature,
}

/// End differences `(ΔTa, ΔTb)` of a counter-flow surface.
///
/// `ΔTa` is hot outlet minus cold inlet and `ΔTb` is hot inlet minus cold outlet.
pub(super) fn end_differences(
    hot: &SurfaceTemperatures,
    cold: &SurfaceTemperatures,
) -> (TemperatureInterval, TemperatureInterval) {
    (hot.outlet.minus(cold.inlet), hot.inlet.minus(cold.outlet))
}

/// Log-mean temperature difference across a counter-flow surface.
///
/// # Errors
///
/// Returns [`HxError::InfeasibleThermalDuty`] on a temperature cross or a
/// non-finite end difference.
pub(super) fn surface_lmtd(
    hot: &SurfaceTemperatures,
    cold: &SurfaceTemperatures,
) -> Result<TemperatureInterval, HxError> {
    let (delta_t_a, delta_t_b) = end_differences(hot, cold);
    log_mean_temperature_difference(delta_t_a, delta_t_b)
        .map_err(|_| HxError::InfeasibleThermalDuty { delta_t_a, delta_t_b })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::degree_celsius,
    };

    fn surface(inlet: f64, outlet: f64) -> SurfaceTemperatures {
        SurfaceTemperatures {
            inlet: ThermodynamicTemperature::new::<degree_celsius>(inlet),
            outlet: ThermodynamicTemperature::new::<degree_celsius>(outlet),
        }
    }

    #[test]
    fn parallel_profiles_return_the_end_difference() -> Result<(), HxError> {
        let lmtd = surface_lmtd(&surface(80.0, 60.0), &surface(40.0, 60.0))?;
        assert_relative_eq!(lmtd.get::<delta_kelvin>(), 20.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn counter_flow_lmtd() -> Result<(), HxError> {
        let lmtd = surface_lmtd(&surface(80.0, 60.0), &surface(20.0, 45.0))?;
        let expected = (40.0 - 35.0) / (40.0_f64 / 35.0).ln();
        assert_relative_eq!(lmtd.get::<delta_kelvin>(), expected, epsilon = 1e-10);
        Ok(())
    }

    #[test]
    fn temperature_cross_is_infeasible() {
        let result = surface_lmtd(&surface(80.0, 30.0), &surface(40.0, 60.0));
        let Err(HxError::InfeasibleThermalDuty { delta_t_a, delta_t_b }) = result else {
            panic!("expected an infeasible duty, got {result:?}");
        };
        assert_relative_eq!(delta_t_a.get::<delta_kelvin>(), -10.0, epsilon = 1e-10);
        assert_relative_eq!(delta_t_b.get::<delta_kelvin>(), 20.0, epsilon = 1e-10);
    }
}
