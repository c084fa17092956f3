use uom::si::f64::{HeatTransfer, ThermalConductance, ThermodynamicTemperature};

use crate::support::hx::{CapacitanceRate, FilmCoefficient, HeatLoad, overall_coefficient};

use super::{HxError, StreamSide};

/// Fixed data for one stream of an exchanger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamData {
    /// Temperature entering the stream's mixer, or the exchanger if unmixed.
    pub inlet_temperature: ThermodynamicTemperature,

    /// Film heat transfer coefficient on this side of the surface.
    pub film_coefficient: FilmCoefficient,

    /// Heat-capacity flow rate of the whole stream.
    pub capacitance_rate: CapacitanceRate,
}

impl StreamData {
    #[must_use]
    pub fn new(
        inlet_temperature: ThermodynamicTemperature,
        film_coefficient: FilmCoefficient,
        capacitance_rate: CapacitanceRate,
    ) -> Self {
        Self {
            inlet_temperature,
            film_coefficient,
            capacitance_rate,
        }
    }
}

/// The hot and cold streams of a two-stream counter-flow exchanger.
///
/// Temperature crosses are not rejected here. They surface as
/// [`HxError::InfeasibleThermalDuty`] when a log-mean temperature difference
/// is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamPair {
    pub hot: StreamData,
    pub cold: StreamData,
}

impl StreamPair {
    #[must_use]
    pub fn new(hot: StreamData, cold: StreamData) -> Self {
        Self { hot, cold }
    }

    /// Builds a pair from `[hot, cold]` arrays of each stream quantity.
    ///
    /// # Errors
    ///
    /// Returns [`HxError::InvalidInput`] if a film coefficient or capacitance
    /// rate is not strictly positive.
    pub fn from_arrays(
        inlet_temperatures: [ThermodynamicTemperature; 2],
        film_coefficients: [HeatTransfer; 2],
        capacitance_rates: [ThermalConductance; 2],
    ) -> Result<Self, HxError> {
        let [t_hot, t_cold] = inlet_temperatures;
        let [h_hot, h_cold] = film_coefficients;
        let [c_hot, c_cold] = capacitance_rates;

        Ok(Self {
            hot: StreamData::new(
                t_hot,
                FilmCoefficient::from_quantity(h_hot)?,
                CapacitanceRate::from_quantity(c_hot)?,
            ),
            cold: StreamData::new(
                t_cold,
                FilmCoefficient::from_quantity(h_cold)?,
                CapacitanceRate::from_quantity(c_cold)?,
            ),
        })
    }

    #[must_use]
    pub fn side(&self, side: StreamSide) -> &StreamData {
        match side {
            StreamSide::Hot => &self.hot,
            StreamSide::Cold => &self.cold,
        }
    }

    /// Overall heat transfer coefficient of the clean surface.
    #[must_use]
    pub fn overall_heat_transfer_coefficient(&self) -> HeatTransfer {
        overall_coefficient(self.hot.film_coefficient, self.cold.film_coefficient)
    }

    /// Stream outlet temperature from the energy balance, `T_in ∓ Q / C`.
    ///
    /// Mixers never change this value, only the temperatures at the surface.
    #[must_use]
    pub fn outlet_temperature(
        &self,
        side: StreamSide,
        heat_load: HeatLoad,
    ) -> ThermodynamicTemperature {
        let stream = self.side(side);
        stream.inlet_temperature + *heat_load / *stream.capacitance_rate * side.direction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        heat_transfer::watt_per_square_meter_kelvin, power::kilowatt,
        thermal_conductance::kilowatt_per_kelvin, thermodynamic_temperature::degree_celsius,
    };

    use crate::support::{constraint::ConstraintError, units::TemperatureDifference};

    fn reference() -> Result<StreamPair, HxError> {
        StreamPair::from_arrays(
            [80.0, 20.0].map(ThermodynamicTemperature::new::<degree_celsius>),
            [1000.0, 1000.0].map(HeatTransfer::new::<watt_per_square_meter_kelvin>),
            [5.0, 4.0].map(ThermalConductance::new::<kilowatt_per_kelvin>),
        )
    }

    #[test]
    fn energy_balance_on_outlets() -> Result<(), HxError> {
        let streams = reference()?;
        let load = HeatLoad::new::<kilowatt>(100.0)?;

        let t_hot = streams.outlet_temperature(StreamSide::Hot, load);
        let t_cold = streams.outlet_temperature(StreamSide::Cold, load);
        assert_relative_eq!(t_hot.get::<degree_celsius>(), 60.0, epsilon = 1e-10);
        assert_relative_eq!(t_cold.get::<degree_celsius>(), 45.0, epsilon = 1e-10);

        // Both streams carry the same duty.
        let q_hot = *streams.hot.capacitance_rate * streams.hot.inlet_temperature.minus(t_hot);
        let q_cold = *streams.cold.capacitance_rate * t_cold.minus(streams.cold.inlet_temperature);
        assert_relative_eq!(q_hot.get::<kilowatt>(), q_cold.get::<kilowatt>(), epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn harmonic_overall_coefficient() -> Result<(), HxError> {
        let streams = StreamPair::from_arrays(
            [80.0, 20.0].map(ThermodynamicTemperature::new::<degree_celsius>),
            [1500.0, 3000.0].map(HeatTransfer::new::<watt_per_square_meter_kelvin>),
            [5.0, 4.0].map(ThermalConductance::new::<kilowatt_per_kelvin>),
        )?;
        assert_relative_eq!(
            streams
                .overall_heat_transfer_coefficient()
                .get::<watt_per_square_meter_kelvin>(),
            1000.0,
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn rejects_non_positive_array_entries() {
        let result = StreamPair::from_arrays(
            [80.0, 20.0].map(ThermodynamicTemperature::new::<degree_celsius>),
            [1000.0, 0.0].map(HeatTransfer::new::<watt_per_square_meter_kelvin>),
            [5.0, 4.0].map(ThermalConductance::new::<kilowatt_per_kelvin>),
        );
        assert!(matches!(
            result,
            Err(HxError::InvalidInput(ConstraintError::Zero))
        ));

        let result = StreamPair::from_arrays(
            [80.0, 20.0].map(ThermodynamicTemperature::new::<degree_celsius>),
            [1000.0, 1000.0].map(HeatTransfer::new::<watt_per_square_meter_kelvin>),
            [-5.0, 4.0].map(ThermalConductance::new::<kilowatt_per_kelvin>),
        );
        assert!(matches!(
            result,
            Err(HxError::InvalidInput(ConstraintError::Negative))
        ));
    }
}
