//! Forward sizing of a counter-flow exchanger.
//!
//! Given the streams, the duty, and a mixer on each side, the forward model
//! derives the temperatures at the surface and the area needed to carry the
//! duty. Every value is recomputed on each call, so mutating a public field is
//! reflected immediately.

use uom::si::f64::{Area, HeatTransfer, TemperatureInterval, ThermodynamicTemperature};

use crate::support::{
    hx::{HeatLoad, required_area},
    units::TemperatureDifference,
};

use super::{
    HxError, Mixer, Mixers, StreamPair, StreamSide,
    surface::{SurfaceTemperatures, surface_lmtd},
};

/// A counter-flow exchanger with optional mixers, sized from its duty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardExchanger {
    pub streams: StreamPair,
    pub heat_load: HeatLoad,
    pub mixers: Mixers,
}

/// Snapshot of every value a [`ForwardExchanger`] derives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardResults {
    pub overall_heat_transfer_coefficient: HeatTransfer,
    pub hot: ForwardStreamResults,
    pub cold: ForwardStreamResults,
    pub logarithmic_temperature_difference: TemperatureInterval,
    pub area: Area,
}

/// Derived temperatures for one stream of a [`ForwardExchanger`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardStreamResults {
    /// Temperatures at the exchanger surface.
    pub surface: SurfaceTemperatures,

    /// Stream outlet after recombination.
    pub outlet: ThermodynamicTemperature,
}

impl ForwardExchanger {
    #[must_use]
    pub fn new(streams: StreamPair, heat_load: HeatLoad, mixers: Mixers) -> Self {
        Self {
            streams,
            heat_load,
            mixers,
        }
    }

    #[must_use]
    pub fn overall_heat_transfer_coefficient(&self) -> HeatTransfer {
        self.streams.overall_heat_transfer_coefficient()
    }

    /// Stream outlet temperature, independent of the mixer on that side.
    #[must_use]
    pub fn outlet_temperature(&self, side: StreamSide) -> ThermodynamicTemperature {
        self.streams.outlet_temperature(side, self.heat_load)
    }

    /// Temperature at which the stream reaches the surface.
    ///
    /// An admixer blends the stream inlet with recirculated outlet flow,
    /// giving `(T_in + f·T_out) / (1 + f)`. Otherwise this is the stream inlet.
    #[must_use]
    pub fn exchanger_inlet_temperature(&self, side: StreamSide) -> ThermodynamicTemperature {
        let inlet = self.streams.side(side).inlet_temperature;
        match self.mixers.side(side) {
            Mixer::None | Mixer::Bypass(_) => inlet,
            mixer @ Mixer::Admixer(_) => {
                let f = mixer.fraction();
                inlet + self.outlet_temperature(side).minus(inlet) * (f / (1. + f))
            }
        }
    }

    /// Temperature at which the stream leaves the surface.
    ///
    /// The surface carries the whole duty on `1 - f` of the flow for a bypass
    /// and on `1 + f` of it for an admixer.
    #[must_use]
    pub fn exchanger_outlet_temperature(&self, side: StreamSide) -> ThermodynamicTemperature {
        let mixer = self.mixers.side(side);
        if *mixer == Mixer::None {
            return self.outlet_temperature(side);
        }

        let surface_rate = self
            .streams
            .side(side)
            .capacitance_rate
            .scaled(mixer.flow_factor());
        self.exchanger_inlet_temperature(side) + *self.heat_load / surface_rate * side.direction()
    }

    /// Inlet and outlet temperatures at the surface for one side.
    #[must_use]
    pub fn surface_temperatures(&self, side: StreamSide) -> SurfaceTemperatures {
        SurfaceTemperatures {
            inlet: self.exchanger_inlet_temperature(side),
            outlet: self.exchanger_outlet_temperature(side),
        }
    }

    /// Log-mean temperature difference across the surface.
    ///
    /// # Errors
    ///
    /// Returns [`HxError::InfeasibleThermalDuty`] if the surface temperatures
    /// cross or an end difference is not finite.
    pub fn logarithmic_temperature_difference(&self) -> Result<TemperatureInterval, HxError> {
        surface_lmtd(
            &self.surface_temperatures(StreamSide::Hot),
            &self.surface_temperatures(StreamSide::Cold),
        )
    }

    /// Surface area required to carry the duty, `Q / (U · LMTD)`.
    ///
    /// # Errors
    ///
    /// Returns [`HxError::InfeasibleThermalDuty`] if the duty cannot be
    /// carried by any finite area.
    pub fn area(&self) -> Result<Area, HxError> {
        let lmtd = self.logarithmic_temperature_difference()?;
        Ok(required_area(
            self.heat_load,
            self.overall_heat_transfer_coefficient(),
            lmtd,
        ))
    }

    /// Evaluates every derived value at once.
    ///
    /// # Errors
    ///
    /// Returns [`HxError::InfeasibleThermalDuty`] under the same conditions as
    /// [`ForwardExchanger::area`].
    pub fn results(&self) -> Result<ForwardResults, HxError> {
        let stream_results = |side: StreamSide| ForwardStreamResults {
            surface: self.surface_temperatures(side),
            outlet: self.outlet_temperature(side),
        };
        let hot = stream_results(StreamSide::Hot);
        let cold = stream_results(StreamSide::Cold);

        let u = self.overall_heat_transfer_coefficient();
        let lmtd = surface_lmtd(&hot.surface, &cold.surface)?;

        Ok(ForwardResults {
            overall_heat_transfer_coefficient: u,
            hot,
            cold,
            logarithmic_temperature_difference: lmtd,
            area: required_area(self.heat_load, u, lmtd),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, heat_transfer::watt_per_square_meter_kelvin, power::kilowatt,
        temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::degree_celsius,
    };

    use crate::models::thermal::hx::test_support::{celsius, reference_streams};

    fn reference(load: f64, mixers: Mixers) -> Result<ForwardExchanger, HxError> {
        Ok(ForwardExchanger::new(
            reference_streams()?,
            HeatLoad::new::<kilowatt>(load)?,
            mixers,
        ))
    }

    #[test]
    fn unmixed_exchanger() -> Result<(), HxError> {
        let hx = reference(100.0, Mixers::default())?;

        assert_relative_eq!(
            hx.overall_heat_transfer_coefficient()
                .get::<watt_per_square_meter_kelvin>(),
            500.0
        );
        for side in StreamSide::BOTH {
            assert_eq!(
                hx.exchanger_inlet_temperature(side),
                hx.streams.side(side).inlet_temperature
            );
            assert_eq!(hx.exchanger_outlet_temperature(side), hx.outlet_temperature(side));
        }

        let expected_lmtd = 5.0 / (40.0_f64 / 35.0).ln();
        assert_relative_eq!(
            hx.logarithmic_temperature_difference()?.get::<delta_kelvin>(),
            expected_lmtd,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            hx.area()?.get::<square_meter>(),
            100_000.0 / (500.0 * expected_lmtd),
            max_relative = 1e-9
        );
        Ok(())
    }

    #[test]
    fn zero_fractions_behave_like_no_mixer() -> Result<(), HxError> {
        let plain = reference(100.0, Mixers::default())?.area()?;

        for side in StreamSide::BOTH {
            for mixer in [Mixer::bypass(0.0)?, Mixer::admixer(0.0)?] {
                let area = reference(100.0, Mixers::on(side, mixer))?.area()?;
                assert_relative_eq!(
                    area.get::<square_meter>(),
                    plain.get::<square_meter>(),
                    max_relative = 1e-14
                );
            }
        }
        Ok(())
    }

    #[test]
    fn bypass_raises_surface_outlet_change() -> Result<(), HxError> {
        let hx = reference(100.0, Mixers::on(StreamSide::Cold, Mixer::bypass(0.2)?))?;

        assert_eq!(hx.exchanger_inlet_temperature(StreamSide::Cold), celsius(20.0));
        // 100 kW on 0.8 · 4 kW/K.
        assert_relative_eq!(
            hx.exchanger_outlet_temperature(StreamSide::Cold)
                .get::<degree_celsius>(),
            51.25,
            epsilon = 1e-9
        );
        // The stream outlet is set by the energy balance alone.
        assert_relative_eq!(
            hx.outlet_temperature(StreamSide::Cold).get::<degree_celsius>(),
            45.0,
            epsilon = 1e-9
        );
        // A hotter cold outlet squeezes the LMTD, so more area is needed.
        assert!(hx.area()? > reference(100.0, Mixers::default())?.area()?);
        Ok(())
    }

    #[test]
    fn admixer_blends_inlet_with_outlet() -> Result<(), HxError> {
        let hx = reference(100.0, Mixers::on(StreamSide::Hot, Mixer::admixer(0.25)?))?;

        // (80 + 0.25 · 60) / 1.25
        assert_relative_eq!(
            hx.exchanger_inlet_temperature(StreamSide::Hot)
                .get::<degree_celsius>(),
            76.0,
            epsilon = 1e-9
        );
        // 76 - 100 / (1.25 · 5) closes on the stream outlet.
        assert_relative_eq!(
            hx.exchanger_outlet_temperature(StreamSide::Hot)
                .get::<degree_celsius>(),
            60.0,
            epsilon = 1e-9
        );
        assert!(hx.area()? > reference(100.0, Mixers::default())?.area()?);
        Ok(())
    }

    #[test]
    fn mutating_fields_is_reflected_immediately() -> Result<(), HxError> {
        let mut hx = reference(100.0, Mixers::default())?;
        let before = hx.area()?;

        hx.heat_load = HeatLoad::new::<kilowatt>(110.0)?;
        assert!(hx.area()? > before);

        hx.mixers.cold = Mixer::admixer(0.5)?;
        assert_relative_eq!(
            hx.results()?.area.get::<square_meter>(),
            hx.area()?.get::<square_meter>()
        );
        Ok(())
    }

    #[test]
    fn results_match_individual_methods() -> Result<(), HxError> {
        let hx = reference(90.0, Mixers::on(StreamSide::Hot, Mixer::bypass(0.1)?))?;
        let results = hx.results()?;

        assert_eq!(results.area, hx.area()?);
        assert_eq!(
            results.logarithmic_temperature_difference,
            hx.logarithmic_temperature_difference()?
        );
        assert_eq!(results.hot.surface, hx.surface_temperatures(StreamSide::Hot));
        assert_eq!(results.cold.outlet, hx.outlet_temperature(StreamSide::Cold));
        Ok(())
    }

    #[test]
    fn excessive_duty_is_infeasible() -> Result<(), HxError> {
        // The hot outlet would fall to 0 °C, below the cold inlet.
        let hx = reference(400.0, Mixers::default())?;

        assert!(matches!(
            hx.area(),
            Err(HxError::InfeasibleThermalDuty { .. })
        ));
        assert!(matches!(
            hx.results(),
            Err(HxError::InfeasibleThermalDuty { .. })
        ));
        Ok(())
    }

    #[test]
    fn swapping_labels_keeps_the_coefficient() -> Result<(), HxError> {
        let mut hx = reference(100.0, Mixers::default())?;
        let u = hx.overall_heat_transfer_coefficient();

        std::mem::swap(
            &mut hx.streams.hot.film_coefficient,
            &mut hx.streams.cold.film_coefficient,
        );
        assert_eq!(hx.overall_heat_transfer_coefficient(), u);
        Ok(())
    }
}
