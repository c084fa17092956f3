use uom::si::{
    area::square_meter,
    f64::{Area, HeatTransfer, ThermalConductance, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    power::kilowatt,
    thermal_conductance::kilowatt_per_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    hx::HeatLoad,
};

use super::{HxError, StreamPair};

pub(super) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

pub(super) fn square_meters(value: f64) -> Result<Constrained<Area, StrictlyPositive>, HxError> {
    Ok(StrictlyPositive::new(Area::new::<square_meter>(value))?)
}

pub(super) fn kilowatts(value: f64) -> Result<HeatLoad, HxError> {
    Ok(HeatLoad::new::<kilowatt>(value)?)
}

/// Streams at 80 °C and 20 °C with 1 kW/m²K films and 5 and 4 kW/K flows.
pub(super) fn reference_streams() -> Result<StreamPair, HxError> {
    streams([80.0, 20.0], [5.0, 4.0])
}

/// Chen (2019): 125 °C and 30 °C with 1 kW/m²K films.
///
/// At 7500 kW the cold flow puts the unmixed area just under 350 m².
pub(super) fn chen_streams() -> Result<StreamPair, HxError> {
    streams([125.0, 30.0], [100.0, 465.838_509_316_770_2])
}

/// Chen streams with the flows swapped, so the hot stream is the larger one.
pub(super) fn mirrored_chen_streams() -> Result<StreamPair, HxError> {
    streams([125.0, 30.0], [465.838_509_316_770_2, 100.0])
}

fn streams(inlets: [f64; 2], flows: [f64; 2]) -> Result<StreamPair, HxError> {
    StreamPair::from_arrays(
        inlets.map(celsius),
        [1000.0; 2].map(HeatTransfer::new::<watt_per_square_meter_kelvin>),
        flows.map(ThermalConductance::new::<kilowatt_per_kelvin>),
    )
}
