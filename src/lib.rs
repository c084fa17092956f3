//! # Twine HX Sizing
//!
//! Forward and reverse sizing of two-stream counter-flow heat exchangers,
//! including compensation of a mis-sized exchanger with a bypass or an
//! admixer, for [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Exchanger models and their [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use twine_hx_sizing::models::thermal::hx::{
//!     ForwardExchanger, HxError, MixerKind, MixerSide, Mixers, ReverseExchanger, StreamPair,
//! };
//! use twine_hx_sizing::support::{constraint::StrictlyPositive, hx::HeatLoad};
//! use uom::si::{
//!     f64::{HeatTransfer, ThermalConductance, ThermodynamicTemperature},
//!     heat_transfer::watt_per_square_meter_kelvin, power::kilowatt,
//!     thermal_conductance::kilowatt_per_kelvin, thermodynamic_temperature::degree_celsius,
//! };
//!
//! fn main() -> Result<(), HxError> {
//!     let streams = StreamPair::from_arrays(
//!         [80.0, 20.0].map(ThermodynamicTemperature::new::<degree_celsius>),
//!         [1000.0, 1000.0].map(HeatTransfer::new::<watt_per_square_meter_kelvin>),
//!         [5.0, 4.0].map(ThermalConductance::new::<kilowatt_per_kelvin>),
//!     )?;
//!     let load = HeatLoad::new::<kilowatt>(100.0)?;
//!
//!     let forward = ForwardExchanger::new(streams, load, Mixers::default());
//!     let area = forward.area()?;
//!
//!     let mut reverse = ReverseExchanger::new(streams, load, StrictlyPositive::new(area)?);
//!     assert_eq!(reverse.mixer_type()?, MixerKind::None);
//!
//!     reverse.heat_load = HeatLoad::new::<kilowatt>(110.0)?;
//!     assert_eq!(reverse.mixer_type()?, MixerKind::Admixer);
//!
//!     let solution = reverse.solve(MixerSide::Cold)?;
//!     assert!(solution.admixer_fraction().is_some());
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod support;
