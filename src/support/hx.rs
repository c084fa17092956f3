//! Heat exchanger sizing toolkit.
//!
//! General-purpose building blocks for log-mean-temperature-difference (LMTD)
//! sizing of two-stream exchangers:
//!
//! - **Stream properties**: [`CapacitanceRate`], [`FilmCoefficient`], [`HeatLoad`]
//! - **Relations**: [`overall_coefficient`], [`log_mean_temperature_difference`],
//!   [`required_area`], [`lmtd_for_area`]
//!
//! # Example
//!
//! ```
//! use twine_hx_sizing::support::constraint::ConstraintResult;
//! use twine_hx_sizing::support::hx::{
//!     FilmCoefficient, HeatLoad, log_mean_temperature_difference, overall_coefficient,
//!     required_area,
//! };
//! use uom::si::{
//!     area::square_meter, f64::TemperatureInterval,
//!     heat_transfer::watt_per_square_meter_kelvin, power::kilowatt,
//!     temperature_interval::kelvin,
//! };
//!
//! fn main() -> ConstraintResult<()> {
//!     let film = FilmCoefficient::new::<watt_per_square_meter_kelvin>(1000.0)?;
//!     let u = overall_coefficient(film, film);
//!
//!     let lmtd = log_mean_temperature_difference(
//!         TemperatureInterval::new::<kelvin>(40.0),
//!         TemperatureInterval::new::<kelvin>(40.0),
//!     )?;
//!     let area = required_area(HeatLoad::new::<kilowatt>(100.0)?, u, lmtd);
//!
//!     assert!((area.get::<square_meter>() - 5.0).abs() < 1e-12);
//!     Ok(())
//! }
//! ```

mod capacitance_rate;
mod film_coefficient;
mod heat_load;
mod lmtd;

pub use capacitance_rate::CapacitanceRate;
pub use film_coefficient::{FilmCoefficient, overall_coefficient};
pub use heat_load::HeatLoad;
pub use lmtd::{lmtd_for_area, log_mean_temperature_difference, required_area};
