//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities. Temperatures are
//! absolute ([`ThermodynamicTemperature`]) while the differences driving heat
//! transfer are intervals ([`TemperatureInterval`]). [`uom`] does not subtract
//! two absolute temperatures into an interval, so [`TemperatureDifference`]
//! provides that:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::degree_celsius};
//! use twine_hx_sizing::support::units::TemperatureDifference;
//!
//! let hot_out = ThermodynamicTemperature::new::<degree_celsius>(50.0);
//! let cold_in = ThermodynamicTemperature::new::<degree_celsius>(30.0);
//! let delta_t = hot_out.minus(cold_in);
//! assert!((delta_t.get::<delta_kelvin>() - 20.0).abs() < 1e-9);
//! ```
//!
//! [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
//! [`TemperatureInterval`]: uom::si::f64::TemperatureInterval

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
