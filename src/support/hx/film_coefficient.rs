use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::{f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin};

/// Film heat-transfer coefficient on one side of the exchanger surface.
///
/// The value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FilmCoefficient(Constrained<HeatTransfer, StrictlyPositive>);

impl FilmCoefficient {
    /// Create a [`FilmCoefficient`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::heat_transfer::Unit + uom::Conversion<f64, T = f64>,
    {
        Self::from_quantity(HeatTransfer::new::<U>(value))
    }

    /// Create a [`FilmCoefficient`] from a heat-transfer quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: HeatTransfer) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }
}

impl Deref for FilmCoefficient {
    type Target = HeatTransfer;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Overall heat-transfer coefficient of two film resistances in series.
///
/// `U = 1 / (1/h_hot + 1/h_cold)`. Wall resistance and fouling are not
/// modeled.
#[must_use]
pub fn overall_coefficient(hot: FilmCoefficient, cold: FilmCoefficient) -> HeatTransfer {
    let h_hot = hot.get::<watt_per_square_meter_kelvin>();
    let h_cold = cold.get::<watt_per_square_meter_kelvin>();
    HeatTransfer::new::<watt_per_square_meter_kelvin>(1. / (1. / h_hot + 1. / h_cold))
}
