use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::f64::Power;

/// Heat duty exchanged from the hot stream to the cold stream.
///
/// The same load appears in both streams' energy balance. The value must be
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HeatLoad(Constrained<Power, StrictlyPositive>);

impl HeatLoad {
    /// Create a [`HeatLoad`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::power::Unit + uom::Conversion<f64, T = f64>,
    {
        Self::from_quantity(Power::new::<U>(value))
    }

    /// Create a [`HeatLoad`] from a power quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: Power) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }
}

impl Deref for HeatLoad {
    type Target = Power;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
