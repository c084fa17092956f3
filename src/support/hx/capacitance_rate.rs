use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::f64::ThermalConductance;

/// Heat-capacity flow rate (`m_dot` * `c_p`) of a stream, in kW/K by convention.
///
/// The value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CapacitanceRate(Constrained<ThermalConductance, StrictlyPositive>);

impl CapacitanceRate {
    /// Create a [`CapacitanceRate`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::thermal_conductance::Unit + uom::Conversion<f64, T = f64>,
    {
        let quantity = ThermalConductance::new::<U>(value);
        Self::from_quantity(quantity)
    }

    /// Create a [`CapacitanceRate`] from a quantity with thermal-conductance units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: ThermalConductance) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Returns this capacitance rate scaled by a dimensionless flow factor.
    ///
    /// A bypass leaves `1 - f` of the flow on the exchanger surface and an
    /// admixer carries `1 + f`, so the factor is always positive here.
    pub(crate) fn scaled(self, factor: f64) -> ThermalConductance {
        *self * factor
    }
}

impl Deref for CapacitanceRate {
    type Target = ThermalConductance;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
