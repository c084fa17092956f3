use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Flow rates, film coefficients, heat loads and areas all carry this
/// constraint, since a zero or negative value makes the exchanger equations
/// divide by zero or change meaning.
///
/// # Examples
///
/// ```
/// use twine_hx_sizing::support::constraint::{Constrained, StrictlyPositive};
///
/// let x = Constrained::<_, StrictlyPositive>::new(1).unwrap();
/// assert_eq!(x.into_inner(), 1);
///
/// let y = StrictlyPositive::new(3.14).unwrap();
/// assert_eq!(y.into_inner(), 3.14);
///
/// assert!(StrictlyPositive::new(0).is_err());
/// assert!(StrictlyPositive::new(-1).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        area::square_meter,
        f64::{Area, HeatTransfer, Power},
        heat_transfer::watt_per_square_meter_kelvin,
        power::kilowatt,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert!(StrictlyPositive::new(0.1).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn exchanger_quantities() {
        assert!(StrictlyPositive::new(Area::new::<square_meter>(350.0)).is_ok());
        assert!(StrictlyPositive::new(Area::new::<square_meter>(0.0)).is_err());

        assert!(StrictlyPositive::new(Power::new::<kilowatt>(7500.0)).is_ok());
        assert!(StrictlyPositive::new(Power::new::<kilowatt>(-1.0)).is_err());

        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0);
        assert_eq!(StrictlyPositive::new(h), Err(ConstraintError::Zero));
    }
}
