use super::{Constraint, ConstraintError};

/// Marker type enforcing `0 <= value <= 1`.
///
/// Used for shares and annual rates expressed as fractions: debt ratio,
/// interest rate, tax rate, discount rate, depreciation rate, and the
/// terminal value fraction.
///
/// # Examples
///
/// ```
/// use sarment_core::constraint::{checked, UnitInterval};
///
/// assert!(checked::<UnitInterval>(0.0).is_ok());
/// assert!(checked::<UnitInterval>(0.5).is_ok());
/// assert!(checked::<UnitInterval>(1.0).is_ok());
/// assert!(checked::<UnitInterval>(1.01).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl Constraint for UnitInterval {
    fn check(value: f64) -> Result<(), ConstraintError> {
        if !value.is_finite() {
            return Err(ConstraintError::NotFinite(value));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ConstraintError::OutsideUnitInterval(value));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_endpoints_and_interior() {
        assert!(UnitInterval::check(0.0).is_ok());
        assert!(UnitInterval::check(0.045).is_ok());
        assert!(UnitInterval::check(1.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            UnitInterval::check(-0.1),
            Err(ConstraintError::OutsideUnitInterval(-0.1))
        );
        assert_eq!(
            UnitInterval::check(1.5),
            Err(ConstraintError::OutsideUnitInterval(1.5))
        );
    }

    #[test]
    fn rejects_nan() {
        assert!(matches!(
            UnitInterval::check(f64::NAN),
            Err(ConstraintError::NotFinite(_))
        ));
    }
}
