use super::{Constraint, ConstraintError};

/// Marker type enforcing `value > 0`.
///
/// Used for quantities where zero would make downstream ratios meaningless,
/// such as a capital investment or a market price.
///
/// # Examples
///
/// ```
/// use sarment_core::constraint::{checked, StrictlyPositive};
///
/// assert!(checked::<StrictlyPositive>(95_000_000.0).is_ok());
/// assert!(checked::<StrictlyPositive>(0.0).is_err());
/// assert!(checked::<StrictlyPositive>(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl Constraint for StrictlyPositive {
    fn check(value: f64) -> Result<(), ConstraintError> {
        if !value.is_finite() {
            return Err(ConstraintError::NotFinite(value));
        }
        if value <= 0.0 {
            return Err(ConstraintError::NotPositive(value));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive() {
        assert!(StrictlyPositive::check(f64::MIN_POSITIVE).is_ok());
        assert!(StrictlyPositive::check(280.0).is_ok());
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(
            StrictlyPositive::check(0.0),
            Err(ConstraintError::NotPositive(0.0))
        );
        assert_eq!(
            StrictlyPositive::check(-5.0),
            Err(ConstraintError::NotPositive(-5.0))
        );
    }

    #[test]
    fn rejects_infinity() {
        assert!(matches!(
            StrictlyPositive::check(f64::INFINITY),
            Err(ConstraintError::NotFinite(_))
        ));
    }
}
