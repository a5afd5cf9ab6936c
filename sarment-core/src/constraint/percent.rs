use super::{Constraint, ConstraintError};

/// Marker type enforcing `0 <= value <= 100`.
///
/// Used for values expressed as percentages, such as a process efficiency.
///
/// # Examples
///
/// ```
/// use sarment_core::constraint::{checked, Percent};
///
/// assert!(checked::<Percent>(72.0).is_ok());
/// assert!(checked::<Percent>(100.0).is_ok());
/// assert!(checked::<Percent>(101.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percent;

impl Constraint for Percent {
    fn check(value: f64) -> Result<(), ConstraintError> {
        if !value.is_finite() {
            return Err(ConstraintError::NotFinite(value));
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(ConstraintError::OutsidePercentRange(value));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_percent_range() {
        assert!(Percent::check(0.0).is_ok());
        assert!(Percent::check(72.0).is_ok());
        assert!(Percent::check(100.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Percent::check(-1.0),
            Err(ConstraintError::OutsidePercentRange(-1.0))
        );
        assert_eq!(
            Percent::check(100.5),
            Err(ConstraintError::OutsidePercentRange(100.5))
        );
    }
}
