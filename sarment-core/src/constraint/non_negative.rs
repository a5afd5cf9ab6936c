use super::{Constraint, ConstraintError};

/// Marker type enforcing `value >= 0`.
///
/// Used for quantities that may legitimately be zero, such as a feedstock
/// tonnage or a unit operating cost.
///
/// # Examples
///
/// ```
/// use sarment_core::constraint::{checked, NonNegative};
///
/// assert!(checked::<NonNegative>(0.0).is_ok());
/// assert!(checked::<NonNegative>(80_000.0).is_ok());
/// assert!(checked::<NonNegative>(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl Constraint for NonNegative {
    fn check(value: f64) -> Result<(), ConstraintError> {
        if !value.is_finite() {
            return Err(ConstraintError::NotFinite(value));
        }
        if value < 0.0 {
            return Err(ConstraintError::Negative(value));
        }
        Ok(())
    }
}
