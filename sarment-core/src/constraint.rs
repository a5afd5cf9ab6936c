//! Type-level numeric range checks for model parameters.
//!
//! Financial scenario parameters have documented valid ranges: a tonnage is
//! non-negative, a price is strictly positive, a debt ratio lies in `[0, 1]`,
//! an efficiency in `[0, 100]`. This module expresses those ranges as marker
//! types so they can be enforced once, at construction or validation time,
//! instead of being re-checked ad hoc inside every formula.
//!
//! # Provided Constraints
//!
//! - [`NonNegative`]: zero or greater
//! - [`StrictlyPositive`]: greater than zero
//! - [`UnitInterval`]: within `[0, 1]`
//! - [`Percent`]: within `[0, 100]`
//!
//! Every marker rejects `NaN` and infinities; a scenario built from
//! constrained values can never propagate non-finite arithmetic silently.
//!
//! # Usage
//!
//! Use [`checked`] to validate a raw `f64` in place, or [`Constrained`] to
//! carry the guarantee in the type system:
//!
//! ```
//! use sarment_core::constraint::{checked, Constrained, UnitInterval};
//!
//! // Validate and keep the plain f64:
//! let debt_ratio = checked::<UnitInterval>(0.5)?;
//! assert_eq!(debt_ratio, 0.5);
//!
//! // Or carry the proof in the type:
//! let share = Constrained::<UnitInterval>::new(0.25)?;
//! assert_eq!(share.get(), 0.25);
//! # Ok::<(), sarment_core::constraint::ConstraintError>(())
//! ```

mod non_negative;
mod percent;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use percent::Percent;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::UnitInterval;

/// A numeric range check on an `f64` value.
///
/// Implement this trait for a zero-sized marker type to define a custom
/// range, then use it with [`checked`] or [`Constrained`].
pub trait Constraint {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: f64) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    /// The value is `NaN` or infinite.
    #[error("value is not finite: {0}")]
    NotFinite(f64),

    /// The value is negative where zero or greater is required.
    #[error("value {0} is negative")]
    Negative(f64),

    /// The value is zero or negative where strictly positive is required.
    #[error("value {0} is not strictly positive")]
    NotPositive(f64),

    /// The value lies outside `[0, 1]`.
    #[error("value {0} is outside the interval [0, 1]")]
    OutsideUnitInterval(f64),

    /// The value lies outside `[0, 100]`.
    #[error("value {0} is outside the percent range [0, 100]")]
    OutsidePercentRange(f64),
}

/// Validates a raw `f64` against the constraint `C` and returns it unchanged.
///
/// This is the lightweight alternative to [`Constrained`] for code that
/// stores plain scalars but still wants construction-time range checks.
///
/// # Errors
///
/// Returns a [`ConstraintError`] if the value violates `C`.
pub fn checked<C: Constraint>(value: f64) -> Result<f64, ConstraintError> {
    C::check(value)?;
    Ok(value)
}

/// An `f64` wrapper that proves its value satisfies the constraint `C`.
///
/// The check runs once, in [`new`](Constrained::new); afterwards the wrapper
/// is a zero-cost `f64`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<C: Constraint> {
    value: f64,
    _marker: PhantomData<C>,
}

impl<C: Constraint> Constrained<C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value violates `C`.
    pub fn new(value: f64) -> Result<Self, ConstraintError> {
        C::check(value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Returns the inner `f64`.
    #[must_use]
    pub fn get(self) -> f64 {
        self.value
    }
}

impl<C: Constraint> From<Constrained<C>> for f64 {
    fn from(constrained: Constrained<C>) -> Self {
        constrained.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_passes_values_through() {
        assert_eq!(checked::<NonNegative>(12.5), Ok(12.5));
        assert_eq!(checked::<UnitInterval>(1.0), Ok(1.0));
    }

    #[test]
    fn checked_reports_the_violation() {
        assert_eq!(
            checked::<NonNegative>(-3.0),
            Err(ConstraintError::Negative(-3.0))
        );
        assert_eq!(
            checked::<StrictlyPositive>(0.0),
            Err(ConstraintError::NotPositive(0.0))
        );
    }

    #[test]
    fn constrained_wrapper_round_trips() {
        let price = Constrained::<StrictlyPositive>::new(1.60).unwrap();
        assert_eq!(price.get(), 1.60);

        let as_f64: f64 = price.into();
        assert_eq!(as_f64, 1.60);
    }

    #[test]
    fn non_finite_is_always_rejected() {
        assert!(matches!(
            checked::<NonNegative>(f64::NAN),
            Err(ConstraintError::NotFinite(_))
        ));
        assert!(matches!(
            checked::<UnitInterval>(f64::INFINITY),
            Err(ConstraintError::NotFinite(_))
        ));
        assert!(matches!(
            checked::<Percent>(f64::NEG_INFINITY),
            Err(ConstraintError::NotFinite(_))
        ));
    }
}
