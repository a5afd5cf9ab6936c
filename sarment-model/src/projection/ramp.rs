use sarment_core::constraint::{ConstraintError, NonNegative, UnitInterval, checked};
use serde::{Deserialize, Serialize};

/// A plant's utilization schedule over the analysis horizon.
///
/// Year indices count from the start of construction. Construction years
/// produce nothing; the first operating year runs at
/// `initial_utilization`, and utilization then compounds by
/// `annual_growth` per year, capped at full nameplate capacity.
///
/// The default ramp is one construction year, 60 % initial utilization,
/// and 3 % annual growth.
///
/// # Examples
///
/// ```
/// use sarment_model::CapacityRamp;
///
/// let ramp = CapacityRamp::default();
/// assert_eq!(ramp.utilization(0), 0.0);
/// assert_eq!(ramp.utilization(1), 0.60);
/// assert_eq!(ramp.utilization(2), 0.60 * 1.03);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityRamp {
    /// Years with zero production at the start of the horizon.
    pub construction_years: u32,
    /// Utilization in the first operating year, in `[0, 1]`.
    pub initial_utilization: f64,
    /// Compound annual utilization growth, non-negative.
    pub annual_growth: f64,
}

impl Default for CapacityRamp {
    fn default() -> Self {
        Self {
            construction_years: 1,
            initial_utilization: 0.60,
            annual_growth: 0.03,
        }
    }
}

impl CapacityRamp {
    /// Creates a ramp with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_utilization` is outside `[0, 1]` or
    /// `annual_growth` is negative or non-finite.
    pub fn new(
        construction_years: u32,
        initial_utilization: f64,
        annual_growth: f64,
    ) -> Result<Self, ConstraintError> {
        Ok(Self {
            construction_years,
            initial_utilization: checked::<UnitInterval>(initial_utilization)?,
            annual_growth: checked::<NonNegative>(annual_growth)?,
        })
    }

    /// Returns the utilization factor for the given year index.
    ///
    /// Always within `[0, 1]`: compounding growth saturates at full
    /// capacity rather than overshooting it.
    #[must_use]
    pub fn utilization(&self, year_index: u32) -> f64 {
        if year_index < self.construction_years {
            return 0.0;
        }

        let operating_years = year_index - self.construction_years;
        (self.initial_utilization * (1.0 + self.annual_growth).powi(operating_years as i32)).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn construction_years_produce_nothing() {
        let ramp = CapacityRamp::new(2, 0.60, 0.03).unwrap();
        assert_eq!(ramp.utilization(0), 0.0);
        assert_eq!(ramp.utilization(1), 0.0);
        assert_eq!(ramp.utilization(2), 0.60);
    }

    #[test]
    fn growth_compounds_per_operating_year() {
        let ramp = CapacityRamp::default();
        assert_relative_eq!(ramp.utilization(4), 0.60 * 1.03_f64.powi(3));
    }

    #[test]
    fn utilization_saturates_at_full_capacity() {
        let ramp = CapacityRamp::new(1, 0.90, 0.50).unwrap();
        assert_eq!(ramp.utilization(5), 1.0);
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert!(CapacityRamp::new(1, 1.2, 0.03).is_err());
        assert!(CapacityRamp::new(1, 0.6, -0.01).is_err());
    }
}
