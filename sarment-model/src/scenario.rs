use sarment_core::constraint::{
    ConstraintError, NonNegative, Percent, StrictlyPositive, UnitInterval, checked,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Liters of SAF produced per tonne of winery biomass by the ATJ pathway,
/// before applying process efficiency.
///
/// This is the domain default; scenarios may override it for other
/// conversion technologies.
pub const DEFAULT_CONVERSION_RATE_LITERS_PER_TONNE: f64 = 280.0;

/// The parameters of a production scenario.
///
/// All monetary values are in euros, volumes in liters, masses in tonnes,
/// and rates in annual fractions unless the field name says otherwise.
/// Instances are plain data: construct one with a struct literal or a
/// [preset](ScenarioInput::preset), never mutate it in place. Each
/// parameter change should produce a fresh input and a fresh evaluation.
///
/// Every field has a documented valid range, checked by [`validate`].
///
/// [`validate`]: ScenarioInput::validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Feedstock tonnage per year. Must be non-negative.
    pub biomass_volume_tonnes: f64,
    /// Conversion yield in liters per tonne. Must be strictly positive;
    /// see [`DEFAULT_CONVERSION_RATE_LITERS_PER_TONNE`].
    pub conversion_rate_liters_per_tonne: f64,
    /// Overall process efficiency, in `[0, 100]`.
    pub process_efficiency_percent: f64,
    /// Market price per liter of SAF. Must be strictly positive.
    pub unit_price_euro_per_liter: f64,
    /// Operating cost per liter produced. Must be non-negative.
    pub unit_operating_cost_euro_per_liter: f64,
    /// Upfront capital investment. Must be strictly positive.
    pub capital_investment_euro: f64,
    /// Fraction of capital financed by debt, in `[0, 1]`.
    pub debt_ratio: f64,
    /// Annual interest rate on debt, in `[0, 1]`.
    pub debt_interest_rate: f64,
    /// Corporate tax rate, in `[0, 1]`.
    pub corporate_tax_rate: f64,
    /// Discount rate (WACC) used for NPV, in `[0, 1]`.
    pub discount_rate_wacc: f64,
    /// Annual straight-line depreciation fraction, in `[0, 1]`.
    pub depreciation_rate: f64,
    /// Analysis horizon in years. Must be at least one.
    pub analysis_horizon_years: u32,
    /// Fraction of capital recovered as terminal value at the end of the
    /// horizon, in `[0, 1]`.
    pub terminal_value_fraction: f64,
}

impl ScenarioInput {
    /// Checks every parameter against its documented range.
    ///
    /// The first violation is reported with the offending field's name.
    /// [`FinancialModel`](crate::FinancialModel) calls this before
    /// computing, so an invalid scenario is signaled as an error instead of
    /// silently propagating `NaN` or `Infinity` through the arithmetic.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Field`] for an out-of-range parameter, or
    /// [`ScenarioError::EmptyHorizon`] if the horizon is zero.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        field::<NonNegative>("biomass_volume_tonnes", self.biomass_volume_tonnes)?;
        field::<StrictlyPositive>(
            "conversion_rate_liters_per_tonne",
            self.conversion_rate_liters_per_tonne,
        )?;
        field::<Percent>("process_efficiency_percent", self.process_efficiency_percent)?;
        field::<StrictlyPositive>("unit_price_euro_per_liter", self.unit_price_euro_per_liter)?;
        field::<NonNegative>(
            "unit_operating_cost_euro_per_liter",
            self.unit_operating_cost_euro_per_liter,
        )?;
        field::<StrictlyPositive>("capital_investment_euro", self.capital_investment_euro)?;
        field::<UnitInterval>("debt_ratio", self.debt_ratio)?;
        field::<UnitInterval>("debt_interest_rate", self.debt_interest_rate)?;
        field::<UnitInterval>("corporate_tax_rate", self.corporate_tax_rate)?;
        field::<UnitInterval>("discount_rate_wacc", self.discount_rate_wacc)?;
        field::<UnitInterval>("depreciation_rate", self.depreciation_rate)?;
        field::<UnitInterval>("terminal_value_fraction", self.terminal_value_fraction)?;

        if self.analysis_horizon_years == 0 {
            return Err(ScenarioError::EmptyHorizon);
        }

        Ok(())
    }
}

fn field<C: sarment_core::constraint::Constraint>(
    name: &'static str,
    value: f64,
) -> Result<(), ScenarioError> {
    checked::<C>(value)
        .map(drop)
        .map_err(|source| ScenarioError::Field {
            field: name,
            source,
        })
}

/// The derived outputs of a scenario evaluation.
///
/// A pure function of [`ScenarioInput`]: identical inputs always produce
/// identical outputs. All monetary values are annual and in euros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutput {
    pub saf_production_liters: f64,
    pub annual_revenue_euro: f64,
    pub annual_operating_cost_euro: f64,
    /// Gross operating profit (EBITDA).
    pub gross_profit_euro: f64,
    pub annual_depreciation_euro: f64,
    pub ebit_euro: f64,
    pub annual_debt_service_euro: f64,
    pub ebt_euro: f64,
    /// Taxes due. Never negative; losses carry no credit.
    pub taxes_euro: f64,
    pub net_income_euro: f64,
    /// Net income with depreciation added back.
    pub annual_cash_flow_euro: f64,
    pub annual_roi_percent: f64,
    /// Simple payback in years, or [`NO_PAYBACK_YEARS`](crate::NO_PAYBACK_YEARS)
    /// when the scenario never pays back.
    pub payback_period_years: f64,
    pub npv_euro: f64,
    /// IRR in percent, capped at [`IRR_CAP_PERCENT`](crate::IRR_CAP_PERCENT).
    pub irr_percent: f64,
}

/// Errors produced when evaluating a scenario.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    /// A parameter is outside its documented valid range.
    #[error("{field} is out of range: {source}")]
    Field {
        field: &'static str,
        source: ConstraintError,
    },

    /// The analysis horizon does not cover a single year.
    #[error("analysis horizon must cover at least one year")]
    EmptyHorizon,

    /// The IRR solver rejected its configuration.
    #[error(transparent)]
    Irr(#[from] crate::irr::Error),
}
