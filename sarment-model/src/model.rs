use sarment_core::Model;

use crate::{
    Production, ScenarioError, ScenarioInput, ScenarioOutput, Waterfall, irr, net_present_value,
};

/// Payback period reported when a scenario never pays back.
///
/// The presentation layer treats this sentinel as "beyond any horizon";
/// it is a documented magic value, not infinity and not an error.
pub const NO_PAYBACK_YEARS: f64 = 99.0;

/// Hard upper bound on the reported IRR, in percent.
pub const IRR_CAP_PERCENT: f64 = 50.0;

/// Fraction of the capital investment valued as terminal recovery inside
/// the IRR approximation.
///
/// Deliberately independent of [`ScenarioInput::terminal_value_fraction`],
/// which only the NPV step honors. The two steps of the product's model
/// disagree on this assumption; keeping both values named makes the
/// asymmetry visible and testable.
pub const IRR_TERMINAL_VALUE_FRACTION: f64 = 0.3;

/// The financial model: a deterministic map from [`ScenarioInput`] to
/// [`ScenarioOutput`].
///
/// Evaluation validates the input, then runs production and revenue, the
/// financing and tax waterfall, and the return metrics (ROI, payback, NPV,
/// IRR). Aside from input validation there are no failure modes: division
/// guards and sentinels are explicit policy, documented on the relevant
/// constants and functions.
///
/// # Example
///
/// ```
/// use sarment_core::Model;
/// use sarment_model::{FinancialModel, Region, ScenarioInput, ScenarioKind};
///
/// let input = ScenarioInput::preset(Region::LanguedocRoussillon, ScenarioKind::Realistic);
/// let output = FinancialModel::default().call(&input)?;
/// assert!(output.irr_percent <= sarment_model::IRR_CAP_PERCENT);
/// # Ok::<(), sarment_model::ScenarioError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FinancialModel {
    /// Settings for the Newton–Raphson IRR solver.
    pub irr_config: irr::Config,
}

impl Model for FinancialModel {
    type Input = ScenarioInput;
    type Output = ScenarioOutput;
    type Error = ScenarioError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        input.validate()?;

        let production = Production::from_scenario(input);
        let waterfall = Waterfall::new(&production, input);

        let annual_roi_percent =
            (waterfall.annual_cash_flow_euro / input.capital_investment_euro) * 100.0;

        let payback_period_years = if waterfall.annual_cash_flow_euro > 0.0 {
            input.capital_investment_euro / waterfall.annual_cash_flow_euro
        } else {
            NO_PAYBACK_YEARS
        };

        let npv_euro = net_present_value(
            input.capital_investment_euro,
            waterfall.annual_cash_flow_euro,
            input.discount_rate_wacc,
            input.analysis_horizon_years,
            input.capital_investment_euro * input.terminal_value_fraction,
        );

        let irr_percent = self.irr_percent(input, waterfall.annual_cash_flow_euro)?;

        Ok(ScenarioOutput {
            saf_production_liters: production.saf_production_liters,
            annual_revenue_euro: production.annual_revenue_euro,
            annual_operating_cost_euro: production.annual_operating_cost_euro,
            gross_profit_euro: production.gross_profit_euro,
            annual_depreciation_euro: waterfall.annual_depreciation_euro,
            ebit_euro: waterfall.ebit_euro,
            annual_debt_service_euro: waterfall.annual_debt_service_euro,
            ebt_euro: waterfall.ebt_euro,
            taxes_euro: waterfall.taxes_euro,
            net_income_euro: waterfall.net_income_euro,
            annual_cash_flow_euro: waterfall.annual_cash_flow_euro,
            annual_roi_percent,
            payback_period_years,
            npv_euro,
            irr_percent,
        })
    }
}

impl FinancialModel {
    /// The IRR step, in percent, with its policy guards.
    ///
    /// A scenario with non-positive cash flow, or whose simple payback
    /// exceeds the analysis horizon, earns a flat 0. Otherwise the
    /// Newton–Raphson solution is converted to percent and capped at
    /// [`IRR_CAP_PERCENT`] whether or not the solver converged.
    fn irr_percent(
        &self,
        input: &ScenarioInput,
        annual_cash_flow_euro: f64,
    ) -> Result<f64, ScenarioError> {
        if annual_cash_flow_euro <= 0.0 {
            return Ok(0.0);
        }

        let simple_payback = input.capital_investment_euro / annual_cash_flow_euro;
        if simple_payback > f64::from(input.analysis_horizon_years) {
            return Ok(0.0);
        }

        let problem = irr::Problem {
            capital_investment_euro: input.capital_investment_euro,
            annual_cash_flow_euro,
            horizon_years: input.analysis_horizon_years,
            terminal_value_euro: input.capital_investment_euro * IRR_TERMINAL_VALUE_FRACTION,
        };
        let solution = irr::solve(&problem, &self.irr_config)?;

        Ok((solution.rate * 100.0).min(IRR_CAP_PERCENT))
    }
}
