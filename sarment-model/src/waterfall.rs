use serde::{Deserialize, Serialize};

use crate::{Production, ScenarioInput};

/// The financing and tax waterfall from gross profit down to cash flow.
///
/// Standard accounting stages: EBITDA less depreciation gives EBIT, less
/// debt service gives EBT, less taxes gives net income. Depreciation is a
/// non-cash expense, so it is added back to obtain annual cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waterfall {
    /// Straight-line depreciation charge on the capital investment.
    pub annual_depreciation_euro: f64,
    pub ebit_euro: f64,
    /// Interest on the debt-financed share of capital.
    pub annual_debt_service_euro: f64,
    pub ebt_euro: f64,
    /// Taxes due. A loss year owes zero tax; there is no carryforward.
    pub taxes_euro: f64,
    pub net_income_euro: f64,
    /// Net income plus depreciation.
    pub annual_cash_flow_euro: f64,
}

impl Waterfall {
    /// Runs the waterfall for the given production and scenario.
    #[must_use]
    pub fn new(production: &Production, input: &ScenarioInput) -> Self {
        let annual_depreciation_euro = input.capital_investment_euro * input.depreciation_rate;
        let ebit_euro = production.gross_profit_euro - annual_depreciation_euro;

        let annual_debt_service_euro =
            input.capital_investment_euro * input.debt_ratio * input.debt_interest_rate;
        let ebt_euro = ebit_euro - annual_debt_service_euro;

        let taxes_euro = if ebt_euro > 0.0 {
            ebt_euro * input.corporate_tax_rate
        } else {
            0.0
        };
        let net_income_euro = ebt_euro - taxes_euro;

        Self {
            annual_depreciation_euro,
            ebit_euro,
            annual_debt_service_euro,
            ebt_euro,
            taxes_euro,
            net_income_euro,
            annual_cash_flow_euro: net_income_euro + annual_depreciation_euro,
        }
    }
}
