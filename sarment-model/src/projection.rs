//! Multi-year cash-flow projection with a capacity ramp-up.
//!
//! A [`Projection`] spreads the single-year waterfall over a calendar
//! horizon: the construction year carries the upfront capital outflow,
//! and each operating year re-runs the waterfall at that year's
//! utilization from a [`CapacityRamp`]. Revenue and operating cost scale
//! with the produced volume; depreciation and debt service are charged in
//! full regardless of throughput.

mod ramp;

use serde::{Deserialize, Serialize};

use crate::{Production, ScenarioError, ScenarioInput, Waterfall};

pub use ramp::CapacityRamp;

/// One row of a multi-year projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionYear {
    /// Years since the start of construction.
    pub year_index: u32,
    /// Utilization factor applied to nameplate capacity this year.
    pub utilization: f64,
    pub revenue_euro: f64,
    /// This year's cash flow: `-capital` in the construction year, the
    /// waterfall's annual cash flow afterwards.
    pub cash_flow_euro: f64,
    /// Running total of all cash flows up to and including this year.
    pub cumulative_cash_flow_euro: f64,
}

/// A year-by-year cash-flow projection for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    years: Vec<ProjectionYear>,
}

impl Projection {
    /// Builds the projection for `input` over its analysis horizon.
    ///
    /// The result has `analysis_horizon_years + 1` rows: the construction
    /// year (index 0) plus one row per analysis year. The cumulative
    /// column satisfies `cumulative[0] == -capital` and
    /// `cumulative[i] == cumulative[i-1] + cash_flow[i]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario fails validation.
    pub fn build(input: &ScenarioInput, ramp: &CapacityRamp) -> Result<Self, ScenarioError> {
        input.validate()?;

        let mut years = Vec::with_capacity(input.analysis_horizon_years as usize + 1);
        let mut cumulative = -input.capital_investment_euro;

        years.push(ProjectionYear {
            year_index: 0,
            utilization: 0.0,
            revenue_euro: 0.0,
            cash_flow_euro: -input.capital_investment_euro,
            cumulative_cash_flow_euro: cumulative,
        });

        for year_index in 1..=input.analysis_horizon_years {
            let utilization = ramp.utilization(year_index);
            let production = Production::at_utilization(input, utilization);
            let waterfall = Waterfall::new(&production, input);

            cumulative += waterfall.annual_cash_flow_euro;
            years.push(ProjectionYear {
                year_index,
                utilization,
                revenue_euro: production.annual_revenue_euro,
                cash_flow_euro: waterfall.annual_cash_flow_euro,
                cumulative_cash_flow_euro: cumulative,
            });
        }

        Ok(Self { years })
    }

    /// Returns all rows, ordered by year index.
    #[must_use]
    pub fn years(&self) -> &[ProjectionYear] {
        &self.years
    }

    /// Payback period in years, by linear interpolation between the two
    /// rows where the cumulative cash flow crosses zero.
    ///
    /// Returns `None` when the cumulative total never turns positive
    /// within the horizon.
    #[must_use]
    pub fn payback_years(&self) -> Option<f64> {
        self.years.windows(2).find_map(|pair| {
            let (prev, next) = (pair[0], pair[1]);
            if prev.cumulative_cash_flow_euro < 0.0 && next.cumulative_cash_flow_euro >= 0.0 {
                let step = next.cumulative_cash_flow_euro - prev.cumulative_cash_flow_euro;
                let year_fraction = -prev.cumulative_cash_flow_euro / step;
                Some(f64::from(prev.year_index) + year_fraction)
            } else {
                None
            }
        })
    }

    /// Renders the projection as CSV, one row per year.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out =
            String::from("year,utilization,revenue_euro,cash_flow_euro,cumulative_cash_flow_euro\n");
        for row in &self.years {
            out.push_str(&format!(
                "{},{:.4},{:.2},{:.2},{:.2}\n",
                row.year_index,
                row.utilization,
                row.revenue_euro,
                row.cash_flow_euro,
                row.cumulative_cash_flow_euro,
            ));
        }
        out
    }
}
