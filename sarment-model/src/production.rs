use serde::{Deserialize, Serialize};

use crate::ScenarioInput;

/// Annual production and revenue at a given plant utilization.
///
/// This is the first stage of the model: volumes and money that depend
/// only on throughput, before financing and tax.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Production {
    /// SAF output in liters per year.
    pub saf_production_liters: f64,
    /// Revenue at the scenario's market price.
    pub annual_revenue_euro: f64,
    /// Operating cost, proportional to liters produced.
    pub annual_operating_cost_euro: f64,
    /// Revenue minus operating cost (EBITDA).
    pub gross_profit_euro: f64,
}

impl Production {
    /// Computes production at full nameplate utilization.
    ///
    /// Output volume is bilinear in feedstock tonnage and process
    /// efficiency: doubling either doubles the liters produced.
    #[must_use]
    pub fn from_scenario(input: &ScenarioInput) -> Self {
        Self::at_utilization(input, 1.0)
    }

    /// Computes production with throughput scaled by `utilization`.
    ///
    /// Used by the multi-year projection, where a plant ramps up from a
    /// fraction of nameplate capacity. Revenue and operating cost scale
    /// with the produced volume; fixed charges do not belong here.
    #[must_use]
    pub fn at_utilization(input: &ScenarioInput, utilization: f64) -> Self {
        let saf_production_liters = input.biomass_volume_tonnes
            * input.conversion_rate_liters_per_tonne
            * (input.process_efficiency_percent / 100.0)
            * utilization;

        let annual_revenue_euro = saf_production_liters * input.unit_price_euro_per_liter;
        let annual_operating_cost_euro =
            saf_production_liters * input.unit_operating_cost_euro_per_liter;

        Self {
            saf_production_liters,
            annual_revenue_euro,
            annual_operating_cost_euro,
            gross_profit_euro: annual_revenue_euro - annual_operating_cost_euro,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Region, ScenarioKind};

    fn languedoc() -> ScenarioInput {
        ScenarioInput::preset(Region::LanguedocRoussillon, ScenarioKind::Realistic)
    }

    #[test]
    fn worked_example_intermediates_are_exact() {
        let production = Production::from_scenario(&languedoc());

        assert_eq!(production.saf_production_liters, 16_128_000.0);
        assert_eq!(production.annual_revenue_euro, 25_804_800.0);
        assert_eq!(production.annual_operating_cost_euro, 12_096_000.0);
        assert_eq!(production.gross_profit_euro, 13_708_800.0);
    }

    #[test]
    fn production_is_bilinear_in_volume_and_efficiency() {
        let base = languedoc();
        let reference = Production::from_scenario(&base);

        let double_volume = ScenarioInput {
            biomass_volume_tonnes: base.biomass_volume_tonnes * 2.0,
            ..base.clone()
        };
        assert_eq!(
            Production::from_scenario(&double_volume).saf_production_liters,
            reference.saf_production_liters * 2.0
        );

        let half_efficiency = ScenarioInput {
            process_efficiency_percent: base.process_efficiency_percent / 2.0,
            ..base
        };
        assert_eq!(
            Production::from_scenario(&half_efficiency).saf_production_liters,
            reference.saf_production_liters / 2.0
        );
    }

    #[test]
    fn zero_biomass_produces_nothing() {
        let input = ScenarioInput {
            biomass_volume_tonnes: 0.0,
            ..languedoc()
        };
        let production = Production::from_scenario(&input);

        assert_eq!(production.saf_production_liters, 0.0);
        assert_eq!(production.annual_revenue_euro, 0.0);
        assert_eq!(production.gross_profit_euro, 0.0);
    }

    #[test]
    fn utilization_scales_volume_and_money() {
        use approx::assert_relative_eq;

        let input = languedoc();
        let full = Production::from_scenario(&input);
        let ramped = Production::at_utilization(&input, 0.6);

        assert_eq!(ramped.saf_production_liters, full.saf_production_liters * 0.6);
        assert_relative_eq!(ramped.annual_revenue_euro, full.annual_revenue_euro * 0.6);
        assert_relative_eq!(
            ramped.annual_operating_cost_euro,
            full.annual_operating_cost_euro * 0.6
        );
    }
}
