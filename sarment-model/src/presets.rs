use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_CONVERSION_RATE_LITERS_PER_TONNE, ScenarioInput};

/// A wine-producing region with its own feedstock base and cost structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    LanguedocRoussillon,
    Champagne,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LanguedocRoussillon => write!(f, "Languedoc-Roussillon"),
            Self::Champagne => write!(f, "Champagne"),
        }
    }
}

/// How aggressive the scenario's market and process assumptions are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioKind {
    Conservative,
    Realistic,
    Optimistic,
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conservative => write!(f, "conservative"),
            Self::Realistic => write!(f, "realistic"),
            Self::Optimistic => write!(f, "optimistic"),
        }
    }
}

impl ScenarioInput {
    /// Returns the built-in scenario for a region and assumption level.
    ///
    /// These are the datasets the dashboards ship with. Languedoc-Roussillon
    /// is the large-volume case (around 80 kt of pomace and marc per year
    /// against a 95 M€ plant); Champagne is the smaller, higher-price
    /// premium case. Every preset passes [`validate`](ScenarioInput::validate).
    #[must_use]
    pub fn preset(region: Region, kind: ScenarioKind) -> Self {
        let base = match region {
            Region::LanguedocRoussillon => Self::languedoc_realistic(),
            Region::Champagne => Self::champagne_realistic(),
        };

        match kind {
            ScenarioKind::Realistic => base,
            ScenarioKind::Conservative => match region {
                Region::LanguedocRoussillon => Self {
                    biomass_volume_tonnes: 60_000.0,
                    process_efficiency_percent: 65.0,
                    unit_price_euro_per_liter: 1.45,
                    unit_operating_cost_euro_per_liter: 0.85,
                    debt_ratio: 0.55,
                    debt_interest_rate: 0.05,
                    discount_rate_wacc: 0.09,
                    terminal_value_fraction: 0.4,
                    ..base
                },
                Region::Champagne => Self {
                    biomass_volume_tonnes: 16_000.0,
                    process_efficiency_percent: 64.0,
                    unit_price_euro_per_liter: 1.60,
                    unit_operating_cost_euro_per_liter: 0.92,
                    debt_ratio: 0.50,
                    debt_interest_rate: 0.05,
                    discount_rate_wacc: 0.09,
                    terminal_value_fraction: 0.4,
                    ..base
                },
            },
            ScenarioKind::Optimistic => match region {
                Region::LanguedocRoussillon => Self {
                    biomass_volume_tonnes: 95_000.0,
                    process_efficiency_percent: 78.0,
                    unit_price_euro_per_liter: 1.85,
                    unit_operating_cost_euro_per_liter: 0.68,
                    debt_ratio: 0.45,
                    debt_interest_rate: 0.04,
                    discount_rate_wacc: 0.07,
                    ..base
                },
                Region::Champagne => Self {
                    biomass_volume_tonnes: 27_000.0,
                    process_efficiency_percent: 75.0,
                    unit_price_euro_per_liter: 1.95,
                    unit_operating_cost_euro_per_liter: 0.74,
                    debt_ratio: 0.40,
                    debt_interest_rate: 0.04,
                    discount_rate_wacc: 0.07,
                    ..base
                },
            },
        }
    }

    /// The Languedoc-Roussillon baseline dataset.
    fn languedoc_realistic() -> Self {
        Self {
            biomass_volume_tonnes: 80_000.0,
            conversion_rate_liters_per_tonne: DEFAULT_CONVERSION_RATE_LITERS_PER_TONNE,
            process_efficiency_percent: 72.0,
            unit_price_euro_per_liter: 1.60,
            unit_operating_cost_euro_per_liter: 0.75,
            capital_investment_euro: 95_000_000.0,
            debt_ratio: 0.50,
            debt_interest_rate: 0.045,
            corporate_tax_rate: 0.25,
            discount_rate_wacc: 0.08,
            depreciation_rate: 0.05,
            analysis_horizon_years: 15,
            terminal_value_fraction: 0.5,
        }
    }

    /// The Champagne baseline dataset: less feedstock, premium pricing.
    fn champagne_realistic() -> Self {
        Self {
            biomass_volume_tonnes: 22_000.0,
            conversion_rate_liters_per_tonne: DEFAULT_CONVERSION_RATE_LITERS_PER_TONNE,
            process_efficiency_percent: 70.0,
            unit_price_euro_per_liter: 1.75,
            unit_operating_cost_euro_per_liter: 0.82,
            capital_investment_euro: 38_000_000.0,
            debt_ratio: 0.45,
            debt_interest_rate: 0.045,
            corporate_tax_rate: 0.25,
            discount_rate_wacc: 0.08,
            depreciation_rate: 0.05,
            analysis_horizon_years: 15,
            terminal_value_fraction: 0.5,
        }
    }
}
