//! Shared fixtures for the integration test suite.

use sarment_model::{Region, ScenarioInput, ScenarioKind};

/// Every built-in region.
pub const REGIONS: [Region; 2] = [Region::LanguedocRoussillon, Region::Champagne];

/// Every built-in assumption level.
pub const KINDS: [ScenarioKind; 3] = [
    ScenarioKind::Conservative,
    ScenarioKind::Realistic,
    ScenarioKind::Optimistic,
];

/// The worked-example scenario used throughout the suite.
#[must_use]
pub fn languedoc_realistic() -> ScenarioInput {
    ScenarioInput::preset(Region::LanguedocRoussillon, ScenarioKind::Realistic)
}

/// All six built-in scenarios with their region and kind.
#[must_use]
pub fn all_presets() -> Vec<(Region, ScenarioKind, ScenarioInput)> {
    REGIONS
        .into_iter()
        .flat_map(|region| {
            KINDS
                .into_iter()
                .map(move |kind| (region, kind, ScenarioInput::preset(region, kind)))
        })
        .collect()
}
