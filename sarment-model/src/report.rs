use jiff::Timestamp;
use sarment_core::Model;
use serde::{Deserialize, Serialize};

use crate::{FinancialModel, Region, ScenarioError, ScenarioInput, ScenarioKind, ScenarioOutput};

/// A packaged scenario evaluation, ready for export.
///
/// Serializes to the payload shape the dashboards download as JSON:
/// `{region, scenario, inputs, outputs, timestamp}`. The timestamp records
/// when the report was generated; everything else is a pure function of
/// the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub region: Region,
    pub scenario: ScenarioKind,
    #[serde(rename = "inputs")]
    pub input: ScenarioInput,
    #[serde(rename = "outputs")]
    pub output: ScenarioOutput,
    #[serde(rename = "timestamp")]
    pub generated_at: Timestamp,
}

impl ScenarioReport {
    /// Evaluates `input` with `model` and packages the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario fails validation.
    pub fn new(
        model: &FinancialModel,
        region: Region,
        scenario: ScenarioKind,
        input: ScenarioInput,
        generated_at: Timestamp,
    ) -> Result<Self, ScenarioError> {
        let output = model.call(&input)?;
        Ok(Self {
            region,
            scenario,
            input,
            output,
            generated_at,
        })
    }

    /// Evaluates the built-in preset for a region and assumption level,
    /// stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario fails validation. Presets are
    /// always valid, so this only fails for a misconfigured model.
    pub fn generate(
        model: &FinancialModel,
        region: Region,
        scenario: ScenarioKind,
    ) -> Result<Self, ScenarioError> {
        let input = ScenarioInput::preset(region, scenario);
        Self::new(model, region, scenario, input, Timestamp::now())
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
