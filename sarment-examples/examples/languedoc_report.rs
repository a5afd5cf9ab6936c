//! Prints the JSON export for the Languedoc-Roussillon realistic scenario.

use sarment_model::{FinancialModel, Region, ScenarioKind, ScenarioReport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model = FinancialModel::default();
    let report =
        ScenarioReport::generate(&model, Region::LanguedocRoussillon, ScenarioKind::Realistic)?;

    println!("{}", report.to_json_pretty()?);
    Ok(())
}
