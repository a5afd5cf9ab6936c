//! Evaluates every region and assumption level and prints a summary line
//! for each: ROI, payback, NPV, and IRR.

use sarment_core::Model;
use sarment_model::{FinancialModel, Region, ScenarioError, ScenarioInput, ScenarioKind};

fn main() -> Result<(), ScenarioError> {
    let model = FinancialModel::default();

    for region in [Region::LanguedocRoussillon, Region::Champagne] {
        println!("{region}");

        for kind in [
            ScenarioKind::Conservative,
            ScenarioKind::Realistic,
            ScenarioKind::Optimistic,
        ] {
            let output = model.call(&ScenarioInput::preset(region, kind))?;
            println!(
                "  {kind:<13} ROI {:>5.1} %   payback {:>5.1} yr   NPV {:>13.0} EUR   IRR {:>4.1} %",
                output.annual_roi_percent,
                output.payback_period_years,
                output.npv_euro,
                output.irr_percent,
            );
        }
        println!();
    }

    Ok(())
}
