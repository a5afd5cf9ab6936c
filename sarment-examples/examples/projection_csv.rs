//! Prints the multi-year ramp-up projection as CSV for each region's
//! realistic scenario, followed by the interpolated payback period.

use sarment_model::{CapacityRamp, Projection, Region, ScenarioError, ScenarioInput, ScenarioKind};

fn main() -> Result<(), ScenarioError> {
    for region in [Region::LanguedocRoussillon, Region::Champagne] {
        let input = ScenarioInput::preset(region, ScenarioKind::Realistic);
        let projection = Projection::build(&input, &CapacityRamp::default())?;

        println!("# {region}");
        print!("{}", projection.to_csv());
        match projection.payback_years() {
            Some(payback) => println!("# payback: {payback:.2} years"),
            None => println!("# no payback within the horizon"),
        }
        println!();
    }

    Ok(())
}
