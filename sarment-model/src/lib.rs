//! Techno-economic financial model for SAF production from winery biomass.
//!
//! The central entry point is [`FinancialModel`], a deterministic
//! [`Model`](sarment_core::Model) that maps a [`ScenarioInput`] to a
//! [`ScenarioOutput`]:
//!
//! 1. production and revenue from feedstock tonnage, conversion yield,
//!    and process efficiency ([`Production`]);
//! 2. the financing and tax waterfall down to annual cash flow
//!    ([`Waterfall`]);
//! 3. return metrics: ROI, payback period, net present value
//!    ([`net_present_value`]), and an internal rate of return approximated
//!    by Newton–Raphson ([`irr`]).
//!
//! Beyond the single-year scenario, [`projection`] spreads the same
//! waterfall over a multi-year horizon with a capacity ramp-up schedule,
//! and [`ScenarioReport`] packages a full evaluation for JSON export.
//!
//! # Example
//!
//! ```
//! use sarment_core::Model;
//! use sarment_model::{FinancialModel, Region, ScenarioInput, ScenarioKind};
//!
//! let input = ScenarioInput::preset(Region::LanguedocRoussillon, ScenarioKind::Realistic);
//! let output = FinancialModel::default().call(&input)?;
//!
//! assert_eq!(output.saf_production_liters, 16_128_000.0);
//! # Ok::<(), sarment_model::ScenarioError>(())
//! ```

pub mod irr;
pub mod projection;

mod model;
mod npv;
mod presets;
mod production;
mod report;
mod scenario;
mod waterfall;

pub use model::{FinancialModel, IRR_CAP_PERCENT, IRR_TERMINAL_VALUE_FRACTION, NO_PAYBACK_YEARS};
pub use npv::net_present_value;
pub use presets::{Region, ScenarioKind};
pub use production::Production;
pub use projection::{CapacityRamp, Projection, ProjectionYear};
pub use report::ScenarioReport;
pub use scenario::{
    DEFAULT_CONVERSION_RATE_LITERS_PER_TONNE, ScenarioError, ScenarioInput, ScenarioOutput,
};
pub use waterfall::Waterfall;
