//! Example applications for Sarment.
//!
//! Run them with `cargo run --example <name>`:
//!
//! - `languedoc_report`: the JSON export for the Languedoc-Roussillon
//!   realistic scenario.
//! - `compare_scenarios`: one-line summaries across regions and
//!   assumption levels.
//! - `projection_csv`: the multi-year ramp-up projection as CSV.
