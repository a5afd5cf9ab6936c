//! Core modeling primitives for Sarment.
//!
//! This crate defines the two building blocks the rest of the workspace is
//! written against:
//!
//! - [`Model`], the trait for deterministic, side-effect-free computations
//!   that map an input to an output or a domain error.
//! - [`constraint`], type-level numeric range checks used to enforce valid
//!   parameter ranges (non-negative tonnages, unit-interval rates, percent
//!   efficiencies) at construction or validation time.

pub mod constraint;

mod model;

pub use model::{Model, Snapshot};
