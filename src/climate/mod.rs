//! Historical rainfall analysis.
//!
//! - `observation`: raw monthly rainfall records
//! - `analyzer`: multi-year series -> derived climate profile
//! - `profile`: the derived profile (averages, trend, variability, risk years)

pub mod analyzer;
pub mod observation;
pub mod profile;

pub use analyzer::analyze;
pub use observation::RainfallObservation;
pub use profile::{AnnualTotal, ClimateProfile, RainfallTrend};
