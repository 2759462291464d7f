//! Individual score factor implementations.
//!
//! Each factor lives in its own module and is a pure function of its inputs.

pub mod rainfall;
pub mod soil;
pub mod temperature;
pub mod timing;
pub mod trend;
pub mod variety;

pub use rainfall::{rainfall_match, seasonal_rainfall_estimate};
pub use soil::soil_suitability;
pub use temperature::temperature_match;
pub use timing::{seasonal_timing, TimingResult};
pub use trend::climate_trend_alignment;
pub use variety::{variability_resilience, variety_fit, VarietySelection};
