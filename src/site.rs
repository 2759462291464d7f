//! Site conditions supplied by external collaborators.
//!
//! The weather snapshot and local soil description arrive already fetched
//! upstream; the engine checks shape only. Missing optional fields mean
//! "unknown": the affected score component falls back to neutral half credit
//! instead of failing the whole score.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::profile::{DrainageClass, FertilityLevel};

/// Current and near-term weather at the location being scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Rainfall observed so far in the current month (mm).
    pub current_rainfall_mm: f64,

    /// Total rainfall forecast over the next 7 days (mm).
    pub forecast_7day_rainfall_mm: f64,

    /// Current air temperature (°C), if reported.
    pub temperature_c: Option<f64>,

    /// Relative humidity (%), if reported.
    pub humidity_pct: Option<f64>,

    /// Number of rainy days expected within the 7-day forecast (0-7).
    pub rainy_days_forecast: Option<u8>,

    /// When the snapshot was produced, for confidence aging.
    pub observed_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Rainfall already observed this month plus the 7-day forecast (mm).
    /// This is the horizon the planting-window rainfall requirement is
    /// checked against.
    pub fn near_term_rainfall_mm(&self) -> f64 {
        self.current_rainfall_mm + self.forecast_7day_rainfall_mm
    }

    /// Snapshot age in hours at `as_of`. Negative ages (clock skew between
    /// the provider and the caller) clamp to zero.
    pub fn age_hours(&self, as_of: DateTime<Utc>) -> f64 {
        let secs = (as_of - self.observed_at).num_seconds();
        secs.max(0) as f64 / 3600.0
    }
}

/// Soil description at the location being scored.
///
/// All fields are optional; a missing measurement scores the corresponding
/// soil axis at neutral half credit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalSoil {
    /// Topsoil pH (H2O).
    pub ph: Option<f64>,

    /// Fertility tier, typically derived from CEC or organic matter.
    pub fertility: Option<FertilityLevel>,

    /// Drainage class of the plot.
    pub drainage: Option<DrainageClass>,
}

impl LocalSoil {
    /// True when no soil measurement is available at all.
    pub fn is_unknown(&self) -> bool {
        self.ph.is_none() && self.fertility.is_none() && self.drainage.is_none()
    }
}
