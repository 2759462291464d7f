//! Climate trend alignment factor.

use crate::catalog::profile::WaterAffinity;
use crate::climate::profile::{ClimateProfile, RainfallTrend};
use crate::scoring::components::TREND_CAP;

/// Score the multi-year rainfall trend against the crop's water affinity
/// (0 or 5).
///
/// A drying location favors drought-tolerant crops; a wetting location
/// favors water-loving crops. A stable trend is neutral, not penalized,
/// and a missing climate profile degrades the factor to 0 without error.
pub fn climate_trend_alignment(affinity: WaterAffinity, climate: Option<&ClimateProfile>) -> f64 {
    match climate.map(|profile| profile.trend) {
        Some(RainfallTrend::Decreasing) if affinity == WaterAffinity::DroughtTolerant => TREND_CAP,
        Some(RainfallTrend::Increasing) if affinity == WaterAffinity::WaterLoving => TREND_CAP,
        _ => 0.0,
    }
}
