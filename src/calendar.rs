//! Month-by-month planting calendar.
//!
//! Derives a fixed January-December view of how suitable each month is for
//! planting a crop at a location, annotated with historical drought/flood
//! risk for the same month of year. Purely derived from the climate profile;
//! stateless.

use serde::Serialize;

use crate::catalog::profile::{CropProfile, PlantingWindow};
use crate::climate::profile::ClimateProfile;
use crate::months::month_name;

/// Discount for months adjacent to a planting window.
const ADJACENT_FACTOR: f64 = 0.5;
/// Discount for months far from any window.
const OFF_SEASON_FACTOR: f64 = 0.2;
/// Neutral rainfall ratio for months with no historical observations.
const UNOBSERVED_RATIO: f64 = 0.5;
/// Monthly drought/flood rate at which a month earns a risk tag.
const RISK_RATE_THRESHOLD: f64 = 0.5;

/// Historical risk annotation for a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthRisk {
    None,
    DroughtRisk,
    FloodRisk,
}

/// Suitability of one calendar month for planting a crop.
#[derive(Debug, Clone, Serialize)]
pub struct MonthSuitability {
    /// Calendar month, 1-12.
    pub month: u32,
    pub name: &'static str,

    /// 0-100: how well the month's historical average rainfall meets the
    /// planting-window requirement, discounted outside the windows.
    pub suitability: f64,

    pub risk: MonthRisk,
}

/// Build the 12-month planting calendar for a crop. Always returns exactly
/// twelve entries in January-December order, regardless of the current date.
pub fn generate(crop: &CropProfile, climate: &ClimateProfile) -> Vec<MonthSuitability> {
    (1..=12u32)
        .map(|month| MonthSuitability {
            month,
            name: month_name(month),
            suitability: month_score(month, crop, climate),
            risk: month_risk(month, climate),
        })
        .collect()
}

fn month_score(month: u32, crop: &CropProfile, climate: &ClimateProfile) -> f64 {
    let windows = &crop.planting_calendar;
    if windows.is_empty() {
        return 0.0;
    }

    // Position factor and the window whose requirement the month is judged
    // against: containing window first, then an adjacent one, then the
    // least demanding window as an off-season reference.
    let (factor, window) = if let Some(w) = windows.iter().find(|w| w.contains(month)) {
        (1.0, w)
    } else if let Some(w) = windows.iter().find(|w| w.is_adjacent(month)) {
        (ADJACENT_FACTOR, w)
    } else {
        let reference = windows
            .iter()
            .min_by(|a, b| a.rainfall_needed_mm.total_cmp(&b.rainfall_needed_mm))
            .expect("non-empty window list");
        (OFF_SEASON_FACTOR, reference)
    };

    let ratio = rainfall_ratio(month, window, climate);
    (100.0 * factor * ratio).clamp(0.0, 100.0)
}

/// Month's historical average rainfall relative to the window's per-month
/// requirement, capped at 1. Months never observed score neutral.
fn rainfall_ratio(month: u32, window: &PlantingWindow, climate: &ClimateProfile) -> f64 {
    let need_per_month = window.rainfall_needed_mm / window.len_months() as f64;
    match climate.monthly_averages.get(&month) {
        None => UNOBSERVED_RATIO,
        Some(_) if need_per_month <= 0.0 => 1.0,
        Some(avg) => (avg / need_per_month).min(1.0),
    }
}

fn month_risk(month: u32, climate: &ClimateProfile) -> MonthRisk {
    let drought = climate.monthly_drought_rate.get(&month).copied().unwrap_or(0.0);
    let flood = climate.monthly_flood_rate.get(&month).copied().unwrap_or(0.0);

    if drought >= RISK_RATE_THRESHOLD && drought >= flood {
        MonthRisk::DroughtRisk
    } else if flood >= RISK_RATE_THRESHOLD {
        MonthRisk::FloodRisk
    } else {
        MonthRisk::None
    }
}
