//! Historical rainfall analysis.
//!
//! Turns a multi-year series of monthly rainfall observations into a
//! [`ClimateProfile`]: monthly and annual aggregates, a trend classification,
//! a variability index, and drought/flood year sets. Deterministic, no
//! randomness, no I/O.

use std::collections::{BTreeMap, BTreeSet};

use crate::climate::observation::RainfallObservation;
use crate::climate::profile::{AnnualTotal, ClimateProfile, RainfallTrend};
use crate::error::AnalysisError;

/// A year below this fraction of the multi-year mean is a drought year.
const DROUGHT_FRACTION: f64 = 0.75;
/// A year above this fraction of the multi-year mean is a flood year.
const FLOOD_FRACTION: f64 = 1.5;
/// Average yearly change (percent) beyond which the trend is not stable.
const TREND_PCT_PER_YEAR: f64 = 2.0;
/// A month falling below this fraction of its cross-year average, within a
/// drought year, counts toward that month's drought rate.
const MONTH_DRY_FRACTION: f64 = 0.75;
/// Flood counterpart of `MONTH_DRY_FRACTION`.
const MONTH_WET_FRACTION: f64 = 1.5;

/// Analyze a rainfall series. Requires at least 2 distinct years of data.
///
/// Observations may arrive unordered and with missing months; records for
/// the same year and month accumulate. Records with out-of-range months are
/// dropped with a warning.
pub fn analyze(observations: &[RainfallObservation]) -> Result<ClimateProfile, AnalysisError> {
    // Accumulate per (year, month); BTreeMap keeps everything year-ordered.
    let mut by_year_month: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for obs in observations {
        if !(1..=12).contains(&obs.month) {
            tracing::warn!(year = obs.year, month = obs.month, "dropping observation with invalid month");
            continue;
        }
        *by_year_month.entry((obs.year, obs.month)).or_insert(0.0) += obs.rainfall_mm;
    }

    let mut yearly: BTreeMap<i32, f64> = BTreeMap::new();
    let mut monthly_values: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for (&(year, month), &mm) in &by_year_month {
        *yearly.entry(year).or_insert(0.0) += mm;
        monthly_values.entry(month).or_default().push(mm);
    }

    if yearly.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            distinct_years: yearly.len(),
        });
    }

    let monthly_averages: BTreeMap<u32, f64> = monthly_values
        .iter()
        .map(|(&month, values)| (month, mean(values)))
        .collect();

    let annual_totals: Vec<AnnualTotal> = yearly
        .iter()
        .map(|(&year, &total_mm)| AnnualTotal { year, total_mm })
        .collect();

    let totals: Vec<f64> = annual_totals.iter().map(|t| t.total_mm).collect();
    let annual_mean = mean(&totals);

    let trend = classify_trend(&annual_totals);

    let variability_index = if annual_mean > 0.0 {
        let cv = std_dev(&totals, annual_mean) / annual_mean * 100.0;
        (cv * 10.0).round() / 10.0
    } else {
        0.0
    };

    let mut drought_years = BTreeSet::new();
    let mut flood_years = BTreeSet::new();
    for t in &annual_totals {
        if t.total_mm < DROUGHT_FRACTION * annual_mean {
            drought_years.insert(t.year);
        } else if t.total_mm > FLOOD_FRACTION * annual_mean {
            flood_years.insert(t.year);
        }
    }

    let monthly_drought_rate =
        monthly_anomaly_rates(&by_year_month, &monthly_averages, &drought_years, |mm, avg| {
            mm < MONTH_DRY_FRACTION * avg
        });
    let monthly_flood_rate =
        monthly_anomaly_rates(&by_year_month, &monthly_averages, &flood_years, |mm, avg| {
            mm > MONTH_WET_FRACTION * avg
        });

    let years_analyzed = annual_totals.len();

    tracing::debug!(
        years = years_analyzed,
        trend = trend.display_text(),
        variability = variability_index,
        drought_years = drought_years.len(),
        flood_years = flood_years.len(),
        "rainfall series analyzed"
    );

    Ok(ClimateProfile {
        monthly_averages,
        annual_totals,
        trend,
        variability_index,
        drought_years,
        flood_years,
        years_analyzed,
        monthly_drought_rate,
        monthly_flood_rate,
    })
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation around a precomputed mean.
fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Classify the trend from first-half vs second-half means of the annual
/// totals. The total percentage change is divided by the year gap between
/// the half midpoints to get an average yearly rate; an odd middle year
/// belongs to neither half.
fn classify_trend(annual_totals: &[AnnualTotal]) -> RainfallTrend {
    let n = annual_totals.len();
    let half = n / 2;
    if half == 0 {
        return RainfallTrend::Stable;
    }

    let first = &annual_totals[..half];
    let second = &annual_totals[n - half..];

    let first_mean = mean(&first.iter().map(|t| t.total_mm).collect::<Vec<_>>());
    let second_mean = mean(&second.iter().map(|t| t.total_mm).collect::<Vec<_>>());
    if first_mean <= 0.0 {
        return RainfallTrend::Stable;
    }

    let first_mid = first.iter().map(|t| t.year as f64).sum::<f64>() / half as f64;
    let second_mid = second.iter().map(|t| t.year as f64).sum::<f64>() / half as f64;
    let year_gap = (second_mid - first_mid).max(1.0);

    let total_change_pct = (second_mean - first_mean) / first_mean * 100.0;
    let pct_per_year = total_change_pct / year_gap;

    if pct_per_year > TREND_PCT_PER_YEAR {
        RainfallTrend::Increasing
    } else if pct_per_year < -TREND_PCT_PER_YEAR {
        RainfallTrend::Decreasing
    } else {
        RainfallTrend::Stable
    }
}

/// For each observed month, the fraction of `flagged_years` (that observed
/// the month) where the month's rainfall was anomalous per `is_anomalous`.
fn monthly_anomaly_rates(
    by_year_month: &BTreeMap<(i32, u32), f64>,
    monthly_averages: &BTreeMap<u32, f64>,
    flagged_years: &BTreeSet<i32>,
    is_anomalous: impl Fn(f64, f64) -> bool,
) -> BTreeMap<u32, f64> {
    let mut rates = BTreeMap::new();
    if flagged_years.is_empty() {
        return rates;
    }

    for (&month, &avg) in monthly_averages {
        let mut observed = 0u32;
        let mut anomalous = 0u32;
        for &year in flagged_years {
            if let Some(&mm) = by_year_month.get(&(year, month)) {
                observed += 1;
                if is_anomalous(mm, avg) {
                    anomalous += 1;
                }
            }
        }
        if observed > 0 {
            rates.insert(month, anomalous as f64 / observed as f64);
        }
    }
    rates
}
