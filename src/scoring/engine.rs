//! Crop scoring engine.
//!
//! Combines the factor modules into a ten-component score for one crop.
//! Deterministic, no I/O, no side effects; the market-demand and
//! input-availability tables are injected at construction so tests can run
//! against synthetic figures.

use chrono::{Datelike, NaiveDate};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::builtin;
use crate::catalog::profile::CropProfile;
use crate::climate::profile::ClimateProfile;
use crate::error::ScoreError;
use crate::scoring::components::{ScoreComponents, SuitabilityLevel, INPUT_CAP, MARKET_CAP};
use crate::scoring::factors::{
    climate_trend_alignment, rainfall_match, seasonal_rainfall_estimate, seasonal_timing,
    soil_suitability, temperature_match, variability_resilience, variety_fit,
};
use crate::scoring::reasons::generate_reasons;
use crate::site::{LocalSoil, WeatherSnapshot};

/// Lookup score assumed when a crop id is missing from an injected table.
const LOOKUP_DEFAULT: f64 = 2.5;

/// Season length assumed when no climate profile is available (days).
const DEFAULT_SEASON_DAYS: u32 = 120;

/// Bounds on the rainfall-estimate horizon (months).
const MIN_SEASON_MONTHS: u32 = 2;
const MAX_SEASON_MONTHS: u32 = 8;

/// One crop's scored result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCrop {
    pub crop_id: String,
    pub display_name: String,
    pub components: ScoreComponents,
    pub total_score: f64,
    pub suitability_level: SuitabilityLevel,

    /// Rationale sentences, ordered by contribution magnitude.
    pub reasons: Vec<String>,

    /// The single best-matching variety the score is based on.
    pub variety: String,

    /// Drought exposure used by the ranking tie-break: the location's
    /// drought-year frequency scaled by how little the chosen variety
    /// tolerates drought. Lower is safer.
    pub drought_risk: f64,
}

/// Multi-factor crop scorer with injected lookup tables.
#[derive(Debug, Clone)]
pub struct CropScoringEngine {
    market_demand: FxHashMap<String, f64>,
    input_availability: FxHashMap<String, f64>,
}

impl CropScoringEngine {
    pub fn new(
        market_demand: FxHashMap<String, f64>,
        input_availability: FxHashMap<String, f64>,
    ) -> Self {
        Self {
            market_demand,
            input_availability,
        }
    }

    /// Engine backed by the built-in lookup tables.
    pub fn with_default_tables() -> Self {
        Self::new(
            builtin::default_market_demand(),
            builtin::default_input_availability(),
        )
    }

    /// Score one crop for the given date and site conditions.
    ///
    /// A missing climate profile degrades the trend and resilience terms to
    /// zero; an invalid crop profile fails with a validation error naming
    /// the crop, never a silently clamped score.
    pub fn score(
        &self,
        crop: &CropProfile,
        weather: &WeatherSnapshot,
        soil: &LocalSoil,
        climate: Option<&ClimateProfile>,
        when: NaiveDate,
    ) -> Result<ScoredCrop, ScoreError> {
        crop.validate()?;

        let month = when.month();

        let season_days = climate
            .map(|profile| profile.wet_season_days_remaining(month))
            .unwrap_or(DEFAULT_SEASON_DAYS);

        let selection = variety_fit(&crop.varieties, weather.rainy_days_forecast, season_days);

        let season_months =
            ((selection.maturity_days + 29) / 30).clamp(MIN_SEASON_MONTHS, MAX_SEASON_MONTHS);
        let estimate_mm = seasonal_rainfall_estimate(weather, climate, month, season_months);

        let timing = seasonal_timing(month, &crop.planting_calendar, weather.near_term_rainfall_mm());

        let components = ScoreComponents {
            rainfall_match: rainfall_match(estimate_mm, &crop.water_requirements.seasonal_mm),
            temperature_match: temperature_match(weather.temperature_c, &crop.temperature_requirements),
            seasonal_timing: timing.points,
            variety_fit: selection.points,
            variability_resilience: variability_resilience(selection.tolerance, climate),
            soil_suitability: soil_suitability(&crop.soil_requirements, soil),
            market_demand: self.lookup(&self.market_demand, &crop.id, MARKET_CAP),
            input_availability: self.lookup(&self.input_availability, &crop.id, INPUT_CAP),
            climate_trend_alignment: climate_trend_alignment(crop.water_affinity(), climate),
            confidence_adjustment: 0.0,
        };

        let total_score = components.total();
        let drought_risk = climate.map(|profile| profile.drought_year_ratio()).unwrap_or(0.0)
            * (1.0 - selection.tolerance.weight());

        Ok(ScoredCrop {
            crop_id: crop.id.clone(),
            display_name: crop.display_name.clone(),
            total_score,
            suitability_level: SuitabilityLevel::from_total(total_score),
            reasons: generate_reasons(&components),
            variety: selection.variety_name,
            drought_risk,
            components,
        })
    }

    fn lookup(&self, table: &FxHashMap<String, f64>, crop_id: &str, cap: f64) -> f64 {
        table
            .get(crop_id)
            .copied()
            .unwrap_or(LOOKUP_DEFAULT)
            .clamp(0.0, cap)
    }
}

/// Deterministic ranking order: total score descending, then variety fit
/// descending, then drought risk ascending, then crop id lexical order.
pub fn ranking_order(a: &ScoredCrop, b: &ScoredCrop) -> std::cmp::Ordering {
    b.total_score
        .total_cmp(&a.total_score)
        .then_with(|| b.components.variety_fit.total_cmp(&a.components.variety_fit))
        .then_with(|| a.drought_risk.total_cmp(&b.drought_risk))
        .then_with(|| a.crop_id.cmp(&b.crop_id))
}
