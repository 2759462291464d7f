//! Recommendation pipeline.
//!
//! Ties the stages together: historical analysis, per-crop scoring,
//! confidence estimation, and planting calendars for the top-ranked crops.
//! Crops that fail validation are logged and excluded without aborting the
//! run; a thin historical series degrades to scoring without a climate
//! profile. Scoring every crop is embarrassingly parallel, so both a
//! sequential and a Rayon-backed entry point are provided.

use chrono::{DateTime, NaiveDate, Utc};
use rayon::prelude::*;
use serde::Serialize;

use crate::calendar::{self, MonthSuitability};
use crate::catalog::CropCatalog;
use crate::climate::analyze;
use crate::climate::observation::RainfallObservation;
use crate::climate::profile::ClimateProfile;
use crate::confidence::{estimate_confidence, ConfidenceEstimate};
use crate::scoring::components::ACTIVE_COMPONENTS;
use crate::scoring::engine::{ranking_order, CropScoringEngine, ScoredCrop};
use crate::site::{LocalSoil, WeatherSnapshot};

/// How many top-ranked crops get a planting calendar attached.
const CALENDAR_TOP_N: usize = 3;

/// Everything the pipeline needs for one recommendation run.
#[derive(Debug, Clone)]
pub struct RecommendationInputs<'a> {
    pub weather: &'a WeatherSnapshot,
    pub soil: &'a LocalSoil,
    pub observations: &'a [RainfallObservation],

    /// The date recommendations are being made for.
    pub when: NaiveDate,

    /// Wall-clock reference for weather-snapshot aging.
    pub as_of: DateTime<Utc>,

    /// Number of advisory sources behind the request (confidence provenance).
    pub source_count: u32,
}

/// One ranked crop with its confidence and optional calendar.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCrop {
    pub scored: ScoredCrop,
    pub confidence: ConfidenceEstimate,

    /// Attached for the top-ranked crops when a climate profile exists.
    pub calendar: Option<Vec<MonthSuitability>>,
}

/// Final output of a recommendation run. Never null: an unscorable run
/// yields an empty ranking plus a diagnostic string.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Crops in ranking order (best first).
    pub ranked: Vec<RankedCrop>,

    /// The derived climate profile, absent when the series was too thin.
    pub climate: Option<ClimateProfile>,

    /// Why the ranking is empty, when it is.
    pub diagnostic: Option<String>,
}

/// Run the full pipeline sequentially.
pub fn recommend(
    engine: &CropScoringEngine,
    catalog: &CropCatalog,
    inputs: &RecommendationInputs,
) -> Recommendation {
    run(engine, catalog, inputs, false)
}

/// Run the full pipeline with per-crop scoring parallelized via Rayon.
/// Identical output to [`recommend`] for identical inputs.
pub fn recommend_parallel(
    engine: &CropScoringEngine,
    catalog: &CropCatalog,
    inputs: &RecommendationInputs,
) -> Recommendation {
    run(engine, catalog, inputs, true)
}

fn run(
    engine: &CropScoringEngine,
    catalog: &CropCatalog,
    inputs: &RecommendationInputs,
    parallel: bool,
) -> Recommendation {
    let climate = match analyze(inputs.observations) {
        Ok(profile) => Some(profile),
        Err(err) => {
            tracing::debug!(error = %err, "scoring without a climate profile");
            None
        }
    };

    let score_one = |crop: &crate::catalog::profile::CropProfile| -> Option<ScoredCrop> {
        match engine.score(crop, inputs.weather, inputs.soil, climate.as_ref(), inputs.when) {
            Ok(scored) => Some(scored),
            Err(err) => {
                tracing::warn!(crop = %crop.id, error = %err, "excluding crop from ranking");
                None
            }
        }
    };

    let mut scored: Vec<ScoredCrop> = if parallel {
        catalog.crops().par_iter().filter_map(score_one).collect()
    } else {
        catalog.crops().iter().filter_map(score_one).collect()
    };
    scored.sort_by(ranking_order);

    let skipped = catalog.len() - scored.len();
    let diagnostic = if scored.is_empty() {
        Some(if catalog.is_empty() {
            "no crops could be scored: the crop catalog is empty".to_string()
        } else {
            format!(
                "no crops could be scored: all {} catalog profiles failed validation",
                skipped
            )
        })
    } else {
        None
    };

    let confidence = estimate_confidence(
        Some(inputs.weather.age_hours(inputs.as_of)),
        climate.as_ref().map(|profile| profile.years_analyzed as u32),
        inputs.source_count,
        components_present(inputs.weather, inputs.soil, climate.as_ref()),
        ACTIVE_COMPONENTS,
    );

    let ranked = scored
        .into_iter()
        .enumerate()
        .map(|(rank, scored)| {
            let calendar = if rank < CALENDAR_TOP_N {
                match (&climate, catalog.get(&scored.crop_id)) {
                    (Some(profile), Some(crop)) => Some(calendar::generate(crop, profile)),
                    _ => None,
                }
            } else {
                None
            };
            RankedCrop {
                scored,
                confidence: confidence.clone(),
                calendar,
            }
        })
        .collect();

    Recommendation {
        ranked,
        climate,
        diagnostic,
    }
}

/// Count score components backed by real data for this run. Degraded
/// components: unknown temperature, unknown rainy-day forecast, fully
/// unknown soil, and (without a climate profile) the trend and resilience
/// terms.
fn components_present(
    weather: &WeatherSnapshot,
    soil: &LocalSoil,
    climate: Option<&ClimateProfile>,
) -> u32 {
    let mut present = ACTIVE_COMPONENTS;
    if weather.temperature_c.is_none() {
        present -= 1;
    }
    if weather.rainy_days_forecast.is_none() {
        present -= 1;
    }
    if soil.is_unknown() {
        present -= 1;
    }
    if climate.is_none() {
        present -= 2;
    }
    present
}
