//! Crop suitability scoring engine.
//!
//! Ranks candidate crops and varieties for a location and date by combining
//! live weather, rainfall forecasts, and multi-year historical rainfall
//! statistics into weighted suitability scores with attached confidence
//! estimates.
//!
//! Module layout:
//! - `catalog`: static crop/variety requirement profiles
//! - `climate`: historical rainfall analysis (trend, variability, risk years)
//! - `scoring`: the ten-component crop scorer
//! - `confidence`: reliability estimation from data provenance
//! - `calendar`: month-by-month planting suitability
//! - `recommend`: the pipeline tying the stages together
//!
//! Every stage is a pure function of its inputs: no I/O, no shared mutable
//! state, safe to invoke concurrently. Weather snapshots, rainfall series,
//! and catalogs are supplied already fetched by external collaborators.

pub mod calendar;
pub mod catalog;
pub mod climate;
pub mod confidence;
pub mod error;
pub mod months;
pub mod recommend;
pub mod scoring;
pub mod site;

// Re-export the main entry points
pub use calendar::{MonthRisk, MonthSuitability};
pub use catalog::profile::CropProfile;
pub use catalog::CropCatalog;
pub use climate::{analyze, ClimateProfile, RainfallObservation, RainfallTrend};
pub use confidence::{estimate_confidence, ConfidenceEstimate, ConfidenceLevel};
pub use error::{AnalysisError, ScoreError};
pub use recommend::{recommend, recommend_parallel, Recommendation, RecommendationInputs};
pub use scoring::{CropScoringEngine, ScoreComponents, ScoredCrop, SuitabilityLevel};
pub use site::{LocalSoil, WeatherSnapshot};
