//! Error taxonomy for the scoring and analysis engine.
//!
//! Two failure classes cross the public API: a crop profile violating its own
//! range invariants (fatal for that crop only; the pipeline logs and excludes
//! it), and a historical series too thin to analyze (recoverable; callers
//! degrade to scoring without a climate profile). The engine performs no I/O,
//! so there is nothing to retry here.

use thiserror::Error;

/// Scoring failure for a single crop.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The crop profile violates a range invariant (e.g. minimum rainfall
    /// above maximum). The value is never silently clamped; the crop is
    /// excluded from ranking instead.
    #[error("crop '{crop_id}': {detail}")]
    Validation { crop_id: String, detail: String },
}

/// Historical rainfall analysis failure.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Fewer than two distinct years of observations. The recommendation
    /// pipeline treats this as "no climate profile" rather than propagating
    /// the error to callers.
    #[error("insufficient historical data: {distinct_years} distinct year(s), need at least 2")]
    InsufficientData { distinct_years: usize },
}
