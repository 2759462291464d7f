//! Human-readable rationale for a score.
//!
//! Emits one sentence per component scoring at least 80% of its cap,
//! ordered by descending contribution. A score where nothing reaches the
//! bar still gets one sentence for its strongest component, so every
//! recommendation carries at least one reason.

use crate::scoring::components::ScoreComponents;

/// Fraction of a component's cap that qualifies it for a reason sentence.
const REASON_THRESHOLD: f64 = 0.8;

/// Build the ordered reason list for a score breakdown.
pub fn generate_reasons(components: &ScoreComponents) -> Vec<String> {
    let contributions = components.contributions();

    let mut qualifying: Vec<(&'static str, f64, f64)> = contributions
        .iter()
        .copied()
        .filter(|(_, value, cap)| *cap > 0.0 && *value >= REASON_THRESHOLD * cap)
        .collect();
    qualifying.sort_by(|a, b| b.1.total_cmp(&a.1));

    if qualifying.is_empty() {
        // Fall back to the single strongest component
        if let Some(top) = contributions
            .iter()
            .copied()
            .max_by(|a, b| a.1.total_cmp(&b.1))
        {
            return vec![phrase(top.0, top.1, top.2)];
        }
    }

    qualifying
        .into_iter()
        .map(|(label, value, cap)| phrase(label, value, cap))
        .collect()
}

fn phrase(label: &'static str, value: f64, cap: f64) -> String {
    let text = match label {
        "rainfall_match" => "Expected seasonal rainfall closely matches this crop's optimal range",
        "temperature_match" => "Current temperatures are near this crop's optimum",
        "seasonal_timing" => "The current month falls in a favorable planting window",
        "variety_fit" => "A well-suited variety is available for the forecast conditions",
        "variability_resilience" => "Copes well with this location's year-to-year rainfall swings",
        "soil_suitability" => "Local soil closely matches this crop's requirements",
        "market_demand" => "Market demand for this crop is strong",
        "input_availability" => "Seed and input access for this crop is good",
        "climate_trend_alignment" => "The multi-year rainfall trend favors this crop",
        _ => "Scores well on this factor",
    };
    format!("{} ({:.1}/{:.0} points)", text, value, cap)
}
