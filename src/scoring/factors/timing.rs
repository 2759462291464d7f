//! Seasonal timing factor.

use crate::catalog::profile::PlantingWindow;
use crate::scoring::components::TIMING_CAP;

/// Credit multiplier for months adjacent to a planting window.
const ADJACENT_FACTOR: f64 = 0.5;

/// Timing score plus the window that earned it, for rationale text.
#[derive(Debug, Clone)]
pub struct TimingResult {
    pub points: f64,
    pub window: Option<String>,
}

/// Score the current month against the planting calendar (0-15).
///
/// Full marks inside a window whose rainfall requirement is met by the
/// near-term rainfall; a shortfall scales the credit linearly. Months
/// adjacent to a window earn half of their would-be credit. The best
/// window wins when several apply.
pub fn seasonal_timing(
    month: u32,
    windows: &[PlantingWindow],
    near_term_rainfall_mm: f64,
) -> TimingResult {
    let mut best = TimingResult {
        points: 0.0,
        window: None,
    };

    for window in windows {
        let rain_factor = if window.rainfall_needed_mm <= 0.0 {
            1.0
        } else {
            (near_term_rainfall_mm / window.rainfall_needed_mm).clamp(0.0, 1.0)
        };

        let points = if window.contains(month) {
            TIMING_CAP * rain_factor
        } else if window.is_adjacent(month) {
            TIMING_CAP * ADJACENT_FACTOR * rain_factor
        } else {
            continue;
        };

        if points > best.points {
            best = TimingResult {
                points,
                window: Some(window.name.clone()),
            };
        }
    }

    best
}
