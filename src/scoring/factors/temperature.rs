//! Temperature match factor.

use crate::catalog::profile::TemperatureRange;
use crate::scoring::components::TEMPERATURE_CAP;

/// Degrees either side of optimal that still earn full marks.
const OPTIMAL_BAND_C: f64 = 3.0;

/// Score the current temperature against the crop's band (0-20).
///
/// Full marks within ±3°C of optimal; linear decay to 0 at the min/max
/// boundaries; 0 outside. Unknown temperature earns neutral half credit.
pub fn temperature_match(temperature_c: Option<f64>, range: &TemperatureRange) -> f64 {
    let Some(temp) = temperature_c else {
        return TEMPERATURE_CAP * 0.5;
    };

    if temp <= range.min_c || temp >= range.max_c {
        return 0.0;
    }

    let band_lo = range.optimal_c - OPTIMAL_BAND_C;
    let band_hi = range.optimal_c + OPTIMAL_BAND_C;
    if temp >= band_lo && temp <= band_hi {
        return TEMPERATURE_CAP;
    }

    if temp < band_lo {
        let span = band_lo - range.min_c;
        if span <= 0.0 {
            return TEMPERATURE_CAP;
        }
        TEMPERATURE_CAP * (temp - range.min_c) / span
    } else {
        let span = range.max_c - band_hi;
        if span <= 0.0 {
            return TEMPERATURE_CAP;
        }
        TEMPERATURE_CAP * (range.max_c - temp) / span
    }
}
