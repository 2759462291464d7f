//! Soil suitability factor.

use crate::catalog::profile::SoilRequirements;
use crate::scoring::components::SOIL_CAP;
use crate::site::LocalSoil;

/// Axis weights: pH, fertility, drainage.
const PH_WEIGHT: f64 = 0.4;
const FERTILITY_WEIGHT: f64 = 0.3;
const DRAINAGE_WEIGHT: f64 = 0.3;

/// pH distance from the band that still earns partial credit.
const PH_MARGIN: f64 = 0.5;

/// Score the local soil against the crop's requirements (0-10).
///
/// pH in range scores the axis fully, within 0.5 units half, else zero.
/// Fertility matches fully on the exact tier and half on an adjacent tier.
/// Drainage matches exactly or not at all. Unknown measurements score the
/// axis at neutral half credit. The weighted sum is normalized to 10.
pub fn soil_suitability(requirements: &SoilRequirements, local: &LocalSoil) -> f64 {
    let ph_axis = match local.ph {
        None => 0.5,
        Some(ph) => {
            if requirements.ph.contains(ph) {
                1.0
            } else if requirements.ph.within_margin(ph, PH_MARGIN) {
                0.5
            } else {
                0.0
            }
        }
    };

    let fertility_axis = match local.fertility {
        None => 0.5,
        Some(fertility) => {
            let gap = (fertility.tier_index() - requirements.fertility.tier_index()).abs();
            match gap {
                0 => 1.0,
                1 => 0.5,
                _ => 0.0,
            }
        }
    };

    let drainage_axis = match local.drainage {
        None => 0.5,
        Some(drainage) => {
            if drainage == requirements.drainage {
                1.0
            } else {
                0.0
            }
        }
    };

    SOIL_CAP * (PH_WEIGHT * ph_axis + FERTILITY_WEIGHT * fertility_axis + DRAINAGE_WEIGHT * drainage_axis)
}
