//! Variety fit and variability resilience factors.
//!
//! Picks the single best-matching variety for the forecast conditions and
//! scores how well it fits. Resilience is carved out of the same variety
//! budget: it rewards tolerant varieties in locations with large
//! year-to-year rainfall swings.

use crate::catalog::profile::{DroughtTolerance, VarietyProfile};
use crate::climate::profile::ClimateProfile;
use crate::scoring::components::{RESILIENCE_CAP, VARIETY_CAP};

/// Weight of the drought-tolerance axis in the match quality.
const DROUGHT_WEIGHT: f64 = 0.6;
/// Weight of the maturity axis.
const MATURITY_WEIGHT: f64 = 0.4;
/// Match-quality penalty per rainy day outside the preferred band.
const RAINY_DAY_PENALTY: f64 = 0.25;
/// Variability index (CV%) at which the resilience penalty saturates.
const VARIABILITY_SATURATION: f64 = 50.0;

/// The chosen variety and its fit score.
#[derive(Debug, Clone)]
pub struct VarietySelection {
    pub points: f64,
    pub variety_name: String,
    pub maturity_days: u32,
    pub tolerance: DroughtTolerance,
}

/// Score the best-matching variety (0-10).
///
/// Each variety is rated on two axes: drought tolerance against the rainy-day
/// forecast, and maturity against the remaining wet-season length. Ties go to
/// the higher-yielding variety, then to catalog order.
///
/// Callers must pass a non-empty variety list (enforced upstream by profile
/// validation).
pub fn variety_fit(
    varieties: &[VarietyProfile],
    rainy_days_forecast: Option<u8>,
    season_days_remaining: u32,
) -> VarietySelection {
    debug_assert!(!varieties.is_empty());

    let mut best: Option<(f64, &VarietyProfile)> = None;
    for variety in varieties {
        let drought = drought_axis(variety.drought_tolerance, rainy_days_forecast);
        let maturity = maturity_axis(variety.maturity_days, season_days_remaining);
        let quality = DROUGHT_WEIGHT * drought + MATURITY_WEIGHT * maturity;

        let better = match best {
            None => true,
            Some((best_quality, best_variety)) => {
                quality > best_quality
                    || (quality == best_quality
                        && variety.yield_potential_t_ha > best_variety.yield_potential_t_ha)
            }
        };
        if better {
            best = Some((quality, variety));
        }
    }

    let (quality, variety) = best.expect("non-empty variety list");
    VarietySelection {
        points: VARIETY_CAP * quality,
        variety_name: variety.name.clone(),
        maturity_days: variety.maturity_days,
        tolerance: variety.drought_tolerance,
    }
}

/// How well the variety's tolerance class matches the rainy-day forecast
/// (1.0 in its preferred band, decaying per day outside it; neutral 0.5
/// when the forecast is unknown).
fn drought_axis(tolerance: DroughtTolerance, rainy_days_forecast: Option<u8>) -> f64 {
    let Some(days) = rainy_days_forecast else {
        return 0.5;
    };
    let (lo, hi) = tolerance.preferred_rainy_days();
    let distance = if days < lo {
        (lo - days) as f64
    } else if days > hi {
        (days - hi) as f64
    } else {
        0.0
    };
    (1.0 - RAINY_DAY_PENALTY * distance).max(0.0)
}

/// How well the variety's maturity fits the remaining season: full when it
/// matures in time, decaying to 0 at twice the remaining length.
fn maturity_axis(maturity_days: u32, season_days_remaining: u32) -> f64 {
    if season_days_remaining == 0 {
        return 0.0;
    }
    if maturity_days <= season_days_remaining {
        return 1.0;
    }
    let overrun = (maturity_days - season_days_remaining) as f64;
    (1.0 - overrun / season_days_remaining as f64).max(0.0)
}

/// Score tolerance of year-to-year rainfall swings (0-5).
///
/// The variability index erodes the score in proportion to how little the
/// chosen variety tolerates drought; a perfectly steady climate gives full
/// marks to every variety. Zero without a climate profile.
pub fn variability_resilience(
    tolerance: DroughtTolerance,
    climate: Option<&ClimateProfile>,
) -> f64 {
    let Some(profile) = climate else {
        return 0.0;
    };
    let risk = (profile.variability_index / VARIABILITY_SATURATION).min(1.0);
    RESILIENCE_CAP * (1.0 - risk * (1.0 - tolerance.weight()))
}
