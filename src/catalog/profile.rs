//! Crop and variety requirement profiles.
//!
//! A profile captures everything the scorer needs to know about a crop: its
//! named varieties, seasonal water and temperature ranges, soil requirements,
//! and planting-calendar windows. Profiles are immutable after catalog load;
//! every range carries the invariant min <= optimal <= max, checked by
//! [`CropProfile::validate`] before scoring.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::months::{month_after, month_before};

/// How strongly a variety resists dry spells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DroughtTolerance {
    Low,
    Moderate,
    High,
}

impl DroughtTolerance {
    /// Weight used by the resilience and drought-risk calculations.
    /// Higher tolerance shields more of the variability penalty.
    pub fn weight(&self) -> f64 {
        match self {
            DroughtTolerance::High => 1.0,
            DroughtTolerance::Moderate => 0.6,
            DroughtTolerance::Low => 0.2,
        }
    }

    /// Rainy-day band (within a 7-day forecast) this tolerance class is
    /// best matched to. High-tolerance varieties suit dry forecasts;
    /// low-tolerance varieties want regular rain.
    pub fn preferred_rainy_days(&self) -> (u8, u8) {
        match self {
            DroughtTolerance::High => (0, 2),
            DroughtTolerance::Moderate => (3, 4),
            DroughtTolerance::Low => (5, 7),
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            DroughtTolerance::High => "High",
            DroughtTolerance::Moderate => "Moderate",
            DroughtTolerance::Low => "Low",
        }
    }
}

/// Soil fertility tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FertilityLevel {
    Low,
    Moderate,
    High,
}

impl FertilityLevel {
    /// Ordinal position used for adjacent-tier matching.
    pub fn tier_index(&self) -> i32 {
        match self {
            FertilityLevel::Low => 0,
            FertilityLevel::Moderate => 1,
            FertilityLevel::High => 2,
        }
    }
}

/// Soil drainage class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrainageClass {
    Poor,
    Moderate,
    WellDrained,
}

/// A named variety of a crop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarietyProfile {
    pub name: String,

    /// Days from planting to harvest.
    pub maturity_days: u32,

    /// Indicative yield under good conditions (t/ha). Used only to break
    /// ties between equally well-matched varieties.
    pub yield_potential_t_ha: f64,

    pub drought_tolerance: DroughtTolerance,

    /// Diseases this variety is bred to resist.
    pub disease_resistance: BTreeSet<String>,
}

/// A min/optimal/max rainfall band (mm over the growing season).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RainfallRange {
    pub min_mm: f64,
    pub optimal_mm: f64,
    pub max_mm: f64,
}

impl RainfallRange {
    fn check(&self) -> Result<(), String> {
        if self.min_mm <= self.optimal_mm && self.optimal_mm <= self.max_mm {
            Ok(())
        } else {
            Err(format!(
                "rainfall range is not ordered: min {:.0} / optimal {:.0} / max {:.0}",
                self.min_mm, self.optimal_mm, self.max_mm
            ))
        }
    }
}

/// Seasonal water needs plus the growth stages where stress hurts most.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterRequirements {
    pub seasonal_mm: RainfallRange,

    /// Growth stages where water stress is most damaging, e.g. "flowering".
    #[serde(default)]
    pub critical_growth_periods: Vec<String>,
}

/// A min/optimal/max temperature band (°C).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min_c: f64,
    pub optimal_c: f64,
    pub max_c: f64,
}

impl TemperatureRange {
    fn check(&self) -> Result<(), String> {
        if self.min_c <= self.optimal_c && self.optimal_c <= self.max_c {
            Ok(())
        } else {
            Err(format!(
                "temperature range is not ordered: min {:.1} / optimal {:.1} / max {:.1}",
                self.min_c, self.optimal_c, self.max_c
            ))
        }
    }
}

/// Acceptable topsoil pH band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhRange {
    pub min: f64,
    pub max: f64,
}

impl PhRange {
    pub fn contains(&self, ph: f64) -> bool {
        ph >= self.min && ph <= self.max
    }

    /// Within `margin` pH units of the band (but outside it).
    pub fn within_margin(&self, ph: f64, margin: f64) -> bool {
        !self.contains(ph) && ph >= self.min - margin && ph <= self.max + margin
    }
}

/// Soil requirements for a crop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilRequirements {
    pub ph: PhRange,
    pub fertility: FertilityLevel,
    pub drainage: DrainageClass,
}

/// A named planting window. Months are 1-12 and the window may wrap the
/// year end (e.g. November-February).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantingWindow {
    pub name: String,
    pub start_month: u32,
    pub end_month: u32,

    /// Rainfall needed around planting (observed month-to-date plus the
    /// 7-day forecast is checked against this).
    pub rainfall_needed_mm: f64,
}

impl PlantingWindow {
    pub fn contains(&self, month: u32) -> bool {
        if self.start_month <= self.end_month {
            month >= self.start_month && month <= self.end_month
        } else {
            month >= self.start_month || month <= self.end_month
        }
    }

    /// One month before the window opens or after it closes.
    pub fn is_adjacent(&self, month: u32) -> bool {
        !self.contains(month)
            && (month == month_before(self.start_month) || month == month_after(self.end_month))
    }

    pub fn len_months(&self) -> u32 {
        if self.start_month <= self.end_month {
            self.end_month - self.start_month + 1
        } else {
            12 - self.start_month + 1 + self.end_month
        }
    }

    fn check(&self) -> Result<(), String> {
        if !(1..=12).contains(&self.start_month) || !(1..=12).contains(&self.end_month) {
            return Err(format!(
                "planting window '{}' has out-of-range months {}..{}",
                self.name, self.start_month, self.end_month
            ));
        }
        if self.rainfall_needed_mm < 0.0 {
            return Err(format!(
                "planting window '{}' has negative rainfall requirement",
                self.name
            ));
        }
        Ok(())
    }
}

/// Broad water-affinity classification used by the trend-alignment factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterAffinity {
    DroughtTolerant,
    Balanced,
    WaterLoving,
}

/// Optimal seasonal rainfall below this marks a crop as drought tolerant.
const DROUGHT_TOLERANT_OPTIMAL_MM: f64 = 400.0;
/// Optimal seasonal rainfall at or above this marks a crop as water loving.
const WATER_LOVING_OPTIMAL_MM: f64 = 700.0;

/// A complete crop requirement profile. Immutable after catalog load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropProfile {
    /// Stable identifier, lexical order is the final ranking tie-break.
    pub id: String,
    pub display_name: String,
    pub varieties: Vec<VarietyProfile>,
    pub water_requirements: WaterRequirements,
    pub temperature_requirements: TemperatureRange,
    pub soil_requirements: SoilRequirements,
    pub planting_calendar: Vec<PlantingWindow>,
}

impl CropProfile {
    /// Check every range invariant. Violations are reported, never clamped.
    pub fn validate(&self) -> Result<(), ScoreError> {
        let fail = |detail: String| ScoreError::Validation {
            crop_id: self.id.clone(),
            detail,
        };

        self.water_requirements.seasonal_mm.check().map_err(fail)?;
        self.temperature_requirements.check().map_err(fail)?;

        let ph = &self.soil_requirements.ph;
        if ph.min > ph.max {
            return Err(fail(format!(
                "soil pH range is not ordered: min {:.1} / max {:.1}",
                ph.min, ph.max
            )));
        }

        if self.varieties.is_empty() {
            return Err(fail("no varieties defined".to_string()));
        }
        for variety in &self.varieties {
            if variety.maturity_days == 0 {
                return Err(fail(format!(
                    "variety '{}' has zero maturity days",
                    variety.name
                )));
            }
        }

        for window in &self.planting_calendar {
            window.check().map_err(fail)?;
        }

        Ok(())
    }

    /// Classify the crop for trend alignment. Optimal rainfall decides the
    /// clear cases; in between, a High-tolerance lead variety tips the crop
    /// into the drought-tolerant class.
    pub fn water_affinity(&self) -> WaterAffinity {
        let optimal = self.water_requirements.seasonal_mm.optimal_mm;
        if optimal >= WATER_LOVING_OPTIMAL_MM {
            WaterAffinity::WaterLoving
        } else if optimal < DROUGHT_TOLERANT_OPTIMAL_MM {
            WaterAffinity::DroughtTolerant
        } else if self
            .varieties
            .iter()
            .any(|v| v.drought_tolerance == DroughtTolerance::High)
        {
            WaterAffinity::DroughtTolerant
        } else {
            WaterAffinity::Balanced
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variety(name: &str, tolerance: DroughtTolerance) -> VarietyProfile {
        VarietyProfile {
            name: name.to_string(),
            maturity_days: 110,
            yield_potential_t_ha: 3.0,
            drought_tolerance: tolerance,
            disease_resistance: BTreeSet::new(),
        }
    }

    fn profile(optimal_mm: f64) -> CropProfile {
        CropProfile {
            id: "testcrop".to_string(),
            display_name: "Test Crop".to_string(),
            varieties: vec![variety("standard", DroughtTolerance::Moderate)],
            water_requirements: WaterRequirements {
                seasonal_mm: RainfallRange {
                    min_mm: optimal_mm * 0.5,
                    optimal_mm,
                    max_mm: optimal_mm * 1.5,
                },
                critical_growth_periods: vec!["flowering".to_string()],
            },
            temperature_requirements: TemperatureRange {
                min_c: 10.0,
                optimal_c: 24.0,
                max_c: 35.0,
            },
            soil_requirements: SoilRequirements {
                ph: PhRange { min: 5.5, max: 7.0 },
                fertility: FertilityLevel::Moderate,
                drainage: DrainageClass::WellDrained,
            },
            planting_calendar: vec![PlantingWindow {
                name: "long rains".to_string(),
                start_month: 3,
                end_month: 5,
                rainfall_needed_mm: 80.0,
            }],
        }
    }

    #[test]
    fn test_window_containment() {
        let window = PlantingWindow {
            name: "long rains".to_string(),
            start_month: 3,
            end_month: 5,
            rainfall_needed_mm: 80.0,
        };
        assert!(window.contains(3));
        assert!(window.contains(5));
        assert!(!window.contains(6));
        assert!(window.is_adjacent(2));
        assert!(window.is_adjacent(6));
        assert!(!window.is_adjacent(4));
        assert_eq!(window.len_months(), 3);
    }

    #[test]
    fn test_window_wraps_year_end() {
        let window = PlantingWindow {
            name: "short rains".to_string(),
            start_month: 11,
            end_month: 2,
            rainfall_needed_mm: 60.0,
        };
        assert!(window.contains(11));
        assert!(window.contains(12));
        assert!(window.contains(1));
        assert!(window.contains(2));
        assert!(!window.contains(6));
        assert!(window.is_adjacent(10));
        assert!(window.is_adjacent(3));
        assert_eq!(window.len_months(), 4);
    }

    #[test]
    fn test_validate_rejects_inverted_water_range() {
        let mut crop = profile(500.0);
        crop.water_requirements.seasonal_mm.min_mm = 900.0;
        let err = crop.validate().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("testcrop"));
        assert!(message.contains("rainfall range"));
    }

    #[test]
    fn test_validate_rejects_empty_varieties() {
        let mut crop = profile(500.0);
        crop.varieties.clear();
        assert!(crop.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_good_profile() {
        assert!(profile(500.0).validate().is_ok());
    }

    #[test]
    fn test_water_affinity() {
        assert_eq!(profile(300.0).water_affinity(), WaterAffinity::DroughtTolerant);
        assert_eq!(profile(900.0).water_affinity(), WaterAffinity::WaterLoving);
        assert_eq!(profile(550.0).water_affinity(), WaterAffinity::Balanced);

        // Mid-range optimal with a High-tolerance variety counts as tolerant
        let mut crop = profile(550.0);
        crop.varieties.push(variety("hardy", DroughtTolerance::High));
        assert_eq!(crop.water_affinity(), WaterAffinity::DroughtTolerant);
    }

    #[test]
    fn test_ph_margin() {
        let ph = PhRange { min: 5.5, max: 7.0 };
        assert!(ph.contains(6.0));
        assert!(ph.within_margin(5.1, 0.5));
        assert!(ph.within_margin(7.4, 0.5));
        assert!(!ph.within_margin(4.5, 0.5));
        assert!(!ph.within_margin(6.0, 0.5));
    }
}
