//! Built-in crop catalog and default lookup tables.
//!
//! A small set of staple crops with realistic requirement profiles, used
//! when no external catalog file is configured. Market-demand and
//! input-availability figures live in separate tables keyed by crop id so
//! tests can swap in synthetic ones.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use super::profile::{
    CropProfile, DrainageClass, DroughtTolerance, FertilityLevel, PhRange, PlantingWindow,
    RainfallRange, SoilRequirements, TemperatureRange, VarietyProfile, WaterRequirements,
};

fn variety(
    name: &str,
    maturity_days: u32,
    yield_potential_t_ha: f64,
    drought_tolerance: DroughtTolerance,
    resistances: &[&str],
) -> VarietyProfile {
    VarietyProfile {
        name: name.to_string(),
        maturity_days,
        yield_potential_t_ha,
        drought_tolerance,
        disease_resistance: resistances.iter().map(|r| r.to_string()).collect::<BTreeSet<_>>(),
    }
}

fn window(name: &str, start_month: u32, end_month: u32, rainfall_needed_mm: f64) -> PlantingWindow {
    PlantingWindow {
        name: name.to_string(),
        start_month,
        end_month,
        rainfall_needed_mm,
    }
}

/// Maize - the benchmark staple; moderate water needs, bimodal windows.
pub fn maize() -> CropProfile {
    CropProfile {
        id: "maize".to_string(),
        display_name: "Maize".to_string(),
        varieties: vec![
            variety("H513", 120, 5.5, DroughtTolerance::Moderate, &["grey leaf spot"]),
            variety("DK8031", 100, 4.5, DroughtTolerance::High, &["maize streak virus"]),
            variety("H6213", 150, 7.0, DroughtTolerance::Low, &["northern leaf blight"]),
        ],
        water_requirements: WaterRequirements {
            seasonal_mm: RainfallRange {
                min_mm: 350.0,
                optimal_mm: 550.0,
                max_mm: 800.0,
            },
            critical_growth_periods: vec!["tasseling".to_string(), "grain filling".to_string()],
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
        planting_calendar: vec![
            window("long rains", 3, 5, 80.0),
            window("short rains", 10, 12, 60.0),
        ],
    }
}

/// Sorghum - drought-hardy cereal for low-rainfall zones.
pub fn sorghum() -> CropProfile {
    CropProfile {
        id: "sorghum".to_string(),
        display_name: "Sorghum".to_string(),
        varieties: vec![
            variety("Gadam", 100, 3.0, DroughtTolerance::High, &["anthracnose"]),
            variety("Serena", 110, 2.5, DroughtTolerance::High, &[]),
        ],
        water_requirements: WaterRequirements {
            seasonal_mm: RainfallRange {
                min_mm: 200.0,
                optimal_mm: 380.0,
                max_mm: 650.0,
            },
            critical_growth_periods: vec!["booting".to_string(), "flowering".to_string()],
        },
        temperature_requirements: TemperatureRange {
            min_c: 15.0,
            optimal_c: 27.0,
            max_c: 38.0,
        },
        soil_requirements: SoilRequirements {
            ph: PhRange { min: 5.0, max: 7.5 },
            fertility: FertilityLevel::Low,
            drainage: DrainageClass::WellDrained,
        },
        planting_calendar: vec![
            window("long rains", 3, 4, 50.0),
            window("short rains", 10, 11, 40.0),
        ],
    }
}

/// Common beans - short-season legume, moisture sensitive at flowering.
pub fn beans() -> CropProfile {
    CropProfile {
        id: "beans".to_string(),
        display_name: "Common Beans".to_string(),
        varieties: vec![
            variety("Rosecoco", 85, 1.8, DroughtTolerance::Moderate, &["bean rust"]),
            variety("KAT B1", 75, 1.5, DroughtTolerance::High, &["common bacterial blight"]),
        ],
        water_requirements: WaterRequirements {
            seasonal_mm: RainfallRange {
                min_mm: 250.0,
                optimal_mm: 420.0,
                max_mm: 600.0,
            },
            critical_growth_periods: vec!["flowering".to_string(), "pod filling".to_string()],
        },
        temperature_requirements: TemperatureRange {
            min_c: 12.0,
            optimal_c: 21.0,
            max_c: 30.0,
        },
        soil_requirements: SoilRequirements {
            ph: PhRange { min: 5.8, max: 7.0 },
            fertility: FertilityLevel::Moderate,
            drainage: DrainageClass::WellDrained,
        },
        planting_calendar: vec![
            window("long rains", 3, 4, 60.0),
            window("short rains", 10, 11, 50.0),
        ],
    }
}

/// Paddy rice - water loving, needs impeded drainage.
pub fn rice() -> CropProfile {
    CropProfile {
        id: "rice".to_string(),
        display_name: "Paddy Rice".to_string(),
        varieties: vec![
            variety("Basmati 370", 140, 4.0, DroughtTolerance::Low, &["rice blast"]),
            variety("IR2793", 120, 5.5, DroughtTolerance::Low, &["bacterial leaf blight"]),
        ],
        water_requirements: WaterRequirements {
            seasonal_mm: RainfallRange {
                min_mm: 600.0,
                optimal_mm: 900.0,
                max_mm: 1400.0,
            },
            critical_growth_periods: vec!["panicle initiation".to_string(), "heading".to_string()],
        },
        temperature_requirements: TemperatureRange {
            min_c: 18.0,
            optimal_c: 28.0,
            max_c: 36.0,
        },
        soil_requirements: SoilRequirements {
            ph: PhRange { min: 5.0, max: 6.5 },
            fertility: FertilityLevel::High,
            drainage: DrainageClass::Poor,
        },
        planting_calendar: vec![window("main season", 4, 6, 120.0)],
    }
}

/// Cassava - wide tolerance, long season, forgiving of poor soils.
pub fn cassava() -> CropProfile {
    CropProfile {
        id: "cassava".to_string(),
        display_name: "Cassava".to_string(),
        varieties: vec![
            variety("TME 419", 300, 25.0, DroughtTolerance::High, &["cassava mosaic disease"]),
            variety("KME 1", 270, 20.0, DroughtTolerance::High, &[]),
        ],
        water_requirements: WaterRequirements {
            seasonal_mm: RainfallRange {
                min_mm: 300.0,
                optimal_mm: 500.0,
                max_mm: 1200.0,
            },
            critical_growth_periods: vec!["establishment".to_string()],
        },
        temperature_requirements: TemperatureRange {
            min_c: 18.0,
            optimal_c: 27.0,
            max_c: 35.0,
        },
        soil_requirements: SoilRequirements {
            ph: PhRange { min: 4.5, max: 7.0 },
            fertility: FertilityLevel::Low,
            drainage: DrainageClass::WellDrained,
        },
        planting_calendar: vec![
            window("long rains", 3, 5, 50.0),
            window("short rains", 10, 12, 50.0),
        ],
    }
}

/// Groundnut - sandy-soil legume with a narrow pH sweet spot.
pub fn groundnut() -> CropProfile {
    CropProfile {
        id: "groundnut".to_string(),
        display_name: "Groundnut".to_string(),
        varieties: vec![
            variety("Red Valencia", 95, 1.2, DroughtTolerance::Moderate, &[]),
            variety("CG7", 120, 2.0, DroughtTolerance::Moderate, &["groundnut rosette"]),
        ],
        water_requirements: WaterRequirements {
            seasonal_mm: RainfallRange {
                min_mm: 300.0,
                optimal_mm: 450.0,
                max_mm: 700.0,
            },
            critical_growth_periods: vec!["pegging".to_string(), "pod filling".to_string()],
        },
        temperature_requirements: TemperatureRange {
            min_c: 15.0,
            optimal_c: 26.0,
            max_c: 34.0,
        },
        soil_requirements: SoilRequirements {
            ph: PhRange { min: 5.5, max: 6.5 },
            fertility: FertilityLevel::Moderate,
            drainage: DrainageClass::WellDrained,
        },
        planting_calendar: vec![window("long rains", 3, 4, 60.0)],
    }
}

/// All built-in crop profiles.
pub fn default_crops() -> Vec<CropProfile> {
    vec![maize(), sorghum(), beans(), rice(), cassava(), groundnut()]
}

/// Default market-demand table (0-5 per crop id).
pub fn default_market_demand() -> FxHashMap<String, f64> {
    let mut table = FxHashMap::default();
    table.insert("maize".to_string(), 5.0);
    table.insert("beans".to_string(), 4.5);
    table.insert("rice".to_string(), 4.0);
    table.insert("sorghum".to_string(), 3.0);
    table.insert("cassava".to_string(), 3.5);
    table.insert("groundnut".to_string(), 3.5);
    table
}

/// Default seed/fertilizer access table (0-5 per crop id).
pub fn default_input_availability() -> FxHashMap<String, f64> {
    let mut table = FxHashMap::default();
    table.insert("maize".to_string(), 5.0);
    table.insert("beans".to_string(), 4.5);
    table.insert("rice".to_string(), 3.0);
    table.insert("sorghum".to_string(), 4.0);
    table.insert("cassava".to_string(), 4.0);
    table.insert("groundnut".to_string(), 3.5);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profiles_validate() {
        for crop in default_crops() {
            crop.validate()
                .unwrap_or_else(|e| panic!("built-in profile failed validation: {e}"));
        }
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let crops = default_crops();
        let mut ids: Vec<_> = crops.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), crops.len());
    }

    #[test]
    fn test_lookup_tables_cover_all_crops() {
        let market = default_market_demand();
        let inputs = default_input_availability();
        for crop in default_crops() {
            assert!(market.contains_key(&crop.id), "no market entry for {}", crop.id);
            assert!(inputs.contains_key(&crop.id), "no input entry for {}", crop.id);
        }
    }
}
