//! Benchmark: scoring the full built-in catalog for one request.

use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};

use crop_scorer::catalog::profile::{DrainageClass, FertilityLevel};
use crop_scorer::{
    recommend, CropCatalog, CropScoringEngine, LocalSoil, RainfallObservation,
    RecommendationInputs, WeatherSnapshot,
};

fn bench_recommend(c: &mut Criterion) {
    let catalog = CropCatalog::builtin();
    let engine = CropScoringEngine::with_default_tables();

    let weather = WeatherSnapshot {
        current_rainfall_mm: 50.0,
        forecast_7day_rainfall_mm: 30.0,
        temperature_c: Some(24.0),
        humidity_pct: Some(60.0),
        rainy_days_forecast: Some(3),
        observed_at: Utc.with_ymd_and_hms(2024, 3, 5, 5, 0, 0).unwrap(),
    };
    let soil = LocalSoil {
        ph: Some(6.2),
        fertility: Some(FertilityLevel::Moderate),
        drainage: Some(DrainageClass::WellDrained),
    };

    let mut observations = Vec::new();
    for year in 2014..=2023 {
        for (month, mm) in [(3u32, 110.0), (4, 130.0), (5, 90.0), (10, 70.0), (11, 80.0)] {
            observations.push(RainfallObservation::new(year, month, mm));
        }
    }

    let inputs = RecommendationInputs {
        weather: &weather,
        soil: &soil,
        observations: &observations,
        when: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        as_of: Utc.with_ymd_and_hms(2024, 3, 5, 6, 0, 0).unwrap(),
        source_count: 2,
    };

    c.bench_function("recommend_builtin_catalog", |b| {
        b.iter(|| recommend(&engine, &catalog, &inputs))
    });
}

criterion_group!(benches, bench_recommend);
criterion_main!(benches);
