//! Historical rainfall observations.

use serde::{Deserialize, Serialize};

/// One historical rainfall record for a coordinate: total rainfall for a
/// calendar month of a year. Series may arrive unordered and with missing
/// months; the analyzer tolerates both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RainfallObservation {
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    pub rainfall_mm: f64,
}

impl RainfallObservation {
    pub fn new(year: i32, month: u32, rainfall_mm: f64) -> Self {
        Self {
            year,
            month,
            rainfall_mm,
        }
    }
}
