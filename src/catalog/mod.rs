//! Static crop catalog.
//!
//! Loaded once per process (built-in defaults or a JSON file), then treated
//! as read-only by every scoring call. The catalog does not validate profiles
//! on construction: the scoring engine validates each crop per call so that a
//! single malformed profile is logged and excluded without poisoning the rest
//! of the catalog.

pub mod builtin;
pub mod profile;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use profile::CropProfile;

/// Read-only repository of crop requirement profiles.
#[derive(Debug, Clone)]
pub struct CropCatalog {
    crops: Vec<CropProfile>,
}

impl CropCatalog {
    /// Wrap an already-assembled list of profiles.
    pub fn new(crops: Vec<CropProfile>) -> Self {
        Self { crops }
    }

    /// The built-in staple-crop catalog.
    pub fn builtin() -> Self {
        Self::new(builtin::default_crops())
    }

    /// Load a catalog from a JSON file (an array of crop profiles).
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read crop catalog file: {:?}", path))?;

        let crops: Vec<CropProfile> = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse crop catalog JSON")?;

        Ok(Self::new(crops))
    }

    pub fn crops(&self) -> &[CropProfile] {
        &self.crops
    }

    pub fn get(&self, id: &str) -> Option<&CropProfile> {
        self.crops.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_lookup() {
        let catalog = CropCatalog::builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.get("maize").is_some());
        assert!(catalog.get("nonexistent").is_none());
    }

    #[test]
    fn test_catalog_round_trips_through_json() {
        let catalog = CropCatalog::builtin();
        let json = serde_json::to_string(catalog.crops()).unwrap();
        let parsed: Vec<CropProfile> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), catalog.len());
        assert_eq!(parsed[0].id, catalog.crops()[0].id);
        for crop in &parsed {
            assert!(crop.validate().is_ok());
        }
    }
}
