//! Multi-factor crop scoring.
//!
//! - `components`: the fixed ten-component breakdown and suitability levels
//! - `factors`: one module per score factor
//! - `engine`: the scorer that ties the factors together
//! - `reasons`: rationale text generation

pub mod components;
pub mod engine;
pub mod factors;
pub mod reasons;

pub use components::{ScoreComponents, SuitabilityLevel};
pub use engine::{ranking_order, CropScoringEngine, ScoredCrop};
pub use reasons::generate_reasons;
