//! Entity models for the ranking pipeline.

pub mod prediction;

pub use prediction::{normalize_label, PredictionRecord, Severity, PNEUMONIA_CATEGORY, URGENT_CATEGORY};
