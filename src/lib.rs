//! A Rust library for ranking per-instance diagnostic prediction records by
//! medical priority and materializing the ranked order as a consolidated
//! manifest plus rank-prefixed directory copies.
//!
//! The pipeline is three sequential phases: load records from the input tree
//! ([`loader`]), sort them with the domain priority comparator ([`ranking`]),
//! then clear and rewrite the output tree ([`materialize`]).

pub mod config;
pub mod error;
pub mod loader;
pub mod materialize;
pub mod models;
pub mod ranking;

// Re-export the most common types for easier use
pub use config::RankConfig;
pub use error::{RankError, Result};
pub use loader::load_predictions;
pub use materialize::materialize;
pub use models::{normalize_label, PredictionRecord, Severity, PNEUMONIA_CATEGORY, URGENT_CATEGORY};
pub use ranking::{compare_priority, rank};
