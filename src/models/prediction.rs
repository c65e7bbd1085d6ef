//! Prediction entity model
//!
//! This module contains the `PredictionRecord` model, one per diagnosed
//! instance, plus the `Severity` record attached to urgent-category
//! instances. Records carry an open bag of extra fields so that upstream
//! schema changes round-trip through the ranking manifest untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The distinguished prediction label that always ranks first and
/// requires a severity record.
pub const URGENT_CATEGORY: &str = "COVID-19";

/// The second distinguished label, ranked ahead of all remaining
/// non-urgent categories.
pub const PNEUMONIA_CATEGORY: &str = "Pneumonia";

/// Normalize a category label: first letter uppercased, remainder unchanged.
///
/// Labels are case-insensitive on the first letter only, so `"covid-19"`
/// and `"Covid-19"` normalize identically while `"COVID-19"` stays
/// distinct. The empty label normalizes to the empty string.
#[must_use]
pub fn normalize_label(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Per-instance severity record, present for urgent-category instances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Severity {
    /// Geographic extent sub-score
    #[serde(rename = "Geographic severity")]
    pub geographic: f64,
    /// Opacity extent sub-score
    #[serde(rename = "Opacity severity")]
    pub opacity: f64,
    /// Any further fields of the severity record, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Severity {
    /// Severity sum, the urgent-category ranking metric.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.geographic + self.opacity
    }
}

/// Representation of one diagnosed instance's prediction record
///
/// Parsed from the instance's `prediction-default.json`; the loader injects
/// `instance_id` (the source subdirectory name, unique across a run) and,
/// for urgent-category instances, the `severity` record. All other fields of
/// the source JSON land in `extra` untouched, including the confidence score
/// keyed by the category name itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Predicted category label, as written by the upstream classifier
    pub prediction: String,
    /// All remaining fields of the source record, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Source subdirectory name; injected by the loader
    #[serde(default)]
    pub instance_id: String,
    /// Severity record; attached by the loader for urgent-category instances
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl PredictionRecord {
    /// The record's category label in normalized form.
    #[must_use]
    pub fn normalized_prediction(&self) -> String {
        normalize_label(&self.prediction)
    }

    /// Whether this record belongs to the urgent category.
    #[must_use]
    pub fn is_urgent(&self) -> bool {
        self.normalized_prediction() == URGENT_CATEGORY
    }

    /// Confidence score keyed by the given (normalized) category label.
    ///
    /// Returns NaN when the field is absent or non-numeric; NaN is never
    /// strictly less than anything, which hands the decision to the
    /// comparator's left-biased tie rule.
    #[must_use]
    pub fn confidence(&self, label: &str) -> f64 {
        self.extra.get(label).and_then(Value::as_f64).unwrap_or(f64::NAN)
    }

    /// Severity sum of the attached severity record, NaN when absent.
    ///
    /// The loader guarantees presence for urgent-category records, so the
    /// NaN arm is unreachable after a successful load.
    #[must_use]
    pub fn severity_sum(&self) -> f64 {
        self.severity.as_ref().map_or(f64::NAN, Severity::sum)
    }
}
