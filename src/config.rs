//! Configuration for the ranking pipeline.

/// Configuration for a ranking run
///
/// Collects the well-known file names so they live in one place; the
/// defaults match what upstream prediction plugins emit.
#[derive(Debug, Clone)]
pub struct RankConfig {
    /// File name of the per-instance prediction record
    pub prediction_filename: String,
    /// File name of the per-instance severity record (urgent category only)
    pub severity_filename: String,
    /// File name of the consolidated ranking manifest written to the output root
    pub manifest_filename: String,
    /// Zero-padded width of the rank prefix on copied instance directories
    pub rank_prefix_width: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            prediction_filename: "prediction-default.json".to_string(),
            severity_filename: "severity.json".to_string(),
            manifest_filename: "0000-ranking_result.json".to_string(),
            rank_prefix_width: 4,
        }
    }
}
