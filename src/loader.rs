//! Prediction record loading utilities

use std::fs;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::config::RankConfig;
use crate::error::util::{safe_open_file, validate_directory};
use crate::error::{RankError, Result};
use crate::models::{PredictionRecord, Severity};

/// Load all prediction records found under `input_root`.
///
/// Each direct subdirectory of the input root holds one instance. An entry
/// without a prediction record file is silently excluded; an urgent-category
/// instance without a severity record fails the whole run.
///
/// Records are returned in directory-encounter order. Instance ids are unique
/// by construction (one filesystem entry per instance), so no keyed map is
/// needed; the comparator's tie rule depends on this encounter order
/// downstream.
pub fn load_predictions(input_root: &Path, config: &RankConfig) -> Result<Vec<PredictionRecord>> {
    validate_directory(input_root, "listing prediction instances")?;

    let entries =
        fs::read_dir(input_root).map_err(|e| RankError::io("failed to list input root", input_root, e))?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RankError::io("failed to read input root entry", input_root, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        // Quirk kept from the upstream tool: the entry's bare name is checked
        // against the process working directory, not the input root. Flagged
        // in DESIGN.md; do not "fix" without a product decision.
        if Path::new(&name).is_dir() {
            debug!("skipping '{name}': bare name is a directory relative to the working directory");
            continue;
        }

        let prediction_path = input_root.join(&name).join(&config.prediction_filename);
        if !prediction_path.exists() {
            debug!("skipping '{name}': no {}", config.prediction_filename);
            continue;
        }

        let mut record: PredictionRecord = read_json(&prediction_path, "reading prediction record")?;
        record.instance_id = name.clone();

        if record.is_urgent() {
            let severity_path = input_root.join(&name).join(&config.severity_filename);
            if !severity_path.exists() {
                return Err(RankError::MissingSeverity {
                    instance_id: name,
                    path: severity_path,
                });
            }
            let severity: Severity = read_json(&severity_path, "reading severity record")?;
            debug!("attached severity (sum {}) to urgent instance '{name}'", severity.sum());
            record.severity = Some(severity);
        }

        records.push(record);
    }

    info!("loaded {} prediction records from {}", records.len(), input_root.display());
    Ok(records)
}

/// Open and parse a JSON file, tagging failures with the offending path.
fn read_json<T: DeserializeOwned>(path: &Path, purpose: &str) -> Result<T> {
    let file = safe_open_file(path, purpose)?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| RankError::json(path, e))
}
