//! Shared fixture helpers for integration tests.
//!
//! Builds real instance trees under a temp directory, the shape the upstream
//! prediction plugins produce: one subdirectory per instance holding a
//! `prediction-default.json` and, for urgent cases, a `severity.json`.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

/// Write `value` as pretty JSON to `path`, creating parent directories.
pub fn write_json(path: &Path, value: &Value) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

/// Create an instance subdirectory with the given prediction record.
pub fn add_instance(input_root: &Path, name: &str, prediction: &Value) {
    write_json(&input_root.join(name).join("prediction-default.json"), prediction);
}

/// Create a non-urgent instance with a confidence score keyed by its category.
pub fn add_scored_instance(input_root: &Path, name: &str, category: &str, confidence: f64) {
    add_instance(
        input_root,
        name,
        &json!({ "prediction": category, category: confidence }),
    );
}

/// Create an urgent-category instance with its severity record.
pub fn add_urgent_instance(input_root: &Path, name: &str, geographic: f64, opacity: f64) {
    add_instance(input_root, name, &json!({ "prediction": "COVID-19", "COVID-19": 0.9 }));
    write_json(
        &input_root.join(name).join("severity.json"),
        &json!({ "Geographic severity": geographic, "Opacity severity": opacity }),
    );
}

/// Names of the direct entries under `root`, sorted.
pub fn entry_names(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(root)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Parse the ranking manifest under `output_root` into JSON values.
pub fn read_manifest(output_root: &Path) -> Vec<Value> {
    let raw = fs::read_to_string(output_root.join("0000-ranking_result.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

/// The `instance_id` of each manifest element, in rank order.
pub fn manifest_ids(output_root: &Path) -> Vec<String> {
    read_manifest(output_root)
        .iter()
        .map(|v| v["instance_id"].as_str().unwrap().to_string())
        .collect()
}
