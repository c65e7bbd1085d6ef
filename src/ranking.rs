//! Priority comparison and ranking
//!
//! Implements the domain ordering over prediction records: the urgent
//! category first (by severity sum), then Pneumonia, then everything else
//! (by per-category confidence within a shared category). The comparator is
//! a deliberate, quirk-preserving reimplementation of the upstream pairwise
//! decision procedure; it is not transitive across arbitrary category
//! labels, so it must be applied through a stable sort over the loader's
//! encounter order, which keeps equal-value records first-seen-first.

use std::cmp::Ordering;

use itertools::Itertools;
use log::info;

use crate::models::{normalize_label, PredictionRecord, PNEUMONIA_CATEGORY, URGENT_CATEGORY};

/// Three-way priority comparison between two prediction records.
///
/// `Ordering::Less` means the left record ranks first. Within a shared
/// category the comparison value is the severity sum (urgent) or the
/// confidence keyed by the category label (everything else); strictly-less
/// is the only way to lose. Equal values compare `Equal`, which under the
/// stable sort keeps the first-seen operand ahead; an incomparable (NaN)
/// value never loses for the left operand. Across categories only the
/// urgent label and Pneumonia are ordered meaningfully; any other pairing
/// falls back to "left ranks after right".
#[must_use]
pub fn compare_priority(a: &PredictionRecord, b: &PredictionRecord) -> Ordering {
    let a_label = normalize_label(&a.prediction);
    let b_label = normalize_label(&b.prediction);

    if a_label == b_label {
        let (a_value, b_value) = if a_label == URGENT_CATEGORY {
            (a.severity_sum(), b.severity_sum())
        } else {
            (a.confidence(&a_label), b.confidence(&b_label))
        };
        // Equal values must compare Equal for the stable sort to keep
        // encounter order; the final arm covers both "greater" and the
        // NaN/incomparable case, where the left operand never loses.
        return if a_value < b_value {
            Ordering::Greater
        } else if a_value == b_value {
            Ordering::Equal
        } else {
            Ordering::Less
        };
    }

    if a_label == URGENT_CATEGORY {
        return Ordering::Less;
    }
    if b_label == URGENT_CATEGORY {
        return Ordering::Greater;
    }
    if a_label == PNEUMONIA_CATEGORY {
        return Ordering::Less;
    }
    if b_label == PNEUMONIA_CATEGORY {
        return Ordering::Greater;
    }

    // Remaining categories carry no meaningful mutual order.
    Ordering::Greater
}

/// Sort loaded records into final rank order (rank 1 = first element).
///
/// The sort is stable; because ties compare `Equal`, equal-value records
/// stay in their encounter order.
#[must_use]
pub fn rank(records: Vec<PredictionRecord>) -> Vec<PredictionRecord> {
    let ranked: Vec<PredictionRecord> = records
        .into_iter()
        .sorted_by(|a, b| compare_priority(a, b))
        .collect();
    info!("ranked {} prediction records", ranked.len());
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn record(id: &str, prediction: &str, confidence: Option<f64>) -> PredictionRecord {
        let mut extra = Map::new();
        if let Some(c) = confidence {
            extra.insert(normalize_label(prediction), json!(c));
        }
        PredictionRecord {
            prediction: prediction.to_string(),
            extra,
            instance_id: id.to_string(),
            severity: None,
        }
    }

    fn urgent_record(id: &str, geographic: f64, opacity: f64) -> PredictionRecord {
        let severity: crate::models::Severity = serde_json::from_value(json!({
            "Geographic severity": geographic,
            "Opacity severity": opacity,
        }))
        .unwrap();
        PredictionRecord {
            prediction: "COVID-19".to_string(),
            extra: Map::<String, Value>::new(),
            instance_id: id.to_string(),
            severity: Some(severity),
        }
    }

    #[test]
    fn test_higher_confidence_ranks_first_within_category() {
        let low = record("low", "Pneumonia", Some(0.4));
        let high = record("high", "Pneumonia", Some(0.9));

        assert_eq!(compare_priority(&high, &low), Ordering::Less);
        assert_eq!(compare_priority(&low, &high), Ordering::Greater);
    }

    #[test]
    fn test_higher_severity_sum_ranks_first_among_urgent() {
        let mild = urgent_record("mild", 1.0, 2.0);
        let severe = urgent_record("severe", 3.0, 4.0);

        assert_eq!(compare_priority(&severe, &mild), Ordering::Less);
        assert_eq!(compare_priority(&mild, &severe), Ordering::Greater);
    }

    #[test]
    fn test_urgent_always_ranks_before_other_categories() {
        let urgent = urgent_record("urgent", 0.5, 0.5);
        let confident = record("confident", "Bacterial", Some(0.999));

        assert_eq!(compare_priority(&urgent, &confident), Ordering::Less);
        assert_eq!(compare_priority(&confident, &urgent), Ordering::Greater);
    }

    #[test]
    fn test_pneumonia_ranks_before_remaining_categories() {
        let pneumonia = record("p", "Pneumonia", Some(0.1));
        let other = record("o", "Bacterial", Some(0.99));

        assert_eq!(compare_priority(&pneumonia, &other), Ordering::Less);
        assert_eq!(compare_priority(&other, &pneumonia), Ordering::Greater);
    }

    #[test]
    fn test_undistinguished_categories_fall_back_to_left_after_right() {
        let a = record("a", "Bacterial", Some(0.5));
        let b = record("b", "Viral", Some(0.5));

        assert_eq!(compare_priority(&a, &b), Ordering::Greater);
        assert_eq!(compare_priority(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_equal_confidence_compares_equal() {
        let first = record("first", "Pneumonia", Some(0.7));
        let second = record("second", "Pneumonia", Some(0.7));

        assert_eq!(compare_priority(&first, &second), Ordering::Equal);
        assert_eq!(compare_priority(&second, &first), Ordering::Equal);
    }

    #[test]
    fn test_labels_compared_case_insensitively_on_first_letter() {
        let lower = record("lower", "pneumonia", Some(0.3));
        let upper = record("upper", "Pneumonia", Some(0.8));

        // Same category after normalization, so confidence decides.
        assert_eq!(compare_priority(&upper, &lower), Ordering::Less);
        assert_eq!(compare_priority(&lower, &upper), Ordering::Greater);
    }

    #[test]
    fn test_missing_confidence_never_loses() {
        let missing = record("missing", "Normal", None);
        let present = record("present", "Normal", Some(0.99));

        // NaN is never strictly less, so the left operand stays first.
        assert_eq!(compare_priority(&missing, &present), Ordering::Less);
        assert_eq!(compare_priority(&present, &missing), Ordering::Less);
    }

    #[test]
    fn test_rank_urgent_then_pneumonia_then_other() {
        let a = record("A", "pneumonia", Some(0.9));
        let b = urgent_record("B", 3.0, 4.0);
        let c = record("C", "Bacterial-other", Some(0.99));

        let ranked = rank(vec![a, b, c]);
        let ids: Vec<&str> = ranked.iter().map(|r| r.instance_id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_rank_keeps_encounter_order_on_severity_ties() {
        let d = urgent_record("D", 2.0, 3.0);
        let e = urgent_record("E", 1.0, 4.0);

        let ranked = rank(vec![d, e]);
        let ids: Vec<&str> = ranked.iter().map(|r| r.instance_id.as_str()).collect();
        assert_eq!(ids, vec!["D", "E"]);
    }

    #[test]
    fn test_rank_keeps_encounter_order_on_confidence_ties() {
        let d = record("D", "Normal", Some(0.5));
        let e = record("E", "Normal", Some(0.5));
        let f = record("F", "Normal", Some(0.5));

        let ranked = rank(vec![d, e, f]);
        let ids: Vec<&str> = ranked.iter().map(|r| r.instance_id.as_str()).collect();
        assert_eq!(ids, vec!["D", "E", "F"]);
    }

    #[test]
    fn test_rank_orders_urgent_by_severity_sum() {
        let mild = urgent_record("mild", 1.0, 1.0);
        let severe = urgent_record("severe", 4.0, 4.0);
        let middling = urgent_record("middling", 2.0, 3.0);

        let ranked = rank(vec![mild, severe, middling]);
        let ids: Vec<&str> = ranked.iter().map(|r| r.instance_id.as_str()).collect();
        assert_eq!(ids, vec!["severe", "middling", "mild"]);
    }
}
