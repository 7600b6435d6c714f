//! Single-pass record categorization into the three reporting buckets.

use serde::Serialize;

use crate::classify;
use crate::data::PatientRecord;
use crate::scoring;
use crate::types::PatientId;

/// The three category buckets emitted by one categorization run.
///
/// The categories are independent: an identifier may appear in zero,
/// one, or all three. List order tracks input order; no deduplication
/// is performed. Field names serialize to the submission wire names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CategoryBuckets {
    /// Patients whose total risk met the high-risk threshold.
    #[serde(rename = "high_risk_patients")]
    pub high_risk: Vec<PatientId>,
    /// Patients whose parsed temperature met the fever threshold.
    #[serde(rename = "fever_patients")]
    pub fever: Vec<PatientId>,
    /// Patients with at least one strictly-invalid raw field.
    #[serde(rename = "data_quality_issues")]
    pub data_quality: Vec<PatientId>,
}

impl CategoryBuckets {
    /// True when no record landed in any bucket.
    pub fn is_empty(&self) -> bool {
        self.high_risk.is_empty() && self.fever.is_empty() && self.data_quality.is_empty()
    }
}

/// Categorize a record sequence. Pure function of its input: scoring
/// and flagging are deterministic and no state is retained across
/// calls.
pub fn categorize(records: &[PatientRecord]) -> CategoryBuckets {
    let mut buckets = CategoryBuckets::default();
    for record in records {
        let assessment = scoring::assess(record);
        let flags = classify::flags(record, &assessment);
        if flags.high_risk {
            buckets.high_risk.push(record.patient_id.clone());
        }
        if flags.fever {
            buckets.fever.push(record.patient_id.clone());
        }
        if flags.data_quality_issue {
            buckets.data_quality.push(record.patient_id.clone());
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn one_record_can_land_in_every_bucket() {
        // High BP + fever-tier temperature push the total to 4, and the
        // malformed age is a quality issue on top.
        let record = PatientRecord::new("P_ALL", json!("160/100"), json!(102.0), json!("abc"));
        let buckets = categorize(&[record]);
        assert_eq!(buckets.high_risk, vec!["P_ALL"]);
        assert_eq!(buckets.fever, vec!["P_ALL"]);
        assert_eq!(buckets.data_quality, vec!["P_ALL"]);
    }

    #[test]
    fn healthy_record_lands_nowhere() {
        let record = PatientRecord::new("P_OK", json!("110/70"), json!(98.6), json!(30));
        assert!(categorize(&[record]).is_empty());
    }

    #[test]
    fn bucket_order_tracks_input_order() {
        let records = vec![
            PatientRecord::new("A", json!("150/95"), json!(99.6), Value::Null),
            PatientRecord::new("B", json!("150/95"), json!(100.0), Value::Null),
        ];
        let buckets = categorize(&records);
        assert_eq!(buckets.high_risk, vec!["A", "B"]);
        assert_eq!(buckets.fever, vec!["A", "B"]);
    }

    #[test]
    fn serializes_to_submission_wire_names() {
        let record = PatientRecord::new("P1", json!("160/100"), json!(102.0), json!(70));
        let payload = serde_json::to_value(categorize(&[record])).unwrap();
        assert_eq!(payload["high_risk_patients"], json!(["P1"]));
        assert_eq!(payload["fever_patients"], json!(["P1"]));
        assert_eq!(payload["data_quality_issues"], json!([]));
    }
}
