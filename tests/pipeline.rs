use std::sync::Mutex;

use serde_json::{Value, json};

use triage::config::RetryPolicy;
use triage::data::{PageMetadata, PageResponse, PatientRecord};
use triage::retrieval::{PatientSource, Retriever};
use triage::submit::ResultSink;
use triage::types::PageNumber;
use triage::{CategoryBuckets, TriageError, run_assessment};

struct SinglePageSource {
    records: Vec<PatientRecord>,
}

impl PatientSource for SinglePageSource {
    fn fetch_page(&self, _page: PageNumber) -> Result<PageResponse, TriageError> {
        Ok(PageResponse {
            records: self.records.clone(),
            metadata: Some(PageMetadata {
                total: self.records.len(),
                total_pages: 1,
            }),
        })
    }
}

#[derive(Default)]
struct CapturingSink {
    submitted: Mutex<Option<Value>>,
}

impl ResultSink for CapturingSink {
    fn submit(&self, buckets: &CategoryBuckets) -> Result<Value, TriageError> {
        let payload = serde_json::to_value(buckets).unwrap();
        *self.submitted.lock().unwrap() = Some(payload);
        Ok(json!({ "status": "accepted" }))
    }
}

struct RejectingSink;

impl ResultSink for RejectingSink {
    fn submit(&self, _buckets: &CategoryBuckets) -> Result<Value, TriageError> {
        Err(TriageError::Submission {
            reason: "http status 503".to_string(),
        })
    }
}

fn cohort() -> Vec<PatientRecord> {
    vec![
        PatientRecord::new("OK", json!("110/70"), json!(98.6), json!(30)),
        PatientRecord::new("RISKY", json!("160/100"), json!(102.0), json!(80)),
        PatientRecord::new("BROKEN", json!("not-a-reading"), json!(""), Value::Null),
    ]
}

#[test]
fn run_assessment_submits_the_categorized_buckets() {
    let retriever = Retriever::new(
        SinglePageSource { records: cohort() },
        RetryPolicy::default(),
    );
    let sink = CapturingSink::default();

    let report = run_assessment(&retriever, &sink).unwrap();
    assert!(report.retrieval.is_complete());
    assert_eq!(report.receipt, json!({ "status": "accepted" }));
    assert_eq!(report.buckets.high_risk, vec!["RISKY"]);
    assert_eq!(report.buckets.fever, vec!["RISKY"]);
    assert_eq!(report.buckets.data_quality, vec!["BROKEN"]);

    let submitted = sink.submitted.lock().unwrap().clone().unwrap();
    assert_eq!(submitted["high_risk_patients"], json!(["RISKY"]));
    assert_eq!(submitted["fever_patients"], json!(["RISKY"]));
    assert_eq!(submitted["data_quality_issues"], json!(["BROKEN"]));
}

#[test]
fn sink_failure_is_fatal_to_the_run() {
    let retriever = Retriever::new(
        SinglePageSource { records: cohort() },
        RetryPolicy::default(),
    );
    let err = run_assessment(&retriever, &RejectingSink).unwrap_err();
    assert!(matches!(err, TriageError::Submission { .. }));
}
