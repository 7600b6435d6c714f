#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Single-pass categorization into the three reporting buckets.
pub mod categorize;
/// Quality flagging and boolean flags, independent of scoring fallback.
pub mod classify;
/// Retry policy and endpoint configuration types.
pub mod config;
/// Centralized constants: retry bounds, clinical thresholds, HTTP defaults.
pub mod constants;
/// Record and page payload types.
pub mod data;
/// HTTP-backed patient source and result sink.
pub mod http;
/// Aggregate bucket reporting helpers.
pub mod metrics;
/// Field normalizers for loosely-typed raw values.
pub mod normalize;
/// End-to-end assessment runner.
pub mod pipeline;
/// Paginated retrieval orchestrator and its trait seams.
pub mod retrieval;
/// Risk rule engine.
pub mod scoring;
/// Result sink interface.
pub mod submit;
/// Shared type aliases.
pub mod types;

mod errors;

pub use categorize::{CategoryBuckets, categorize};
pub use classify::PatientFlags;
pub use config::{ApiConfig, RetryPolicy};
pub use data::{PageMetadata, PageResponse, PatientRecord};
pub use errors::TriageError;
pub use http::{HttpPatientSource, HttpResultSink};
pub use pipeline::{AssessmentReport, run_assessment};
pub use retrieval::{PatientSource, Retriever, RetrievalOutcome, ThreadWaiter, Waiter};
pub use scoring::RiskAssessment;
pub use submit::{ResultSink, SubmissionReceipt};
pub use types::{PageNumber, PatientId};
