//! Result sink seam for delivering the category buckets downstream.

use serde_json::Value;

use crate::categorize::CategoryBuckets;
use crate::errors::TriageError;

/// Acknowledgement body returned by the submission endpoint, kept raw
/// since its shape is owned by the downstream service.
pub type SubmissionReceipt = Value;

/// Delivery seam for the final buckets.
///
/// A failed submission is fatal to the run; no retry is defined at this
/// layer and callers that want one add it outside.
pub trait ResultSink {
    /// Deliver the buckets, returning the sink's acknowledgement.
    fn submit(&self, buckets: &CategoryBuckets) -> Result<SubmissionReceipt, TriageError>;
}
