//! End-to-end assessment run: retrieve, categorize, submit.

use tracing::{info, warn};

use crate::categorize::{self, CategoryBuckets};
use crate::errors::TriageError;
use crate::metrics::bucket_breakdown;
use crate::retrieval::{PatientSource, Retriever, RetrievalOutcome, Waiter};
use crate::submit::{ResultSink, SubmissionReceipt};

/// Everything one assessment run produced, for callers that report on
/// completeness or archive the sink's acknowledgement.
#[derive(Clone, Debug)]
pub struct AssessmentReport {
    /// Retrieval result the buckets were derived from.
    pub retrieval: RetrievalOutcome,
    /// Buckets delivered to the sink.
    pub buckets: CategoryBuckets,
    /// Acknowledgement returned by the sink.
    pub receipt: SubmissionReceipt,
}

/// Run one full assessment.
///
/// Retrieval is best effort: a short record set is categorized and
/// submitted as-is, with the shortfall surfaced in the report. A sink
/// failure is fatal and propagates.
pub fn run_assessment<S, W, K>(
    retriever: &Retriever<S, W>,
    sink: &K,
) -> Result<AssessmentReport, TriageError>
where
    S: PatientSource,
    W: Waiter,
    K: ResultSink,
{
    let retrieval = retriever.fetch_all()?;
    if !retrieval.is_complete() {
        warn!(
            shortfall = retrieval.shortfall(),
            skipped_pages = retrieval.skipped_pages.len(),
            "assessing an incomplete record set"
        );
    }

    let buckets = categorize::categorize(&retrieval.records);
    let breakdown = bucket_breakdown(&buckets, retrieval.records.len());
    for bucket in &breakdown.buckets {
        info!(
            bucket = bucket.name,
            count = bucket.count,
            share_pct = bucket.share * 100.0,
            "bucket populated"
        );
    }

    let receipt = sink.submit(&buckets)?;
    info!(records = retrieval.records.len(), "assessment submitted");
    Ok(AssessmentReport {
        retrieval,
        buckets,
        receipt,
    })
}
