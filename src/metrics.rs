//! Aggregate reporting helpers over a categorization run.

use crate::categorize::CategoryBuckets;

/// Per-bucket count and share of the retrieved record set.
#[derive(Clone, Debug, PartialEq)]
pub struct BucketShare {
    /// Wire name of the bucket.
    pub name: &'static str,
    /// Identifiers placed in the bucket.
    pub count: usize,
    /// Fraction of retrieved records in the bucket (0 when none were
    /// retrieved).
    pub share: f64,
}

/// Breakdown of one categorization run for logs and reports.
#[derive(Clone, Debug, PartialEq)]
pub struct BucketBreakdown {
    /// Number of records categorized.
    pub total_records: usize,
    /// Shares in fixed bucket order: high risk, fever, data quality.
    pub buckets: Vec<BucketShare>,
}

/// Compute the per-bucket breakdown for `total_records` categorized
/// records. Shares may exceed 1.0 in sum since buckets overlap.
pub fn bucket_breakdown(buckets: &CategoryBuckets, total_records: usize) -> BucketBreakdown {
    let share = |count: usize| {
        if total_records == 0 {
            0.0
        } else {
            count as f64 / total_records as f64
        }
    };
    BucketBreakdown {
        total_records,
        buckets: vec![
            BucketShare {
                name: "high_risk_patients",
                count: buckets.high_risk.len(),
                share: share(buckets.high_risk.len()),
            },
            BucketShare {
                name: "fever_patients",
                count: buckets.fever.len(),
                share: share(buckets.fever.len()),
            },
            BucketShare {
                name: "data_quality_issues",
                count: buckets.data_quality.len(),
                share: share(buckets.data_quality.len()),
            },
        ],
    }
}
