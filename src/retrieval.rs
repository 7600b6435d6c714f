//! Paginated retrieval with per-page backoff and an outer completeness
//! loop.
//!
//! Ownership model:
//! - `PatientSource` is the transport-facing seam that produces one
//!   decoded page per call.
//! - `Retriever` owns the retry state machine
//!   (`Pending -> Success | Retry(n) -> ... -> Failure`) and the sweep
//!   bookkeeping; it holds no state between `fetch_all` calls.
//! - `Waiter` isolates backoff sleeps so tests can observe timing
//!   without waiting.

use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::RetryPolicy;
use crate::data::{PageResponse, PatientRecord};
use crate::errors::TriageError;
use crate::types::PageNumber;

/// One-page fetch seam implemented by transports and test stubs.
///
/// A `fetch_page` error means a transport fault or non-success
/// response; decoding problems are faults too. Implementations do not
/// retry; retry ownership sits entirely with `Retriever`.
pub trait PatientSource {
    /// Fetch and decode page `page` (one-based).
    fn fetch_page(&self, page: PageNumber) -> Result<PageResponse, TriageError>;
}

impl<T: PatientSource + ?Sized> PatientSource for &T {
    fn fetch_page(&self, page: PageNumber) -> Result<PageResponse, TriageError> {
        (**self).fetch_page(page)
    }
}

/// Blocking-wait seam used for retry backoff and outer-loop delays.
pub trait Waiter {
    /// Block the calling thread for `duration`.
    fn wait(&self, duration: Duration);
}

/// Default `Waiter` backed by `thread::sleep`.
pub struct ThreadWaiter;

impl Waiter for ThreadWaiter {
    fn wait(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Result of one full retrieval run.
///
/// A shortfall is not an error: the accumulated set is returned as the
/// authoritative best-effort result, and callers that need strict
/// completeness compare `records.len()` against `expected_total` via
/// `is_complete` / `shortfall`.
#[derive(Clone, Debug)]
pub struct RetrievalOutcome {
    /// Records accumulated by the final sweep, in page order.
    pub records: Vec<PatientRecord>,
    /// Expected total from the source's first-page metadata, or the
    /// observed count when metadata was absent.
    pub expected_total: usize,
    /// Pages the final sweep skipped after exhausting per-page retries.
    pub skipped_pages: Vec<PageNumber>,
    /// Number of full sweeps performed (1 when the first succeeded).
    pub sweeps: u32,
}

impl RetrievalOutcome {
    /// True when the accumulated count reached the expected total.
    pub fn is_complete(&self) -> bool {
        self.records.len() >= self.expected_total
    }

    /// Number of records missing relative to the expected total.
    pub fn shortfall(&self) -> usize {
        self.expected_total.saturating_sub(self.records.len())
    }
}

/// Outcome of one sweep over all pages, before the completeness check.
struct Sweep {
    records: Vec<PatientRecord>,
    expected_total: usize,
    skipped_pages: Vec<PageNumber>,
}

/// Sequential paginated retriever with bounded retries at two levels.
pub struct Retriever<S, W = ThreadWaiter> {
    source: S,
    policy: RetryPolicy,
    waiter: W,
}

impl<S: PatientSource> Retriever<S> {
    /// Build a retriever that sleeps on the calling thread.
    pub fn new(source: S, policy: RetryPolicy) -> Self {
        Self::with_waiter(source, policy, ThreadWaiter)
    }
}

impl<S: PatientSource, W: Waiter> Retriever<S, W> {
    /// Build a retriever with an explicit `Waiter` (used by tests).
    pub fn with_waiter(source: S, policy: RetryPolicy, waiter: W) -> Self {
        Self {
            source,
            policy,
            waiter,
        }
    }

    /// Fetch the full record set, best effort.
    ///
    /// Page 1 is always fetched with full per-page retry before any
    /// totals are known; its exhaustion is the only page fault that
    /// propagates, because the sweep cannot size itself without it.
    /// Each outer restart discards prior accumulation and rebuilds from
    /// page 1. After the sweep bound is exhausted the last accumulation
    /// is returned even if short.
    pub fn fetch_all(&self) -> Result<RetrievalOutcome, TriageError> {
        let max_sweeps = self.policy.outer_max_sweeps.max(1);
        let mut sweeps = 0u32;
        loop {
            let sweep = self.sweep()?;
            sweeps += 1;
            if sweep.records.len() >= sweep.expected_total {
                return Ok(self.outcome(sweep, sweeps));
            }
            if sweeps >= max_sweeps {
                let outcome = self.outcome(sweep, sweeps);
                warn!(
                    expected = outcome.expected_total,
                    received = outcome.records.len(),
                    sweeps,
                    "returning best-effort partial record set"
                );
                return Ok(outcome);
            }
            let delay = self.policy.outer_backoff(sweeps);
            warn!(
                expected = sweep.expected_total,
                received = sweep.records.len(),
                sweep = sweeps,
                delay_ms = delay.as_millis() as u64,
                "record count short of expected total, restarting sweep"
            );
            self.waiter.wait(delay);
        }
    }

    fn outcome(&self, sweep: Sweep, sweeps: u32) -> RetrievalOutcome {
        RetrievalOutcome {
            records: sweep.records,
            expected_total: sweep.expected_total,
            skipped_pages: sweep.skipped_pages,
            sweeps,
        }
    }

    fn sweep(&self) -> Result<Sweep, TriageError> {
        let first = self.fetch_page_with_retry(1)?;
        let mut records = first.records;
        let (total_pages, expected_total) = match first.metadata {
            Some(metadata) => (metadata.total_pages, metadata.total),
            None => (1, records.len()),
        };

        let mut skipped_pages = Vec::new();
        for page in 2..=total_pages {
            match self.fetch_page_with_retry(page) {
                Ok(response) => records.extend(response.records),
                Err(err) => {
                    warn!(page, error = %err, "skipping page after exhausting retries");
                    skipped_pages.push(page);
                }
            }
        }

        info!(
            received = records.len(),
            expected = expected_total,
            skipped = skipped_pages.len(),
            "sweep finished"
        );
        Ok(Sweep {
            records,
            expected_total,
            skipped_pages,
        })
    }

    fn fetch_page_with_retry(&self, page: PageNumber) -> Result<PageResponse, TriageError> {
        let mut attempt = 0u32;
        loop {
            match self.source.fetch_page(page) {
                Ok(response) => return Ok(response),
                Err(err) if attempt < self.policy.page_max_retries => {
                    let delay = self.policy.page_backoff(attempt);
                    warn!(
                        page,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "page fetch failed, backing off"
                    );
                    self.waiter.wait(delay);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
