use std::time::Duration;

use crate::constants::{http, retry};
use crate::errors::TriageError;

/// Retry and backoff bounds threaded into the retrieval orchestrator.
///
/// These were process-wide constants in earlier iterations; keeping
/// them on an explicit value lets tests shrink the bounds and lets
/// deployments tune them without rebuilding.
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    /// Retries allowed per page before the page fault propagates.
    pub page_max_retries: u32,
    /// Full sweeps the outer completeness loop may perform.
    pub outer_max_sweeps: u32,
    /// Base wait for per-page exponential backoff (doubled each retry).
    pub page_backoff_base: Duration,
    /// Linear step between outer sweeps (step x sweep number).
    pub outer_backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            page_max_retries: retry::PAGE_MAX_RETRIES,
            outer_max_sweeps: retry::OUTER_MAX_SWEEPS,
            page_backoff_base: Duration::from_millis(retry::PAGE_BACKOFF_BASE_MS),
            outer_backoff_step: Duration::from_millis(retry::OUTER_BACKOFF_STEP_MS),
        }
    }
}

impl RetryPolicy {
    /// Wait before per-page retry `attempt` (zero-based): `base * 2^attempt`.
    pub fn page_backoff(&self, attempt: u32) -> Duration {
        self.page_backoff_base
            .checked_mul(1u32.checked_shl(attempt).unwrap_or(u32::MAX))
            .unwrap_or(Duration::MAX)
    }

    /// Wait before outer sweep number `sweep + 1`: `step * sweep`.
    pub fn outer_backoff(&self, completed_sweeps: u32) -> Duration {
        self.outer_backoff_step
            .checked_mul(completed_sweeps)
            .unwrap_or(Duration::MAX)
    }
}

/// Endpoint and credential configuration for the HTTP source and sink.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Collection endpoint queried with `?page=N&limit=L`.
    pub base_url: String,
    /// Submission endpoint receiving the final bucket payload.
    pub submit_url: String,
    /// Credential sent in the `x-api-key` header on every request.
    pub api_key: String,
    /// Records requested per page.
    pub page_limit: u32,
}

impl ApiConfig {
    /// Build a validated config. Empty endpoints or credentials are
    /// rejected up front rather than surfacing as opaque HTTP faults.
    pub fn new(
        base_url: impl Into<String>,
        submit_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, TriageError> {
        let config = Self {
            base_url: base_url.into(),
            submit_url: submit_url.into(),
            api_key: api_key.into(),
            page_limit: http::DEFAULT_PAGE_LIMIT,
        };
        if config.base_url.trim().is_empty() {
            return Err(TriageError::Configuration(
                "base_url must not be empty".to_string(),
            ));
        }
        if config.submit_url.trim().is_empty() {
            return Err(TriageError::Configuration(
                "submit_url must not be empty".to_string(),
            ));
        }
        if config.api_key.trim().is_empty() {
            return Err(TriageError::Configuration(
                "api_key must not be empty".to_string(),
            ));
        }
        if config.page_limit == 0 {
            return Err(TriageError::Configuration(
                "page_limit must be > 0".to_string(),
            ));
        }
        Ok(config)
    }

    /// Override the per-page record limit.
    pub fn with_page_limit(mut self, limit: u32) -> Self {
        self.page_limit = limit;
        self
    }
}
