/// Constants used by the retrieval retry policy defaults.
pub mod retry {
    /// Maximum retries for a single page before the fault propagates.
    pub const PAGE_MAX_RETRIES: u32 = 8;
    /// Maximum full sweeps the outer completeness loop performs.
    pub const OUTER_MAX_SWEEPS: u32 = 5;
    /// Base wait in milliseconds for per-page exponential backoff.
    pub const PAGE_BACKOFF_BASE_MS: u64 = 1000;
    /// Linear step in milliseconds between outer sweep attempts.
    pub const OUTER_BACKOFF_STEP_MS: u64 = 2000;
}

/// Physiologically plausible bounds used to reject bogus values during
/// scoring. Distinct from strict parsability used for quality flagging.
pub mod plausibility {
    /// Highest systolic reading accepted for scoring.
    pub const SYSTOLIC_MAX: i64 = 300;
    /// Highest diastolic reading accepted for scoring.
    pub const DIASTOLIC_MAX: i64 = 200;
    /// Highest age accepted for scoring.
    pub const AGE_MAX: i64 = 150;
}

/// Clinical threshold tables driving sub-scores and flags.
pub mod thresholds {
    /// Systolic bound for the dominant stage-2 hypertensive rule.
    pub const BP_STAGE2_SYSTOLIC: i64 = 140;
    /// Diastolic bound for the dominant stage-2 hypertensive rule.
    pub const BP_STAGE2_DIASTOLIC: i64 = 90;
    /// Lower systolic bound of the stage-1 range (130..=139).
    pub const BP_STAGE1_SYSTOLIC: i64 = 130;
    /// Lower diastolic bound of the stage-1 range (80..=89).
    pub const BP_STAGE1_DIASTOLIC: i64 = 80;
    /// Lower systolic bound of the elevated range (120..=129).
    pub const BP_ELEVATED_SYSTOLIC: i64 = 120;
    /// Temperature at or above which the high-temperature tier applies.
    pub const TEMP_HIGH: f64 = 101.0;
    /// Temperature at or above which both the low tier and the fever
    /// flag apply (inclusive on both).
    pub const TEMP_FEVER: f64 = 99.6;
    /// Upper bound of the low temperature tier (inclusive). Readings
    /// between this and `TEMP_HIGH` score zero, though the fever flag
    /// still applies to them.
    pub const TEMP_TIER1_MAX: f64 = 100.9;
    /// Age above which the elevated age tier applies.
    pub const AGE_ELDERLY: i64 = 65;
    /// Total risk at or above which a patient is flagged high risk.
    pub const HIGH_RISK_TOTAL: u8 = 4;
}

/// Constants used by the HTTP source and sink.
pub mod http {
    /// Records requested per page.
    pub const DEFAULT_PAGE_LIMIT: u32 = 10;
    /// Header carrying the API credential on every request.
    pub const API_KEY_HEADER: &str = "x-api-key";
}
