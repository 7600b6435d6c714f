//! Risk rule engine: deterministic, pure functions of normalized input.

use serde::Serialize;

use crate::constants::thresholds;
use crate::data::PatientRecord;
use crate::normalize;

/// Per-record risk assessment. Exists only while a record is being
/// categorized; never persisted independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    /// Blood-pressure sub-score in `0..=3`.
    pub blood_pressure_risk: u8,
    /// Temperature sub-score in `0..=2`.
    pub temperature_risk: u8,
    /// Age sub-score in `0..=2`.
    pub age_risk: u8,
    /// Sum of the three sub-scores, in `0..=7`.
    pub total_risk: u8,
}

/// Score one record. Unusable fields contribute zero; this never fails.
pub fn assess(record: &PatientRecord) -> RiskAssessment {
    let blood_pressure_risk =
        blood_pressure_score(normalize::blood_pressure(&record.blood_pressure));
    let temperature_risk = temperature_score(normalize::temperature(&record.temperature));
    let age_risk = age_score(normalize::age(&record.age));
    RiskAssessment {
        blood_pressure_risk,
        temperature_risk,
        age_risk,
        total_risk: blood_pressure_risk + temperature_risk + age_risk,
    }
}

/// Blood-pressure sub-score. First matching rule wins; the stage-2 rule
/// is the dominant signal and already captures every `diastolic >= 90`
/// case, so no later rule needs to re-test it.
pub fn blood_pressure_score(reading: Option<(i64, i64)>) -> u8 {
    let Some((systolic, diastolic)) = reading else {
        return 0;
    };
    if systolic >= thresholds::BP_STAGE2_SYSTOLIC || diastolic >= thresholds::BP_STAGE2_DIASTOLIC {
        return 3;
    }
    if systolic >= thresholds::BP_STAGE1_SYSTOLIC || diastolic >= thresholds::BP_STAGE1_DIASTOLIC {
        return 2;
    }
    if systolic >= thresholds::BP_ELEVATED_SYSTOLIC {
        return 1;
    }
    0
}

/// Temperature sub-score: high tier 2, low tier 1, otherwise 0.
///
/// The low tier is the closed band `[TEMP_FEVER, TEMP_TIER1_MAX]`;
/// readings between its upper bound and `TEMP_HIGH` score zero even
/// though they still raise the fever flag.
pub fn temperature_score(degrees: Option<f64>) -> u8 {
    let Some(degrees) = degrees else {
        return 0;
    };
    if degrees >= thresholds::TEMP_HIGH {
        2
    } else if degrees >= thresholds::TEMP_FEVER && degrees <= thresholds::TEMP_TIER1_MAX {
        1
    } else {
        0
    }
}

/// Age sub-score: elderly 2, any other plausible age 1, unusable 0.
pub fn age_score(years: Option<i64>) -> u8 {
    match years {
        None => 0,
        Some(years) if years > thresholds::AGE_ELDERLY => 2,
        Some(_) => 1,
    }
}
