//! Quality and flag classification, independent of scoring fallback.
//!
//! Validity here is strictly about parseability. It deliberately does
//! not apply the positivity or plausibility bounds the normalizers use
//! for scoring: a parsable but out-of-range value scores zero yet is
//! not a data-quality issue. That asymmetry is load-bearing.

use serde_json::Value;

use crate::constants::thresholds;
use crate::data::PatientRecord;
use crate::normalize;
use crate::scoring::RiskAssessment;

/// Boolean flags derived for one record during categorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatientFlags {
    /// At least one raw field failed its strict validity check.
    pub data_quality_issue: bool,
    /// Parsed temperature at or above the fever threshold.
    pub fever: bool,
    /// Total risk at or above the high-risk threshold.
    pub high_risk: bool,
}

/// Derive all flags for a record and its assessment.
pub fn flags(record: &PatientRecord, assessment: &RiskAssessment) -> PatientFlags {
    PatientFlags {
        data_quality_issue: has_data_quality_issue(record),
        fever: has_fever(record),
        high_risk: is_high_risk(assessment),
    }
}

/// True when any of the three raw fields fails strict validity.
pub fn has_data_quality_issue(record: &PatientRecord) -> bool {
    !is_valid_blood_pressure(&record.blood_pressure)
        || !is_valid_temperature(&record.temperature)
        || !is_valid_age(&record.age)
}

/// Fever flag: parsed temperature at or above the threshold, inclusive.
/// Independent of the tiered sub-score.
pub fn has_fever(record: &PatientRecord) -> bool {
    normalize::temperature(&record.temperature)
        .is_some_and(|degrees| degrees >= thresholds::TEMP_FEVER)
}

/// High-risk flag: total risk at or above the threshold.
pub fn is_high_risk(assessment: &RiskAssessment) -> bool {
    assessment.total_risk >= thresholds::HIGH_RISK_TOTAL
}

fn is_valid_blood_pressure(raw: &Value) -> bool {
    let Some(text) = raw.as_str() else {
        return false;
    };
    let parts: Vec<&str> = text.split('/').collect();
    parts.len() == 2 && parts.iter().all(|part| parses_as_integer(part))
}

fn is_valid_temperature(raw: &Value) -> bool {
    match raw {
        Value::Number(_) => true,
        Value::String(text) => {
            let trimmed = text.trim();
            !trimmed.is_empty() && trimmed.parse::<f64>().is_ok_and(|value| value.is_finite())
        }
        _ => false,
    }
}

fn is_valid_age(raw: &Value) -> bool {
    match raw {
        Value::Number(number) => number.as_i64().is_some(),
        Value::String(text) => parses_as_integer(text),
        _ => false,
    }
}

fn parses_as_integer(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.parse::<i64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring;
    use serde_json::json;

    fn record(blood_pressure: Value, temperature: Value, age: Value) -> PatientRecord {
        PatientRecord::new("P1", blood_pressure, temperature, age)
    }

    #[test]
    fn clean_record_has_no_quality_issue() {
        let clean = record(json!("120/80"), json!(98.6), json!(40));
        assert!(!has_data_quality_issue(&clean));
    }

    #[test]
    fn any_invalid_field_flags_the_record() {
        assert!(has_data_quality_issue(&record(
            json!("120"),
            json!(98.6),
            json!(40)
        )));
        assert!(has_data_quality_issue(&record(
            json!("120/80"),
            json!("warm"),
            json!(40)
        )));
        assert!(has_data_quality_issue(&record(
            json!("120/80"),
            json!(98.6),
            json!("")
        )));
        assert!(has_data_quality_issue(&record(
            Value::Null,
            Value::Null,
            Value::Null
        )));
    }

    #[test]
    fn validity_ignores_plausibility_bounds() {
        // Age 200 parses, so it is valid here even though it scores 0.
        let implausible_age = record(json!("120/80"), json!(98.6), json!("200"));
        assert!(!has_data_quality_issue(&implausible_age));
        assert_eq!(scoring::assess(&implausible_age).age_risk, 0);

        // Negative systolic parses as an integer too.
        let negative_systolic = record(json!("-5/80"), json!(98.6), json!(40));
        assert!(!has_data_quality_issue(&negative_systolic));
        assert_eq!(scoring::assess(&negative_systolic).blood_pressure_risk, 0);
    }

    #[test]
    fn fever_flag_is_inclusive_at_the_boundary() {
        assert!(has_fever(&record(Value::Null, json!(99.6), Value::Null)));
        assert!(has_fever(&record(Value::Null, json!("99.7"), Value::Null)));
        assert!(has_fever(&record(Value::Null, json!(101.5), Value::Null)));
        assert!(!has_fever(&record(Value::Null, json!(99.5), Value::Null)));
        assert!(!has_fever(&record(Value::Null, json!("warm"), Value::Null)));
        assert!(!has_fever(&record(Value::Null, Value::Null, Value::Null)));
    }

    #[test]
    fn fever_flag_has_no_upper_bound_unlike_the_tiers() {
        // 100.95 sits between the scoring tiers but still reads as fever.
        let between = record(Value::Null, json!(100.95), Value::Null);
        assert!(has_fever(&between));
        assert_eq!(scoring::assess(&between).temperature_risk, 0);
    }

    #[test]
    fn high_risk_flag_starts_at_total_four() {
        let flagged = scoring::assess(&record(json!("150/95"), json!(100.0), Value::Null));
        assert_eq!(flagged.total_risk, 4);
        assert!(is_high_risk(&flagged));

        let unflagged = scoring::assess(&record(json!("135/85"), json!(100.0), Value::Null));
        assert_eq!(unflagged.total_risk, 3);
        assert!(!is_high_risk(&unflagged));
    }
}
