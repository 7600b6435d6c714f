use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::PatientId;

/// One retrieved patient record.
///
/// The three vital fields come off the wire loosely typed: any of them
/// may be absent, null, a number, or free-form text. They are kept as
/// raw JSON values here; `normalize` and `classify` decide what each
/// value means for scoring and for quality flagging.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Stable identifier used in the category buckets.
    pub patient_id: PatientId,
    /// Raw blood-pressure field, expected `"systolic/diastolic"` text.
    #[serde(default)]
    pub blood_pressure: Value,
    /// Raw temperature field, numeric or numeric-looking text.
    #[serde(default)]
    pub temperature: Value,
    /// Raw age field, numeric or numeric-looking text.
    #[serde(default)]
    pub age: Value,
}

impl PatientRecord {
    /// Build a record from raw JSON field values. Test fixtures and
    /// non-HTTP sources use this; wire decoding goes through serde.
    pub fn new(
        patient_id: impl Into<PatientId>,
        blood_pressure: Value,
        temperature: Value,
        age: Value,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            blood_pressure,
            temperature,
            age,
        }
    }
}

/// Pagination metadata reported by the source on the first page.
///
/// Pages beyond the first may omit this entirely; only their records
/// matter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Total record count across all pages.
    pub total: usize,
    /// Total page count.
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

/// Decoded body of one page fetch.
#[derive(Clone, Debug)]
pub struct PageResponse {
    /// Records delivered on this page.
    pub records: Vec<PatientRecord>,
    /// Pagination metadata, when the source included it.
    pub metadata: Option<PageMetadata>,
}

/// Wire shape of a page body.
///
/// The source normally wraps records in `{ "data": [...], "pagination":
/// {...} }` but has been observed returning a bare record array; both
/// decode.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PageBody {
    /// Enveloped form with optional pagination metadata.
    Enveloped {
        /// Records delivered on this page.
        data: Vec<PatientRecord>,
        /// Pagination metadata, present on the first page.
        #[serde(default)]
        pagination: Option<PageMetadata>,
    },
    /// Bare array of records with no envelope.
    Bare(Vec<PatientRecord>),
}

impl From<PageBody> for PageResponse {
    fn from(body: PageBody) -> Self {
        match body {
            PageBody::Enveloped { data, pagination } => Self {
                records: data,
                metadata: pagination,
            },
            PageBody::Bare(records) => Self {
                records,
                metadata: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enveloped_page_body_decodes_with_metadata() {
        let body: PageBody = serde_json::from_value(json!({
            "data": [
                { "patient_id": "DEMO001", "blood_pressure": "120/80", "temperature": 98.6, "age": 40 }
            ],
            "pagination": { "total": 31, "totalPages": 4 }
        }))
        .unwrap();
        let page = PageResponse::from(body);
        assert_eq!(page.records.len(), 1);
        let meta = page.metadata.unwrap();
        assert_eq!(meta.total, 31);
        assert_eq!(meta.total_pages, 4);
    }

    #[test]
    fn bare_array_page_body_decodes_without_metadata() {
        let body: PageBody = serde_json::from_value(json!([
            { "patient_id": "DEMO002", "age": "55" }
        ]))
        .unwrap();
        let page = PageResponse::from(body);
        assert_eq!(page.records.len(), 1);
        assert!(page.metadata.is_none());
        // Absent fields decode as JSON null.
        assert!(page.records[0].temperature.is_null());
    }

    #[test]
    fn missing_pagination_in_envelope_is_tolerated() {
        let body: PageBody = serde_json::from_value(json!({
            "data": []
        }))
        .unwrap();
        let page = PageResponse::from(body);
        assert!(page.records.is_empty());
        assert!(page.metadata.is_none());
    }
}
