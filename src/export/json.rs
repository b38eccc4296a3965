use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::extraction::types::{ExtractionMode, ExtractionRecord};
use crate::util::time::serialize_millis;

#[derive(Serialize)]
struct JsonExport<'a> {
    #[serde(serialize_with = "serialize_millis")]
    timestamp: DateTime<Utc>,
    #[serde(rename = "extractionType")]
    extraction_type: ExtractionMode,
    data: &'a [ExtractionRecord],
}

/// `{timestamp, extractionType, data: [record]}` with two-space indentation.
pub fn render(record: &ExtractionRecord, now: DateTime<Utc>) -> serde_json::Result<String> {
    let doc = JsonExport {
        timestamp: now,
        extraction_type: record.mode,
        data: std::slice::from_ref(record),
    };
    serde_json::to_string_pretty(&doc)
}
