use chrono::FixedOffset;

use crate::extraction::types::ExtractionRecord;
use crate::util::time::display_timestamp;

const RULE_WIDTH: usize = 50;

pub fn render(record: &ExtractionRecord, offset: FixedOffset) -> String {
    format!(
        "TÍTULO: {}\nURL: {}\nEXTRAÍDO: {}\n\n{}\n\n{}",
        record.title,
        record.url,
        display_timestamp(record.extracted_at, offset),
        "-".repeat(RULE_WIDTH),
        record.body
    )
}
