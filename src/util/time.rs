use chrono::{DateTime, FixedOffset, Local, Offset, SecondsFormat, SubsecRound, Utc};
use serde::Serializer;

// Capture timestamps keep millisecond precision so they survive an RFC3339 round trip unchanged.
pub fn capture_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

// Always three fractional digits and a `Z`, e.g. "2026-10-18T12:00:00.000Z".
pub fn serialize_millis<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

// "YYYY-MM-DD" stamp used in export file names.
pub fn file_date(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

// Offset of the machine's local zone right now; exports render dates in it.
pub fn local_offset() -> FixedOffset {
    Local::now().offset().fix()
}

// e.g. "18/10/2026, 14:05:09"
pub fn display_timestamp(ts: DateTime<Utc>, offset: FixedOffset) -> String {
    ts.with_timezone(&offset).format("%d/%m/%Y, %H:%M:%S").to_string()
}

// e.g. "18/10/2026"
pub fn display_date(ts: DateTime<Utc>, offset: FixedOffset) -> String {
    ts.with_timezone(&offset).format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_in_given_offset() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 18, 23, 30, 5).unwrap();
        let plus2 = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(file_date(ts), "2026-10-18");
        assert_eq!(display_timestamp(ts, plus2), "19/10/2026, 01:30:05");
        assert_eq!(display_date(ts, plus2), "19/10/2026");
    }

    #[test]
    fn serialized_timestamps_keep_zero_millis() {
        #[derive(serde::Serialize)]
        struct Stamp {
            #[serde(serialize_with = "serialize_millis")]
            at: DateTime<Utc>,
        }
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        assert_eq!(serde_json::to_string(&Stamp { at }).unwrap(), r#"{"at":"2026-10-18T12:00:00.000Z"}"#);
    }

    #[test]
    fn capture_truncates_to_millis() {
        assert_eq!(capture_now().timestamp_subsec_nanos() % 1_000_000, 0);
    }
}
