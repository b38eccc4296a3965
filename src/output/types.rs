use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

pub const SCHEMA_VERSION: &str = "pagetext.v1";

#[derive(Debug, Clone, Serialize, Default)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub schema_version: &'static str,
    pub time: DateTime<Utc>,
    pub request_id: Uuid,
    pub op: &'static str,
    pub result: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Envelope {
    pub fn result<T: Serialize>(op: &'static str, result: &T, meta: Option<Meta>) -> Result<Self, serde_json::Error> {
        let res_val = serde_json::to_value(result)?;
        Ok(Envelope {
            schema_version: SCHEMA_VERSION,
            time: Utc::now(),
            request_id: Uuid::new_v4(),
            op,
            result: res_val,
            meta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_result_envelope() {
        let result = json!({"title": "t"});
        let env = Envelope::result("extract", &result, None).expect("to serialize result");
        let s = serde_json::to_string(&env).unwrap();
        assert!(s.contains("\"schema_version\":\"pagetext.v1\""));
        assert!(s.contains("\"op\":\"extract\""));
        assert!(s.contains("\"result\":{\"title\":\"t\"}"));
        assert!(!s.contains("\"meta\""));
    }

    #[test]
    fn meta_carries_duration() {
        let meta = Meta { duration_ms: Some(12) };
        let env = Envelope::result("samples", &json!([]), Some(meta)).unwrap();
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["meta"]["duration_ms"], 12);
    }
}
