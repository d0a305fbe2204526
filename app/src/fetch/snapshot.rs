//! Decoding of the status endpoint's JSON body into a [`Snapshot`].
//!
//! Only the top-level shape is enforced (the body must be an object). Every
//! field is optional and looked up defensively: a field with an unexpected
//! type is treated exactly like a missing one.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::app::types::GateMarker;
use crate::errors::FetchError;

/// Per-spot records keyed by `"row,col"`. Records stay untyped until the
/// status normalizer looks at them.
pub type SpotMap = Map<String, Value>;

/// One complete state report for a single poll cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub spots: SpotMap,
    pub closest_free: Option<String>,
    pub free_count: Option<i64>,
    pub is_full: Option<bool>,
    pub gate: Option<GateMarker>,
    pub gate_waiting_car: Option<String>,
    pub ts: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Decode a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, FetchError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value)
    }

    /// Decode an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, FetchError> {
        let mut obj = match value {
            Value::Object(obj) => obj,
            other => {
                return Err(FetchError::Malformed(format!(
                    "expected a JSON object, got {}",
                    kind_of(&other)
                )))
            }
        };

        let spots = match obj.remove("spots") {
            Some(Value::Object(m)) => m,
            _ => Map::new(),
        };

        Ok(Snapshot {
            spots,
            closest_free: obj.get("closest_free").and_then(non_empty_str),
            free_count: obj.get("free_count").and_then(integer),
            is_full: obj.get("is_full").and_then(Value::as_bool),
            gate: obj.get("gate").and_then(gate_marker),
            gate_waiting_car: obj.get("gate_waiting_car").and_then(identifier),
            ts: obj.get("ts").and_then(timestamp),
        })
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn non_empty_str(v: &Value) -> Option<String> {
    v.as_str().filter(|s| !s.is_empty()).map(str::to_string)
}

/// Integers, plus floats with no fractional part (`0.0` counts as zero).
fn integer(v: &Value) -> Option<i64> {
    v.as_i64().or_else(|| {
        v.as_f64()
            .filter(|f| f.fract() == 0.0 && f.is_finite())
            .map(|f| f as i64)
    })
}

fn identifier(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn gate_marker(v: &Value) -> Option<GateMarker> {
    let obj = v.as_object()?;
    Some(GateMarker {
        col: obj.get("col").and_then(Value::as_u64),
        row: obj.get("row").and_then(Value::as_u64),
        label: obj
            .get("label")
            .and_then(non_empty_str)
            .unwrap_or_else(|| GateMarker::DEFAULT_LABEL.to_string()),
    })
}

/// Epoch milliseconds, or an RFC 3339 string.
fn timestamp(v: &Value) -> Option<DateTime<Utc>> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(DateTime::from_timestamp_millis),
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_payload() {
        let body = br#"{
            "spots": {"3,2": {"status": "OCCUPIED"}},
            "closest_free": "0,0",
            "free_count": 49,
            "is_full": false,
            "gate": {"row": 0, "col": 2},
            "gate_waiting_car": "car-7",
            "ts": 1700000000000
        }"#;
        let snap = Snapshot::from_slice(body).expect("decode");
        assert_eq!(snap.spots.len(), 1);
        assert_eq!(snap.closest_free.as_deref(), Some("0,0"));
        assert_eq!(snap.free_count, Some(49));
        assert_eq!(snap.is_full, Some(false));
        assert_eq!(snap.gate, Some(GateMarker { col: Some(2), row: Some(0), label: "gate".into() }));
        assert_eq!(snap.gate_waiting_car.as_deref(), Some("car-7"));
        assert_eq!(snap.ts.map(|t| t.timestamp_millis()), Some(1_700_000_000_000));
    }

    #[test]
    fn empty_object_has_no_fields() {
        let snap = Snapshot::from_value(json!({})).expect("decode");
        assert_eq!(snap, Snapshot::default());
    }

    #[test]
    fn wrong_typed_fields_are_absent() {
        let snap = Snapshot::from_value(json!({
            "spots": [1, 2],
            "closest_free": "",
            "free_count": "3",
            "is_full": "yes",
            "gate": 2,
            "gate_waiting_car": null,
            "ts": {"at": 1}
        }))
        .expect("decode");
        assert_eq!(snap, Snapshot::default());
    }

    #[test]
    fn integral_float_free_count_counts() {
        let snap = Snapshot::from_value(json!({"free_count": 0.0})).expect("decode");
        assert_eq!(snap.free_count, Some(0));
        let snap = Snapshot::from_value(json!({"free_count": 1.5})).expect("decode");
        assert_eq!(snap.free_count, None);
    }

    #[test]
    fn rfc3339_timestamp_and_numeric_car_id() {
        let snap = Snapshot::from_value(json!({
            "ts": "2024-05-01T12:30:00Z",
            "gate_waiting_car": 42
        }))
        .expect("decode");
        assert_eq!(snap.ts.map(|t| t.to_rfc3339()), Some("2024-05-01T12:30:00+00:00".to_string()));
        assert_eq!(snap.gate_waiting_car.as_deref(), Some("42"));
    }

    #[test]
    fn gate_label_is_kept() {
        let snap = Snapshot::from_value(json!({"gate": {"col": 4, "label": "north"}})).expect("decode");
        let gate = snap.gate.expect("gate");
        assert_eq!(gate.col, Some(4));
        assert_eq!(gate.label, "north");
    }

    #[test]
    fn non_object_body_is_malformed() {
        assert!(matches!(Snapshot::from_value(json!([1, 2])), Err(FetchError::Malformed(_))));
        assert!(matches!(Snapshot::from_slice(b"<html>oops</html>"), Err(FetchError::Malformed(_))));
    }
}
