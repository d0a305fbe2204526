//! Canonical spot status and the normalizer that maps raw per-spot records
//! onto it.
//!
//! Records coming from the endpoint are untyped: the status may live under
//! `status`, `Status` or `state`, in any letter case. Nothing outside this
//! module ever sees the raw string.

use serde_json::Value;
use std::fmt;

/// Field names consulted for a spot's status, in priority order.
const STATUS_FIELDS: [&str; 3] = ["status", "Status", "state"];

/// The four canonical spot states. Exactly one applies to every tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpotStatus {
    Free,
    Waiting,
    WrongPark,
    Occupied,
}

impl SpotStatus {
    /// Canonical label shown under a tile.
    pub fn label(&self) -> &'static str {
        match self {
            SpotStatus::Free => "FREE",
            SpotStatus::Waiting => "WAITING",
            SpotStatus::WrongPark => "WRONG_PARK",
            SpotStatus::Occupied => "OCCUPIED",
        }
    }

    /// Classify an already case-folded status string.
    ///
    /// Unknown values are treated as occupied so the display never reports a
    /// spot as available when it cannot tell.
    pub fn classify(upper: &str) -> Self {
        match upper {
            "FREE" => SpotStatus::Free,
            "WAITING" | "PENDING" => SpotStatus::Waiting,
            "WRONG_PARK" => SpotStatus::WrongPark,
            _ => SpotStatus::Occupied,
        }
    }
}

impl fmt::Display for SpotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// JSON truthiness: null, false, 0 and "" count as absent.
fn is_present(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Resolve the canonical status of a spot record.
///
/// `None`, non-object records and records without any recognised status
/// field all normalize to [`SpotStatus::Free`].
pub fn normalize(record: Option<&Value>) -> SpotStatus {
    let raw = record
        .and_then(Value::as_object)
        .and_then(|obj| {
            STATUS_FIELDS
                .iter()
                .find_map(|field| obj.get(*field).filter(|v| is_present(v)))
        });

    match raw {
        None => SpotStatus::Free,
        Some(Value::String(s)) => SpotStatus::classify(&s.to_uppercase()),
        Some(other) => SpotStatus::classify(&other.to_string().to_uppercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_record_is_free() {
        assert_eq!(normalize(None), SpotStatus::Free);
        assert_eq!(normalize(Some(&Value::Null)), SpotStatus::Free);
        assert_eq!(normalize(Some(&json!({}))), SpotStatus::Free);
    }

    #[test]
    fn field_priority_status_then_capitalised_then_state() {
        let rec = json!({"status": "free", "Status": "OCCUPIED", "state": "WAITING"});
        assert_eq!(normalize(Some(&rec)), SpotStatus::Free);

        let rec = json!({"Status": "wrong_park", "state": "FREE"});
        assert_eq!(normalize(Some(&rec)), SpotStatus::WrongPark);

        let rec = json!({"state": "pending"});
        assert_eq!(normalize(Some(&rec)), SpotStatus::Waiting);
    }

    #[test]
    fn empty_or_null_field_falls_through() {
        let rec = json!({"status": "", "Status": null, "state": "occupied"});
        assert_eq!(normalize(Some(&rec)), SpotStatus::Occupied);
    }

    #[test]
    fn state_only_matches_status_only() {
        for raw in ["FREE", "waiting", "Pending", "WRONG_PARK", "OCCUPIED", "parked"] {
            let a = normalize(Some(&json!({ "status": raw })));
            let b = normalize(Some(&json!({ "state": raw })));
            assert_eq!(a, b, "mismatch for {raw}");
        }
    }

    #[test]
    fn unknown_and_non_string_values_are_occupied() {
        assert_eq!(normalize(Some(&json!({"status": "PARKED"}))), SpotStatus::Occupied);
        assert_eq!(normalize(Some(&json!({"status": 7}))), SpotStatus::Occupied);
        assert_eq!(normalize(Some(&json!({"status": true}))), SpotStatus::Occupied);
    }

    #[test]
    fn non_object_record_is_free() {
        assert_eq!(normalize(Some(&json!("OCCUPIED"))), SpotStatus::Free);
        assert_eq!(normalize(Some(&json!(3))), SpotStatus::Free);
    }

    #[test]
    fn labels_are_canonical() {
        assert_eq!(SpotStatus::classify("PENDING").label(), "WAITING");
        assert_eq!(SpotStatus::WrongPark.to_string(), "WRONG_PARK");
    }
}
