use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, EnumIter, EnumString};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "boolish")]
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user: Option<Principal>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Uniform list envelope returned by every collection endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub pages: u64,
}

/// The nine BACnet point collections exposed by the gateway. The strum
/// string is the REST path segment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, AsRefStr, EnumIter,
)]
pub enum ObjectType {
    #[strum(serialize = "analog-inputs")]
    AnalogInput,
    #[strum(serialize = "analog-outputs")]
    AnalogOutput,
    #[strum(serialize = "analog-values")]
    AnalogValue,
    #[strum(serialize = "binary-inputs")]
    BinaryInput,
    #[strum(serialize = "binary-outputs")]
    BinaryOutput,
    #[strum(serialize = "binary-values")]
    BinaryValue,
    #[strum(serialize = "multi-state-inputs")]
    MultiStateInput,
    #[strum(serialize = "multi-state-outputs")]
    MultiStateOutput,
    #[strum(serialize = "multi-state-values")]
    MultiStateValue,
}

impl ObjectType {
    /// Key used by the `/stats` endpoint for this collection.
    pub fn stats_key(&self) -> &'static str {
        match self {
            Self::AnalogInput => "analog_input",
            Self::AnalogOutput => "analog_output",
            Self::AnalogValue => "analog_value",
            Self::BinaryInput => "binary_input",
            Self::BinaryOutput => "binary_output",
            Self::BinaryValue => "binary_value",
            Self::MultiStateInput => "multi_state_input",
            Self::MultiStateOutput => "multi_state_output",
            Self::MultiStateValue => "multi_state_value",
        }
    }

    pub fn from_stats_key(key: &str) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().find(|object_type| object_type.stats_key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventState {
    Normal,
    Fault,
    Offnormal,
    HighLimit,
    LowLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryPv {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Normal,
    Reverse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalogPoint {
    pub id: i64,
    pub object_identifier: i64,
    pub object_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub present_value: f64,
    pub status_flags: String,
    pub event_state: EventState,
    #[serde(deserialize_with = "boolish")]
    pub out_of_service: bool,
    pub units: String,
    #[serde(default)]
    pub relinquish_default: Option<f64>,
    #[serde(default)]
    pub current_command_priority: Option<u8>,
    #[serde(default)]
    pub cov_increment: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalogPointPayload {
    pub object_identifier: i64,
    pub object_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub present_value: f64,
    pub status_flags: String,
    pub event_state: EventState,
    pub out_of_service: bool,
    pub units: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relinquish_default: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_command_priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cov_increment: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryPoint {
    pub id: i64,
    pub object_identifier: i64,
    pub object_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub present_value: BinaryPv,
    pub status_flags: String,
    pub event_state: EventState,
    #[serde(deserialize_with = "boolish")]
    pub out_of_service: bool,
    pub polarity: Polarity,
    #[serde(default)]
    pub relinquish_default: Option<BinaryPv>,
    #[serde(default)]
    pub current_command_priority: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryPointPayload {
    pub object_identifier: i64,
    pub object_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub present_value: BinaryPv,
    pub status_flags: String,
    pub event_state: EventState,
    pub out_of_service: bool,
    pub polarity: Polarity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relinquish_default: Option<BinaryPv>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_command_priority: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiStatePoint {
    pub id: i64,
    pub object_identifier: i64,
    pub object_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub present_value: u32,
    pub status_flags: String,
    pub event_state: EventState,
    #[serde(deserialize_with = "boolish")]
    pub out_of_service: bool,
    pub number_of_states: u32,
    #[serde(default)]
    pub state_text: Option<Vec<String>>,
    #[serde(default)]
    pub relinquish_default: Option<u32>,
    #[serde(default)]
    pub current_command_priority: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiStatePointPayload {
    pub object_identifier: i64,
    pub object_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub present_value: u32,
    pub status_flags: String,
    pub event_state: EventState,
    pub out_of_service: bool,
    pub number_of_states: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relinquish_default: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_command_priority: Option<u8>,
}

/// Columns shared by all nine collections; `present_value` stays untyped
/// because its JSON type differs per family. Family-specific columns are
/// kept in `extra` so list views and exports lose nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSummary {
    pub id: i64,
    pub object_identifier: i64,
    pub object_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub present_value: Value,
    pub status_flags: String,
    pub event_state: EventState,
    #[serde(deserialize_with = "boolish")]
    pub out_of_service: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUserRequest {
    pub name: String,
    pub display_name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub object_counts: BTreeMap<String, i64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

// The gateway's MySQL tinyint columns come back as 0/1 rather than JSON
// booleans; accept both.
fn boolish<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct BoolishVisitor;

    impl de::Visitor<'_> for BoolishVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a boolean or a 0/1 integer")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<bool, E> {
            Ok(value != 0)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<bool, E> {
            Ok(value != 0)
        }
    }

    deserializer.deserialize_any(BoolishVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn object_type_paths_match_rest_segments() {
        assert_eq!(ObjectType::AnalogInput.as_ref(), "analog-inputs");
        assert_eq!(ObjectType::MultiStateValue.as_ref(), "multi-state-values");
        assert_eq!(
            "binary-outputs".parse::<ObjectType>().ok(),
            Some(ObjectType::BinaryOutput)
        );
    }

    #[test]
    fn object_type_stats_keys_round_trip() {
        for object_type in ObjectType::iter() {
            assert_eq!(
                ObjectType::from_stats_key(object_type.stats_key()),
                Some(object_type)
            );
        }
    }

    #[test]
    fn event_state_uses_backend_strings() {
        assert_eq!(
            serde_json::to_string(&EventState::HighLimit).unwrap(),
            "\"highLimit\""
        );
        assert_eq!(
            serde_json::from_str::<EventState>("\"offnormal\"").unwrap(),
            EventState::Offnormal
        );
    }

    #[test]
    fn login_response_without_token_parses() {
        let raw =
            r#"{"success":true,"user":{"id":1,"is_admin":false},"message":"Login successful"}"#;
        let response: LoginResponse = serde_json::from_str(raw).unwrap();
        assert!(response.success);
        assert_eq!(response.token, None);
        assert_eq!(response.user.unwrap().id, 1);
    }

    #[test]
    fn login_failure_carries_error_message() {
        let raw = r#"{"success":false,"error":"Invalid username or password"}"#;
        let response: LoginResponse = serde_json::from_str(raw).unwrap();
        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("Invalid username or password")
        );
        assert!(response.user.is_none());
    }

    #[test]
    fn principal_accepts_tinyint_admin_flag() {
        let raw =
            r#"{"id":7,"name":"ops","display_name":"Ops","email":"ops@example.com","is_admin":1}"#;
        let principal: Principal = serde_json::from_str(raw).unwrap();
        assert!(principal.is_admin);
    }

    #[test]
    fn point_summary_keeps_family_columns() {
        let raw = r#"{
            "id": 3,
            "object_identifier": 12,
            "object_name": "supply-temp",
            "present_value": 21.5,
            "status_flags": "0000",
            "event_state": "normal",
            "out_of_service": 0,
            "units": "degreesCelsius",
            "cov_increment": 0.5
        }"#;
        let summary: PointSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(summary.object_name, "supply-temp");
        assert!(!summary.out_of_service);
        assert_eq!(
            summary.extra.get("units").and_then(Value::as_str),
            Some("degreesCelsius")
        );
    }

    #[test]
    fn list_envelope_parses() {
        let raw = r#"{
            "data": [{"id":1,"name":"admin","display_name":"Admin","email":"a@b.c","is_admin":true}],
            "pagination": {"page":1,"page_size":20,"total":1,"pages":1}
        }"#;
        let page: Page<Principal> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.pagination.pages, 1);
    }

    #[test]
    fn update_request_skips_unset_fields() {
        let update = UpdateUserRequest {
            display_name: Some("New Name".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"display_name":"New Name"}"#
        );
    }
}
