/*
 * Responsibility
 * - `@odata.type` で判別する多態 payload の共通処理
 *   - discriminator を先に読む → 該当 variant の decoder へ
 *   - 未知 / 欠落の discriminator は RawVariant に元の field map ごと保持する
 *     (discriminator が未知というだけで decode を失敗させない)
 * - encode 時の `@odata.type` 付与
 */
pub mod event_message_detail;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use thiserror::Error;

pub use event_message_detail::EventMessageDetail;

pub const ODATA_TYPE: &str = "@odata.type";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unmarshaling {target}: {source}")]
    Json {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("unmarshaling {target}: expected a JSON object")]
    NotAnObject { target: &'static str },
}

/// A payload whose discriminator matched no known variant.
/// Only produced by decoding; it is re-emitted verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct RawVariant {
    /// The discriminator as received, empty when the payload had none.
    pub odata_type: String,
    pub values: Map<String, Value>,
}

/// Reads the discriminator. Non-string values are rendered as JSON text.
pub fn discriminator(fields: &Map<String, Value>) -> String {
    match fields.get(ODATA_TYPE) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn is_variant(discriminator: &str, odata_type: &str) -> bool {
    discriminator.eq_ignore_ascii_case(odata_type)
}

pub(crate) fn as_object(value: Value, target: &'static str) -> Result<Map<String, Value>, DecodeError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(DecodeError::NotAnObject { target }),
    }
}

pub(crate) fn decode_variant<T: DeserializeOwned>(
    fields: Map<String, Value>,
    target: &'static str,
) -> Result<T, DecodeError> {
    serde_json::from_value(Value::Object(fields)).map_err(|source| DecodeError::Json { target, source })
}

/// Serializes a known variant, stamping its own discriminator unless `omit` is set.
pub(crate) fn encode_variant<T: Serialize>(
    model: &T,
    odata_type: &'static str,
    omit: bool,
    target: &'static str,
) -> Result<Value, DecodeError> {
    let value = serde_json::to_value(model).map_err(|source| DecodeError::Json { target, source })?;
    let mut fields = as_object(value, target)?;
    if !omit {
        fields.insert(ODATA_TYPE.to_string(), Value::String(odata_type.to_string()));
    }
    Ok(Value::Object(fields))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn discriminator_handles_missing_and_non_string() {
        let missing = as_object(json!({"id": "1"}), "test").unwrap();
        assert_eq!(discriminator(&missing), "");

        let numeric = as_object(json!({"@odata.type": 7}), "test").unwrap();
        assert_eq!(discriminator(&numeric), "7");
    }

    #[test]
    fn variant_match_ignores_case() {
        assert!(is_variant(
            "#Microsoft.Graph.MembersLeftEventMessageDetail",
            "#microsoft.graph.membersLeftEventMessageDetail"
        ));
        assert!(!is_variant("", "#microsoft.graph.membersLeftEventMessageDetail"));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let err = as_object(json!([1, 2]), "EventMessageDetail").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unmarshaling EventMessageDetail: expected a JSON object"
        );
    }
}
