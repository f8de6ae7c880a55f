/*
 * Responsibility
 * - EventMessageDetail (chat / channel の system event) の多態 decode / encode
 * - initiator / members は IdentitySet 系でさらに多態なので Value のまま持つ
 */
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{
    DecodeError, RawVariant, as_object, decode_variant, discriminator, encode_variant, is_variant,
};

const TARGET: &str = "EventMessageDetail";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersLeftEventMessageDetail {
    /// Initiator of the event.
    #[serde(default)]
    pub initiator: Value,

    /// Members who left the chat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Value>>,

    #[serde(rename = "@odata.id", default, skip_serializing_if = "Option::is_none")]
    pub odata_id: Option<String>,

    #[serde(rename = "@odata.type", default, skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,

    #[serde(skip)]
    pub omit_discriminated_value: bool,
}

impl MembersLeftEventMessageDetail {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.membersLeftEventMessageDetail";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelUnsetAsFavoriteByDefaultEventMessageDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    #[serde(default)]
    pub initiator: Value,

    #[serde(rename = "@odata.id", default, skip_serializing_if = "Option::is_none")]
    pub odata_id: Option<String>,

    #[serde(rename = "@odata.type", default, skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,

    #[serde(skip)]
    pub omit_discriminated_value: bool,
}

impl ChannelUnsetAsFavoriteByDefaultEventMessageDetail {
    pub const ODATA_TYPE: &'static str =
        "#microsoft.graph.channelUnsetAsFavoriteByDefaultEventMessageDetail";
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventMessageDetail {
    MembersLeft(MembersLeftEventMessageDetail),
    ChannelUnsetAsFavoriteByDefault(ChannelUnsetAsFavoriteByDefaultEventMessageDetail),
    Raw(RawVariant),
}

impl EventMessageDetail {
    pub fn decode(input: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(input)
            .map_err(|source| DecodeError::Json { target: TARGET, source })?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let fields = as_object(value, TARGET)?;
        let odata_type = discriminator(&fields);

        if is_variant(&odata_type, MembersLeftEventMessageDetail::ODATA_TYPE) {
            return decode_variant(fields, "MembersLeftEventMessageDetail").map(Self::MembersLeft);
        }

        if is_variant(
            &odata_type,
            ChannelUnsetAsFavoriteByDefaultEventMessageDetail::ODATA_TYPE,
        ) {
            return decode_variant(fields, "ChannelUnsetAsFavoriteByDefaultEventMessageDetail")
                .map(Self::ChannelUnsetAsFavoriteByDefault);
        }

        tracing::debug!(odata_type = %odata_type, "unrecognised EventMessageDetail discriminator");
        Ok(Self::Raw(RawVariant {
            odata_type,
            values: fields,
        }))
    }

    pub fn to_value(&self) -> Result<Value, DecodeError> {
        match self {
            EventMessageDetail::MembersLeft(v) => encode_variant(
                v,
                MembersLeftEventMessageDetail::ODATA_TYPE,
                v.omit_discriminated_value,
                "MembersLeftEventMessageDetail",
            ),
            EventMessageDetail::ChannelUnsetAsFavoriteByDefault(v) => encode_variant(
                v,
                ChannelUnsetAsFavoriteByDefaultEventMessageDetail::ODATA_TYPE,
                v.omit_discriminated_value,
                "ChannelUnsetAsFavoriteByDefaultEventMessageDetail",
            ),
            EventMessageDetail::Raw(raw) => Ok(Value::Object(raw.values.clone())),
        }
    }

    /// The discriminator this value was decoded from, or would be encoded with.
    pub fn odata_type(&self) -> &str {
        match self {
            EventMessageDetail::MembersLeft(_) => MembersLeftEventMessageDetail::ODATA_TYPE,
            EventMessageDetail::ChannelUnsetAsFavoriteByDefault(_) => {
                ChannelUnsetAsFavoriteByDefaultEventMessageDetail::ODATA_TYPE
            }
            EventMessageDetail::Raw(raw) => &raw.odata_type,
        }
    }
}

impl Serialize for EventMessageDetail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EventMessageDetail {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}
