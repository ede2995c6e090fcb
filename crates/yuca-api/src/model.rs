//! Application option models
//!
//! An option is a single named configuration value, stored as text. Options
//! travel in bulk inside the `{"options": [...]}` envelope. Both types are
//! plain value records; serialization goes through the `Codec` capability
//! from `yuca-common`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use yuca_common::{Codec, JsonCodec, YucaError};

/// A single named configuration value.
///
/// `id` is assigned by the persistence layer; a record that has not been
/// stored yet carries no id. On the wire a missing id is encoded as `0` for
/// compatibility with older clients.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionInfo {
    #[serde(default, with = "persistent_id")]
    pub id: Option<i64>,
    pub uuid: String,
    pub key: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OptionInfo {
    /// Create an unpersisted option with a fresh uuid and current timestamps.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id: None,
            uuid: Uuid::new_v4().to_string(),
            key: key.into(),
            value: value.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// True once the persistence layer has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Replace the stored value and bump the update timestamp.
    pub fn update_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.updated_at = Utc::now();
    }

    /// Parse `data` as JSON into the receiver, overwriting all fields.
    pub fn load_from_json(&mut self, data: &[u8]) -> Result<(), YucaError> {
        self.load_with(&JsonCodec, data)
    }

    /// Parse `data` with the given codec, overwriting all fields.
    pub fn load_with<C: Codec>(&mut self, codec: &C, data: &[u8]) -> Result<(), YucaError> {
        *self = codec.decode(data)?;
        Ok(())
    }

    /// Serialize the receiver to a JSON string.
    pub fn convert_to_json(&self) -> Result<String, YucaError> {
        self.convert_with(&JsonCodec)
    }

    /// Serialize the receiver with the given codec.
    pub fn convert_with<C: Codec>(&self, codec: &C) -> Result<String, YucaError> {
        codec.encode(self)
    }
}

/// JSON envelope for bulk transfer of options.
///
/// Array order is preserved as-is; there is no dedup. Go encoders emit
/// `null` for a nil slice, so a `null` or missing `options` member reads
/// back as the empty list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionList {
    #[serde(default, deserialize_with = "nullable_options")]
    pub options: Vec<OptionInfo>,
}

impl OptionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Append an option, keeping insertion order.
    pub fn push(&mut self, option: OptionInfo) {
        self.options.push(option);
    }

    /// First option with the given key, if any.
    pub fn get(&self, key: &str) -> Option<&OptionInfo> {
        self.options.iter().find(|option| option.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionInfo> {
        self.options.iter()
    }

    /// Parse `data` as JSON into the receiver, overwriting all fields.
    pub fn load_from_json(&mut self, data: &[u8]) -> Result<(), YucaError> {
        self.load_with(&JsonCodec, data)
    }

    /// Parse `data` with the given codec, overwriting all fields.
    pub fn load_with<C: Codec>(&mut self, codec: &C, data: &[u8]) -> Result<(), YucaError> {
        *self = codec.decode(data)?;
        Ok(())
    }

    /// Serialize the receiver to a JSON string.
    pub fn convert_to_json(&self) -> Result<String, YucaError> {
        self.convert_with(&JsonCodec)
    }

    /// Serialize the receiver with the given codec.
    pub fn convert_with<C: Codec>(&self, codec: &C) -> Result<String, YucaError> {
        codec.encode(self)
    }
}

impl From<Vec<OptionInfo>> for OptionList {
    fn from(options: Vec<OptionInfo>) -> Self {
        Self { options }
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a OptionInfo;
    type IntoIter = std::slice::Iter<'a, OptionInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Wire adapter for the persistence id.
///
/// Older clients expect `"id": int` with `0` meaning "not persisted", so
/// `None` is written as `0` and a wire `0` reads back as `None`.
mod persistent_id {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(id: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(id.unwrap_or(0))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        let raw = i64::deserialize(deserializer)?;

        Ok((raw != 0).then_some(raw))
    }
}

fn nullable_options<'de, D>(deserializer: D) -> Result<Vec<OptionInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<OptionInfo>>::deserialize(deserializer)?.unwrap_or_default())
}
