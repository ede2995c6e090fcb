//! Pluggable serialization support
//!
//! Model types do not call a JSON library directly; they go through the
//! [`Codec`] trait so the codec can be swapped for a fake in tests.
//! [`JsonCodec`] is the production implementation.

use serde::{Serialize, de::DeserializeOwned};

use crate::error::YucaError;

/// Serialization capability injected into model types.
pub trait Codec {
    /// Decode `data` into a value of type `T`.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, YucaError>;

    /// Encode `value` into its textual wire form.
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, YucaError>;
}

/// JSON codec backed by serde_json.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, YucaError> {
        serde_json::from_slice(data).map_err(|err| {
            tracing::debug!("json decode failed: {}", err);
            YucaError::Decode(err.to_string())
        })
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<String, YucaError> {
        serde_json::to_string(value).map_err(|err| YucaError::Encode(err.to_string()))
    }
}

/// Parse `data` as JSON into `target`, overwriting all of its fields.
pub fn load_from_json<T: DeserializeOwned>(target: &mut T, data: &[u8]) -> Result<(), YucaError> {
    *target = JsonCodec.decode(data)?;
    Ok(())
}

/// Serialize `value` to a JSON string.
pub fn convert_to_json<T: Serialize>(value: &T) -> Result<String, YucaError> {
    JsonCodec.encode(value)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Pair {
        key: String,
        value: String,
    }

    #[test]
    fn test_decode() {
        let pair: Pair = JsonCodec
            .decode(br#"{"key":"site_name","value":"Yuca"}"#)
            .unwrap();
        assert_eq!(pair.key, "site_name");
        assert_eq!(pair.value, "Yuca");
    }

    #[test]
    fn test_decode_malformed() {
        let result: Result<Pair, _> = JsonCodec.decode(b"{not json");
        assert!(matches!(result, Err(YucaError::Decode(_))));
    }

    #[test]
    fn test_decode_wrong_shape() {
        let result: Result<Pair, _> = JsonCodec.decode(br#"{"key":1}"#);
        assert!(matches!(result, Err(YucaError::Decode(_))));
    }

    #[test]
    fn test_encode() {
        let pair = Pair {
            key: "site_name".to_string(),
            value: "Yuca".to_string(),
        };
        assert_eq!(
            JsonCodec.encode(&pair).unwrap(),
            r#"{"key":"site_name","value":"Yuca"}"#
        );
    }

    #[test]
    fn test_load_from_json_overwrites() {
        let mut pair = Pair {
            key: "old".to_string(),
            value: "old".to_string(),
        };
        load_from_json(&mut pair, br#"{"key":"new","value":"fresh"}"#).unwrap();
        assert_eq!(pair.key, "new");
        assert_eq!(pair.value, "fresh");
    }

    #[test]
    fn test_load_from_json_malformed_keeps_target() {
        let mut pair = Pair {
            key: "kept".to_string(),
            value: String::new(),
        };
        assert!(load_from_json(&mut pair, b"\"").is_err());
        assert_eq!(pair.key, "kept");
    }

    #[test]
    fn test_convert_to_json() {
        let pair = Pair::default();
        assert_eq!(convert_to_json(&pair).unwrap(), r#"{"key":"","value":""}"#);
    }
}
