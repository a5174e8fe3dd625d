use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::validate::{Validate, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("no value given for required property {property}")]
    MissingRequired {
        model: &'static str,
        property: &'static str,
    },

    #[error("data failed to match schemas in anyOf({union})")]
    NoSchemaMatched { union: &'static str },

    #[error("failed to decode {model}: {source}")]
    Decode {
        model: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {model}: {source}")]
    Encode {
        model: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{model} did not encode to a JSON object")]
    NotAnObject { model: &'static str },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, CodecError>;

/// A schema-derived JSON object type.
///
/// The struct itself is the plain data shape (serde derive with
/// `deny_unknown_fields`); the functions in this module are the validating
/// codec that runs the required-property pass before handing the object to
/// that derive.
pub trait Model: Serialize + DeserializeOwned {
    const NAME: &'static str;
    /// Wire keys the schema marks required, in declaration order.
    const REQUIRED: &'static [&'static str];
}

macro_rules! impl_model {
    ($ty:ident) => {
        $crate::codec::impl_model!($ty, []);
    };
    ($ty:ident, [$($required:literal),* $(,)?]) => {
        impl $crate::codec::Model for $ty {
            const NAME: &'static str = stringify!($ty);
            const REQUIRED: &'static [&'static str] = &[$($required),*];
        }
    };
}

pub(crate) use impl_model;

pub fn decode<T: Model>(bytes: &[u8]) -> Result<T> {
    let object: Map<String, Value> = serde_json::from_slice(bytes).map_err(|source| {
        CodecError::Decode {
            model: T::NAME,
            source,
        }
    })?;
    decode_object(object)
}

pub fn decode_str<T: Model>(s: &str) -> Result<T> {
    decode(s.as_bytes())
}

pub fn decode_value<T: Model>(value: Value) -> Result<T> {
    let object: Map<String, Value> =
        serde_json::from_value(value).map_err(|source| CodecError::Decode {
            model: T::NAME,
            source,
        })?;
    decode_object(object)
}

/// Decodes and then runs the pattern checks.
pub fn decode_validated<T: Model + Validate>(bytes: &[u8]) -> Result<T> {
    let model: T = decode(bytes)?;
    model.validate()?;
    tracing::debug!(model = T::NAME, "payload passed validation");
    Ok(model)
}

fn decode_object<T: Model>(object: Map<String, Value>) -> Result<T> {
    tracing::trace!(model = T::NAME, keys = object.len(), "decoding");
    check_required::<T>(&object)?;
    serde_json::from_value(Value::Object(object)).map_err(|source| CodecError::Decode {
        model: T::NAME,
        source,
    })
}

/// Presence only: a required key holding the wrong type passes here and
/// fails in the strict decode that follows.
pub fn check_required<T: Model>(object: &Map<String, Value>) -> Result<()> {
    match T::REQUIRED.iter().find(|key| !object.contains_key(**key)) {
        Some(property) => Err(CodecError::MissingRequired {
            model: T::NAME,
            property: *property,
        }),
        None => Ok(()),
    }
}

pub fn encode<T: Model>(model: &T) -> Result<Vec<u8>> {
    tracing::trace!(model = T::NAME, "encoding");
    serde_json::to_vec(model).map_err(|source| CodecError::Encode {
        model: T::NAME,
        source,
    })
}

pub fn encode_string<T: Model>(model: &T) -> Result<String> {
    tracing::trace!(model = T::NAME, "encoding");
    serde_json::to_string(model).map_err(|source| CodecError::Encode {
        model: T::NAME,
        source,
    })
}

pub fn encode_pretty<T: Model>(model: &T) -> Result<String> {
    serde_json::to_string_pretty(model).map_err(|source| CodecError::Encode {
        model: T::NAME,
        source,
    })
}

pub fn encode_value<T: Model>(model: &T) -> Result<Value> {
    serde_json::to_value(model).map_err(|source| CodecError::Encode {
        model: T::NAME,
        source,
    })
}

/// Key/value view of a model in declaration order: required keys always,
/// optional keys only when present.
pub fn to_map<T: Model>(model: &T) -> Result<Map<String, Value>> {
    match encode_value(model)? {
        Value::Object(map) => Ok(map),
        _ => Err(CodecError::NotAnObject { model: T::NAME }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppSessionContext, BatOffsetInfo, Flows, MediaComponent};
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_bat_offset_info_minimal_round_trip() {
        let info: BatOffsetInfo = decode_str(r#"{"ranBatOffsetNotif": 5}"#).unwrap();
        assert_eq!(info.ran_bat_offset_notif, 5);
        assert!(info.adj_period.is_none());
        assert!(info.flows.is_none());
        assert_eq!(encode_string(&info).unwrap(), r#"{"ranBatOffsetNotif":5}"#);
    }

    #[test]
    fn test_missing_required_property_named() {
        let err = decode_str::<BatOffsetInfo>("{}").unwrap_err();
        assert_matches!(
            err,
            CodecError::MissingRequired { model: "BatOffsetInfo", property: "ranBatOffsetNotif" }
        );
        assert_eq!(
            err.to_string(),
            "no value given for required property ranBatOffsetNotif"
        );
    }

    #[test]
    fn test_required_check_ignores_type() {
        // Present with the wrong type: presence passes, strict decode fails.
        let err = decode_str::<BatOffsetInfo>(r#"{"ranBatOffsetNotif": "five"}"#).unwrap_err();
        assert_matches!(err, CodecError::Decode { model: "BatOffsetInfo", .. });
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = decode_str::<Flows>(r#"{"medCompN": 3, "extraField": 1}"#).unwrap_err();
        assert_matches!(err, CodecError::Decode { model: "Flows", .. });
        assert!(err.to_string().contains("unknown field `extraField`"));
    }

    #[test]
    fn test_unknown_field_rejected_in_nested_model() {
        let body = json!({
            "ranBatOffsetNotif": 1,
            "flows": [{ "medCompN": 1, "bogus": true }]
        });
        assert!(decode_value::<BatOffsetInfo>(body).is_err());
    }

    #[test]
    fn test_each_required_key_omitted_in_isolation() {
        let full = json!({ "medCompN": 1, "fNums": [1, 2] });
        assert!(decode_value::<Flows>(full.clone()).is_ok());

        for key in Flows::REQUIRED {
            let mut body = full.clone();
            body.as_object_mut().unwrap().remove(*key);
            let err = decode_value::<Flows>(body).unwrap_err();
            assert_matches!(err, CodecError::MissingRequired { property, .. } if property == *key);
        }
    }

    #[test]
    fn test_non_object_input_is_json_error() {
        let err = decode_str::<Flows>("[1, 2, 3]").unwrap_err();
        assert_matches!(err, CodecError::Decode { model: "Flows", .. });
    }

    #[test]
    fn test_empty_model_decodes_from_empty_object() {
        let ctx: AppSessionContext = decode_str("{}").unwrap();
        assert_eq!(ctx, AppSessionContext::default());
        assert_eq!(encode_string(&ctx).unwrap(), "{}");
    }

    #[test]
    fn test_to_map_preserves_declaration_order() {
        let mut flows = Flows::new(2);
        flows.cont_vers = Some(vec![1]);
        flows.f_nums = Some(vec![3, 4]);
        let map = to_map(&flows).unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["contVers", "fNums", "medCompN"]);
    }

    #[test]
    fn test_decode_validated_rejects_bad_bitrate() {
        let body = br#"{"medCompN": 1, "marBwDl": "fast"}"#;
        assert!(decode::<MediaComponent>(body).is_ok());
        let err = decode_validated::<MediaComponent>(body).unwrap_err();
        assert_matches!(err, CodecError::Invalid(_));
    }
}
