//! `anyOf` / `oneOf` values that encode as one of their alternatives rather
//! than as an object wrapping it.

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::{CodecError, Result};

/// Attempts to read a raw value as one alternative of a union.
pub type Alternative<U> = fn(&Value) -> Option<U>;

pub trait AnyOf: Sized + 'static {
    const NAME: &'static str;
    /// Tried in order; the first one that accepts the value wins.
    const ALTERNATIVES: &'static [Alternative<Self>];

    /// No alternative populated.
    fn empty() -> Self;

    /// The populated alternative in its own JSON form, `None` when empty.
    fn encode(&self) -> Option<Value>;
}

/// Decodes `raw` as `T`, refusing results that re-encode to `{}`.
pub fn try_alternative<T: DeserializeOwned + Serialize>(raw: &Value) -> Option<T> {
    let candidate: T = serde_json::from_value(raw.clone()).ok()?;
    match serde_json::to_value(&candidate) {
        Ok(Value::Object(map)) if map.is_empty() => None,
        Ok(_) => Some(candidate),
        Err(_) => None,
    }
}

/// `{}` and `null` carry no information and leave the union empty.
fn is_empty_raw(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

pub fn decode_value<U: AnyOf>(raw: Value) -> Result<U> {
    if is_empty_raw(&raw) {
        tracing::debug!(union = U::NAME, "no information in payload, leaving union empty");
        return Ok(U::empty());
    }

    U::ALTERNATIVES
        .iter()
        .find_map(|alternative| alternative(&raw))
        .ok_or(CodecError::NoSchemaMatched { union: U::NAME })
}

/// Like [`decode_value`], also accepting a zero-length body as empty.
pub fn decode<U: AnyOf>(bytes: &[u8]) -> Result<U> {
    if bytes.is_empty() {
        return Ok(U::empty());
    }
    let raw: Value = serde_json::from_slice(bytes).map_err(|source| CodecError::Decode {
        model: U::NAME,
        source,
    })?;
    decode_value(raw)
}

/// The populated alternative, or nothing at all for an empty union.
pub fn encode<U: AnyOf>(union: &U) -> Result<Option<Vec<u8>>> {
    union
        .encode()
        .map(|value| {
            serde_json::to_vec(&value).map_err(|source| CodecError::Encode {
                model: U::NAME,
                source,
            })
        })
        .transpose()
}

/// `Serialize` body for union types.
///
/// An empty union writes `{}` so it reads back as the empty union in any
/// field shape, `Option` and `Nullable` included.
pub fn serialize<U: AnyOf, S: Serializer>(union: &U, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    match union.encode() {
        Some(value) => value.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

/// `Deserialize` body for union types.
pub fn deserialize<'de, U: AnyOf, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<U, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    decode_value(raw).map_err(D::Error::custom)
}

/// Declares an open enumeration: an `anyOf` whose only implemented
/// alternative is a plain string. Documented values are exposed as associated
/// constants, and anything else still round-trips.
macro_rules! string_union {
    (
        $(#[$meta:meta])*
        $name:ident { $($konst:ident => $wire:literal),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name {
            pub string: Option<String>,
        }

        impl $name {
            $(pub const $konst: &'static str = $wire;)*

            pub const KNOWN_VALUES: &'static [&'static str] = &[$($wire),*];

            pub fn new(value: impl Into<String>) -> Self {
                Self { string: Some(value.into()) }
            }

            pub fn as_str(&self) -> Option<&str> {
                self.string.as_deref()
            }

            pub fn is_empty(&self) -> bool {
                self.string.is_none()
            }

            /// True when the held value is one of the documented ones.
            pub fn is_known(&self) -> bool {
                self.as_str().is_some_and(|value| Self::KNOWN_VALUES.contains(&value))
            }

            fn string_alternative(raw: &serde_json::Value) -> Option<Self> {
                $crate::union::try_alternative::<String>(raw).map(Self::new)
            }
        }

        impl $crate::union::AnyOf for $name {
            const NAME: &'static str = stringify!($name);
            const ALTERNATIVES: &'static [$crate::union::Alternative<Self>] =
                &[Self::string_alternative];

            fn empty() -> Self {
                Self::default()
            }

            fn encode(&self) -> Option<serde_json::Value> {
                self.string.clone().map(serde_json::Value::String)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                $crate::union::serialize(self, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                $crate::union::deserialize(deserializer)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str().unwrap_or(""))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }
    };
}

pub(crate) use string_union;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AfSigProtocol, MediaSubComponent};
    use assert_matches::assert_matches;
    use serde_json::json;

    /// Two alternatives that overlap on integers.
    #[derive(Debug, PartialEq)]
    enum Overlap {
        Empty,
        Narrow(u8),
        Wide(i64),
    }

    impl Overlap {
        fn narrow(raw: &Value) -> Option<Self> {
            try_alternative::<u8>(raw).map(Overlap::Narrow)
        }

        fn wide(raw: &Value) -> Option<Self> {
            try_alternative::<i64>(raw).map(Overlap::Wide)
        }
    }

    impl AnyOf for Overlap {
        const NAME: &'static str = "Overlap";
        const ALTERNATIVES: &'static [Alternative<Self>] = &[Self::narrow, Self::wide];

        fn empty() -> Self {
            Overlap::Empty
        }

        fn encode(&self) -> Option<Value> {
            match self {
                Overlap::Empty => None,
                Overlap::Narrow(v) => Some(json!(v)),
                Overlap::Wide(v) => Some(json!(v)),
            }
        }
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Shaped {
        id: String,
    }

    #[test]
    fn test_first_declared_alternative_wins() {
        assert_eq!(decode_value::<Overlap>(json!(7)).unwrap(), Overlap::Narrow(7));
        assert_eq!(decode_value::<Overlap>(json!(700)).unwrap(), Overlap::Wide(700));
    }

    #[test]
    fn test_no_alternative_matches() {
        let err = decode_value::<Overlap>(json!("seven")).unwrap_err();
        assert_matches!(err, CodecError::NoSchemaMatched { union: "Overlap" });
    }

    #[test]
    fn test_degenerate_alternative_rejected() {
        #[derive(Debug, Default, Serialize, Deserialize)]
        struct Hollow {
            #[serde(skip_serializing_if = "Option::is_none")]
            id: Option<String>,
        }
        assert!(try_alternative::<Hollow>(&json!({ "other": 1 })).is_none());
        assert!(try_alternative::<Shaped>(&json!({ "id": "a" })).is_some());
    }

    #[test]
    fn test_sip_round_trips_as_bare_string() {
        let proto: AfSigProtocol = serde_json::from_str(r#""SIP""#).unwrap();
        assert_eq!(proto.string.as_deref(), Some("SIP"));
        assert!(proto.is_known());
        assert_eq!(serde_json::to_string(&proto).unwrap(), r#""SIP""#);
    }

    #[test]
    fn test_unlisted_value_passes_through() {
        let proto: AfSigProtocol = serde_json::from_value(json!("WEBRTC")).unwrap();
        assert_eq!(proto.as_str(), Some("WEBRTC"));
        assert!(!proto.is_known());
        assert_eq!(serde_json::to_value(&proto).unwrap(), json!("WEBRTC"));
    }

    #[test]
    fn test_empty_inputs_leave_union_empty() {
        assert!(decode::<AfSigProtocol>(b"").unwrap().is_empty());
        assert!(decode::<AfSigProtocol>(b"{}").unwrap().is_empty());
        assert!(decode::<AfSigProtocol>(b"null").unwrap().is_empty());
        let empty = decode_value::<AfSigProtocol>(json!({})).unwrap();
        assert_eq!(encode(&empty).unwrap(), None);
    }

    #[test]
    fn test_whitespace_body_is_not_empty_union() {
        let err = decode::<AfSigProtocol>(b"  \n").unwrap_err();
        assert_matches!(err, CodecError::Decode { model: "AfSigProtocol", .. });
    }

    #[test]
    fn test_empty_union_embeds_as_empty_object() {
        assert_eq!(serde_json::to_value(AfSigProtocol::default()).unwrap(), json!({}));
        let back: AfSigProtocol = serde_json::from_value(json!({})).unwrap();
        assert_eq!(back, AfSigProtocol::default());
    }

    #[test]
    fn test_non_string_fails_string_union() {
        let err = decode_value::<AfSigProtocol>(json!(42)).unwrap_err();
        assert_eq!(err.to_string(), "data failed to match schemas in anyOf(AfSigProtocol)");
    }

    #[test]
    fn test_union_error_surfaces_through_model() {
        let body = json!({ "fNum": 1, "afSigProtocol": 3 });
        let err = crate::codec::decode_value::<MediaSubComponent>(body).unwrap_err();
        assert!(err.to_string().contains("anyOf(AfSigProtocol)"));
    }

    #[test]
    fn test_encode_populated_union() {
        let proto = AfSigProtocol::from(AfSigProtocol::NO_INFORMATION);
        assert_eq!(encode(&proto).unwrap(), Some(br#""NO_INFORMATION""#.to_vec()));
    }
}
