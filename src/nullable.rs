use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional property that the schema also marks `nullable: true`.
///
/// The three states map one-to-one onto the wire:
///
/// | state      | encoded as            |
/// |------------|-----------------------|
/// | `Unset`    | key omitted           |
/// | `Null`     | `"key": null`         |
/// | `Value(v)` | `"key": v`            |
///
/// Fields of this type must carry
/// `#[serde(default, skip_serializing_if = "is_absent")]` so that an absent key
/// decodes to `Unset` and `Unset` is never written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    Unset,
    Null,
    Value(T),
}

impl<T> Nullable<T> {
    pub fn set(&mut self, value: T) {
        *self = Nullable::Value(value);
    }

    /// Marks the property for removal: it will be written as `null`.
    pub fn set_null(&mut self) {
        *self = Nullable::Null;
    }

    pub fn unset(&mut self) {
        *self = Nullable::Unset;
    }

    /// True after `set` or `set_null`, false after `unset` or on a fresh container.
    pub fn is_set(&self) -> bool {
        !matches!(self, Nullable::Unset)
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Nullable::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    /// The stored value. `None` for both `Unset` and `Null`; pair with
    /// [`is_set`](Self::is_set) to tell them apart.
    pub fn get(&self) -> Option<&T> {
        match self {
            Nullable::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Nullable::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Nullable::Unset => Nullable::Unset,
            Nullable::Null => Nullable::Null,
            Nullable::Value(value) => Nullable::Value(value),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Nullable<U> {
        match self {
            Nullable::Unset => Nullable::Unset,
            Nullable::Null => Nullable::Null,
            Nullable::Value(value) => Nullable::Value(f(value)),
        }
    }

    /// Collapses to `Option`, losing the unset/null distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Unset
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Nullable::Value(value),
            None => Nullable::Null,
        }
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Nullable::Value(value) => serializer.serialize_some(value),
            Nullable::Null | Nullable::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; absence is handled by `#[serde(default)]`.
        Option::<T>::deserialize(deserializer).map(Nullable::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presence::is_absent;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", deny_unknown_fields)]
    struct Probe {
        #[serde(default, skip_serializing_if = "is_absent")]
        qos_duration: Nullable<i32>,
    }

    #[test]
    fn test_state_transitions() {
        let mut field: Nullable<i32> = Nullable::default();
        assert!(!field.is_set());
        assert_eq!(field.get(), None);

        field.set(7);
        assert!(field.is_set());
        assert_eq!(field.get(), Some(&7));

        field.set_null();
        assert!(field.is_set());
        assert!(field.is_null());
        assert_eq!(field.get(), None);

        field.unset();
        assert!(!field.is_set());
        assert_eq!(field.get(), None);
    }

    #[test]
    fn test_encode_three_states() {
        let unset = Probe { qos_duration: Nullable::Unset };
        assert_eq!(serde_json::to_value(&unset).unwrap(), json!({}));

        let null = Probe { qos_duration: Nullable::Null };
        assert_eq!(serde_json::to_value(&null).unwrap(), json!({ "qosDuration": null }));

        let value = Probe { qos_duration: Nullable::Value(30) };
        assert_eq!(serde_json::to_value(&value).unwrap(), json!({ "qosDuration": 30 }));
    }

    #[test]
    fn test_decode_three_states() {
        let absent: Probe = serde_json::from_value(json!({})).unwrap();
        assert_eq!(absent.qos_duration, Nullable::Unset);

        let null: Probe = serde_json::from_value(json!({ "qosDuration": null })).unwrap();
        assert_eq!(null.qos_duration, Nullable::Null);

        let value: Probe = serde_json::from_value(json!({ "qosDuration": 30 })).unwrap();
        assert_eq!(value.qos_duration, Nullable::Value(30));
    }

    #[test]
    fn test_decode_type_mismatch_is_error() {
        let result: Result<Probe, _> = serde_json::from_value(json!({ "qosDuration": "soon" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_map_preserves_state() {
        assert_eq!(Nullable::<i32>::Unset.map(|v| v + 1), Nullable::Unset);
        assert_eq!(Nullable::<i32>::Null.map(|v| v + 1), Nullable::Null);
        assert_eq!(Nullable::Value(1).map(|v| v + 1), Nullable::Value(2));
    }
}
