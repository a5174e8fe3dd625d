use std::collections::HashMap;

use crate::nullable::Nullable;

/// Types that can stand for "this optional property carries nothing".
///
/// Drives every `skip_serializing_if` in the models, so a reference that is
/// absent is told apart from a value that merely equals its type's zero value:
/// `Some(0)` and `Some(vec![])` are present, `None` is not.
pub trait Presence {
    fn is_absent(&self) -> bool;
}

impl<T> Presence for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T> Presence for Nullable<T> {
    fn is_absent(&self) -> bool {
        self.is_unset()
    }
}

impl<T> Presence for Vec<T> {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Presence for HashMap<K, V> {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

pub fn is_absent<P: Presence + ?Sized>(value: &P) -> bool {
    value.is_absent()
}

pub fn is_present<P: Presence + ?Sized>(value: &P) -> bool {
    !value.is_absent()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_zero_value_is_present() {
        assert!(is_present(&Some(0)));
        assert!(is_present(&Some(Vec::<i32>::new())));
        assert!(is_absent(&None::<i32>));
    }

    #[test]
    fn test_nullable_null_is_present() {
        assert!(is_present(&Nullable::<i32>::Null));
        assert!(is_present(&Nullable::Value(0)));
        assert!(is_absent(&Nullable::<i32>::Unset));
    }

    #[test]
    fn test_collections() {
        assert!(is_absent(&Vec::<u8>::new()));
        assert!(is_present(&vec![1u8]));
        let mut map = HashMap::new();
        assert!(is_absent(&map));
        map.insert("1".to_string(), 1);
        assert!(is_present(&map));
    }
}
