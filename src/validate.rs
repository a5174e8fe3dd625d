use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::nullable::Nullable;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{model}.{property}: {value:?} does not match {pattern}")]
pub struct ValidationError {
    pub model: &'static str,
    pub property: &'static str,
    pub value: String,
    pub pattern: &'static str,
}

/// Schema pattern checks that a strict decode does not perform.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

// Schema `pattern`s, compiled on first use.
pub static BIT_RATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)? (bps|Kbps|Mbps|Gbps|Tbps)$").expect("valid regex"));
pub static PACKET_ERR_RATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]E-[0-9])$").expect("valid regex"));
pub static MCC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}$").expect("valid regex"));
pub static MNC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2,3}$").expect("valid regex"));
pub static NID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Fa-f0-9]{11}$").expect("valid regex"));
pub static TAC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^[A-Fa-f0-9]{4}$)|(^[A-Fa-f0-9]{6}$)").expect("valid regex"));
pub static NR_CELL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Fa-f0-9]{9}$").expect("valid regex"));
pub static EUTRA_CELL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Fa-f0-9]{7}$").expect("valid regex"));
pub static HEX4: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Fa-f0-9]{4}$").expect("valid regex"));
pub static RAC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Fa-f0-9]{2}$").expect("valid regex"));
pub static GNB_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Fa-f0-9]{6,8}$").expect("valid regex"));
pub static IPV4: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(([0-9]|[1-9][0-9]|1[0-9][0-9]|2[0-4][0-9]|25[0-5])\.){3}([0-9]|[1-9][0-9]|1[0-9][0-9]|2[0-4][0-9]|25[0-5])$").expect("valid regex"));
pub static MAC_ADDR_48: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9a-fA-F]{2})((-[0-9a-fA-F]{2}){5})$").expect("valid regex"));
pub static GEOGRAPHICAL_INFORMATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-F]{16}$").expect("valid regex"));
pub static GEODETIC_INFORMATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-F]{20}$").expect("valid regex"));
pub static SUPPORTED_FEATURES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Fa-f0-9]*$").expect("valid regex"));

/// Per-model helper that stamps the model name onto every failure.
pub(crate) struct Check {
    model: &'static str,
}

impl Check {
    pub(crate) fn new(model: &'static str) -> Self {
        Self { model }
    }

    pub(crate) fn required(
        &self,
        property: &'static str,
        value: &str,
        pattern: &'static Regex,
    ) -> Result<(), ValidationError> {
        if pattern.is_match(value) {
            return Ok(());
        }
        Err(ValidationError {
            model: self.model,
            property,
            value: value.to_string(),
            pattern: pattern.as_str(),
        })
    }

    pub(crate) fn optional(
        &self,
        property: &'static str,
        value: Option<&str>,
        pattern: &'static Regex,
    ) -> Result<(), ValidationError> {
        match value {
            Some(value) => self.required(property, value, pattern),
            None => Ok(()),
        }
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        self.as_ref().map_or(Ok(()), Validate::validate)
    }
}

impl<T: Validate> Validate for Nullable<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        self.get().map_or(Ok(()), Validate::validate)
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        self.iter().try_for_each(Validate::validate)
    }
}

impl<T: Validate> Validate for HashMap<String, T> {
    fn validate(&self) -> Result<(), ValidationError> {
        self.values().try_for_each(Validate::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_rate() {
        assert!(BIT_RATE.is_match("100 Mbps"));
        assert!(BIT_RATE.is_match("1.5 Gbps"));
        assert!(!BIT_RATE.is_match("100Mbps"));
        assert!(!BIT_RATE.is_match("fast"));
    }

    #[test]
    fn test_tac_alternation() {
        assert!(TAC.is_match("00A1"));
        assert!(TAC.is_match("00A1B2"));
        assert!(!TAC.is_match("00A1B"));
    }

    #[test]
    fn test_ipv4_and_mac() {
        assert!(IPV4.is_match("192.168.0.1"));
        assert!(!IPV4.is_match("256.1.1.1"));
        assert!(MAC_ADDR_48.is_match("00-1A-2b-3C-4d-5E"));
        assert!(!MAC_ADDR_48.is_match("00:1A:2b:3C:4d:5E"));
    }

    #[test]
    fn test_check_reports_model_and_property() {
        let check = Check::new("Tai");
        let err = check.required("tac", "XYZ", &TAC).unwrap_err();
        assert_eq!(err.model, "Tai");
        assert_eq!(err.property, "tac");
        assert_eq!(err.value, "XYZ");
        assert_eq!(err.pattern, TAC.as_str());
        assert!(check.optional("nid", None, &NID).is_ok());
    }
}
