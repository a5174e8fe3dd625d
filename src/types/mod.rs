pub mod app_session;
pub mod enums;
pub mod events;
pub mod location;
pub mod media;
pub mod problem;
pub mod routing;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::impl_model;
use crate::presence::is_absent;
use crate::validate::{Check, Validate, ValidationError, MCC, MNC, NID};

pub use app_session::*;
pub use enums::*;
pub use events::*;
pub use location::*;
pub use media::*;
pub use problem::*;
pub use routing::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlmnId {
    pub mcc: String,
    pub mnc: String,
}

impl PlmnId {
    pub fn new(mcc: impl Into<String>, mnc: impl Into<String>) -> Self {
        Self {
            mcc: mcc.into(),
            mnc: mnc.into(),
        }
    }
}

impl_model!(PlmnId, ["mcc", "mnc"]);

impl Validate for PlmnId {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("PlmnId");
        check.required("mcc", &self.mcc, &MCC)?;
        check.required("mnc", &self.mnc, &MNC)
    }
}

/// PLMN identity, optionally narrowed to a stand-alone non-public network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlmnIdNid {
    pub mcc: String,
    pub mnc: String,
    #[serde(skip_serializing_if = "is_absent")]
    pub nid: Option<String>,
}

impl PlmnIdNid {
    pub fn new(mcc: impl Into<String>, mnc: impl Into<String>) -> Self {
        Self {
            mcc: mcc.into(),
            mnc: mnc.into(),
            nid: None,
        }
    }
}

impl_model!(PlmnIdNid, ["mcc", "mnc"]);

impl Validate for PlmnIdNid {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("PlmnIdNid");
        check.required("mcc", &self.mcc, &MCC)?;
        check.required("mnc", &self.mnc, &MNC)?;
        check.optional("nid", self.nid.as_deref(), &NID)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Snssai {
    pub sst: u8,
    #[serde(skip_serializing_if = "is_absent")]
    pub sd: Option<String>,
}

impl_model!(Snssai, ["sst"]);

/// IPv6 address formatted according to RFC 5952.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ipv6Addr(pub String);

/// IPv6 prefix formatted according to RFC 5952; may hold a single /128 address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ipv6Prefix(pub String);

impl From<&str> for Ipv6Addr {
    fn from(value: &str) -> Self {
        Ipv6Addr(value.to_string())
    }
}

impl From<&str> for Ipv6Prefix {
    fn from(value: &str) -> Self {
        Ipv6Prefix(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessType {
    #[serde(rename = "3GPP_ACCESS")]
    ThreeGppAccess,
    #[serde(rename = "NON_3GPP_ACCESS")]
    NonThreeGppAccess,
}

/// The JSON `null` literal as a value of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullValue;

impl Serialize for NullValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit()
    }
}

impl<'de> Deserialize<'de> for NullValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <()>::deserialize(deserializer).map(|()| NullValue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode_string};
    use serde_json::json;

    #[test]
    fn test_access_type_wire_names() {
        let access: AccessType = serde_json::from_value(json!("NON_3GPP_ACCESS")).unwrap();
        assert_eq!(access, AccessType::NonThreeGppAccess);
        assert_eq!(serde_json::to_value(AccessType::ThreeGppAccess).unwrap(), json!("3GPP_ACCESS"));
        assert!(serde_json::from_value::<AccessType>(json!("WIFI")).is_err());
    }

    #[test]
    fn test_null_value_only_accepts_null() {
        assert_eq!(serde_json::from_value::<NullValue>(json!(null)).unwrap(), NullValue);
        assert!(serde_json::from_value::<NullValue>(json!("null")).is_err());
        assert_eq!(serde_json::to_value(NullValue).unwrap(), json!(null));
    }

    #[test]
    fn test_ipv6_prefix_is_bare_string() {
        let prefix: Ipv6Prefix = serde_json::from_value(json!("2001:db8:abcd:12::0/64")).unwrap();
        assert_eq!(prefix.0, "2001:db8:abcd:12::0/64");
        assert_eq!(serde_json::to_value(&prefix).unwrap(), json!("2001:db8:abcd:12::0/64"));
    }

    #[test]
    fn test_plmn_id_nid_round_trip() {
        let plmn: PlmnIdNid = decode_str(r#"{"mcc":"001","mnc":"01","nid":"000007ed9d5"}"#).unwrap();
        assert_eq!(plmn.nid.as_deref(), Some("000007ed9d5"));
        assert!(plmn.validate().is_ok());
        assert_eq!(
            encode_string(&plmn).unwrap(),
            r#"{"mcc":"001","mnc":"01","nid":"000007ed9d5"}"#
        );
    }

    #[test]
    fn test_plmn_id_validation() {
        let plmn = PlmnId::new("1", "01");
        let err = plmn.validate().unwrap_err();
        assert_eq!(err.property, "mcc");
    }
}
