use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CorrelationType, DnaiChangeType, Ipv6Addr, Ipv6Prefix, MatchingOperator, PresenceInfo};
use crate::codec::impl_model;
use crate::nullable::Nullable;
use crate::presence::is_absent;
use crate::validate::{Check, Validate, ValidationError, IPV4};

/// Traffic routing information for one DNAI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RouteInformation {
    #[serde(skip_serializing_if = "is_absent")]
    pub ipv4_addr: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ipv6_addr: Option<Ipv6Addr>,
    pub port_number: i32,
}

impl RouteInformation {
    pub fn new(port_number: i32) -> Self {
        Self {
            ipv4_addr: None,
            ipv6_addr: None,
            port_number,
        }
    }
}

impl_model!(RouteInformation, ["portNumber"]);

impl Validate for RouteInformation {
    fn validate(&self) -> Result<(), ValidationError> {
        Check::new("RouteInformation").optional("ipv4Addr", self.ipv4_addr.as_deref(), &IPV4)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RouteToLocation {
    pub dnai: String,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub route_info: Nullable<RouteInformation>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub route_prof_id: Nullable<String>,
}

impl RouteToLocation {
    pub fn new(dnai: impl Into<String>) -> Self {
        Self {
            dnai: dnai.into(),
            ..Default::default()
        }
    }
}

impl_model!(RouteToLocation, ["dnai"]);

impl Validate for RouteToLocation {
    fn validate(&self) -> Result<(), ValidationError> {
        self.route_info.validate()
    }
}

/// Presence reporting areas, keyed by PRA identifier, where routing applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpatialValidity {
    pub presence_info_list: HashMap<String, PresenceInfo>,
}

impl SpatialValidity {
    pub fn new(presence_info_list: HashMap<String, PresenceInfo>) -> Self {
        Self { presence_info_list }
    }
}

impl_model!(SpatialValidity, ["presenceInfoList"]);

impl Validate for SpatialValidity {
    fn validate(&self) -> Result<(), ValidationError> {
        self.presence_info_list.validate()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpatialValidityRm {
    pub presence_info_list: HashMap<String, PresenceInfo>,
}

impl SpatialValidityRm {
    pub fn new(presence_info_list: HashMap<String, PresenceInfo>) -> Self {
        Self { presence_info_list }
    }
}

impl_model!(SpatialValidityRm, ["presenceInfoList"]);

impl Validate for SpatialValidityRm {
    fn validate(&self) -> Result<(), ValidationError> {
        self.presence_info_list.validate()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TemporalValidity {
    #[serde(skip_serializing_if = "is_absent")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub stop_time: Option<DateTime<Utc>>,
}

impl_model!(TemporalValidity);

/// Subscription to user plane path change events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpPathChgEvent {
    pub notification_uri: String,
    pub notif_corre_id: String,
    pub dnai_chg_type: DnaiChangeType,
    #[serde(skip_serializing_if = "is_absent")]
    pub af_ack_ind: Option<bool>,
}

impl UpPathChgEvent {
    pub fn new(
        notification_uri: impl Into<String>,
        notif_corre_id: impl Into<String>,
        dnai_chg_type: DnaiChangeType,
    ) -> Self {
        Self {
            notification_uri: notification_uri.into(),
            notif_corre_id: notif_corre_id.into(),
            dnai_chg_type,
            af_ack_ind: None,
        }
    }
}

impl_model!(UpPathChgEvent, ["notificationUri", "notifCorreId", "dnaiChgType"]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IpAddr {
    #[serde(skip_serializing_if = "is_absent")]
    pub ipv4_addr: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ipv6_addr: Option<Ipv6Addr>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ipv6_prefix: Option<Ipv6Prefix>,
}

impl_model!(IpAddr);

impl Validate for IpAddr {
    fn validate(&self) -> Result<(), ValidationError> {
        Check::new("IpAddr").optional("ipv4Addr", self.ipv4_addr.as_deref(), &IPV4)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EasServerAddress {
    pub ip: IpAddr,
    pub port: i32,
}

impl EasServerAddress {
    pub fn new(ip: IpAddr, port: i32) -> Self {
        Self { ip, port }
    }
}

impl_model!(EasServerAddress, ["ip", "port"]);

/// Source and target EAS addresses for an IP replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EasIpReplacementInfo {
    pub source: EasServerAddress,
    pub target: EasServerAddress,
}

impl EasIpReplacementInfo {
    pub fn new(source: EasServerAddress, target: EasServerAddress) -> Self {
        Self { source, target }
    }
}

impl_model!(EasIpReplacementInfo, ["source", "target"]);

impl Validate for EasIpReplacementInfo {
    fn validate(&self) -> Result<(), ValidationError> {
        self.source.ip.validate()?;
        self.target.ip.validate()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StringMatchingCondition {
    #[serde(skip_serializing_if = "is_absent")]
    pub matching_string: Option<String>,
    pub matching_operator: MatchingOperator,
}

impl StringMatchingCondition {
    pub fn new(matching_operator: MatchingOperator) -> Self {
        Self {
            matching_string: None,
            matching_operator,
        }
    }
}

impl_model!(StringMatchingCondition, ["matchingOperator"]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StringMatchingRule {
    #[serde(skip_serializing_if = "is_absent")]
    pub string_matching_conditions: Option<Vec<StringMatchingCondition>>,
}

impl_model!(StringMatchingRule);

/// An FQDN matched either by regular expression or by string matching rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FqdnPatternMatchingRule {
    #[serde(skip_serializing_if = "is_absent")]
    pub regex: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub string_matching_rule: Option<StringMatchingRule>,
}

impl_model!(FqdnPatternMatchingRule);

/// Correlation of traffic towards a common DNAI or EAS across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TrafficCorrelationInfo {
    #[serde(skip_serializing_if = "is_absent")]
    pub corr_type: Option<CorrelationType>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tfc_corr_id: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub com_eas_ipv4_addr: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub com_eas_ipv6_addr: Nullable<Ipv6Addr>,
    #[serde(skip_serializing_if = "is_absent")]
    pub fqdn_range: Option<Vec<FqdnPatternMatchingRule>>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub notif_uri: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub notif_corr_id: Nullable<String>,
}

impl_model!(TrafficCorrelationInfo);

impl Validate for TrafficCorrelationInfo {
    fn validate(&self) -> Result<(), ValidationError> {
        Check::new("TrafficCorrelationInfo").optional(
            "comEasIpv4Addr",
            self.com_eas_ipv4_addr.get().map(String::as_str),
            &IPV4,
        )
    }
}

/// Service function chaining requirement; every property is removable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AfSfcRequirement {
    #[serde(default, skip_serializing_if = "is_absent")]
    pub sfc_id_dl: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub sfc_id_ul: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub sp_val: Nullable<SpatialValidityRm>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub metadata: Nullable<String>,
}

impl_model!(AfSfcRequirement);

impl Validate for AfSfcRequirement {
    fn validate(&self) -> Result<(), ValidationError> {
        self.sp_val.validate()
    }
}

/// Application routing requirements for traffic steering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AfRoutingRequirement {
    #[serde(skip_serializing_if = "is_absent")]
    pub app_reloc: Option<bool>,
    #[serde(skip_serializing_if = "is_absent")]
    pub route_to_locs: Option<Vec<RouteToLocation>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub sp_val: Option<SpatialValidity>,
    #[serde(skip_serializing_if = "is_absent")]
    pub temp_vals: Option<Vec<TemporalValidity>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub up_path_chg_sub: Option<UpPathChgEvent>,
    #[serde(skip_serializing_if = "is_absent")]
    pub addr_preser_ind: Option<bool>,
    #[serde(skip_serializing_if = "is_absent")]
    pub sim_conn_ind: Option<bool>,
    #[serde(skip_serializing_if = "is_absent")]
    pub sim_conn_term: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub eas_ip_replace_infos: Option<Vec<EasIpReplacementInfo>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub eas_redis_ind: Option<bool>,
    #[serde(skip_serializing_if = "is_absent")]
    pub max_allowed_up_lat: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tfc_corre_info: Option<TrafficCorrelationInfo>,
}

impl_model!(AfRoutingRequirement);

impl Validate for AfRoutingRequirement {
    fn validate(&self) -> Result<(), ValidationError> {
        self.route_to_locs.validate()?;
        self.sp_val.validate()?;
        self.eas_ip_replace_infos.validate()?;
        self.tfc_corre_info.validate()
    }
}

/// Patch form of [`AfRoutingRequirement`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AfRoutingRequirementRm {
    #[serde(skip_serializing_if = "is_absent")]
    pub app_reloc: Option<bool>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub route_to_locs: Nullable<Vec<RouteToLocation>>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub sp_val: Nullable<SpatialValidityRm>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub temp_vals: Nullable<Vec<TemporalValidity>>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub up_path_chg_sub: Nullable<UpPathChgEvent>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub addr_preser_ind: Nullable<bool>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub sim_conn_ind: Nullable<bool>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub sim_conn_term: Nullable<i32>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub eas_ip_replace_infos: Nullable<Vec<EasIpReplacementInfo>>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub eas_redis_ind: Nullable<bool>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub max_allowed_up_lat: Nullable<i32>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub tfc_corre_info: Nullable<TrafficCorrelationInfo>,
}

impl_model!(AfRoutingRequirementRm);

impl Validate for AfRoutingRequirementRm {
    fn validate(&self) -> Result<(), ValidationError> {
        self.route_to_locs.validate()?;
        self.sp_val.validate()?;
        self.eas_ip_replace_infos.validate()?;
        self.tfc_corre_info.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, decode_value, encode_value, CodecError};
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_route_to_location_nullable_members() {
        let loc: RouteToLocation =
            decode_str(r#"{"dnai": "edge-1", "routeInfo": null, "routeProfId": "gold"}"#).unwrap();
        assert!(loc.route_info.is_null());
        assert_eq!(loc.route_prof_id.get().map(String::as_str), Some("gold"));
        assert_eq!(
            encode_value(&loc).unwrap(),
            json!({ "dnai": "edge-1", "routeInfo": null, "routeProfId": "gold" })
        );

        let err = decode_str::<RouteToLocation>(r#"{"routeProfId": "gold"}"#).unwrap_err();
        assert_matches!(err, CodecError::MissingRequired { property: "dnai", .. });
    }

    #[test]
    fn test_af_sfc_requirement_all_removable() {
        let req: AfSfcRequirement =
            decode_str(r#"{"sfcIdDl": null, "spVal": null, "metadata": "bWV0YQ=="}"#).unwrap();
        assert!(req.sfc_id_dl.is_null());
        assert!(req.sfc_id_ul.is_unset());
        assert!(req.sp_val.is_null());
        assert_eq!(
            encode_value(&req).unwrap(),
            json!({ "sfcIdDl": null, "spVal": null, "metadata": "bWV0YQ==" })
        );
    }

    #[test]
    fn test_routing_requirement_rm_clears_locations() {
        let body = json!({
            "appReloc": true,
            "routeToLocs": null,
            "upPathChgSub": {
                "notificationUri": "https://af.example/up",
                "notifCorreId": "c-1",
                "dnaiChgType": "EARLY_LATE"
            }
        });
        let rm: AfRoutingRequirementRm = decode_value(body.clone()).unwrap();
        assert!(rm.route_to_locs.is_null());
        assert_eq!(
            rm.up_path_chg_sub.get().and_then(|sub| sub.dnai_chg_type.as_str()),
            Some(DnaiChangeType::EARLY_LATE)
        );
        assert_eq!(encode_value(&rm).unwrap(), body);
    }

    #[test]
    fn test_eas_replacement_checks_both_ends() {
        let source = EasServerAddress::new(
            IpAddr {
                ipv4_addr: Some("192.0.2.1".into()),
                ..Default::default()
            },
            80,
        );
        let target = EasServerAddress::new(
            IpAddr {
                ipv4_addr: Some("192.0.2".into()),
                ..Default::default()
            },
            80,
        );
        let info = EasIpReplacementInfo::new(source, target);
        let err = info.validate().unwrap_err();
        assert_eq!(err.model, "IpAddr");
        assert_eq!(err.value, "192.0.2");
    }

    #[test]
    fn test_traffic_correlation_nullable_ipv6() {
        let info: TrafficCorrelationInfo =
            decode_str(r#"{"corrType": "COMMON_EAS", "comEasIpv6Addr": "2001:db8::1"}"#).unwrap();
        assert_eq!(info.com_eas_ipv6_addr, Nullable::Value(Ipv6Addr::from("2001:db8::1")));
        assert!(info.notif_uri.is_unset());
    }
}
