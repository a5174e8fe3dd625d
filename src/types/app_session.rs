use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{
    AfRequestedData, AfRoutingRequirement, AfRoutingRequirementRm, AfSfcRequirement,
    DirectNotificationReport, EventsNotification, EventsSubscReqData, EventsSubscReqDataRm,
    Ipv6Addr, MediaComponent, MediaComponentRm, MpsAction, PreemptionControlInformation,
    ReservPriority, ServAuthInfo, ServiceInfoStatus, SipForkingIndication, Snssai,
    SponsoringStatus, TerminationCause,
};
use crate::codec::impl_model;
use crate::nullable::Nullable;
use crate::presence::is_absent;
use crate::validate::{Check, Validate, ValidationError, IPV4, MAC_ADDR_48, SUPPORTED_FEATURES};

/// Transparent TSN bridge management information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BridgeManagementContainer {
    pub bridge_man_cont: String,
}

impl BridgeManagementContainer {
    pub fn new(bridge_man_cont: impl Into<String>) -> Self {
        Self {
            bridge_man_cont: bridge_man_cont.into(),
        }
    }
}

impl_model!(BridgeManagementContainer, ["bridgeManCont"]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PortManagementContainer {
    pub port_man_cont: String,
    pub port_num: i32,
}

impl PortManagementContainer {
    pub fn new(port_man_cont: impl Into<String>, port_num: i32) -> Self {
        Self {
            port_man_cont: port_man_cont.into(),
            port_num,
        }
    }
}

impl_model!(PortManagementContainer, ["portManCont", "portNum"]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TsnBridgeInfo {
    #[serde(skip_serializing_if = "is_absent")]
    pub bridge_id: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub dstt_addr: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub dstt_port_num: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub dstt_resid_time: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mtu_ipv4: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mtu_ipv6: Option<i32>,
}

impl_model!(TsnBridgeInfo);

impl Validate for TsnBridgeInfo {
    fn validate(&self) -> Result<(), ValidationError> {
        Check::new("TsnBridgeInfo").optional("dsttAddr", self.dstt_addr.as_deref(), &MAC_ADDR_48)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UeIdentityInfo {
    #[serde(skip_serializing_if = "is_absent")]
    pub gpsi: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub pei: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub supi: Option<String>,
}

impl_model!(UeIdentityInfo);

/// Service information the AF supplies when creating an application session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppSessionContextReqData {
    #[serde(skip_serializing_if = "is_absent")]
    pub af_app_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub af_charg_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub af_req_data: Option<AfRequestedData>,
    #[serde(skip_serializing_if = "is_absent")]
    pub af_rout_req: Option<AfRoutingRequirement>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub af_sfc_req: Nullable<AfSfcRequirement>,
    #[serde(skip_serializing_if = "is_absent")]
    pub asp_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub bdt_ref_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub dnn: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ev_subsc: Option<EventsSubscReqData>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mcptt_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mc_video_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub med_components: Option<HashMap<String, MediaComponent>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub multi_modal_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ip_domain: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mps_action: Option<MpsAction>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mps_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mcs_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub preempt_control_info: Option<PreemptionControlInformation>,
    #[serde(skip_serializing_if = "is_absent")]
    pub qos_duration: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub qos_inact_int: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub res_prio: Option<ReservPriority>,
    #[serde(skip_serializing_if = "is_absent")]
    pub serv_inf_status: Option<ServiceInfoStatus>,
    pub notif_uri: String,
    #[serde(skip_serializing_if = "is_absent")]
    pub serv_urn: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub slice_info: Option<Snssai>,
    #[serde(skip_serializing_if = "is_absent")]
    pub spon_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub spon_status: Option<SponsoringStatus>,
    #[serde(skip_serializing_if = "is_absent")]
    pub supi: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub gpsi: Option<String>,
    pub supp_feat: String,
    #[serde(skip_serializing_if = "is_absent")]
    pub ue_ipv4: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ue_ipv6: Option<Ipv6Addr>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ue_mac: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tsn_bridge_man_cont: Option<BridgeManagementContainer>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tsn_port_man_cont_dstt: Option<PortManagementContainer>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tsn_port_man_cont_nwtts: Option<Vec<PortManagementContainer>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tsc_notif_uri: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tsc_notif_corre_id: Option<String>,
}

impl AppSessionContextReqData {
    pub fn new(notif_uri: impl Into<String>, supp_feat: impl Into<String>) -> Self {
        Self {
            notif_uri: notif_uri.into(),
            supp_feat: supp_feat.into(),
            ..Default::default()
        }
    }
}

impl_model!(AppSessionContextReqData, ["notifUri", "suppFeat"]);

impl Validate for AppSessionContextReqData {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("AppSessionContextReqData");
        check.required("suppFeat", &self.supp_feat, &SUPPORTED_FEATURES)?;
        check.optional("ueIpv4", self.ue_ipv4.as_deref(), &IPV4)?;
        check.optional("ueMac", self.ue_mac.as_deref(), &MAC_ADDR_48)?;
        self.af_rout_req.validate()?;
        self.af_sfc_req.validate()?;
        self.ev_subsc.validate()?;
        self.med_components.validate()
    }
}

/// What the PCF answers for a created application session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppSessionContextRespData {
    #[serde(skip_serializing_if = "is_absent")]
    pub serv_auth_info: Option<ServAuthInfo>,
    #[serde(skip_serializing_if = "is_absent")]
    pub direct_notif_reports: Option<Vec<DirectNotificationReport>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ue_ids: Option<Vec<UeIdentityInfo>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub supp_feat: Option<String>,
}

impl_model!(AppSessionContextRespData);

impl Validate for AppSessionContextRespData {
    fn validate(&self) -> Result<(), ValidationError> {
        Check::new("AppSessionContextRespData").optional(
            "suppFeat",
            self.supp_feat.as_deref(),
            &SUPPORTED_FEATURES,
        )
    }
}

/// An individual application session context resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppSessionContext {
    #[serde(default, skip_serializing_if = "is_absent")]
    pub asc_req_data: Nullable<AppSessionContextReqData>,
    #[serde(skip_serializing_if = "is_absent")]
    pub asc_resp_data: Option<AppSessionContextRespData>,
    #[serde(skip_serializing_if = "is_absent")]
    pub evs_notif: Option<EventsNotification>,
}

impl_model!(AppSessionContext);

impl Validate for AppSessionContext {
    fn validate(&self) -> Result<(), ValidationError> {
        self.asc_req_data.validate()?;
        self.asc_resp_data.validate()?;
        self.evs_notif.validate()
    }
}

/// Modifications to an existing application session. Removable properties
/// are [`Nullable`] so the AF can send `null` to drop them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppSessionContextUpdateData {
    #[serde(skip_serializing_if = "is_absent")]
    pub af_app_id: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub af_rout_req: Nullable<AfRoutingRequirementRm>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub af_sfc_req: Nullable<AfSfcRequirement>,
    #[serde(skip_serializing_if = "is_absent")]
    pub asp_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub bdt_ref_id: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub ev_subsc: Nullable<EventsSubscReqDataRm>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mcptt_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mc_video_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub med_components: Option<HashMap<String, MediaComponentRm>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mps_action: Option<MpsAction>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mps_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mcs_id: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub preempt_control_info: Nullable<PreemptionControlInformation>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub qos_duration: Nullable<i32>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub qos_inact_int: Nullable<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub res_prio: Option<ReservPriority>,
    #[serde(skip_serializing_if = "is_absent")]
    pub serv_inf_status: Option<ServiceInfoStatus>,
    #[serde(skip_serializing_if = "is_absent")]
    pub sip_fork_ind: Option<SipForkingIndication>,
    #[serde(skip_serializing_if = "is_absent")]
    pub spon_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub spon_status: Option<SponsoringStatus>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tsn_bridge_man_cont: Option<BridgeManagementContainer>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tsn_port_man_cont_dstt: Option<PortManagementContainer>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tsn_port_man_cont_nwtts: Option<Vec<PortManagementContainer>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tsc_notif_uri: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tsc_notif_corre_id: Option<String>,
}

impl_model!(AppSessionContextUpdateData);

impl Validate for AppSessionContextUpdateData {
    fn validate(&self) -> Result<(), ValidationError> {
        self.af_rout_req.validate()?;
        self.af_sfc_req.validate()?;
        self.ev_subsc.validate()?;
        self.med_components.validate()
    }
}

/// Why and where an application session was terminated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TerminationInfo {
    pub term_cause: TerminationCause,
    pub res_uri: String,
}

impl TerminationInfo {
    pub fn new(term_cause: TerminationCause, res_uri: impl Into<String>) -> Self {
        Self {
            term_cause,
            res_uri: res_uri.into(),
        }
    }
}

impl_model!(TerminationInfo, ["termCause", "resUri"]);

/// Identifies the UE whose P-CSCF needs restoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PcscfRestorationRequestData {
    #[serde(skip_serializing_if = "is_absent")]
    pub dnn: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ip_domain: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub slice_info: Option<Snssai>,
    #[serde(skip_serializing_if = "is_absent")]
    pub supi: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ue_ipv4: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ue_ipv6: Option<Ipv6Addr>,
}

impl_model!(PcscfRestorationRequestData);

impl Validate for PcscfRestorationRequestData {
    fn validate(&self) -> Result<(), ValidationError> {
        Check::new("PcscfRestorationRequestData").optional("ueIpv4", self.ue_ipv4.as_deref(), &IPV4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, decode_str, decode_validated, decode_value, encode, encode_string, encode_value, CodecError};
    use crate::types::{AfEvent, AfEventSubscription, MediaSubComponent};
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_update_qos_duration_tri_state() {
        let mut update = AppSessionContextUpdateData::default();
        assert_eq!(encode_string(&update).unwrap(), "{}");

        update.qos_duration.set_null();
        assert_eq!(encode_value(&update).unwrap(), json!({ "qosDuration": null }));

        update.qos_duration.set(60);
        assert_eq!(encode_value(&update).unwrap(), json!({ "qosDuration": 60 }));

        update.qos_duration.unset();
        assert_eq!(encode_string(&update).unwrap(), "{}");
    }

    #[test]
    fn test_update_decode_inverts_tri_state() {
        let update: AppSessionContextUpdateData =
            decode_str(r#"{"qosDuration": null, "qosInactInt": 30, "preemptControlInfo": null}"#)
                .unwrap();
        assert!(update.qos_duration.is_null());
        assert_eq!(update.qos_inact_int, Nullable::Value(30));
        assert!(update.preempt_control_info.is_null());
        assert!(update.ev_subsc.is_unset());
    }

    #[test]
    fn test_req_data_each_required_key() {
        let full = json!({ "notifUri": "https://af.example/n", "suppFeat": "1A" });
        assert!(decode_value::<AppSessionContextReqData>(full.clone()).is_ok());

        for key in ["notifUri", "suppFeat"] {
            let mut body = full.clone();
            body.as_object_mut().unwrap().remove(key);
            let err = decode_value::<AppSessionContextReqData>(body).unwrap_err();
            assert_eq!(err.to_string(), format!("no value given for required property {key}"));
        }
    }

    #[test]
    fn test_req_data_round_trip() {
        let mut sub = MediaSubComponent::new(1);
        sub.af_sig_protocol.set("SIP".into());
        sub.f_descs = Some(vec!["permit out 17 from 192.0.2.10 to any".to_string()]);

        let mut comp = MediaComponent::new(1);
        comp.mar_bw_dl = Some("64 Kbps".to_string());
        comp.med_sub_comps = Some(HashMap::from([("1".to_string(), sub)]));

        let mut req = AppSessionContextReqData::new("https://af.example/n", "0F");
        req.ue_ipv4 = Some("198.51.100.4".to_string());
        req.af_sfc_req.set_null();
        req.slice_info = Some(Snssai {
            sst: 1,
            sd: Some("000001".to_string()),
        });
        req.ev_subsc = Some(EventsSubscReqData::new(vec![AfEventSubscription::new(
            AfEvent::from(AfEvent::QOS_NOTIF),
        )]));
        req.med_components = Some(HashMap::from([("1".to_string(), comp)]));

        let bytes = encode(&req).unwrap();
        let back: AppSessionContextReqData = decode_validated(&bytes).unwrap();
        assert_eq!(back, req);
        assert!(back.af_sfc_req.is_null());
    }

    #[test]
    fn test_req_data_validation_failure() {
        let req = AppSessionContextReqData::new("https://af.example/n", "XYZ");
        let bytes = encode(&req).unwrap();
        assert!(decode::<AppSessionContextReqData>(&bytes).is_ok());
        let err = decode_validated::<AppSessionContextReqData>(&bytes).unwrap_err();
        assert_matches!(err, CodecError::Invalid(ref e) if e.property == "suppFeat");
    }

    #[test]
    fn test_app_session_context_nullable_req_data() {
        let ctx: AppSessionContext = decode_str(r#"{"ascReqData": null}"#).unwrap();
        assert!(ctx.asc_req_data.is_null());
        assert_eq!(encode_string(&ctx).unwrap(), r#"{"ascReqData":null}"#);
    }

    #[test]
    fn test_termination_info() {
        let info: TerminationInfo = decode_str(
            r#"{"termCause": "PDU_SESSION_TERMINATION", "resUri": "https://pcf.example/app-sessions/1"}"#,
        )
        .unwrap();
        assert_eq!(info.term_cause.as_str(), Some(TerminationCause::PDU_SESSION_TERMINATION));

        let err = decode_str::<TerminationInfo>(r#"{"termCause": "PS_TO_CS_HO"}"#).unwrap_err();
        assert_matches!(err, CodecError::MissingRequired { property: "resUri", .. });
    }

    #[test]
    fn test_pcscf_restoration_unknown_field() {
        let err = decode_str::<PcscfRestorationRequestData>(r#"{"dnn": "ims", "imsi": "001"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("unknown field `imsi`"));
    }

    #[test]
    fn test_tsn_bridge_mac() {
        let info = TsnBridgeInfo {
            dstt_addr: Some("00-11-22-33-44-55".to_string()),
            ..Default::default()
        };
        assert!(info.validate().is_ok());
    }
}
