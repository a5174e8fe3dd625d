use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    AfRoutingRequirement, AfRoutingRequirementRm, AfSfcRequirement, AfSigProtocol,
    EventsSubscReqData, EventsSubscReqDataRm, FlowDirection, FlowStatus, FlowUsage, MediaTransportProto,
    MediaType, PduSetHandlingInfo, PreemptionCapability, PreemptionVulnerability,
    PrioritySharingIndicator, ReservPriority, RtpHeaderExtType, RtpPayloadFormat,
    UplinkDownlinkSupport,
};
use crate::codec::impl_model;
use crate::nullable::Nullable;
use crate::presence::is_absent;
use crate::validate::{Check, Validate, ValidationError, BIT_RATE, MAC_ADDR_48, PACKET_ERR_RATE};

/// Identifies the IP flows of a media component by flow number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Flows {
    #[serde(skip_serializing_if = "is_absent")]
    pub cont_vers: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub f_nums: Option<Vec<i32>>,
    pub med_comp_n: i32,
}

impl Flows {
    pub fn new(med_comp_n: i32) -> Self {
        Self {
            cont_vers: None,
            f_nums: None,
            med_comp_n,
        }
    }
}

impl_model!(Flows, ["medCompN"]);

/// Extra IP flow parameters for the flow description at the same index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddFlowDescriptionInfo {
    #[serde(skip_serializing_if = "is_absent")]
    pub spi: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub flow_label: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub flow_dir: Option<FlowDirection>,
}

impl_model!(AddFlowDescriptionInfo);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EthFlowDescription {
    #[serde(skip_serializing_if = "is_absent")]
    pub dest_mac_addr: Option<String>,
    pub eth_type: String,
    #[serde(skip_serializing_if = "is_absent")]
    pub f_desc: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub f_dir: Option<FlowDirection>,
    #[serde(skip_serializing_if = "is_absent")]
    pub source_mac_addr: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub vlan_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub src_mac_addr_end: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub dest_mac_addr_end: Option<String>,
}

impl EthFlowDescription {
    pub fn new(eth_type: impl Into<String>) -> Self {
        Self {
            eth_type: eth_type.into(),
            ..Default::default()
        }
    }
}

impl_model!(EthFlowDescription, ["ethType"]);

impl Validate for EthFlowDescription {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("EthFlowDescription");
        check.optional("destMacAddr", self.dest_mac_addr.as_deref(), &MAC_ADDR_48)?;
        check.optional("sourceMacAddr", self.source_mac_addr.as_deref(), &MAC_ADDR_48)?;
        check.optional("srcMacAddrEnd", self.src_mac_addr_end.as_deref(), &MAC_ADDR_48)?;
        check.optional("destMacAddrEnd", self.dest_mac_addr_end.as_deref(), &MAC_ADDR_48)
    }
}

/// An alternative QoS parameter set the AF can fall back to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AlternativeServiceRequirementsData {
    pub alt_qos_param_set_ref: String,
    #[serde(skip_serializing_if = "is_absent")]
    pub gbr_ul: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub gbr_dl: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub pdb: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub per: Option<String>,
}

impl AlternativeServiceRequirementsData {
    pub fn new(alt_qos_param_set_ref: impl Into<String>) -> Self {
        Self {
            alt_qos_param_set_ref: alt_qos_param_set_ref.into(),
            ..Default::default()
        }
    }
}

impl_model!(AlternativeServiceRequirementsData, ["altQosParamSetRef"]);

impl Validate for AlternativeServiceRequirementsData {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("AlternativeServiceRequirementsData");
        check.optional("gbrUl", self.gbr_ul.as_deref(), &BIT_RATE)?;
        check.optional("gbrDl", self.gbr_dl.as_deref(), &BIT_RATE)?;
        check.optional("per", self.per.as_deref(), &PACKET_ERR_RATE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RtpHeaderExtInfo {
    #[serde(skip_serializing_if = "is_absent")]
    pub rtp_header_ext_type: Option<RtpHeaderExtType>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rtp_header_ext_id: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub long_format: Option<bool>,
    #[serde(skip_serializing_if = "is_absent")]
    pub pdu_set_size_active: Option<bool>,
}

impl_model!(RtpHeaderExtInfo);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RtpPayloadInfo {
    #[serde(skip_serializing_if = "is_absent")]
    pub rtp_payload_type_list: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rtp_payload_format: Option<RtpPayloadFormat>,
}

impl_model!(RtpPayloadInfo);

/// Transport protocol and RTP details of a media flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProtocolDescription {
    #[serde(skip_serializing_if = "is_absent")]
    pub transport_proto: Option<MediaTransportProto>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rtp_header_ext_info: Option<RtpHeaderExtInfo>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rtp_payload_info_list: Option<Vec<RtpPayloadInfo>>,
}

impl_model!(ProtocolDescription);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PduSetQosPara {
    #[serde(skip_serializing_if = "is_absent")]
    pub pdu_set_delay_budget: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub pdu_set_err_rate: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub pdu_set_handling_info: Option<PduSetHandlingInfo>,
}

impl_model!(PduSetQosPara);

impl Validate for PduSetQosPara {
    fn validate(&self) -> Result<(), ValidationError> {
        Check::new("PduSetQosPara").optional(
            "pduSetErrRate",
            self.pdu_set_err_rate.as_deref(),
            &PACKET_ERR_RATE,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PeriodicityRange {
    #[serde(skip_serializing_if = "is_absent")]
    pub lower_bound: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub upper_bound: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub periodic_vals: Option<Vec<i32>>,
}

impl_model!(PeriodicityRange);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TimeWindow {
    pub start_time: DateTime<Utc>,
    pub stop_time: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start_time: DateTime<Utc>, stop_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            stop_time,
        }
    }
}

impl_model!(TimeWindow, ["startTime", "stopTime"]);

/// Traffic characteristics for time sensitive communication assistance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TscaiInputContainer {
    #[serde(skip_serializing_if = "is_absent")]
    pub periodicity: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub burst_arrival_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub sur_time_in_num_msg: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub sur_time_in_time: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub burst_arrival_time_wnd: Option<TimeWindow>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub periodicity_range: Nullable<PeriodicityRange>,
}

impl_model!(TscaiInputContainer);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TsnQosContainer {
    #[serde(skip_serializing_if = "is_absent")]
    pub max_tsc_burst_size: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tsc_pack_delay: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub max_per: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tsc_prio_level: Option<i32>,
}

impl_model!(TsnQosContainer);

impl Validate for TsnQosContainer {
    fn validate(&self) -> Result<(), ValidationError> {
        Check::new("TsnQosContainer").optional("maxPer", self.max_per.as_deref(), &PACKET_ERR_RATE)
    }
}

/// A single IP flow (or a pair of RTP/RTCP flows) within a media component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MediaSubComponent {
    #[serde(default, skip_serializing_if = "is_absent")]
    pub af_sig_protocol: Nullable<AfSigProtocol>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ethf_descs: Option<Vec<EthFlowDescription>>,
    pub f_num: i32,
    #[serde(skip_serializing_if = "is_absent")]
    pub f_descs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub add_info_flow_descs: Option<Vec<AddFlowDescriptionInfo>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub f_status: Option<FlowStatus>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mar_bw_dl: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mar_bw_ul: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tos_tr_cl: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub flow_usage: Option<FlowUsage>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ev_subsc: Option<EventsSubscReqData>,
}

impl MediaSubComponent {
    pub fn new(f_num: i32) -> Self {
        Self {
            f_num,
            ..Default::default()
        }
    }
}

impl_model!(MediaSubComponent, ["fNum"]);

impl Validate for MediaSubComponent {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("MediaSubComponent");
        self.ethf_descs.validate()?;
        check.optional("marBwDl", self.mar_bw_dl.as_deref(), &BIT_RATE)?;
        check.optional("marBwUl", self.mar_bw_ul.as_deref(), &BIT_RATE)?;
        self.ev_subsc.validate()
    }
}

/// Patch form of [`MediaSubComponent`]: `null` removes a previously provisioned value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MediaSubComponentRm {
    #[serde(default, skip_serializing_if = "is_absent")]
    pub af_sig_protocol: Nullable<AfSigProtocol>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ethf_descs: Option<Vec<EthFlowDescription>>,
    pub f_num: i32,
    #[serde(skip_serializing_if = "is_absent")]
    pub f_descs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub add_info_flow_descs: Option<Vec<AddFlowDescriptionInfo>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub f_status: Option<FlowStatus>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub mar_bw_dl: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub mar_bw_ul: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub tos_tr_cl: Nullable<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub flow_usage: Option<FlowUsage>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub ev_subsc: Nullable<EventsSubscReqDataRm>,
}

impl MediaSubComponentRm {
    pub fn new(f_num: i32) -> Self {
        Self {
            f_num,
            ..Default::default()
        }
    }
}

impl_model!(MediaSubComponentRm, ["fNum"]);

impl Validate for MediaSubComponentRm {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("MediaSubComponentRm");
        self.ethf_descs.validate()?;
        check.optional("marBwDl", self.mar_bw_dl.get().map(String::as_str), &BIT_RATE)?;
        check.optional("marBwUl", self.mar_bw_ul.get().map(String::as_str), &BIT_RATE)?;
        self.ev_subsc.validate()
    }
}

/// Media-level service information for one media line of the AF session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MediaComponent {
    #[serde(skip_serializing_if = "is_absent")]
    pub af_app_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub af_rout_req: Option<AfRoutingRequirement>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub af_sfc_req: Nullable<AfSfcRequirement>,
    #[serde(skip_serializing_if = "is_absent")]
    pub qos_reference: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub dis_ue_notif: Option<bool>,
    #[serde(skip_serializing_if = "is_absent")]
    pub alt_ser_reqs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub alt_ser_reqs_data: Option<Vec<AlternativeServiceRequirementsData>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub cont_ver: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub codecs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub des_max_latency: Option<f32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub des_max_loss: Option<f32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub flus_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub f_status: Option<FlowStatus>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mar_bw_dl: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mar_bw_ul: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub max_packet_loss_rate_dl: Nullable<i32>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub max_packet_loss_rate_ul: Nullable<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub max_supp_bw_dl: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub max_supp_bw_ul: Option<String>,
    pub med_comp_n: i32,
    #[serde(skip_serializing_if = "is_absent")]
    pub med_sub_comps: Option<HashMap<String, MediaSubComponent>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub med_type: Option<MediaType>,
    #[serde(skip_serializing_if = "is_absent")]
    pub min_des_bw_dl: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub min_des_bw_ul: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mir_bw_dl: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub mir_bw_ul: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub preempt_cap: Option<PreemptionCapability>,
    #[serde(skip_serializing_if = "is_absent")]
    pub preempt_vuln: Option<PreemptionVulnerability>,
    #[serde(skip_serializing_if = "is_absent")]
    pub prio_sharing_ind: Option<PrioritySharingIndicator>,
    #[serde(skip_serializing_if = "is_absent")]
    pub res_prio: Option<ReservPriority>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rr_bw: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rs_bw: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub sharing_key_dl: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub sharing_key_ul: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tsn_qos: Option<TsnQosContainer>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub tscai_input_dl: Nullable<TscaiInputContainer>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub tscai_input_ul: Nullable<TscaiInputContainer>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tscai_time_dom: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub cap_bat_adaptation: Option<bool>,
    #[serde(rename = "rTLatencyInd", skip_serializing_if = "is_absent")]
    pub rt_latency_ind: Option<bool>,
    #[serde(skip_serializing_if = "is_absent")]
    pub pdu_set_qos_dl: Option<PduSetQosPara>,
    #[serde(skip_serializing_if = "is_absent")]
    pub pdu_set_qos_ul: Option<PduSetQosPara>,
    #[serde(skip_serializing_if = "is_absent")]
    pub proto_desc_dl: Option<ProtocolDescription>,
    #[serde(skip_serializing_if = "is_absent")]
    pub proto_desc_ul: Option<ProtocolDescription>,
    #[serde(skip_serializing_if = "is_absent")]
    pub period_ul: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub period_dl: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub l4s_ind: Option<UplinkDownlinkSupport>,
}

impl MediaComponent {
    pub fn new(med_comp_n: i32) -> Self {
        Self {
            med_comp_n,
            ..Default::default()
        }
    }
}

impl_model!(MediaComponent, ["medCompN"]);

impl Validate for MediaComponent {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("MediaComponent");
        for (property, value) in [
            ("marBwDl", &self.mar_bw_dl),
            ("marBwUl", &self.mar_bw_ul),
            ("maxSuppBwDl", &self.max_supp_bw_dl),
            ("maxSuppBwUl", &self.max_supp_bw_ul),
            ("minDesBwDl", &self.min_des_bw_dl),
            ("minDesBwUl", &self.min_des_bw_ul),
            ("mirBwDl", &self.mir_bw_dl),
            ("mirBwUl", &self.mir_bw_ul),
            ("rrBw", &self.rr_bw),
            ("rsBw", &self.rs_bw),
        ] {
            check.optional(property, value.as_deref(), &BIT_RATE)?;
        }
        self.af_rout_req.validate()?;
        self.af_sfc_req.validate()?;
        self.alt_ser_reqs_data.validate()?;
        self.med_sub_comps.validate()?;
        self.tsn_qos.validate()?;
        self.pdu_set_qos_dl.validate()?;
        self.pdu_set_qos_ul.validate()
    }
}

/// Patch form of [`MediaComponent`] carried in session updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MediaComponentRm {
    #[serde(default, skip_serializing_if = "is_absent")]
    pub af_app_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub af_rout_req: Nullable<AfRoutingRequirementRm>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub af_sfc_req: Nullable<AfSfcRequirement>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub qos_reference: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub alt_ser_reqs: Nullable<Vec<String>>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub alt_ser_reqs_data: Nullable<Vec<AlternativeServiceRequirementsData>>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub dis_ue_notif: Nullable<bool>,
    #[serde(skip_serializing_if = "is_absent")]
    pub cont_ver: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub codecs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub des_max_latency: Nullable<f32>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub des_max_loss: Nullable<f32>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub flus_id: Nullable<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub f_status: Option<FlowStatus>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub mar_bw_dl: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub mar_bw_ul: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub max_packet_loss_rate_dl: Nullable<i32>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub max_packet_loss_rate_ul: Nullable<i32>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub max_supp_bw_dl: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub max_supp_bw_ul: Nullable<String>,
    pub med_comp_n: i32,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub med_sub_comps: Nullable<HashMap<String, MediaSubComponentRm>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub med_type: Option<MediaType>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub min_des_bw_dl: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub min_des_bw_ul: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub mir_bw_dl: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub mir_bw_ul: Nullable<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub preempt_cap: Option<PreemptionCapability>,
    #[serde(skip_serializing_if = "is_absent")]
    pub preempt_vuln: Option<PreemptionVulnerability>,
    #[serde(skip_serializing_if = "is_absent")]
    pub prio_sharing_ind: Option<PrioritySharingIndicator>,
    #[serde(skip_serializing_if = "is_absent")]
    pub res_prio: Option<ReservPriority>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub rr_bw: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub rs_bw: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub sharing_key_dl: Nullable<i32>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub sharing_key_ul: Nullable<i32>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub tsn_qos: Nullable<TsnQosContainer>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub tscai_input_dl: Nullable<TscaiInputContainer>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub tscai_input_ul: Nullable<TscaiInputContainer>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub tscai_time_dom: Nullable<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub cap_bat_adaptation: Option<bool>,
    #[serde(rename = "rTLatencyInd", default, skip_serializing_if = "is_absent")]
    pub rt_latency_ind: Nullable<bool>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub pdu_set_qos_dl: Nullable<PduSetQosPara>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub pdu_set_qos_ul: Nullable<PduSetQosPara>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub proto_desc_dl: Nullable<ProtocolDescription>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub proto_desc_ul: Nullable<ProtocolDescription>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub period_ul: Nullable<i32>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub period_dl: Nullable<i32>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub l4s_ind: Nullable<UplinkDownlinkSupport>,
}

impl MediaComponentRm {
    pub fn new(med_comp_n: i32) -> Self {
        Self {
            med_comp_n,
            ..Default::default()
        }
    }
}

impl_model!(MediaComponentRm, ["medCompN"]);

impl Validate for MediaComponentRm {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("MediaComponentRm");
        for (property, value) in [
            ("marBwDl", &self.mar_bw_dl),
            ("marBwUl", &self.mar_bw_ul),
            ("maxSuppBwDl", &self.max_supp_bw_dl),
            ("maxSuppBwUl", &self.max_supp_bw_ul),
            ("minDesBwDl", &self.min_des_bw_dl),
            ("minDesBwUl", &self.min_des_bw_ul),
            ("mirBwDl", &self.mir_bw_dl),
            ("mirBwUl", &self.mir_bw_ul),
            ("rrBw", &self.rr_bw),
            ("rsBw", &self.rs_bw),
        ] {
            check.optional(property, value.get().map(String::as_str), &BIT_RATE)?;
        }
        self.af_rout_req.validate()?;
        self.af_sfc_req.validate()?;
        self.alt_ser_reqs_data.validate()?;
        self.med_sub_comps.validate()?;
        self.tsn_qos.validate()?;
        self.pdu_set_qos_dl.validate()?;
        self.pdu_set_qos_ul.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, decode_value, encode_value, CodecError};
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_empty_optional_union_round_trips() {
        let info = AddFlowDescriptionInfo {
            flow_dir: Some(FlowDirection::default()),
            ..Default::default()
        };
        let wire = encode_value(&info).unwrap();
        assert_eq!(wire, json!({ "flowDir": {} }));
        let back: AddFlowDescriptionInfo = decode_value(wire).unwrap();
        assert_eq!(back, info);
    }

    #[test]
    fn test_empty_nullable_union_round_trips() {
        let mut sub = MediaSubComponent::new(1);
        sub.af_sig_protocol = Nullable::Value(AfSigProtocol::default());
        let wire = encode_value(&sub).unwrap();
        assert_eq!(wire, json!({ "afSigProtocol": {}, "fNum": 1 }));
        let back: MediaSubComponent = decode_value(wire).unwrap();
        assert_eq!(back, sub);

        sub.af_sig_protocol = Nullable::Null;
        let back: MediaSubComponent = decode_value(encode_value(&sub).unwrap()).unwrap();
        assert_eq!(back.af_sig_protocol, Nullable::Null);
    }

    #[test]
    fn test_media_component_with_sub_components() {
        let body = json!({
            "medCompN": 1,
            "medType": "AUDIO",
            "marBwDl": "64 Kbps",
            "fStatus": "ENABLED",
            "medSubComps": {
                "1": {
                    "fNum": 1,
                    "fDescs": ["permit out 17 from 192.0.2.10 49152 to any"],
                    "afSigProtocol": "SIP",
                    "flowUsage": "RTCP"
                }
            }
        });
        let comp: MediaComponent = decode_value(body).unwrap();
        assert_eq!(comp.med_type.as_ref().and_then(MediaType::as_str), Some(MediaType::AUDIO));
        let sub = &comp.med_sub_comps.as_ref().unwrap()["1"];
        assert_eq!(sub.f_num, 1);
        assert_eq!(sub.af_sig_protocol.get().and_then(AfSigProtocol::as_str), Some("SIP"));
        assert!(comp.validate().is_ok());
    }

    #[test]
    fn test_rt_latency_wire_name() {
        let mut comp = MediaComponent::new(2);
        comp.rt_latency_ind = Some(true);
        let out = encode_value(&comp).unwrap();
        assert_eq!(out, json!({ "medCompN": 2, "rTLatencyInd": true }));
    }

    #[test]
    fn test_nullable_packet_loss_rate() {
        let comp: MediaComponent =
            decode_str(r#"{"medCompN": 1, "maxPacketLossRateDl": null}"#).unwrap();
        assert!(comp.max_packet_loss_rate_dl.is_null());
        assert!(comp.max_packet_loss_rate_ul.is_unset());
        let out = encode_value(&comp).unwrap();
        assert_eq!(out, json!({ "medCompN": 1, "maxPacketLossRateDl": null }));
    }

    #[test]
    fn test_sub_component_missing_fnum() {
        let err = decode_str::<MediaSubComponent>(r#"{"fDescs": []}"#).unwrap_err();
        assert_matches!(err, CodecError::MissingRequired { property: "fNum", .. });
    }

    #[test]
    fn test_sub_component_rm_removes_bitrate() {
        let mut rm = MediaSubComponentRm::new(3);
        rm.mar_bw_ul.set_null();
        rm.mar_bw_dl.set("1 Mbps".to_string());
        let out = encode_value(&rm).unwrap();
        assert_eq!(out, json!({ "fNum": 3, "marBwDl": "1 Mbps", "marBwUl": null }));
        assert!(rm.validate().is_ok());
    }

    #[test]
    fn test_media_component_rm_null_sub_components() {
        let rm: MediaComponentRm = decode_str(r#"{"medCompN": 4, "medSubComps": null}"#).unwrap();
        assert!(rm.med_sub_comps.is_null());
        let rm: MediaComponentRm = decode_str(r#"{"medCompN": 4, "mirBwUl": "bad"}"#).unwrap();
        assert_eq!(rm.validate().unwrap_err().property, "mirBwUl");
    }

    #[test]
    fn test_eth_flow_mac_pattern() {
        let mut desc = EthFlowDescription::new("0x0800");
        desc.dest_mac_addr = Some("00:11:22:33:44:55".to_string());
        assert_eq!(desc.validate().unwrap_err().property, "destMacAddr");
    }

    #[test]
    fn test_time_window_requires_both_ends() {
        let err = decode_str::<TimeWindow>(r#"{"startTime": "2024-05-01T10:00:00Z"}"#).unwrap_err();
        assert_matches!(err, CodecError::MissingRequired { property: "stopTime", .. });
    }

    #[test]
    fn test_tscai_periodicity_range_null() {
        let tscai: TscaiInputContainer =
            decode_str(r#"{"periodicity": 10, "periodicityRange": null}"#).unwrap();
        assert!(tscai.periodicity_range.is_null());
        assert_eq!(
            encode_value(&tscai).unwrap(),
            json!({ "periodicity": 10, "periodicityRange": null })
        );
    }
}
