use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    AccessType, AfEvent, AfNotifMethod, AppDetectionNotifType, BridgeManagementContainer,
    FinalUnitAction, Flows, Ipv6Addr, Ipv6Prefix, L4sNotifType, MediaComponentResourcesStatus,
    NetLocAccessSupport, PlmnIdNid, PortManagementContainer, QosMonitoringParamType,
    QosNotifType, RatType, RequestedQosMonitoringParameter, RequiredAccessInfo, Rsn,
    SatelliteBackhaulCategory, SscMode, UserLocation,
};
use crate::codec::impl_model;
use crate::nullable::Nullable;
use crate::presence::is_absent;
use crate::validate::{Check, Validate, ValidationError, BIT_RATE, IPV4};

/// One event the AF subscribes to, with how it wants to be told.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AfEventSubscription {
    pub event: AfEvent,
    #[serde(skip_serializing_if = "is_absent")]
    pub notif_method: Option<AfNotifMethod>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rep_period: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub wait_time: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub qos_mon_param_type: Option<QosMonitoringParamType>,
}

impl AfEventSubscription {
    pub fn new(event: AfEvent) -> Self {
        Self {
            event,
            ..Default::default()
        }
    }
}

impl_model!(AfEventSubscription, ["event"]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QosMonitoringInformation {
    #[serde(skip_serializing_if = "is_absent")]
    pub rep_thresh_dl: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rep_thresh_ul: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rep_thresh_rp: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rep_thresh_dat_rate_ul: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rep_thresh_dat_rate_dl: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub con_thresh_dl: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub con_thresh_ul: Option<i32>,
}

impl_model!(QosMonitoringInformation);

impl Validate for QosMonitoringInformation {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("QosMonitoringInformation");
        check.optional("repThreshDatRateUl", self.rep_thresh_dat_rate_ul.as_deref(), &BIT_RATE)?;
        check.optional("repThreshDatRateDl", self.rep_thresh_dat_rate_dl.as_deref(), &BIT_RATE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QosMonitoringInformationRm {
    #[serde(skip_serializing_if = "is_absent")]
    pub rep_thresh_dl: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rep_thresh_ul: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rep_thresh_rp: Option<i32>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub rep_thresh_dat_rate_ul: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub rep_thresh_dat_rate_dl: Nullable<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub con_thresh_dl: Nullable<i32>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub con_thresh_ul: Nullable<i32>,
}

impl_model!(QosMonitoringInformationRm);

impl Validate for QosMonitoringInformationRm {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("QosMonitoringInformationRm");
        check.optional(
            "repThreshDatRateUl",
            self.rep_thresh_dat_rate_ul.get().map(String::as_str),
            &BIT_RATE,
        )?;
        check.optional(
            "repThreshDatRateDl",
            self.rep_thresh_dat_rate_dl.get().map(String::as_str),
            &BIT_RATE,
        )
    }
}

/// Usage limits; volumes in octets, duration in seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UsageThreshold {
    #[serde(skip_serializing_if = "is_absent")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub total_volume: Option<i64>,
    #[serde(skip_serializing_if = "is_absent")]
    pub downlink_volume: Option<i64>,
    #[serde(skip_serializing_if = "is_absent")]
    pub uplink_volume: Option<i64>,
}

impl_model!(UsageThreshold);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UsageThresholdRm {
    #[serde(default, skip_serializing_if = "is_absent")]
    pub duration: Nullable<i32>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub total_volume: Nullable<i64>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub downlink_volume: Nullable<i64>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub uplink_volume: Nullable<i64>,
}

impl_model!(UsageThresholdRm);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AccumulatedUsage {
    #[serde(skip_serializing_if = "is_absent")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub total_volume: Option<i64>,
    #[serde(skip_serializing_if = "is_absent")]
    pub downlink_volume: Option<i64>,
    #[serde(skip_serializing_if = "is_absent")]
    pub uplink_volume: Option<i64>,
}

impl_model!(AccumulatedUsage);

/// Subscription to events on an application session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EventsSubscReqData {
    pub events: Vec<AfEventSubscription>,
    #[serde(skip_serializing_if = "is_absent")]
    pub notif_uri: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub req_qos_mon_params: Option<Vec<RequestedQosMonitoringParameter>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub qos_mon: Option<QosMonitoringInformation>,
    #[serde(skip_serializing_if = "is_absent")]
    pub qos_mon_dat_rate: Option<QosMonitoringInformation>,
    #[serde(skip_serializing_if = "is_absent")]
    pub pdv_req_mon_params: Option<Vec<RequestedQosMonitoringParameter>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub pdv_mon: Option<QosMonitoringInformation>,
    #[serde(skip_serializing_if = "is_absent")]
    pub congest_mon: Option<QosMonitoringInformation>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rtt_mon: Option<QosMonitoringInformation>,
    #[serde(skip_serializing_if = "is_absent")]
    pub req_anis: Option<Vec<RequiredAccessInfo>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub usg_thres: Option<UsageThreshold>,
    #[serde(skip_serializing_if = "is_absent")]
    pub notif_corre_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub af_app_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub direct_notif_ind: Option<bool>,
    #[serde(skip_serializing_if = "is_absent")]
    pub avrg_wndw: Option<i32>,
}

impl EventsSubscReqData {
    pub fn new(events: Vec<AfEventSubscription>) -> Self {
        Self {
            events,
            ..Default::default()
        }
    }
}

impl_model!(EventsSubscReqData, ["events"]);

impl Validate for EventsSubscReqData {
    fn validate(&self) -> Result<(), ValidationError> {
        self.qos_mon.validate()?;
        self.qos_mon_dat_rate.validate()?;
        self.pdv_mon.validate()?;
        self.congest_mon.validate()?;
        self.rtt_mon.validate()
    }
}

/// Patch form of [`EventsSubscReqData`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EventsSubscReqDataRm {
    pub events: Vec<AfEventSubscription>,
    #[serde(skip_serializing_if = "is_absent")]
    pub notif_uri: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub req_qos_mon_params: Option<Vec<RequestedQosMonitoringParameter>>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub qos_mon: Nullable<QosMonitoringInformationRm>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub qos_mon_dat_rate: Nullable<QosMonitoringInformationRm>,
    #[serde(skip_serializing_if = "is_absent")]
    pub pdv_req_mon_params: Option<Vec<RequestedQosMonitoringParameter>>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub pdv_mon: Nullable<QosMonitoringInformationRm>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub congest_mon: Nullable<QosMonitoringInformationRm>,
    #[serde(skip_serializing_if = "is_absent")]
    pub req_anis: Option<Vec<RequiredAccessInfo>>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub usg_thres: Nullable<UsageThresholdRm>,
    #[serde(skip_serializing_if = "is_absent")]
    pub notif_corre_id: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub direct_notif_ind: Nullable<bool>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub avrg_wndw: Nullable<i32>,
}

impl EventsSubscReqDataRm {
    pub fn new(events: Vec<AfEventSubscription>) -> Self {
        Self {
            events,
            ..Default::default()
        }
    }
}

impl_model!(EventsSubscReqDataRm, ["events"]);

impl Validate for EventsSubscReqDataRm {
    fn validate(&self) -> Result<(), ValidationError> {
        self.qos_mon.validate()?;
        self.qos_mon_dat_rate.validate()?;
        self.pdv_mon.validate()?;
        self.congest_mon.validate()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AfEventNotification {
    pub event: AfEvent,
    #[serde(skip_serializing_if = "is_absent")]
    pub flows: Option<Vec<Flows>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub retry_after: Option<i32>,
}

impl AfEventNotification {
    pub fn new(event: AfEvent) -> Self {
        Self {
            event,
            flows: None,
            retry_after: None,
        }
    }
}

impl_model!(AfEventNotification, ["event"]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QosMonitoringReport {
    #[serde(skip_serializing_if = "is_absent")]
    pub flows: Option<Vec<Flows>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ul_delays: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub dl_delays: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rt_delays: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub pdmf: Option<bool>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ul_con_info: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub dl_con_info: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ul_data_rate: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub dl_data_rate: Option<String>,
}

impl_model!(QosMonitoringReport);

impl Validate for QosMonitoringReport {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("QosMonitoringReport");
        check.optional("ulDataRate", self.ul_data_rate.as_deref(), &BIT_RATE)?;
        check.optional("dlDataRate", self.dl_data_rate.as_deref(), &BIT_RATE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PdvMonitoringReport {
    #[serde(skip_serializing_if = "is_absent")]
    pub flows: Option<Vec<Flows>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ul_pdv: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub dl_pdv: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rt_pdv: Option<i32>,
}

impl_model!(PdvMonitoringReport);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QosNotificationControlInfo {
    pub notif_type: QosNotifType,
    #[serde(skip_serializing_if = "is_absent")]
    pub flows: Option<Vec<Flows>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub alt_ser_req: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub alt_ser_req_not_supp_ind: Option<bool>,
}

impl QosNotificationControlInfo {
    pub fn new(notif_type: QosNotifType) -> Self {
        Self {
            notif_type,
            ..Default::default()
        }
    }
}

impl_model!(QosNotificationControlInfo, ["notifType"]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResourcesAllocationInfo {
    #[serde(skip_serializing_if = "is_absent")]
    pub mc_resourc_status: Option<MediaComponentResourcesStatus>,
    #[serde(skip_serializing_if = "is_absent")]
    pub flows: Option<Vec<Flows>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub alt_ser_req: Option<String>,
}

impl_model!(ResourcesAllocationInfo);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OutOfCreditInformation {
    pub fin_unit_act: FinalUnitAction,
    #[serde(skip_serializing_if = "is_absent")]
    pub flows: Option<Vec<Flows>>,
}

impl OutOfCreditInformation {
    pub fn new(fin_unit_act: FinalUnitAction) -> Self {
        Self {
            fin_unit_act,
            flows: None,
        }
    }
}

impl_model!(OutOfCreditInformation, ["finUnitAct"]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct L4sSupport {
    pub notif_type: L4sNotifType,
    #[serde(skip_serializing_if = "is_absent")]
    pub flows: Option<Vec<Flows>>,
}

impl L4sSupport {
    pub fn new(notif_type: L4sNotifType) -> Self {
        Self {
            notif_type,
            flows: None,
        }
    }
}

impl_model!(L4sSupport, ["notifType"]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppDetectionReport {
    pub ad_notif_type: AppDetectionNotifType,
    pub af_app_id: String,
}

impl AppDetectionReport {
    pub fn new(ad_notif_type: AppDetectionNotifType, af_app_id: impl Into<String>) -> Self {
        Self {
            ad_notif_type,
            af_app_id: af_app_id.into(),
        }
    }
}

impl_model!(AppDetectionReport, ["adNotifType", "afAppId"]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AccessNetChargingIdentifier {
    #[serde(skip_serializing_if = "is_absent")]
    pub acc_net_cha_id_value: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub acc_net_charg_id_string: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub flows: Option<Vec<Flows>>,
}

impl_model!(AccessNetChargingIdentifier);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AccNetChargingAddress {
    #[serde(skip_serializing_if = "is_absent")]
    pub an_charg_ipv4_addr: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub an_charg_ipv6_addr: Option<Ipv6Addr>,
}

impl_model!(AccNetChargingAddress);

impl Validate for AccNetChargingAddress {
    fn validate(&self) -> Result<(), ValidationError> {
        Check::new("AccNetChargingAddress").optional(
            "anChargIpv4Addr",
            self.an_charg_ipv4_addr.as_deref(),
            &IPV4,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnGwAddress {
    #[serde(skip_serializing_if = "is_absent")]
    pub an_gw_ipv4_addr: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub an_gw_ipv6_addr: Option<Ipv6Addr>,
}

impl_model!(AnGwAddress);

impl Validate for AnGwAddress {
    fn validate(&self) -> Result<(), ValidationError> {
        Check::new("AnGwAddress").optional("anGwIpv4Addr", self.an_gw_ipv4_addr.as_deref(), &IPV4)
    }
}

/// Access type and RAT of an additional or released access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AdditionalAccessInfo {
    pub access_type: AccessType,
    #[serde(skip_serializing_if = "is_absent")]
    pub rat_type: Option<RatType>,
}

impl AdditionalAccessInfo {
    pub fn new(access_type: AccessType) -> Self {
        Self {
            access_type,
            rat_type: None,
        }
    }
}

impl_model!(AdditionalAccessInfo, ["accessType"]);

/// BAT offset reported by the RAN and the adjusted periodicity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BatOffsetInfo {
    pub ran_bat_offset_notif: i32,
    #[serde(skip_serializing_if = "is_absent")]
    pub adj_period: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub flows: Option<Vec<Flows>>,
}

impl BatOffsetInfo {
    pub fn new(ran_bat_offset_notif: i32) -> Self {
        Self {
            ran_bat_offset_notif,
            adj_period: None,
            flows: None,
        }
    }
}

impl_model!(BatOffsetInfo, ["ranBatOffsetNotif"]);

/// QoS monitoring result sent straight from the UPF.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DirectNotificationReport {
    pub qos_mon_param_type: QosMonitoringParamType,
    #[serde(skip_serializing_if = "is_absent")]
    pub flows: Option<Vec<Flows>>,
}

impl DirectNotificationReport {
    pub fn new(qos_mon_param_type: QosMonitoringParamType) -> Self {
        Self {
            qos_mon_param_type,
            flows: None,
        }
    }
}

impl_model!(DirectNotificationReport, ["qosMonParamType"]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NgApCause {
    pub group: i32,
    pub value: i32,
}

impl NgApCause {
    pub fn new(group: i32, value: i32) -> Self {
        Self { group, value }
    }
}

impl_model!(NgApCause, ["group", "value"]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RanNasRelCause {
    #[serde(skip_serializing_if = "is_absent")]
    pub ng_ap_cause: Option<NgApCause>,
    #[serde(rename = "5gMmCause", skip_serializing_if = "is_absent")]
    pub five_g_mm_cause: Option<i32>,
    #[serde(rename = "5gSmCause", skip_serializing_if = "is_absent")]
    pub five_g_sm_cause: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub eps_cause: Option<String>,
}

impl_model!(RanNasRelCause);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RedundantPduSessionInformation {
    pub rsn: Rsn,
    #[serde(skip_serializing_if = "is_absent")]
    pub pdu_session_pair_id: Option<i32>,
}

impl RedundantPduSessionInformation {
    pub fn new(rsn: Rsn) -> Self {
        Self {
            rsn,
            pdu_session_pair_id: None,
        }
    }
}

impl_model!(RedundantPduSessionInformation, ["rsn"]);

/// Notification of one or more events on an application session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EventsNotification {
    #[serde(skip_serializing_if = "is_absent")]
    pub ad_reports: Option<Vec<AppDetectionReport>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub access_type: Option<AccessType>,
    #[serde(skip_serializing_if = "is_absent")]
    pub add_access_info: Option<AdditionalAccessInfo>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rel_access_info: Option<AdditionalAccessInfo>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub an_charg_addr: Nullable<AccNetChargingAddress>,
    #[serde(skip_serializing_if = "is_absent")]
    pub an_charg_ids: Option<Vec<AccessNetChargingIdentifier>>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub an_gw_addr: Nullable<AnGwAddress>,
    #[serde(skip_serializing_if = "is_absent")]
    pub l4s_reports: Option<Vec<L4sSupport>>,
    pub ev_subs_uri: String,
    pub ev_notifs: Vec<AfEventNotification>,
    #[serde(skip_serializing_if = "is_absent")]
    pub failed_resourc_alloc_reports: Option<Vec<ResourcesAllocationInfo>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub succ_resourc_alloc_reports: Option<Vec<ResourcesAllocationInfo>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub no_net_loc_supp: Option<NetLocAccessSupport>,
    #[serde(skip_serializing_if = "is_absent")]
    pub out_of_cred_reports: Option<Vec<OutOfCreditInformation>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub plmn_id: Option<PlmnIdNid>,
    #[serde(skip_serializing_if = "is_absent")]
    pub qnc_reports: Option<Vec<QosNotificationControlInfo>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub qos_mon_reports: Option<Vec<QosMonitoringReport>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub qos_mon_dat_rate_reps: Option<Vec<QosMonitoringReport>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub pdv_mon_reports: Option<Vec<PdvMonitoringReport>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub congest_reports: Option<Vec<QosMonitoringReport>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rtt_mon_reports: Option<Vec<QosMonitoringReport>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ran_nas_rel_causes: Option<Vec<RanNasRelCause>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rat_type: Option<RatType>,
    #[serde(skip_serializing_if = "is_absent")]
    pub sat_backhaul_category: Option<SatelliteBackhaulCategory>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ue_loc: Option<UserLocation>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ue_loc_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ue_time_zone: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub usg_rep: Option<AccumulatedUsage>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ursp_enf_rep: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ssc_mode: Option<SscMode>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ue_req_dnn: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub redundant_pdu_session_info: Option<RedundantPduSessionInformation>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tsn_bridge_man_cont: Option<BridgeManagementContainer>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tsn_port_man_cont_dstt: Option<PortManagementContainer>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tsn_port_man_cont_nwtts: Option<Vec<PortManagementContainer>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ipv4_addr_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ipv6_prefix_list: Option<Vec<Ipv6Prefix>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub bat_offset_info: Option<BatOffsetInfo>,
}

impl EventsNotification {
    pub fn new(ev_subs_uri: impl Into<String>, ev_notifs: Vec<AfEventNotification>) -> Self {
        Self {
            ev_subs_uri: ev_subs_uri.into(),
            ev_notifs,
            ..Default::default()
        }
    }
}

impl_model!(EventsNotification, ["evSubsUri", "evNotifs"]);

impl Validate for EventsNotification {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("EventsNotification");
        self.an_charg_addr.validate()?;
        self.an_gw_addr.validate()?;
        self.plmn_id.validate()?;
        self.qos_mon_reports.validate()?;
        self.qos_mon_dat_rate_reps.validate()?;
        self.congest_reports.validate()?;
        self.rtt_mon_reports.validate()?;
        self.ue_loc.validate()?;
        for addr in self.ipv4_addr_list.iter().flatten() {
            check.required("ipv4AddrList", addr, &IPV4)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, decode_value, encode_value, CodecError};
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_events_notification_required_order() {
        let err = decode_str::<EventsNotification>("{}").unwrap_err();
        assert_matches!(err, CodecError::MissingRequired { property: "evSubsUri", .. });

        let err = decode_str::<EventsNotification>(r#"{"evSubsUri": "https://af.example/ev"}"#)
            .unwrap_err();
        assert_matches!(err, CodecError::MissingRequired { property: "evNotifs", .. });
    }

    #[test]
    fn test_events_notification_full() {
        let body = json!({
            "evSubsUri": "https://af.example/ev",
            "evNotifs": [
                { "event": "QOS_NOTIF", "flows": [{ "medCompN": 1, "fNums": [1] }] },
                { "event": "SOME_FUTURE_EVENT" }
            ],
            "accessType": "3GPP_ACCESS",
            "anGwAddr": null,
            "qncReports": [{ "notifType": "NOT_GUARANTEED" }],
            "ranNasRelCauses": [{ "5gMmCause": 9, "ngApCause": { "group": 1, "value": 2 } }],
            "ipv4AddrList": ["198.51.100.7"]
        });
        let notif: EventsNotification = decode_value(body).unwrap();
        assert_eq!(notif.ev_notifs.len(), 2);
        assert!(notif.ev_notifs[0].event.is_known());
        assert!(!notif.ev_notifs[1].event.is_known());
        assert_eq!(notif.access_type, Some(AccessType::ThreeGppAccess));
        assert!(notif.an_gw_addr.is_null());
        assert_eq!(notif.ran_nas_rel_causes.as_ref().unwrap()[0].five_g_mm_cause, Some(9));
        assert!(notif.validate().is_ok());

        let out = encode_value(&notif).unwrap();
        assert_eq!(out["anGwAddr"], json!(null));
        assert_eq!(out["ranNasRelCauses"][0]["5gMmCause"], json!(9));
        assert!(out.get("anChargAddr").is_none());
    }

    #[test]
    fn test_bad_ipv4_in_list() {
        let mut notif = EventsNotification::new("https://af.example/ev", vec![]);
        notif.ipv4_addr_list = Some(vec!["10.0.0.300".to_string()]);
        assert_eq!(notif.validate().unwrap_err().property, "ipv4AddrList");
    }

    #[test]
    fn test_subscription_rm_clears_monitoring() {
        let body = json!({
            "events": [{ "event": "QOS_MONITORING", "notifMethod": "PERIODIC", "repPeriod": 10 }],
            "qosMon": null,
            "usgThres": { "totalVolume": null, "duration": 60 },
            "directNotifInd": false
        });
        let rm: EventsSubscReqDataRm = decode_value(body.clone()).unwrap();
        assert!(rm.qos_mon.is_null());
        assert!(rm.pdv_mon.is_unset());
        let usg = rm.usg_thres.get().unwrap();
        assert!(usg.total_volume.is_null());
        assert_eq!(usg.duration, Nullable::Value(60));
        assert_eq!(rm.direct_notif_ind, Nullable::Value(false));
        assert_eq!(encode_value(&rm).unwrap(), body);
    }

    #[test]
    fn test_additional_access_info_closed_enum() {
        let err = decode_str::<AdditionalAccessInfo>(r#"{"accessType": "WIFI"}"#).unwrap_err();
        assert_matches!(err, CodecError::Decode { .. });
        let info: AdditionalAccessInfo =
            decode_str(r#"{"accessType": "NON_3GPP_ACCESS", "ratType": "WLAN"}"#).unwrap();
        assert_eq!(info.access_type, AccessType::NonThreeGppAccess);
    }

    #[test]
    fn test_qos_monitoring_rm_bitrate_checked() {
        let mut rm = QosMonitoringInformationRm::default();
        rm.rep_thresh_dat_rate_dl.set("lots".to_string());
        assert_eq!(rm.validate().unwrap_err().property, "repThreshDatRateDl");
        rm.rep_thresh_dat_rate_dl.set_null();
        assert!(rm.validate().is_ok());
    }
}
