//! Open enumerations. Each is an `anyOf` of the listed values and a free
//! string, so values added by newer releases still decode.

use crate::union::string_union;

string_union! {
    /// Indicates the protocol used for signalling between the UE and the AF.
    AfSigProtocol {
        NO_INFORMATION => "NO_INFORMATION",
        SIP => "SIP",
    }
}

string_union! {
    /// Represents an event to notify to the AF.
    AfEvent {
        ACCESS_TYPE_CHANGE => "ACCESS_TYPE_CHANGE",
        ANI_REPORT => "ANI_REPORT",
        APP_DETECTION => "APP_DETECTION",
        BAT_OFFSET_INFO => "BAT_OFFSET_INFO",
        CHARGING_CORRELATION => "CHARGING_CORRELATION",
        EPS_FALLBACK => "EPS_FALLBACK",
        FAILED_QOS_UPDATE => "FAILED_QOS_UPDATE",
        FAILED_RESOURCES_ALLOCATION => "FAILED_RESOURCES_ALLOCATION",
        L4S_SUPP => "L4S_SUPP",
        OUT_OF_CREDIT => "OUT_OF_CREDIT",
        PDU_SESSION_STATUS => "PDU_SESSION_STATUS",
        PDV_MONITORING => "PDV_MONITORING",
        PLMN_CHG => "PLMN_CHG",
        QOS_MONITORING => "QOS_MONITORING",
        QOS_NOTIF => "QOS_NOTIF",
        RAN_NAS_CAUSE => "RAN_NAS_CAUSE",
        REALLOCATION_OF_CREDIT => "REALLOCATION_OF_CREDIT",
        RT_DELAY_TWO_QOS_FLOWS => "RT_DELAY_TWO_QOS_FLOWS",
        SAT_CATEGORY_CHG => "SAT_CATEGORY_CHG",
        SUCCESSFUL_QOS_UPDATE => "SUCCESSFUL_QOS_UPDATE",
        SUCCESSFUL_RESOURCES_ALLOCATION => "SUCCESSFUL_RESOURCES_ALLOCATION",
        TSN_BRIDGE_INFO => "TSN_BRIDGE_INFO",
        UE_TEMPORARILY_UNAVAILABLE => "UE_TEMPORARILY_UNAVAILABLE",
        UP_PATH_CHG_FAILURE => "UP_PATH_CHG_FAILURE",
        URSP_ENF_INFO => "URSP_ENF_INFO",
        USAGE_REPORT => "USAGE_REPORT",
    }
}

string_union! {
    /// Represents the information that the AF requested to be exposed.
    AfRequestedData {
        UE_IDENTITY => "UE_IDENTITY",
    }
}

string_union! {
    /// Indicates that a common DNAI or common EAS should be selected.
    CorrelationType {
        COMMON_DNAI => "COMMON_DNAI",
        COMMON_EAS => "COMMON_EAS",
    }
}

string_union! {
    FinalUnitAction {
        TERMINATE => "TERMINATE",
        REDIRECT => "REDIRECT",
        RESTRICT_ACCESS => "RESTRICT_ACCESS",
    }
}

string_union! {
    /// Notification type for ECN marking for L4S support in 5GS.
    L4sNotifType {
        AVAILABLE => "AVAILABLE",
        NOT_AVAILABLE => "NOT_AVAILABLE",
    }
}

string_union! {
    /// Transport protocol used for a media flow.
    MediaTransportProto {
        RTP => "RTP",
        SRTP => "SRTP",
        MOQT => "MOQT",
    }
}

string_union! {
    /// Invocation, revocation, or invocation with authorization of MPS for DTS.
    MpsAction {
        DISABLE_MPS_FOR_DTS => "DISABLE_MPS_FOR_DTS",
        ENABLE_MPS_FOR_DTS => "ENABLE_MPS_FOR_DTS",
        AUTHORIZE_AND_ENABLE_MPS_FOR_DTS => "AUTHORIZE_AND_ENABLE_MPS_FOR_DTS",
    }
}

string_union! {
    /// Access network support of the report of the requested access network information.
    NetLocAccessSupport {
        ANR_NOT_SUPPORTED => "ANR_NOT_SUPPORTED",
        TZR_NOT_SUPPORTED => "TZR_NOT_SUPPORTED",
        LOC_NOT_SUPPORTED => "LOC_NOT_SUPPORTED",
    }
}

string_union! {
    NoProfileMatchReason {
        REQUESTER_PLMN_NOT_ALLOWED => "REQUESTER_PLMN_NOT_ALLOWED",
        TARGET_NF_SUSPENDED => "TARGET_NF_SUSPENDED",
        TARGET_NF_UNDISCOVERABLE => "TARGET_NF_UNDISCOVERABLE",
        QUERY_PARAMS_COMBINATION_NO_MATCH => "QUERY_PARAMS_COMBINATION_NO_MATCH",
        TARGET_NF_TYPE_NOT_SUPPORTED => "TARGET_NF_TYPE_NOT_SUPPORTED",
        UNSPECIFIED => "UNSPECIFIED",
    }
}

string_union! {
    QosMonitoringParamType {
        PACKET_DELAY => "PACKET_DELAY",
        CONGESTION => "CONGESTION",
        DATA_RATE => "DATA_RATE",
    }
}

string_union! {
    /// Radio access used.
    RatType {
        NR => "NR",
        EUTRA => "EUTRA",
        WLAN => "WLAN",
        VIRTUAL => "VIRTUAL",
        NBIOT => "NBIOT",
        WIRELINE => "WIRELINE",
        WIRELINE_CABLE => "WIRELINE_CABLE",
        WIRELINE_BBF => "WIRELINE_BBF",
        LTE_M => "LTE-M",
        NR_U => "NR_U",
        EUTRA_U => "EUTRA_U",
        TRUSTED_N3GA => "TRUSTED_N3GA",
        TRUSTED_WLAN => "TRUSTED_WLAN",
        UTRA => "UTRA",
        GERA => "GERA",
        NR_LEO => "NR_LEO",
        NR_MEO => "NR_MEO",
        NR_GEO => "NR_GEO",
        NR_OTHER_SAT => "NR_OTHER_SAT",
        NR_REDCAP => "NR_REDCAP",
        NR_EREDCAP => "NR_EREDCAP",
    }
}

string_union! {
    RtpHeaderExtType {
        PDU_SET_MARKING => "PDU_SET_MARKING",
        DYN_CHANGING_TRAFFIC_CHAR => "DYN_CHANGING_TRAFFIC_CHAR",
    }
}

string_union! {
    SatelliteBackhaulCategory {
        GEO => "GEO",
        MEO => "MEO",
        LEO => "LEO",
        OTHER_SAT => "OTHER_SAT",
        DYNAMIC_GEO => "DYNAMIC_GEO",
        DYNAMIC_MEO => "DYNAMIC_MEO",
        DYNAMIC_LEO => "DYNAMIC_LEO",
        DYNAMIC_OTHER_SAT => "DYNAMIC_OTHER_SAT",
        NON_SATELLITE => "NON_SATELLITE",
    }
}

string_union! {
    /// Preliminary or final service information status.
    ServiceInfoStatus {
        FINAL => "FINAL",
        PRELIMINARY => "PRELIMINARY",
    }
}

string_union! {
    /// Transport protocol used in a given IP endpoint of an NF service instance.
    TransportProtocol {
        TCP => "TCP",
    }
}

string_union! {
    FlowDirection {
        DOWNLINK => "DOWNLINK",
        UPLINK => "UPLINK",
        BIDIRECTIONAL => "BIDIRECTIONAL",
        UNSPECIFIED => "UNSPECIFIED",
    }
}

string_union! {
    FlowStatus {
        ENABLED_UPLINK => "ENABLED-UPLINK",
        ENABLED_DOWNLINK => "ENABLED-DOWNLINK",
        ENABLED => "ENABLED",
        DISABLED => "DISABLED",
        REMOVED => "REMOVED",
    }
}

string_union! {
    FlowUsage {
        NO_INFO => "NO_INFO",
        RTCP => "RTCP",
        AF_SIGNALLING => "AF_SIGNALLING",
    }
}

string_union! {
    AfNotifMethod {
        EVENT_DETECTION => "EVENT_DETECTION",
        ONE_TIME => "ONE_TIME",
        PERIODIC => "PERIODIC",
        PDU_SESSION_RELEASE => "PDU_SESSION_RELEASE",
    }
}

string_union! {
    AppDetectionNotifType {
        APP_START => "APP_START",
        APP_STOP => "APP_STOP",
    }
}

string_union! {
    QosNotifType {
        GUARANTEED => "GUARANTEED",
        NOT_GUARANTEED => "NOT_GUARANTEED",
    }
}

string_union! {
    MediaComponentResourcesStatus {
        ACTIVE => "ACTIVE",
        INACTIVE => "INACTIVE",
    }
}

string_union! {
    TerminationCause {
        ALL_SDF_DEACTIVATION => "ALL_SDF_DEACTIVATION",
        PDU_SESSION_TERMINATION => "PDU_SESSION_TERMINATION",
        PS_TO_CS_HO => "PS_TO_CS_HO",
        INSUFFICIENT_SERVER_RESOURCES => "INSUFFICIENT_SERVER_RESOURCES",
        INSUFFICIENT_QOS_FLOW_RESOURCES => "INSUFFICIENT_QOS_FLOW_RESOURCES",
        SPONSORED_DATA_CONNECTIVITY_DISALLOWED => "SPONSORED_DATA_CONNECTIVITY_DISALLOWED",
    }
}

string_union! {
    MatchingOperator {
        FULL_MATCH => "FULL_MATCH",
        MATCH_ALL => "MATCH_ALL",
        STARTS_WITH => "STARTS_WITH",
        NOT_START_WITH => "NOT_START_WITH",
        ENDS_WITH => "ENDS_WITH",
        NOT_END_WITH => "NOT_END_WITH",
        CONTAINS => "CONTAINS",
        NOT_CONTAIN => "NOT_CONTAIN",
    }
}

string_union! {
    SscMode {
        SSC_MODE_1 => "SSC_MODE_1",
        SSC_MODE_2 => "SSC_MODE_2",
        SSC_MODE_3 => "SSC_MODE_3",
    }
}

string_union! {
    UplinkDownlinkSupport {
        UL => "UL",
        DL => "DL",
        UL_DL => "UL_DL",
    }
}

string_union! {
    /// Redundancy sequence number of a redundant PDU session.
    Rsn {
        V1 => "V1",
        V2 => "V2",
    }
}

string_union! {
    PduSetHandlingInfo {
        ALL_DROP => "ALL_DROP",
        MAY_DROP => "MAY_DROP",
    }
}

string_union! {
    RtpPayloadFormat {
        H264 => "H264",
        H265 => "H265",
    }
}

string_union! {
    RequiredAccessInfo {
        USER_LOCATION => "USER_LOCATION",
        UE_TIME_ZONE => "UE_TIME_ZONE",
    }
}

string_union! {
    PreemptionCapability {
        NOT_PREEMPT => "NOT_PREEMPT",
        MAY_PREEMPT => "MAY_PREEMPT",
    }
}

string_union! {
    PreemptionVulnerability {
        NOT_PREEMPTABLE => "NOT_PREEMPTABLE",
        PREEMPTABLE => "PREEMPTABLE",
    }
}

string_union! {
    PrioritySharingIndicator {
        ENABLED => "ENABLED",
        DISABLED => "DISABLED",
    }
}

string_union! {
    ReservPriority {
        PRIO_1 => "PRIO_1",
        PRIO_2 => "PRIO_2",
        PRIO_3 => "PRIO_3",
        PRIO_4 => "PRIO_4",
        PRIO_5 => "PRIO_5",
        PRIO_6 => "PRIO_6",
        PRIO_7 => "PRIO_7",
        PRIO_8 => "PRIO_8",
        PRIO_9 => "PRIO_9",
        PRIO_10 => "PRIO_10",
        PRIO_11 => "PRIO_11",
        PRIO_12 => "PRIO_12",
        PRIO_13 => "PRIO_13",
        PRIO_14 => "PRIO_14",
        PRIO_15 => "PRIO_15",
        PRIO_16 => "PRIO_16",
    }
}

string_union! {
    SponsoringStatus {
        SPONSOR_DISABLED => "SPONSOR_DISABLED",
        SPONSOR_ENABLED => "SPONSOR_ENABLED",
    }
}

string_union! {
    SipForkingIndication {
        SINGLE_DIALOGUE => "SINGLE_DIALOGUE",
        SEVERAL_DIALOGUES => "SEVERAL_DIALOGUES",
    }
}

string_union! {
    /// Result of the PCF's authorization of the service information.
    ServAuthInfo {
        TP_NOT_KNOWN => "TP_NOT_KNOWN",
        TP_EXPIRED => "TP_EXPIRED",
        TP_NOT_YET_OCURRED => "TP_NOT_YET_OCURRED",
        ROUT_REQ_NOT_AUTHORIZED => "ROUT_REQ_NOT_AUTHORIZED",
        MIN_QOS_NOT_AUTHORIZED => "MIN_QOS_NOT_AUTHORIZED",
        REQ_QOS_NOT_AUTHORIZED => "REQ_QOS_NOT_AUTHORIZED",
    }
}

string_union! {
    PreemptionControlInformation {
        MOST_RECENT => "MOST_RECENT",
        LEAST_RECENT => "LEAST_RECENT",
        HIGHEST_BW => "HIGHEST_BW",
    }
}

string_union! {
    DnaiChangeType {
        EARLY => "EARLY",
        EARLY_LATE => "EARLY_LATE",
        LATE => "LATE",
    }
}

string_union! {
    PresenceState {
        IN_AREA => "IN_AREA",
        OUT_OF_AREA => "OUT_OF_AREA",
        UNKNOWN => "UNKNOWN",
        INACTIVE => "INACTIVE",
    }
}

string_union! {
    RequestedQosMonitoringParameter {
        DOWNLINK => "DOWNLINK",
        UPLINK => "UPLINK",
        ROUND_TRIP => "ROUND_TRIP",
    }
}

string_union! {
    MediaType {
        AUDIO => "AUDIO",
        VIDEO => "VIDEO",
        DATA => "DATA",
        APPLICATION => "APPLICATION",
        CONTROL => "CONTROL",
        TEXT => "TEXT",
        MESSAGE => "MESSAGE",
        OTHER => "OTHER",
    }
}

string_union! {
    /// Wireline access line type.
    LineType {
        DSL => "DSL",
        PON => "PON",
    }
}
