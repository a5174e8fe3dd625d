use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Ipv6Addr, LineType, PlmnId, PlmnIdNid, TransportProtocol};
use crate::codec::impl_model;
use crate::nullable::Nullable;
use crate::presence::is_absent;
use crate::validate::{
    Check, Validate, ValidationError, EUTRA_CELL_ID, GEODETIC_INFORMATION,
    GEOGRAPHICAL_INFORMATION, GNB_VALUE, HEX4, IPV4, NID, NR_CELL_ID, RAC, TAC,
};

/// Tracking Area Identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Tai {
    pub plmn_id: PlmnId,
    pub tac: String,
    #[serde(skip_serializing_if = "is_absent")]
    pub nid: Option<String>,
}

impl Tai {
    pub fn new(plmn_id: PlmnId, tac: impl Into<String>) -> Self {
        Self {
            plmn_id,
            tac: tac.into(),
            nid: None,
        }
    }
}

impl_model!(Tai, ["plmnId", "tac"]);

impl Validate for Tai {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("Tai");
        self.plmn_id.validate()?;
        check.required("tac", &self.tac, &TAC)?;
        check.optional("nid", self.nid.as_deref(), &NID)
    }
}

/// NR Cell Global Identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Ncgi {
    pub plmn_id: PlmnId,
    pub nr_cell_id: String,
    #[serde(skip_serializing_if = "is_absent")]
    pub nid: Option<String>,
}

impl Ncgi {
    pub fn new(plmn_id: PlmnId, nr_cell_id: impl Into<String>) -> Self {
        Self {
            plmn_id,
            nr_cell_id: nr_cell_id.into(),
            nid: None,
        }
    }
}

impl_model!(Ncgi, ["plmnId", "nrCellId"]);

impl Validate for Ncgi {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("Ncgi");
        self.plmn_id.validate()?;
        check.required("nrCellId", &self.nr_cell_id, &NR_CELL_ID)?;
        check.optional("nid", self.nid.as_deref(), &NID)
    }
}

/// E-UTRA Cell Global Identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Ecgi {
    pub plmn_id: PlmnId,
    pub eutra_cell_id: String,
    #[serde(skip_serializing_if = "is_absent")]
    pub nid: Option<String>,
}

impl Ecgi {
    pub fn new(plmn_id: PlmnId, eutra_cell_id: impl Into<String>) -> Self {
        Self {
            plmn_id,
            eutra_cell_id: eutra_cell_id.into(),
            nid: None,
        }
    }
}

impl_model!(Ecgi, ["plmnId", "eutraCellId"]);

impl Validate for Ecgi {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("Ecgi");
        self.plmn_id.validate()?;
        check.required("eutraCellId", &self.eutra_cell_id, &EUTRA_CELL_ID)?;
        check.optional("nid", self.nid.as_deref(), &NID)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GNbId {
    pub bit_length: i32,
    #[serde(rename = "gNBValue")]
    pub g_nb_value: String,
}

impl GNbId {
    pub fn new(bit_length: i32, g_nb_value: impl Into<String>) -> Self {
        Self {
            bit_length,
            g_nb_value: g_nb_value.into(),
        }
    }
}

impl_model!(GNbId, ["bitLength", "gNBValue"]);

impl Validate for GNbId {
    fn validate(&self) -> Result<(), ValidationError> {
        Check::new("GNbId").required("gNBValue", &self.g_nb_value, &GNB_VALUE)
    }
}

/// One of several RAN node identities, always scoped to a PLMN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GlobalRanNodeId {
    pub plmn_id: PlmnId,
    #[serde(skip_serializing_if = "is_absent")]
    pub n3_iwf_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub g_nb_id: Option<GNbId>,
    #[serde(skip_serializing_if = "is_absent")]
    pub nge_nb_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub wagf_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tngf_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub nid: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub e_nb_id: Option<String>,
}

impl GlobalRanNodeId {
    pub fn new(plmn_id: PlmnId) -> Self {
        Self {
            plmn_id,
            ..Default::default()
        }
    }
}

impl_model!(GlobalRanNodeId, ["plmnId"]);

impl Validate for GlobalRanNodeId {
    fn validate(&self) -> Result<(), ValidationError> {
        self.plmn_id.validate()?;
        self.g_nb_id.validate()?;
        Check::new("GlobalRanNodeId").optional("nid", self.nid.as_deref(), &NID)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CellGlobalId {
    pub plmn_id: PlmnId,
    pub lac: String,
    pub cell_id: String,
}

impl CellGlobalId {
    pub fn new(plmn_id: PlmnId, lac: impl Into<String>, cell_id: impl Into<String>) -> Self {
        Self {
            plmn_id,
            lac: lac.into(),
            cell_id: cell_id.into(),
        }
    }
}

impl_model!(CellGlobalId, ["plmnId", "lac", "cellId"]);

impl Validate for CellGlobalId {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("CellGlobalId");
        self.plmn_id.validate()?;
        check.required("lac", &self.lac, &HEX4)?;
        check.required("cellId", &self.cell_id, &HEX4)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LocationAreaId {
    pub plmn_id: PlmnId,
    pub lac: String,
}

impl LocationAreaId {
    pub fn new(plmn_id: PlmnId, lac: impl Into<String>) -> Self {
        Self {
            plmn_id,
            lac: lac.into(),
        }
    }
}

impl_model!(LocationAreaId, ["plmnId", "lac"]);

impl Validate for LocationAreaId {
    fn validate(&self) -> Result<(), ValidationError> {
        self.plmn_id.validate()?;
        Check::new("LocationAreaId").required("lac", &self.lac, &HEX4)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RoutingAreaId {
    pub plmn_id: PlmnId,
    pub lac: String,
    pub rac: String,
}

impl RoutingAreaId {
    pub fn new(plmn_id: PlmnId, lac: impl Into<String>, rac: impl Into<String>) -> Self {
        Self {
            plmn_id,
            lac: lac.into(),
            rac: rac.into(),
        }
    }
}

impl_model!(RoutingAreaId, ["plmnId", "lac", "rac"]);

impl Validate for RoutingAreaId {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("RoutingAreaId");
        self.plmn_id.validate()?;
        check.required("lac", &self.lac, &HEX4)?;
        check.required("rac", &self.rac, &RAC)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceAreaId {
    pub plmn_id: PlmnId,
    pub lac: String,
    pub sac: String,
}

impl ServiceAreaId {
    pub fn new(plmn_id: PlmnId, lac: impl Into<String>, sac: impl Into<String>) -> Self {
        Self {
            plmn_id,
            lac: lac.into(),
            sac: sac.into(),
        }
    }
}

impl_model!(ServiceAreaId, ["plmnId", "lac", "sac"]);

impl Validate for ServiceAreaId {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("ServiceAreaId");
        self.plmn_id.validate()?;
        check.required("lac", &self.lac, &HEX4)?;
        check.required("sac", &self.sac, &HEX4)
    }
}

/// Tracking areas served by a non-terrestrial cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NtnTaiInfo {
    pub plmn_id: PlmnIdNid,
    pub tac_list: Vec<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub derived_tac: Option<String>,
}

impl NtnTaiInfo {
    pub fn new(plmn_id: PlmnIdNid, tac_list: Vec<String>) -> Self {
        Self {
            plmn_id,
            tac_list,
            derived_tac: None,
        }
    }
}

impl_model!(NtnTaiInfo, ["plmnId", "tacList"]);

impl Validate for NtnTaiInfo {
    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new("NtnTaiInfo");
        self.plmn_id.validate()?;
        for tac in &self.tac_list {
            check.required("tacList", tac, &TAC)?;
        }
        check.optional("derivedTac", self.derived_tac.as_deref(), &TAC)
    }
}

/// Shared checks for the geographic fields every access-specific location carries.
fn check_geo(
    check: &Check,
    geographical: Option<&str>,
    geodetic: Option<&str>,
) -> Result<(), ValidationError> {
    check.optional("geographicalInformation", geographical, &GEOGRAPHICAL_INFORMATION)?;
    check.optional("geodeticInformation", geodetic, &GEODETIC_INFORMATION)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EutraLocation {
    pub tai: Tai,
    #[serde(skip_serializing_if = "is_absent")]
    pub ignore_tai: Option<bool>,
    pub ecgi: Ecgi,
    #[serde(skip_serializing_if = "is_absent")]
    pub ignore_ecgi: Option<bool>,
    #[serde(skip_serializing_if = "is_absent")]
    pub age_of_location_information: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ue_location_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub geographical_information: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub geodetic_information: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub global_ngenb_id: Nullable<GlobalRanNodeId>,
    #[serde(rename = "globalENbId", default, skip_serializing_if = "is_absent")]
    pub global_e_nb_id: Nullable<GlobalRanNodeId>,
}

impl EutraLocation {
    pub fn new(tai: Tai, ecgi: Ecgi) -> Self {
        Self {
            tai,
            ecgi,
            ..Default::default()
        }
    }
}

impl_model!(EutraLocation, ["tai", "ecgi"]);

impl Validate for EutraLocation {
    fn validate(&self) -> Result<(), ValidationError> {
        self.tai.validate()?;
        self.ecgi.validate()?;
        self.global_ngenb_id.validate()?;
        self.global_e_nb_id.validate()?;
        check_geo(
            &Check::new("EutraLocation"),
            self.geographical_information.as_deref(),
            self.geodetic_information.as_deref(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NrLocation {
    pub tai: Tai,
    pub ncgi: Ncgi,
    #[serde(skip_serializing_if = "is_absent")]
    pub ignore_ncgi: Option<bool>,
    #[serde(skip_serializing_if = "is_absent")]
    pub age_of_location_information: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ue_location_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub geographical_information: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub geodetic_information: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub global_gnb_id: Nullable<GlobalRanNodeId>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ntn_tai_info: Option<NtnTaiInfo>,
}

impl NrLocation {
    pub fn new(tai: Tai, ncgi: Ncgi) -> Self {
        Self {
            tai,
            ncgi,
            ..Default::default()
        }
    }
}

impl_model!(NrLocation, ["tai", "ncgi"]);

impl Validate for NrLocation {
    fn validate(&self) -> Result<(), ValidationError> {
        self.tai.validate()?;
        self.ncgi.validate()?;
        self.global_gnb_id.validate()?;
        self.ntn_tai_info.validate()?;
        check_geo(
            &Check::new("NrLocation"),
            self.geographical_information.as_deref(),
            self.geodetic_information.as_deref(),
        )
    }
}

/// WLAN access point identity behind a TWAP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TwapId {
    pub ss_id: String,
    #[serde(skip_serializing_if = "is_absent")]
    pub bss_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub civic_address: Option<String>,
}

impl TwapId {
    pub fn new(ss_id: impl Into<String>) -> Self {
        Self {
            ss_id: ss_id.into(),
            bss_id: None,
            civic_address: None,
        }
    }
}

impl_model!(TwapId, ["ssId"]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TnapId {
    #[serde(skip_serializing_if = "is_absent")]
    pub ss_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub bss_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub civic_address: Option<String>,
}

impl_model!(TnapId);

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HfcNodeId {
    #[serde(rename = "hfcNId")]
    pub hfc_n_id: String,
}

impl HfcNodeId {
    pub fn new(hfc_n_id: impl Into<String>) -> Self {
        Self {
            hfc_n_id: hfc_n_id.into(),
        }
    }
}

impl_model!(HfcNodeId, ["hfcNId"]);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct N3gaLocation {
    #[serde(skip_serializing_if = "is_absent")]
    pub n3gpp_tai: Option<Tai>,
    #[serde(skip_serializing_if = "is_absent")]
    pub n3_iwf_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ue_ipv4_addr: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ue_ipv6_addr: Option<Ipv6Addr>,
    #[serde(skip_serializing_if = "is_absent")]
    pub port_number: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub protocol: Option<TransportProtocol>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tnap_id: Option<TnapId>,
    #[serde(skip_serializing_if = "is_absent")]
    pub twap_id: Option<TwapId>,
    #[serde(skip_serializing_if = "is_absent")]
    pub hfc_node_id: Option<HfcNodeId>,
    #[serde(skip_serializing_if = "is_absent")]
    pub gli: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub w5gban_line_type: Option<LineType>,
    #[serde(skip_serializing_if = "is_absent")]
    pub gci: Option<String>,
}

impl_model!(N3gaLocation);

impl Validate for N3gaLocation {
    fn validate(&self) -> Result<(), ValidationError> {
        self.n3gpp_tai.validate()?;
        Check::new("N3gaLocation").optional("ueIpv4Addr", self.ue_ipv4_addr.as_deref(), &IPV4)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UtraLocation {
    #[serde(skip_serializing_if = "is_absent")]
    pub cgi: Option<CellGlobalId>,
    #[serde(skip_serializing_if = "is_absent")]
    pub sai: Option<ServiceAreaId>,
    #[serde(skip_serializing_if = "is_absent")]
    pub lai: Option<LocationAreaId>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rai: Option<RoutingAreaId>,
    #[serde(skip_serializing_if = "is_absent")]
    pub age_of_location_information: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ue_location_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub geographical_information: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub geodetic_information: Option<String>,
}

impl_model!(UtraLocation);

impl Validate for UtraLocation {
    fn validate(&self) -> Result<(), ValidationError> {
        self.cgi.validate()?;
        self.sai.validate()?;
        self.lai.validate()?;
        self.rai.validate()?;
        check_geo(
            &Check::new("UtraLocation"),
            self.geographical_information.as_deref(),
            self.geodetic_information.as_deref(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GeraLocation {
    #[serde(skip_serializing_if = "is_absent")]
    pub location_number: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub cgi: Option<CellGlobalId>,
    #[serde(skip_serializing_if = "is_absent")]
    pub rai: Option<RoutingAreaId>,
    #[serde(skip_serializing_if = "is_absent")]
    pub sai: Option<ServiceAreaId>,
    #[serde(skip_serializing_if = "is_absent")]
    pub lai: Option<LocationAreaId>,
    #[serde(skip_serializing_if = "is_absent")]
    pub vlr_number: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub msc_number: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub age_of_location_information: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ue_location_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub geographical_information: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub geodetic_information: Option<String>,
}

impl_model!(GeraLocation);

impl Validate for GeraLocation {
    fn validate(&self) -> Result<(), ValidationError> {
        self.cgi.validate()?;
        self.sai.validate()?;
        self.lai.validate()?;
        self.rai.validate()?;
        check_geo(
            &Check::new("GeraLocation"),
            self.geographical_information.as_deref(),
            self.geodetic_information.as_deref(),
        )
    }
}

/// At least one access-specific location is expected, though none is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserLocation {
    #[serde(skip_serializing_if = "is_absent")]
    pub eutra_location: Option<EutraLocation>,
    #[serde(skip_serializing_if = "is_absent")]
    pub nr_location: Option<NrLocation>,
    #[serde(skip_serializing_if = "is_absent")]
    pub n3ga_location: Option<N3gaLocation>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub utra_location: Nullable<UtraLocation>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub gera_location: Nullable<GeraLocation>,
}

impl_model!(UserLocation);

impl Validate for UserLocation {
    fn validate(&self) -> Result<(), ValidationError> {
        self.eutra_location.validate()?;
        self.nr_location.validate()?;
        self.n3ga_location.validate()?;
        self.utra_location.validate()?;
        self.gera_location.validate()
    }
}

/// Presence reporting area and its member areas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PresenceInfo {
    #[serde(skip_serializing_if = "is_absent")]
    pub pra_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub additional_pra_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub presence_state: Option<super::PresenceState>,
    #[serde(skip_serializing_if = "is_absent")]
    pub tracking_area_list: Option<Vec<Tai>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ecgi_list: Option<Vec<Ecgi>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub ncgi_list: Option<Vec<Ncgi>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub global_ran_node_id_list: Option<Vec<GlobalRanNodeId>>,
    #[serde(rename = "globaleNbIdList", skip_serializing_if = "is_absent")]
    pub global_e_nb_id_list: Option<Vec<GlobalRanNodeId>>,
}

impl_model!(PresenceInfo);

impl Validate for PresenceInfo {
    fn validate(&self) -> Result<(), ValidationError> {
        self.tracking_area_list.validate()?;
        self.ecgi_list.validate()?;
        self.ncgi_list.validate()?;
        self.global_ran_node_id_list.validate()?;
        self.global_e_nb_id_list.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, decode_value, encode_value, CodecError};
    use assert_matches::assert_matches;
    use serde_json::json;

    fn plmn() -> PlmnId {
        PlmnId::new("001", "01")
    }

    #[test]
    fn test_gnb_value_wire_name() {
        let id: GNbId = decode_str(r#"{"bitLength": 24, "gNBValue": "00A1B2"}"#).unwrap();
        assert_eq!(id.g_nb_value, "00A1B2");
        assert!(id.validate().is_ok());
        assert_eq!(
            encode_value(&id).unwrap(),
            json!({ "bitLength": 24, "gNBValue": "00A1B2" })
        );
    }

    #[test]
    fn test_eutra_location_nullable_node_ids() {
        let body = json!({
            "tai": { "plmnId": { "mcc": "001", "mnc": "01" }, "tac": "00A1" },
            "ecgi": { "plmnId": { "mcc": "001", "mnc": "01" }, "eutraCellId": "A1B2C3D" },
            "globalENbId": null,
            "ueLocationTimestamp": "2024-05-01T10:00:00Z"
        });
        let loc: EutraLocation = decode_value(body).unwrap();
        assert!(loc.global_e_nb_id.is_null());
        assert!(loc.global_ngenb_id.is_unset());
        assert!(loc.validate().is_ok());

        let out = encode_value(&loc).unwrap();
        assert_eq!(out["globalENbId"], json!(null));
        assert!(out.get("globalNgenbId").is_none());
        assert_eq!(out["ueLocationTimestamp"], json!("2024-05-01T10:00:00Z"));
    }

    #[test]
    fn test_nested_missing_required_is_decode_error() {
        let body = json!({ "tai": { "plmnId": { "mcc": "001", "mnc": "01" } }, "ecgi": {} });
        let err = decode_value::<EutraLocation>(body).unwrap_err();
        assert_matches!(err, CodecError::Decode { model: "EutraLocation", .. });
    }

    #[test]
    fn test_validation_reaches_nested_ids() {
        let mut nr = NrLocation::new(Tai::new(plmn(), "00A1"), Ncgi::new(plmn(), "000000001"));
        assert!(nr.validate().is_ok());

        let mut node = GlobalRanNodeId::new(plmn());
        node.g_nb_id = Some(GNbId::new(22, "XYZ"));
        nr.global_gnb_id.set(node);
        let err = nr.validate().unwrap_err();
        assert_eq!(err.model, "GNbId");
    }

    #[test]
    fn test_user_location_empty() {
        let loc: UserLocation = decode_str("{}").unwrap();
        assert_eq!(loc, UserLocation::default());
        let loc: UserLocation = decode_str(r#"{"utraLocation": null}"#).unwrap();
        assert!(loc.utra_location.is_null());
    }

    #[test]
    fn test_ntn_tai_list_checked() {
        let info = NtnTaiInfo::new(PlmnIdNid::new("001", "01"), vec!["00A1".into(), "bad".into()]);
        let err = info.validate().unwrap_err();
        assert_eq!(err.property, "tacList");
    }
}
