use serde::{Deserialize, Serialize};

use super::NoProfileMatchReason;
use crate::codec::impl_model;
use crate::presence::is_absent;
use crate::validate::{Check, Validate, ValidationError, SUPPORTED_FEATURES};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QueryParameter {
    pub name: String,
    pub value: String,
}

impl QueryParameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl_model!(QueryParameter, ["name", "value"]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QueryParamCombination {
    pub query_params: Vec<QueryParameter>,
}

impl QueryParamCombination {
    pub fn new(query_params: Vec<QueryParameter>) -> Self {
        Self { query_params }
    }
}

impl_model!(QueryParamCombination, ["queryParams"]);

/// Why NF discovery found no matching profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NoProfileMatchInfo {
    pub reason: NoProfileMatchReason,
    #[serde(skip_serializing_if = "is_absent")]
    pub query_param_combination_list: Option<Vec<QueryParamCombination>>,
}

impl NoProfileMatchInfo {
    pub fn new(reason: NoProfileMatchReason) -> Self {
        Self {
            reason,
            query_param_combination_list: None,
        }
    }
}

impl_model!(NoProfileMatchInfo, ["reason"]);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InvalidParam {
    pub param: String,
    #[serde(skip_serializing_if = "is_absent")]
    pub reason: Option<String>,
}

impl InvalidParam {
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            reason: None,
        }
    }
}

impl_model!(InvalidParam, ["param"]);

/// RFC 7807 problem body with the 3GPP extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProblemDetails {
    #[serde(rename = "type", skip_serializing_if = "is_absent")]
    pub problem_type: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "is_absent")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub instance: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub cause: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub invalid_params: Option<Vec<InvalidParam>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub supported_features: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub nrf_id: Option<String>,
    #[serde(skip_serializing_if = "is_absent")]
    pub supported_api_versions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "is_absent")]
    pub no_profile_match_info: Option<NoProfileMatchInfo>,
}

impl_model!(ProblemDetails);

impl Validate for ProblemDetails {
    fn validate(&self) -> Result<(), ValidationError> {
        Check::new("ProblemDetails").optional(
            "supportedFeatures",
            self.supported_features.as_deref(),
            &SUPPORTED_FEATURES,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, decode_value, encode_value, CodecError};
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_problem_details_type_key() {
        let problem: ProblemDetails = decode_str(
            r#"{"type": "about:blank", "status": 400, "cause": "INVALID_MSG_FORMAT",
                "invalidParams": [{"param": "/medComponents/1/marBwDl", "reason": "pattern"}]}"#,
        )
        .unwrap();
        assert_eq!(problem.problem_type.as_deref(), Some("about:blank"));
        assert_eq!(problem.invalid_params.as_ref().unwrap()[0].param, "/medComponents/1/marBwDl");
        assert_eq!(encode_value(&problem).unwrap()["type"], json!("about:blank"));
    }

    #[test]
    fn test_invalid_param_requires_param() {
        let err = decode_str::<InvalidParam>(r#"{"reason": "x"}"#).unwrap_err();
        assert_matches!(err, CodecError::MissingRequired { property: "param", .. });
    }

    #[test]
    fn test_empty_required_union_round_trips() {
        let info = NoProfileMatchInfo::new(NoProfileMatchReason::default());
        let wire = encode_value(&info).unwrap();
        assert_eq!(wire, json!({ "reason": {} }));
        let back: NoProfileMatchInfo = decode_value(wire).unwrap();
        assert_eq!(back, info);
    }

    #[test]
    fn test_no_profile_match_info() {
        let info: NoProfileMatchInfo = decode_str(
            r#"{"reason": "QUERY_PARAMS_COMBINATION_NO_MATCH",
                "queryParamCombinationList": [{"queryParams": [{"name": "dnn", "value": "ims"}]}]}"#,
        )
        .unwrap();
        assert!(info.reason.is_known());
        let combo = &info.query_param_combination_list.as_ref().unwrap()[0];
        assert_eq!(combo.query_params[0], QueryParameter::new("dnn", "ims"));
    }
}
