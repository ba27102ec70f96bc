use serde::Deserialize;
use serde_json::{Map, Value};
use crate::errors::ReporterResult;
use crate::helpers::value_helper::ValueHelper;
use crate::structs::analysis::analysis::Analysis;
use crate::structs::analysis::root_cause::RootCause;

/// Response of the analysis API.
///
/// Every field is optional on the wire. Missing or wrongly shaped fields fall back to
/// their defaults, so rendering never has to check for absence. The untouched JSON
/// document is kept alongside for the `json` output.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisResponse {
    #[serde(deserialize_with = "ValueHelper::lenient")]
    pub source: Option<String>,
    #[serde(deserialize_with = "ValueHelper::lenient_object")]
    pub analysis: Analysis,
    #[serde(deserialize_with = "ValueHelper::lenient")]
    pub stack: Option<String>,
    #[serde(deserialize_with = "ValueHelper::lenient")]
    pub meta: Map<String, Value>,
    #[serde(skip)]
    pub raw: Value,
}

impl AnalysisResponse {
    /// Parses a response body. Only malformed JSON is an error; any well-formed
    /// document is accepted.
    pub fn from_json(body: &str) -> ReporterResult<Self> {
        let raw: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(raw))
    }

    pub fn from_value(raw: Value) -> Self {
        let mut response: Self = ValueHelper::object_or_default(raw.clone());
        response.raw = raw;
        response
    }

    pub const fn root_cause(&self) -> &RootCause {
        &self.analysis.root_cause
    }

    /// Compact JSON of the original document, `{}` when the document is falsy.
    pub fn to_output_json(&self) -> String {
        if ValueHelper::is_falsy(&self.raw) {
            "{}".to_string()
        } else {
            self.raw.to_string()
        }
    }
}
