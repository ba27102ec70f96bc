use serde::Deserialize;
use crate::helpers::value_helper::ValueHelper;
use crate::structs::analysis::root_cause::RootCause;

/// The diagnosis block. Absent or malformed lists read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Analysis {
    #[serde(deserialize_with = "ValueHelper::lenient_object")]
    pub root_cause: RootCause,
    #[serde(deserialize_with = "ValueHelper::lenient_string_list")]
    pub fixes: Vec<String>,
    #[serde(deserialize_with = "ValueHelper::lenient_string_list")]
    pub commands: Vec<String>,
    #[serde(deserialize_with = "ValueHelper::lenient_string_list")]
    pub docs: Vec<String>,
}
