use serde::Deserialize;
use crate::helpers::value_helper::ValueHelper;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RootCause {
    #[serde(deserialize_with = "ValueHelper::lenient_text")]
    pub short: String,
    #[serde(deserialize_with = "ValueHelper::lenient_text")]
    pub detail: String,
}
