pub mod analysis;
pub mod analysis_response;
pub mod root_cause;
