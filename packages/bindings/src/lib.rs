use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[napi]
pub fn validate_payment(config_json: String) -> NapiResult<String> {
    let config: parcela_core::types::PaymentConfig =
        serde_json::from_str(&config_json).map_err(to_napi_error)?;
    let errors = parcela_core::validation::validate_payment(&config);
    serde_json::to_string(&errors).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[napi]
pub fn build_summary(input_json: String) -> NapiResult<String> {
    let input: parcela_core::summary::SummaryInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = parcela_core::summary::build_summary(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

#[napi]
pub fn generate_schedule(input_json: String) -> NapiResult<String> {
    let input: parcela_core::schedule::ScheduleInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = parcela_core::schedule::generate_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[napi]
pub fn render_report(input_json: String) -> NapiResult<String> {
    let input: parcela_core::report::ReportInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = parcela_core::report::render_report(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
