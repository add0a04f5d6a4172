//! Wire types for the weather provider's `current.json` endpoint.
//!
//! Only the fields the dashboard shows are decoded; everything else in the
//! document is ignored.

use serde::Deserialize;

/// Response body of `GET /current.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    pub location: ApiLocation,
    pub current: ApiCurrent,
}

/// `location` object.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiLocation {
    pub name: String,
}

/// `current` object.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCurrent {
    pub temp_c: f64,
    /// 1 during the day, 0 at night
    pub is_day: u8,
    pub condition: ApiCondition,
}

/// `current.condition` object.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCondition {
    pub code: u32,
    #[serde(default)]
    pub text: Option<String>,
}

/// Error body returned with non-success statuses.
///
/// ```json
/// {"error": {"code": 2006, "message": "API key is invalid."}}
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// `error` object.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub code: u32,
    pub message: String,
}
