use schemars::JsonSchema;
use serde::{Deserialize, Serialize, ser::Error as _};

use crate::{commute_error::CommuteError, time_window::TimeWindow};

/// Body of the `recommend-team-travel` POST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", rename = "RecommendationRequest")]
pub struct RecommendationRequest {
    /// Window start, `yyyy-MM-dd HH:mm:ss`
    pub start_time_window: String,

    /// Window end, `yyyy-MM-dd HH:mm:ss`
    pub end_time_window: String,

    /// One entry per traveler, always a list
    pub from_addresses: Vec<String>,

    pub to_address: String,

    /// Weight of travel hours against monetary cost on the server side
    pub infrastructure_cost_factor: f64,
}

impl RecommendationRequest {
    pub fn new(
        window: &TimeWindow,
        from_addresses: Vec<String>,
        to_address: String,
        infrastructure_cost_factor: f64,
    ) -> Self {
        RecommendationRequest {
            start_time_window: window.formatted_start(),
            end_time_window: window.formatted_end(),
            from_addresses,
            to_address,
            infrastructure_cost_factor,
        }
    }

    /// Non-finite cost factors are refused, serde_json would write them as
    /// `null`.
    pub fn to_json(&self) -> Result<Vec<u8>, CommuteError> {
        if !self.infrastructure_cost_factor.is_finite() {
            return Err(CommuteError::Encode(serde_json::Error::custom(format!(
                "infrastructureCostFactor {} is not a finite number",
                self.infrastructure_cost_factor
            ))));
        }

        serde_json::to_vec(self).map_err(CommuteError::Encode)
    }
}
