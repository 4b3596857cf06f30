use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::commute_error::CommuteError;

pub const BEST_DEPARTURE_TIME_KEY: &str = "bestDepartureTime";
pub const ERROR_KEY: &str = "error";

/// Documented shapes of a `recommend-team-travel` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged, rename = "RecommendationResponse")]
pub enum JsonRecommendationResponse {
    BestDepartureTime {
        #[serde(rename = "bestDepartureTime")]
        best_departure_time: String,
    },
    Error {
        error: String,
    },
}

/// What a successfully received response body turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationResponse {
    BestDepartureTime(String),
    Error(String),
    Unrecognized,
}

impl RecommendationResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        Ok(Self::from_value(&value))
    }

    /// `bestDepartureTime` wins over `error` when both are present. Keys
    /// only count when they hold a string, and any other JSON value than an
    /// object is unrecognized.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return RecommendationResponse::Unrecognized;
        };

        if let Some(best_departure_time) = object.get(BEST_DEPARTURE_TIME_KEY).and_then(Value::as_str)
        {
            RecommendationResponse::BestDepartureTime(best_departure_time.to_owned())
        } else if let Some(error) = object.get(ERROR_KEY).and_then(Value::as_str) {
            RecommendationResponse::Error(error.to_owned())
        } else {
            RecommendationResponse::Unrecognized
        }
    }

    pub fn into_result(self) -> Result<String, CommuteError> {
        match self {
            RecommendationResponse::BestDepartureTime(value) => Ok(value),
            RecommendationResponse::Error(message) => Err(CommuteError::Api(message)),
            RecommendationResponse::Unrecognized => Err(CommuteError::UnexpectedFormat),
        }
    }
}
