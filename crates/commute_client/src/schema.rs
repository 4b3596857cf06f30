use schemars::{Schema, schema_for};
use serde::Serialize;

use crate::{
    recommendation_request::RecommendationRequest,
    recommendation_response::JsonRecommendationResponse,
};

#[derive(Serialize)]
struct PayloadSchemas {
    request: Schema,
    response: Schema,
}

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&PayloadSchemas {
        request: schema_for!(RecommendationRequest),
        response: schema_for!(JsonRecommendationResponse),
    })
}
