use jiff::civil::DateTime;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument, warn};

use crate::{
    client_params::CommuteClientParams, commute_error::CommuteError,
    display_text::DisplayText, recommendation_request::RecommendationRequest,
    recommendation_response::RecommendationResponse, time_window::TimeWindow,
};

pub struct CommuteClient {
    params: CommuteClientParams,
    client: reqwest::Client,
}

impl CommuteClient {
    pub fn new(params: CommuteClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_client(params: CommuteClientParams, client: reqwest::Client) -> Self {
        Self { params, client }
    }

    pub fn params(&self) -> &CommuteClientParams {
        &self.params
    }

    /// Builds the body for `window`, refusing blank or missing addresses.
    pub fn build_request(&self, window: &TimeWindow) -> Result<RecommendationRequest, CommuteError> {
        if !self.params.has_valid_addresses() {
            return Err(CommuteError::InvalidAddresses);
        }

        Ok(RecommendationRequest::new(
            window,
            self.params.from_addresses.clone(),
            self.params.to_address.clone(),
            self.params.infrastructure_cost_factor,
        ))
    }

    pub async fn request_best_departure_time(&self, start: DateTime, end: DateTime) -> DisplayText {
        self.fetch_best_departure_time(&TimeWindow::new(start, end))
            .await
            .into()
    }

    /// Sends a single POST and returns the server's `bestDepartureTime`.
    /// Nothing is sent when the request cannot be built or encoded.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_best_departure_time(
        &self,
        window: &TimeWindow,
    ) -> Result<String, CommuteError> {
        let request = self.build_request(window)?;
        let body = request.to_json()?;

        debug!(
            "CommuteClient: Posting recommendation request to {} ({} bytes)",
            self.params.api_url,
            body.len()
        );

        let response = self
            .client
            .post(self.params.api_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .inspect_err(|e| warn!("CommuteClient: Request failed: {}", e))?;

        self.handle_response(response).await
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<String, CommuteError> {
        let status = response.status();

        if !status.is_success() {
            warn!("CommuteClient: Server answered with status {}", status);
            return Err(CommuteError::InvalidStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        debug!("CommuteClient: Received {} bytes", bytes.len());

        RecommendationResponse::from_slice(&bytes)
            .map_err(CommuteError::Parse)?
            .into_result()
    }
}
