use clap::Args;
use commute_client::client_params::{
    CommuteClientParams, ConfigError, parse_api_url, parse_cost_factor,
};

/// Overrides for the `COMMUTE_*` environment configuration.
#[derive(Args, Debug, Default)]
pub struct ClientArgs {
    /// Recommendation endpoint [env: COMMUTE_API_URL]
    #[arg(long)]
    api_url: Option<String>,

    /// Departure address, repeat for every team member [env: COMMUTE_FROM_ADDRESSES]
    #[arg(long = "from", value_name = "ADDRESS")]
    from_addresses: Vec<String>,

    /// Destination address [env: COMMUTE_TO_ADDRESS]
    #[arg(long = "to", value_name = "ADDRESS")]
    to_address: Option<String>,

    /// Weight of travel time against cost [env: COMMUTE_INFRASTRUCTURE_COST_FACTOR]
    #[arg(long)]
    cost_factor: Option<String>,
}

impl ClientArgs {
    pub fn into_params(self) -> Result<CommuteClientParams, ConfigError> {
        self.apply(CommuteClientParams::from_env()?)
    }

    fn apply(self, mut params: CommuteClientParams) -> Result<CommuteClientParams, ConfigError> {
        if let Some(api_url) = self.api_url {
            params = params.with_api_url(parse_api_url(&api_url)?);
        }

        if !self.from_addresses.is_empty() {
            params = params.with_from_addresses(self.from_addresses);
        }

        if let Some(to_address) = self.to_address {
            params = params.with_to_address(to_address);
        }

        if let Some(factor) = self.cost_factor {
            params = params.with_infrastructure_cost_factor(parse_cost_factor(&factor)?);
        }

        Ok(params)
    }
}
